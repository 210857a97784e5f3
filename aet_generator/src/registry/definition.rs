//! Error definition records
//!
//! `RawErrorDefinition` is the authored form: every attribute other than the
//! name may be absent, which is how the catalog can express the structural
//! defect "attribute never set". `ErrorDefinition` is the validated form the
//! rest of the pipeline works with.

use serde::{Deserialize, Serialize};

/// Attribute names, in the order they are validated and emitted
pub const REQUIRED_ATTRIBUTES: [&str; 4] = ["api_code", "status_code", "title", "message"];

/// An authored error definition record
#[derive(Debug, Clone, Copy)]
pub struct RawErrorDefinition {
    /// Variant tag in the emitted enumeration
    pub name: &'static str,

    /// Fixed code included in the JSON error response. Once established,
    /// this code never changes.
    pub api_code: Option<u8>,

    /// HTTP status for the response
    pub status_code: Option<u16>,

    /// Short headline for the error
    pub title: Option<&'static str>,

    /// Human-readable description of the error
    pub message: Option<&'static str>,
}

impl RawErrorDefinition {
    /// First required attribute that is unset, if any
    pub fn missing_attribute(&self) -> Option<&'static str> {
        self.missing_attributes().into_iter().next()
    }

    /// Every required attribute that is unset
    pub fn missing_attributes(&self) -> Vec<&'static str> {
        let present = [
            self.api_code.is_some(),
            self.status_code.is_some(),
            self.title.is_some(),
            self.message.is_some(),
        ];

        REQUIRED_ATTRIBUTES
            .iter()
            .zip(present)
            .filter_map(|(attribute, set)| if set { None } else { Some(*attribute) })
            .collect()
    }

    /// Check whether all four required attributes are present
    pub fn is_complete(&self) -> bool {
        self.api_code.is_some()
            && self.status_code.is_some()
            && self.title.is_some()
            && self.message.is_some()
    }
}

/// A validated error definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDefinition {
    pub name: String,
    pub api_code: u8,
    pub status_code: u16,
    pub title: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_raw() -> RawErrorDefinition {
        RawErrorDefinition {
            name: "BlockNotFound",
            api_code: Some(70),
            status_code: Some(404),
            title: Some("Block Not Found"),
            message: Some("There is no block with the id specified in the blockchain."),
        }
    }

    #[test]
    fn test_complete_definition_has_no_missing_attributes() {
        let raw = complete_raw();
        assert!(raw.is_complete());
        assert_eq!(raw.missing_attribute(), None);
        assert!(raw.missing_attributes().is_empty());
    }

    #[test]
    fn test_missing_attribute_reports_first_unset() {
        let raw = RawErrorDefinition {
            message: None,
            ..complete_raw()
        };
        assert!(!raw.is_complete());
        assert_eq!(raw.missing_attribute(), Some("message"));
    }

    #[test]
    fn test_missing_attributes_reports_all_unset() {
        let raw = RawErrorDefinition {
            name: "Bare",
            api_code: None,
            status_code: None,
            title: None,
            message: None,
        };
        assert_eq!(
            raw.missing_attributes(),
            vec!["api_code", "status_code", "title", "message"]
        );
    }
}
