//! Emitter
//!
//! Renders the extracted taxonomy as Rust source text: one exhaustive
//! enumeration plus four total mapping functions, one per attribute. Each
//! mapping function has exactly one arm per variant, in extractor order, and
//! no default arm, so the consumer's compiler flags any future omission.
//!
//! Rendering is plain string construction. The grammar is small and fixed;
//! a templating engine would buy nothing here.

mod error;

pub use error::EmitError;

use crate::extractor::Extraction;
use crate::logging::codes;
use crate::registry::ErrorDefinition;
use crate::{log_debug, log_success};
use std::fmt::Write;

/// Name of the emitted enumeration
pub const ENUM_NAME: &str = "RestApiError";

const INDENT: &str = "    ";

const HEADER: &str = "\
// Generated error taxonomy for the REST gateway.
// DO NOT EDIT - regenerate with aet_generator.
";

/// Render the complete generated artifact
pub fn render(extraction: &Extraction) -> Result<String, EmitError> {
    log_debug!("Rendering taxonomy artifact", "variants" => extraction.len());

    let mut out = String::new();

    out.push_str(HEADER);
    out.push('\n');

    render_enum(&mut out, extraction)?;
    render_impl(&mut out, extraction)?;

    log_success!(
        codes::success::EMISSION_COMPLETE,
        "Taxonomy artifact rendered",
        "variants" => extraction.len(),
        "bytes" => out.len()
    );

    Ok(out)
}

/// Render the enumeration declaration
fn render_enum(out: &mut String, extraction: &Extraction) -> Result<(), EmitError> {
    writeln!(
        out,
        "#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]"
    )?;
    writeln!(out, "pub enum {} {{", ENUM_NAME)?;
    for name in extraction.names() {
        writeln!(out, "{}{},", INDENT, name)?;
    }
    writeln!(out, "}}")?;
    Ok(())
}

/// Render the impl block with the four mapping functions
fn render_impl(out: &mut String, extraction: &Extraction) -> Result<(), EmitError> {
    writeln!(out, "impl {} {{", ENUM_NAME)?;

    writeln!(out)?;
    render_mapping_fn(out, extraction, "status_code", "u16", |def| {
        def.status_code.to_string()
    })?;

    writeln!(out)?;
    render_mapping_fn(out, extraction, "api_code", "u8", |def| {
        def.api_code.to_string()
    })?;

    writeln!(out)?;
    render_mapping_fn(out, extraction, "title", "&'static str", |def| {
        quoted(&def.title)
    })?;

    writeln!(out)?;
    render_mapping_fn(out, extraction, "message", "&'static str", |def| {
        quoted(&def.message)
    })?;

    writeln!(out, "}}")?;
    Ok(())
}

/// Render one total mapping function: an exhaustive match with one arm per
/// variant and no default arm
fn render_mapping_fn(
    out: &mut String,
    extraction: &Extraction,
    fn_name: &str,
    return_type: &str,
    render_value: impl Fn(&ErrorDefinition) -> String,
) -> Result<(), EmitError> {
    writeln!(out, "{}pub fn {}(self) -> {} {{", INDENT, fn_name, return_type)?;
    writeln!(out, "{}use {}::*;", INDENT.repeat(2), ENUM_NAME)?;
    writeln!(out, "{}match self {{", INDENT.repeat(2))?;
    for def in extraction.definitions() {
        writeln!(
            out,
            "{}{} => {},",
            INDENT.repeat(3),
            def.name,
            render_value(def)
        )?;
    }
    writeln!(out, "{}}}", INDENT.repeat(2))?;
    writeln!(out, "{}}}", INDENT)?;
    Ok(())
}

/// Render a string attribute as a quoted Rust literal
fn quoted(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('"');
    for c in value.chars() {
        match c {
            '"' => literal.push_str("\\\""),
            '\\' => literal.push_str("\\\\"),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            _ => literal.push(c),
        }
    }
    literal.push('"');
    literal
}

/// Validate emitter logging integration
pub fn init_emitter_logging() -> Result<(), String> {
    for code in [
        codes::emitter::RENDER_FAILURE,
        codes::emitter::ARTIFACT_WRITE_FAILURE,
    ] {
        if codes::get_description(code.as_str()) == "Unknown error" {
            return Err(format!(
                "Emitter logging code {} has no metadata",
                code.as_str()
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor;
    use crate::registry::{self, RawErrorDefinition};

    fn scenario_a() -> Extraction {
        let registry = registry::load_from(&[
            RawErrorDefinition {
                name: "BlockNotFound",
                api_code: Some(70),
                status_code: Some(404),
                title: Some("Block Not Found"),
                message: Some("There is no block with the id specified in the blockchain."),
            },
            RawErrorDefinition {
                name: "BatchNotFound",
                api_code: Some(71),
                status_code: Some(404),
                title: Some("Batch Not Found"),
                message: Some("There is no batch with the id specified in the blockchain."),
            },
        ])
        .unwrap();
        extractor::extract(&registry).unwrap()
    }

    #[test]
    fn test_enum_variants_in_alphabetical_order() {
        let source = render(&scenario_a()).unwrap();

        let batch = source.find("    BatchNotFound,").unwrap();
        let block = source.find("    BlockNotFound,").unwrap();
        assert!(batch < block);
        assert!(source.contains("pub enum RestApiError {"));
    }

    #[test]
    fn test_mapping_functions_present_and_typed() {
        let source = render(&scenario_a()).unwrap();

        assert!(source.contains("pub fn status_code(self) -> u16 {"));
        assert!(source.contains("pub fn api_code(self) -> u8 {"));
        assert!(source.contains("pub fn title(self) -> &'static str {"));
        assert!(source.contains("pub fn message(self) -> &'static str {"));
    }

    #[test]
    fn test_round_trip_fidelity_of_literals() {
        let source = render(&scenario_a()).unwrap();

        assert!(source.contains("BatchNotFound => 404,"));
        assert!(source.contains("BlockNotFound => 70,"));
        assert!(source.contains("BatchNotFound => \"Batch Not Found\","));
        assert!(source.contains(
            "BlockNotFound => \"There is no block with the id specified in the blockchain.\","
        ));
    }

    #[test]
    fn test_exhaustiveness_one_arm_per_variant_per_function() {
        let source = render(&scenario_a()).unwrap();

        for name in ["BatchNotFound", "BlockNotFound"] {
            // One enum variant line plus one arm in each of the four functions
            let arms = source.matches(&format!("{} =>", name)).count();
            assert_eq!(arms, 4, "wrong arm count for {}", name);
            let variants = source.matches(&format!("    {},\n", name)).count();
            assert_eq!(variants, 1, "wrong variant count for {}", name);
        }
    }

    #[test]
    fn test_no_default_arm() {
        let source = render(&scenario_a()).unwrap();
        assert!(!source.contains("_ =>"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let extraction = scenario_a();
        let a = render(&extraction).unwrap();
        let b = render(&extraction).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_extraction_renders_vacuous_artifact() {
        let registry = registry::load_from(&[]).unwrap();
        let extraction = extractor::extract(&registry).unwrap();
        let source = render(&extraction).unwrap();

        assert!(source.contains("pub enum RestApiError {\n}\n"));
        // All four mapping functions exist with empty match bodies
        assert_eq!(source.matches("match self {\n        }").count(), 4);
        assert!(!source.contains("=>"));
    }

    #[test]
    fn test_string_escaping() {
        assert_eq!(quoted("plain"), "\"plain\"");
        assert_eq!(quoted("a \"quoted\" word"), "\"a \\\"quoted\\\" word\"");
        assert_eq!(quoted("back\\slash"), "\"back\\\\slash\"");
        assert_eq!(quoted("line\nbreak"), "\"line\\nbreak\"");
    }

    #[test]
    fn test_full_catalog_renders() {
        let registry = registry::load().unwrap();
        let extraction = extractor::extract(&registry).unwrap();
        let source = render(&extraction).unwrap();

        // Every definition appears as a variant and in all four tables
        for def in extraction.definitions() {
            assert_eq!(source.matches(&format!("{} =>", def.name)).count(), 4);
        }
        // Spot-check wire-stable values against the catalog
        assert!(source.contains("BatchQueueFull => 429,"));
        assert!(source.contains("SendBackoffTimeout => \"Send timed out\","));
    }

    #[test]
    fn test_init_emitter_logging() {
        assert!(init_emitter_logging().is_ok());
    }
}
