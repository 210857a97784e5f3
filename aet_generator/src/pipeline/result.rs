use crate::registry::RegistryError;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Complete result of a generation run
#[derive(Debug)]
pub struct GenerationResult {
    pub source: String,
    pub definition_count: usize,
    pub bytes_emitted: usize,
    pub processing_duration: Duration,
    pub completed_at: DateTime<Utc>,
}

impl GenerationResult {
    pub fn new(source: String, definition_count: usize, processing_duration: Duration) -> Self {
        let bytes_emitted = source.len();
        Self {
            source,
            definition_count,
            bytes_emitted,
            processing_duration,
            completed_at: Utc::now(),
        }
    }

    pub fn log_success(&self) {
        if crate::logging::config::log_performance_events() {
            crate::log_success!(
                crate::logging::codes::success::GENERATION_COMPLETE,
                "Taxonomy generation pipeline succeeded",
                "definitions" => self.definition_count,
                "bytes" => self.bytes_emitted,
                "duration_ms" => format!("{:.2}", self.processing_duration.as_secs_f64() * 1000.0),
                "completed_at" => self.completed_at.to_rfc3339()
            );
        } else {
            crate::log_success!(
                crate::logging::codes::success::GENERATION_COMPLETE,
                "Taxonomy generation pipeline succeeded",
                "definitions" => self.definition_count
            );
        }
    }
}

/// Result of a `--check` lint pass over the catalog
#[derive(Debug)]
pub struct CheckReport {
    pub catalog_size: usize,
    pub defects: Vec<RegistryError>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.defects.is_empty()
    }

    /// Plain-text report, one line per defect
    pub fn report(&self) -> String {
        if self.is_clean() {
            return format!(
                "catalog clean: {} definitions, 0 defects",
                self.catalog_size
            );
        }

        let mut out = format!(
            "catalog defective: {} definitions, {} defects\n",
            self.catalog_size,
            self.defects.len()
        );
        for defect in &self.defects {
            out.push_str(&format!(
                "  [{}] {}\n",
                defect.error_code().as_str(),
                defect
            ));
        }
        out
    }

    /// JSON report for tooling integration
    pub fn report_json(&self) -> Result<String, serde_json::Error> {
        let defects: Vec<serde_json::Value> = self
            .defects
            .iter()
            .map(|d| {
                serde_json::json!({
                    "code": d.error_code().as_str(),
                    "message": d.to_string(),
                })
            })
            .collect();

        serde_json::to_string_pretty(&serde_json::json!({
            "catalog_size": self.catalog_size,
            "clean": self.is_clean(),
            "defects": defects,
        }))
    }
}
