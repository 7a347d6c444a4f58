// Summary - Per-batch outcome reports, logged and exported as JSON
//
// One file per batch: `<entity-slug>-<action>.json` for CRUD batches and
// `<entity-slug>-validate-<field>.json` for duplicate checks. Files are
// overwritten on every run.

use crate::constants::{CrudAction, DuplicateField, Entity};
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Outcome of one CRUD batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrudSummary {
    pub entity_name: String,
    pub action: CrudAction,
    pub success_records: Vec<String>,
    pub skipped_records: Vec<String>,
    pub failed_records: Vec<String>,
    pub total_count: usize,
    pub generated_at: DateTime<Utc>,
}

impl CrudSummary {
    pub fn has_failures(&self) -> bool {
        !self.failed_records.is_empty()
    }

    /// Emits the summary through `tracing`.
    pub fn log(&self) {
        tracing::info!(
            entity = %self.entity_name,
            action = %self.action,
            total = self.total_count,
            success = self.success_records.len(),
            skipped = self.skipped_records.len(),
            failed = self.failed_records.len(),
            "{} | {} summary",
            self.entity_name,
            self.action
        );
        if !self.success_records.is_empty() {
            tracing::info!("  {}: {}", self.action.past_tense(), self.success_records.join(", "));
        }
        if !self.skipped_records.is_empty() {
            tracing::warn!("  skipped: {}", self.skipped_records.join(", "));
        }
        if !self.failed_records.is_empty() {
            tracing::error!("  failed: {}", self.failed_records.join(", "));
        }
    }

    pub fn file_name(&self) -> String {
        format!(
            "{}-{}.json",
            slugify(&self.entity_name),
            self.action.as_str().to_ascii_lowercase()
        )
    }
}

/// Outcome of one duplicate-value validation test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationSummary {
    pub entity_name: String,
    #[serde(rename = "type")]
    pub field: DuplicateField,
    pub value: String,
    pub generated_at: DateTime<Utc>,
}

impl ValidationSummary {
    pub fn new(entity: Entity, field: DuplicateField, value: impl Into<String>) -> Self {
        Self {
            entity_name: entity.name().to_string(),
            field,
            value: value.into(),
            generated_at: Utc::now(),
        }
    }

    pub fn log(&self) {
        tracing::info!(
            entity = %self.entity_name,
            field = self.field.as_str(),
            "{} | duplicate {} '{}' rejected",
            self.entity_name,
            self.field.as_str().to_ascii_lowercase(),
            self.value
        );
    }

    pub fn file_name(&self) -> String {
        format!(
            "{}-validate-{}.json",
            slugify(&self.entity_name),
            self.field.as_str().to_ascii_lowercase()
        )
    }
}

/// Writes summaries below one directory.
#[derive(Debug, Clone)]
pub struct SummaryReporter {
    dir: PathBuf,
}

impl SummaryReporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes `summary` as pretty JSON and returns the file path.
    pub fn export_crud(&self, summary: &CrudSummary) -> Result<PathBuf> {
        self.write(&summary.file_name(), summary)
    }

    pub fn export_validation(&self, summary: &ValidationSummary) -> Result<PathBuf> {
        self.write(&summary.file_name(), summary)
    }

    /// Logs then exports; an export failure is logged, never returned.
    pub fn log_and_export_crud(&self, summary: &CrudSummary) {
        summary.log();
        if let Err(e) = self.export_crud(summary) {
            tracing::warn!("Failed to export {} summary: {}", summary.file_name(), e);
        }
    }

    pub fn log_and_export_validation(&self, summary: &ValidationSummary) {
        summary.log();
        if let Err(e) = self.export_validation(summary) {
            tracing::warn!("Failed to export {} summary: {}", summary.file_name(), e);
        }
    }

    fn write<T: Serialize>(&self, file_name: &str, summary: &T) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(file_name);
        std::fs::write(&path, serde_json::to_vec_pretty(summary)?)?;
        tracing::debug!("Summary exported to {}", path.display());
        Ok(path)
    }
}

/// Lowercases and joins words with `-` ("Document Type" -> "document-type").
pub fn slugify(name: &str) -> String {
    name.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}
