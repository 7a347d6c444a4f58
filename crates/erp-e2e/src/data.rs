// Test data - JSON fixtures describing the records each batch targets
//
// Every field is optional at parse time: incomplete records are reported as
// skipped by the runner instead of failing the whole file.

use crate::constants::Entity;
use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};

/// Feature switches of the ERP instance under test.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Feature {
    /// Codes are typed by the user instead of generated by the ERP
    pub allow_code_manual: bool,
}

/// Data for the duplicate-code / duplicate-name tests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidateRecord {
    pub code: Option<String>,
    pub name: Option<String>,
}

/// One record targeted by a create, update or delete batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecordDefinition {
    /// Natural key used for existence checks
    pub name: Option<String>,
    pub code: Option<String>,
    pub name_arabic: Option<String>,
    pub description: Option<String>,
    pub document_type: Option<String>,
    pub adjustment_type: Option<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub applicable_companies: Vec<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub expiry_notification_before_days: Option<String>,
    pub positive_adjustment_account: Option<String>,
    pub negative_adjustment_account: Option<String>,
    pub updated_name: Option<String>,
    pub updated_code: Option<String>,
}

impl RecordDefinition {
    /// Creates a record with only its natural key set.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// The natural key, or `None` when missing or blank.
    pub fn key(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.trim().is_empty())
    }
}

/// Contents of one `<entity-slug>.json` fixture file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EntityData {
    pub feature: Feature,
    pub validate: Option<ValidateRecord>,
    pub create: Vec<RecordDefinition>,
    pub update: Vec<RecordDefinition>,
    pub delete: Vec<RecordDefinition>,
}

impl EntityData {
    /// Parses fixture JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a fixture file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let wrap = |source: Error| Error::TestData {
            path: path.to_path_buf(),
            source: Box::new(source),
        };
        let json = std::fs::read_to_string(path).map_err(|e| wrap(e.into()))?;
        Self::from_json(&json).map_err(wrap)
    }

    /// Loads the fixture of `entity` below the test-data root.
    pub fn load_for(data_dir: impl AsRef<Path>, entity: Entity) -> Result<Self> {
        Self::load(fixture_path(data_dir, entity))
    }
}

/// `<root>/<module>/masters/<entity-slug>.json`
pub fn fixture_path(data_dir: impl AsRef<Path>, entity: Entity) -> PathBuf {
    data_dir
        .as_ref()
        .join(entity.module().data_dir())
        .join("masters")
        .join(format!("{}.json", entity.slug()))
}

fn one_or_many<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(value)) if value.trim().is_empty() => Vec::new(),
        Some(OneOrMany::One(value)) => vec![value],
        Some(OneOrMany::Many(values)) => values,
    })
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(serde_json::Number),
    }

    Ok(
        Option::<StringOrNumber>::deserialize(deserializer)?.map(|value| match value {
            StringOrNumber::String(s) => s,
            StringOrNumber::Number(n) => n.to_string(),
        }),
    )
}
