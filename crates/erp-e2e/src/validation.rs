// Validation - Required-data checks applied before a record is attempted

use crate::constants::DuplicateField;
use crate::data::{Feature, RecordDefinition, ValidateRecord};

/// True when `value` holds at least one non-whitespace character.
pub fn is_non_empty(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// Why a record (or a validation test) is not attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingData {
    Name,
    Code,
    UpdatedName,
    UpdatedCode,
}

impl MissingData {
    pub fn field(&self) -> &'static str {
        match self {
            MissingData::Name => "name",
            MissingData::Code => "code",
            MissingData::UpdatedName => "updatedName",
            MissingData::UpdatedCode => "updatedCode",
        }
    }
}

/// Create needs a name, and a code when codes are entered manually.
pub fn check_create(record: &RecordDefinition, feature: Feature) -> Option<MissingData> {
    if record.key().is_none() {
        Some(MissingData::Name)
    } else if feature.allow_code_manual && !is_non_empty(record.code.as_deref()) {
        Some(MissingData::Code)
    } else {
        None
    }
}

/// Update needs the current name, the new name, and a new code when codes are manual.
pub fn check_update(record: &RecordDefinition, feature: Feature) -> Option<MissingData> {
    if record.key().is_none() {
        Some(MissingData::Name)
    } else if !is_non_empty(record.updated_name.as_deref()) {
        Some(MissingData::UpdatedName)
    } else if feature.allow_code_manual && !is_non_empty(record.updated_code.as_deref()) {
        Some(MissingData::UpdatedCode)
    } else {
        None
    }
}

/// Delete only needs the name.
pub fn check_delete(record: &RecordDefinition) -> Option<MissingData> {
    record.key().is_none().then_some(MissingData::Name)
}

/// Duplicate-code checks need manual codes plus both values; duplicate-name checks need a name.
pub fn check_duplicate(
    field: DuplicateField,
    record: Option<&ValidateRecord>,
    feature: Feature,
) -> Option<MissingData> {
    let name = record.and_then(|r| r.name.as_deref());
    let code = record.and_then(|r| r.code.as_deref());
    match field {
        DuplicateField::Code if !feature.allow_code_manual || !is_non_empty(code) => {
            Some(MissingData::Code)
        }
        _ if !is_non_empty(name) => Some(MissingData::Name),
        _ => None,
    }
}
