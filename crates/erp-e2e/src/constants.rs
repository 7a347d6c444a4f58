// Constants - UI labels and identifiers shared by actions and tests
//
// Values must exactly match what the ERP renders (case-sensitive).
// Centralized here so tests never carry hardcoded strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Toolbar and menu labels, matched against visible text or `title` attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Setups,
    New,
    View,
    Edit,
    Delete,
    Refresh,
    Save,
    Approve,
}

impl MenuOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuOption::Setups => "Setups",
            MenuOption::New => "New",
            MenuOption::View => "View",
            MenuOption::Edit => "Edit",
            MenuOption::Delete => "Delete",
            MenuOption::Refresh => "Refresh",
            MenuOption::Save => "Save",
            MenuOption::Approve => "Approve",
        }
    }
}

/// Lookup view identifiers, used as the id fragment of a lookup editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupView {
    DocumentType,
    AdjustmentType,
    PositiveAdjustmentAccount,
    NegativeAdjustmentAccount,
}

impl LookupView {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupView::DocumentType => "DocumentType",
            LookupView::AdjustmentType => "AdjustmentType",
            LookupView::PositiveAdjustmentAccount => "PositiveAdjustmentMainAccount",
            LookupView::NegativeAdjustmentAccount => "NegativeAdjustmentMainAccount",
        }
    }
}

/// ERP modules reachable from the "Change module" switcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppModule {
    Accounting,
    Sales,
    Purchase,
    Inventory,
}

impl AppModule {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppModule::Accounting => "Accounting",
            AppModule::Sales => "Sales",
            AppModule::Purchase => "Purchase",
            AppModule::Inventory => "Inventory",
        }
    }

    /// Directory name of this module under the test-data root.
    pub fn data_dir(&self) -> &'static str {
        match self {
            AppModule::Accounting => "accounting",
            AppModule::Sales => "sales",
            AppModule::Purchase => "purchase",
            AppModule::Inventory => "inventory",
        }
    }
}

/// Master-data entities covered by the suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    DocumentType,
    StockAdjustmentReason,
}

impl Entity {
    /// Display name, as shown in the setup links and the form breadcrumb.
    pub fn name(&self) -> &'static str {
        match self {
            Entity::DocumentType => "Document Type",
            Entity::StockAdjustmentReason => "Stock Adjustment Reason",
        }
    }

    /// Model key used in form field names (`DocumentType.Name`) and toast texts.
    pub fn key(&self) -> &'static str {
        match self {
            Entity::DocumentType => "DocumentType",
            Entity::StockAdjustmentReason => "StockAdjustmentReason",
        }
    }

    /// Kebab-case slug used for fixture and summary file names.
    pub fn slug(&self) -> &'static str {
        match self {
            Entity::DocumentType => "document-type",
            Entity::StockAdjustmentReason => "stock-adjustment-reason",
        }
    }

    pub fn module(&self) -> AppModule {
        match self {
            Entity::DocumentType | Entity::StockAdjustmentReason => AppModule::Inventory,
        }
    }

    pub fn all() -> [Entity; 2] {
        [Entity::DocumentType, Entity::StockAdjustmentReason]
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Column indexes of the master listing grid; column 0 holds the row selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingColumn {
    Code,
    Name,
}

impl ListingColumn {
    pub fn index(&self) -> usize {
        match self {
            ListingColumn::Code => 1,
            ListingColumn::Name => 2,
        }
    }
}

/// CRUD operation a batch performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrudAction {
    Create,
    Update,
    Delete,
}

impl CrudAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            CrudAction::Create => "Create",
            CrudAction::Update => "Update",
            CrudAction::Delete => "Delete",
        }
    }

    /// Noun used in failure messages ("creation failed for: ...").
    pub fn noun(&self) -> &'static str {
        match self {
            CrudAction::Create => "creation",
            CrudAction::Update => "update",
            CrudAction::Delete => "deletion",
        }
    }

    /// Past participle shown in success toasts ("... created successfully").
    pub fn past_tense(&self) -> &'static str {
        match self {
            CrudAction::Create => "created",
            CrudAction::Update => "updated",
            CrudAction::Delete => "deleted",
        }
    }
}

impl fmt::Display for CrudAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field whose uniqueness a validation test exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DuplicateField {
    Code,
    Name,
}

impl DuplicateField {
    pub fn as_str(&self) -> &'static str {
        match self {
            DuplicateField::Code => "Code",
            DuplicateField::Name => "Name",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_identifiers() {
        assert_eq!(Entity::DocumentType.name(), "Document Type");
        assert_eq!(Entity::DocumentType.key(), "DocumentType");
        assert_eq!(
            Entity::StockAdjustmentReason.slug(),
            "stock-adjustment-reason"
        );
        assert_eq!(Entity::StockAdjustmentReason.module(), AppModule::Inventory);
    }

    #[test]
    fn test_crud_action_wording() {
        assert_eq!(CrudAction::Create.noun(), "creation");
        assert_eq!(CrudAction::Delete.past_tense(), "deleted");
        assert_eq!(CrudAction::Update.to_string(), "Update");
    }
}
