//! erp-e2e: Page-object end-to-end suite for the ERP master-data screens
//!
//! Actions wrap one family of UI interactions each, page objects cover the
//! fields a single master form adds, and [`BatchRunner`] drives create,
//! update, delete and duplicate-validation batches loaded from JSON fixtures.
//!
//! # Examples
//!
//! ## Create every Document Type of a fixture
//!
//! ```ignore
//! use erp_e2e::{
//!     BatchRunner, Config, DocumentTypeForm, Entity, EntityData, MasterScreen, Session,
//!     SummaryReporter,
//! };
//!
//! #[tokio::main]
//! async fn main() -> erp_e2e::Result<()> {
//!     let config = Config::from_env()?;
//!     let data = EntityData::load_for(&config.test_data_dir, Entity::DocumentType)?;
//!     let reporter = SummaryReporter::new(&config.summary_dir);
//!
//!     let session = Session::launch(&config).await?;
//!     let app = session.app();
//!     let screen = MasterScreen::new(&app, DocumentTypeForm::new(&app));
//!     screen.open().await?;
//!
//!     BatchRunner::new(&screen, data.feature, &reporter)
//!         .create_all(&data.create)
//!         .await?;
//!
//!     session.close().await
//! }
//! ```

pub mod actions;
pub mod config;
pub mod constants;
pub mod data;
mod error;
pub mod fixture;
pub mod masters;
pub mod pages;
pub mod runner;
pub mod selectors;
pub mod summary;
pub mod validation;

// Re-export error types
pub use error::{Error, Result};

// Re-export the composition root
pub use config::{BrowserKind, Config};
pub use fixture::{App, Session};

// Re-export fixture and reporting types
pub use constants::{
    AppModule, CrudAction, DuplicateField, Entity, ListingColumn, LookupView, MenuOption,
};
pub use data::{EntityData, Feature, RecordDefinition, ValidateRecord};
pub use summary::{CrudSummary, SummaryReporter, ValidationSummary};

// Re-export master workflows and the batch runner
pub use masters::{DocumentTypeForm, MasterForm, MasterScreen, StockAdjustmentReasonForm};
pub use runner::{BatchRunner, CrudWorkflow, DeleteOutcome, UNKNOWN_RECORD};
