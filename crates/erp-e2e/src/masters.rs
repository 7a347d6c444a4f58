// Copyright 2026 Paul Adamson
// Licensed under the Apache License, Version 2.0
//
// Master workflows - Create, edit, delete and duplicate checks on master screens
//
// `MasterScreen` performs the steps every master form shares (toolbar, code,
// names, save, toast). Other fields, description included, come from a `MasterForm`.

use crate::constants::{CrudAction, DuplicateField, Entity, ListingColumn, LookupView, MenuOption};
use crate::data::{Feature, RecordDefinition, ValidateRecord};
use crate::error::{Error, Result};
use crate::fixture::App;
use crate::pages::{DocumentTypePage, StockAdjustmentReasonPage};
use crate::runner::{CrudWorkflow, DeleteOutcome};
use crate::validation::is_non_empty;
use playwright_rs::expect;
use std::time::Duration;

/// Message shown when a code or name is already taken.
const DUPLICATE_MESSAGE: &str = "(?i)already exists";

/// Fields a master form adds on top of the shared code and names.
#[allow(async_fn_in_trait)]
pub trait MasterForm {
    fn entity(&self) -> Entity;

    /// Fills the entity-specific fields present in `record`, skipping empty ones.
    async fn fill_details(&self, app: &App, record: &RecordDefinition) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct DocumentTypeForm {
    page: DocumentTypePage,
}

impl DocumentTypeForm {
    pub fn new(app: &App) -> Self {
        Self {
            page: DocumentTypePage::new(app.page.clone()),
        }
    }
}

impl MasterForm for DocumentTypeForm {
    fn entity(&self) -> Entity {
        Entity::DocumentType
    }

    async fn fill_details(&self, app: &App, record: &RecordDefinition) -> Result<()> {
        if let Some(description) = non_empty(&record.description) {
            app.header.fill_description(description).await?;
        }
        if let Some(days) = non_empty(&record.expiry_notification_before_days) {
            self.page.fill_expiry_notification_before_days(days).await?;
        }
        self.page
            .select_applicable_companies(&record.applicable_companies)
            .await
    }
}

#[derive(Debug, Clone)]
pub struct StockAdjustmentReasonForm {
    page: StockAdjustmentReasonPage,
}

impl StockAdjustmentReasonForm {
    pub fn new(app: &App) -> Self {
        Self {
            page: StockAdjustmentReasonPage::new(app.page.clone()),
        }
    }
}

impl MasterForm for StockAdjustmentReasonForm {
    fn entity(&self) -> Entity {
        Entity::StockAdjustmentReason
    }

    async fn fill_details(&self, app: &App, record: &RecordDefinition) -> Result<()> {
        if let Some(document_type) = non_empty(&record.document_type) {
            app.lookup
                .open_lookup_and_select_item(LookupView::DocumentType, document_type)
                .await?;
        }
        if let Some(adjustment_type) = non_empty(&record.adjustment_type) {
            app.lookup
                .open_lookup_and_select_item(LookupView::AdjustmentType, adjustment_type)
                .await?;
        }
        if let Some(account) = non_empty(&record.positive_adjustment_account) {
            self.page.open_positive_adjustment_account().await?;
            app.lookup.search_and_select(account).await?;
        }
        if let Some(account) = non_empty(&record.negative_adjustment_account) {
            self.page.open_negative_adjustment_account().await?;
            app.lookup.search_and_select(account).await?;
        }
        Ok(())
    }
}

/// A master listing and its form, driven through the shared actions.
pub struct MasterScreen<'a, F> {
    app: &'a App,
    form: F,
}

impl<'a, F: MasterForm> MasterScreen<'a, F> {
    pub fn new(app: &'a App, form: F) -> Self {
        Self { app, form }
    }

    /// Opens the entity's module and its listing.
    pub async fn open(&self) -> Result<()> {
        self.app.open_master(self.form.entity()).await
    }

    async fn fill_header(
        &self,
        code: Option<&str>,
        name: &str,
        record: &RecordDefinition,
        feature: Feature,
    ) -> Result<()> {
        if let Some(code) = code.filter(|c| feature.allow_code_manual && is_non_empty(Some(*c))) {
            self.app.header.fill_code(code).await?;
        }
        self.app.header.fill_name(name).await?;
        if let Some(name_arabic) = non_empty(&record.name_arabic) {
            self.app.header.fill_name_arabic(name_arabic).await?;
        }
        Ok(())
    }

    async fn save(&self) -> Result<()> {
        self.app.menu.click_top_menu_option(MenuOption::Save).await
    }
}

impl<F: MasterForm> CrudWorkflow for MasterScreen<'_, F> {
    fn entity(&self) -> Entity {
        self.form.entity()
    }

    async fn exists(&self, name: &str) -> bool {
        self.app
            .listing
            .is_record_visible_by_exact_text(name, ListingColumn::Name.index())
            .await
    }

    async fn create(&self, record: &RecordDefinition, feature: Feature) -> Result<()> {
        let name = record.key().unwrap_or_default();
        tracing::info!("Create {}: {}", self.entity(), name);
        self.app
            .menu
            .click_menu_option_by_title(MenuOption::New)
            .await?;
        self.fill_header(record.code.as_deref(), name, record, feature)
            .await?;
        self.form.fill_details(self.app, record).await?;
        self.save().await?;
        self.app
            .toast
            .assert_text_toast(self.entity().key(), CrudAction::Create)
            .await
    }

    async fn update(&self, record: &RecordDefinition, feature: Feature) -> Result<()> {
        let name = record.key().unwrap_or_default();
        let updated_name = record.updated_name.as_deref().unwrap_or_default();
        tracing::info!("Update {}: {} → {}", self.entity(), name, updated_name);
        self.app.listing.select_record_by_name(name).await?;
        self.app
            .menu
            .click_menu_option_by_title(MenuOption::Edit)
            .await?;
        self.fill_header(record.updated_code.as_deref(), updated_name, record, feature)
            .await?;
        self.form.fill_details(self.app, record).await?;
        self.save().await?;

        let saved_name = self
            .app
            .page
            .locator(&format!("input[name='{}.Name']", self.entity().key()))
            .await
            .first();
        expect(saved_name)
            .with_timeout(Duration::from_secs(5))
            .to_have_value(updated_name)
            .await
            .map_err(|e| Error::Assertion(format!("saved name is not '{}': {}", updated_name, e)))
    }

    async fn delete(&self, name: &str, retries: u32) -> DeleteOutcome {
        self.app
            .master_delete
            .safe_delete_by_name(self.entity(), name, ListingColumn::Name, retries)
            .await
    }

    async fn submit_duplicate(&self, field: DuplicateField, record: &ValidateRecord) -> Result<()> {
        tracing::info!("Submit duplicate {} for {}", field.as_str(), self.entity());
        self.app
            .menu
            .click_menu_option_by_title(MenuOption::New)
            .await?;
        if field == DuplicateField::Code
            && let Some(code) = non_empty(&record.code)
        {
            self.app.header.fill_code(code).await?;
        }
        if let Some(name) = non_empty(&record.name) {
            self.app.header.fill_name(name).await?;
        }
        self.save().await?;
        self.app
            .toast
            .assert_validation_message(DUPLICATE_MESSAGE)
            .await
    }

    async fn return_to_listing(&self) -> Result<()> {
        self.app
            .menu
            .navigate_back_to_listing(self.entity().name())
            .await
    }

    async fn reload(&self) -> Result<()> {
        self.app.common.reload().await?;
        self.app.common.wait_for_network_idle().await
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| is_non_empty(Some(*v)))
}
