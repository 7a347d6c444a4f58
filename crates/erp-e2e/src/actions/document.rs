// DocumentAction - Identity document fields (type, number, issue and expiry)

use super::common::pause;
use super::lookup::LookupAction;
use crate::error::Result;
use crate::selectors;
use playwright_rs::{Locator, Page};

#[derive(Debug, Clone)]
pub struct DocumentAction {
    page: Page,
    lookup: LookupAction,
}

impl DocumentAction {
    pub fn new(page: Page) -> Self {
        let lookup = LookupAction::new(page.clone());
        Self { page, lookup }
    }

    async fn field(&self, selector: &str) -> Locator {
        self.page.locator(selector).await
    }

    pub async fn click_document_type(&self) -> Result<()> {
        self.field("[id*='DocumentTypeId']")
            .await
            .first()
            .click(None)
            .await?;
        pause(1000).await;
        Ok(())
    }

    pub async fn select_document_type(&self, value: &str) -> Result<()> {
        tracing::info!("Select document type: {}", value);
        self.click_document_type().await?;
        self.lookup.select_lookup_option(value).await
    }

    pub async fn fill_document_number(&self, value: &str) -> Result<()> {
        self.field("input[id*=\"DocumentNumber\"]")
            .await
            .fill(value, None)
            .await?;
        Ok(())
    }

    pub async fn fill_date_of_issue(&self, value: &str) -> Result<()> {
        self.field("input[id*=\"DateOfIssue\"]")
            .await
            .fill(value, None)
            .await?;
        Ok(())
    }

    pub async fn fill_place_of_issue(&self, value: &str) -> Result<()> {
        self.field("input[id*=\"PlaceOfIssue\"]")
            .await
            .fill(value, None)
            .await?;
        Ok(())
    }

    pub async fn fill_date_of_expiry(&self, value: &str) -> Result<()> {
        self.field("input[id*=\"DateOfExpiry\"]")
            .await
            .fill(value, None)
            .await?;
        Ok(())
    }

    pub async fn click_add_attachment(&self) -> Result<()> {
        self.field(&selectors::role("button", "Add Attachment…", false))
            .await
            .click(None)
            .await?;
        Ok(())
    }
}
