// StockAdjustmentReasonPage - Lookup icons of the stock adjustment reason form

use crate::actions::{pause, wait_visible_within};
use crate::error::Result;
use playwright_rs::{Locator, Page};
use std::time::Duration;

const DOCUMENT_TYPE: &str = "[id*=\"DocumentType_B-1Img\"]";
const ADJUSTMENT_TYPE: &str = "[id*=\"AdjustmentType_B-1Img\"]";
const POSITIVE_ADJUSTMENT_ACCOUNT: &str = "[id*=\"PositiveAdjustmentMainAccountIdLookup_B-1Img\"]";
const NEGATIVE_ADJUSTMENT_ACCOUNT: &str = "[id*=\"NegativeAdjustmentMainAccountIdLookup_B-1Img\"]";

#[derive(Debug, Clone)]
pub struct StockAdjustmentReasonPage {
    page: Page,
}

impl StockAdjustmentReasonPage {
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    async fn icon(&self, selector: &str) -> Locator {
        self.page.locator(selector).await.first()
    }

    async fn open_lookup(&self, selector: &str) -> Result<()> {
        let icon = self.icon(selector).await;
        wait_visible_within(&icon, Duration::from_secs(5)).await?;
        icon.click(None).await?;
        pause(500).await;
        Ok(())
    }

    pub async fn open_document_type(&self) -> Result<()> {
        tracing::info!("Open Document Type lookup");
        self.open_lookup(DOCUMENT_TYPE).await
    }

    pub async fn open_adjustment_type(&self) -> Result<()> {
        tracing::info!("Open Adjustment Type lookup");
        self.open_lookup(ADJUSTMENT_TYPE).await
    }

    pub async fn open_positive_adjustment_account(&self) -> Result<()> {
        tracing::info!("Open Positive Adjustment Account lookup");
        self.open_lookup(POSITIVE_ADJUSTMENT_ACCOUNT).await
    }

    pub async fn open_negative_adjustment_account(&self) -> Result<()> {
        tracing::info!("Open Negative Adjustment Account lookup");
        self.open_lookup(NEGATIVE_ADJUSTMENT_ACCOUNT).await
    }
}
