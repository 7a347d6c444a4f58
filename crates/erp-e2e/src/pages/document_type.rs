// DocumentTypePage - Expiry notification and applicable companies fields

use crate::actions::{pause, wait_visible_within};
use crate::error::Result;
use crate::selectors;
use playwright_rs::{Locator, Page};
use std::time::Duration;

const APPLICABLE_COMPANIES: &str = "[name=\"DocumentType.CompanyIds\"]";

const COMPANY_ROW: &str = "tr.dxeListBoxItemRow_Office365";

#[derive(Debug, Clone)]
pub struct DocumentTypePage {
    page: Page,
}

impl DocumentTypePage {
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    /// The labelled input, or the textbox whose name mentions the field id.
    pub async fn expiry_notification_input(&self) -> Locator {
        self.page
            .locator(&selectors::or(
                &selectors::label("Expiry Notification Before Days", false),
                &selectors::role_matching("textbox", "expirynotificationbeforedays", true),
            ))
            .await
            .first()
    }

    pub async fn fill_expiry_notification_before_days(&self, days: &str) -> Result<()> {
        tracing::info!("Fill Expiry Notification Before Days: {}", days);
        self.expiry_notification_input()
            .await
            .fill(days, None)
            .await?;
        Ok(())
    }

    pub async fn open_applicable_companies_dropdown(&self) -> Result<()> {
        self.page
            .locator(APPLICABLE_COMPANIES)
            .await
            .first()
            .click(None)
            .await?;
        Ok(())
    }

    /// Ticks each of `companies` in the multi-select; an empty list leaves it untouched.
    pub async fn select_applicable_companies(&self, companies: &[String]) -> Result<()> {
        if companies.is_empty() {
            return Ok(());
        }
        self.open_applicable_companies_dropdown().await?;

        for company in companies {
            tracing::info!("Select applicable company: {}", company);
            let item = self
                .page
                .locator(&selectors::has_text(COMPANY_ROW, company))
                .await
                .first();
            wait_visible_within(&item, Duration::from_secs(3)).await?;
            item.click(None).await?;
            pause(500).await;
        }
        Ok(())
    }
}
