// SetupAction - Links on the module's Setups screen

use super::wait_visible;
use crate::error::Result;
use crate::selectors;
use playwright_rs::{Locator, Page};

#[derive(Debug, Clone)]
pub struct SetupAction {
    page: Page,
}

impl SetupAction {
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    pub async fn master_link(&self, master_name: &str) -> Locator {
        self.page
            .locator(&selectors::role("link", master_name, true))
            .await
    }

    /// Opens the listing of `master_name`; `index` picks among duplicate links.
    pub async fn navigate_to_master(&self, master_name: &str, index: i32) -> Result<()> {
        tracing::info!("Navigate to listing of {}", master_name);
        let link = self.master_link(master_name).await.nth(index);
        wait_visible(&link).await?;
        link.click(None).await?;
        Ok(())
    }

    pub async fn open_setting_by_text(&self, setting_name: &str) -> Result<()> {
        tracing::info!("Open setting option: {}", setting_name);
        let link = self
            .page
            .locator(&selectors::role("link", setting_name, true))
            .await;
        wait_visible(&link).await?;
        link.click(None).await?;
        Ok(())
    }
}
