// MenuAction - Module switcher, left menu, form toolbar and listing toolbar

use super::common::{pause, wait_for_network_idle};
use super::wait_visible;
use crate::constants::{AppModule, MenuOption};
use crate::error::Result;
use crate::selectors;
use playwright_rs::Page;

#[derive(Debug, Clone)]
pub struct MenuAction {
    page: Page,
}

impl MenuAction {
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    /// Selects `module` from the "Change module" switcher.
    pub async fn select_module(&self, module: AppModule) -> Result<()> {
        tracing::info!("Select module: {}", module.as_str());
        self.page
            .locator(&selectors::title("Change module", false))
            .await
            .click(None)
            .await?;
        self.page
            .locator(&selectors::role("link", module.as_str(), true))
            .await
            .click(None)
            .await?;
        wait_for_network_idle(&self.page).await
    }

    /// Clicks the element whose visible text is exactly `option`.
    pub async fn click_menu_option_by_text(&self, option: &str) -> Result<()> {
        tracing::info!("Click menu option by text: {}", option);
        self.page
            .locator(&selectors::text(option, true))
            .await
            .click(None)
            .await?;
        pause(1000).await;
        Ok(())
    }

    /// Clicks the first element titled exactly `option` (listing toolbar New/Edit/View).
    pub async fn click_menu_option_by_title(&self, option: MenuOption) -> Result<()> {
        tracing::info!("Click menu option by title: {}", option.as_str());
        let item = self
            .page
            .locator(&selectors::title(option.as_str(), true))
            .await
            .first();
        wait_visible(&item).await?;
        item.click(None).await?;
        wait_for_network_idle(&self.page).await
    }

    pub async fn click_left_menu_option(&self, option: MenuOption) -> Result<()> {
        tracing::info!("Click left menu option: {}", option.as_str());
        self.page
            .locator(&selectors::title(option.as_str(), true))
            .await
            .first()
            .click(None)
            .await?;
        wait_for_network_idle(&self.page).await
    }

    /// Clicks a form toolbar button (Save, Approve, ...) by its caption.
    pub async fn click_top_menu_option(&self, option: MenuOption) -> Result<()> {
        tracing::info!("Click top menu option: {}", option.as_str());
        let button = self
            .page
            .locator(&selectors::has_text("div.dxm-hasText", option.as_str()))
            .await
            .first();
        wait_visible(&button).await?;
        button.click(None).await?;
        pause(1000).await;
        Ok(())
    }

    /// Clicks the `index`-th listing toolbar item titled `option`.
    pub async fn click_listing_menu_option(&self, option: MenuOption, index: i32) -> Result<()> {
        tracing::info!("Click listing toolbar option: {} [{}]", option.as_str(), index);
        let item = self
            .page
            .locator(&format!("li[title=\"{}\"]", option.as_str()))
            .await
            .nth(index);
        wait_visible(&item).await?;
        item.click(None).await?;
        wait_for_network_idle(&self.page).await
    }

    /// Returns to a listing by clicking its breadcrumb link.
    pub async fn navigate_back_to_listing(&self, form_title: &str) -> Result<()> {
        tracing::info!("Navigate back to listing: {}", form_title);
        self.page
            .locator(&selectors::role("link", form_title, true))
            .await
            .first()
            .click(None)
            .await
            .map_err(|e| crate::Error::from(e).context(format!("Returning to {} listing", form_title)))?;
        wait_for_network_idle(&self.page).await
    }

    pub async fn click_close_form(&self) -> Result<()> {
        tracing::info!("Close form");
        self.page
            .locator(&selectors::role("listitem", "Close form", false))
            .await
            .click(None)
            .await?;
        wait_for_network_idle(&self.page).await
    }
}
