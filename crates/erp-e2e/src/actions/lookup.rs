// LookupAction - Grid lookups opened from an editor's drop-down button

use super::common::pause;
use super::wait_visible_within;
use crate::constants::LookupView;
use crate::error::Result;
use crate::selectors;
use playwright_rs::{Locator, Page};
use std::time::Duration;

/// Open lookup drop-downs; only one is visible at a time.
const OPEN_POPUP: &str = "[id*=\"_DDD_PW\"]:visible";

/// Data rows of a lookup grid.
const POPUP_ROW: &str = "tr[class*=\"dxgvDataRow\"]";

/// Search box in the lookup grid's filter row.
const POPUP_SEARCH: &str = "input[id*=\"DXFREditorcol\"]";

const ROW_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Clone)]
pub struct LookupAction {
    page: Page,
}

impl LookupAction {
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    /// Drop-down button of the lookup editor bound to `view`.
    pub async fn lookup_button(&self, view: LookupView) -> Locator {
        self.page
            .locator(&format!("[id*=\"{}\"][id$=\"_B-1Img\"]", view.as_str()))
            .await
            .first()
    }

    pub async fn open_lookup(&self, view: LookupView) -> Result<()> {
        tracing::info!("Open lookup: {}", view.as_str());
        let button = self.lookup_button(view).await;
        wait_visible_within(&button, Duration::from_secs(5)).await?;
        button.click(None).await?;
        pause(500).await;
        Ok(())
    }

    /// Picks the row of the open lookup containing `item`.
    pub async fn select_lookup_option(&self, item: &str) -> Result<()> {
        tracing::info!("Select lookup option: {}", item);
        let rows = format!("{} {}", OPEN_POPUP, POPUP_ROW);
        self.click_row(&selectors::has_text(&rows, item)).await
    }

    /// Picks the row of the open lookup whose whole text is `item`.
    pub async fn select_exact_lookup_option(&self, item: &str) -> Result<()> {
        tracing::info!("Select lookup option (exact): {}", item);
        let rows = format!("{} {}", OPEN_POPUP, POPUP_ROW);
        self.click_row(&selectors::has_exact_text(&rows, item)).await
    }

    async fn click_row(&self, selector: &str) -> Result<()> {
        let row = self.page.locator(selector).await.first();
        wait_visible_within(&row, ROW_TIMEOUT).await?;
        row.click(None).await?;
        pause(500).await;
        Ok(())
    }

    /// Filters the open lookup by `value`, then picks the first matching row.
    pub async fn search_and_select(&self, value: &str) -> Result<()> {
        tracing::info!("Search lookup for: {}", value);
        let search = self
            .page
            .locator(&format!("{} {}", OPEN_POPUP, POPUP_SEARCH))
            .await
            .first();
        search.fill(value, None).await?;
        pause(1500).await;
        self.select_lookup_option(value).await
    }

    /// Opens the `view` lookup and picks `item`; an empty `item` leaves the field untouched.
    pub async fn open_lookup_and_select_item(&self, view: LookupView, item: &str) -> Result<()> {
        if item.trim().is_empty() {
            return Ok(());
        }
        self.open_lookup(view).await?;
        self.select_exact_lookup_option(item).await
    }

    /// Opens the `view` lookup, searches `value` and picks it; an empty `value` is a no-op.
    pub async fn open_lookup_and_select_value(&self, view: LookupView, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Ok(());
        }
        self.open_lookup(view).await?;
        self.search_and_select(value).await
    }
}
