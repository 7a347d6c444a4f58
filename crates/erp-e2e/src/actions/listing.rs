// ListingAction - Column filters, record lookup and row selection in master listings

use super::common::pause;
use crate::error::Result;
use crate::selectors;
use playwright_rs::protocol::Position;
use playwright_rs::{ClickOptions, Locator, Page};

#[derive(Debug, Clone)]
pub struct ListingAction {
    page: Page,
}

impl ListingAction {
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    /// Filter-row input of the zero-based grid column `column`.
    pub async fn column_filter_input(&self, column: usize) -> Locator {
        self.page
            .locator(&format!("input[aria-describedby=\"dx-col-{}\"]", column))
            .await
    }

    /// Clears the filter of `column`, restoring the unfiltered listing.
    pub async fn clear_column_filter(&self, column: usize) -> Result<()> {
        tracing::info!("Clear filter of column {}", column);
        self.column_filter_input(column).await.clear(None).await?;
        pause(500).await;
        Ok(())
    }

    /// Types `text` into the filter of `column` and lets the grid refresh.
    pub async fn filter_by_column_text(&self, text: &str, column: usize) -> Result<()> {
        tracing::info!("Filter listing by: {}", text);
        self.column_filter_input(column)
            .await
            .fill(text, None)
            .await?;
        pause(1500).await;
        Ok(())
    }

    /// Filters on `column`, then reports whether any visible text contains `record`.
    ///
    /// Errors count as "not visible".
    pub async fn is_record_visible_by_text(&self, record: &str, column: usize) -> bool {
        let visible = async {
            self.filter_by_column_text(record, column).await?;
            let cell = self.page.locator(&selectors::text(record, false)).await;
            Ok::<_, crate::Error>(cell.first().is_visible().await?)
        };
        visible.await.unwrap_or(false)
    }

    /// Filters on `column`, then reports whether a cell's text equals `record` exactly.
    ///
    /// Errors count as "not visible".
    pub async fn is_record_visible_by_exact_text(&self, record: &str, column: usize) -> bool {
        let visible = async {
            self.filter_by_column_text(record, column).await?;
            let cell = self.page.locator(&selectors::exact_cell(record)).await;
            Ok::<_, crate::Error>(cell.first().is_visible().await?)
        };
        match visible.await {
            Ok(visible) => visible,
            Err(e) => {
                tracing::debug!("Lookup of '{}' failed, treating as absent: {}", record, e);
                false
            }
        }
    }

    /// Selects the first grid row with a cell reading exactly `name`,
    /// pointing at it before the click.
    pub async fn select_record_by_name(&self, name: &str) -> Result<()> {
        tracing::info!("Select record by name: {}", name);
        let row = self
            .page
            .locator(&selectors::row_with_cell(name))
            .await
            .first();
        row.hover(None).await?;
        row.click(Some(
            ClickOptions::builder()
                .position(Position { x: 10.0, y: 10.0 })
                .build(),
        ))
        .await?;
        pause(500).await;
        Ok(())
    }
}
