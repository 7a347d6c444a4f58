// CommonAction - App navigation, reloads and load-state waits

use crate::config::Config;
use crate::error::{Error, Result};
use playwright_rs::{GotoOptions, Page, WaitUntil};
use std::time::{Duration, Instant};

/// Upper bound for a page to report `document.readyState == "complete"`
const LOAD_STATE_TIMEOUT: Duration = Duration::from_secs(30);

/// Quiet period after load, matching Playwright's definition of network idle
const IDLE_SETTLE: Duration = Duration::from_millis(500);

const LOAD_STATE_POLL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone)]
pub struct CommonAction {
    page: Page,
    config: Config,
}

impl CommonAction {
    pub fn new(page: Page, config: Config) -> Self {
        Self { page, config }
    }

    /// Opens `path` relative to the ERP base URL and waits for network idle.
    pub async fn navigate_to_app(&self, path: &str) -> Result<()> {
        let url = self.config.url_for(path)?;
        tracing::info!("Navigate to {}", url);
        self.page
            .goto(&url, Some(GotoOptions::new().wait_until(WaitUntil::NetworkIdle)))
            .await
            .map_err(|e| Error::from(e).context(format!("Opening {}", url)))?;
        Ok(())
    }

    /// Full page reload, waiting for network idle.
    pub async fn reload(&self) -> Result<()> {
        tracing::info!("Reload page");
        self.page
            .reload(Some(GotoOptions::new().wait_until(WaitUntil::NetworkIdle)))
            .await?;
        Ok(())
    }

    pub async fn wait_for_network_idle(&self) -> Result<()> {
        wait_for_network_idle(&self.page).await
    }
}

/// Waits until the document finished loading, then for a short quiet period.
///
/// Clicks that trigger client-side navigation have no load event to await,
/// so the ready state is polled instead.
pub(crate) async fn wait_for_network_idle(page: &Page) -> Result<()> {
    let start = Instant::now();
    loop {
        if page.evaluate_value("document.readyState").await? == "complete" {
            break;
        }
        if start.elapsed() >= LOAD_STATE_TIMEOUT {
            return Err(Error::Navigation(format!(
                "page '{}' did not finish loading after {:?}",
                page.url(),
                LOAD_STATE_TIMEOUT
            )));
        }
        tokio::time::sleep(LOAD_STATE_POLL).await;
    }
    tokio::time::sleep(IDLE_SETTLE).await;
    Ok(())
}

/// Fixed wait, the equivalent of `page.waitForTimeout(ms)`.
pub(crate) async fn pause(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}
