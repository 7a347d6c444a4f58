// Config - Suite settings read from `ERP_*` environment variables
//
// Follows the builder style of `playwright_rs::LaunchOptions`: every setter
// consumes and returns `Self`, defaults come from `Config::new()`.

use crate::error::{Error, Result};
use std::path::PathBuf;

/// Browser engine used for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BrowserKind {
    #[default]
    Chromium,
    Firefox,
    Webkit,
}

impl BrowserKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BrowserKind::Chromium => "chromium",
            BrowserKind::Firefox => "firefox",
            BrowserKind::Webkit => "webkit",
        }
    }

    fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "chromium" | "chrome" => Ok(BrowserKind::Chromium),
            "firefox" => Ok(BrowserKind::Firefox),
            "webkit" | "safari" => Ok(BrowserKind::Webkit),
            other => Err(Error::Config(format!(
                "ERP_BROWSER must be chromium, firefox or webkit, got '{}'",
                other
            ))),
        }
    }
}

/// Settings shared by every test of a run.
#[derive(Debug, Clone)]
pub struct Config {
    /// ERP root URL; live suites are skipped when absent
    pub base_url: Option<String>,
    pub browser: BrowserKind,
    pub headless: bool,
    /// Playwright storage-state file holding an authenticated session
    pub storage_state: Option<PathBuf>,
    pub test_data_dir: PathBuf,
    pub summary_dir: PathBuf,
    /// Extra attempts the delete orchestrator makes per record
    pub delete_retries: u32,
    pub viewport: (u32, u32),
}

impl Config {
    pub fn new() -> Self {
        Self {
            base_url: None,
            browser: BrowserKind::default(),
            headless: true,
            storage_state: None,
            test_data_dir: PathBuf::from("test-data"),
            summary_dir: PathBuf::from("target/erp-summaries"),
            delete_retries: 1,
            viewport: (1920, 1080),
        }
    }

    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::new();

        if let Some(url) = get("ERP_BASE_URL") {
            config = config.base_url(url);
        }
        if let Some(browser) = get("ERP_BROWSER") {
            config.browser = BrowserKind::parse(&browser)?;
        }
        if let Some(headless) = get("ERP_HEADLESS") {
            config.headless = parse_bool("ERP_HEADLESS", &headless)?;
        }
        if let Some(path) = get("ERP_STORAGE_STATE") {
            config.storage_state = Some(PathBuf::from(path));
        }
        if let Some(dir) = get("ERP_TEST_DATA_DIR") {
            config.test_data_dir = PathBuf::from(dir);
        }
        if let Some(dir) = get("ERP_SUMMARY_DIR") {
            config.summary_dir = PathBuf::from(dir);
        }
        if let Some(retries) = get("ERP_DELETE_RETRIES") {
            config.delete_retries = retries.trim().parse().map_err(|_| {
                Error::Config(format!(
                    "ERP_DELETE_RETRIES must be a non-negative integer, got '{}'",
                    retries
                ))
            })?;
        }
        if let Some(viewport) = get("ERP_VIEWPORT") {
            config.viewport = parse_viewport(&viewport)?;
        }

        Ok(config)
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        let url: String = url.into();
        self.base_url = Some(url.trim_end_matches('/').to_string());
        self
    }

    pub fn browser(mut self, browser: BrowserKind) -> Self {
        self.browser = browser;
        self
    }

    pub fn headless(mut self, enabled: bool) -> Self {
        self.headless = enabled;
        self
    }

    pub fn storage_state(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_state = Some(path.into());
        self
    }

    pub fn test_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.test_data_dir = dir.into();
        self
    }

    pub fn summary_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.summary_dir = dir.into();
        self
    }

    pub fn delete_retries(mut self, retries: u32) -> Self {
        self.delete_retries = retries;
        self
    }

    /// Joins `path` onto the base URL.
    ///
    /// Returns a configuration error when no base URL is set.
    pub fn url_for(&self, path: &str) -> Result<String> {
        let base = self
            .base_url
            .as_deref()
            .ok_or_else(|| Error::Config("ERP_BASE_URL is not set".to_string()))?;
        Ok(format!("{}/{}", base, path.trim_start_matches('/')))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::Config(format!(
            "{} must be a boolean, got '{}'",
            key, other
        ))),
    }
}

fn parse_viewport(value: &str) -> Result<(u32, u32)> {
    let invalid = || Error::Config(format!("ERP_VIEWPORT must look like 1920x1080, got '{}'", value));
    let (width, height) = value.trim().split_once(['x', 'X']).ok_or_else(invalid)?;
    let width = width.trim().parse().map_err(|_| invalid())?;
    let height = height.trim().parse().map_err(|_| invalid())?;
    Ok((width, height))
}
