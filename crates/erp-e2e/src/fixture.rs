// Copyright 2026 Paul Adamson
// Licensed under the Apache License, Version 2.0
//
// Fixture - Browser session and the per-test bundle of actions
//
// `Session` owns the Playwright driver, one browser, one isolated context and
// one page. `App` hands every action the same page handle, so a test only
// ever talks to `App`.

use crate::actions::{
    CommonAction, DocumentAction, ListingAction, LookupAction, MasterDeleteAction,
    MasterHeaderAction, MenuAction, SetupAction, ToastAction, UploadAction,
};
use crate::config::{BrowserKind, Config};
use crate::constants::{AppModule, Entity, MenuOption};
use crate::error::{Error, Result};
use playwright_rs::{
    Browser, BrowserContext, BrowserContextOptions, LaunchOptions, Page, Playwright, Viewport,
};

/// Browser resources for one test.
pub struct Session {
    playwright: Playwright,
    browser: Browser,
    context: BrowserContext,
    page: Page,
    config: Config,
}

impl Session {
    /// Launches the configured browser and opens one page in a fresh context.
    pub async fn launch(config: &Config) -> Result<Self> {
        tracing::info!(
            "Launching {} (headless: {})",
            config.browser.as_str(),
            config.headless
        );
        let playwright = Playwright::launch()
            .await
            .map_err(|e| Error::from(e).context("Starting Playwright"))?;

        let browser_type = match config.browser {
            BrowserKind::Chromium => playwright.chromium(),
            BrowserKind::Firefox => playwright.firefox(),
            BrowserKind::Webkit => playwright.webkit(),
        };
        let browser = browser_type
            .launch_with_options(LaunchOptions::new().headless(config.headless))
            .await
            .map_err(|e| Error::from(e).context(format!("Launching {}", config.browser.as_str())))?;

        let (width, height) = config.viewport;
        let mut options = BrowserContextOptions::builder()
            .viewport(Viewport { width, height })
            .ignore_https_errors(true);
        if let Some(base_url) = &config.base_url {
            options = options.base_url(base_url.clone());
        }
        if let Some(state) = &config.storage_state {
            options = options.storage_state_path(state.to_string_lossy().into_owned());
        }
        let context = browser.new_context_with_options(options.build()).await?;
        let page = context.new_page().await?;

        Ok(Self {
            playwright,
            browser,
            context,
            page,
            config: config.clone(),
        })
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// A fresh action bundle bound to this session's page.
    pub fn app(&self) -> App {
        App::new(self.page.clone(), self.config.clone())
    }

    /// Closes the context and the browser, then stops the driver.
    pub async fn close(self) -> Result<()> {
        self.context.close().await?;
        self.browser.close().await?;
        self.playwright.shutdown().await?;
        Ok(())
    }
}

/// Every action of the suite, sharing one page.
#[derive(Debug, Clone)]
pub struct App {
    pub page: Page,
    pub config: Config,
    pub common: CommonAction,
    pub menu: MenuAction,
    pub listing: ListingAction,
    pub lookup: LookupAction,
    pub setup: SetupAction,
    pub document: DocumentAction,
    pub upload: UploadAction,
    pub header: MasterHeaderAction,
    pub toast: ToastAction,
    pub master_delete: MasterDeleteAction,
}

impl App {
    pub fn new(page: Page, config: Config) -> Self {
        let common = CommonAction::new(page.clone(), config.clone());
        let menu = MenuAction::new(page.clone());
        let listing = ListingAction::new(page.clone());
        let toast = ToastAction::new(page.clone());
        let master_delete = MasterDeleteAction::new(
            page.clone(),
            listing.clone(),
            menu.clone(),
            toast.clone(),
            common.clone(),
        );

        Self {
            lookup: LookupAction::new(page.clone()),
            setup: SetupAction::new(page.clone()),
            document: DocumentAction::new(page.clone()),
            upload: UploadAction::new(page.clone()),
            header: MasterHeaderAction::new(page.clone()),
            common,
            menu,
            listing,
            toast,
            master_delete,
            page,
            config,
        }
    }

    /// Opens the app root and switches to `module`.
    pub async fn open_module(&self, module: AppModule) -> Result<()> {
        self.common.navigate_to_app("/").await?;
        self.menu.select_module(module).await
    }

    pub async fn accounting_module(&self) -> Result<()> {
        self.open_module(AppModule::Accounting).await
    }

    pub async fn sales_module(&self) -> Result<()> {
        self.open_module(AppModule::Sales).await
    }

    pub async fn purchase_module(&self) -> Result<()> {
        self.open_module(AppModule::Purchase).await
    }

    pub async fn inventory_module(&self) -> Result<()> {
        self.open_module(AppModule::Inventory).await
    }

    /// Opens the module of `entity`, then its listing through Setups.
    pub async fn open_master(&self, entity: Entity) -> Result<()> {
        self.open_module(entity.module()).await?;
        self.menu.click_left_menu_option(MenuOption::Setups).await?;
        self.setup.navigate_to_master(entity.name(), 0).await
    }
}
