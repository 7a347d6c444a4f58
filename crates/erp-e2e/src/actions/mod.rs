// Copyright 2026 Paul Adamson
// Licensed under the Apache License, Version 2.0
//
// Actions - Reusable UI interactions shared by every page object
//
// Each action wraps a cloned `Page` handle and exposes one family of
// interactions. Page objects and master workflows compose them.

mod common;
mod document;
mod listing;
mod lookup;
mod master_delete;
mod master_header;
mod menu;
mod setup;
mod toast;
mod upload;

pub use common::CommonAction;
pub use document::DocumentAction;
pub use listing::ListingAction;
pub use lookup::LookupAction;
pub use master_delete::MasterDeleteAction;
pub use master_header::MasterHeaderAction;
pub use menu::MenuAction;
pub use setup::SetupAction;
pub use toast::ToastAction;
pub use upload::UploadAction;

pub(crate) use common::pause;

use crate::error::Result;
use playwright_rs::{Locator, expect};
use std::time::Duration;

/// Default wait for an element to become visible
pub(crate) const VISIBLE_TIMEOUT: Duration = Duration::from_secs(10);

/// Waits for `locator` to become visible within [`VISIBLE_TIMEOUT`].
pub(crate) async fn wait_visible(locator: &Locator) -> Result<()> {
    wait_visible_within(locator, VISIBLE_TIMEOUT).await
}

pub(crate) async fn wait_visible_within(locator: &Locator, timeout: Duration) -> Result<()> {
    expect(locator.clone())
        .with_timeout(timeout)
        .to_be_visible()
        .await?;
    Ok(())
}
