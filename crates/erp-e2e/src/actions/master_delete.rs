// MasterDeleteAction - Guarded delete of a master record from its listing

use super::common::{CommonAction, pause};
use super::listing::ListingAction;
use super::menu::MenuAction;
use super::toast::ToastAction;
use super::wait_visible;
use crate::constants::{CrudAction, Entity, ListingColumn, MenuOption};
use crate::error::{Error, Result};
use crate::runner::DeleteOutcome;
use crate::selectors;
use playwright_rs::Page;
use std::future::Future;

#[derive(Debug, Clone)]
pub struct MasterDeleteAction {
    page: Page,
    listing: ListingAction,
    menu: MenuAction,
    toast: ToastAction,
    common: CommonAction,
}

impl MasterDeleteAction {
    pub fn new(
        page: Page,
        listing: ListingAction,
        menu: MenuAction,
        toast: ToastAction,
        common: CommonAction,
    ) -> Self {
        Self {
            page,
            listing,
            menu,
            toast,
            common,
        }
    }

    /// Deletes `name` from the `entity` listing.
    ///
    /// A record missing from the listing is skipped. Otherwise up to
    /// `retries + 1` attempts are made. Every failed attempt is followed by a
    /// return to the listing; a successful delete clears the name filter.
    pub async fn safe_delete_by_name(
        &self,
        entity: Entity,
        name: &str,
        column: ListingColumn,
        retries: u32,
    ) -> DeleteOutcome {
        if !self
            .listing
            .is_record_visible_by_exact_text(name, column.index())
            .await
        {
            tracing::warn!("{} '{}' not found, skipping delete", entity, name);
            return DeleteOutcome::Skipped;
        }

        let outcome = with_retries(
            retries,
            |attempt| async move {
                tracing::info!("Delete {} '{}' (attempt {})", entity, name, attempt + 1);
                self.delete_once(entity, name, column).await
            },
            || self.recover(entity),
        )
        .await;

        match outcome {
            Ok(()) => {
                if let Err(e) = self.listing.clear_column_filter(column.index()).await {
                    tracing::warn!("Clearing the listing filter failed: {}", e);
                }
                DeleteOutcome::Deleted
            }
            Err(e) => {
                tracing::error!("Deleting {} '{}' failed: {}", entity, name, e);
                DeleteOutcome::Failed
            }
        }
    }

    async fn delete_once(&self, entity: Entity, name: &str, column: ListingColumn) -> Result<()> {
        self.listing.select_record_by_name(name).await?;
        self.menu
            .click_listing_menu_option(MenuOption::Delete, 0)
            .await?;

        let confirm = self
            .page
            .locator(&selectors::or(
                &selectors::role("button", "Yes", true),
                &selectors::role("button", "OK", true),
            ))
            .await
            .first();
        wait_visible(&confirm).await?;
        confirm.click(None).await?;
        pause(500).await;

        self.toast
            .assert_text_toast(entity.key(), CrudAction::Delete)
            .await?;

        if self
            .listing
            .is_record_visible_by_exact_text(name, column.index())
            .await
        {
            return Err(Error::Assertion(format!(
                "{} '{}' still listed after delete",
                entity, name
            )));
        }
        Ok(())
    }

    async fn recover(&self, entity: Entity) {
        if let Err(e) = self.menu.navigate_back_to_listing(entity.name()).await {
            tracing::warn!("Navigation failed, reloading page: {}", e);
            if let Err(e) = self.common.reload().await {
                tracing::error!("Page reload failed: {}", e);
            }
        }
    }
}

/// Runs `attempt` until it succeeds, at most `retries + 1` times.
///
/// `recover` runs after every failed attempt, the last one included.
/// Returns the error of the final attempt when all fail.
pub(crate) async fn with_retries<A, AF, R, RF>(retries: u32, mut attempt: A, mut recover: R) -> Result<()>
where
    A: FnMut(u32) -> AF,
    AF: Future<Output = Result<()>>,
    R: FnMut() -> RF,
    RF: Future<Output = ()>,
{
    let mut n = 0;
    loop {
        match attempt(n).await {
            Ok(()) => return Ok(()),
            Err(e) => {
                tracing::warn!("Attempt {} failed: {}", n + 1, e);
                recover().await;
                if n >= retries {
                    return Err(e);
                }
                n += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[tokio::test]
    async fn test_first_success_stops_retrying() {
        let calls = Cell::new(0);
        let recovers = Cell::new(0);
        let result = with_retries(
            3,
            |_| {
                calls.set(calls.get() + 1);
                async { Ok(()) }
            },
            || {
                recovers.set(recovers.get() + 1);
                async {}
            },
        )
        .await;
        assert!(result.is_ok());
        assert_eq!(calls.get(), 1);
        assert_eq!(recovers.get(), 0);
    }

    #[tokio::test]
    async fn test_retries_bounded_and_last_error_returned() {
        let calls = Cell::new(0);
        let recovers = Cell::new(0);
        let result = with_retries(
            2,
            |n| {
                calls.set(calls.get() + 1);
                async move { Err(Error::Assertion(format!("attempt {}", n))) }
            },
            || {
                recovers.set(recovers.get() + 1);
                async {}
            },
        )
        .await;
        assert_eq!(calls.get(), 3);
        // The page is restored after the last failure too
        assert_eq!(recovers.get(), 3);
        match result {
            Err(Error::Assertion(msg)) => assert_eq!(msg, "attempt 2"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_zero_retries_means_single_attempt() {
        let calls = Cell::new(0);
        let recovers = Cell::new(0);
        let result = with_retries(
            0,
            |_| {
                calls.set(calls.get() + 1);
                async { Err(Error::Navigation("gone".to_string())) }
            },
            || {
                recovers.set(recovers.get() + 1);
                async {}
            },
        )
        .await;
        assert!(result.is_err());
        assert_eq!(calls.get(), 1);
        assert_eq!(recovers.get(), 1);
    }

    #[tokio::test]
    async fn test_success_after_recovery() {
        let calls = Cell::new(0);
        let recovers = Cell::new(0);
        let result = with_retries(
            1,
            |n| {
                calls.set(calls.get() + 1);
                async move {
                    if n == 0 {
                        Err(Error::Assertion("toast".to_string()))
                    } else {
                        Ok(())
                    }
                }
            },
            || {
                recovers.set(recovers.get() + 1);
                async {}
            },
        )
        .await;
        assert!(result.is_ok());
        assert_eq!(calls.get(), 2);
        assert_eq!(recovers.get(), 1);
    }
}
