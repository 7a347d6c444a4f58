// ToastAction - Success toasts and validation messages raised by a save

use crate::constants::CrudAction;
use crate::error::{Error, Result};
use playwright_rs::{Page, expect};
use std::time::Duration;

const TOAST: &str = "#toast-container .toast-message";

const VALIDATION_MESSAGE: &str =
    "#toast-container .toast-error, .validation-summary-errors, .field-validation-error";

const TOAST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct ToastAction {
    page: Page,
}

impl ToastAction {
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    /// Asserts a toast naming `entity_key` and the past tense of `action`,
    /// e.g. "DocumentType created successfully".
    pub async fn assert_text_toast(&self, entity_key: &str, action: CrudAction) -> Result<()> {
        tracing::info!("Expect {} {} toast", entity_key, action.past_tense());
        let pattern = format!("(?i){}.*{}", entity_key, action.past_tense());
        let toast = self.page.locator(TOAST).await.first();
        expect(toast)
            .with_timeout(TOAST_TIMEOUT)
            .to_contain_text_regex(&pattern)
            .await
            .map_err(|e| {
                Error::Assertion(format!(
                    "no '{} {}' toast: {}",
                    entity_key,
                    action.past_tense(),
                    e
                ))
            })
    }

    /// Asserts a validation message matching the regex `pattern`.
    pub async fn assert_validation_message(&self, pattern: &str) -> Result<()> {
        tracing::info!("Expect validation message matching {}", pattern);
        let message = self.page.locator(VALIDATION_MESSAGE).await.first();
        expect(message)
            .with_timeout(TOAST_TIMEOUT)
            .to_contain_text_regex(pattern)
            .await
            .map_err(|e| Error::Assertion(format!("no validation message /{}/: {}", pattern, e)))
    }
}
