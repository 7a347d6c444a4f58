// MasterHeaderAction - Code, name and description fields shared by master forms

use crate::error::Result;
use crate::selectors;
use playwright_rs::Page;

#[derive(Debug, Clone)]
pub struct MasterHeaderAction {
    page: Page,
}

impl MasterHeaderAction {
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    /// Fills Code, preferring the accessible textbox and falling back to an id match.
    pub async fn fill_code(&self, code: &str) -> Result<()> {
        tracing::info!("Fill Code field with value: {}", code);
        self.fill_accessible_or_fallback("Code", "input[id*=\"Code\"]", code)
            .await
    }

    /// Fills Name, preferring the accessible textbox and falling back to the first id match.
    pub async fn fill_name(&self, name: &str) -> Result<()> {
        tracing::info!("Fill Name field with value: {}", name);
        self.fill_accessible_or_fallback("Name", "input[id*=\"Name\"]", name)
            .await
    }

    pub async fn fill_name_arabic(&self, name_arabic: &str) -> Result<()> {
        tracing::info!("Fill Name Arabic field with value: {}", name_arabic);
        self.page
            .locator("input[id*=\"NameL2\"]")
            .await
            .fill(name_arabic, None)
            .await?;
        Ok(())
    }

    pub async fn fill_description(&self, description: &str) -> Result<()> {
        tracing::info!("Fill Description field with value: {}", description);
        self.page
            .locator("textarea[id*=\"Description\"]")
            .await
            .fill(description, None)
            .await?;
        Ok(())
    }

    async fn fill_accessible_or_fallback(
        &self,
        accessible_name: &str,
        fallback: &str,
        value: &str,
    ) -> Result<()> {
        let field = self
            .page
            .locator(&selectors::role("textbox", accessible_name, false))
            .await;
        // Ambiguous accessible names raise a strict-mode error; treat as not visible.
        if field.is_visible().await.unwrap_or(false) {
            field.fill(value, None).await?;
        } else {
            self.page
                .locator(fallback)
                .await
                .first()
                .fill(value, None)
                .await?;
        }
        Ok(())
    }
}
