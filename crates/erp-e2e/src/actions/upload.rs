// UploadAction - File inputs of attachment dialogs

use super::common::pause;
use crate::error::{Error, Result};
use playwright_rs::Page;
use std::path::{Path, PathBuf};

const FILE_INPUT: &str = "input[type=\"file\"]";

#[derive(Debug, Clone)]
pub struct UploadAction {
    page: Page,
}

impl UploadAction {
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    /// Attaches `path` to the first file input on the page.
    pub async fn attach_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = existing_file(path.as_ref())?;
        tracing::info!("Attach file: {}", path.display());
        self.page
            .locator(FILE_INPUT)
            .await
            .first()
            .set_input_files(&path, None)
            .await?;
        pause(500).await;
        Ok(())
    }

    /// Attaches every file in `paths` in one selection.
    pub async fn attach_files(&self, paths: &[PathBuf]) -> Result<()> {
        let files = paths
            .iter()
            .map(|p| existing_file(p))
            .collect::<Result<Vec<_>>>()?;
        tracing::info!("Attach {} files", files.len());
        let refs: Vec<&PathBuf> = files.iter().collect();
        self.page
            .locator(FILE_INPUT)
            .await
            .first()
            .set_input_files_multiple(&refs, None)
            .await?;
        pause(500).await;
        Ok(())
    }
}

fn existing_file(path: &Path) -> Result<PathBuf> {
    if path.is_file() {
        Ok(path.to_path_buf())
    } else {
        Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("attachment '{}' does not exist", path.display()),
        )))
    }
}
