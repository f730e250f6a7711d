//! Application wiring: configuration to store to uploader, plus the summary
//! printed on success.

use crate::models::{display_name, StorageConfig, UploadRequest, UploadResult};
use crate::storage::{AzureBlobStore, BlobStore};
use crate::uploader::Uploader;
use crate::Result;
use std::fmt::Write;
use tracing::info;

pub struct App {
    uploader: Uploader,
}

impl App {
    /// Build an app around an injected store.
    ///
    /// This is primarily useful for integration tests that need a mock.
    pub fn with_store(store: Box<dyn BlobStore>) -> Self {
        Self {
            uploader: Uploader::new(store),
        }
    }

    pub fn from_config(config: &StorageConfig) -> Result<Self> {
        let store =
            AzureBlobStore::from_connection_string(&config.connection_string, &config.container_name)?;
        info!(
            "Target container: {}/{}",
            store.account_name(),
            store.container_name()
        );
        Ok(Self::with_store(Box::new(store)))
    }

    pub async fn run(&self, request: &UploadRequest) -> Result<UploadResult> {
        self.uploader.upload(request).await
    }

    pub fn container_name(&self) -> &str {
        self.uploader.store().container_name()
    }

    /// Human-readable report; the last line is the Markdown embed.
    pub fn render_summary(&self, request: &UploadRequest, result: &UploadResult) -> String {
        let mut out = String::new();
        if result.container_created {
            let _ = writeln!(out, "   Created container: {}", self.container_name());
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "✅ Uploaded: {}", display_name(&request.file_path));
        let _ = writeln!(out, "   URL: {}", result.public_url);
        let _ = write!(out, "   Markdown: {}", result.markdown(&request.alt_text));
        out
    }
}
