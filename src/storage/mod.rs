//! Blob storage integration for publishing images
//!
//! Wraps an Azure Blob Storage container behind [`BlobStore`] so the upload
//! flow can run against the real service or an in-memory mock.

pub mod client;
pub mod mock;

pub use client::AzureBlobStore;
pub use mock::MockBlobStore;

use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait BlobStore: Send + Sync {
    fn account_name(&self) -> &str;
    fn container_name(&self) -> &str;

    /// Succeeds when the container exists.
    async fn fetch_container_properties(&self) -> Result<()>;

    /// Create the container with anonymous read access to individual blobs.
    async fn create_public_container(&self) -> Result<()>;

    /// Write a block blob, replacing any existing blob of the same name.
    async fn upload_blob(&self, blob_name: &str, data: Vec<u8>, content_type: &str)
        -> Result<()>;

    fn public_url(&self, blob_name: &str) -> String {
        public_url(self.account_name(), self.container_name(), blob_name)
    }
}

pub fn public_url(account_name: &str, container_name: &str, blob_name: &str) -> String {
    format!(
        "https://{}.blob.core.windows.net/{}/{}",
        account_name, container_name, blob_name
    )
}
