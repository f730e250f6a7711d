//! The upload operation: validate the input, make sure the container exists
//! and write the blob.

use crate::mime::content_type_for;
use crate::models::{UploadRequest, UploadResult};
use crate::storage::BlobStore;
use crate::{Error, Result};
use tracing::{debug, info, warn};

pub struct Uploader {
    store: Box<dyn BlobStore>,
}

impl Uploader {
    pub fn new(store: Box<dyn BlobStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn BlobStore {
        self.store.as_ref()
    }

    /// Upload the requested file and return its public URL.
    ///
    /// Input problems are reported before any request reaches the store. An
    /// existing blob with the same name is overwritten.
    pub async fn upload(&self, request: &UploadRequest) -> Result<UploadResult> {
        if !request.file_path.exists() {
            return Err(Error::InputNotFound(request.file_path.clone()));
        }

        let blob_name = request.resolve_blob_name()?;
        let content_type = content_type_for(&request.file_path);
        let data = tokio::fs::read(&request.file_path).await?;

        let container_created = self.ensure_container().await?;

        debug!(
            "Uploading {} ({} bytes, {}) as {}",
            request.file_path.display(),
            data.len(),
            content_type,
            blob_name
        );
        self.store
            .upload_blob(&blob_name, data, &content_type)
            .await?;

        let public_url = self.store.public_url(&blob_name);
        info!("Uploaded {} to {}", blob_name, public_url);

        Ok(UploadResult {
            public_url,
            blob_name,
            content_type,
            container_created,
        })
    }

    /// Returns `true` when the container had to be created.
    async fn ensure_container(&self) -> Result<bool> {
        let container = self.store.container_name();

        match self.store.fetch_container_properties().await {
            Ok(()) => {
                debug!("Container {} already exists", container);
                return Ok(false);
            }
            Err(Error::ContainerNotFound(_)) => {}
            Err(e) => {
                warn!(
                    "Could not read properties of container {}: {}, attempting to create",
                    container, e
                );
            }
        }

        match self.store.create_public_container().await {
            Ok(()) => {
                info!("Created container: {}", container);
                Ok(true)
            }
            Err(Error::ContainerAlreadyExists(_)) => {
                debug!("Container {} was created concurrently", container);
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }
}
