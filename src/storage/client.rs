use super::BlobStore;
use crate::{Error, Result};
use async_trait::async_trait;
use azure_core::error::ErrorKind;
use azure_core::StatusCode;
use azure_storage::{CloudLocation, ConnectionString};
use azure_storage_blobs::prelude::{ClientBuilder, ContainerClient, PublicAccess};
use std::fmt;

const DEFAULT_ENDPOINT_SUFFIX: &str = "core.windows.net";

pub struct AzureBlobStore {
    client: ContainerClient,
    account_name: String,
    container_name: String,
}

impl fmt::Debug for AzureBlobStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AzureBlobStore")
            .field("account_name", &self.account_name)
            .field("container_name", &self.container_name)
            .finish()
    }
}

impl AzureBlobStore {
    /// Build a container client from an Azure Storage connection string.
    ///
    /// No request is sent; a malformed connection string is reported as a
    /// configuration error.
    pub fn from_connection_string(connection_string: &str, container_name: &str) -> Result<Self> {
        let parsed = ConnectionString::new(connection_string)
            .map_err(|e| Error::Configuration(format!("Invalid connection string: {}", e)))?;

        let account_name = match parsed.account_name {
            Some(name) => name.to_string(),
            None => parsed
                .blob_endpoint
                .and_then(account_from_endpoint)
                .ok_or_else(|| {
                    Error::Configuration(
                        "Connection string has neither AccountName nor BlobEndpoint".to_string(),
                    )
                })?,
        };

        let credentials = parsed.storage_credentials().map_err(|e| {
            Error::Configuration(format!("Connection string has no usable credentials: {}", e))
        })?;

        let location = match (parsed.blob_endpoint, parsed.endpoint_suffix) {
            (Some(endpoint), _) => {
                tracing::debug!("Using blob endpoint from connection string: {}", endpoint);
                CloudLocation::Custom {
                    account: account_name.clone(),
                    uri: endpoint.trim_end_matches('/').to_string(),
                }
            }
            (None, Some(suffix)) if suffix != DEFAULT_ENDPOINT_SUFFIX => CloudLocation::Custom {
                account: account_name.clone(),
                uri: format!("https://{}.blob.{}", account_name, suffix),
            },
            _ => CloudLocation::Public {
                account: account_name.clone(),
            },
        };

        let client = ClientBuilder::with_location(location, credentials)
            .container_client(container_name.to_string());

        tracing::debug!(
            "Created Azure Blob Storage client for {}/{}",
            account_name,
            container_name
        );

        Ok(Self {
            client,
            account_name,
            container_name: container_name.to_string(),
        })
    }

    fn storage_error(err: azure_core::Error, operation: &str) -> Error {
        Error::Storage(format!("Failed to {}: {}", operation, err))
    }
}

fn http_status(err: &azure_core::Error) -> Option<StatusCode> {
    match err.kind() {
        ErrorKind::HttpResponse { status, .. } => Some(*status),
        _ => None,
    }
}

/// `https://acct.blob.core.windows.net` -> `acct`
fn account_from_endpoint(endpoint: &str) -> Option<String> {
    let url = azure_core::Url::parse(endpoint).ok()?;
    let host = url.host_str()?;
    let (account, _) = host.split_once('.')?;
    if account.is_empty() {
        None
    } else {
        Some(account.to_string())
    }
}

#[async_trait]
impl BlobStore for AzureBlobStore {
    fn account_name(&self) -> &str {
        &self.account_name
    }

    fn container_name(&self) -> &str {
        &self.container_name
    }

    async fn fetch_container_properties(&self) -> Result<()> {
        self.client
            .get_properties()
            .await
            .map_err(|e| {
                if http_status(&e) == Some(StatusCode::NotFound) {
                    Error::ContainerNotFound(self.container_name.clone())
                } else {
                    Self::storage_error(e, "get container properties")
                }
            })?;
        Ok(())
    }

    async fn create_public_container(&self) -> Result<()> {
        self.client
            .create()
            .public_access(PublicAccess::Blob)
            .await
            .map_err(|e| {
                if http_status(&e) == Some(StatusCode::Conflict) {
                    Error::ContainerAlreadyExists(self.container_name.clone())
                } else {
                    Self::storage_error(e, "create container")
                }
            })?;
        Ok(())
    }

    async fn upload_blob(
        &self,
        blob_name: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<()> {
        self.client
            .blob_client(blob_name)
            .put_block_blob(data)
            .content_type(content_type.to_string())
            .await
            .map_err(|e| Self::storage_error(e, "upload blob"))?;
        Ok(())
    }
}
