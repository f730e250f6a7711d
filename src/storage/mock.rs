use super::BlobStore;
use crate::{Error, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub struct StoredBlob {
    pub data: Vec<u8>,
    pub content_type: String,
}

#[derive(Clone)]
pub struct MockBlobStore {
    account_name: String,
    container_name: String,
    container_exists: Arc<Mutex<bool>>,
    blobs: Arc<Mutex<HashMap<String, StoredBlob>>>,
    properties_error: Option<String>,
    create_conflict: bool,
    properties_count: Arc<Mutex<usize>>,
    create_count: Arc<Mutex<usize>>,
    upload_count: Arc<Mutex<usize>>,
}

impl MockBlobStore {
    pub fn new() -> Self {
        Self {
            account_name: "mockaccount".to_string(),
            container_name: "moltbook-images".to_string(),
            container_exists: Arc::new(Mutex::new(false)),
            blobs: Arc::new(Mutex::new(HashMap::new())),
            properties_error: None,
            create_conflict: false,
            properties_count: Arc::new(Mutex::new(0)),
            create_count: Arc::new(Mutex::new(0)),
            upload_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_account_name(mut self, account_name: String) -> Self {
        self.account_name = account_name;
        self
    }

    pub fn with_container_name(mut self, container_name: String) -> Self {
        self.container_name = container_name;
        self
    }

    pub fn with_existing_container(self) -> Self {
        *self.container_exists.lock().unwrap() = true;
        self
    }

    /// Fail the properties fetch with something other than "not found".
    pub fn with_properties_error(mut self, message: String) -> Self {
        self.properties_error = Some(message);
        self
    }

    /// Report a conflict on create, as when another process created the
    /// container first.
    pub fn with_create_conflict(mut self) -> Self {
        self.create_conflict = true;
        self
    }

    pub fn container_exists(&self) -> bool {
        *self.container_exists.lock().unwrap()
    }

    pub fn get_blob(&self, blob_name: &str) -> Option<StoredBlob> {
        self.blobs.lock().unwrap().get(blob_name).cloned()
    }

    pub fn get_properties_count(&self) -> usize {
        *self.properties_count.lock().unwrap()
    }

    pub fn get_create_count(&self) -> usize {
        *self.create_count.lock().unwrap()
    }

    pub fn get_upload_count(&self) -> usize {
        *self.upload_count.lock().unwrap()
    }

    pub fn remote_call_count(&self) -> usize {
        self.get_properties_count() + self.get_create_count() + self.get_upload_count()
    }
}

impl Default for MockBlobStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlobStore for MockBlobStore {
    fn account_name(&self) -> &str {
        &self.account_name
    }

    fn container_name(&self) -> &str {
        &self.container_name
    }

    async fn fetch_container_properties(&self) -> Result<()> {
        *self.properties_count.lock().unwrap() += 1;

        if let Some(message) = &self.properties_error {
            return Err(Error::Storage(message.clone()));
        }
        if self.container_exists() {
            Ok(())
        } else {
            Err(Error::ContainerNotFound(self.container_name.clone()))
        }
    }

    async fn create_public_container(&self) -> Result<()> {
        *self.create_count.lock().unwrap() += 1;

        let mut exists = self.container_exists.lock().unwrap();
        if *exists || self.create_conflict {
            *exists = true;
            return Err(Error::ContainerAlreadyExists(self.container_name.clone()));
        }
        *exists = true;
        Ok(())
    }

    async fn upload_blob(
        &self,
        blob_name: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<()> {
        *self.upload_count.lock().unwrap() += 1;

        if !self.container_exists() {
            return Err(Error::ContainerNotFound(self.container_name.clone()));
        }

        self.blobs.lock().unwrap().insert(
            blob_name.to_string(),
            StoredBlob {
                data,
                content_type: content_type.to_string(),
            },
        );
        Ok(())
    }
}
