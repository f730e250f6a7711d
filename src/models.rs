//! Data models and structures
//!
//! Defines the upload request and result along with the storage
//! configuration read from the environment.

use crate::{Error, Result};
use std::path::{Path, PathBuf};

pub const CONNECTION_STRING_VAR: &str = "AZURE_STORAGE_CONNECTION_STRING";
pub const CONTAINER_NAME_VAR: &str = "AZURE_CONTAINER_NAME";
pub const DEFAULT_CONTAINER_NAME: &str = "moltbook-images";
pub const DEFAULT_ALT_TEXT: &str = "Image";

#[derive(Debug, Clone, PartialEq)]
pub struct UploadRequest {
    pub file_path: PathBuf,
    pub blob_name: Option<String>,
    pub alt_text: String,
}

impl UploadRequest {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            blob_name: None,
            alt_text: DEFAULT_ALT_TEXT.to_string(),
        }
    }

    pub fn with_blob_name(mut self, blob_name: impl Into<String>) -> Self {
        self.blob_name = Some(blob_name.into());
        self
    }

    pub fn with_alt_text(mut self, alt_text: impl Into<String>) -> Self {
        self.alt_text = alt_text.into();
        self
    }

    /// Base name of the local file, if the path has one.
    pub fn file_name(&self) -> Option<String> {
        self.file_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
    }

    /// The explicit blob name, or the file's base name when none (or an empty
    /// one) was given.
    pub fn resolve_blob_name(&self) -> Result<String> {
        match self.blob_name.as_deref() {
            Some(name) if !name.is_empty() => Ok(name.to_string()),
            _ => self.file_name().ok_or_else(|| {
                Error::InvalidInput(format!(
                    "Cannot derive a blob name from {}",
                    self.file_path.display()
                ))
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadResult {
    pub public_url: String,
    pub blob_name: String,
    pub content_type: String,
    pub container_created: bool,
}

impl UploadResult {
    pub fn markdown(&self, alt_text: &str) -> String {
        format!("![{}]({})", alt_text, self.public_url)
    }
}

// Configuration
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub connection_string: String,
    pub container_name: String,
}

impl StorageConfig {
    /// Load `.env` files and read the storage settings from the process
    /// environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        // Allow a .env that ships next to the binary, as the working directory
        // is often elsewhere.
        if let Some(env_file) = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(".env")))
        {
            if env_file.is_file() {
                dotenvy::from_path(&env_file).ok();
            }
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let connection_string = lookup(CONNECTION_STRING_VAR)
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| {
                Error::Configuration(format!("{} not set in .env", CONNECTION_STRING_VAR))
            })?;

        let container_name = lookup(CONTAINER_NAME_VAR)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_CONTAINER_NAME.to_string());

        Ok(Self {
            connection_string,
            container_name,
        })
    }
}

/// Base name of a path for display, falling back to the full path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
