//! Uploader for images hosted on Azure Blob Storage
//!
//! Uploads a local image to a public blob container and produces the public
//! URL together with a Markdown image tag for embedding in posts.

pub mod app;
pub mod error;
pub mod mime;
pub mod models;
pub mod storage;
pub mod uploader;

pub use error::{Error, Result};
