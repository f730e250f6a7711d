use anyhow::Result;
use azure_image_uploader::app::App;
use azure_image_uploader::models::{StorageConfig, UploadRequest, DEFAULT_ALT_TEXT};
use clap::Parser;
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "azure-image-uploader")]
#[command(about = "Upload images to Azure Blob Storage")]
struct CliArgs {
    /// Path to the image file.
    #[arg(value_name = "FILE")]
    file_path: PathBuf,

    /// Custom blob name (default: original filename).
    #[arg(long)]
    name: Option<String>,

    /// Alt text for Markdown output.
    #[arg(long, default_value = DEFAULT_ALT_TEXT)]
    alt: String,
}

impl CliArgs {
    fn into_request(self) -> UploadRequest {
        let request = UploadRequest::new(self.file_path).with_alt_text(self.alt);
        match self.name {
            Some(name) => request.with_blob_name(name),
            None => request,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "azure_image_uploader=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let request = CliArgs::parse().into_request();

    let app = match StorageConfig::from_env().and_then(|config| App::from_config(&config)) {
        Ok(app) => app,
        Err(e) => {
            error!("Failed to initialize uploader: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match app.run(&request).await {
        Ok(result) => {
            println!("{}", app.render_summary(&request, &result));
            Ok(())
        }
        Err(e) => {
            error!("Upload failed: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
