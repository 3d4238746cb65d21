mod cli;

use clap::Parser;
use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use shopify_file_catalog::export::{self, ExportError};
use shopify_file_catalog::server::{self, AppState};
use shopify_file_catalog::{CatalogError, ConfigError, FileCatalog, Settings};

use cli::{Cli, Commands};

#[derive(Debug, Error)]
enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("SHOP and ACCESS_TOKEN must be set for this command")]
    MissingStandalone,

    #[error("Failed to fetch files: {0}")]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    if let Err(e) = dotenvy::dotenv() {
        if !matches!(e, dotenvy::Error::Io(ref io_err) if io_err.kind() == std::io::ErrorKind::NotFound)
        {
            eprintln!("Warning: Failed to load .env file: {e}");
        }
    }

    init_tracing();

    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .try_init();
}

async fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    let settings = Settings::from_env()?;

    match cli.command {
        Commands::Serve { port } => {
            let port = port.unwrap_or(settings.port);
            server::serve(AppState::from(settings), port).await?;
        }
        Commands::Export { output } => {
            let catalog = fetch_configured(&settings).await?;
            if export::export_csv(&output, &catalog.files)? {
                println!("Saved {} files to {}", catalog.total, output.display());
            } else {
                println!("No files found, nothing saved");
            }
        }
        Commands::Download { dir } => {
            let catalog = fetch_configured(&settings).await?;
            let report =
                export::download_all(&dir, &catalog.files, settings.config.request_timeout())
                    .await?;
            println!(
                "Downloaded {}, skipped {}, failed {} (of {}) into {}",
                report.downloaded,
                report.skipped,
                report.failed,
                catalog.total,
                dir.display()
            );
        }
    }

    Ok(())
}

async fn fetch_configured(settings: &Settings) -> Result<FileCatalog, CliError> {
    let session = settings
        .standalone
        .as_ref()
        .ok_or(CliError::MissingStandalone)?;

    let fetcher = shopify_file_catalog::FileCatalogFetcher::new(settings.config.clone());
    Ok(fetcher.fetch_all(session).await?)
}
