use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "shopify-files")]
#[command(about = "List, export and download every file of a Shopify shop", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP server (OAuth routes and the file catalog API)
    Serve {
        /// Port to listen on (defaults to PORT, then 3000)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Write the catalog of the configured shop to a CSV file
    Export {
        /// Destination CSV path
        #[arg(short, long, default_value = "shopify_files.csv")]
        output: PathBuf,
    },

    /// Download every file of the configured shop into a folder
    Download {
        /// Destination folder
        #[arg(short, long, default_value = "shopify_files")]
        dir: PathBuf,
    },
}
