mod import;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use vendorbook_core::{Environment, VendorCategory, VendorField};

#[derive(Debug, Parser)]
#[command(name = "vendorbook")]
#[command(about = "Turn pasted wedding-vendor listings into import-ready records")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse listing text and print the import batch as JSON
    Parse {
        /// Read listing text from this file instead of stdin
        #[arg(long, short)]
        input: Option<PathBuf>,
        /// Category tag for the batch (e.g. venue, photographer, hair-makeup)
        #[arg(long)]
        category: Option<VendorCategory>,
        /// Print single-line JSON
        #[arg(long)]
        compact: bool,
    },
    /// Parse listing text and list each vendor's warnings
    Check {
        /// Read listing text from this file instead of stdin
        #[arg(long, short)]
        input: Option<PathBuf>,
    },
    /// Change one field of one vendor in a previously printed batch
    Edit {
        /// Batch JSON produced by `parse` (stdin when omitted)
        #[arg(long, short)]
        input: Option<PathBuf>,
        /// Zero-based position of the vendor in the batch
        #[arg(long)]
        index: usize,
        /// Field key, e.g. email or serviceArea
        #[arg(long)]
        field: VendorField,
        /// New value; omit to clear the field
        #[arg(long)]
        value: Option<String>,
        /// Print single-line JSON
        #[arg(long)]
        compact: bool,
    },
}

/// Colored log output is only for local development runs.
fn log_ansi(env: &Environment) -> bool {
    matches!(env, Environment::Development)
}

fn main() -> anyhow::Result<()> {
    let config = vendorbook_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(log_ansi(&config.env))
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(env = %config.env, "loaded configuration");

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Parse {
            input,
            category,
            compact,
        }) => import::run_parse(&config, input.as_deref(), category, compact),
        Some(Commands::Check { input }) => import::run_check(&config, input.as_deref()),
        Some(Commands::Edit {
            input,
            index,
            field,
            value,
            compact,
        }) => import::run_edit(&config, input.as_deref(), index, field, value, compact),
        None => {
            println!("vendorbook: no command given (try `vendorbook --help`)");
            Ok(())
        }
    }
}
