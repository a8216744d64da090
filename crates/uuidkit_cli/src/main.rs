//! uuidkit CLI
//!
//! Command-line front end for the uuidkit codec.
//!
//! # Commands
//!
//! - `new` - Generate random version-4 UUIDs
//! - `str` - Normalize a UUID to its canonical string form
//! - `blob` - Normalize a UUID to its 16-byte form, printed as hex
//! - `version` - Show version information

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// uuidkit command-line tools.
#[derive(Parser)]
#[command(name = "uuidkit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate random version-4 UUIDs
    New {
        /// Number of UUIDs to generate
        #[arg(short, long, default_value = "1")]
        count: usize,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Normalize a UUID to its canonical string form
    Str {
        /// UUID input: loose text, or hex-encoded bytes with --hex
        input: String,

        /// Treat the input as hex-encoded blob bytes
        #[arg(long)]
        hex: bool,
    },

    /// Normalize a UUID to its 16-byte form, printed as hex
    Blob {
        /// UUID input: loose text, or hex-encoded bytes with --hex
        input: String,

        /// Treat the input as hex-encoded blob bytes
        #[arg(long)]
        hex: bool,

        /// Output format (hex, json)
        #[arg(short, long, default_value = "hex")]
        format: String,
    },

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::New { count, format } => {
            commands::new::run(count, &format)?;
        }
        Commands::Str { input, hex } => {
            commands::convert::run_str(&input, hex)?;
        }
        Commands::Blob { input, hex, format } => {
            commands::convert::run_blob(&input, hex, &format)?;
        }
        Commands::Version => {
            println!("uuidkit CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("uuidkit codec v{}", uuidkit_codec::version());
        }
    }

    Ok(())
}
