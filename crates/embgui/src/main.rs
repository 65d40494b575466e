//! embgui CLI.
//!
//! Provides commands for:
//! - `serve`: Start the demo server
//! - `render`: Print a rendered demo page

mod commands;
mod error;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{RenderArgs, ServeArgs};

/// embgui - server-side markup tree builder.
#[derive(Parser)]
#[command(name = "embgui", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the demo server.
    Serve(ServeArgs),
    /// Render a demo page to stdout.
    Render(RenderArgs),
}

fn main() {
    let cli = Cli::parse();

    // --verbose enables INFO everywhere (request traces). Otherwise RUST_LOG
    // wins, falling back to WARN plus the CLI's own startup messages.
    let verbose = matches!(&cli.command, Commands::Serve(args) if args.verbose);
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,embgui=info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Serve(args) => match tokio::runtime::Runtime::new() {
            Ok(rt) => rt.block_on(args.execute()),
            Err(e) => Err(e.into()),
        },
        Commands::Render(args) => args.execute(),
    };

    if let Err(err) = result {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}
