//! vigil CLI - periodic status poller for a local detector server.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod display;

#[derive(Parser)]
#[command(name = "vigil")]
#[command(about = "Periodic status poller for a local detector server", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (warnings and errors only)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Poll the status server continuously, printing one record per cycle
    Run {
        /// Status server address (host or host:port)
        #[arg(short, long, default_value = vigil_types::DEFAULT_SERVER_ADDRESS)]
        server: String,

        /// Poll interval in milliseconds
        #[arg(short, long)]
        interval_ms: Option<String>,

        /// Stop after this many records (default: poll until interrupted)
        #[arg(short, long)]
        count: Option<u64>,

        /// Emit records as JSON lines
        #[arg(long)]
        json: bool,
    },

    /// Fetch the status once and exit (non-zero when unreachable)
    Check {
        /// Status server address (host or host:port)
        #[arg(short, long, default_value = vigil_types::DEFAULT_SERVER_ADDRESS)]
        server: String,

        /// Emit the record as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_filter = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Run {
            server,
            interval_ms,
            count,
            json,
        } => commands::run::run(&server, interval_ms.as_deref(), count, json).await,
        Commands::Check { server, json } => commands::check::check(&server, json).await,
    }
}
