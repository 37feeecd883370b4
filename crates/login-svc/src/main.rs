//! Login Service - credential registration and verification

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod app;
mod config;

use app::App;
use config::{Config, LoggingConfig};

/// Login Service - register and verify user credentials
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml", env = "LOGIN_SVC_CONFIG")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Register a new login
    Add {
        /// Username (an e-mail address)
        #[arg(short, long)]
        username: String,

        /// Password
        #[arg(short, long, env = "LOGIN_SVC_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Check a username and password
    Verify {
        /// Username (an e-mail address)
        #[arg(short, long)]
        username: String,

        /// Password
        #[arg(short, long, env = "LOGIN_SVC_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// List recorded login events, newest first
    Events {
        /// Only show events for this topic
        #[arg(short, long)]
        topic: Option<String>,

        /// Maximum number of events to show
        #[arg(
            short,
            long,
            default_value_t = 20,
            value_parser = clap::value_parser!(i64).range(1..)
        )]
        limit: i64,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration
    let config = Config::load(&args.config)?;

    // Initialize logging
    init_logging(&config.logging);

    info!("Starting login-svc v{}", env!("CARGO_PKG_VERSION"));

    let app = App::build(&config).await?;

    let result = run(&app, args.command).await;

    if let Some(db) = &app.database {
        db.pool().close().await;
    }

    result
}

/// Run one command and map its outcome to an exit code
async fn run(app: &App, command: Command) -> Result<ExitCode> {
    let outcome = match command {
        Command::Add { username, password } => app.add(&username, &password).await?,
        Command::Verify { username, password } => app.verify(&username, &password).await?,
        Command::Events { topic, limit } => {
            for event in app.events(topic.as_deref(), limit).await? {
                println!(
                    "{}\t{}\t{}\t{}",
                    event.id,
                    event.timestamp.to_rfc3339(),
                    event.topic,
                    event.payload
                );
            }
            return Ok(ExitCode::SUCCESS);
        }
    };

    println!("{}", outcome.message());

    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Initialize logging
///
/// Logs go to stderr so command output on stdout stays machine-readable.
fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let registry = tracing_subscriber::registry().with(filter);

    if config.format == "json" {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
