use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tennis_stats::api::state::AppState;
use tennis_stats::api::{build_router_with, RouterOptions};
use tennis_stats::calculate::aggregate;
use tennis_stats::config::AppConfig;
use tennis_stats::storage::StorageConfig;

#[derive(Parser)]
#[command(name = "tennis-stats")]
#[command(about = "Read-only HTTP API over a tennis player dataset")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: PathBuf,

    /// Player dataset path (overrides the config file)
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        /// Bind address
        #[arg(long)]
        host: Option<String>,

        /// Port number
        #[arg(long)]
        port: Option<u16>,

        /// Log all HTTP requests
        #[arg(long)]
        access_log: bool,
    },

    /// Print dataset statistics as JSON and exit
    Stats,
}

fn init_tracing(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::from_file_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if let Some(data_file) = cli.data_file {
        config.data_file = data_file;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    init_tracing(&config.log_level, cli.json_logs);
    tracing::info!("Starting tennis-stats v{}", env!("CARGO_PKG_VERSION"));

    let storage = StorageConfig::new(config.data_file.clone());

    match cli.command {
        Commands::Serve {
            host,
            port,
            access_log,
        } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            config.validate()?;

            let state = AppState {
                storage: Arc::new(storage),
            };
            let options = RouterOptions {
                cors_origin: config.server.cors_origin.clone(),
                access_log,
            };
            let app = build_router_with(state, &options);

            let addr = format!("{}:{}", config.server.host, config.server.port);
            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("binding {}", addr))?;
            tracing::info!("Serving {:?} on http://{}", config.data_file, addr);
            axum::serve(listener, app).await?;
        }
        Commands::Stats => {
            let players = storage.players().read_all()?;
            let stats = aggregate(&players)?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }

    Ok(())
}
