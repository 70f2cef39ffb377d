//! sales-chat server binary

use clap::Parser;
use sales_chat::{AppConfig, AppState, api};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "sales-chat")]
#[command(about = "Sales data API with a Gemini-backed assistant")]
struct Cli {
    /// Host to bind to (overrides SALES_CHAT_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides SALES_CHAT_PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Sales data JSON file (overrides SALES_DATA_PATH)
    #[arg(short, long, value_name = "PATH")]
    data: Option<PathBuf>,

    /// Gemini model name (overrides GEMINI_MODEL)
    #[arg(short, long)]
    model: Option<String>,
}

impl Cli {
    fn apply(self, mut config: AppConfig) -> AppConfig {
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(data) = self.data {
            config.data_path = data;
        }
        if let Some(model) = self.model {
            config.gemini.model = model;
        }
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Cli::parse().apply(AppConfig::from_env());

    info!("Sales data: {}", config.data_path.display());
    info!("Gemini model: {}", config.gemini.model);
    if config.gemini.api_key.is_none() {
        warn!("GEMINI_API_KEY is not set; chatbot requests will fail");
    }

    let state = AppState::from_config(&config)?;

    // Warm the cache so a bad data file is reported at startup
    let dataset = state.store.load().await;
    info!("Sales reps loaded: {}", dataset.sales_reps.len());

    let app = api::router_with_cors(state, &config.cors_origin);
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("received shutdown signal");
        })
        .await?;

    Ok(())
}
