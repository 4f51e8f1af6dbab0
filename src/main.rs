use anyhow::Context;
use clap::Parser;

use gateway_console::{config, refresh, server};

#[derive(Parser)]
#[command(name = "gateway-console")]
#[command(about = "Platform Gateway admin console (demo)")]
#[command(version)]
struct Cli {
    #[arg(long, help = "Port to listen on (overrides config)")]
    port: Option<u16>,

    #[arg(long, help = "Address to bind (overrides config)")]
    bind: Option<String>,

    #[arg(long, help = "Disable demo mode and call the configured gateway API instead")]
    no_demo: bool,

    #[arg(long, help = "Base URL of the real gateway API")]
    api_base_url: Option<String>,

    #[arg(long, help = "Path of the persisted console state file")]
    state_file: Option<String>,
}

impl Cli {
    /// Flags win over environment; the config singleton reads the
    /// environment once, so apply them before the first access
    fn export(&self) {
        if let Some(port) = self.port {
            std::env::set_var("GATEWAY_PORT", port.to_string());
        }
        if let Some(bind) = &self.bind {
            std::env::set_var("GATEWAY_BIND", bind);
        }
        if self.no_demo {
            std::env::set_var("DEMO_ENABLED", "false");
        }
        if let Some(url) = &self.api_base_url {
            std::env::set_var("API_BASE_URL", url);
        }
        if let Some(path) = &self.state_file {
            std::env::set_var("DEMO_STATE_FILE", path);
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up GATEWAY_PORT, DEMO_ENABLED, etc.
    let _ = dotenvy::dotenv();

    Cli::parse().export();

    let config = config::config();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gateway_console=debug,info".into()),
        )
        .init();
    tracing::info!(
        "Starting Platform Gateway console in {:?} mode",
        config.environment
    );

    let state = server::build_state().await?;
    refresh::spawn_dashboard_refresh(state.clone());

    let app = server::app(state);

    let bind_addr = format!("{}:{}", config.server.bind, config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    println!("🚀 Platform Gateway console listening on http://{}", bind_addr);

    axum::serve(listener, app).await.context("server")?;
    Ok(())
}
