//! Guide server - HTTP backend for the interactive home buying guide.

mod config;
mod logging;
mod routes;
mod state;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use guide::GuideStore;
use tracing::info;

use crate::config::{Overrides, load_config};
use crate::state::AppState;

#[derive(Parser)]
#[command(name = "guide-server")]
#[command(about = "HTTP backend for the interactive home buying guide")]
struct Args {
    /// Address to bind the server to [default: 0.0.0.0]
    #[arg(long, env = "BACKEND_BIND")]
    bind: Option<String>,

    /// Port to listen on [default: 3001]
    #[arg(long, env = "BACKEND_PORT")]
    port: Option<u16>,

    /// Browser origin allowed to call the API [default: http://localhost:3000]
    #[arg(long, env = "FRONTEND_ORIGIN")]
    frontend_origin: Option<String>,

    /// Optional TOML file with `bind`, `port`, and `frontend_origin`
    #[arg(long, env = "BACKEND_CONFIG")]
    config: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            bind: self.bind.clone(),
            port: self.port,
            frontend_origin: self.frontend_origin.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref(), &args.overrides())
        .context("load server configuration")?;

    let store = GuideStore::seeded();
    info!(steps = store.len(), "guide store seeded");

    let state = AppState::new(store);
    let app = routes::app(state, config.allowed_origin()?);

    let addr = config.socket_addr()?;
    info!(addr = %addr, origin = %config.frontend_origin, "listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
