//! # ledgerhubd — ledgerhub daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Open the configured ledger backend
//! - Construct the registry and dispatcher, injecting the store via the port
//! - Build the axum router and serve
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

use std::sync::Arc;

use ledgerhub_adapter_http_axum::state::AppState;
use ledgerhub_adapter_storage_memory::MemoryStore;
use ledgerhub_adapter_storage_redb::RedbStore;
use ledgerhub_app::dispatch::Dispatcher;
use ledgerhub_app::ports::KeyedStore;
use ledgerhub_app::services::DeviceRegistry;

use crate::config::{Config, StorageBackend};

mod config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    tracing::info!(backend = %config.storage.backend, "starting ledgerhubd");

    match config.storage.backend {
        StorageBackend::Memory => serve(MemoryStore::new(), &config).await,
        StorageBackend::Redb => serve(RedbStore::open(&config.storage.path)?, &config).await,
    }
}

async fn serve<S>(store: S, config: &Config) -> anyhow::Result<()>
where
    S: KeyedStore + Send + Sync + 'static,
{
    let registry = Arc::new(DeviceRegistry::new(store));
    let dispatcher = Dispatcher::new(registry);
    let app = ledgerhub_adapter_http_axum::router::build(AppState::new(dispatcher));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "ledgerhubd listening");

    axum::serve(listener, app).await?;

    Ok(())
}
