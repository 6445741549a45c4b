//! Ember Record Keeper server binary.

use std::net::SocketAddr;

use ember_server::{config::Config, create_app, create_state, init_tracing, seed};
use record_store::{MemoryIdentityStore, MemoryRecordStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env();

    // Initialize tracing
    init_tracing(&config.log_level);

    tracing::info!("Starting Ember Record Keeper server");

    // The process entry point owns both stores and hands them to the app
    // state; nothing else holds them.
    let identities = MemoryIdentityStore::new(seed::default_identities());
    let records = MemoryRecordStore::with_records(seed::initial_records());

    // Create application state
    let state = create_state(config.clone(), identities, records);

    // Pick up a previously persisted session marker, if any
    state.restore_session().await;

    // Create application router
    let app = create_app(state);

    // Parse server address
    let addr: SocketAddr = config.server_addr().parse()?;

    tracing::info!(addr = %addr, "Server listening");

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
