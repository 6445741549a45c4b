//! Ember Record Keeper server.
//!
//! A small record-management service: users sign in against a fixed
//! identity list and submit free-text requests; admins browse users,
//! adjust balances, and respond to requests. Everything lives in process
//! memory behind the store seams.

pub mod api;
pub mod config;
pub mod error;
pub mod seed;
pub mod services;
pub mod state;

use std::sync::Arc;

use auth::MemorySessionSlot;
use axum::Router;
use record_store::{IdentityStore, RecordStore};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::Config;
use crate::services::notifier::TracingNotifier;
use crate::state::{AppState, create_shared_state};

/// Creates the application router with all routes configured.
pub fn create_app<I, R>(state: Arc<AppState<I, R>>) -> Router
where
    I: IdentityStore + 'static,
    R: RecordStore + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    api::create_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Creates the application state with the given configuration and stores.
pub fn create_state<I, R>(config: Config, identities: I, records: R) -> Arc<AppState<I, R>>
where
    I: IdentityStore,
    R: RecordStore,
{
    create_shared_state(
        config,
        identities,
        records,
        Arc::new(MemorySessionSlot::new()),
        Arc::new(TracingNotifier),
    )
}

/// Initializes tracing with the given log level.
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
