//! Municipal Grievance Portal Backend
//!
//! Serves the citizen grievance flow (login, location, department, complaint)
//! and the staff dashboard as localized JSON view models.

mod api;
mod catalogue;
mod config;
mod db;
mod errors;
mod i18n;
mod models;
mod portal;
mod views;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use db::PreferenceStore;
use portal::SessionStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionStore>,
    pub preferences: Arc<PreferenceStore>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Municipal Grievance Portal");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);
    tracing::info!(
        login_delay_ms = config.login_delay.as_millis() as u64,
        submit_delay_ms = config.submit_delay.as_millis() as u64,
        "Simulated backend latency"
    );

    i18n::log_coverage();

    // Initialize database
    let pool = db::init_database(&config.db_path).await?;
    let preferences = Arc::new(PreferenceStore::new(pool));

    let sessions = Arc::new(SessionStore::new());
    if config.session_ttl.is_zero() {
        tracing::info!("Session expiry disabled");
    } else {
        tracing::info!(ttl_secs = config.session_ttl.as_secs(), "Session expiry enabled");
        sessions.spawn_expiry(config.session_ttl);
    }

    // Create application state
    let state = AppState {
        sessions,
        preferences,
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Reference data
        .route("/locales", get(api::list_locales))
        .route("/translations/coverage", get(api::translation_coverage))
        .route("/translations/{locale}", get(api::get_translations))
        .route("/locations/states", get(api::list_states))
        .route(
            "/locations/states/{state_id}/districts",
            get(api::list_districts),
        )
        .route("/departments", get(api::list_departments))
        // Sessions
        .route("/sessions", post(api::create_session))
        .route("/sessions/{id}", get(api::get_session))
        .route("/sessions/{id}", delete(api::end_session))
        .route("/sessions/{id}/locale", put(api::set_locale))
        // Login
        .route("/sessions/{id}/login/toggle", post(api::toggle_signup))
        .route("/sessions/{id}/login/citizen", post(api::login_citizen))
        .route("/sessions/{id}/login/staff", post(api::login_staff))
        // Location
        .route("/sessions/{id}/location/state", put(api::select_state))
        .route("/sessions/{id}/location/district", put(api::select_district))
        .route("/sessions/{id}/location/continue", post(api::confirm_location))
        // Departments and complaints
        .route(
            "/sessions/{id}/departments/{department_id}",
            post(api::select_department),
        )
        .route("/sessions/{id}/complaint", put(api::update_complaint))
        .route(
            "/sessions/{id}/complaint/attachments",
            post(api::add_attachment),
        )
        .route(
            "/sessions/{id}/complaint/attachments/{index}",
            delete(api::remove_attachment),
        )
        .route(
            "/sessions/{id}/complaint/submit",
            post(api::submit_complaint),
        )
        .route(
            "/sessions/{id}/complaint/back",
            post(api::back_to_departments),
        );

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests;
