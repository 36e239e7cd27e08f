//! Garden Planner - Backend Server
//!
//! JSON API over the planting compatibility and recommendation engine:
//! plant catalog queries, zone resolution, pest alerts, calendar tasks and
//! weather advice.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shared::{PestAlertTable, PlantCatalog};

mod config;
mod error;
mod handlers;
mod routes;
mod services;

pub use config::Config;
use error::{AppError, AppResult};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<PlantCatalog>,
    pub pest_alerts: Arc<PestAlertTable>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Load the catalog and alert table, from configured files when set
    pub fn load(config: Config) -> AppResult<Self> {
        let catalog = match &config.catalog.plants_path {
            Some(path) => PlantCatalog::from_json(&read_data_file(path)?)?,
            None => PlantCatalog::builtin()?,
        };
        let pest_alerts = match &config.catalog.pest_alerts_path {
            Some(path) => PestAlertTable::from_json(&read_data_file(path)?)?,
            None => PestAlertTable::builtin()?,
        };

        tracing::info!(
            "Loaded {} plants and {} pest alert bands",
            catalog.len(),
            pest_alerts.bands().len()
        );

        Ok(Self {
            catalog: Arc::new(catalog),
            pest_alerts: Arc::new(pest_alerts),
            config: Arc::new(config),
        })
    }

    /// State backed by the compiled-in data and default configuration
    #[cfg(test)]
    pub fn builtin() -> AppResult<Self> {
        Self::load(Config::default())
    }
}

fn read_data_file(path: &str) -> AppResult<String> {
    tracing::info!("Reading catalog data from {}", path);
    std::fs::read_to_string(path)
        .map_err(|e| AppError::Configuration(format!("Cannot read {}: {}", path, e)))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "garden_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting Garden Planner Server");
    tracing::info!("Environment: {}", config.environment);

    let addr = config.bind_address();

    // Create application state
    let state = AppState::load(config)?;

    // Build application
    let app = create_app(state);

    // Start server
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Garden Planner API v1.0"
}
