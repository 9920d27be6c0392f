//! # Server Configuration
//!
//! Router setup and server startup for the Customer Directory service.

use axum::{Router, routing::get};
use sea_orm::DatabaseConnection;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::handlers::{self, customers};

/// Application state containing shared resources.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

/// Creates and configures the Axum application router.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/customers", get(customers::list_customers))
        .route(
            "/customers/create",
            get(customers::create_customer_form).post(customers::create_customer),
        )
        .route(
            "/customers/{customer_id}/edit",
            get(customers::edit_customer_form).post(customers::update_customer),
        )
        .route(
            "/customers/{customer_id}/delete",
            get(customers::delete_customer_form).post(customers::delete_customer),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Starts the server with the given configuration.
pub async fn run_server(
    config: AppConfig,
    db: DatabaseConnection,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState { db };
    let app = create_app(state);

    let addr = config
        .bind_addr()
        .map_err(|e| format!("invalid server address: {}", e))?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
