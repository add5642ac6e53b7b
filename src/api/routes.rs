//! Route configuration for the card cost API.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | POST | /payment-card-cost | `payment_card_cost` |
//! | POST | /card-costs | `create_card_cost` |
//! | GET | /card-costs | `get_all_card_costs` |
//! | GET | /card-costs/{id} | `get_card_cost` |
//! | PUT | /card-costs/{id} | `update_card_cost` |
//! | DELETE | /card-costs/{id} | `delete_card_cost` |
//! | GET | /health | `health_check` |

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use crate::api::handlers::card_costs::{
    create_card_cost, delete_card_cost, get_all_card_costs, get_card_cost, update_card_cost,
};
use crate::api::handlers::payment::payment_card_cost;
use crate::infrastructure::AppDependencies;

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// GET /health - Health check endpoint.
#[allow(clippy::unused_async)]
pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    (StatusCode::OK, Json(response))
}

/// Creates the axum router with all API routes and the shared dependency
/// container as state.
pub fn create_router(dependencies: AppDependencies) -> Router {
    Router::new()
        .route("/payment-card-cost", post(payment_card_cost))
        .route("/card-costs", post(create_card_cost).get(get_all_card_costs))
        .route(
            "/card-costs/{id}",
            get(get_card_cost)
                .put(update_card_cost)
                .delete(delete_card_cost),
        )
        .route("/health", get(health_check))
        .with_state(dependencies)
}
