use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::Local;
use serde::Deserialize;
use serde_json::json;

use super::events::SimulationObserver;
use super::intake::SimulationRequest;
use super::service::PayoffSimulationService;

/// Call-to-action report sent when the user follows a recommendation.
#[derive(Debug, Clone, Deserialize)]
pub struct CtaClickRequest {
    pub product: String,
}

/// Router exposing the simulation endpoints.
pub fn simulation_router<O>(service: Arc<PayoffSimulationService<O>>) -> Router
where
    O: SimulationObserver + 'static,
{
    Router::new()
        .route("/api/v1/simulations", post(simulate_handler::<O>))
        .route("/api/v1/simulations/cta", post(cta_handler::<O>))
        .with_state(service)
}

pub(crate) async fn simulate_handler<O>(
    State(service): State<Arc<PayoffSimulationService<O>>>,
    Json(request): Json<SimulationRequest>,
) -> Response
where
    O: SimulationObserver + 'static,
{
    match service.simulate(&request, Local::now().date_naive()) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn cta_handler<O>(
    State(service): State<Arc<PayoffSimulationService<O>>>,
    Json(request): Json<CtaClickRequest>,
) -> Response
where
    O: SimulationObserver + 'static,
{
    if request.product.trim().is_empty() {
        let payload = json!({ "error": "product is required" });
        return (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response();
    }

    service.record_cta_click(request.product.trim());
    (StatusCode::ACCEPTED, Json(json!({ "status": "recorded" }))).into_response()
}
