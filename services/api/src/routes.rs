use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use card_payoff::error::AppError;
use card_payoff::simulation::{
    import_cards, simulation_router, CardInput, PayoffSimulationService, SimulationObserver,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct CardImportRequest {
    pub(crate) csv: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct CardImportResponse {
    pub(crate) cards: Vec<CardInput>,
}

pub(crate) fn with_simulation_routes<O>(service: Arc<PayoffSimulationService<O>>) -> axum::Router
where
    O: SimulationObserver + 'static,
{
    simulation_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/cards/import",
            axum::routing::post(card_import_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Turns a spreadsheet export into card inputs the form can prefill.
pub(crate) async fn card_import_endpoint(
    Json(payload): Json<CardImportRequest>,
) -> Result<Json<CardImportResponse>, AppError> {
    let cards = import_cards(Cursor::new(payload.csv.into_bytes()))?;
    tracing::debug!(cards = cards.len(), "cards imported");
    Ok(Json(CardImportResponse { cards }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::TracingObserver;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;
    use tower::ServiceExt;

    fn app_state(ready: bool) -> AppState {
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        }
    }

    #[tokio::test]
    async fn card_import_endpoint_returns_cards() {
        let request = CardImportRequest {
            csv: "id,name,debt,rate,minimum\n1,Inter,\"2.500,00\",\"11,90\",\"150,00\"\n"
                .to_string(),
        };

        let Json(body) = card_import_endpoint(Json(request))
            .await
            .expect("import succeeds");

        assert_eq!(body.cards.len(), 1);
        assert_eq!(body.cards[0].name, "Inter");
        assert_eq!(body.cards[0].monthly_rate, "11,90");
    }

    #[tokio::test]
    async fn card_import_endpoint_rejects_rows_without_id() {
        let request = CardImportRequest {
            csv: "id,name,debt,rate,minimum\n,Inter,100,5,10\n".to_string(),
        };

        let err = card_import_endpoint(Json(request))
            .await
            .expect_err("missing id rejected");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn readiness_reports_initializing_until_bound() {
        let response = readiness_endpoint(Extension(app_state(false)))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response = readiness_endpoint(Extension(app_state(true)))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn health_route_is_mounted_beside_simulations() {
        let service = Arc::new(PayoffSimulationService::new(Arc::new(TracingObserver)));
        let router = with_simulation_routes(service);

        let response = router
            .oneshot(
                axum::http::Request::get("/health")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
    }
}
