use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::{json, Map, Value};

use super::service::CompliancePackageService;
use crate::workflows::payments::{CheckoutPlan, PaymentGateway};

const NO_CACHE: &str = "no-store, no-cache, must-revalidate";

/// Router exposing checkout creation and package generation.
pub fn compliance_router<G>(service: Arc<CompliancePackageService<G>>) -> Router
where
    G: PaymentGateway + 'static,
{
    Router::new()
        .route("/api/generate", post(generate_handler::<G>))
        .route("/api/checkout", post(checkout_handler::<G>))
        .with_state(service)
}

/// Parse a body as a JSON object; anything else reads as an empty map so the
/// normalizer reports the first missing field.
fn object_payload(body: &[u8]) -> Map<String, Value> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

pub(crate) async fn generate_handler<G>(
    State(service): State<Arc<CompliancePackageService<G>>>,
    body: Bytes,
) -> Response
where
    G: PaymentGateway + 'static,
{
    let payload = object_payload(&body);
    match service.generate(&payload).await {
        Ok(package) => {
            let disposition = format!("attachment; filename=\"{}\"", package.archive.file_name);
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "application/zip".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                    (header::CACHE_CONTROL, NO_CACHE.to_string()),
                    (header::PRAGMA, "no-cache".to_string()),
                ],
                package.archive.bytes,
            )
                .into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub(crate) async fn checkout_handler<G>(
    State(service): State<Arc<CompliancePackageService<G>>>,
    body: Bytes,
) -> Response
where
    G: PaymentGateway + 'static,
{
    let payload = object_payload(&body);
    let plan = CheckoutPlan::from_request(payload.get("mode").and_then(Value::as_str));

    match service.gateway().create_checkout(plan).await {
        Ok(session) => (StatusCode::OK, Json(json!({ "url": session.url }))).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "checkout creation failed");
            let payload = json!({
                "error": "payment_lookup_error",
                "message": err.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}
