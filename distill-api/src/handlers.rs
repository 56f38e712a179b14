use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use distill_app::domain::{Completion, Endpoint};
use distill_app::AppContext;
use distill_errors::AppError;
use serde::Serialize;
use tracing::Instrument;

pub const API_KEY_HEADER: &str = "x-api-key";

#[derive(Serialize)]
pub struct Greeting {
    greeting: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    status: &'static str,
    timestamp: String,
    completion_configured: bool,
}

pub async fn generate(
    ctx: AppContext,
    endpoint: &'static Endpoint,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Completion>, AppError> {
    let span = tracing::info_span!(
        "generate",
        endpoint = endpoint.name,
        request_id = %uuid::Uuid::new_v4()
    );

    async move {
        let presented = headers
            .get(API_KEY_HEADER)
            .and_then(|value| value.to_str().ok());
        if !ctx.is_authorized(presented) {
            tracing::warn!("Rejected request with missing or invalid API key");
            return Err(AppError::MissingOrInvalidCredential);
        }

        match ctx.generate_content.execute(endpoint, &body).await {
            Ok(completion) => {
                tracing::info!("Completion generated");
                Ok(Json(completion))
            }
            Err(e) => {
                if e.is_client_error() {
                    tracing::warn!("Request rejected: {}", e);
                } else {
                    tracing::error!("Request failed: {}", e);
                }
                Err(e)
            }
        }
    }
    .instrument(span)
    .await
}

pub async fn greeting() -> Json<Greeting> {
    Json(Greeting {
        greeting: "Hello World!!",
    })
}

pub async fn health(State(ctx): State<AppContext>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "operational",
        timestamp: chrono::Utc::now().to_rfc3339(),
        completion_configured: ctx.generate_content.is_configured(),
    })
}
