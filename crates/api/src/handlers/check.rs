use crate::dto::{CheckResponse, ErrorResponse};
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use tracing::{debug, instrument};

#[derive(Deserialize)]
pub struct CheckParams {
    url: Option<String>,
}

/// `GET /api/check?url=<domain>` — the same decision the resolver
/// makes, exposed for manual testing. 403 blocked / 200 allowed /
/// 400 missing parameter.
#[instrument(skip(state, params), name = "api_check_domain")]
pub async fn check_domain(
    State(state): State<AppState>,
    Query(params): Query<CheckParams>,
) -> Response {
    let Some(url) = params.url.filter(|u| !u.is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "missing 'url' query parameter".to_string(),
            }),
        )
            .into_response();
    };

    let classification = state.classifier.classify(&url).await;
    debug!(
        domain = %classification.domain,
        blocked = classification.is_malicious,
        cache_hit = classification.cache_hit,
        "Check requested"
    );

    let status = if classification.is_malicious {
        StatusCode::FORBIDDEN
    } else {
        StatusCode::OK
    };

    (
        status,
        Json(CheckResponse {
            status: if classification.is_malicious {
                "blocked"
            } else {
                "allowed"
            },
            url: classification.domain,
        }),
    )
        .into_response()
}
