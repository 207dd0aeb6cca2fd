use crate::handlers::timeline::TimelineRequest;
use crate::helpers::export::timeline_to_csv;
use crate::schemas::{ApiError, AppState, CachedData, ErrorResponse};
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};
use axum_valid::Valid;
use tracing::{debug, instrument};

/// Export the projected timeline as CSV
#[utoipa::path(
    post,
    path = "/api/v1/timeline/export",
    tag = "exports",
    request_body = TimelineRequest,
    responses(
        (status = 200, description = "Timeline as CSV", body = String, content_type = "text/csv"),
        (status = 400, description = "Invalid request or window", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, request))]
pub async fn export_timeline_csv(
    State(state): State<AppState>,
    Valid(Json(request)): Valid<Json<TimelineRequest>>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let today = request.resolve_today();
    let cache_key = request.cache_key("csv", today);

    let cached = match &cache_key {
        Some(key) => match state.cache.get(key).await {
            Some(CachedData::Csv(csv)) => Some(csv),
            _ => None,
        },
        None => None,
    };

    let csv = match cached {
        Some(csv) => {
            debug!("Serving CSV export for {} from cache", today);
            csv
        }
        None => {
            let timeline = request
                .project(&state.settings, today)
                .map_err(ApiError::into_response_parts)?;
            let csv = timeline_to_csv(&timeline.events)
                .map_err(|e| ApiError::Export(e.to_string()).into_response_parts())?;
            if let Some(key) = cache_key {
                state.cache.insert(key, CachedData::Csv(csv.clone())).await;
            }
            csv
        }
    };

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"timeline.csv\""),
        ],
        csv,
    ))
}
