use crate::config::Settings;
use crate::helpers::converters::{day_to_dto, installment_from_dto, recurring_payment_from_dto, timeline_to_response};
use crate::schemas::{ApiError, ApiResponse, AppState, CachedData, ErrorResponse};
use axum::{extract::State, http::StatusCode, response::Json};
use axum_valid::Valid;
use chrono::{NaiveDate, Utc};
use common::{InstallmentDto, RecurringPaymentDto, TimelineDayDto, TimelineResponse};
use compute::timeline::calendar::group_by_date;
use compute::timeline::window::TimelineWindow;
use compute::timeline::TimelineCalculator;
use compute::Timeline;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use tracing::{debug, info, instrument, trace};
use utoipa::ToSchema;
use validator::Validate;

/// Request body for projecting a timeline
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema, Validate)]
pub struct TimelineRequest {
    /// Recurring payment rows
    #[serde(default)]
    pub recurring_payments: Vec<RecurringPaymentDto>,
    /// Installment rows
    #[serde(default)]
    pub installments: Vec<InstallmentDto>,
    /// Date to classify against (default: the current UTC date)
    pub today: Option<NaiveDate>,
    /// First day shown, overrides the lookback
    pub window_start: Option<NaiveDate>,
    /// Last day shown, overrides the horizon
    pub window_end: Option<NaiveDate>,
    /// Days shown after today (default: from settings)
    #[validate(range(min = 1, max = 366))]
    pub horizon_days: Option<u32>,
    /// Days shown before today (default: from settings)
    #[validate(range(max = 366))]
    pub lookback_days: Option<u32>,
}

impl TimelineRequest {
    /// The clock is only read when the caller did not pin `today`.
    pub fn resolve_today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Utc::now().date_naive())
    }

    /// Builds the calculator for this request. Explicit window bounds win
    /// over the horizon and lookback.
    pub fn calculator(&self, settings: &Settings, today: NaiveDate) -> Result<TimelineCalculator, ApiError> {
        let horizon_days = self.horizon_days.unwrap_or(settings.default_horizon_days);
        let lookback_days = self.lookback_days.unwrap_or(settings.default_lookback_days);
        let default_window = TimelineWindow::next_days(today, horizon_days)?.with_lookback(lookback_days)?;

        let window = TimelineWindow::new(
            self.window_start.unwrap_or(default_window.start()),
            self.window_end.unwrap_or(default_window.end()),
        )?;
        debug!("Resolved window {} to {} for today {}", window.start(), window.end(), today);

        Ok(TimelineCalculator::new(today, window))
    }

    /// Runs the pipeline over the request's records.
    pub fn project(&self, settings: &Settings, today: NaiveDate) -> Result<Timeline, ApiError> {
        let calculator = self.calculator(settings, today)?;

        let recurring_payments: Vec<_> = self
            .recurring_payments
            .iter()
            .cloned()
            .map(recurring_payment_from_dto)
            .collect();
        let installments: Vec<_> = self.installments.iter().cloned().map(installment_from_dto).collect();

        Ok(calculator.project(&recurring_payments, &installments)?)
    }

    /// Cache key for one endpoint: a digest of the serialized request.
    /// Includes the resolved today so that a new day never serves yesterday's
    /// statuses.
    pub fn cache_key(&self, prefix: &str, today: NaiveDate) -> Option<String> {
        let body = serde_json::to_string(self).ok()?;
        let mut hasher = DefaultHasher::new();
        body.hash(&mut hasher);
        Some(format!("{}_{}_{:016x}", prefix, today, hasher.finish()))
    }
}

/// Project recurring payments and installments onto a classified timeline
#[utoipa::path(
    post,
    path = "/api/v1/timeline",
    tag = "timeline",
    request_body = TimelineRequest,
    responses(
        (status = 200, description = "Timeline projected successfully", body = ApiResponse<TimelineResponse>),
        (status = 400, description = "Invalid request or window", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, request))]
pub async fn get_timeline(
    State(state): State<AppState>,
    Valid(Json(request)): Valid<Json<TimelineRequest>>,
) -> Result<Json<ApiResponse<TimelineResponse>>, (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering get_timeline function");
    let today = request.resolve_today();
    let cache_key = request.cache_key("timeline", today);

    if let Some(key) = &cache_key {
        if let Some(CachedData::Timeline(timeline)) = state.cache.get(key).await {
            debug!("Serving timeline for {} from cache", today);
            return Ok(Json(ApiResponse {
                data: timeline,
                message: "Timeline retrieved from cache".to_string(),
                success: true,
            }));
        }
    }

    let timeline = request
        .project(&state.settings, today)
        .map_err(ApiError::into_response_parts)?;
    let response = timeline_to_response(&timeline).map_err(|e| ApiError::from(e).into_response_parts())?;
    info!(
        "Projected {} events with {} skipped records",
        response.events.len(),
        response.diagnostics.len()
    );

    if let Some(key) = cache_key {
        state.cache.insert(key, CachedData::Timeline(response.clone())).await;
    }

    Ok(Json(ApiResponse {
        data: response,
        message: "Timeline projected successfully".to_string(),
        success: true,
    }))
}

/// Project the timeline and group it per calendar day
#[utoipa::path(
    post,
    path = "/api/v1/timeline/calendar",
    tag = "timeline",
    request_body = TimelineRequest,
    responses(
        (status = 200, description = "Calendar days projected successfully", body = ApiResponse<Vec<TimelineDayDto>>),
        (status = 400, description = "Invalid request or window", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, request))]
pub async fn get_timeline_calendar(
    State(state): State<AppState>,
    Valid(Json(request)): Valid<Json<TimelineRequest>>,
) -> Result<Json<ApiResponse<Vec<TimelineDayDto>>>, (StatusCode, Json<ErrorResponse>)> {
    let today = request.resolve_today();
    let cache_key = request.cache_key("calendar", today);

    if let Some(key) = &cache_key {
        if let Some(CachedData::Calendar(days)) = state.cache.get(key).await {
            debug!("Serving calendar for {} from cache", today);
            return Ok(Json(ApiResponse {
                data: days,
                message: "Calendar retrieved from cache".to_string(),
                success: true,
            }));
        }
    }

    let timeline = request
        .project(&state.settings, today)
        .map_err(ApiError::into_response_parts)?;
    let days: Vec<TimelineDayDto> = group_by_date(&timeline.events)
        .map_err(|e| ApiError::from(e).into_response_parts())?
        .iter()
        .map(day_to_dto)
        .collect();
    debug!("Grouped {} events into {} days", timeline.events.len(), days.len());

    if let Some(key) = cache_key {
        state.cache.insert(key, CachedData::Calendar(days.clone())).await;
    }

    Ok(Json(ApiResponse {
        data: days,
        message: "Calendar projected successfully".to_string(),
        success: true,
    }))
}
