use axum::{http::StatusCode, response::Json};
use common::{
    DateRange, InstallmentDto, RecordDiagnosticDto, RecurringPaymentDto, TimelineDayDto, TimelineEventDto,
    TimelineResponse, TimelineSummaryDto,
};
use compute::ComputeError;
use moka::future::Cache;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};
use utoipa::{OpenApi, ToSchema};

use crate::config::Settings;
use crate::handlers::timeline::TimelineRequest;

pub use common::ApiResponse;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Loaded settings
    pub settings: Settings,
    /// Cache of rendered timelines, keyed by request and resolved today
    pub cache: Cache<String, CachedData>,
}

/// Cached data types
#[derive(Clone, Debug)]
pub enum CachedData {
    Timeline(TimelineResponse),
    Calendar(Vec<TimelineDayDto>),
    Csv(String),
}

/// Error response
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
}

/// Failures a timeline request can end in.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("window starts on {start} but ends on {end}")]
    InvalidWindow { start: chrono::NaiveDate, end: chrono::NaiveDate },
    #[error("invalid date: {0}")]
    InvalidDate(String),
    #[error("failed to project timeline: {0}")]
    Compute(ComputeError),
    #[error("failed to export timeline: {0}")]
    Export(String),
    #[error("amounts are too large to add up ({0})")]
    AmountOverflow(&'static str),
}

impl From<ComputeError> for ApiError {
    fn from(e: ComputeError) -> Self {
        match e {
            ComputeError::InvalidWindow { start, end } => ApiError::InvalidWindow { start, end },
            ComputeError::Date(message) => ApiError::InvalidDate(message),
            ComputeError::AmountOverflow { total } => ApiError::AmountOverflow(total),
            other => ApiError::Compute(other),
        }
    }
}

impl ApiError {
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidWindow { .. } => "INVALID_WINDOW",
            ApiError::InvalidDate(_) => "INVALID_DATE",
            ApiError::Compute(_) => "COMPUTE_ERROR",
            ApiError::Export(_) => "EXPORT_ERROR",
            ApiError::AmountOverflow(_) => "AMOUNT_OVERFLOW",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidWindow { .. } | ApiError::InvalidDate(_) | ApiError::AmountOverflow(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Compute(_) | ApiError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into the handler error tuple.
    pub fn into_response_parts(self) -> (StatusCode, Json<ErrorResponse>) {
        let status = self.status();
        if status.is_server_error() {
            error!("{}", self);
        } else {
            warn!("{}", self);
        }

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
                code: self.code().to_string(),
                success: false,
            }),
        )
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::timeline::get_timeline,
        crate::handlers::timeline::get_timeline_calendar,
        crate::handlers::exports::export_timeline_csv,
    ),
    components(
        schemas(
            ApiResponse<TimelineResponse>,
            ApiResponse<Vec<TimelineDayDto>>,
            ErrorResponse,
            HealthResponse,
            TimelineRequest,
            RecurringPaymentDto,
            InstallmentDto,
            TimelineResponse,
            TimelineEventDto,
            TimelineSummaryDto,
            RecordDiagnosticDto,
            TimelineDayDto,
            DateRange,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "timeline", description = "Payment timeline projection endpoints"),
        (name = "exports", description = "Timeline export endpoints"),
    ),
    info(
        title = "BudgetAI API",
        description = "Projects recurring payments and installments onto a dated, classified payment timeline",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
