//! Common transport-layer types shared between the HTTP service and the CLI.
//! These structs are the JSON shapes the rendering layer sends and receives,
//! so they stay free of any pipeline logic.

mod records;
mod timeline;

pub use records::{InstallmentDto, RecurringPaymentDto, TimelineRecords};
pub use timeline::{
    DateRange, RecordDiagnosticDto, TimelineDayDto, TimelineEventDto, TimelineResponse, TimelineSummaryDto,
};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic API response wrapper used by the service.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success flag
    pub success: bool,
}
