use common::{
    DateRange, InstallmentDto, RecordDiagnosticDto, RecurringPaymentDto, TimelineDayDto, TimelineEventDto,
    TimelineResponse, TimelineSummaryDto,
};
use compute::timeline::calendar::TimelineDay;
use compute::timeline::normalize::RecordDiagnostic;
use compute::timeline::summary::{TimelineSummary, summarize};
use compute::{ComputeError, Timeline};
use model::entities::{installment, recurring_payment};
use model::timeline::TimelineEvent;
use model::PaymentStatus;
use tracing::warn;

/// Unknown status strings are treated as absent, which the timeline reads as upcoming.
fn parse_status(value: Option<&str>, record_id: Option<&str>) -> Option<PaymentStatus> {
    let value = value?;
    match value.parse::<PaymentStatus>() {
        Ok(status) => Some(status),
        Err(e) => {
            warn!("Ignoring status of record {:?}: {}", record_id, e);
            None
        }
    }
}

/// Convert a transport recurring payment into the stored record shape
pub fn recurring_payment_from_dto(dto: RecurringPaymentDto) -> recurring_payment::Model {
    let payment_status = parse_status(dto.payment_status.as_deref(), dto.payment_id.as_deref());
    recurring_payment::Model {
        payment_id: dto.payment_id,
        payment_type: dto.payment_type,
        amount: dto.amount,
        due_day: dto.due_day,
        payment_status,
        category_name: dto.category_name,
        category_color: dto.category_color,
    }
}

/// Convert a transport installment into the stored record shape
pub fn installment_from_dto(dto: InstallmentDto) -> installment::Model {
    let payment_status = parse_status(dto.payment_status.as_deref(), dto.installment_id.as_deref());
    installment::Model {
        installment_id: dto.installment_id,
        item_name: dto.item_name,
        monthly_payment: dto.monthly_payment,
        remaining_amount: dto.remaining_amount,
        due_date: dto.due_date,
        payment_status,
        completion_percentage: dto.completion_percentage,
    }
}

pub fn event_to_dto(event: &TimelineEvent) -> TimelineEventDto {
    let progress = event.progress();
    TimelineEventDto {
        id: event.id().to_string(),
        source_id: event.source_id().to_string(),
        kind: event.kind().to_string(),
        title: event.title().to_string(),
        amount: event.amount(),
        category: event.category().map(str::to_string),
        color: event.color().to_string(),
        date: event.date(),
        status: event.status().to_string(),
        stored_status: event.stored_status().to_string(),
        remaining_amount: progress.and_then(|p| p.remaining_amount),
        completion_percentage: progress.and_then(|p| p.completion_percentage),
    }
}

pub fn summary_to_dto(summary: TimelineSummary) -> TimelineSummaryDto {
    TimelineSummaryDto {
        total_events: summary.total_events,
        overdue: summary.overdue,
        due_today: summary.due_today,
        upcoming: summary.upcoming,
        paid: summary.paid,
        total_amount: summary.total_amount,
        outstanding_amount: summary.outstanding_amount,
        overdue_amount: summary.overdue_amount,
        next_due: summary.next_due,
    }
}

pub fn diagnostic_to_dto(diagnostic: &RecordDiagnostic) -> RecordDiagnosticDto {
    RecordDiagnosticDto {
        kind: diagnostic.kind.to_string(),
        index: diagnostic.index,
        record_id: diagnostic.record_id.clone(),
        error: diagnostic.error.to_string(),
    }
}

pub fn day_to_dto(day: &TimelineDay) -> TimelineDayDto {
    TimelineDayDto {
        date: day.date,
        total_amount: day.total_amount,
        events: day.events.iter().map(event_to_dto).collect(),
    }
}

/// Builds the full response body, summary included.
pub fn timeline_to_response(timeline: &Timeline) -> Result<TimelineResponse, ComputeError> {
    Ok(TimelineResponse {
        today: timeline.today,
        window: DateRange::new(timeline.window.start(), timeline.window.end()),
        events: timeline.events.iter().map(event_to_dto).collect(),
        summary: summary_to_dto(summarize(&timeline.events, timeline.today)?),
        diagnostics: timeline.diagnostics.iter().map(diagnostic_to_dto).collect(),
    })
}
