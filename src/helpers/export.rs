use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use csv::Writer;
use model::timeline::TimelineEvent;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

/// One CSV line. Column order follows field order.
#[derive(Serialize)]
struct ExportRow<'a> {
    id: &'a str,
    date: NaiveDate,
    kind: &'static str,
    status: &'static str,
    title: &'a str,
    amount: Decimal,
    category: &'a str,
}

/// Writes classified events as CSV with a header row:
/// `id,date,kind,status,title,amount,category`.
pub fn timeline_to_csv(events: &[TimelineEvent]) -> Result<String> {
    let mut writer = Writer::from_writer(vec![]);

    for event in events {
        writer
            .serialize(ExportRow {
                id: event.id(),
                date: event.date(),
                kind: event.kind().as_str(),
                status: event.status().as_str(),
                title: event.title(),
                amount: event.amount(),
                category: event.category().unwrap_or_default(),
            })
            .with_context(|| format!("Failed to write event {}", event.id()))?;
    }

    // serde only emits the header with the first row
    if events.is_empty() {
        writer.write_record(["id", "date", "kind", "status", "title", "amount", "category"])?;
    }

    let data = writer
        .into_inner()
        .map_err(|e| anyhow!("Failed to flush CSV writer: {}", e.error()))?;
    debug!("Exported {} events as {} bytes of CSV", events.len(), data.len());
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use compute::default_timeline;
    use model::entities::{installment, recurring_payment};

    #[test]
    fn test_timeline_to_csv() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();
        let payments = vec![
            recurring_payment::Model::new("p-1", "Rent, flat 2", Decimal::new(120000, 2), 20)
                .with_category("Housing", "#EF4444"),
        ];
        let installments = vec![installment::Model::new(
            "i-1",
            "Laptop",
            Decimal::new(15000, 2),
            NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
        )];

        let timeline = default_timeline(today, 30, 10)
            .unwrap()
            .project(&payments, &installments)
            .unwrap();
        let csv = timeline_to_csv(&timeline.events).unwrap();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "id,date,kind,status,title,amount,category");
        assert_eq!(lines[1], "installment-i-1,2024-02-10,installment,overdue,Laptop,150.00,");
        assert_eq!(
            lines[2],
            "recurring-p-1-2024-02-20,2024-02-20,recurring,upcoming,\"Rent, flat 2\",1200.00,Housing"
        );
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_empty_timeline_has_header_only() {
        let csv = timeline_to_csv(&[]).unwrap();
        assert_eq!(csv, "id,date,kind,status,title,amount,category\n");
    }
}
