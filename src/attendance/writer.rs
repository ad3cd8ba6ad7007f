//! Worksheet resolution, duplicate-checked append, and the batch loop.

use chrono::Utc;
use tracing::{debug, warn};

use crate::api::ApiError;
use crate::models::{AttendanceRecord, BatchSummary, RecordResult};
use crate::sheets::{SpreadsheetStore, StoreError};

use super::validate::{validate_and_route, WorksheetTarget};
use super::{ATTENDANCE_HEADER, TIMESTAMP_FORMAT};

/// Column positions within an attendance worksheet row.
const REGNO_COL: usize = 0;
const DAY_COL: usize = 2;

/// Outcome of a duplicate-checked append. A failed write surfaces as the
/// error arm of the result instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    Inserted,
    DuplicateRejected,
}

/// Make sure the target worksheet exists, creating it with the fixed
/// header on first use. Creation races with concurrent requests are
/// possible; the store has no conditional-create primitive.
pub async fn ensure_worksheet(
    store: &dyn SpreadsheetStore,
    spreadsheet_id: &str,
    title: &str,
) -> Result<(), ApiError> {
    let worksheets = store.list_worksheets(spreadsheet_id).await?;
    if worksheets.iter().any(|ws| ws.title == title) {
        return Ok(());
    }

    debug!(worksheet = title, "Attendance worksheet missing, creating it");
    let header: Vec<String> = ATTENDANCE_HEADER.iter().map(|s| s.to_string()).collect();
    store
        .add_worksheet(spreadsheet_id, title, &header)
        .await
        .map_err(|e| match e {
            StoreError::PermissionDenied(msg) => ApiError::PermissionDenied(msg),
            other => ApiError::WorksheetCreateFailed(other.to_string()),
        })
}

/// Append the record unless a row with the same `(regno, day)` already
/// exists in the worksheet.
///
/// The scan and the append are two separate remote calls, so two
/// concurrent submissions can both pass the check. Accepted race.
pub async fn append_if_new(
    store: &dyn SpreadsheetStore,
    spreadsheet_id: &str,
    record: &AttendanceRecord,
    target: &WorksheetTarget,
) -> Result<AppendOutcome, ApiError> {
    let rows = store.read_all(spreadsheet_id, target.worksheet).await?;

    let regno = record.regno.trim();
    let duplicate = rows.iter().any(|row| {
        row.get(REGNO_COL).map(|v| v.trim()) == Some(regno)
            && row.get(DAY_COL).map(|v| v.trim()) == Some(target.day.as_str())
    });
    if duplicate {
        warn!(
            regno = regno,
            day = %target.day,
            worksheet = target.worksheet,
            "Duplicate attendance rejected"
        );
        return Ok(AppendOutcome::DuplicateRejected);
    }

    let timestamp = Utc::now().format(TIMESTAMP_FORMAT).to_string();
    let row = vec![
        regno.to_string(),
        record.name.trim().to_string(),
        target.day.clone(),
        timestamp,
        target.event_type.as_str().to_string(),
        target.category.clone(),
    ];
    store
        .append_row(spreadsheet_id, target.worksheet, &row)
        .await?;

    debug!(regno = regno, worksheet = target.worksheet, "Attendance recorded");
    Ok(AppendOutcome::Inserted)
}

async fn record_one(
    store: &dyn SpreadsheetStore,
    spreadsheet_id: &str,
    record: &AttendanceRecord,
) -> Result<&'static str, ApiError> {
    let target = validate_and_route(record)?;
    ensure_worksheet(store, spreadsheet_id, target.worksheet).await?;
    match append_if_new(store, spreadsheet_id, record, &target).await? {
        AppendOutcome::Inserted => Ok(target.worksheet),
        AppendOutcome::DuplicateRejected => Err(ApiError::DuplicateRejected {
            regno: record.regno.trim().to_string(),
            day: target.day,
        }),
    }
}

/// Process a batch of submissions in input order.
///
/// Records are independent: one failure never aborts the batch, it only
/// shows up in the counts and in that record's result entry.
pub async fn process_batch(
    store: &dyn SpreadsheetStore,
    spreadsheet_id: &str,
    records: &[AttendanceRecord],
) -> (BatchSummary, Vec<RecordResult>) {
    let mut results = Vec::with_capacity(records.len());
    let mut successful = 0;
    let mut failed = 0;

    for record in records {
        match record_one(store, spreadsheet_id, record).await {
            Ok(worksheet) => {
                successful += 1;
                results.push(RecordResult {
                    regno: record.regno.clone(),
                    name: record.name.clone(),
                    status: RecordResult::RECORDED.to_string(),
                    worksheet: Some(worksheet.to_string()),
                    error: None,
                });
            }
            Err(e) => {
                failed += 1;
                let status = if matches!(e, ApiError::DuplicateRejected { .. }) {
                    RecordResult::DUPLICATE
                } else {
                    RecordResult::FAILED
                };
                results.push(RecordResult {
                    regno: record.regno.clone(),
                    name: record.name.clone(),
                    status: status.to_string(),
                    worksheet: None,
                    error: Some(e.to_string()),
                });
            }
        }
    }

    let summary = BatchSummary {
        total_records: records.len(),
        successful,
        failed,
    };
    (summary, results)
}
