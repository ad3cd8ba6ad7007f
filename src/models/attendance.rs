use serde::{Deserialize, Serialize};

/// Event kind an attendance record belongs to. Parsed case-insensitively
/// from the wire value; everything else is rejected up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
    Bootcamp,
    Hackathon,
}

impl EventType {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "bootcamp" => Some(EventType::Bootcamp),
            "hackathon" => Some(EventType::Hackathon),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EventType::Bootcamp => "bootcamp",
            EventType::Hackathon => "hackathon",
        }
    }
}

/// One inbound attendance submission, exactly as received.
///
/// Validation happens in `attendance::validate_and_route`; this struct
/// deliberately keeps raw strings so a bad record can be echoed back in
/// the batch results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub regno: String,
    pub name: String,
    pub day: String,
    pub event_type: String,
    #[serde(default)]
    pub category: String,
}

/// Body of `POST /attendance`.
#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceRequest {
    pub attendance_records: Vec<AttendanceRecord>,
}

/// Batch-level counters for a mass attendance submission.
#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    pub total_records: usize,
    pub successful: usize,
    pub failed: usize,
}

/// Per-record outcome, carrying the original regno/name for correlation.
#[derive(Debug, Clone, Serialize)]
pub struct RecordResult {
    pub regno: String,
    pub name: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worksheet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RecordResult {
    /// Status label for an inserted record.
    pub const RECORDED: &'static str = "recorded";
    /// Status label for a record rejected by the duplicate scan.
    pub const DUPLICATE: &'static str = "duplicate";
    /// Status label for a record that failed validation or the write.
    pub const FAILED: &'static str = "failed";
}

/// Payload for `POST /attendance`. The batch level always reports
/// success; individual failures are visible only in the summary counts
/// and the detailed results.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceResponse {
    pub success: bool,
    pub message: String,
    pub summary: BatchSummary,
    pub detailed_results: Vec<RecordResult>,
}
