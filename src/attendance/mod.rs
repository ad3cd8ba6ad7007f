//! Attendance write path.
//!
//! `validate_and_route` checks a submission and maps it to a physical
//! worksheet; `writer` handles worksheet creation, the duplicate-checked
//! append, and the batch loop.

pub mod validate;
pub mod writer;

pub use validate::{normalize_category, validate_and_route, BootcampTrack, WorksheetTarget};
pub use writer::{append_if_new, ensure_worksheet, process_batch, AppendOutcome};

/// Fixed header row written when an attendance worksheet is created.
pub const ATTENDANCE_HEADER: [&str; 6] = [
    "Registration Number",
    "Name",
    "Day",
    "Timestamp",
    "Event Type",
    "Category",
];

/// Server-generated timestamp format (UTC), stable enough to parse back.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
