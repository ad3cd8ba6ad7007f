//! Remote spreadsheet store.
//!
//! `SpreadsheetStore` is the seam between the domain logic and the
//! backing spreadsheet service: list worksheets, read all rows, append a
//! row, create a worksheet. `SheetsClient` implements it against the
//! Google Sheets v4 REST API; `MemorySheets` is an in-process fake used
//! by the test suites.
//!
//! The store offers no transactions and no locking. Duplicate checking
//! and worksheet creation are read-then-write sequences at the caller,
//! with the races that implies.

pub mod client;
pub mod error;
pub mod memory;

pub use client::SheetsClient;
pub use error::StoreError;
pub use memory::MemorySheets;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One named tab within a spreadsheet, identified by its numeric gid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorksheetInfo {
    pub id: i64,
    pub title: String,
}

/// Request/response contract against the remote spreadsheet service.
///
/// All operations are synchronous remote calls with no retries; a
/// transient failure surfaces to the caller immediately.
#[async_trait]
pub trait SpreadsheetStore: Send + Sync {
    /// Open a spreadsheet by id and list its worksheets.
    async fn list_worksheets(&self, spreadsheet_id: &str) -> Result<Vec<WorksheetInfo>, StoreError>;

    /// Fetch every row of a worksheet, header included. Rows are ragged:
    /// trailing empty cells may be missing entirely.
    async fn read_all(
        &self,
        spreadsheet_id: &str,
        worksheet: &str,
    ) -> Result<Vec<Vec<String>>, StoreError>;

    /// Append one row after the last non-empty row of a worksheet.
    async fn append_row(
        &self,
        spreadsheet_id: &str,
        worksheet: &str,
        row: &[String],
    ) -> Result<(), StoreError>;

    /// Create a new worksheet and write its header row.
    async fn add_worksheet(
        &self,
        spreadsheet_id: &str,
        title: &str,
        header: &[String],
    ) -> Result<(), StoreError>;
}
