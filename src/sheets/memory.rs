//! In-process `SpreadsheetStore` used by the test suites.
//!
//! Behaves like the remote store at the contract level: worksheets are
//! looked up by title, unknown ids and titles report `NotFound`, and
//! append goes after the last existing row. A deny flag simulates a
//! service account without edit rights on worksheet creation.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{SpreadsheetStore, StoreError, WorksheetInfo};

#[derive(Debug, Clone)]
struct Sheet {
    id: i64,
    title: String,
    rows: Vec<Vec<String>>,
}

#[derive(Default)]
pub struct MemorySheets {
    spreadsheets: Mutex<HashMap<String, Vec<Sheet>>>,
    next_gid: AtomicI64,
    deny_creation: AtomicBool,
    fail_creation: AtomicBool,
}

impl MemorySheets {
    pub fn new() -> Self {
        Self {
            next_gid: AtomicI64::new(1000),
            ..Self::default()
        }
    }

    /// Register an empty spreadsheet id so it can be opened.
    pub fn add_spreadsheet(&self, spreadsheet_id: &str) {
        self.spreadsheets
            .lock()
            .expect("memory store poisoned")
            .entry(spreadsheet_id.to_string())
            .or_default();
    }

    /// Seed a worksheet with rows, creating the spreadsheet if needed.
    pub fn seed_worksheet(
        &self,
        spreadsheet_id: &str,
        gid: i64,
        title: &str,
        rows: Vec<Vec<String>>,
    ) {
        let mut books = self.spreadsheets.lock().expect("memory store poisoned");
        books
            .entry(spreadsheet_id.to_string())
            .or_default()
            .push(Sheet {
                id: gid,
                title: title.to_string(),
                rows,
            });
    }

    /// Make subsequent `add_worksheet` calls fail with permission denied.
    pub fn deny_worksheet_creation(&self) {
        self.deny_creation.store(true, Ordering::SeqCst);
    }

    /// Make subsequent `add_worksheet` calls fail with a generic API
    /// error, as a quota or backend fault would.
    pub fn fail_worksheet_creation(&self) {
        self.fail_creation.store(true, Ordering::SeqCst);
    }

    /// Snapshot of a worksheet's rows, for assertions.
    pub fn worksheet_rows(&self, spreadsheet_id: &str, title: &str) -> Option<Vec<Vec<String>>> {
        let books = self.spreadsheets.lock().expect("memory store poisoned");
        books
            .get(spreadsheet_id)?
            .iter()
            .find(|s| s.title == title)
            .map(|s| s.rows.clone())
    }

    /// Titles of all worksheets in a spreadsheet, for assertions.
    pub fn worksheet_titles(&self, spreadsheet_id: &str) -> Vec<String> {
        let books = self.spreadsheets.lock().expect("memory store poisoned");
        books
            .get(spreadsheet_id)
            .map(|sheets| sheets.iter().map(|s| s.title.clone()).collect())
            .unwrap_or_default()
    }
}

#[async_trait]
impl SpreadsheetStore for MemorySheets {
    async fn list_worksheets(&self, spreadsheet_id: &str) -> Result<Vec<WorksheetInfo>, StoreError> {
        let books = self.spreadsheets.lock().expect("memory store poisoned");
        let sheets = books
            .get(spreadsheet_id)
            .ok_or_else(|| StoreError::NotFound(format!("spreadsheet {spreadsheet_id}")))?;
        Ok(sheets
            .iter()
            .map(|s| WorksheetInfo {
                id: s.id,
                title: s.title.clone(),
            })
            .collect())
    }

    async fn read_all(
        &self,
        spreadsheet_id: &str,
        worksheet: &str,
    ) -> Result<Vec<Vec<String>>, StoreError> {
        let books = self.spreadsheets.lock().expect("memory store poisoned");
        let sheets = books
            .get(spreadsheet_id)
            .ok_or_else(|| StoreError::NotFound(format!("spreadsheet {spreadsheet_id}")))?;
        sheets
            .iter()
            .find(|s| s.title == worksheet)
            .map(|s| s.rows.clone())
            .ok_or_else(|| StoreError::NotFound(format!("worksheet {worksheet}")))
    }

    async fn append_row(
        &self,
        spreadsheet_id: &str,
        worksheet: &str,
        row: &[String],
    ) -> Result<(), StoreError> {
        let mut books = self.spreadsheets.lock().expect("memory store poisoned");
        let sheets = books
            .get_mut(spreadsheet_id)
            .ok_or_else(|| StoreError::NotFound(format!("spreadsheet {spreadsheet_id}")))?;
        let sheet = sheets
            .iter_mut()
            .find(|s| s.title == worksheet)
            .ok_or_else(|| StoreError::NotFound(format!("worksheet {worksheet}")))?;
        sheet.rows.push(row.to_vec());
        Ok(())
    }

    async fn add_worksheet(
        &self,
        spreadsheet_id: &str,
        title: &str,
        header: &[String],
    ) -> Result<(), StoreError> {
        if self.deny_creation.load(Ordering::SeqCst) {
            return Err(StoreError::PermissionDenied(
                "service account lacks edit access".to_string(),
            ));
        }
        if self.fail_creation.load(Ordering::SeqCst) {
            return Err(StoreError::Api(
                "Status 500: backend error adding sheet".to_string(),
            ));
        }
        let mut books = self.spreadsheets.lock().expect("memory store poisoned");
        let sheets = books
            .get_mut(spreadsheet_id)
            .ok_or_else(|| StoreError::NotFound(format!("spreadsheet {spreadsheet_id}")))?;
        if sheets.iter().any(|s| s.title == title) {
            return Err(StoreError::Api(format!("worksheet {title} already exists")));
        }
        let gid = self.next_gid.fetch_add(1, Ordering::SeqCst);
        sheets.push(Sheet {
            id: gid,
            title: title.to_string(),
            rows: vec![header.to_vec()],
        });
        Ok(())
    }
}
