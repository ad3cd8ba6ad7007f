//! Runtime configuration.
//!
//! Two spreadsheets back the service: the registration sheet (read side)
//! and the attendance sheet (write side). The registration worksheet can
//! be pinned by gid; otherwise the first worksheet is used.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub registration_spreadsheet_id: String,
    pub registration_worksheet_gid: Option<i64>,
    pub attendance_spreadsheet_id: String,
}

impl Config {
    pub fn new(
        registration_spreadsheet_id: impl Into<String>,
        attendance_spreadsheet_id: impl Into<String>,
    ) -> Self {
        Self {
            registration_spreadsheet_id: registration_spreadsheet_id.into(),
            registration_worksheet_gid: None,
            attendance_spreadsheet_id: attendance_spreadsheet_id.into(),
        }
    }

    pub fn with_registration_gid(mut self, gid: i64) -> Self {
        self.registration_worksheet_gid = Some(gid);
        self
    }

    /// Load from the environment, honoring a local `.env` file.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let registration_spreadsheet_id = std::env::var("REGDESK_REGISTRATION_SHEET_ID")
            .context("REGDESK_REGISTRATION_SHEET_ID is not set")?;
        let attendance_spreadsheet_id = std::env::var("REGDESK_ATTENDANCE_SHEET_ID")
            .context("REGDESK_ATTENDANCE_SHEET_ID is not set")?;
        let registration_worksheet_gid = match std::env::var("REGDESK_REGISTRATION_WORKSHEET_GID")
        {
            Ok(raw) => Some(
                raw.parse::<i64>()
                    .context("REGDESK_REGISTRATION_WORKSHEET_GID must be a numeric gid")?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            registration_spreadsheet_id,
            registration_worksheet_gid,
            attendance_spreadsheet_id,
        })
    }
}
