//! Endpoint semantics as typed request/response calls.
//!
//! One `ApiService` per process, holding the spreadsheet store and the
//! two spreadsheet ids. Stateless across calls otherwise; every request
//! re-reads the backing sheets.

use std::sync::Arc;

use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::attendance;
use crate::config::Config;
use crate::models::{
    AttendanceRequest, AttendanceResponse, CategoryTeamsResponse, TeamsResponse,
};
use crate::sheets::SpreadsheetStore;
use crate::teams;

use super::ApiError;

pub struct ApiService {
    store: Arc<dyn SpreadsheetStore>,
    config: Config,
}

impl ApiService {
    pub fn new(store: Arc<dyn SpreadsheetStore>, config: Config) -> Self {
        Self { store, config }
    }

    /// `GET /teams` - the team/domain listing.
    pub async fn teams(&self) -> Result<TeamsResponse, ApiError> {
        let rows = self.registration_rows().await?;
        let teams = teams::extract_team_listing(&rows)?;
        debug!(count = teams.len(), "Team listing extracted");
        Ok(TeamsResponse {
            success: true,
            count: teams.len(),
            teams,
        })
    }

    /// `GET /teams-by-category/{category}` - roster for one track.
    ///
    /// "Full Stack" concatenates the AI/ML and Cyber rosters and tags the
    /// response with their source labels.
    pub async fn teams_by_category(
        &self,
        category: &str,
    ) -> Result<CategoryTeamsResponse, ApiError> {
        let selection = teams::roster_selection(category)?;

        let mut all_teams = Vec::new();
        for (label, worksheet) in &selection.sheets {
            let rows = self
                .store
                .read_all(&self.config.registration_spreadsheet_id, worksheet)
                .await?;
            let mut roster = teams::extract_roster(&rows)?;
            debug!(source = label, count = roster.len(), "Roster extracted");
            all_teams.append(&mut roster);
        }

        Ok(CategoryTeamsResponse {
            success: true,
            category: selection.label.to_string(),
            count: all_teams.len(),
            teams: all_teams,
            sources: selection.sources(),
        })
    }

    /// `POST /attendance` - mass attendance submission.
    ///
    /// Always succeeds at the batch level once the body is structurally
    /// valid; per-record failures live in the summary and results.
    pub async fn record_attendance(
        &self,
        request: AttendanceRequest,
    ) -> Result<AttendanceResponse, ApiError> {
        if request.attendance_records.is_empty() {
            return Err(ApiError::MissingField("attendance_records"));
        }

        let (summary, detailed_results) = attendance::process_batch(
            self.store.as_ref(),
            &self.config.attendance_spreadsheet_id,
            &request.attendance_records,
        )
        .await;

        Ok(AttendanceResponse {
            success: true,
            message: format!(
                "Processed {} attendance records: {} recorded, {} failed",
                summary.total_records, summary.successful, summary.failed
            ),
            summary,
            detailed_results,
        })
    }

    /// `GET /` - static API description.
    pub fn describe(&self) -> Value {
        json!({
            "message": "Event registration & attendance API",
            "endpoints": {
                "/teams": "GET - team names and domains from the registration sheet",
                "/teams-by-category/{category}": "GET - roster for AI/ML, Cyber or Full Stack",
                "/attendance": "POST - record bootcamp/hackathon attendance",
                "/": "GET - this description",
            },
        })
    }

    /// Rows of the registration worksheet, selected by configured gid
    /// with fallback to the first worksheet.
    async fn registration_rows(&self) -> Result<Vec<Vec<String>>, ApiError> {
        let spreadsheet_id = &self.config.registration_spreadsheet_id;
        let worksheets = self.store.list_worksheets(spreadsheet_id).await?;

        let by_gid = self
            .config
            .registration_worksheet_gid
            .and_then(|gid| worksheets.iter().find(|ws| ws.id == gid));
        let target = match by_gid {
            Some(ws) => ws,
            None => {
                if let Some(gid) = self.config.registration_worksheet_gid {
                    warn!(gid, "Configured worksheet gid not found, using first worksheet");
                }
                worksheets.first().ok_or_else(|| {
                    ApiError::NotFound("registration spreadsheet has no worksheets".to_string())
                })?
            }
        };

        debug!(worksheet = %target.title, "Reading registration worksheet");
        self.store
            .read_all(spreadsheet_id, &target.title)
            .await
            .map_err(Into::into)
    }
}
