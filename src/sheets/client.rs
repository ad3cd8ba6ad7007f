//! Google Sheets v4 REST client.
//!
//! Thin wrapper: every method is one or two HTTP calls with bearer-token
//! auth and JSON bodies. No retries and no caching; failures are
//! classified by status code and surfaced immediately.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::auth::TokenProvider;

use super::{SpreadsheetStore, StoreError, WorksheetInfo};

/// Base URL for the Sheets v4 spreadsheets resource.
const SHEETS_BASE_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// HTTP request timeout in seconds.
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize)]
struct SpreadsheetMeta {
    #[serde(default)]
    sheets: Vec<SheetEntry>,
}

#[derive(Debug, Deserialize)]
struct SheetEntry {
    properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
struct SheetProperties {
    #[serde(rename = "sheetId")]
    sheet_id: i64,
    title: String,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

/// Sheets API client.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct SheetsClient {
    client: Client,
    tokens: Arc<dyn TokenProvider>,
}

impl SheetsClient {
    pub fn new(tokens: Arc<dyn TokenProvider>) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self { client, tokens })
    }

    async fn bearer(&self) -> Result<String, StoreError> {
        self.tokens
            .access_token()
            .await
            .map_err(|e| StoreError::Api(format!("Token acquisition failed: {e:#}")))
    }

    /// A1 range addressing a whole worksheet. Titles go in single quotes
    /// with embedded quotes doubled, then percent-encoded for the path.
    fn worksheet_range(worksheet: &str) -> String {
        let quoted = format!("'{}'", worksheet.replace('\'', "''"));
        urlencoding::encode(&quoted).into_owned()
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(StoreError::from_status(status, &body))
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, StoreError> {
        let response = self
            .client
            .get(url)
            .bearer_auth(self.bearer().await?)
            .send()
            .await?;

        let response = Self::check_response(response).await?;
        response
            .json()
            .await
            .map_err(|e| StoreError::InvalidResponse(format!("{url}: {e}")))
    }

    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<(), StoreError> {
        let response = self
            .client
            .post(url)
            .bearer_auth(self.bearer().await?)
            .json(body)
            .send()
            .await?;

        Self::check_response(response).await?;
        Ok(())
    }
}

#[async_trait]
impl SpreadsheetStore for SheetsClient {
    async fn list_worksheets(&self, spreadsheet_id: &str) -> Result<Vec<WorksheetInfo>, StoreError> {
        let url = format!(
            "{}/{}?fields=sheets.properties(sheetId,title)",
            SHEETS_BASE_URL, spreadsheet_id
        );
        let meta: SpreadsheetMeta = self.get_json(&url).await?;
        debug!(
            spreadsheet = spreadsheet_id,
            worksheets = meta.sheets.len(),
            "Opened spreadsheet"
        );
        Ok(meta
            .sheets
            .into_iter()
            .map(|s| WorksheetInfo {
                id: s.properties.sheet_id,
                title: s.properties.title,
            })
            .collect())
    }

    async fn read_all(
        &self,
        spreadsheet_id: &str,
        worksheet: &str,
    ) -> Result<Vec<Vec<String>>, StoreError> {
        let url = format!(
            "{}/{}/values/{}",
            SHEETS_BASE_URL,
            spreadsheet_id,
            Self::worksheet_range(worksheet)
        );
        let range: ValueRange = self.get_json(&url).await?;
        debug!(
            worksheet = worksheet,
            rows = range.values.len(),
            "Fetched worksheet values"
        );
        Ok(range.values)
    }

    async fn append_row(
        &self,
        spreadsheet_id: &str,
        worksheet: &str,
        row: &[String],
    ) -> Result<(), StoreError> {
        let url = format!(
            "{}/{}/values/{}:append?valueInputOption=USER_ENTERED&insertDataOption=INSERT_ROWS",
            SHEETS_BASE_URL,
            spreadsheet_id,
            Self::worksheet_range(worksheet)
        );
        let body = json!({ "values": [row] });
        self.post_json(&url, &body).await?;
        debug!(worksheet = worksheet, "Appended row");
        Ok(())
    }

    async fn add_worksheet(
        &self,
        spreadsheet_id: &str,
        title: &str,
        header: &[String],
    ) -> Result<(), StoreError> {
        let url = format!("{}/{}:batchUpdate", SHEETS_BASE_URL, spreadsheet_id);
        let body = json!({
            "requests": [
                { "addSheet": { "properties": { "title": title } } }
            ]
        });
        self.post_json(&url, &body).await?;
        debug!(worksheet = title, "Created worksheet");

        self.append_row(spreadsheet_id, title, header).await
    }
}
