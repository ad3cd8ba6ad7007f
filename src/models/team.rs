use serde::{Deserialize, Serialize};

/// One registered team, projected from a raw sheet row through the
/// resolved columns. Only the fields the calling listing asked for are
/// populated; absent optional fields are skipped on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub team_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domains: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_leader: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_member_1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_member_2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reg_leader: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reg_member_1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reg_member_2: Option<String>,
}

/// Payload for `GET /teams`.
#[derive(Debug, Clone, Serialize)]
pub struct TeamsResponse {
    pub success: bool,
    pub count: usize,
    pub teams: Vec<TeamRecord>,
}

/// Payload for `GET /teams-by-category/{category}`.
///
/// `sources` is present only for the "Full Stack" union, naming the
/// rosters whose teams were concatenated.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryTeamsResponse {
    pub success: bool,
    pub category: String,
    pub count: usize,
    pub teams: Vec<TeamRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<String>>,
}
