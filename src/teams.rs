//! Registration read paths.
//!
//! Two listings come off the registration spreadsheet: the team/domain
//! listing (both columns mandatory) and the per-category roster listing
//! (team name mandatory, everything else degrades to a placeholder).
//! Column locations are inferred per read by `columns::resolve`.

use crate::api::ApiError;
use crate::attendance::BootcampTrack;
use crate::columns::{self, rule, ColumnSpec, ResolvedColumns};
use crate::models::TeamRecord;

/// Placeholder for roster fields whose column or cell is absent.
pub const NOT_SPECIFIED: &str = "Not specified";

pub const FIELD_TEAM_NAME: &str = "team_name";
pub const FIELD_DOMAINS: &str = "domains";
pub const FIELD_TEAM_LEADER: &str = "team_leader";
pub const FIELD_TEAM_MEMBER_1: &str = "team_member_1";
pub const FIELD_TEAM_MEMBER_2: &str = "team_member_2";
pub const FIELD_REG_LEADER: &str = "reg_leader";
pub const FIELD_REG_MEMBER_1: &str = "reg_member_1";
pub const FIELD_REG_MEMBER_2: &str = "reg_member_2";

/// Fields for the team/domain listing.
pub const TEAM_LISTING_SPECS: &[ColumnSpec] = &[
    ColumnSpec {
        field: FIELD_TEAM_NAME,
        strict: &[rule(&["team", "name"], &[], &[])],
        broad: &[rule(&["team"], &[], &[])],
    },
    ColumnSpec {
        field: FIELD_DOMAINS,
        strict: &[rule(&["domain"], &[], &[])],
        broad: &[rule(&[], &["domain", "website", "url", "site"], &[])],
    },
];

/// Extended field set for category rosters. Registration-number columns
/// must carry a "reg"/"number" keyword so they are not mistaken for name
/// columns; with fully free-text headers this stays a heuristic.
pub const ROSTER_SPECS: &[ColumnSpec] = &[
    ColumnSpec {
        field: FIELD_TEAM_NAME,
        strict: &[rule(&["team", "name"], &[], &["leader", "member"])],
        broad: &[rule(&["team"], &[], &["leader", "member"])],
    },
    ColumnSpec {
        field: FIELD_TEAM_LEADER,
        strict: &[rule(&["leader"], &["name", "reg"], &["number", "whatsapp"])],
        broad: &[rule(&["leader"], &[], &[])],
    },
    ColumnSpec {
        field: FIELD_TEAM_MEMBER_1,
        strict: &[rule(&["member", "1"], &[], &["reg", "number", "whatsapp"])],
        broad: &[rule(&["member", "1"], &[], &[])],
    },
    ColumnSpec {
        field: FIELD_TEAM_MEMBER_2,
        strict: &[rule(&["member", "2"], &[], &["reg", "number", "whatsapp"])],
        broad: &[rule(&["member", "2"], &[], &[])],
    },
    ColumnSpec {
        field: FIELD_REG_LEADER,
        strict: &[rule(&["leader"], &["reg", "number"], &["whatsapp", "phone"])],
        broad: &[],
    },
    ColumnSpec {
        field: FIELD_REG_MEMBER_1,
        strict: &[rule(&["member", "1"], &["reg", "number"], &["whatsapp", "phone"])],
        broad: &[],
    },
    ColumnSpec {
        field: FIELD_REG_MEMBER_2,
        strict: &[rule(&["member", "2"], &["reg", "number"], &["whatsapp", "phone"])],
        broad: &[],
    },
];

/// Extract the team/domain listing from raw worksheet rows.
///
/// Both columns are required: if either cannot be resolved from the
/// header the whole read fails with `NotFound`. Rows shorter than the
/// furthest required column are skipped, not padded.
pub fn extract_team_listing(rows: &[Vec<String>]) -> Result<Vec<TeamRecord>, ApiError> {
    let Some((header, data)) = rows.split_first() else {
        return Ok(Vec::new());
    };
    let cols = columns::resolve(header, TEAM_LISTING_SPECS);
    let team_col = require_column(&cols, FIELD_TEAM_NAME)?;
    let domain_col = require_column(&cols, FIELD_DOMAINS)?;
    let min_len = team_col.max(domain_col) + 1;

    let mut teams = Vec::new();
    for row in data {
        if row.len() < min_len {
            continue;
        }
        let (Some(team_name), Some(domains)) = (
            columns::cell(row, Some(team_col)),
            columns::cell(row, Some(domain_col)),
        ) else {
            continue;
        };
        teams.push(TeamRecord {
            team_name: team_name.to_string(),
            domains: Some(domains.to_string()),
            ..TeamRecord::default()
        });
    }
    Ok(teams)
}

/// Extract a category roster from raw worksheet rows.
///
/// Only the team name is mandatory; every other field falls back to
/// `"Not specified"` when its column is unresolved or its cell empty.
pub fn extract_roster(rows: &[Vec<String>]) -> Result<Vec<TeamRecord>, ApiError> {
    let Some((header, data)) = rows.split_first() else {
        return Ok(Vec::new());
    };
    let cols = columns::resolve(header, ROSTER_SPECS);
    let team_col = require_column(&cols, FIELD_TEAM_NAME)?;

    let or_placeholder = |row: &[String], field: &str| -> Option<String> {
        Some(
            columns::cell(row, cols.get(field))
                .unwrap_or(NOT_SPECIFIED)
                .to_string(),
        )
    };

    let mut teams = Vec::new();
    for row in data {
        if row.len() < team_col + 1 {
            continue;
        }
        let Some(team_name) = columns::cell(row, Some(team_col)) else {
            continue;
        };
        teams.push(TeamRecord {
            team_name: team_name.to_string(),
            domains: None,
            team_leader: or_placeholder(row, FIELD_TEAM_LEADER),
            team_member_1: or_placeholder(row, FIELD_TEAM_MEMBER_1),
            team_member_2: or_placeholder(row, FIELD_TEAM_MEMBER_2),
            reg_leader: or_placeholder(row, FIELD_REG_LEADER),
            reg_member_1: or_placeholder(row, FIELD_REG_MEMBER_1),
            reg_member_2: or_placeholder(row, FIELD_REG_MEMBER_2),
        });
    }
    Ok(teams)
}

fn require_column(cols: &ResolvedColumns, field: &'static str) -> Result<usize, ApiError> {
    cols.get(field)
        .ok_or_else(|| ApiError::NotFound(format!("no header matched the {field} column")))
}

/// Roster worksheets backing one category request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterSelection {
    /// Canonical category label echoed in the response.
    pub label: &'static str,
    /// `(source label, worksheet title)` pairs, read in order.
    pub sheets: Vec<(&'static str, &'static str)>,
}

impl RosterSelection {
    /// Source tags, present only when more than one roster contributes.
    pub fn sources(&self) -> Option<Vec<String>> {
        if self.sheets.len() > 1 {
            Some(self.sheets.iter().map(|(label, _)| label.to_string()).collect())
        } else {
            None
        }
    }
}

const AIML_ROSTER: (&str, &str) = ("AI/ML", "AI/ML Teams");
const CYBER_ROSTER: (&str, &str) = ("Cyber", "Cyber Teams");

/// Static category -> roster worksheet lookup. "Full Stack" has no sheet
/// of its own; it is the concatenation of the AI/ML and Cyber rosters.
pub fn roster_selection(category: &str) -> Result<RosterSelection, ApiError> {
    use crate::attendance::normalize_category;

    let track = normalize_category(category)
        .ok_or_else(|| ApiError::InvalidCategory(category.trim().to_string()))?;
    let selection = match track {
        BootcampTrack::AiMl => RosterSelection {
            label: track.label(),
            sheets: vec![AIML_ROSTER],
        },
        BootcampTrack::Cyber => RosterSelection {
            label: track.label(),
            sheets: vec![CYBER_ROSTER],
        },
        BootcampTrack::FullStack => RosterSelection {
            label: track.label(),
            sheets: vec![AIML_ROSTER, CYBER_ROSTER],
        },
    };
    Ok(selection)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn team_listing_skips_short_and_incomplete_rows() {
        let rows = vec![
            row(&["Timestamp", "Team Name", "Domain"]),
            row(&["t1", "Rocket", "fintech"]),
            row(&["t2", "Shorty"]), // shorter than the domain column
            row(&["t3", "  ", "health"]), // blank team name
            row(&["t4", "Nimbus", "  "]), // blank domain
            row(&["t5", "  Orbit  ", " edtech "]),
        ];
        let teams = extract_team_listing(&rows).expect("listing should extract");
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].team_name, "Rocket");
        assert_eq!(teams[1].team_name, "Orbit");
        assert_eq!(teams[1].domains.as_deref(), Some("edtech"));
    }

    #[test]
    fn team_listing_without_domain_header_is_not_found() {
        let rows = vec![
            row(&["Team Name", "Mentor"]),
            row(&["Rocket", "Dr. Rao"]),
        ];
        let err = extract_team_listing(&rows).expect_err("must fail");
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[test]
    fn roster_fills_placeholders_for_missing_columns() {
        // No member-2 or reg columns at all
        let rows = vec![
            row(&["Team Name", "Team Leader Name", "Member 1 Name"]),
            row(&["Rocket", "Asha", "Vikram"]),
            row(&["Nimbus", "", ""]),
        ];
        let teams = extract_roster(&rows).expect("roster should extract");
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].team_leader.as_deref(), Some("Asha"));
        assert_eq!(teams[0].team_member_2.as_deref(), Some(NOT_SPECIFIED));
        assert_eq!(teams[0].reg_leader.as_deref(), Some(NOT_SPECIFIED));
        // Columns resolved but cells empty also degrade
        assert_eq!(teams[1].team_leader.as_deref(), Some(NOT_SPECIFIED));
    }

    #[test]
    fn roster_separates_names_from_registration_numbers() {
        let rows = vec![
            row(&[
                "Team Name",
                "Team Leader Name",
                "Leader Registration Number",
                "Member 1 Name",
                "Member 1 Registration Number",
            ]),
            row(&["Rocket", "Asha", "22BCE100", "Vikram", "22BCE101"]),
        ];
        let teams = extract_roster(&rows).expect("roster should extract");
        assert_eq!(teams[0].team_leader.as_deref(), Some("Asha"));
        assert_eq!(teams[0].reg_leader.as_deref(), Some("22BCE100"));
        assert_eq!(teams[0].team_member_1.as_deref(), Some("Vikram"));
        assert_eq!(teams[0].reg_member_1.as_deref(), Some("22BCE101"));
    }

    #[test]
    fn full_stack_selection_unions_both_rosters() {
        let selection = roster_selection("Full Stack").expect("known category");
        assert_eq!(selection.label, "Full Stack");
        assert_eq!(selection.sheets.len(), 2);
        assert_eq!(
            selection.sources(),
            Some(vec!["AI/ML".to_string(), "Cyber".to_string()])
        );

        let single = roster_selection("cyber").expect("known category");
        assert_eq!(single.sheets, vec![CYBER_ROSTER]);
        assert_eq!(single.sources(), None);
    }

    #[test]
    fn unknown_category_is_rejected() {
        let err = roster_selection("robotics").expect_err("must fail");
        assert!(matches!(err, ApiError::InvalidCategory(_)));
    }
}
