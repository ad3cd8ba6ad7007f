//! Column inference over free-text spreadsheet headers.
//!
//! Registration sheets are built by hand, so header names and positions
//! drift between editions ("Team Name", "Name of the team", "Team leader
//! name (as registered)"). Instead of fixed indices, each semantic field
//! carries a ranked table of keyword rules evaluated in two passes: a
//! strict pass with disambiguating exclusions, then a broad pass for
//! whatever is still unresolved. This is a heuristic, not a classifier;
//! the rule tables are data and can be tuned without touching control flow.

use std::collections::HashMap;

use tracing::debug;

/// One keyword predicate over a lower-cased, trimmed header cell.
///
/// A header matches when it contains every `require_all` keyword, at least
/// one `require_any` keyword (when the set is non-empty), and none of the
/// `exclude_any` keywords.
#[derive(Debug, Clone, Copy)]
pub struct ColumnRule {
    pub require_all: &'static [&'static str],
    pub require_any: &'static [&'static str],
    pub exclude_any: &'static [&'static str],
}

/// Shorthand constructor for rule tables.
pub const fn rule(
    require_all: &'static [&'static str],
    require_any: &'static [&'static str],
    exclude_any: &'static [&'static str],
) -> ColumnRule {
    ColumnRule {
        require_all,
        require_any,
        exclude_any,
    }
}

impl ColumnRule {
    pub fn matches(&self, header: &str) -> bool {
        self.require_all.iter().all(|kw| header.contains(kw))
            && (self.require_any.is_empty()
                || self.require_any.iter().any(|kw| header.contains(kw)))
            && !self.exclude_any.iter().any(|kw| header.contains(kw))
    }
}

/// A semantic field plus its ranked matcher rules.
///
/// `strict` rules run in the first pass, `broad` in the second. An empty
/// `broad` table means the field gets no second chance.
#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub field: &'static str,
    pub strict: &'static [ColumnRule],
    pub broad: &'static [ColumnRule],
}

/// Field name -> column index mapping, computed once per read operation.
#[derive(Debug, Default)]
pub struct ResolvedColumns {
    assigned: HashMap<&'static str, usize>,
}

impl ResolvedColumns {
    /// Column index for a field, or `None` if both passes came up empty.
    pub fn get(&self, field: &str) -> Option<usize> {
        self.assigned.get(field).copied()
    }
}

/// Resolve a header row against a set of field specs.
///
/// Per field, rules are tried in priority order and headers are scanned
/// left to right; the first satisfying header wins. A header index claimed
/// by one field is never reassigned, so ties between overlapping specs go
/// to whichever field appears first in `specs`.
pub fn resolve(headers: &[String], specs: &[ColumnSpec]) -> ResolvedColumns {
    let normalized: Vec<String> = headers
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();

    let mut resolved = ResolvedColumns::default();
    let mut claimed = vec![false; normalized.len()];

    for strict_pass in [true, false] {
        for spec in specs {
            if resolved.assigned.contains_key(spec.field) {
                continue;
            }
            let rules = if strict_pass { spec.strict } else { spec.broad };
            'rules: for rule in rules {
                for (idx, header) in normalized.iter().enumerate() {
                    if claimed[idx] || !rule.matches(header) {
                        continue;
                    }
                    debug!(
                        field = spec.field,
                        column = idx,
                        header = %headers[idx].trim(),
                        strict = strict_pass,
                        "Resolved column"
                    );
                    resolved.assigned.insert(spec.field, idx);
                    claimed[idx] = true;
                    break 'rules;
                }
            }
        }
    }

    resolved
}

/// Read a cell through a resolved column index.
///
/// Returns the trimmed text only when the index resolved, the row is long
/// enough, and the cell is non-empty after trimming. Short rows are never
/// padded; a missing cell reads as absent.
pub fn cell<'a>(row: &'a [String], index: Option<usize>) -> Option<&'a str> {
    let value = row.get(index?)?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    const TEAM_NAME: ColumnSpec = ColumnSpec {
        field: "team_name",
        strict: &[rule(&["team", "name"], &[], &[])],
        broad: &[rule(&["team"], &[], &[])],
    };

    const DOMAINS: ColumnSpec = ColumnSpec {
        field: "domains",
        strict: &[rule(&["domain"], &[], &[])],
        broad: &[rule(&[], &["domain", "website", "url", "site"], &[])],
    };

    #[test]
    fn strict_pass_finds_exact_headers() {
        let h = headers(&["Sl No", "Team Name", "Domain of Project"]);
        let cols = resolve(&h, &[TEAM_NAME, DOMAINS]);
        assert_eq!(cols.get("team_name"), Some(1));
        assert_eq!(cols.get("domains"), Some(2));
    }

    #[test]
    fn broad_pass_picks_up_loose_headers() {
        // "Team" alone fails the strict team+name rule; "Website Link" has
        // no "domain" keyword. Both fall through to the broad pass.
        let h = headers(&["Team", "Website Link"]);
        let cols = resolve(&h, &[TEAM_NAME, DOMAINS]);
        assert_eq!(cols.get("team_name"), Some(0));
        assert_eq!(cols.get("domains"), Some(1));
    }

    #[test]
    fn header_matching_is_case_insensitive_and_trimmed() {
        let h = headers(&["  TEAM NAME  ", "PROJECT DOMAIN"]);
        let cols = resolve(&h, &[TEAM_NAME, DOMAINS]);
        assert_eq!(cols.get("team_name"), Some(0));
        assert_eq!(cols.get("domains"), Some(1));
    }

    #[test]
    fn unresolved_field_is_absent() {
        let h = headers(&["Team Name", "Mentor"]);
        let cols = resolve(&h, &[TEAM_NAME, DOMAINS]);
        assert_eq!(cols.get("team_name"), Some(0));
        assert_eq!(cols.get("domains"), None);
    }

    #[test]
    fn claimed_index_is_not_reassigned() {
        // A single "Team Domain" header: the domains strict rule claims it
        // in pass one, so team_name's broad rule finds nothing in pass two.
        let h = headers(&["Team Domain"]);
        let cols = resolve(&h, &[TEAM_NAME, DOMAINS]);
        assert_eq!(cols.get("domains"), Some(0));
        assert_eq!(cols.get("team_name"), None);
    }

    #[test]
    fn exclusion_keywords_disambiguate() {
        let name_rule = rule(&["leader"], &["name", "reg"], &["number", "whatsapp"]);
        assert!(name_rule.matches("team leader name"));
        assert!(!name_rule.matches("team leader whatsapp number"));
        assert!(!name_rule.matches("leader registration number"));
    }

    #[test]
    fn cell_handles_short_rows_and_blanks() {
        let row = headers(&["Rocket", " ", "  web  "]);
        assert_eq!(cell(&row, Some(0)), Some("Rocket"));
        assert_eq!(cell(&row, Some(1)), None); // blank after trim
        assert_eq!(cell(&row, Some(2)), Some("web"));
        assert_eq!(cell(&row, Some(7)), None); // past the end
        assert_eq!(cell(&row, None), None); // unresolved column
    }
}
