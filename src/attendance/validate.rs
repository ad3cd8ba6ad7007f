//! Attendance validation and worksheet routing.
//!
//! Rules run in order and short-circuit on the first failure, so a bad
//! record is rejected before any remote call is made. Category synonyms
//! and worksheet names are static tables, not branching logic.

use crate::api::ApiError;
use crate::models::{AttendanceRecord, EventType};

/// Bootcamp track a category string normalizes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootcampTrack {
    AiMl,
    Cyber,
    FullStack,
}

impl BootcampTrack {
    /// Canonical display label.
    pub fn label(self) -> &'static str {
        match self {
            BootcampTrack::AiMl => "AI/ML",
            BootcampTrack::Cyber => "Cyber",
            BootcampTrack::FullStack => "Full Stack",
        }
    }

    /// Attendance worksheet this track writes to.
    pub fn worksheet(self) -> &'static str {
        match self {
            BootcampTrack::AiMl => "AI/ML Bootcamp",
            BootcampTrack::Cyber => "Cyber Bootcamp",
            BootcampTrack::FullStack => "Full Stack Bootcamp",
        }
    }
}

/// Synonym table for bootcamp categories. Matching is exact on the
/// lower-cased, trimmed input; extend the table rather than the code.
const CATEGORY_SYNONYMS: &[(&str, BootcampTrack)] = &[
    ("ai/ml", BootcampTrack::AiMl),
    ("aiml", BootcampTrack::AiMl),
    ("ai-ml", BootcampTrack::AiMl),
    ("ai ml", BootcampTrack::AiMl),
    ("ai", BootcampTrack::AiMl),
    ("ml", BootcampTrack::AiMl),
    ("machine learning", BootcampTrack::AiMl),
    ("cyber", BootcampTrack::Cyber),
    ("cybersecurity", BootcampTrack::Cyber),
    ("cyber security", BootcampTrack::Cyber),
    ("full stack", BootcampTrack::FullStack),
    ("fullstack", BootcampTrack::FullStack),
    ("full-stack", BootcampTrack::FullStack),
    ("full stack development", BootcampTrack::FullStack),
];

const BOOTCAMP_DAYS: &[&str] = &["1", "2", "3", "4", "5"];

/// Hackathon day -> worksheet lookup; doubles as the day whitelist.
const HACKATHON_WORKSHEETS: &[(&str, &str)] = &[
    ("1", "Hackathon Day 1"),
    ("2", "Hackathon Day 2"),
];

/// Category label used for all hackathon attendance.
const HACKATHON_CATEGORY: &str = "General";

/// Normalize a free-text category to a bootcamp track, if known.
pub fn normalize_category(raw: &str) -> Option<BootcampTrack> {
    let needle = raw.trim().to_lowercase();
    CATEGORY_SYNONYMS
        .iter()
        .find(|(synonym, _)| *synonym == needle)
        .map(|(_, track)| *track)
}

/// Where a validated record lands, plus its normalized fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorksheetTarget {
    pub worksheet: &'static str,
    pub event_type: EventType,
    pub day: String,
    pub category: String,
}

/// Validate a submission and resolve its target worksheet.
///
/// No remote calls happen here; every rejection is a client error.
pub fn validate_and_route(record: &AttendanceRecord) -> Result<WorksheetTarget, ApiError> {
    for (field, value) in [
        ("regno", &record.regno),
        ("name", &record.name),
        ("day", &record.day),
        ("event_type", &record.event_type),
    ] {
        if value.trim().is_empty() {
            return Err(ApiError::MissingField(field));
        }
    }

    let event_type = EventType::parse(&record.event_type)
        .ok_or_else(|| ApiError::InvalidEventType(record.event_type.trim().to_string()))?;
    let day = record.day.trim();

    match event_type {
        EventType::Bootcamp => {
            if !BOOTCAMP_DAYS.contains(&day) {
                return Err(ApiError::InvalidDay {
                    day: day.to_string(),
                    allowed: "1-5",
                });
            }
            if record.category.trim().is_empty() {
                return Err(ApiError::MissingCategory);
            }
            let track = normalize_category(&record.category)
                .ok_or_else(|| ApiError::InvalidCategory(record.category.trim().to_string()))?;
            Ok(WorksheetTarget {
                worksheet: track.worksheet(),
                event_type,
                day: day.to_string(),
                category: track.label().to_string(),
            })
        }
        EventType::Hackathon => {
            let worksheet = HACKATHON_WORKSHEETS
                .iter()
                .find(|(d, _)| *d == day)
                .map(|(_, ws)| *ws)
                .ok_or_else(|| ApiError::InvalidDay {
                    day: day.to_string(),
                    allowed: "1-2",
                })?;
            // Hackathon category is informational only; force the label.
            Ok(WorksheetTarget {
                worksheet,
                event_type,
                day: day.to_string(),
                category: HACKATHON_CATEGORY.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(regno: &str, name: &str, day: &str, event: &str, category: &str) -> AttendanceRecord {
        AttendanceRecord {
            regno: regno.to_string(),
            name: name.to_string(),
            day: day.to_string(),
            event_type: event.to_string(),
            category: category.to_string(),
        }
    }

    #[test]
    fn missing_fields_short_circuit() {
        let r = record("", "Asha", "1", "bootcamp", "cyber");
        assert!(matches!(
            validate_and_route(&r),
            Err(ApiError::MissingField("regno"))
        ));
        let r = record("REG1", "Asha", " ", "bootcamp", "cyber");
        assert!(matches!(
            validate_and_route(&r),
            Err(ApiError::MissingField("day"))
        ));
    }

    #[test]
    fn event_type_is_case_insensitive() {
        let r = record("REG1", "Asha", "3", "BootCamp", "aiml");
        let target = validate_and_route(&r).expect("should validate");
        assert_eq!(target.event_type, EventType::Bootcamp);
        assert_eq!(target.worksheet, "AI/ML Bootcamp");

        let r = record("REG1", "Asha", "1", "workshop", "aiml");
        assert!(matches!(
            validate_and_route(&r),
            Err(ApiError::InvalidEventType(_))
        ));
    }

    #[test]
    fn bootcamp_day_six_is_rejected() {
        let r = record("REG1", "Asha", "6", "bootcamp", "cyber");
        assert!(matches!(
            validate_and_route(&r),
            Err(ApiError::InvalidDay { .. })
        ));
    }

    #[test]
    fn bootcamp_requires_known_category() {
        let r = record("REG1", "Asha", "2", "bootcamp", "");
        assert!(matches!(
            validate_and_route(&r),
            Err(ApiError::MissingCategory)
        ));

        let r = record("REG1", "Asha", "2", "bootcamp", "quantum");
        assert!(matches!(
            validate_and_route(&r),
            Err(ApiError::InvalidCategory(_))
        ));
    }

    #[test]
    fn category_synonyms_normalize() {
        let r = record("REG1", "Asha", "2", "bootcamp", "  CyberSecurity ");
        let target = validate_and_route(&r).expect("should validate");
        assert_eq!(target.category, "Cyber");
        assert_eq!(target.worksheet, "Cyber Bootcamp");

        let r = record("REG1", "Asha", "2", "bootcamp", "full-stack");
        let target = validate_and_route(&r).expect("should validate");
        assert_eq!(target.worksheet, "Full Stack Bootcamp");
    }

    #[test]
    fn hackathon_forces_general_category() {
        let r = record("REG1", "Asha", "1", "hackathon", "anything");
        let target = validate_and_route(&r).expect("should validate");
        assert_eq!(target.category, "General");
        assert_eq!(target.worksheet, "Hackathon Day 1");
    }

    #[test]
    fn hackathon_day_three_is_rejected() {
        let r = record("REG1", "Asha", "3", "hackathon", "");
        assert!(matches!(
            validate_and_route(&r),
            Err(ApiError::InvalidDay { .. })
        ));
    }
}
