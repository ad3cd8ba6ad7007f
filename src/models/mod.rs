//! Data models for registration and attendance.
//!
//! This module contains the data structures flowing through the API:
//!
//! - `TeamRecord`: one registered team, projected from a sheet row
//! - `AttendanceRecord`, `EventType`: an inbound attendance submission
//! - Response payloads: `TeamsResponse`, `CategoryTeamsResponse`,
//!   `AttendanceResponse` with its `BatchSummary`/`RecordResult` parts

pub mod attendance;
pub mod team;

pub use attendance::{
    AttendanceRecord, AttendanceRequest, AttendanceResponse, BatchSummary, EventType,
    RecordResult,
};
pub use team::{CategoryTeamsResponse, TeamRecord, TeamsResponse};
