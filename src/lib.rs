//! regdesk - event registration and attendance backend over Google Sheets.
//!
//! Reads team registration data from one spreadsheet and writes attendance
//! records to another, exposing both as typed JSON request/response calls
//! that any web framework can mount.
//!
//! The interesting piece is the column resolver in [`columns`]: registration
//! sheets arrive with free-text headers, so semantic columns (team name,
//! domain, leaders, members, registration numbers) are located by a ranked
//! two-pass keyword heuristic rather than fixed positions.
//!
//! The write side validates each attendance record, routes it to a physical
//! worksheet (creating it on first use), and emulates an idempotent upsert
//! with a read-before-write duplicate scan. The scan is not atomic; two
//! concurrent submissions for the same `(regno, day)` can both pass the
//! check. That race is accepted and documented, not solved.

pub mod api;
pub mod attendance;
pub mod auth;
pub mod columns;
pub mod config;
pub mod models;
pub mod sheets;
pub mod teams;

pub use api::{ApiError, ApiService};
pub use config::Config;
