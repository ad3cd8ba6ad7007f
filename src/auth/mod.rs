//! Service-account credentials and token acquisition.
//!
//! Credentials come from a local key file or environment variables; the
//! OAuth exchange itself sits behind the `TokenProvider` trait, so the
//! sheets client never knows where its bearer token came from.

pub mod credentials;
pub mod token;

pub use credentials::{ServiceAccountKey, DRIVE_SCOPE, SHEETS_SCOPE};
pub use token::{EnvTokenProvider, StaticTokenProvider, TokenProvider};
