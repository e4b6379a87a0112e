//! leet-api: HTTP client for the Leet admin backend.
//!
//! Every call to the backend flows through [`ApiClient`], which attaches the
//! bearer token held by an explicit [`AdminSession`]. The backend owns all
//! business rules; this crate only moves typed records across the wire.

pub mod auth;
pub mod client;
pub mod session;
pub mod users;

pub use auth::LoginOutcome;
pub use client::{ApiClient, ApiConfig, ApiError};
pub use session::AdminSession;
pub use users::UserQuery;
