//! leet-core: Shared types, configuration, and error handling for the Leet admin tooling.
//!
//! This crate provides the foundational pieces used by the API client and the
//! invite-network resolver:
//! - Typed user records as returned by the admin backend
//! - Pagination envelope for list endpoints
//! - Lenient decoding for loosely typed backend fields
//! - Layered configuration loading
//! - Common error types

pub mod config;
pub mod error;
pub mod lenient;
pub mod types;

pub use error::LeetError;
pub use types::{AdminUser, Paginated, UserId, UserType};
