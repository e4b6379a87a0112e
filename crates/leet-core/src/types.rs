//! Core domain types for the Leet admin backend.
//!
//! These mirror the JSON payloads returned by the admin REST API. Only `id`
//! is strict; every other field decodes leniently (see [`crate::lenient`]) so
//! partially populated or oddly typed records still load.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::lenient;

// ── Identifiers ───────────────────────────────────────────────────

/// Backend-assigned integer identifier of a user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

// ── Users ─────────────────────────────────────────────────────────

/// Which side of the marketplace a user is on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserType {
    Host,
    Rider,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Host => "HOST",
            Self::Rider => "RIDER",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user record as listed by `/accounts/admin/users/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: UserId,
    #[serde(default, deserialize_with = "lenient::text")]
    pub phone_number: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::user_type")]
    pub user_type: Option<UserType>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_verified: bool,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_staff: bool,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_superuser: bool,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_invite_activated: bool,
    /// The user who invited this one, if any. Not guaranteed to exist.
    #[serde(default, deserialize_with = "lenient::user_id")]
    pub invited_by: Option<UserId>,
    #[serde(default, deserialize_with = "lenient::timestamp")]
    pub suspended_until: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient::timestamp")]
    pub date_joined: Option<DateTime<Utc>>,
}

impl AdminUser {
    /// A bare record with only an id, every flag off.
    pub fn new(id: i64) -> Self {
        Self {
            id: UserId(id),
            phone_number: None,
            email: None,
            first_name: None,
            last_name: None,
            user_type: None,
            is_verified: false,
            is_active: false,
            is_staff: false,
            is_superuser: false,
            is_invite_activated: false,
            invited_by: None,
            suspended_until: None,
            date_joined: None,
        }
    }

    /// Set the inviter.
    pub fn invited_by(mut self, inviter: i64) -> Self {
        self.invited_by = Some(UserId(inviter));
        self
    }

    /// Full name if any part is present, else phone number, else `User <id>`.
    pub fn display_name(&self) -> String {
        let full = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if !full.is_empty() {
            return full;
        }

        match self.phone_number.as_deref().map(str::trim) {
            Some(phone) if !phone.is_empty() => phone.to_string(),
            _ => format!("User {}", self.id),
        }
    }

    /// Role label for presentation; `UNKNOWN` when the backend sent none.
    pub fn role(&self) -> &'static str {
        self.user_type.as_ref().map_or("UNKNOWN", UserType::as_str)
    }

    /// Decode raw records one at a time, skipping those without a usable id.
    pub fn decode_many(records: Vec<Value>) -> Vec<AdminUser> {
        let total = records.len();
        let users: Vec<AdminUser> = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value(record) {
                Ok(user) => Some(user),
                Err(e) => {
                    tracing::warn!(index, error = %e, "Skipping malformed user record");
                    None
                }
            })
            .collect();
        if users.len() < total {
            tracing::warn!(kept = users.len(), total, "Some user records were skipped");
        }
        users
    }
}

// ── Pagination ────────────────────────────────────────────────────

/// Page envelope returned by every admin list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

impl<T> Paginated<T> {
    pub fn has_next(&self) -> bool {
        self.next.as_deref().is_some_and(|n| !n.is_empty())
    }
}
