//! Forgiving field decoders for backend payloads.
//!
//! The admin backend is not strict about the shapes it sends: flags can be
//! `null`, timestamps can lack a timezone, and labels can drift. These
//! decoders turn anything unexpected into the field's empty value so a
//! single odd field never rejects a whole record. Use them together with
//! `#[serde(default)]` so missing fields are covered too.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::types::{UserId, UserType};

/// `true` only for a JSON `true`; `null` and anything else is `false`.
pub fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(matches!(Value::deserialize(deserializer)?, Value::Bool(true)))
}

/// Non-string values become `None`.
pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

/// `HOST` or `RIDER` in any case; every other value becomes `None`.
pub fn user_type<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<UserType>, D::Error> {
    let Value::String(raw) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };
    Ok(match raw.trim().to_ascii_uppercase().as_str() {
        "HOST" => Some(UserType::Host),
        "RIDER" => Some(UserType::Rider),
        _ => None,
    })
}

/// An integer or an integer string; anything else becomes `None`.
pub fn user_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<UserId>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().map(UserId),
        Value::String(s) => s.trim().parse().ok().map(UserId),
        _ => None,
    })
}

/// RFC 3339, or a naive `YYYY-MM-DD[T ]HH:MM:SS[.f]` read as UTC.
pub fn timestamp<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error> {
    let Value::String(raw) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };
    Ok(parse_timestamp(&raw))
}

pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}
