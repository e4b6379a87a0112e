//! Loading the user collection, from the backend or from a JSON document.

use leet_api::ApiClient;
use leet_core::AdminUser;
use serde::Deserialize;
use serde_json::Value;

use crate::error::Result;

/// Fetch every user from the admin backend, walking all pages.
pub async fn fetch_all_users(client: &ApiClient) -> Result<Vec<AdminUser>> {
    let users = client.fetch_all_users().await?;
    Ok(users)
}

/// Either a bare array of user records or a single list-endpoint page.
///
/// Records stay raw here so one bad record cannot hide behind an
/// untagged-enum mismatch; they are decoded one at a time afterwards.
#[derive(Deserialize)]
#[serde(untagged)]
enum UsersDocument {
    List(Vec<Value>),
    Page { results: Vec<Value> },
}

/// Decode users from JSON, as saved from the API or hand-written.
///
/// Only a document that is neither shape is an error; malformed records
/// inside it are skipped.
pub fn parse_users(json: &str) -> Result<Vec<AdminUser>> {
    let records = match serde_json::from_str::<UsersDocument>(json)? {
        UsersDocument::List(records) => records,
        UsersDocument::Page { results } => results,
    };
    Ok(AdminUser::decode_many(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_array() {
        let users = parse_users(r#"[{"id": 1}, {"id": 2, "invited_by": 1}]"#).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[1].invited_by.map(|id| id.0), Some(1));
    }

    #[test]
    fn test_parse_page() {
        let users = parse_users(
            r#"{"count": 1, "next": null, "previous": null, "results": [{"id": 9}]}"#,
        )
        .unwrap();
        assert_eq!(users.len(), 1);
    }

    #[test]
    fn test_parse_keeps_good_records_among_bad_ones() {
        let users = parse_users(
            r#"[
                {"id": 1},
                {"id": 2, "invited_by": 1, "date_joined": "2025-03-01T10:00:00"},
                {"id": 3, "invited_by": 1, "is_active": null},
                {"invited_by": 1},
                "not a record"
            ]"#,
        )
        .unwrap();

        let ids: Vec<i64> = users.iter().map(|u| u.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(users[1].date_joined.is_some());
        assert!(!users[2].is_active);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_users("{\"users\": 3}").is_err());
        assert!(parse_users("not json").is_err());
    }
}
