//! Local user lookup for picking a network root.

use leet_core::AdminUser;

/// Case-insensitive match over full name, email, phone number, and id.
///
/// A blank query matches everyone.
pub fn search_users<'a>(users: &'a [AdminUser], query: &str) -> Vec<&'a AdminUser> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return users.iter().collect();
    }
    users.iter().filter(|user| matches(user, &needle)).collect()
}

fn matches(user: &AdminUser, needle: &str) -> bool {
    let full_name = format!(
        "{} {}",
        user.first_name.as_deref().unwrap_or(""),
        user.last_name.as_deref().unwrap_or("")
    )
    .to_lowercase();

    full_name.contains(needle)
        || contains_lower(user.email.as_deref(), needle)
        || contains_lower(user.phone_number.as_deref(), needle)
        || user.id.to_string().contains(needle)
}

fn contains_lower(field: Option<&str>, needle: &str) -> bool {
    field.is_some_and(|value| value.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users() -> Vec<AdminUser> {
        let mut ama = AdminUser::new(12);
        ama.first_name = Some("Ama".to_string());
        ama.last_name = Some("Mensah".to_string());
        ama.email = Some("Ama@Example.com".to_string());
        ama.phone_number = Some("+233201111111".to_string());

        let mut kofi = AdminUser::new(305);
        kofi.first_name = Some("Kofi".to_string());
        kofi.phone_number = Some("+233209999999".to_string());

        vec![ama, kofi]
    }

    fn ids(found: &[&AdminUser]) -> Vec<i64> {
        found.iter().map(|u| u.id.0).collect()
    }

    #[test]
    fn test_blank_query_returns_all() {
        let users = users();
        assert_eq!(search_users(&users, "   ").len(), 2);
    }

    #[test]
    fn test_matches_name_across_parts() {
        let users = users();
        assert_eq!(ids(&search_users(&users, "ama mens")), vec![12]);
        assert_eq!(ids(&search_users(&users, "KOFI")), vec![305]);
    }

    #[test]
    fn test_matches_email_phone_and_id() {
        let users = users();
        assert_eq!(ids(&search_users(&users, "example.com")), vec![12]);
        assert_eq!(ids(&search_users(&users, "20999")), vec![305]);
        assert_eq!(ids(&search_users(&users, "30")), vec![305]);
    }

    #[test]
    fn test_no_match() {
        let users = users();
        assert!(search_users(&users, "yaw").is_empty());
    }
}
