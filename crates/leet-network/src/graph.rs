//! In-memory invite graph.
//!
//! Indexes a flat user collection by id and derives the inviter → invitees
//! relation once. The index is rebuilt from scratch whenever the collection
//! is reloaded; it is never patched incrementally.

use std::collections::HashMap;

use leet_core::{AdminUser, UserId};

/// Users keyed by id plus the derived inviter → invitees index.
#[derive(Debug, Clone, Default)]
pub struct InviteGraph {
    /// Every user, keyed by id.
    pub users_by_id: HashMap<UserId, AdminUser>,
    /// Inviter id → invitee ids, in collection order.
    pub invitees_by_inviter: HashMap<UserId, Vec<UserId>>,
    /// User ids in the order they first appeared in the collection.
    pub order: Vec<UserId>,
}

impl InviteGraph {
    /// Build from a complete user collection.
    ///
    /// If an id appears twice the later record wins, but it keeps the
    /// position of its first appearance.
    pub fn from_users(users: Vec<AdminUser>) -> Self {
        let mut users_by_id = HashMap::with_capacity(users.len());
        let mut order = Vec::with_capacity(users.len());

        for user in users {
            let id = user.id;
            if users_by_id.insert(id, user).is_none() {
                order.push(id);
            }
        }

        let mut invitees_by_inviter: HashMap<UserId, Vec<UserId>> = HashMap::new();
        for id in &order {
            if let Some(inviter) = users_by_id.get(id).and_then(|u| u.invited_by) {
                invitees_by_inviter.entry(inviter).or_default().push(*id);
            }
        }

        Self {
            users_by_id,
            invitees_by_inviter,
            order,
        }
    }

    pub fn user(&self, id: UserId) -> Option<&AdminUser> {
        self.users_by_id.get(&id)
    }

    pub fn contains(&self, id: UserId) -> bool {
        self.users_by_id.contains_key(&id)
    }

    /// Direct invitees of `inviter`; empty when it invited nobody.
    pub fn invitees_of(&self, inviter: UserId) -> &[UserId] {
        self.invitees_by_inviter
            .get(&inviter)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The first user of the collection, used as the default focus.
    pub fn first_user(&self) -> Option<UserId> {
        self.order.first().copied()
    }

    /// Number of users in the graph.
    pub fn user_count(&self) -> usize {
        self.order.len()
    }

    /// Number of recorded invite links, including ones pointing at unknown inviters.
    pub fn invite_link_count(&self) -> usize {
        self.invitees_by_inviter.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, inviter: Option<i64>) -> AdminUser {
        let user = AdminUser::new(id);
        match inviter {
            Some(by) => user.invited_by(by),
            None => user,
        }
    }

    #[test]
    fn test_index_groups_invitees_in_order() {
        let graph = InviteGraph::from_users(vec![
            user(1, None),
            user(3, Some(1)),
            user(2, Some(1)),
            user(4, Some(2)),
        ]);

        assert_eq!(graph.user_count(), 4);
        assert_eq!(graph.invitees_of(UserId(1)), &[UserId(3), UserId(2)]);
        assert_eq!(graph.invitees_of(UserId(2)), &[UserId(4)]);
        assert!(graph.invitees_of(UserId(4)).is_empty());
        assert_eq!(graph.invite_link_count(), 3);
    }

    #[test]
    fn test_dangling_inviter_is_indexed() {
        let graph = InviteGraph::from_users(vec![user(5, Some(999))]);
        assert_eq!(graph.invitees_of(UserId(999)), &[UserId(5)]);
        assert!(!graph.contains(UserId(999)));
    }

    #[test]
    fn test_duplicate_ids_keep_latest_record() {
        let graph = InviteGraph::from_users(vec![
            user(1, None),
            user(2, Some(1)),
            user(2, None),
        ]);

        assert_eq!(graph.user_count(), 2);
        assert_eq!(graph.order, vec![UserId(1), UserId(2)]);
        assert!(graph.user(UserId(2)).unwrap().invited_by.is_none());
        assert!(graph.invitees_of(UserId(1)).is_empty());
    }

    #[test]
    fn test_empty_collection() {
        let graph = InviteGraph::from_users(Vec::new());
        assert_eq!(graph.user_count(), 0);
        assert!(graph.first_user().is_none());
    }
}
