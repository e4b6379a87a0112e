//! Bounded breadth-first resolution of a user's invite network.
//!
//! From a root user, walks the invite relation in both directions (up to the
//! inviter, down to the invitees) for at most `max_depth` hops. Backend data
//! is not guaranteed to be acyclic, so a user is expanded at most once: the
//! visited check happens when a queue entry is taken, and the first accepted
//! entry fixes the user's hop depth. The queue is FIFO over unit-weight edges,
//! so that depth is the shortest hop count from the root.

use std::collections::{HashMap, VecDeque};

use leet_core::UserId;

use crate::graph::InviteGraph;

/// Hop bound used when the requested depth cannot be parsed.
pub const DEFAULT_MAX_DEPTH: usize = 2;

/// The users reached by a resolution, in visit order, with their hop depth.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectedIds {
    order: Vec<UserId>,
    depths: HashMap<UserId, usize>,
}

impl ConnectedIds {
    fn insert(&mut self, id: UserId, depth: usize) {
        if self.depths.insert(id, depth).is_none() {
            self.order.push(id);
        }
    }

    pub fn contains(&self, id: UserId) -> bool {
        self.depths.contains_key(&id)
    }

    /// Hop count from the root at which `id` was reached.
    pub fn depth_of(&self, id: UserId) -> Option<usize> {
        self.depths.get(&id).copied()
    }

    /// Ids in the order they were visited; the root comes first.
    pub fn iter(&self) -> impl Iterator<Item = UserId> + '_ {
        self.order.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Deepest hop count among the visited users.
    pub fn max_depth_reached(&self) -> usize {
        self.depths.values().copied().max().unwrap_or(0)
    }
}

/// Parse a user-supplied hop bound as a number.
///
/// Fractions round down (`"1.5"` is 1 hop), exponents are accepted, blank
/// input is 0 and negatives clamp to 0. Only text that is not a number at
/// all falls back to [`DEFAULT_MAX_DEPTH`].
pub fn parse_depth(raw: &str) -> usize {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_nan() => DEFAULT_MAX_DEPTH,
        Ok(value) if value <= 0.0 => 0,
        // `as` saturates, so infinity means unbounded.
        Ok(value) => value.floor() as usize,
        Err(_) => DEFAULT_MAX_DEPTH,
    }
}

/// Collect every user within `max_depth` invite hops of `root`.
///
/// A root that is not in the graph yields an empty set. Inviter ids that do
/// not resolve to a user are dropped rather than counted.
pub fn resolve_connected_ids(root: UserId, max_depth: usize, graph: &InviteGraph) -> ConnectedIds {
    let mut connected = ConnectedIds::default();
    let mut queue: VecDeque<(UserId, usize)> = VecDeque::new();
    queue.push_back((root, 0));

    while let Some((id, depth)) = queue.pop_front() {
        if connected.contains(id) || depth > max_depth {
            continue;
        }
        let Some(user) = graph.user(id) else {
            continue;
        };

        connected.insert(id, depth);

        // Entries past the bound would be dropped on dequeue anyway.
        if depth == max_depth {
            continue;
        }

        if let Some(inviter) = user.invited_by {
            if !connected.contains(inviter) {
                queue.push_back((inviter, depth + 1));
            }
        }

        for &invitee in graph.invitees_of(id) {
            if !connected.contains(invitee) {
                queue.push_back((invitee, depth + 1));
            }
        }
    }

    tracing::debug!(
        root = %root,
        max_depth,
        reached = connected.len(),
        "Resolved invite network"
    );
    connected
}
