//! Request and response types for invite-network operations.

use serde::{Deserialize, Serialize};

use leet_core::UserId;

/// Request to resolve a user's invite network.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkRequest {
    /// Focus user. If None, the first user of the collection.
    pub root_user_id: Option<UserId>,
    /// Hop bound (default: from config, normally 2).
    pub max_depth: Option<usize>,
}

/// A user in the rendered network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkNode {
    pub id: UserId,
    /// Display name and `#<id>` on two lines.
    pub label: String,
    /// `HOST`, `RIDER`, or `UNKNOWN`.
    pub role: String,
    pub invite_activated: bool,
    pub is_root: bool,
    /// Hops from the root.
    pub depth: usize,
}

/// A directed inviter → invitee link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkEdge {
    /// `<inviter>-<invitee>`; unique because each user has one inviter.
    pub id: String,
    pub source: UserId,
    pub target: UserId,
}

/// Node and edge sets handed to a graph renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkGraph {
    pub nodes: Vec<NetworkNode>,
    pub edges: Vec<NetworkEdge>,
}

impl NetworkGraph {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn root(&self) -> Option<&NetworkNode> {
        self.nodes.iter().find(|n| n.is_root)
    }
}

/// Statistics about the loaded collection and the resolved network.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkStats {
    pub total_users: usize,
    pub total_invite_links: usize,
    pub node_count: usize,
    pub edge_count: usize,
    pub max_depth_reached: usize,
}

/// Complete result of a network resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkResult {
    pub root_user_id: Option<UserId>,
    pub max_depth: usize,
    pub graph: NetworkGraph,
    pub stats: NetworkStats,
    pub computation_ms: u64,
}
