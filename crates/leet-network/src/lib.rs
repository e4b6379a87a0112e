//! leet-network: Invite-network resolution for the Leet admin console.
//!
//! Loads the complete user collection from the admin backend, indexes the
//! inviter → invitee relation in memory, and resolves the bounded network
//! around a focus user into node and edge sets for a graph renderer.

pub mod config;
pub mod error;
pub mod fetch;
pub mod graph;
pub mod projection;
pub mod resolve;
pub mod search;
pub mod types;

pub use config::NetworkConfig;
pub use error::NetworkError;
pub use types::{NetworkEdge, NetworkGraph, NetworkNode, NetworkRequest, NetworkResult, NetworkStats};

use leet_api::ApiClient;
use leet_core::{AdminUser, UserId};

use crate::graph::InviteGraph;

/// The invite-network engine.
pub struct NetworkEngine {
    api_client: ApiClient,
    config: NetworkConfig,
}

impl NetworkEngine {
    /// Create a new engine with default configuration.
    pub fn new(api_client: ApiClient) -> Self {
        Self {
            api_client,
            config: NetworkConfig::default(),
        }
    }

    /// Set a custom configuration.
    pub fn with_config(mut self, config: NetworkConfig) -> Self {
        self.config = config;
        self
    }

    pub fn api_client(&self) -> &ApiClient {
        &self.api_client
    }

    /// Resolve the invite network around the requested user.
    ///
    /// Orchestrates: fetch all users → build index → resolve → project.
    pub async fn resolve_network(&self, request: NetworkRequest) -> error::Result<NetworkResult> {
        let users = fetch::fetch_all_users(&self.api_client).await?;
        let max_depth = request.max_depth.unwrap_or(self.config.default_depth);
        Ok(build_network(users, request.root_user_id, max_depth))
    }

    /// Find users matching a free-text query in the full collection.
    pub async fn search(&self, query: &str) -> error::Result<Vec<AdminUser>> {
        let users = fetch::fetch_all_users(&self.api_client).await?;
        Ok(search::search_users(&users, query)
            .into_iter()
            .cloned()
            .collect())
    }
}

/// Resolve and project a network from an already loaded collection.
///
/// Without a root the first user of the collection is used. An empty
/// collection or an unknown root produces an empty graph, never an error.
pub fn build_network(users: Vec<AdminUser>, root: Option<UserId>, max_depth: usize) -> NetworkResult {
    let start = std::time::Instant::now();

    let invite_graph = InviteGraph::from_users(users);
    let root = root.or_else(|| invite_graph.first_user());

    let (graph, max_depth_reached) = match root {
        Some(root_id) => {
            let connected = resolve::resolve_connected_ids(root_id, max_depth, &invite_graph);
            let graph = projection::project_graph(&connected, &invite_graph, root_id);
            (graph, connected.max_depth_reached())
        }
        None => (NetworkGraph::default(), 0),
    };

    if graph.is_empty() {
        tracing::info!(
            root = ?root.map(|id| id.0),
            users = invite_graph.user_count(),
            "No connected invite relationships for this selection"
        );
    }

    let stats = NetworkStats {
        total_users: invite_graph.user_count(),
        total_invite_links: invite_graph.invite_link_count(),
        node_count: graph.nodes.len(),
        edge_count: graph.edges.len(),
        max_depth_reached,
    };

    NetworkResult {
        root_user_id: root,
        max_depth,
        graph,
        stats,
        computation_ms: start.elapsed().as_millis() as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users() -> Vec<AdminUser> {
        vec![
            AdminUser::new(1),
            AdminUser::new(2).invited_by(1),
            AdminUser::new(3).invited_by(1),
            AdminUser::new(4).invited_by(2),
        ]
    }

    #[test]
    fn test_build_network_with_root() {
        let result = build_network(users(), Some(UserId(2)), 1);
        assert_eq!(result.root_user_id, Some(UserId(2)));
        assert_eq!(result.stats.node_count, 3);
        assert_eq!(result.stats.edge_count, 2);
        assert_eq!(result.stats.total_users, 4);
        assert_eq!(result.stats.total_invite_links, 3);
        assert_eq!(result.stats.max_depth_reached, 1);
    }

    #[test]
    fn test_build_network_defaults_to_first_user() {
        let result = build_network(users(), None, 2);
        assert_eq!(result.root_user_id, Some(UserId(1)));
        assert_eq!(result.graph.root().map(|n| n.id), Some(UserId(1)));
        assert_eq!(result.stats.node_count, 4);
    }

    #[test]
    fn test_build_network_empty_collection() {
        let result = build_network(Vec::new(), None, 2);
        assert!(result.root_user_id.is_none());
        assert!(result.graph.is_empty());
        assert_eq!(result.stats.total_users, 0);
    }

    #[test]
    fn test_build_network_unknown_root() {
        let result = build_network(users(), Some(UserId(404)), 3);
        assert_eq!(result.root_user_id, Some(UserId(404)));
        assert!(result.graph.is_empty());
        assert!(result.graph.edges.is_empty());
    }
}
