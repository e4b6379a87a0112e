//! Projection of a resolved id set into renderable nodes and edges.

use leet_core::{AdminUser, UserId};

use crate::graph::InviteGraph;
use crate::resolve::ConnectedIds;
use crate::types::{NetworkEdge, NetworkGraph, NetworkNode};

/// Two-line node label: display name, then `#<id>`.
pub fn node_label(user: &AdminUser) -> String {
    format!("{}\n#{}", user.display_name(), user.id)
}

/// Build the node and edge lists for a resolved set.
///
/// Nodes follow visit order. An edge is emitted for each visited user whose
/// inviter was visited too; links to inviters beyond the hop bound are left
/// out.
pub fn project_graph(connected: &ConnectedIds, graph: &InviteGraph, root: UserId) -> NetworkGraph {
    let mut nodes = Vec::with_capacity(connected.len());
    let mut edges = Vec::new();

    for id in connected.iter() {
        let Some(user) = graph.user(id) else {
            continue;
        };
        nodes.push(NetworkNode {
            id,
            label: node_label(user),
            role: user.role().to_string(),
            invite_activated: user.is_invite_activated,
            is_root: id == root,
            depth: connected.depth_of(id).unwrap_or(0),
        });
    }

    for id in connected.iter() {
        let Some(inviter) = graph.user(id).and_then(|u| u.invited_by) else {
            continue;
        };
        if !connected.contains(inviter) {
            continue;
        }
        edges.push(NetworkEdge {
            id: format!("{inviter}-{id}"),
            source: inviter,
            target: id,
        });
    }

    NetworkGraph { nodes, edges }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::resolve_connected_ids;
    use leet_core::UserType;

    fn user(id: i64, inviter: Option<i64>) -> AdminUser {
        let user = AdminUser::new(id);
        match inviter {
            Some(by) => user.invited_by(by),
            None => user,
        }
    }

    fn edge_pairs(graph: &NetworkGraph) -> Vec<(i64, i64)> {
        let mut pairs: Vec<(i64, i64)> = graph
            .edges
            .iter()
            .map(|e| (e.source.0, e.target.0))
            .collect();
        pairs.sort_unstable();
        pairs
    }

    #[test]
    fn test_edges_follow_depth() {
        let graph = InviteGraph::from_users(vec![
            user(1, None),
            user(2, Some(1)),
            user(3, Some(1)),
            user(4, Some(2)),
        ]);

        let deep = project_graph(&resolve_connected_ids(UserId(1), 2, &graph), &graph, UserId(1));
        assert_eq!(deep.nodes.len(), 4);
        assert_eq!(edge_pairs(&deep), vec![(1, 2), (1, 3), (2, 4)]);

        let shallow = project_graph(&resolve_connected_ids(UserId(1), 1, &graph), &graph, UserId(1));
        assert_eq!(shallow.nodes.len(), 3);
        assert_eq!(edge_pairs(&shallow), vec![(1, 2), (1, 3)]);
    }

    #[test]
    fn test_edge_to_out_of_range_inviter_omitted() {
        let graph = InviteGraph::from_users(vec![user(1, None), user(2, Some(1)), user(3, Some(2))]);
        let projected = project_graph(&resolve_connected_ids(UserId(3), 1, &graph), &graph, UserId(3));
        assert_eq!(edge_pairs(&projected), vec![(2, 3)]);
    }

    #[test]
    fn test_dangling_inviter_has_no_edge() {
        let graph = InviteGraph::from_users(vec![user(4, Some(999))]);
        let projected = project_graph(&resolve_connected_ids(UserId(4), 3, &graph), &graph, UserId(4));
        assert_eq!(projected.nodes.len(), 1);
        assert!(projected.edges.is_empty());
    }

    #[test]
    fn test_edge_ids() {
        let graph = InviteGraph::from_users(vec![user(10, None), user(11, Some(10))]);
        let projected = project_graph(&resolve_connected_ids(UserId(10), 1, &graph), &graph, UserId(10));
        assert_eq!(projected.edges[0].id, "10-11");
    }

    #[test]
    fn test_node_flags() {
        let mut host = user(1, None);
        host.user_type = Some(UserType::Host);
        host.is_invite_activated = true;
        host.first_name = Some("Ama".to_string());
        let rider = user(2, Some(1));

        let graph = InviteGraph::from_users(vec![host, rider]);
        let projected = project_graph(&resolve_connected_ids(UserId(1), 1, &graph), &graph, UserId(1));

        let root = projected.root().unwrap();
        assert_eq!(root.id, UserId(1));
        assert_eq!(root.role, "HOST");
        assert!(root.invite_activated);
        assert_eq!(root.label, "Ama\n#1");
        assert_eq!(root.depth, 0);

        let other = projected.nodes.iter().find(|n| n.id == UserId(2)).unwrap();
        assert!(!other.is_root);
        assert_eq!(other.role, "UNKNOWN");
        assert!(!other.invite_activated);
        assert_eq!(other.depth, 1);
    }

    #[test]
    fn test_label_falls_back_to_id() {
        let label = node_label(&AdminUser::new(55));
        assert_eq!(label, "User 55\n#55");
        assert!(label.contains("55"));
    }

    #[test]
    fn test_missing_root_projects_nothing() {
        let graph = InviteGraph::from_users(vec![user(1, None)]);
        let projected = project_graph(&resolve_connected_ids(UserId(2), 2, &graph), &graph, UserId(2));
        assert!(projected.is_empty());
        assert!(projected.edges.is_empty());
    }

    #[test]
    fn test_node_order_is_visit_order() {
        let graph = InviteGraph::from_users(vec![user(1, None), user(2, Some(1)), user(3, Some(1))]);
        let projected = project_graph(&resolve_connected_ids(UserId(2), 2, &graph), &graph, UserId(2));
        let order: Vec<i64> = projected.nodes.iter().map(|n| n.id.0).collect();
        assert_eq!(order, vec![2, 1, 3]);
    }
}
