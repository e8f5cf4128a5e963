//! Acyclicity checking via Kahn's algorithm.
//!
//! A well-formed workflow graph is a DAG. This module checks that property
//! without enforcing it: cyclic input yields a `false` verdict (plus the
//! residual node set for diagnostics), never a panic or an unbounded loop.

use crate::domain::{NodeId, WorkflowEdge, WorkflowNode};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::{HashMap, VecDeque};

/// Build the petgraph representation of the known-node subgraph.
///
/// Nodes carry their id as the weight. Edges whose source or target is not
/// in the node set are dangling and dropped here, so every downstream sweep
/// only ever sees valid edges.
fn build_graph(nodes: &[WorkflowNode], edges: &[WorkflowEdge]) -> DiGraph<NodeId, ()> {
    let mut graph = DiGraph::new();
    let mut node_map: HashMap<&NodeId, NodeIndex> = HashMap::with_capacity(nodes.len());

    for node in nodes {
        node_map
            .entry(&node.id)
            .or_insert_with(|| graph.add_node(node.id.clone()));
    }

    for edge in edges {
        match (node_map.get(&edge.source), node_map.get(&edge.target)) {
            (Some(&source), Some(&target)) => {
                graph.add_edge(source, target, ());
            }
            _ => {
                tracing::debug!(edge = %edge.id, "skipping dangling edge");
            }
        }
    }

    graph
}

/// Run an iterative Kahn sweep and return the unvisited (cyclic) residual.
///
/// Seeds a FIFO queue with every in-degree-0 node, then repeatedly removes a
/// node and decrements its successors' in-degrees, enqueuing each successor
/// whose in-degree reaches 0. Nodes left with a nonzero in-degree afterwards
/// participate in (or hang off) at least one directed cycle.
fn kahn_residual(graph: &DiGraph<NodeId, ()>) -> Vec<NodeIndex> {
    let mut in_degree: HashMap<NodeIndex, usize> =
        graph.node_indices().map(|idx| (idx, 0)).collect();

    for edge in graph.edge_references() {
        if let Some(degree) = in_degree.get_mut(&edge.target()) {
            *degree += 1;
        }
    }

    let mut queue: VecDeque<NodeIndex> = in_degree
        .iter()
        .filter(|&(_, &degree)| degree == 0)
        .map(|(&idx, _)| idx)
        .collect();

    let mut visited = 0usize;

    while let Some(node) = queue.pop_front() {
        visited += 1;

        for edge in graph.edges(node) {
            let target = edge.target();
            if let Some(degree) = in_degree.get_mut(&target) {
                if *degree > 0 {
                    *degree -= 1;
                }
                if *degree == 0 {
                    queue.push_back(target);
                }
            }
        }
    }

    if visited == graph.node_count() {
        return Vec::new();
    }

    in_degree
        .into_iter()
        .filter(|&(_, degree)| degree > 0)
        .map(|(idx, _)| idx)
        .collect()
}

/// Check whether the known-node subgraph is a DAG.
///
/// Edges referencing unknown node ids are ignored. An empty graph is
/// acyclic. Runs in O(|nodes| + |valid edges|) with no recursion, so depth
/// is not bounded by call-stack size.
#[must_use]
pub fn is_acyclic(nodes: &[WorkflowNode], edges: &[WorkflowEdge]) -> bool {
    let graph = build_graph(nodes, edges);
    kahn_residual(&graph).is_empty()
}

/// Ids of nodes left unresolved by the topological sweep, sorted.
///
/// Empty iff [`is_acyclic`] would return `true`. The result contains every
/// node with residual in-degree after the sweep - the cycle participants
/// plus anything only reachable through them - which is exactly the set a
/// "cycle detected" diagnostic wants to show.
#[must_use]
pub fn cycle_members(nodes: &[WorkflowNode], edges: &[WorkflowEdge]) -> Vec<NodeId> {
    let graph = build_graph(nodes, edges);
    let mut members: Vec<NodeId> = kahn_residual(&graph)
        .into_iter()
        .map(|idx| graph[idx].clone())
        .collect();
    members.sort();
    members
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EdgeId, EdgeKind, NodeStatus};

    fn node(id: &str) -> WorkflowNode {
        WorkflowNode {
            id: NodeId::new(id),
            title: id.to_uppercase(),
            subtitle: String::new(),
            owner: "ops".to_string(),
            team: "core".to_string(),
            depth: 0,
            lane: 0,
            eta: "10m".to_string(),
            status: NodeStatus::Queued,
        }
    }

    fn edge(id: &str, source: &str, target: &str) -> WorkflowEdge {
        WorkflowEdge {
            id: EdgeId::new(id),
            source: NodeId::new(source),
            target: NodeId::new(target),
            kind: EdgeKind::Dependency,
            label: None,
        }
    }

    #[test]
    fn empty_graph_is_acyclic() {
        assert!(is_acyclic(&[], &[]));
    }

    #[test]
    fn nodes_without_edges_are_acyclic() {
        let nodes = vec![node("a"), node("b"), node("c")];
        assert!(is_acyclic(&nodes, &[]));
    }

    #[test]
    fn linear_chain_is_acyclic() {
        let nodes = vec![node("a"), node("b"), node("c")];
        let edges = vec![edge("e1", "a", "b"), edge("e2", "b", "c")];
        assert!(is_acyclic(&nodes, &edges));
    }

    #[test]
    fn simple_cycle_is_detected() {
        let nodes = vec![node("a"), node("b"), node("c")];
        let edges = vec![
            edge("e1", "a", "b"),
            edge("e2", "b", "c"),
            edge("e3", "c", "a"),
        ];
        assert!(!is_acyclic(&nodes, &edges));
    }

    #[test]
    fn closing_edge_flips_the_verdict() {
        let nodes = vec![node("a"), node("b"), node("c")];
        let mut edges = vec![edge("e1", "a", "b"), edge("e2", "b", "c")];
        assert!(is_acyclic(&nodes, &edges));

        edges.push(edge("e3", "c", "a"));
        assert!(!is_acyclic(&nodes, &edges));
    }

    #[test]
    fn self_loop_is_a_cycle() {
        let nodes = vec![node("a")];
        let edges = vec![edge("e1", "a", "a")];
        assert!(!is_acyclic(&nodes, &edges));
    }

    #[test]
    fn dangling_edge_is_ignored() {
        let nodes = vec![node("a"), node("b")];
        let edges = vec![edge("e1", "a", "b"), edge("e2", "ghost", "a")];
        assert!(is_acyclic(&nodes, &edges));
    }

    #[test]
    fn dangling_edge_cannot_fake_a_cycle() {
        // b -> ghost -> a would close a loop if ghost were real.
        let nodes = vec![node("a"), node("b")];
        let edges = vec![
            edge("e1", "a", "b"),
            edge("e2", "b", "ghost"),
            edge("e3", "ghost", "a"),
        ];
        assert!(is_acyclic(&nodes, &edges));
    }

    #[test]
    fn cycle_members_lists_residual_nodes() {
        let nodes = vec![node("a"), node("b"), node("c"), node("d")];
        let edges = vec![
            edge("e1", "a", "b"),
            edge("e2", "b", "a"),
            edge("e3", "c", "d"),
        ];

        let members = cycle_members(&nodes, &edges);
        assert_eq!(members, vec![NodeId::new("a"), NodeId::new("b")]);
    }

    #[test]
    fn cycle_members_empty_for_dag() {
        let nodes = vec![node("a"), node("b")];
        let edges = vec![edge("e1", "a", "b")];
        assert!(cycle_members(&nodes, &edges).is_empty());
    }

    #[test]
    fn node_downstream_of_cycle_counts_as_residual() {
        // d is only reachable through the a-b cycle, so the sweep never
        // resolves it either.
        let nodes = vec![node("a"), node("b"), node("d")];
        let edges = vec![
            edge("e1", "a", "b"),
            edge("e2", "b", "a"),
            edge("e3", "b", "d"),
        ];

        let members = cycle_members(&nodes, &edges);
        assert_eq!(
            members,
            vec![NodeId::new("a"), NodeId::new("b"), NodeId::new("d")]
        );
    }
}
