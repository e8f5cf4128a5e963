//! Reachability traversal over neighbor maps.

use crate::domain::NodeId;
use std::collections::{HashMap, HashSet, VecDeque};

/// Collect every node id transitively reachable from `start_ids`.
///
/// Breadth-first over the given neighbor map (pass an outgoing map for
/// forward reachability, an incoming map for backward). Each node is visited
/// exactly once, so diamond-shaped structures contribute a single entry and
/// cyclic input terminates. The start ids are always part of the result,
/// even when they have no neighbors or are absent from the map.
#[must_use]
pub fn collect_reachable(
    start_ids: &[NodeId],
    neighbors: &HashMap<NodeId, Vec<NodeId>>,
) -> HashSet<NodeId> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut queue: VecDeque<NodeId> = start_ids.iter().cloned().collect();

    while let Some(current) = queue.pop_front() {
        if !visited.insert(current.clone()) {
            continue;
        }
        if let Some(next) = neighbors.get(&current) {
            for neighbor in next {
                if !visited.contains(neighbor) {
                    queue.push_back(neighbor.clone());
                }
            }
        }
    }

    visited
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, &[&str])]) -> HashMap<NodeId, Vec<NodeId>> {
        entries
            .iter()
            .map(|(id, next)| {
                (
                    NodeId::new(*id),
                    next.iter().map(|n| NodeId::new(*n)).collect(),
                )
            })
            .collect()
    }

    fn ids(raw: &[&str]) -> HashSet<NodeId> {
        raw.iter().map(|id| NodeId::new(*id)).collect()
    }

    #[test]
    fn diamond_visits_each_node_once() {
        let neighbors = map(&[
            ("a", &["b", "c"]),
            ("b", &["d"]),
            ("c", &["d"]),
            ("d", &[]),
        ]);

        let reached = collect_reachable(&[NodeId::new("a")], &neighbors);
        assert_eq!(reached, ids(&["a", "b", "c", "d"]));
    }

    #[test]
    fn start_without_neighbors_is_included() {
        let neighbors = map(&[]);
        let reached = collect_reachable(&[NodeId::new("lonely")], &neighbors);
        assert_eq!(reached, ids(&["lonely"]));
    }

    #[test]
    fn terminates_on_cycles() {
        let neighbors = map(&[("a", &["b"]), ("b", &["c"]), ("c", &["a"])]);
        let reached = collect_reachable(&[NodeId::new("a")], &neighbors);
        assert_eq!(reached, ids(&["a", "b", "c"]));
    }

    #[test]
    fn multiple_starts_merge() {
        let neighbors = map(&[("a", &["b"]), ("x", &["y"]), ("b", &[]), ("y", &[])]);
        let reached = collect_reachable(&[NodeId::new("a"), NodeId::new("x")], &neighbors);
        assert_eq!(reached, ids(&["a", "b", "x", "y"]));
    }

    #[test]
    fn empty_start_set_reaches_nothing() {
        let neighbors = map(&[("a", &["b"])]);
        assert!(collect_reachable(&[], &neighbors).is_empty());
    }
}
