//! Depth statistics and scenario summary metrics.

use crate::domain::{Scenario, WorkflowNode};
use crate::graph::{is_acyclic, Adjacency};
use std::collections::{BTreeMap, HashSet};

/// Node count for one depth layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthBucket {
    /// The depth value
    pub depth: u32,

    /// Number of nodes at that depth
    pub count: usize,
}

/// Group nodes by their `depth` field into counts, ascending by depth.
///
/// Depth values need not be contiguous or zero-based; each distinct value
/// present yields exactly one bucket.
#[must_use]
pub fn depth_stats(nodes: &[WorkflowNode]) -> Vec<DepthBucket> {
    let mut buckets: BTreeMap<u32, usize> = BTreeMap::new();
    for node in nodes {
        *buckets.entry(node.depth).or_insert(0) += 1;
    }

    buckets
        .into_iter()
        .map(|(depth, count)| DepthBucket { depth, count })
        .collect()
}

/// Headline metrics for a scenario's graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphSummary {
    /// Total nodes
    pub node_count: usize,

    /// Total edges (dangling included)
    pub edge_count: usize,

    /// Distinct teams across nodes
    pub team_count: usize,

    /// Nodes with no incoming edges in the full edge set
    pub root_count: usize,

    /// Nodes currently in `blocked` status
    pub blocked_count: usize,

    /// DAG validity of the known-node subgraph
    pub acyclic: bool,
}

impl GraphSummary {
    /// Compute the summary for one scenario.
    #[must_use]
    pub fn for_scenario(scenario: &Scenario) -> Self {
        let adjacency = Adjacency::build(&scenario.nodes, scenario.edges.iter());
        let teams: HashSet<&str> = scenario
            .nodes
            .iter()
            .map(|node| node.team.as_str())
            .collect();

        Self {
            node_count: scenario.nodes.len(),
            edge_count: scenario.edges.len(),
            team_count: teams.len(),
            root_count: adjacency.roots(&scenario.nodes).len(),
            blocked_count: scenario
                .nodes
                .iter()
                .filter(|node| node.status == crate::domain::NodeStatus::Blocked)
                .count(),
            acyclic: is_acyclic(&scenario.nodes, &scenario.edges),
        }
    }
}
