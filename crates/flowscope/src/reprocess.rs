//! Reprocess-scope computation.
//!
//! A reprocess scope previews which nodes a replay action would touch,
//! given a selected node and a traversal mode. The computation is inert:
//! it derives an id set and summary figures, it never mutates workflow
//! state or triggers any orchestration.

use crate::domain::{EdgeKind, NodeId, WorkflowEdge, WorkflowNode};
use crate::graph::{collect_reachable, Adjacency};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Where a reprocess run should start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ReprocessMode {
    /// Retry the selected node without cascading downstream.
    #[value(name = "node_only")]
    NodeOnly,

    /// Reprocess from the selected node through all downstream dependencies.
    #[default]
    #[value(name = "from_node")]
    FromNode,

    /// Restart the branch from the root checkpoints feeding the selection.
    #[value(name = "from_roots")]
    FromRoots,
}

/// Caller-chosen knobs for scope computation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScopeOptions {
    /// Traversal mode
    pub mode: ReprocessMode,

    /// Whether advisory edges participate in the active edge set used for
    /// both root discovery and forward propagation. Excluding them shrinks
    /// the scope, or leaves it equal.
    pub include_advisory: bool,
}

/// Result of a scope computation.
#[derive(Debug, Clone)]
pub struct ReprocessScope {
    /// Seed nodes the replay would start from
    pub start_ids: Vec<NodeId>,

    /// Every node the replay would touch (start nodes included)
    pub impacted: HashSet<NodeId>,

    /// True when `from_roots` found no root ancestor and collapsed to the
    /// selected node alone
    pub fell_back_to_selection: bool,
}

/// Compute the reprocess scope for `selected` under the given options.
///
/// Roots are discovered against the *active* (possibly advisory-filtered)
/// edge set, not the full one, so toggling advisory inclusion can change
/// which nodes qualify as roots. That coupling is intentional: the preview
/// is a what-if over the edges that would actually propagate the replay.
#[must_use]
pub fn compute_scope(
    selected: &NodeId,
    nodes: &[WorkflowNode],
    edges: &[WorkflowEdge],
    options: ScopeOptions,
) -> ReprocessScope {
    let adjacency = Adjacency::build(nodes, active_edges(edges, options.include_advisory));

    match options.mode {
        ReprocessMode::NodeOnly => single_node_scope(selected, false),
        ReprocessMode::FromNode => {
            let start_ids = vec![selected.clone()];
            let impacted = collect_reachable(&start_ids, adjacency.outgoing_map());
            ReprocessScope {
                start_ids,
                impacted,
                fell_back_to_selection: false,
            }
        }
        ReprocessMode::FromRoots => {
            let ancestors = collect_reachable(
                std::slice::from_ref(selected),
                adjacency.incoming_map(),
            );
            let root_ancestors: Vec<NodeId> = adjacency
                .roots(nodes)
                .into_iter()
                .filter(|root| ancestors.contains(root))
                .collect();

            if root_ancestors.is_empty() {
                tracing::debug!(node = %selected, "no root ancestors; falling back to selection");
                return single_node_scope(selected, true);
            }

            let impacted = collect_reachable(&root_ancestors, adjacency.outgoing_map());
            ReprocessScope {
                start_ids: root_ancestors,
                impacted,
                fell_back_to_selection: false,
            }
        }
    }
}

fn single_node_scope(selected: &NodeId, fell_back: bool) -> ReprocessScope {
    ReprocessScope {
        start_ids: vec![selected.clone()],
        impacted: HashSet::from([selected.clone()]),
        fell_back_to_selection: fell_back,
    }
}

fn active_edges(
    edges: &[WorkflowEdge],
    include_advisory: bool,
) -> impl Iterator<Item = &WorkflowEdge> {
    edges
        .iter()
        .filter(move |edge| include_advisory || edge.kind != EdgeKind::Advisory)
}

/// Display-ready summary of a computed scope.
#[derive(Debug, Clone)]
pub struct ScopePreview {
    /// Impacted nodes sorted by depth, then lane, then title
    pub impacted_nodes: Vec<WorkflowNode>,

    /// How many impacted nodes are currently blocked
    pub blocked_count: usize,

    /// Min and max depth across impacted nodes, if any
    pub depth_span: Option<(u32, u32)>,

    /// Total estimated replay minutes, summed from node `eta` strings
    pub estimated_minutes: u64,
}

impl ScopePreview {
    /// Build the preview for a scope over the scenario's node set.
    #[must_use]
    pub fn build(scope: &ReprocessScope, nodes: &[WorkflowNode]) -> Self {
        let mut impacted_nodes: Vec<WorkflowNode> = nodes
            .iter()
            .filter(|node| scope.impacted.contains(&node.id))
            .cloned()
            .collect();
        impacted_nodes.sort_by(|a, b| {
            a.depth
                .cmp(&b.depth)
                .then_with(|| a.lane.cmp(&b.lane))
                .then_with(|| a.title.cmp(&b.title))
        });

        let blocked_count = impacted_nodes
            .iter()
            .filter(|node| node.status == crate::domain::NodeStatus::Blocked)
            .count();

        let depth_span = match (
            impacted_nodes.iter().map(|n| n.depth).min(),
            impacted_nodes.iter().map(|n| n.depth).max(),
        ) {
            (Some(min), Some(max)) => Some((min, max)),
            _ => None,
        };

        let estimated_minutes = impacted_nodes
            .iter()
            .map(|node| parse_eta_minutes(&node.eta))
            .sum();

        Self {
            impacted_nodes,
            blocked_count,
            depth_span,
            estimated_minutes,
        }
    }
}

/// Parse an eta string of the form `"<n>m"` or `"<n>h"` into minutes.
///
/// Tolerates surrounding whitespace, whitespace between the number and the
/// unit, and uppercase units. Anything else parses as 0 - an eta is display
/// payload, not a contract worth failing over.
#[must_use]
pub fn parse_eta_minutes(eta: &str) -> u64 {
    let normalized = eta.trim().to_ascii_lowercase();

    let factor = match normalized.as_bytes().last() {
        Some(b'm') => 1,
        Some(b'h') => 60,
        _ => return 0,
    };

    let digits = normalized[..normalized.len() - 1].trim_end();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return 0;
    }

    digits.parse::<u64>().map_or(0, |value| value * factor)
}
