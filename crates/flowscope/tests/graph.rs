//! Graph analysis behavior over the public API.

use std::collections::HashSet;

use flowscope::domain::{
    EdgeId, EdgeKind, NodeId, NodeStatus, WorkflowEdge, WorkflowNode,
};
use flowscope::graph::{
    collect_reachable, cycle_members, depth_stats, is_acyclic, Adjacency, EdgeIndex, GraphSummary,
};
use flowscope::scenario::builtin_scenarios;

fn node(id: &str, depth: u32) -> WorkflowNode {
    WorkflowNode {
        id: NodeId::new(id),
        title: id.to_uppercase(),
        subtitle: String::new(),
        owner: "ops".to_string(),
        team: "core".to_string(),
        depth,
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
fn builtin_scenarios_are_acyclic() {
    for scenario in builtin_scenarios() {
        assert!(
            is_acyclic(&scenario.nodes, &scenario.edges),
            "built-in scenario {} should be a valid DAG",
            scenario.id
        );
    }
}

#[test]
fn closing_edge_flips_dag_verdict() {
    let scenarios = builtin_scenarios();
    let scenario = &scenarios[1]; // the sparse chain
    assert!(is_acyclic(&scenario.nodes, &scenario.edges));

    let mut edges = scenario.edges.clone();
    let last = scenario.nodes.last().expect("chain has nodes").id.clone();
    let first = scenario.nodes.first().expect("chain has nodes").id.clone();
    edges.push(WorkflowEdge {
        id: EdgeId::new("back-edge"),
        source: last,
        target: first,
        kind: EdgeKind::Dependency,
        label: None,
    });

    assert!(
        !is_acyclic(&scenario.nodes, &edges),
        "closing the chain back to its head should create a cycle"
    );
}

#[test]
fn cycle_members_names_exactly_the_unresolvable_nodes() {
    // a -> b -> c -> b, with d downstream of nothing.
    let nodes = vec![node("a", 0), node("b", 1), node("c", 2), node("d", 0)];
    let edges = vec![
        edge("e1", "a", "b"),
        edge("e2", "b", "c"),
        edge("e3", "c", "b"),
    ];

    assert!(!is_acyclic(&nodes, &edges));
    assert_eq!(
        cycle_members(&nodes, &edges),
        vec![NodeId::new("b"), NodeId::new("c")]
    );
}

#[test]
fn dangling_edges_do_not_affect_topology_or_traversal() {
    let nodes = vec![node("a", 0), node("b", 1)];
    let edges = vec![
        edge("e1", "a", "b"),
        edge("e2", "ghost", "b"),
        edge("e3", "a", "phantom"),
    ];

    assert!(is_acyclic(&nodes, &edges), "dangling edges must be ignored");

    let adjacency = Adjacency::build(&nodes, edges.iter());
    let reachable = collect_reachable(&[NodeId::new("a")], adjacency.outgoing_map());
    assert_eq!(
        reachable,
        HashSet::from([NodeId::new("a"), NodeId::new("b")]),
        "traversal must never surface unknown node ids"
    );

    // The display index keeps the dangling edges verbatim.
    let index = EdgeIndex::build(&edges);
    assert_eq!(index.incoming(&NodeId::new("b")).len(), 2);
    assert_eq!(index.outgoing(&NodeId::new("a")).len(), 2);
}

#[test]
fn reachability_visits_diamond_join_once() {
    // a fans out to b and c which both feed d.
    let nodes = vec![node("a", 0), node("b", 1), node("c", 1), node("d", 2)];
    let edges = vec![
        edge("e1", "a", "b"),
        edge("e2", "a", "c"),
        edge("e3", "b", "d"),
        edge("e4", "c", "d"),
    ];

    let adjacency = Adjacency::build(&nodes, edges.iter());
    let reachable = collect_reachable(&[NodeId::new("a")], adjacency.outgoing_map());
    assert_eq!(reachable.len(), 4, "each node appears exactly once in the set");
}

#[test]
fn depth_stats_cover_every_node_exactly_once() {
    for scenario in builtin_scenarios() {
        let buckets = depth_stats(&scenario.nodes);
        let total: usize = buckets.iter().map(|b| b.count).sum();
        assert_eq!(
            total,
            scenario.nodes.len(),
            "bucket counts for {} must sum to the node count",
            scenario.id
        );

        let depths: Vec<u32> = buckets.iter().map(|b| b.depth).collect();
        let mut sorted = depths.clone();
        sorted.sort_unstable();
        assert_eq!(depths, sorted, "buckets must be ordered by depth");
    }
}

#[test]
fn summary_agrees_with_raw_scenario_data() {
    for scenario in builtin_scenarios() {
        let summary = GraphSummary::for_scenario(&scenario);
        assert_eq!(summary.node_count, scenario.nodes.len());
        assert_eq!(summary.edge_count, scenario.edges.len());
        assert!(summary.acyclic);
        assert!(summary.root_count >= 1, "a DAG with nodes has a root");

        let blocked = scenario
            .nodes
            .iter()
            .filter(|n| n.status == NodeStatus::Blocked)
            .count();
        assert_eq!(summary.blocked_count, blocked);
    }
}

#[test]
fn roots_follow_the_edge_set_they_were_built_from() {
    let nodes = vec![node("a", 0), node("b", 1)];
    let mut advisory = edge("e1", "a", "b");
    advisory.kind = EdgeKind::Advisory;
    let edges = vec![advisory];

    let full = Adjacency::build(&nodes, edges.iter());
    assert_eq!(full.roots(&nodes), vec![NodeId::new("a")]);

    let without_advisory = Adjacency::build(
        &nodes,
        edges.iter().filter(|e| e.kind != EdgeKind::Advisory),
    );
    assert_eq!(
        without_advisory.roots(&nodes),
        vec![NodeId::new("a"), NodeId::new("b")],
        "dropping the only incoming edge promotes b to a root"
    );
}
