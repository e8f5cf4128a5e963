//! `flowscope inspect` command implementation.

use colored::Colorize;
use flowscope::domain::{NodeId, Scenario, WorkflowEdge};
use flowscope::error::Error;
use flowscope::graph::EdgeIndex;
use flowscope::scenario::select_scenario;

use super::display::{endpoint_title, status_badge};

/// Run the inspect command.
pub fn run(scenarios: &[Scenario], scenario_id: Option<&str>, node_id: &str) -> Result<(), Error> {
    let scenario = select_scenario(scenarios, scenario_id)?;
    let id = NodeId::new(node_id);
    let node = scenario
        .node(&id)
        .ok_or_else(|| Error::NodeNotFound(node_id.to_string()))?;

    println!("{} {}", node.title.cyan().bold(), format!("({})", node.id).dimmed());
    if !node.subtitle.is_empty() {
        println!("{}", node.subtitle.dimmed());
    }
    println!();
    println!("  {:<10} {}", "status:".dimmed(), status_badge(node.status));
    println!("  {:<10} {}", "owner:".dimmed(), node.owner);
    println!("  {:<10} {}", "team:".dimmed(), node.team);
    println!("  {:<10} {}", "depth:".dimmed(), node.depth);
    println!("  {:<10} {}", "eta:".dimmed(), node.eta);

    let index = EdgeIndex::build(&scenario.edges);

    println!();
    print_edge_list(
        scenario,
        "Incoming",
        index.incoming(&id),
        |edge| &edge.source,
    );
    println!();
    print_edge_list(
        scenario,
        "Outgoing",
        index.outgoing(&id),
        |edge| &edge.target,
    );

    Ok(())
}

fn print_edge_list<'a>(
    scenario: &Scenario,
    heading: &str,
    edges: &'a [WorkflowEdge],
    endpoint: impl Fn(&'a WorkflowEdge) -> &'a NodeId,
) {
    println!("  {} ({})", heading.white().bold(), edges.len());
    if edges.is_empty() {
        println!("    {}", "none".dimmed());
        return;
    }

    for edge in edges {
        let other = endpoint(edge);
        let label = edge
            .label
            .as_ref()
            .map(|l| format!(" - {l}"))
            .unwrap_or_default();
        println!(
            "    {} {} {}{}",
            format!("[{}]", edge.kind.label()).yellow(),
            endpoint_title(scenario, other),
            format!("({other})").dimmed(),
            label.dimmed()
        );
    }
}
