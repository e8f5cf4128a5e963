//! `flowscope scope` command implementation.

use colored::Colorize;
use flowscope::domain::{NodeId, Scenario};
use flowscope::error::Error;
use flowscope::reprocess::{compute_scope, ReprocessMode, ScopeOptions, ScopePreview};
use flowscope::scenario::select_scenario;

use super::display::{endpoint_title, format_depth_span, status_badge};

/// Run the scope command.
pub fn run(
    scenarios: &[Scenario],
    scenario_id: Option<&str>,
    node_id: &str,
    mode: ReprocessMode,
    include_advisory: bool,
) -> Result<(), Error> {
    let scenario = select_scenario(scenarios, scenario_id)?;
    let id = NodeId::new(node_id);
    if scenario.node(&id).is_none() {
        return Err(Error::NodeNotFound(node_id.to_string()));
    }

    let scope = compute_scope(
        &id,
        &scenario.nodes,
        &scenario.edges,
        ScopeOptions {
            mode,
            include_advisory,
        },
    );
    let preview = ScopePreview::build(&scope, &scenario.nodes);

    println!(
        "Reprocess preview for {} in {}",
        endpoint_title(scenario, &id).cyan().bold(),
        scenario.name.white().bold()
    );
    let mode_label = match mode {
        ReprocessMode::NodeOnly => "node only",
        ReprocessMode::FromNode => "from node",
        ReprocessMode::FromRoots => "from roots",
    };
    println!("  {:<18} {}", "mode:".dimmed(), mode_label);
    println!(
        "  {:<18} {}",
        "advisory edges:".dimmed(),
        if include_advisory { "included" } else { "excluded" }
    );
    println!();

    if scope.fell_back_to_selection {
        println!(
            "  {} no root checkpoint feeds this node; scope collapsed to the selection",
            "note:".yellow().bold()
        );
        println!();
    }

    let starts: Vec<String> = scope
        .start_ids
        .iter()
        .map(|start| endpoint_title(scenario, start))
        .collect();
    println!(
        "  {:<18} {}",
        "starts from:".white().bold(),
        starts.join(", ")
    );
    println!(
        "  {:<18} {}",
        "impacted nodes:".white().bold(),
        preview.impacted_nodes.len()
    );
    println!(
        "  {:<18} {}",
        "blocked:".white().bold(),
        if preview.blocked_count > 0 {
            preview.blocked_count.to_string().red().to_string()
        } else {
            preview.blocked_count.to_string()
        }
    );
    println!(
        "  {:<18} {}",
        "depth span:".white().bold(),
        format_depth_span(preview.depth_span)
    );
    println!(
        "  {:<18} {}m",
        "estimated time:".white().bold(),
        preview.estimated_minutes
    );

    if preview.impacted_nodes.is_empty() {
        return Ok(());
    }

    println!();
    println!("  {}", "Impacted".white().bold());
    for node in &preview.impacted_nodes {
        println!(
            "    {} {} {} {}",
            format!("d{}", node.depth).dimmed(),
            node.title,
            format!("({})", node.id).dimmed(),
            status_badge(node.status)
        );
    }

    Ok(())
}
