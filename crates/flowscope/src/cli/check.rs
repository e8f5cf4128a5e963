//! `flowscope check` command implementation.

use colored::Colorize;
use flowscope::domain::Scenario;
use flowscope::graph::{cycle_members, is_acyclic};
use flowscope::scenario::select_scenario;

/// Run the check command.
pub fn run(scenarios: &[Scenario], scenario_id: Option<&str>) -> Result<(), flowscope::error::Error> {
    let scenario = select_scenario(scenarios, scenario_id)?;

    println!(
        "Checking {} ({} nodes, {} edges)",
        scenario.name.cyan().bold(),
        scenario.nodes.len(),
        scenario.edges.len()
    );
    println!();

    if is_acyclic(&scenario.nodes, &scenario.edges) {
        println!("  {} Valid DAG", "✓".green().bold());
        return Ok(());
    }

    println!("  {} Cycle detected", "✗".red().bold());
    println!();
    println!("  {}:", "Unresolvable nodes".white().bold());
    for id in cycle_members(&scenario.nodes, &scenario.edges) {
        let title = scenario
            .node(&id)
            .map_or_else(|| id.to_string(), |node| node.title.clone());
        println!("    {} {}", id.as_str().red(), title.dimmed());
    }

    Ok(())
}
