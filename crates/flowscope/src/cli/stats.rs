//! `flowscope stats` command implementation.

use colored::Colorize;
use flowscope::domain::Scenario;
use flowscope::graph::{depth_stats, GraphSummary};
use flowscope::scenario::select_scenario;

use super::display::terminal_width;

/// Run the stats command.
pub fn run(scenarios: &[Scenario], scenario_id: Option<&str>) -> Result<(), flowscope::error::Error> {
    let scenario = select_scenario(scenarios, scenario_id)?;
    let summary = GraphSummary::for_scenario(scenario);

    println!("{}", scenario.name.cyan().bold());
    println!("{}", scenario.objective.dimmed());
    println!();

    println!(
        "  {:<18} {}",
        "Nodes:".white().bold(),
        summary.node_count
    );
    println!(
        "  {:<18} {}",
        "Edges:".white().bold(),
        summary.edge_count
    );
    println!(
        "  {:<18} {}",
        "Teams:".white().bold(),
        summary.team_count
    );
    println!(
        "  {:<18} {}",
        "Roots:".white().bold(),
        summary.root_count
    );
    println!(
        "  {:<18} {}",
        "Blocked:".white().bold(),
        if summary.blocked_count > 0 {
            summary.blocked_count.to_string().red().to_string()
        } else {
            summary.blocked_count.to_string()
        }
    );
    println!(
        "  {:<18} {}",
        "DAG:".white().bold(),
        if summary.acyclic {
            "valid".green()
        } else {
            "cycle detected".red()
        }
    );

    let buckets = depth_stats(&scenario.nodes);
    if buckets.is_empty() {
        return Ok(());
    }

    println!();
    println!("  {}", "Depth distribution".white().bold());

    let max_count = buckets.iter().map(|b| b.count).max().unwrap_or(1).max(1);
    // Leave room for the depth label, the count, and margins.
    let bar_width = terminal_width().saturating_sub(20).clamp(10, 50);

    for bucket in &buckets {
        let filled = (bucket.count * bar_width).div_ceil(max_count);
        let bar = "█".repeat(filled);
        println!(
            "  {:>5}  {} {}",
            format!("d{}", bucket.depth).dimmed(),
            bar.cyan(),
            bucket.count
        );
    }

    Ok(())
}
