//! Scenario data: built-in synthetic workflows and JSON pack loading.
//!
//! Scenarios are the caller-held side of the analysis contract: they own the
//! canonical node/edge data, the library only derives views from it. The
//! built-ins model financial back-office workflows at three graph densities;
//! external packs are plain JSON arrays of [`Scenario`].

use crate::domain::{
    Density, EdgeId, EdgeKind, NodeId, NodeStatus, Scenario, WorkflowEdge, WorkflowNode,
};
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

#[allow(clippy::too_many_arguments)]
fn node(
    id: &str,
    title: &str,
    subtitle: &str,
    owner: &str,
    team: &str,
    depth: u32,
    lane: i32,
    eta: &str,
    status: NodeStatus,
) -> WorkflowNode {
    WorkflowNode {
        id: NodeId::new(id),
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        owner: owner.to_string(),
        team: team.to_string(),
        depth,
        lane,
        eta: eta.to_string(),
        status,
    }
}

fn edge(id: &str, source: &str, target: &str, kind: EdgeKind) -> WorkflowEdge {
    WorkflowEdge {
        id: EdgeId::new(id),
        source: NodeId::new(source),
        target: NodeId::new(target),
        kind,
        label: None,
    }
}

fn settlement_cascade() -> Scenario {
    use EdgeKind::{Advisory, Blocking, Dependency};
    use NodeStatus::{AtRisk, Blocked, Done, InProgress, Queued};

    Scenario {
        id: "settlement-cascade".to_string(),
        name: "Settlement Cascade".to_string(),
        description: "End-of-day settlement pipeline with heavy control gates at every \
                      depth: capture, enrichment, risk, netting, and posting all fan \
                      into a batched settlement run."
            .to_string(),
        objective: "Settle the day's trades before the cutoff".to_string(),
        density: Density::High,
        nodes: vec![
            node("trade-capture", "Trade Capture", "Ingest raw fills from venues", "maya", "ingest", 0, 0, "15m", Done),
            node("ref-data", "Reference Data Sync", "Refresh instrument master", "owen", "ingest", 0, 1, "20m", Done),
            node("fx-rates", "FX Rate Snapshot", "Lock EOD conversion rates", "priya", "market-data", 0, 2, "10m", Done),
            node("enrich", "Trade Enrichment", "Attach accounts and books", "maya", "ingest", 1, 0, "25m", Done),
            node("risk-screen", "Risk Screening", "Limit and sanction checks", "leo", "risk", 1, 1, "30m", InProgress),
            node("netting", "Position Netting", "Collapse offsetting positions", "sara", "settlement", 2, 0, "45m", InProgress),
            node("margin-calc", "Margin Calculation", "Compute variation margin", "leo", "risk", 2, 1, "40m", AtRisk),
            node("compliance-hold", "Compliance Hold Review", "Manual review of flagged trades", "iris", "compliance", 2, 2, "1h", Blocked),
            node("settle-batch", "Settlement Batching", "Group instructions per custodian", "sara", "settlement", 3, 0, "35m", Queued),
            node("ledger-post", "Ledger Posting", "Post journal entries", "tomas", "ledger", 3, 1, "30m", Queued),
            node("confirm", "Counterparty Confirmations", "Dispatch SWIFT confirmations", "sara", "settlement", 4, 0, "20m", Queued),
            node("eod-report", "EOD Reporting", "Regulatory and desk reports", "tomas", "reporting", 4, 1, "25m", Queued),
        ],
        edges: vec![
            edge("sc-e1", "trade-capture", "enrich", Blocking),
            edge("sc-e2", "ref-data", "enrich", Dependency),
            edge("sc-e3", "trade-capture", "risk-screen", Blocking),
            edge("sc-e4", "fx-rates", "risk-screen", Dependency),
            edge("sc-e5", "enrich", "netting", Blocking),
            edge("sc-e6", "risk-screen", "netting", Dependency),
            edge("sc-e7", "risk-screen", "margin-calc", Blocking),
            edge("sc-e8", "fx-rates", "margin-calc", Dependency),
            edge("sc-e9", "risk-screen", "compliance-hold", Blocking),
            edge("sc-e10", "netting", "settle-batch", Blocking),
            edge("sc-e11", "margin-calc", "settle-batch", Dependency),
            edge("sc-e12", "compliance-hold", "settle-batch", Advisory),
            edge("sc-e13", "netting", "ledger-post", Blocking),
            edge("sc-e14", "settle-batch", "confirm", Blocking),
            edge("sc-e15", "ledger-post", "eod-report", Blocking),
            edge("sc-e16", "settle-batch", "eod-report", Dependency),
        ],
    }
}

fn credit_approval() -> Scenario {
    use EdgeKind::{Advisory, Blocking};
    use NodeStatus::{Done, InProgress, Queued};

    Scenario {
        id: "credit-approval".to_string(),
        name: "Credit Approval".to_string(),
        description: "A sparse approval chain: each stage gates the next, with one \
                      advisory shortcut feeding the funding desk an early signal."
            .to_string(),
        objective: "Approve and fund a commercial credit line".to_string(),
        density: Density::Low,
        nodes: vec![
            node("intake", "Application Intake", "Validate submitted documents", "nora", "onboarding", 0, 0, "30m", Done),
            node("kyc", "KYC Check", "Identity and beneficial ownership", "nora", "onboarding", 1, 0, "2h", Done),
            node("score", "Credit Scoring", "Bureau pull and internal model", "felix", "credit", 2, 0, "45m", InProgress),
            node("underwrite", "Underwriting", "Covenant and collateral review", "felix", "credit", 3, 0, "3h", Queued),
            node("approve", "Final Approval", "Committee sign-off", "dana", "credit", 4, 0, "1h", Queued),
            node("disburse", "Disbursement", "Release funds to account", "ravi", "treasury", 5, 0, "20m", Queued),
        ],
        edges: vec![
            edge("ca-e1", "intake", "kyc", Blocking),
            edge("ca-e2", "kyc", "score", Blocking),
            edge("ca-e3", "score", "underwrite", Blocking),
            edge("ca-e4", "underwrite", "approve", Blocking),
            edge("ca-e5", "approve", "disburse", Blocking),
            edge("ca-e6", "score", "disburse", Advisory),
        ],
    }
}

fn parallel_recon() -> Scenario {
    use EdgeKind::{Advisory, Blocking, Dependency};
    use NodeStatus::{AtRisk, Done, InProgress, Queued};

    Scenario {
        id: "parallel-recon".to_string(),
        name: "Parallel Reconciliation".to_string(),
        description: "Two reconciliation trees - cash and securities - run in parallel \
                      and meet at break triage, with a cross-tree advisory link from \
                      securities matching into cash break investigation."
            .to_string(),
        objective: "Clear all reconciliation breaks before sign-off".to_string(),
        density: Density::Mixed,
        nodes: vec![
            node("cash-feed", "Cash Feed Load", "Bank statement ingestion", "amara", "cash-ops", 0, 0, "15m", Done),
            node("sec-feed", "Securities Feed Load", "Custodian position files", "jon", "sec-ops", 0, 1, "15m", Done),
            node("gl-snapshot", "GL Snapshot", "Freeze general ledger balances", "tomas", "ledger", 0, 2, "10m", Done),
            node("cash-match", "Cash Matching", "Auto-match statement lines", "amara", "cash-ops", 1, 0, "40m", InProgress),
            node("sec-match", "Securities Matching", "Position and trade matching", "jon", "sec-ops", 1, 1, "50m", AtRisk),
            node("cash-breaks", "Cash Break Investigation", "Research unmatched items", "amara", "cash-ops", 2, 0, "1h", Queued),
            node("sec-breaks", "Securities Break Investigation", "Research position breaks", "jon", "sec-ops", 2, 1, "1h", Queued),
            node("triage", "Break Triage", "Prioritize and assign breaks", "dana", "recon", 3, 0, "45m", Queued),
            node("sign-off", "Reconciliation Sign-off", "Daily attestation", "dana", "recon", 4, 0, "15m", Queued),
        ],
        edges: vec![
            edge("pr-e1", "cash-feed", "cash-match", Blocking),
            edge("pr-e2", "gl-snapshot", "cash-match", Dependency),
            edge("pr-e3", "sec-feed", "sec-match", Blocking),
            edge("pr-e4", "gl-snapshot", "sec-match", Dependency),
            edge("pr-e5", "cash-match", "cash-breaks", Blocking),
            edge("pr-e6", "sec-match", "sec-breaks", Blocking),
            edge("pr-e7", "sec-match", "cash-breaks", Advisory),
            edge("pr-e8", "cash-breaks", "triage", Blocking),
            edge("pr-e9", "sec-breaks", "triage", Blocking),
            edge("pr-e10", "triage", "sign-off", Blocking),
        ],
    }
}

/// The built-in scenario set, one per graph density.
#[must_use]
pub fn builtin_scenarios() -> Vec<Scenario> {
    vec![settlement_cascade(), credit_approval(), parallel_recon()]
}

/// Load a scenario pack from a JSON file (an array of scenarios).
///
/// # Errors
///
/// Returns `Error::Io` if the file cannot be read and `Error::Json` if it
/// does not parse as a scenario array.
pub fn load_scenarios(path: &Path) -> Result<Vec<Scenario>> {
    let raw = fs::read_to_string(path)?;
    let scenarios: Vec<Scenario> = serde_json::from_str(&raw)?;
    tracing::debug!(
        path = %path.display(),
        count = scenarios.len(),
        "loaded scenario pack"
    );
    Ok(scenarios)
}

/// Select a scenario by id, or the first one when no id is given.
///
/// # Errors
///
/// Returns `Error::ScenarioNotFound` for an unknown id or an empty set.
pub fn select_scenario<'a>(scenarios: &'a [Scenario], id: Option<&str>) -> Result<&'a Scenario> {
    match id {
        Some(wanted) => scenarios
            .iter()
            .find(|scenario| scenario.id == wanted)
            .ok_or_else(|| Error::ScenarioNotFound(wanted.to_string())),
        None => scenarios
            .first()
            .ok_or_else(|| Error::ScenarioNotFound("(empty scenario set)".to_string())),
    }
}
