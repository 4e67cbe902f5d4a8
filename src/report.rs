//! Text and JSON rendering of simulation output.

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::policy::PolicyKind;
use crate::simulation::{ComparisonRow, SimulationResult};

/// Summary line shown after a run
pub fn render_summary(result: &SimulationResult) -> String {
    format!("Total Page Faults: {}", result.fault_count)
}

/// Step-by-step table of frame contents followed by the summary.
///
/// Columns: step, referenced page, fault marker, evicted page, then one
/// column per occupied frame ordered from next victim to most recent admission.
pub fn render_table(result: &SimulationResult) -> String {
    // Frames that never hold a page get no column
    let columns = result.snapshots.iter().map(|s| s.len()).max().unwrap_or(0);
    let cell_width = result
        .snapshots
        .iter()
        .flat_map(|s| s.pages().iter())
        .chain(result.events.iter().map(|e| &e.page))
        .map(|page| page.to_string().len())
        .max()
        .unwrap_or(1)
        .max(4);
    let step_width = result.len().to_string().len().max(4);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} page replacement with {} frames",
        result.policy, result.frames
    );

    let _ = write!(
        out,
        "| {:>sw$} | {:>cw$} | F | {:>cw$} |",
        "step",
        "page",
        "out",
        sw = step_width,
        cw = cell_width
    );
    for i in 0..columns {
        let _ = write!(out, " {:>cw$} |", format!("f{}", i), cw = cell_width);
    }
    out.push('\n');

    let row_width = (step_width + 3) + 2 * (cell_width + 3) + 4 + columns * (cell_width + 3);
    let _ = writeln!(out, "+{}", "-".repeat(row_width));

    for (step, (event, snapshot)) in result.events.iter().zip(&result.snapshots).enumerate() {
        let evicted = event.evicted.map(|p| p.to_string()).unwrap_or_default();
        let _ = write!(
            out,
            "| {:>sw$} | {:>cw$} | {} | {:>cw$} |",
            step + 1,
            event.page,
            if event.faulted { 'F' } else { ' ' },
            evicted,
            sw = step_width,
            cw = cell_width
        );
        for i in 0..columns {
            let cell = snapshot.pages().get(i).map(|p| p.to_string()).unwrap_or_default();
            let _ = write!(out, " {:>cw$} |", cell, cw = cell_width);
        }
        out.push('\n');
    }

    let _ = writeln!(
        out,
        "{} (hits: {}, fault ratio: {:.2})",
        render_summary(result),
        result.hit_count(),
        result.fault_ratio()
    );
    out
}

pub fn render_json(result: &SimulationResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

/// Fault counts per frame count, one column per policy
pub fn render_comparison(rows: &[ComparisonRow]) -> String {
    let mut by_frames: BTreeMap<usize, BTreeMap<PolicyKind, usize>> = BTreeMap::new();
    let mut policies: Vec<PolicyKind> = Vec::new();
    for row in rows {
        if !policies.contains(&row.policy) {
            policies.push(row.policy);
        }
        by_frames.entry(row.frames).or_default().insert(row.policy, row.faults);
    }

    let mut out = String::new();
    let _ = write!(out, "| {:>6} |", "frames");
    for policy in &policies {
        let _ = write!(out, " {:>6} |", policy.name());
    }
    out.push('\n');
    let _ = writeln!(out, "+{}", "-".repeat(9 + 9 * policies.len()));

    for (frames, faults) in &by_frames {
        let _ = write!(out, "| {:>6} |", frames);
        for policy in &policies {
            let cell = faults.get(policy).map(|f| f.to_string()).unwrap_or_default();
            let _ = write!(out, " {:>6} |", cell);
        }
        out.push('\n');
    }
    out
}
