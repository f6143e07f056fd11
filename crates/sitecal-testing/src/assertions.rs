//! Assertions over `--format json` output.

use anyhow::{Context, Result};
use serde_json::Value;

/// Ids of `content.jobs`, in output order.
pub fn job_ids(json: &Value) -> Result<Vec<String>> {
    let jobs = json["content"]["jobs"]
        .as_array()
        .context("Expected 'content.jobs' array in JSON")?;

    jobs.iter()
        .enumerate()
        .map(|(i, job)| {
            job["id"]
                .as_str()
                .map(String::from)
                .with_context(|| format!("Job {} missing id", i))
        })
        .collect()
}

pub fn assert_job_ids(json: &Value, expected: &[&str]) -> Result<()> {
    let ids = job_ids(json)?;
    if ids != expected {
        anyhow::bail!("Expected jobs {:?}, got {:?}", expected, ids);
    }
    Ok(())
}

/// The calendar day cell for `day` from `calendar --format json` output.
pub fn day_cell(json: &Value, day: u32) -> Result<&Value> {
    let cells = json["content"]["cells"]
        .as_array()
        .context("Expected 'content.cells' array in JSON")?;
    let suffix = format!("-{:02}", day);

    cells
        .iter()
        .find(|cell| {
            cell["kind"] == "day" && cell["date"].as_str().is_some_and(|d| d.ends_with(&suffix))
        })
        .with_context(|| format!("No cell for day {}", day))
}

/// Site names of the entries drawn in one calendar cell.
pub fn cell_sites(cell: &Value) -> Result<Vec<String>> {
    let entries = cell["entries"]
        .as_array()
        .context("Expected 'entries' array in cell")?;
    Ok(entries
        .iter()
        .filter_map(|e| e["site_name"].as_str().map(String::from))
        .collect())
}
