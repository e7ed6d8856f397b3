use serde::Serialize;

use crate::input::SampleTable;
use crate::model::{CnvThresholds, ResultRow, SweepGrid, SweepPoint};
use crate::pipeline::stage1_partition::drop_prefixed;
use crate::pipeline::stage2_normalize::{normalize_group, normalize_reference};
use crate::pipeline::stage3_reshape::melt;
use crate::pipeline::stage4_variability::sweep_cutoffs;
use crate::pipeline::stage6_runs::call_contiguous;
use crate::pipeline::{PROBE_PREFIX, PipelineError, REFERENCE_PREFIX};

#[derive(Debug, Clone)]
pub struct Stage7Params {
    pub cv_cutoff: f64,
    pub thresholds: CnvThresholds,
    pub grid: SweepGrid,
    pub reference_sweep: bool,
}

impl Stage7Params {
    pub fn new(cv_cutoff: f64) -> Self {
        Self {
            cv_cutoff,
            thresholds: CnvThresholds::default_v1(),
            grid: SweepGrid::default_v1(),
            reference_sweep: false,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupReport {
    pub group: String,
    pub n_samples: usize,
    pub probe_sweep: Vec<SweepPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_sweep: Option<Vec<SweepPoint>>,
    pub n_reported: usize,
}

#[derive(Debug, Clone)]
pub struct Stage7Output {
    pub rows: Vec<ResultRow>,
    pub groups: Vec<GroupReport>,
}

/// Runs every group in first-occurrence order and concatenates the surviving
/// probes once at the end.
pub fn run_stage7(table: &SampleTable, params: &Stage7Params) -> Result<Stage7Output, PipelineError> {
    let probe_keys = table.columns_with_prefix(&format!("{PROBE_PREFIX}_"));
    if probe_keys.is_empty() {
        return Err(PipelineError::NoProbeColumns(PROBE_PREFIX.to_string()));
    }
    let reference_keys = table.columns_with_prefix(&format!("{REFERENCE_PREFIX}_"));

    let mut batches: Vec<Vec<ResultRow>> = Vec::new();
    let mut groups = Vec::new();
    for group in table.distinct_groups() {
        let (rows, report) = run_group(table, &group, &probe_keys, &reference_keys, params)?;
        batches.push(rows);
        groups.push(report);
    }

    Ok(Stage7Output {
        rows: batches.concat(),
        groups,
    })
}

fn run_group(
    table: &SampleTable,
    group: &str,
    probe_keys: &[String],
    reference_keys: &[String],
    params: &Stage7Params,
) -> Result<(Vec<ResultRow>, GroupReport), PipelineError> {
    let probes = drop_prefixed(table, REFERENCE_PREFIX);
    let reference = drop_prefixed(table, PROBE_PREFIX);

    let normalized = normalize_group(&probes, &reference, group)?;
    let observations = melt(&normalized, probe_keys)?;
    let calls = call_contiguous(&observations, params.cv_cutoff, &params.thresholds);

    let reference_sweep = if params.reference_sweep {
        let self_normalized = normalize_reference(&reference, group)?;
        let reference_obs = melt(&self_normalized, reference_keys)?;
        Some(sweep_cutoffs(&reference_obs, &params.grid))
    } else {
        None
    };

    let rows: Vec<ResultRow> = calls
        .iter()
        .map(|c| ResultRow::from_call(c, group))
        .collect();

    tracing::debug!(
        group,
        samples = normalized.rows.len(),
        reported = rows.len(),
        "group processed"
    );

    let report = GroupReport {
        group: group.to_string(),
        n_samples: normalized.rows.len(),
        probe_sweep: sweep_cutoffs(&observations, &params.grid),
        reference_sweep,
        n_reported: rows.len(),
    };
    Ok((rows, report))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage7_groups.rs"]
mod tests;
