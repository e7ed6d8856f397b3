use crate::input::SampleTable;
use crate::model::NormalizedTable;
use crate::pipeline::PipelineError;
use crate::stats::mean_skipna;

/// Divides every column of `probes` by the sample's mean over all columns of
/// `reference`, restricted to rows labelled `group`.
///
/// Both tables must come from the same input so rows line up by position.
pub fn normalize_group(
    probes: &SampleTable,
    reference: &SampleTable,
    group: &str,
) -> Result<NormalizedTable, PipelineError> {
    let rows_idx = group_rows(reference, group)?;

    let mut sample_ids = Vec::with_capacity(rows_idx.len());
    let mut reference_means = Vec::with_capacity(rows_idx.len());
    let mut rows: Vec<Vec<f64>> = Vec::with_capacity(rows_idx.len());
    let mut degenerate = 0usize;

    for &r in &rows_idx {
        let mean = mean_skipna(&reference.rows[r]);
        if !mean.is_finite() || mean == 0.0 {
            degenerate += 1;
        }
        rows.push(probes.rows[r].iter().map(|v| v / mean).collect());
        reference_means.push(mean);
        sample_ids.push(probes.sample_ids[r].clone());
    }

    if degenerate > 0 {
        tracing::warn!(
            group,
            samples = degenerate,
            "reference mean is zero or non-finite; proportions will be non-finite"
        );
    }

    Ok(NormalizedTable {
        group: group.to_string(),
        sample_ids,
        columns: probes.columns.clone(),
        rows,
        reference_means,
    })
}

/// Reference channels divided by their own per-sample mean.
pub fn normalize_reference(
    reference: &SampleTable,
    group: &str,
) -> Result<NormalizedTable, PipelineError> {
    normalize_group(reference, reference, group)
}

fn group_rows(table: &SampleTable, group: &str) -> Result<Vec<usize>, PipelineError> {
    let idx: Vec<usize> = table
        .groups
        .iter()
        .enumerate()
        .filter(|(_, g)| g.as_str() == group)
        .map(|(i, _)| i)
        .collect();
    if idx.is_empty() {
        return Err(PipelineError::GroupNotFound(group.to_string()));
    }
    Ok(idx)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_normalize.rs"]
mod tests;
