use std::collections::BTreeSet;

use crate::model::{AnomalyRecord, CnvThresholds, Observation, ProbeCall, ProbeNumber};
use crate::pipeline::stage4_variability::find_variable_probes;
use crate::pipeline::stage5_anomaly::label_anomalies;

enum RunState {
    Idle,
    InRun(Vec<u32>),
}

/// Maximal runs of consecutive integers in an ascending sequence.
pub fn find_runs(sorted: &[u32]) -> Vec<Vec<u32>> {
    let mut runs = Vec::new();
    let mut state = RunState::Idle;
    for &v in sorted {
        state = match state {
            RunState::Idle => RunState::InRun(vec![v]),
            RunState::InRun(mut run) => {
                let extends = run.last().is_some_and(|&last| last.checked_add(1) == Some(v));
                if extends {
                    run.push(v);
                    RunState::InRun(run)
                } else {
                    runs.push(run);
                    RunState::InRun(vec![v])
                }
            }
        };
    }
    if let RunState::InRun(run) = state {
        runs.push(run);
    }
    runs
}

pub fn keep_long_runs(runs: Vec<Vec<u32>>, min_len: usize) -> Vec<Vec<u32>> {
    runs.into_iter().filter(|r| r.len() >= min_len).collect()
}

/// Probes whose score exceeds the anomaly cutoff, ascending. Probes in
/// `unreliable` are scored `thresholds.unreliable_score` instead.
pub fn select_anomalous(
    records: &[AnomalyRecord],
    unreliable: &[ProbeNumber],
    thresholds: &CnvThresholds,
) -> Vec<ProbeNumber> {
    let mut selected: Vec<ProbeNumber> = records
        .iter()
        .filter(|r| {
            let score = if unreliable.contains(&r.number) {
                thresholds.unreliable_score
            } else {
                r.score()
            };
            score > thresholds.anomaly_score_min
        })
        .map(|r| r.number)
        .collect();
    selected.sort();
    selected
}

/// Anomalous probes that sit in a run of at least `min_run_len` consecutive
/// probe numbers, in probe order.
pub fn call_contiguous(
    observations: &[Observation],
    cv_cutoff: f64,
    thresholds: &CnvThresholds,
) -> Vec<ProbeCall> {
    let records = label_anomalies(observations, thresholds);
    let unreliable = find_variable_probes(observations, cv_cutoff);
    let selected = select_anomalous(&records, &unreliable, thresholds);

    let numbers: Vec<u32> = selected.iter().map(|p| p.value()).collect();
    let kept: BTreeSet<u32> = keep_long_runs(find_runs(&numbers), thresholds.min_run_len)
        .into_iter()
        .flatten()
        .collect();

    tracing::debug!(
        selected = selected.len(),
        unreliable = unreliable.len(),
        kept = kept.len(),
        "contiguous-run filter"
    );

    records
        .iter()
        .filter(|r| kept.contains(&r.number.value()))
        .map(|r| ProbeCall {
            number: r.number,
            percent_del: r.percent_del,
            percent_dup: r.percent_dup,
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage6_runs.rs"]
mod tests;
