use crate::model::{Observation, ProbeNumber, SweepGrid, SweepPoint, VariabilityRecord};
use crate::pipeline::stage3_reshape::by_probe;
use crate::stats::{count_present, mean_skipna, sample_std_skipna};

pub fn score_variability(observations: &[Observation]) -> Vec<VariabilityRecord> {
    by_probe(observations)
        .into_iter()
        .map(|(number, values)| {
            let mean = mean_skipna(&values);
            let std = sample_std_skipna(&values);
            VariabilityRecord {
                number,
                n: count_present(&values),
                mean,
                std,
                cv: std / mean,
            }
        })
        .collect()
}

/// Probes whose CV strictly exceeds `cutoff`. NaN CVs never qualify.
pub fn flag_records(records: &[VariabilityRecord], cutoff: f64) -> Vec<ProbeNumber> {
    records
        .iter()
        .filter(|r| r.cv > cutoff)
        .map(|r| r.number)
        .collect()
}

pub fn find_variable_probes(observations: &[Observation], cutoff: f64) -> Vec<ProbeNumber> {
    flag_records(&score_variability(observations), cutoff)
}

pub fn sweep_cutoffs(observations: &[Observation], grid: &SweepGrid) -> Vec<SweepPoint> {
    let records = score_variability(observations);
    grid.cutoffs()
        .into_iter()
        .map(|cutoff| SweepPoint {
            cutoff,
            flagged: flag_records(&records, cutoff),
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_variability.rs"]
mod tests;
