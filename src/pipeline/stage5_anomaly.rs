use crate::model::{AnomalyRecord, CnvThresholds, Observation};
use crate::pipeline::stage3_reshape::by_probe;
use crate::stats::count_present;

/// Per-probe deletion and duplication rates. Missing proportions are excluded
/// from the total; a probe with no present values gets NaN rates.
pub fn label_anomalies(
    observations: &[Observation],
    thresholds: &CnvThresholds,
) -> Vec<AnomalyRecord> {
    by_probe(observations)
        .into_iter()
        .map(|(number, values)| {
            let total = count_present(&values);
            let deletions = values
                .iter()
                .filter(|&&v| v < thresholds.deletion_below)
                .count();
            let duplications = values
                .iter()
                .filter(|&&v| v > thresholds.duplication_above)
                .count();
            AnomalyRecord {
                number,
                total,
                deletions,
                duplications,
                percent_del: deletions as f64 / total as f64,
                percent_dup: duplications as f64 / total as f64,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_anomaly.rs"]
mod tests;
