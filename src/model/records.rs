use serde::Serialize;

use crate::model::probe::ProbeNumber;

/// Wide table after dividing by the per-sample reference mean.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedTable {
    pub group: String,
    pub sample_ids: Vec<String>,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<f64>>,
    pub reference_means: Vec<f64>,
}

/// One (sample, probe) proportion in long format.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub number: ProbeNumber,
    pub proportion: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariabilityRecord {
    pub number: ProbeNumber,
    pub n: usize,
    pub mean: f64,
    pub std: f64,
    pub cv: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnomalyRecord {
    pub number: ProbeNumber,
    pub total: usize,
    pub deletions: usize,
    pub duplications: usize,
    pub percent_del: f64,
    pub percent_dup: f64,
}

impl AnomalyRecord {
    /// Larger of the two rates; NaN only when both are NaN.
    pub fn score(&self) -> f64 {
        self.percent_del.max(self.percent_dup)
    }
}

/// A probe that survived the contiguous-run filter for one group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeCall {
    pub number: ProbeNumber,
    pub percent_del: f64,
    pub percent_dup: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub number: ProbeNumber,
    pub percent_del: f64,
    pub percent_dup: f64,
    pub group_label: String,
}

impl ResultRow {
    pub fn from_call(call: &ProbeCall, group_label: &str) -> Self {
        Self {
            number: call.number,
            percent_del: call.percent_del,
            percent_dup: call.percent_dup,
            group_label: group_label.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepPoint {
    pub cutoff: f64,
    pub flagged: Vec<ProbeNumber>,
}

impl SweepPoint {
    pub fn count(&self) -> usize {
        self.flagged.len()
    }
}
