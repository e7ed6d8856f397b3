#[derive(Debug, Clone)]
pub struct CnvThresholds {
    /// Proportions strictly below this count as deletion-like.
    pub deletion_below: f64,
    /// Proportions strictly above this count as duplication-like.
    pub duplication_above: f64,
    /// Anomaly score a probe must strictly exceed to be selected.
    pub anomaly_score_min: f64,
    /// Score assigned to probes flagged as high-variability.
    pub unreliable_score: f64,
    /// Shortest run of consecutive probes that is reported.
    pub min_run_len: usize,
}

impl CnvThresholds {
    pub fn default_v1() -> Self {
        Self {
            deletion_below: 0.5,
            duplication_above: 1.5,
            anomaly_score_min: 0.6,
            unreliable_score: 0.99,
            min_run_len: 4,
        }
    }
}

impl Default for CnvThresholds {
    fn default() -> Self {
        Self::default_v1()
    }
}

/// Evenly spaced CV cutoffs, endpoints inclusive.
#[derive(Debug, Clone, Copy)]
pub struct SweepGrid {
    pub start: f64,
    pub stop: f64,
    pub steps: usize,
}

impl SweepGrid {
    pub fn default_v1() -> Self {
        Self {
            start: 0.10,
            stop: 0.15,
            steps: 6,
        }
    }

    pub fn cutoffs(&self) -> Vec<f64> {
        match self.steps {
            0 => Vec::new(),
            1 => vec![self.start],
            n => {
                let step = (self.stop - self.start) / (n - 1) as f64;
                let mut out: Vec<f64> = (0..n).map(|i| self.start + i as f64 * step).collect();
                out[n - 1] = self.stop;
                out
            }
        }
    }
}

impl Default for SweepGrid {
    fn default() -> Self {
        Self::default_v1()
    }
}
