pub mod stage1_partition;
pub mod stage2_normalize;
pub mod stage3_reshape;
pub mod stage4_variability;
pub mod stage5_anomaly;
pub mod stage6_runs;
pub mod stage7_groups;

/// Columns with this prefix are probes of interest.
pub const PROBE_PREFIX: &str = "probe";
/// Columns with this prefix are reference channels.
pub const REFERENCE_PREFIX: &str = "non_probe";

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("no samples for group '{0}'")]
    GroupNotFound(String),
    #[error("missing column '{0}'")]
    MissingColumn(String),
    #[error("column '{0}' does not end in _<digits>")]
    InvalidProbeName(String),
    #[error("no '{0}' columns in input")]
    NoProbeColumns(String),
}
