pub mod probe;
pub mod records;
pub mod thresholds;

pub use probe::ProbeNumber;
pub use records::{
    AnomalyRecord, NormalizedTable, Observation, ProbeCall, ResultRow, SweepPoint,
    VariabilityRecord,
};
pub use thresholds::{CnvThresholds, SweepGrid};

#[cfg(test)]
#[path = "../../tests/src_inline/model/tests.rs"]
mod tests;
