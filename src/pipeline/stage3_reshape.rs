use std::collections::BTreeMap;

use crate::model::{NormalizedTable, Observation, ProbeNumber};
use crate::pipeline::PipelineError;

/// Wide to long over `keys`, column-major: every row of the first key, then
/// the next key.
///
/// `keys` are taken from the full input table, not from `wide`.
pub fn melt(wide: &NormalizedTable, keys: &[String]) -> Result<Vec<Observation>, PipelineError> {
    let mut out = Vec::with_capacity(wide.rows.len() * keys.len());
    for key in keys {
        let col = wide
            .columns
            .iter()
            .position(|c| c == key)
            .ok_or_else(|| PipelineError::MissingColumn(key.clone()))?;
        let number = ProbeNumber::from_column(key)
            .ok_or_else(|| PipelineError::InvalidProbeName(key.clone()))?;
        for row in &wide.rows {
            out.push(Observation {
                number,
                proportion: row[col],
            });
        }
    }
    Ok(out)
}

/// Proportions per probe number, ascending by number.
pub fn by_probe(observations: &[Observation]) -> BTreeMap<ProbeNumber, Vec<f64>> {
    let mut groups: BTreeMap<ProbeNumber, Vec<f64>> = BTreeMap::new();
    for obs in observations {
        groups.entry(obs.number).or_default().push(obs.proportion);
    }
    groups
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_reshape.rs"]
mod tests;
