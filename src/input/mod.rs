use std::path::{Path, PathBuf};

pub mod open;
pub mod table;

pub use open::{detect_delimiter, open_maybe_gz};
pub use table::{SampleTable, read_table};

pub const DEFAULT_GROUP_COLUMN: &str = "ethnicity";

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing column '{0}'")]
    MissingColumn(String),
    #[error("invalid numeric value '{value}' at row {row}, column '{column}'")]
    InvalidValue {
        value: String,
        row: usize,
        column: String,
    },
    #[error("parse error: {0}")]
    Parse(String),
}

pub fn load_table(path: &Path, group_column: &str) -> Result<SampleTable, InputError> {
    let reader = open_maybe_gz(path)?;
    let table = read_table(reader, detect_delimiter(path), group_column)?;
    tracing::debug!(
        path = %path.display(),
        samples = table.n_samples(),
        columns = table.n_columns(),
        "loaded sample table"
    );
    Ok(table)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
