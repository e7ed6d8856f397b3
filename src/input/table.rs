use std::io::Read;

use crate::input::InputError;

/// Wide per-sample table: one row per sample, one numeric column per channel.
///
/// The group label lives outside `columns` so every column is numeric.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleTable {
    pub sample_ids: Vec<String>,
    pub group_column: String,
    pub groups: Vec<String>,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

impl SampleTable {
    pub fn n_samples(&self) -> usize {
        self.rows.len()
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn columns_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.columns
            .iter()
            .filter(|c| c.starts_with(prefix))
            .cloned()
            .collect()
    }

    /// Distinct group labels in first-occurrence order.
    pub fn distinct_groups(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for g in &self.groups {
            if !out.iter().any(|seen| seen == g) {
                out.push(g.clone());
            }
        }
        out
    }
}

/// Reads a delimited table whose first column is the row index.
///
/// Every column other than the index and `group_column` must be numeric.
/// Empty cells and `NA` are read as NaN.
pub fn read_table<R: Read>(
    reader: R,
    delimiter: u8,
    group_column: &str,
) -> Result<SampleTable, InputError> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .from_reader(reader);

    let header: Vec<String> = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    if header.len() < 2 {
        return Err(InputError::Parse(
            "table needs a row-index column and at least one data column".to_string(),
        ));
    }

    let group_idx = header
        .iter()
        .skip(1)
        .position(|h| h == group_column)
        .map(|p| p + 1)
        .ok_or_else(|| InputError::MissingColumn(group_column.to_string()))?;

    let value_idx: Vec<usize> = (1..header.len()).filter(|&i| i != group_idx).collect();
    let columns: Vec<String> = value_idx.iter().map(|&i| header[i].clone()).collect();

    let mut sample_ids = Vec::new();
    let mut groups = Vec::new();
    let mut rows = Vec::new();

    for (row_no, record) in rdr.records().enumerate() {
        let record = record?;
        sample_ids.push(record.get(0).unwrap_or("").trim().to_string());
        groups.push(record.get(group_idx).unwrap_or("").trim().to_string());

        let mut row = Vec::with_capacity(value_idx.len());
        for &i in &value_idx {
            let field = record.get(i).unwrap_or("");
            let value = parse_value(field).ok_or_else(|| InputError::InvalidValue {
                value: field.to_string(),
                row: row_no,
                column: header[i].clone(),
            })?;
            row.push(value);
        }
        rows.push(row);
    }

    Ok(SampleTable {
        sample_ids,
        group_column: group_column.to_string(),
        groups,
        columns,
        rows,
    })
}

fn parse_value(field: &str) -> Option<f64> {
    let s = field.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("na") || s.eq_ignore_ascii_case("nan") {
        return Some(f64::NAN);
    }
    s.parse::<f64>().ok()
}
