use crate::input::SampleTable;

/// Copy of `table` without the columns whose name starts with `prefix`.
///
/// Sample ids and group labels are always retained.
pub fn drop_prefixed(table: &SampleTable, prefix: &str) -> SampleTable {
    let keep: Vec<usize> = (0..table.columns.len())
        .filter(|&i| !table.columns[i].starts_with(prefix))
        .collect();

    let columns: Vec<String> = keep.iter().map(|&i| table.columns[i].clone()).collect();
    let rows: Vec<Vec<f64>> = table
        .rows
        .iter()
        .map(|row| keep.iter().map(|&i| row[i]).collect())
        .collect();

    SampleTable {
        sample_ids: table.sample_ids.clone(),
        group_column: table.group_column.clone(),
        groups: table.groups.clone(),
        columns,
        rows,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_partition.rs"]
mod tests;
