use std::io::Write;
use std::path::Path;

use crate::model::ResultRow;
use crate::report::format_float;

pub const RESULT_HEADER: [&str; 4] = ["number", "percent_del", "percent_dup", "group_label"];

pub fn write_results<W: Write>(rows: &[ResultRow], out: W) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(RESULT_HEADER)?;
    for row in rows {
        writer.write_record([
            row.number.label(),
            format_float(row.percent_del),
            format_float(row.percent_dup),
            row.group_label.clone(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_results_file(rows: &[ResultRow], path: &Path) -> Result<(), csv::Error> {
    let file = std::fs::File::create(path)?;
    write_results(rows, std::io::BufWriter::new(file))
}
