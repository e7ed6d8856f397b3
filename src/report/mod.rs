pub mod json;
pub mod table;
pub mod text;

/// Shortest round-trip form with a trailing `.0` for integral values.
/// NaN renders as an empty field.
pub fn format_float(v: f64) -> String {
    if v.is_nan() {
        String::new()
    } else if v.is_infinite() {
        if v > 0.0 { "inf".to_string() } else { "-inf".to_string() }
    } else {
        format!("{:?}", v)
    }
}

/// Percent label for a CV cutoff, rounded to the nearest integer.
pub fn cutoff_percent(cutoff: f64) -> i64 {
    (cutoff * 100.0).round() as i64
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
