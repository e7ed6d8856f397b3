use serde::Serialize;

use crate::pipeline::stage7_groups::GroupReport;

#[derive(Debug, Serialize)]
pub struct SummaryData<'a> {
    pub tool: &'static str,
    pub tool_version: &'static str,
    pub input: String,
    pub cv_cutoff: f64,
    pub n_samples: usize,
    pub n_reported: usize,
    pub groups: &'a [GroupReport],
}

pub fn render_summary_json(data: &SummaryData<'_>) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(data)
}
