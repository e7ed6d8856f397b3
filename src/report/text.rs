use crate::model::{ProbeNumber, SweepPoint};
use crate::report::cutoff_percent;

/// One line per cutoff: percent, count and the flagged probes.
pub fn render_sweep(points: &[SweepPoint]) -> String {
    let mut out = String::new();
    for p in points {
        out.push_str(&format!(
            "{}%: count ={};  Problem Probes: {}\n",
            cutoff_percent(p.cutoff),
            p.count(),
            format_probe_list(&p.flagged)
        ));
    }
    out
}

/// `['01', '02']`
pub fn format_probe_list(probes: &[ProbeNumber]) -> String {
    let items: Vec<String> = probes.iter().map(|p| format!("'{p}'")).collect();
    format!("[{}]", items.join(", "))
}
