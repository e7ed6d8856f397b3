use super::*;

fn sample_table() -> SampleTable {
    SampleTable {
        sample_ids: vec!["0".to_string(), "1".to_string()],
        group_column: "ethnicity".to_string(),
        groups: vec!["A".to_string(), "B".to_string()],
        columns: ["probe_1", "probe_2", "non_probe_1", "non_probe_2", "batch"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        rows: vec![
            vec![1.0, 2.0, 3.0, 4.0, 5.0],
            vec![6.0, 7.0, 8.0, 9.0, 10.0],
        ],
    }
}

#[test]
fn test_drop_probe_prefix_keeps_reference_and_others() {
    let t = sample_table();
    let out = drop_prefixed(&t, "probe");
    assert_eq!(out.columns, vec!["non_probe_1", "non_probe_2", "batch"]);
    assert_eq!(out.rows[1], vec![8.0, 9.0, 10.0]);
    assert_eq!(out.groups, t.groups);
    assert_eq!(out.sample_ids, t.sample_ids);
}

#[test]
fn test_drop_non_probe_prefix_keeps_probes() {
    let out = drop_prefixed(&sample_table(), "non_probe");
    assert_eq!(out.columns, vec!["probe_1", "probe_2", "batch"]);
    assert_eq!(out.rows[0], vec![1.0, 2.0, 5.0]);
}

#[test]
fn test_partition_is_complement() {
    let t = sample_table();
    for prefix in ["probe", "non_probe", "batch", "zzz"] {
        let out = drop_prefixed(&t, prefix);
        assert!(out.columns.iter().all(|c| !c.starts_with(prefix)));
        let mut union: Vec<String> = out.columns.clone();
        union.extend(t.columns_with_prefix(prefix));
        union.sort();
        let mut all = t.columns.clone();
        all.sort();
        assert_eq!(union, all);
    }
}

#[test]
fn test_no_match_returns_input() {
    let t = sample_table();
    assert_eq!(drop_prefixed(&t, "zzz"), t);
}
