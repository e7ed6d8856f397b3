use super::*;

fn tables() -> (SampleTable, SampleTable) {
    let groups: Vec<String> = ["A", "B", "A"].iter().map(|s| s.to_string()).collect();
    let sample_ids: Vec<String> = ["0", "1", "2"].iter().map(|s| s.to_string()).collect();
    let probes = SampleTable {
        sample_ids: sample_ids.clone(),
        group_column: "ethnicity".to_string(),
        groups: groups.clone(),
        columns: vec!["probe_1".to_string(), "probe_2".to_string()],
        rows: vec![vec![10.0, 20.0], vec![5.0, 5.0], vec![4.0, 2.0]],
    };
    let reference = SampleTable {
        sample_ids,
        group_column: "ethnicity".to_string(),
        groups,
        columns: vec!["non_probe_1".to_string(), "non_probe_2".to_string()],
        rows: vec![vec![8.0, 12.0], vec![5.0, 5.0], vec![0.0, 0.0]],
    };
    (probes, reference)
}

#[test]
fn test_row_wise_division_by_reference_mean() {
    let (probes, reference) = tables();
    let out = normalize_group(&probes, &reference, "A").unwrap();
    assert_eq!(out.group, "A");
    assert_eq!(out.sample_ids, vec!["0", "2"]);
    assert_eq!(out.columns, probes.columns);
    assert_eq!(out.reference_means[0], 10.0);
    assert_eq!(out.rows[0], vec![1.0, 2.0]);
}

#[test]
fn test_intensities_equal_to_mean_give_one() {
    let (probes, reference) = tables();
    let out = normalize_group(&probes, &reference, "B").unwrap();
    assert_eq!(out.rows, vec![vec![1.0, 1.0]]);
}

#[test]
fn test_zero_reference_mean_propagates_non_finite() {
    let (probes, reference) = tables();
    let out = normalize_group(&probes, &reference, "A").unwrap();
    assert!(out.rows[1].iter().all(|v| v.is_infinite()));
}

#[test]
fn test_unknown_group_is_error() {
    let (probes, reference) = tables();
    let err = normalize_group(&probes, &reference, "Z").unwrap_err();
    assert!(matches!(err, PipelineError::GroupNotFound(ref g) if g == "Z"));
}

#[test]
fn test_reference_self_normalization() {
    let (_, reference) = tables();
    let out = normalize_reference(&reference, "B").unwrap();
    assert_eq!(out.rows, vec![vec![1.0, 1.0]]);
    let out = normalize_reference(&reference, "A").unwrap();
    assert_eq!(out.rows[0], vec![0.8, 1.2]);
}
