use super::*;

fn obs(number: u32, values: &[f64]) -> Vec<Observation> {
    values
        .iter()
        .map(|&proportion| Observation {
            number: ProbeNumber(number),
            proportion,
        })
        .collect()
}

fn record(number: u32, percent_del: f64, percent_dup: f64) -> AnomalyRecord {
    AnomalyRecord {
        number: ProbeNumber(number),
        total: 10,
        deletions: (percent_del * 10.0) as usize,
        duplications: (percent_dup * 10.0) as usize,
        percent_del,
        percent_dup,
    }
}

#[test]
fn test_find_runs_splits_on_gaps() {
    let runs = find_runs(&[1, 2, 3, 4, 6, 7, 8, 9, 10]);
    assert_eq!(runs, vec![vec![1, 2, 3, 4], vec![6, 7, 8, 9, 10]]);
    let kept: Vec<u32> = keep_long_runs(runs, 4).into_iter().flatten().collect();
    assert_eq!(kept, vec![1, 2, 3, 4, 6, 7, 8, 9, 10]);
}

#[test]
fn test_short_run_is_dropped() {
    let runs = find_runs(&[12, 13, 14]);
    assert_eq!(runs, vec![vec![12, 13, 14]]);
    assert!(keep_long_runs(runs, 4).is_empty());
}

#[test]
fn test_find_runs_edge_cases() {
    assert!(find_runs(&[]).is_empty());
    assert_eq!(find_runs(&[5]), vec![vec![5]]);
    assert_eq!(find_runs(&[1, 3, 5]), vec![vec![1], vec![3], vec![5]]);
    assert_eq!(find_runs(&[u32::MAX - 1, u32::MAX]), vec![vec![u32::MAX - 1, u32::MAX]]);
}

#[test]
fn test_select_anomalous_threshold_and_sentinel() {
    let th = CnvThresholds::default_v1();
    let records = vec![
        record(1, 0.7, 0.0),
        record(2, 0.0, 0.61),
        record(3, 0.6, 0.6),
        record(4, 0.0, 0.0),
        record(5, f64::NAN, f64::NAN),
    ];
    assert_eq!(
        select_anomalous(&records, &[], &th),
        vec![ProbeNumber(1), ProbeNumber(2)]
    );
    assert_eq!(
        select_anomalous(&records, &[ProbeNumber(4), ProbeNumber(5)], &th),
        vec![ProbeNumber(1), ProbeNumber(2), ProbeNumber(4), ProbeNumber(5)]
    );
}

#[test]
fn test_unreliable_probe_bridges_run() {
    let th = CnvThresholds::default_v1();
    let mut data = Vec::new();
    for p in [1, 2, 4, 5] {
        data.extend(obs(p, &[0.3, 0.3, 0.3, 0.3, 0.3]));
    }
    data.extend(obs(3, &[0.5, 1.5, 0.5, 1.5, 1.0]));

    let calls = call_contiguous(&data, 0.12, &th);
    let numbers: Vec<u32> = calls.iter().map(|c| c.number.value()).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    assert_eq!(calls[0].percent_del, 1.0);
    assert_eq!(calls[2].percent_del, 0.0);
    assert_eq!(calls[2].percent_dup, 0.0);

    assert!(call_contiguous(&data, 10.0, &th).is_empty());
}

#[test]
fn test_single_run_covering_all_probes() {
    let th = CnvThresholds::default_v1();
    let mut data = Vec::new();
    for p in 1..=6 {
        data.extend(obs(p, &[1.8, 1.8, 1.8]));
    }
    let calls = call_contiguous(&data, 0.12, &th);
    assert_eq!(calls.len(), 6);
    assert!(calls.iter().all(|c| c.percent_dup == 1.0 && c.percent_del == 0.0));
}

#[test]
fn test_no_anomalies_gives_empty_output() {
    let th = CnvThresholds::default_v1();
    let mut data = Vec::new();
    for p in 1..=6 {
        data.extend(obs(p, &[1.0, 1.0, 1.0]));
    }
    assert!(call_contiguous(&data, 0.12, &th).is_empty());
}
