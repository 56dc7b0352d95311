// dicesim-core/tests/statistics_tests.rs
use dicesim_core::{roll_many, sum, Statistics};
use rand::SeedableRng;
use rand::rngs::StdRng;

const EPSILON: f64 = 1e-3;

#[test]
fn sum_handles_empty_and_small_inputs() {
    assert_eq!(sum(&[]), 0);
    assert_eq!(sum(&[1, 5, 6]), 12);
}

#[test]
fn empty_history_yields_none() {
    assert_eq!(Statistics::compute(&[]), None);
}

#[test]
fn single_roll_set_statistics() {
    let stats = Statistics::compute(&[vec![3, 4]]).unwrap();
    assert_eq!(stats.total_sum, 7);
    assert_eq!(stats.average, 7.0);
    assert_eq!(stats.max_value, 4);
    assert_eq!(stats.min_value, 3);
    assert_eq!(stats.max_roll, 7);
    assert_eq!(stats.min_roll, 7);
    assert_eq!(stats.std_dev, 0.0);
    assert_eq!(stats.all_values, vec![3, 4]);
}

#[test]
fn two_roll_set_statistics() {
    let stats = Statistics::compute(&[vec![1, 1], vec![6, 6]]).unwrap();
    assert_eq!(stats.total_sum, 14);
    assert_eq!(stats.average, 7.0);
    assert_eq!(stats.max_value, 6);
    assert_eq!(stats.min_value, 1);
    assert_eq!(stats.max_roll, 12);
    assert_eq!(stats.min_roll, 2);
    assert!((stats.std_dev - 7.071).abs() < EPSILON, "std_dev was {}", stats.std_dev);
    assert_eq!(stats.all_values, vec![1, 1, 6, 6]);
}

#[test]
fn computing_twice_gives_identical_snapshots() {
    let history = roll_many(&mut StdRng::seed_from_u64(77), 5, 10, 40).unwrap();
    let first = Statistics::compute(&history);
    let second = Statistics::compute(&history);
    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn snapshot_serializes_with_stable_field_names() {
    let stats = Statistics::compute(&[vec![2, 5]]).unwrap();
    let json = serde_json::to_value(&stats).unwrap();
    assert_eq!(json["total_sum"], 7);
    assert_eq!(json["max_value"], 5);
    assert_eq!(json["all_values"], serde_json::json!([2, 5]));
}
