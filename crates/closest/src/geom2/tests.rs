use super::*;
use nalgebra::vector;

#[test]
fn distance_is_euclidean() {
    let a = vector![0.0, 0.0];
    let b = vector![3.0, 4.0];
    assert!((distance(a, b) - 5.0).abs() < 1e-12);
    assert_eq!(distance(a, a), 0.0);
}

#[test]
fn empty_pair_is_infinitely_far() {
    let none = ClosestPair::none();
    assert!(none.is_empty());
    assert!(none.dist.is_infinite());
    assert_eq!(ClosestPair::default(), none);
}

#[test]
fn closer_prefers_left_on_ties() {
    let left = ClosestPair::of(vector![0.0, 0.0], vector![1.0, 0.0]);
    let right = ClosestPair::of(vector![5.0, 0.0], vector![6.0, 0.0]);
    assert_eq!(ClosestPair::closer(left, right), left);
    let nearer = ClosestPair::of(vector![5.0, 0.0], vector![5.5, 0.0]);
    assert_eq!(ClosestPair::closer(left, nearer), nearer);
    // Two empty sides stay empty.
    assert!(ClosestPair::closer(ClosestPair::none(), ClosestPair::none()).is_empty());
}

#[test]
fn offer_only_accepts_strict_improvements() {
    let mut best = ClosestPair::none();
    assert!(best.offer(vector![0.0, 0.0], vector![2.0, 0.0]));
    assert!(!best.offer(vector![10.0, 0.0], vector![12.0, 0.0]));
    assert_eq!(best.pair.map(|(a, _)| a.x), Some(0.0));
    assert!(best.offer(vector![1.0, 1.0], vector![1.0, 1.0]));
    assert_eq!(best.dist, 0.0);
}
