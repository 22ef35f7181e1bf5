// sentieval-core/src/metrics.rs
//! Confusion-matrix accumulation and the classification metrics derived
//! from it.
//!
//! The matrix is keyed by class rather than by fixed indices, so labels
//! outside `{0, 1}` found in a dataset still land in their own cells. Only
//! counts are stored, which makes every metric independent of the order in
//! which pairs were observed.
//!
//! Zero-denominator policy: accuracy, precision, sensitivity and F1 are all
//! `0.0` when their denominator is zero.
//!
//! License: MIT OR APACHE 2.0

use serde::ser::{SerializeSeq, Serializer};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Counts of `(truth, predicted)` pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfusionMatrix<K: Ord + Copy = i64> {
    cells: BTreeMap<(K, K), usize>,
    total: usize,
}

impl<K: Ord + Copy> Default for ConfusionMatrix<K> {
    fn default() -> Self {
        Self {
            cells: BTreeMap::new(),
            total: 0,
        }
    }
}

impl<K: Ord + Copy> ConfusionMatrix<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one prediction.
    pub fn observe(&mut self, truth: K, predicted: K) {
        *self.cells.entry((truth, predicted)).or_insert(0) += 1;
        self.total += 1;
    }

    /// Folds another matrix into this one, e.g. a per-worker partial.
    pub fn merge(&mut self, other: &ConfusionMatrix<K>) {
        for (&key, &count) in &other.cells {
            *self.cells.entry(key).or_insert(0) += count;
        }
        self.total += other.total;
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn count(&self, truth: K, predicted: K) -> usize {
        self.cells.get(&(truth, predicted)).copied().unwrap_or(0)
    }

    /// Every class seen as either truth or prediction, ascending.
    pub fn classes(&self) -> BTreeSet<K> {
        self.cells
            .keys()
            .flat_map(|&(truth, predicted)| [truth, predicted])
            .collect()
    }

    /// Non-empty cells as `(truth, predicted, count)`, ordered by key.
    pub fn cells(&self) -> impl Iterator<Item = (K, K, usize)> + '_ {
        self.cells.iter().map(|(&(t, p), &c)| (t, p, c))
    }

    /// Number of observations whose truth is `class`.
    pub fn actual(&self, class: K) -> usize {
        self.cells
            .iter()
            .filter(|((truth, _), _)| *truth == class)
            .map(|(_, c)| c)
            .sum()
    }

    /// Number of observations predicted as `class`.
    pub fn predicted(&self, class: K) -> usize {
        self.cells
            .iter()
            .filter(|((_, predicted), _)| *predicted == class)
            .map(|(_, c)| c)
            .sum()
    }

    fn correct(&self) -> usize {
        self.cells
            .iter()
            .filter(|((truth, predicted), _)| truth == predicted)
            .map(|(_, c)| c)
            .sum()
    }

    /// Fraction of observations predicted correctly.
    pub fn accuracy(&self) -> f64 {
        ratio(self.correct(), self.total)
    }

    /// Of everything predicted as `class`, the fraction that truly is.
    pub fn precision(&self, class: K) -> f64 {
        ratio(self.count(class, class), self.predicted(class))
    }

    /// Of everything truly `class`, the fraction predicted as such (recall).
    pub fn sensitivity(&self, class: K) -> f64 {
        ratio(self.count(class, class), self.actual(class))
    }

    /// Harmonic mean of precision and sensitivity.
    pub fn f1(&self, class: K) -> f64 {
        let p = self.precision(class);
        let r = self.sensitivity(class);
        if p + r == 0.0 {
            0.0
        } else {
            2.0 * p * r / (p + r)
        }
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

impl<K: Ord + Copy> FromIterator<(K, K)> for ConfusionMatrix<K> {
    fn from_iter<I: IntoIterator<Item = (K, K)>>(iter: I) -> Self {
        let mut matrix = Self::new();
        matrix.extend(iter);
        matrix
    }
}

impl<K: Ord + Copy> Extend<(K, K)> for ConfusionMatrix<K> {
    fn extend<I: IntoIterator<Item = (K, K)>>(&mut self, iter: I) {
        for (truth, predicted) in iter {
            self.observe(truth, predicted);
        }
    }
}

#[derive(Serialize)]
struct MatrixCell<K> {
    truth: K,
    predicted: K,
    count: usize,
}

impl<K: Ord + Copy + Serialize> Serialize for ConfusionMatrix<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.cells.len()))?;
        for (truth, predicted, count) in self.cells() {
            seq.serialize_element(&MatrixCell { truth, predicted, count })?;
        }
        seq.end()
    }
}

/// The fixed set of binary metrics reported for every run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricSummary {
    pub accuracy: f64,
    pub precision_1: f64,
    pub precision_0: f64,
    pub sensitivity_1: f64,
    pub sensitivity_0: f64,
    pub f1_1: f64,
    pub f1_0: f64,
}

impl MetricSummary {
    pub fn from_matrix(matrix: &ConfusionMatrix<i64>) -> Self {
        Self {
            accuracy: matrix.accuracy(),
            precision_1: matrix.precision(1),
            precision_0: matrix.precision(0),
            sensitivity_1: matrix.sensitivity(1),
            sensitivity_0: matrix.sensitivity(0),
            f1_1: matrix.f1(1),
            f1_0: matrix.f1(0),
        }
    }

    /// `(label, value)` pairs in report order.
    pub fn lines(&self) -> [(&'static str, f64); 7] {
        [
            ("Accuracy", self.accuracy),
            ("Precision 1", self.precision_1),
            ("Precision 0", self.precision_0),
            ("Sensitivity 1", self.sensitivity_1),
            ("Sensitivity 0", self.sensitivity_0),
            ("F1 - 1", self.f1_1),
            ("F1 - 0", self.f1_0),
        ]
    }
}

impl fmt::Display for MetricSummary {
    /// One `Label: value` line per metric, three decimals.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (label, value) in self.lines() {
            writeln!(f, "{}: {:.3}", label, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_empty_matrix_is_all_zero() {
        let m: ConfusionMatrix = ConfusionMatrix::new();
        assert!(m.is_empty());
        assert_eq!(m.accuracy(), 0.0);
        assert_eq!(m.precision(1), 0.0);
        assert_eq!(m.sensitivity(0), 0.0);
        assert_eq!(m.f1(1), 0.0);
    }

    #[test]
    fn test_binary_metrics() {
        // truth/predicted: TP=3, FN=1, FP=2, TN=4
        let mut m = ConfusionMatrix::new();
        for _ in 0..3 { m.observe(1, 1); }
        m.observe(1, 0);
        for _ in 0..2 { m.observe(0, 1); }
        for _ in 0..4 { m.observe(0, 0); }

        assert_eq!(m.total(), 10);
        assert!((m.accuracy() - 0.7).abs() < EPSILON);
        assert!((m.precision(1) - 0.6).abs() < EPSILON);
        assert!((m.sensitivity(1) - 0.75).abs() < EPSILON);
        assert!((m.precision(0) - 0.8).abs() < EPSILON);
        assert!((m.sensitivity(0) - 4.0 / 6.0).abs() < EPSILON);
        let f1 = 2.0 * 0.6 * 0.75 / (0.6 + 0.75);
        assert!((m.f1(1) - f1).abs() < EPSILON);
    }

    #[test]
    fn test_all_mismatches() {
        let m: ConfusionMatrix = [(1, 0), (1, 0)].into_iter().collect();
        assert_eq!(m.accuracy(), 0.0);
        assert_eq!(m.precision(1), 0.0);
        assert_eq!(m.sensitivity(1), 0.0);
        assert_eq!(m.precision(0), 0.0);
        assert_eq!(m.f1(1), 0.0);
    }

    #[test]
    fn test_order_independence() {
        let pairs = vec![(1, 1), (0, 1), (1, 0), (0, 0), (0, 0), (1, 1)];
        let forward: ConfusionMatrix = pairs.iter().copied().collect();
        let backward: ConfusionMatrix = pairs.iter().rev().copied().collect();
        assert_eq!(forward, backward);
        assert_eq!(MetricSummary::from_matrix(&forward), MetricSummary::from_matrix(&backward));
    }

    #[test]
    fn test_merge_matches_single_pass() {
        let pairs = [(1, 1), (0, 1), (1, 0), (0, 0), (2, 0)];
        let whole: ConfusionMatrix = pairs.into_iter().collect();

        let mut left: ConfusionMatrix = pairs[..2].iter().copied().collect();
        let right: ConfusionMatrix = pairs[2..].iter().copied().collect();
        left.merge(&right);

        assert_eq!(left, whole);
    }

    #[test]
    fn test_out_of_range_labels_get_their_own_class() {
        let m: ConfusionMatrix = [(2, 0), (1, 1)].into_iter().collect();
        assert_eq!(m.classes().into_iter().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert!((m.accuracy() - 0.5).abs() < EPSILON);
        assert_eq!(m.actual(2), 1);
        assert_eq!(m.predicted(0), 1);
        assert_eq!(m.precision(0), 0.0);
    }

    #[test]
    fn test_summary_display() {
        let m: ConfusionMatrix = [(1, 1), (0, 0), (1, 1), (0, 0)].into_iter().collect();
        let text = MetricSummary::from_matrix(&m).to_string();
        assert_eq!(
            text,
            "Accuracy: 1.000\nPrecision 1: 1.000\nPrecision 0: 1.000\n\
             Sensitivity 1: 1.000\nSensitivity 0: 1.000\nF1 - 1: 1.000\nF1 - 0: 1.000\n"
        );
    }

    #[test]
    fn test_serializes_as_cells() {
        let m: ConfusionMatrix = [(1, 0), (1, 0), (0, 0)].into_iter().collect();
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                { "truth": 0, "predicted": 0, "count": 1 },
                { "truth": 1, "predicted": 0, "count": 2 },
            ])
        );
    }
}
