//! Chart Series
//!
//! Parallel sequences as injected into the page: one label sequence (dates)
//! and one value sequence per metric, aligned by index.

use serde::{Deserialize, Serialize};

/// One plotted metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSeries {
    pub label: String,
    pub values: Vec<f64>,
    pub color: String,
}

impl MetricSeries {
    pub fn new(label: &str, values: Vec<f64>, color: &str) -> Self {
        Self {
            label: label.to_string(),
            values,
            color: color.to_string(),
        }
    }
}

/// Labels plus every metric drawn on one chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub metrics: Vec<MetricSeries>,
}

/// A metric whose length differs from the label sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthMismatch {
    pub metric: String,
    pub expected: usize,
    pub found: usize,
}

impl ChartSeries {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels, metrics: Vec::new() }
    }

    pub fn with_metric(mut self, metric: MetricSeries) -> Self {
        self.metrics.push(metric);
        self
    }

    /// Metrics not aligned with the labels
    ///
    /// Misaligned series are still charted; callers only log these.
    pub fn mismatches(&self) -> Vec<LengthMismatch> {
        let expected = self.labels.len();
        self.metrics
            .iter()
            .filter(|m| m.values.len() != expected)
            .map(|m| LengthMismatch {
                metric: m.label.clone(),
                expected,
                found: m.values.len(),
            })
            .collect()
    }

    pub fn is_aligned(&self) -> bool {
        self.mismatches().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dates(n: usize) -> Vec<String> {
        (1..=n).map(|d| format!("2023-05-{d:02}")).collect()
    }

    #[test]
    fn test_aligned_series() {
        let series = ChartSeries::new(dates(3))
            .with_metric(MetricSeries::new("height", vec![1.0, 2.0, 3.0], "green"))
            .with_metric(MetricSeries::new("width", vec![0.5, 0.7, 0.9], "blue"));
        assert!(series.is_aligned());
    }

    #[test]
    fn test_mismatch_reported_per_metric() {
        let series = ChartSeries::new(dates(3))
            .with_metric(MetricSeries::new("height", vec![1.0, 2.0, 3.0], "green"))
            .with_metric(MetricSeries::new("width", vec![0.5], "blue"));
        assert_eq!(
            series.mismatches(),
            vec![LengthMismatch { metric: "width".to_string(), expected: 3, found: 1 }]
        );
    }
}
