//! Chart.js configuration objects
//!
//! Serialises to the object literal the charting library's constructor
//! takes: `new Chart(canvasId, config)`.

use serde::Serialize;

use super::series::{ChartSeries, MetricSeries};
use crate::config::ChartTheme;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub data: Vec<f64>,
    pub label: String,
    pub border_color: String,
    pub fill: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOptions {
    pub legend: Legend,
    pub scales: Scales,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub display: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scales {
    pub y_axes: Vec<Axis>,
    pub x_axes: Vec<Axis>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub ticks: Ticks,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticks {
    pub font_color: String,
}

impl ChartConfig {
    /// Line chart with one unfilled dataset per metric and a legend
    pub fn line(series: &ChartSeries, theme: &ChartTheme) -> Self {
        let axis = || Axis {
            ticks: Ticks { font_color: theme.tick_color.clone() },
        };
        Self {
            kind: "line",
            data: ChartData {
                labels: series.labels.clone(),
                datasets: series.metrics.iter().map(Dataset::from).collect(),
            },
            options: ChartOptions {
                legend: Legend { display: true },
                scales: Scales {
                    y_axes: vec![axis()],
                    x_axes: vec![axis()],
                },
            },
        }
    }
}

impl From<&MetricSeries> for Dataset {
    fn from(metric: &MetricSeries) -> Self {
        Self {
            data: metric.values.clone(),
            label: metric.label.clone(),
            border_color: metric.color.clone(),
            fill: false,
        }
    }
}

/// Height and width over time
pub fn growth_series(dates: Vec<String>, heights: Vec<f64>, widths: Vec<f64>, theme: &ChartTheme) -> ChartSeries {
    ChartSeries::new(dates)
        .with_metric(MetricSeries::new("height", heights, &theme.height_color))
        .with_metric(MetricSeries::new("width", widths, &theme.width_color))
}

/// Health rating over time
pub fn health_series(dates: Vec<String>, healths: Vec<f64>, theme: &ChartTheme) -> ChartSeries {
    ChartSeries::new(dates).with_metric(MetricSeries::new("health", healths, &theme.health_color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_growth_chart_shape() {
        let theme = ChartTheme::default();
        let series = growth_series(
            vec!["2023-01-01".into(), "2023-02-01".into()],
            vec![10.0, 12.5],
            vec![4.0, 4.5],
            &theme,
        );
        let value = serde_json::to_value(ChartConfig::line(&series, &theme)).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "line",
                "data": {
                    "labels": ["2023-01-01", "2023-02-01"],
                    "datasets": [
                        {"data": [10.0, 12.5], "label": "height", "borderColor": "green", "fill": false},
                        {"data": [4.0, 4.5], "label": "width", "borderColor": "blue", "fill": false}
                    ]
                },
                "options": {
                    "legend": {"display": true},
                    "scales": {
                        "yAxes": [{"ticks": {"fontColor": "rgba(102,204,224,100)"}}],
                        "xAxes": [{"ticks": {"fontColor": "rgba(102,204,224,100)"}}]
                    }
                }
            })
        );
    }

    #[test]
    fn test_health_chart_single_red_dataset() {
        let theme = ChartTheme::default();
        let series = health_series(vec!["2023-01-01".into()], vec![4.0], &theme);
        let config = ChartConfig::line(&series, &theme);
        assert_eq!(config.data.datasets.len(), 1);
        assert_eq!(config.data.datasets[0].label, "health");
        assert_eq!(config.data.datasets[0].border_color, "red");
    }

    #[test]
    fn test_theme_overrides_tick_color() {
        let theme = ChartTheme { tick_color: "#333".to_string(), ..Default::default() };
        let series = health_series(vec![], vec![], &theme);
        let config = ChartConfig::line(&series, &theme);
        assert_eq!(config.options.scales.x_axes[0].ticks.font_color, "#333");
        assert!(config.data.labels.is_empty());
    }
}
