//! Growth and Health Charts
//!
//! - `series`: aligned label/value sequences
//! - `config`: Chart.js configuration objects and the two chart presets
//! - `binder`: reads page data, renders each chart present on the page

pub mod series;
pub mod config;
pub mod binder;

pub use series::{ChartSeries, LengthMismatch, MetricSeries};
pub use config::{growth_series, health_series, ChartConfig, Dataset};
pub use binder::{
    create_graphs, create_growth_chart, create_health_chart, ChartDataSource, ChartOutcome,
    ChartRenderer, RenderedCharts,
};
