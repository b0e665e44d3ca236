//! Chart binding
//!
//! Reads the page-global arrays, builds each chart's configuration and
//! hands it to the charting library. A chart whose canvas is not on the
//! page is skipped; the plant details page only carries the growth chart.
//!
//! Generated pages call `create_graphs()` from `onload` even though the
//! module already drew the charts at start-up. `RenderedCharts` remembers
//! which canvases hold a chart so the second call leaves them alone.

use super::config::{growth_series, health_series, ChartConfig};
use super::series::ChartSeries;
use crate::config::DomContract;
use crate::error::{Result, UiError};

/// Page-global data arrays injected by the site generator
pub trait ChartDataSource {
    /// `None` when no global of that name exists
    fn label_array(&self, name: &str) -> Result<Option<Vec<String>>>;
    fn number_array(&self, name: &str) -> Result<Option<Vec<f64>>>;
}

/// The external charting library
pub trait ChartRenderer {
    fn has_canvas(&self, canvas_id: &str) -> bool;
    fn render(&mut self, canvas_id: &str, config: &ChartConfig) -> Result<()>;
}

/// Outcome for one chart slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartOutcome {
    Rendered,
    NoCanvas,
    /// This canvas already holds a chart from an earlier call
    AlreadyRendered,
}

fn required_labels(source: &impl ChartDataSource, name: &str) -> Result<Vec<String>> {
    source
        .label_array(name)?
        .ok_or_else(|| UiError::MissingData { name: name.to_string() })
}

fn required_numbers(source: &impl ChartDataSource, name: &str) -> Result<Vec<f64>> {
    source
        .number_array(name)?
        .ok_or_else(|| UiError::MissingData { name: name.to_string() })
}

fn render_series(
    renderer: &mut impl ChartRenderer,
    canvas_id: &str,
    series: &ChartSeries,
    contract: &DomContract,
) -> Result<ChartOutcome> {
    for mismatch in series.mismatches() {
        tracing::warn!(
            "Chart {}: series '{}' has {} points, labels have {}",
            canvas_id,
            mismatch.metric,
            mismatch.found,
            mismatch.expected
        );
    }
    let config = ChartConfig::line(series, &contract.theme);
    renderer.render(canvas_id, &config)?;
    tracing::debug!("Rendered chart {} ({} labels)", canvas_id, series.labels.len());
    Ok(ChartOutcome::Rendered)
}

pub fn create_growth_chart(
    source: &impl ChartDataSource,
    renderer: &mut impl ChartRenderer,
    contract: &DomContract,
) -> Result<ChartOutcome> {
    let names = &contract.charts;
    if !renderer.has_canvas(&names.growth_canvas) {
        return Ok(ChartOutcome::NoCanvas);
    }
    let series = growth_series(
        required_labels(source, &names.growth_dates)?,
        required_numbers(source, &names.growth_heights)?,
        required_numbers(source, &names.growth_widths)?,
        &contract.theme,
    );
    render_series(renderer, &names.growth_canvas, &series, contract)
}

pub fn create_health_chart(
    source: &impl ChartDataSource,
    renderer: &mut impl ChartRenderer,
    contract: &DomContract,
) -> Result<ChartOutcome> {
    let names = &contract.charts;
    if !renderer.has_canvas(&names.health_canvas) {
        return Ok(ChartOutcome::NoCanvas);
    }
    let series = health_series(
        required_labels(source, &names.health_dates)?,
        required_numbers(source, &names.health_values)?,
        &contract.theme,
    );
    render_series(renderer, &names.health_canvas, &series, contract)
}

/// Both charts, each failing on its own
///
/// Returns the growth and health outcomes in that order. An error in one
/// chart does not stop the other from rendering.
pub fn create_graphs(
    source: &impl ChartDataSource,
    renderer: &mut impl ChartRenderer,
    contract: &DomContract,
) -> [Result<ChartOutcome>; 2] {
    let growth = create_growth_chart(source, renderer, contract);
    let health = create_health_chart(source, renderer, contract);
    [growth, health]
}

/// Charts already drawn on the current page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderedCharts {
    growth: bool,
    health: bool,
}

fn render_once(
    done: &mut bool,
    render: impl FnOnce() -> Result<ChartOutcome>,
) -> Result<ChartOutcome> {
    if *done {
        return Ok(ChartOutcome::AlreadyRendered);
    }
    let outcome = render()?;
    *done = outcome == ChartOutcome::Rendered;
    Ok(outcome)
}

impl RenderedCharts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn growth(&self) -> bool {
        self.growth
    }

    pub fn health(&self) -> bool {
        self.health
    }

    /// `create_graphs`, skipping charts drawn by an earlier call
    ///
    /// A chart that failed or had no canvas is tried again next time.
    pub fn create_graphs(
        &mut self,
        source: &impl ChartDataSource,
        renderer: &mut impl ChartRenderer,
        contract: &DomContract,
    ) -> [Result<ChartOutcome>; 2] {
        let growth = render_once(&mut self.growth, || create_growth_chart(source, &mut *renderer, contract));
        let health = render_once(&mut self.health, || create_health_chart(source, &mut *renderer, contract));
        tracing::debug!("Charts on page: growth={}, health={}", self.growth, self.health);
        [growth, health]
    }
}
