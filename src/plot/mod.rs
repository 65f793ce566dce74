//! This module contains the sinks that visualize a posterior.

pub mod terminal;

pub use terminal::TerminalPlot;

use crate::estimator::Posterior;
use std::io;

/// Controls how a chart is drawn. The sink gets the config on every call, so
/// there is no global plotting state.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// The width of the drawing area, in character cells.
    pub width: usize,
    /// The height of the drawing area, in character cells.
    pub height: usize,
    /// The symbol drawn at each data point.
    pub marker: char,
    /// The symbol used for the line that connects the data points.
    pub line: char,
    /// Draw a light grid behind the series.
    pub grid_lines: bool,
    pub x_label: String,
    pub y_label: String,
}

impl RenderConfig {
    /// Returns the number of usable columns (at least two).
    pub fn columns(&self) -> usize {
        self.width.max(2)
    }

    /// Returns the number of usable rows (at least two).
    pub fn rows(&self) -> usize {
        self.height.max(2)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 60,
            height: 20,
            marker: 'o',
            line: '.',
            grid_lines: true,
            x_label: String::from("Probability of Water"),
            y_label: String::from("Posterior Probability"),
        }
    }
}

/// A series of (x, y) points and the text that describes them.
#[derive(Debug, Clone)]
pub struct Plot<'a> {
    xs: &'a [f64],
    ys: &'a [f64],
    title: String,
    prior: &'a str,
}

impl<'a> Plot<'a> {
    pub fn new(
        xs: &'a [f64],
        ys: &'a [f64],
        title: String,
        prior: &'a str,
    ) -> Self {
        assert_eq!(xs.len(), ys.len(), "Mismatched series");
        Self {
            xs,
            ys,
            title,
            prior,
        }
    }

    /// Creates a plot of the posterior mass over the grid.
    pub fn from_posterior(posterior: &'a Posterior) -> Self {
        let title = format!(
            "Posterior Probability of Water based on {} using a {} prior",
            posterior.observations().as_str(),
            posterior.prior_name()
        );
        Self::new(
            posterior.grid(),
            posterior.posterior(),
            title,
            posterior.prior_name(),
        )
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn prior(&self) -> &str {
        self.prior
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }
}

/// A trait that defines the interface for drawing a series.
pub trait PlotSink {
    /// Draw 'plot' using the settings in 'config'.
    fn render(&mut self, plot: &Plot<'_>, config: &RenderConfig)
        -> io::Result<()>;
}

/// A series that was handed to a `RecordingSink`.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedPlot {
    pub title: String,
    pub prior: String,
    pub points: Vec<(f64, f64)>,
}

/// A sink that keeps the series it receives instead of drawing them.
#[derive(Debug, Default)]
pub struct RecordingSink {
    plots: Vec<RecordedPlot>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plots(&self) -> &[RecordedPlot] {
        &self.plots
    }
}

impl PlotSink for RecordingSink {
    fn render(
        &mut self,
        plot: &Plot<'_>,
        _config: &RenderConfig,
    ) -> io::Result<()> {
        self.plots.push(RecordedPlot {
            title: plot.title().to_string(),
            prior: plot.prior().to_string(),
            points: plot.points().collect(),
        });
        Ok(())
    }
}
