//! Runs the grid approximation exercises and draws each posterior in the
//! terminal.

extern crate env_logger;
extern crate log;

use grid_posterior::plot::{Plot, PlotSink, RenderConfig, TerminalPlot};
use grid_posterior::{estimate, DEFAULT_GRID_SIZE};
use std::time::Instant;

/// The (prior, observations) pairs that are evaluated.
const EXERCISES: [(&str, &str); 6] = [
    ("uniform", "WWW"),
    ("uniform", "WWWL"),
    ("uniform", "LWWLWWW"),
    ("step", "WWW"),
    ("step", "WWWL"),
    ("step", "LWWLWWW"),
];

/// A scoped utility struct for measuring and reporting time.
struct Timer {
    start: std::time::Instant,
}

impl Timer {
    fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        let now = Instant::now();
        if let Some(duration) = now.checked_duration_since(self.start) {
            log::info!(
                "Exercises completed in {:03} seconds",
                duration.as_secs_f32()
            );
        }
    }
}

fn main() {
    env_logger::builder().format_timestamp(None).init();

    let config = RenderConfig::default();
    let mut sink = TerminalPlot::stdout();
    let x = Timer::new();

    for (prior, data) in EXERCISES {
        let posterior = match estimate(prior, data, DEFAULT_GRID_SIZE) {
            Ok(posterior) => posterior,
            Err(err) => {
                log::error!("{}", err);
                continue;
            }
        };

        match (posterior.map(), posterior.mean()) {
            (Some(map), Some(mean)) => log::info!(
                "{} prior on '{}': MAP {:.3}, mean {:.3}.",
                prior,
                data,
                map,
                mean
            ),
            _ => log::warn!("{} prior on '{}' is degenerate.", prior, data),
        }

        let plot = Plot::from_posterior(&posterior);
        if let Err(err) = sink.render(&plot, &config) {
            log::error!("Could not draw the plot: {}", err);
            return;
        }
        println!();
    }

    drop(x);
}
