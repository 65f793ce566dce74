//! The families of priors that can be placed on the grid.

use crate::error::PosteriorError;
use crate::Prior;
use std::fmt;
use std::str::FromStr;

/// The location of the step in the step prior. Points below it get no weight.
pub const STEP_THRESHOLD: f64 = 0.5;

/// The prior families that the estimator knows by name.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PriorKind {
    /// Every grid point has the same weight.
    Uniform,
    /// Zero weight below one half, and a constant weight from one half on.
    Step,
}

impl PriorKind {
    /// All of the named prior families.
    pub const ALL: [PriorKind; 2] = [PriorKind::Uniform, PriorKind::Step];

    pub fn as_str(&self) -> &'static str {
        match self {
            PriorKind::Uniform => "uniform",
            PriorKind::Step => "step",
        }
    }
}

impl Prior for PriorKind {
    fn weight(&self, p: f64) -> f64 {
        match self {
            PriorKind::Uniform => 1.,
            PriorKind::Step => {
                if p < STEP_THRESHOLD {
                    0.
                } else {
                    1.
                }
            }
        }
    }

    fn name(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for PriorKind {
    type Err = PosteriorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PriorKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| PosteriorError::InvalidPriorKind(s.to_string()))
    }
}

impl fmt::Display for PriorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Evaluate the prior 'prior' at every point of 'grid'.
pub fn prior_vector<P: Prior + ?Sized>(prior: &P, grid: &[f64]) -> Vec<f64> {
    grid.iter().map(|p| prior.weight(*p)).collect()
}
