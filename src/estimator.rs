//! Grid approximation of the posterior over the probability of a success.
//!
//! The posterior is evaluated on a fixed grid of parameter values. Each point
//! gets the product of its prior weight and the likelihood of the
//! observations, and the products are scaled to sum to one.

use crate::error::PosteriorError;
use crate::grid::linspace;
use crate::observations::Observations;
use crate::prior::{prior_vector, PriorKind};
use crate::Prior;

/// The number of grid points used when the caller doesn't pick one.
pub const DEFAULT_GRID_SIZE: usize = 20;

/// A discrete posterior distribution, together with the vectors that were
/// used to build it.
#[derive(Debug, Clone)]
pub struct Posterior {
    /// The name of the prior family.
    prior_name: String,
    observations: Observations,
    grid: Vec<f64>,
    prior: Vec<f64>,
    likelihood: Vec<f64>,
    posterior: Vec<f64>,
    /// The sum of the products before normalization.
    evidence: f64,
}

impl Posterior {
    pub fn prior_name(&self) -> &str {
        &self.prior_name
    }

    pub fn observations(&self) -> &Observations {
        &self.observations
    }

    pub fn grid(&self) -> &[f64] {
        &self.grid
    }

    pub fn prior(&self) -> &[f64] {
        &self.prior
    }

    pub fn likelihood(&self) -> &[f64] {
        &self.likelihood
    }

    pub fn posterior(&self) -> &[f64] {
        &self.posterior
    }

    /// Returns the unnormalized sum of prior times likelihood.
    pub fn evidence(&self) -> f64 {
        self.evidence
    }

    /// Returns the (x, y) pairs of the distribution, in grid order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.grid.iter().copied().zip(self.posterior.iter().copied())
    }

    /// Returns true if the prior and the likelihood don't overlap, which
    /// leaves nothing to normalize. The entries of such a posterior are NaN.
    pub fn is_degenerate(&self) -> bool {
        self.evidence == 0. || !self.evidence.is_finite()
    }

    /// Returns the grid value with the highest posterior mass (the first one
    /// if there are several), or None if the posterior is degenerate.
    pub fn map(&self) -> Option<f64> {
        if self.is_degenerate() {
            return None;
        }

        let mut best: Option<(f64, f64)> = None;
        for (x, y) in self.points() {
            match best {
                Some((_, top)) if y <= top => {}
                _ => best = Some((x, y)),
            }
        }
        best.map(|(x, _)| x)
    }

    /// Returns the posterior mean of the parameter, or None if the posterior
    /// is degenerate.
    pub fn mean(&self) -> Option<f64> {
        if self.is_degenerate() {
            return None;
        }
        Some(self.points().map(|(x, y)| x * y).sum())
    }
}

/// Compute the posterior for the prior named 'prior_kind' ("uniform" or
/// "step"), the observation string 'observations' and a grid of 'grid_size'
/// points.
pub fn estimate(
    prior_kind: &str,
    observations: &str,
    grid_size: usize,
) -> Result<Posterior, PosteriorError> {
    let kind: PriorKind = prior_kind.parse()?;
    estimate_with(kind, &Observations::parse(observations), grid_size)
}

/// Same as `estimate`, with the default grid size.
pub fn estimate_default(
    prior_kind: &str,
    observations: &str,
) -> Result<Posterior, PosteriorError> {
    estimate(prior_kind, observations, DEFAULT_GRID_SIZE)
}

/// Compute the posterior for one of the named prior families.
pub fn estimate_with(
    kind: PriorKind,
    observations: &Observations,
    grid_size: usize,
) -> Result<Posterior, PosteriorError> {
    estimate_with_prior(&kind, observations, grid_size)
}

/// Compute the posterior for any prior 'prior'.
pub fn estimate_with_prior<P: Prior + ?Sized>(
    prior: &P,
    observations: &Observations,
    grid_size: usize,
) -> Result<Posterior, PosteriorError> {
    if grid_size == 0 {
        return Err(PosteriorError::EmptyGrid);
    }

    log::debug!(
        "Estimating '{}' with {} successes and {} failures on {} points",
        observations.as_str(),
        observations.successes(),
        observations.failures(),
        grid_size
    );

    let grid = linspace(grid_size);
    let weights = prior_vector(prior, &grid);
    let likelihood: Vec<f64> =
        grid.iter().map(|p| observations.likelihood(*p)).collect();

    let unnormalized: Vec<f64> = likelihood
        .iter()
        .zip(weights.iter())
        .map(|(l, w)| l * w)
        .collect();
    let evidence: f64 = unnormalized.iter().sum();
    log::debug!("Unnormalized posterior sums to {}", evidence);

    // A zero sum is divided through anyway, which turns every entry to NaN.
    if evidence == 0. {
        log::warn!(
            "The {} prior has no overlap with the likelihood of '{}'",
            prior.name(),
            observations.as_str()
        );
    }
    let posterior = unnormalized.iter().map(|v| v / evidence).collect();

    Ok(Posterior {
        prior_name: prior.name().to_string(),
        observations: observations.clone(),
        grid,
        prior: weights,
        likelihood,
        posterior,
        evidence,
    })
}
