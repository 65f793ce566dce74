pub mod error;
pub mod estimator;
pub mod grid;
pub mod observations;
pub mod plot;
pub mod prior;

pub use error::PosteriorError;
pub use estimator::{
    estimate, estimate_default, estimate_with, estimate_with_prior, Posterior,
    DEFAULT_GRID_SIZE,
};
pub use observations::Observations;
pub use prior::PriorKind;

/// A trait that defines the interface for a prior over the probability of a
/// success.
pub trait Prior {
    /// Return the (unnormalized, non-negative) weight of the parameter value
    /// 'p', where 'p' is in [0, 1].
    #[must_use]
    fn weight(&self, p: f64) -> f64;

    /// The name of the prior family, used in titles and logs.
    fn name(&self) -> &str;
}
