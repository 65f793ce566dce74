//! Errors that can be reported by the estimator.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PosteriorError {
    /// The prior family name is not one of the supported kinds.
    #[error(
        "Invalid prior_type '{0}'. Please choose either 'uniform' or 'step'."
    )]
    InvalidPriorKind(String),

    /// The grid must contain at least one point.
    #[error("The grid must contain at least one point")]
    EmptyGrid,
}
