//! Error type shared by the geometry and search modules.

use thiserror::Error;

use crate::geom2::{MAX_PRECISION, MIN_PRECISION};

/// Errors surfaced by the symmetry core.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeomError {
    #[error("cannot search symmetry lines for {distinct} distinct point(s) ({supplied} supplied); at least 3 are required")]
    TooFewPoints { distinct: usize, supplied: usize },
    #[error("malformed coordinate `{token}`")]
    MalformedCoordinate { token: String },
    #[error(
        "precision must be between {min} and {max} significant digits, got {prec}",
        min = MIN_PRECISION,
        max = MAX_PRECISION
    )]
    InvalidPrecision { prec: u64 },
}
