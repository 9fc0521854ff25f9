//! Exact 2D geometry over arbitrary-precision decimals.
//!
//! Purpose
//! - Provide `Point`, `BisectionPoint`, and `Line` whose equality never sees
//!   raw decimals, only values normalized through `GeomCfg`.
//! - Keep every arithmetic step explicitly rounded to the working precision so
//!   results do not depend on an ambient context.
//!
//! Code cross-refs: `GeomCfg`, `Point`, `Line`, `search::SymmetryLineFinder`

pub mod cfg;
mod line;
pub mod rand;
mod types;

pub use cfg::{GeomCfg, DEFAULT_PRECISION, MAX_PRECISION, MIN_PRECISION};
pub use line::{Line, LineForm};
pub use types::{BisectionPoint, Point};
