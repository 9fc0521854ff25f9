//! Exact reflective-symmetry detection for 2D scatterplots.
//!
//! Points and lines carry arbitrary-precision decimals; every comparison goes
//! through `GeomCfg::normalize` so repeating-fraction noise cannot create or
//! hide a symmetry line.
//!
//! Cross-refs: `geom2` (value types, precision), `search` (candidates, verification).

mod error;
pub mod geom2;
pub mod search;

pub use error::GeomError;
pub use search::SymmetryLineFinder;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{
        draw_symmetric_scatter, MirrorAxis, ReplayToken, ScatterCfg, SymmetricScatter,
    };
    pub use crate::geom2::{BisectionPoint, GeomCfg, Line, LineForm, Point};
    pub use crate::search::{CandidateLines, SymmetryLineFinder};
    pub use crate::GeomError;
    pub use bigdecimal::BigDecimal;
}
