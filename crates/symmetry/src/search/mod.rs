//! Reflective symmetry lines of a finite point set.
//!
//! Purpose
//! - Enumerate candidate lines through the centroid (pair midpoints, then
//!   vertices) and verify each one by folding the whole set across it.
//!
//! Pipeline
//! - `SymmetryLineFinder::new`: dedup points, compute centroid.
//! - `candidate_symmetry_lines`: lazy `CandidateLines`, deduplicated.
//! - `find_all`: `(is_symmetry_line, line)` per candidate; `find`: the true ones.
//!
//! Cost is O(n²) candidates × O(n²) fold checks, fine for a few hundred points.
//!
//! Code cross-refs: `geom2::{Line::is_symmetry_line, Line::from_points, BisectionPoint}`

mod candidates;
mod finder;

pub use candidates::CandidateLines;
pub use finder::{SymmetryLineFinder, MIN_POINTS};
