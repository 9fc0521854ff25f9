//! Candidate symmetry lines through the centroid.
//!
//! Every line of symmetry passes through the centroid, so the search is over
//! the 1-parameter family of lines through it. Each pair midpoint and each
//! vertex picks one member of that family.

use std::collections::HashSet;

use tracing::debug;

use super::finder::MIN_POINTS;
use crate::geom2::{BisectionPoint, GeomCfg, Line, Point};

#[derive(Clone, Copy, Debug)]
enum Cursor {
    /// Next unordered pair `(i0, i1)`, `i0 < i1`.
    Pair(usize, usize),
    /// Next vertex index.
    Vertex(usize),
    Done,
}

/// Lazy, single-pass stream of distinct candidate lines.
///
/// Order: all centroid→midpoint lines in index-pair order, then all
/// centroid→vertex lines in point order. A line equal to one already emitted
/// is skipped.
#[derive(Clone, Debug)]
pub struct CandidateLines<'a> {
    points: &'a [Point],
    centroid: &'a Point,
    cfg: GeomCfg,
    cursor: Cursor,
    visited: HashSet<Line>,
}

impl<'a> CandidateLines<'a> {
    pub(crate) fn new(points: &'a [Point], centroid: &'a Point, cfg: &GeomCfg) -> Self {
        let cursor = if points.len() < MIN_POINTS {
            Cursor::Done
        } else {
            Cursor::Pair(0, 1)
        };
        Self {
            points,
            centroid,
            cfg: *cfg,
            cursor,
            visited: HashSet::new(),
        }
    }

    /// Next raw candidate (before dedup), advancing the cursor.
    fn advance(&mut self) -> Option<Line> {
        let n = self.points.len();
        match self.cursor {
            Cursor::Pair(i0, i1) => {
                self.cursor = if i1 + 1 < n {
                    Cursor::Pair(i0, i1 + 1)
                } else if i0 + 2 < n {
                    Cursor::Pair(i0 + 1, i0 + 2)
                } else {
                    Cursor::Vertex(0)
                };
                let b = BisectionPoint::new(&self.points[i0], &self.points[i1], &self.cfg);
                let line = Line::from_points(self.centroid, &b, &self.cfg);
                debug!(i0, i1, bisection = %b, line = %line, "centroid-bisection candidate");
                Some(line)
            }
            Cursor::Vertex(i) => {
                self.cursor = if i + 1 < n {
                    Cursor::Vertex(i + 1)
                } else {
                    Cursor::Done
                };
                let line = Line::from_points(self.centroid, &self.points[i], &self.cfg);
                debug!(i, vertex = %self.points[i], line = %line, "centroid-vertex candidate");
                Some(line)
            }
            Cursor::Done => None,
        }
    }
}

impl Iterator for CandidateLines<'_> {
    type Item = Line;

    fn next(&mut self) -> Option<Line> {
        while let Some(line) = self.advance() {
            if self.visited.insert(line.clone()) {
                return Some(line);
            }
        }
        None
    }
}
