use std::collections::HashSet;

use bigdecimal::BigDecimal;
use tracing::debug;

use super::candidates::CandidateLines;
use crate::error::GeomError;
use crate::geom2::{GeomCfg, Line, Point};

/// Minimum number of distinct points for a symmetry search.
pub const MIN_POINTS: usize = 3;

/// Symmetry-line search over a fixed, deduplicated point set.
///
/// The point set and centroid are fixed at construction. Each call to
/// `candidate_symmetry_lines`, `find_all` or `find` starts a fresh
/// deterministic pass.
#[derive(Clone, Debug)]
pub struct SymmetryLineFinder {
    points: Vec<Point>,
    centroid: Point,
    cfg: GeomCfg,
}

impl SymmetryLineFinder {
    /// Deduplicates `points` (first occurrence wins, order kept).
    ///
    /// Errors with `GeomError::TooFewPoints` if fewer than 3 distinct points remain.
    pub fn new(points: impl IntoIterator<Item = Point>, cfg: &GeomCfg) -> Result<Self, GeomError> {
        let mut seen = HashSet::new();
        let mut supplied = 0usize;
        let points: Vec<Point> = points
            .into_iter()
            .inspect(|_| supplied += 1)
            .filter(|p| seen.insert(p.clone()))
            .collect();
        if points.len() < MIN_POINTS {
            return Err(GeomError::TooFewPoints {
                distinct: points.len(),
                supplied,
            });
        }
        let centroid = centroid_of(&points, cfg);
        debug!(
            points = points.len(),
            supplied,
            centroid = %centroid,
            "symmetry finder ready"
        );
        Ok(Self {
            points,
            centroid,
            cfg: *cfg,
        })
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn cfg(&self) -> &GeomCfg {
        &self.cfg
    }

    /// Arithmetic mean of the point coordinates.
    #[inline]
    pub fn centroid(&self) -> &Point {
        &self.centroid
    }

    /// Distinct lines through the centroid and each pair midpoint, then each vertex.
    pub fn candidate_symmetry_lines(&self) -> CandidateLines<'_> {
        CandidateLines::new(&self.points, &self.centroid, &self.cfg)
    }

    /// Every candidate tagged with whether it is a symmetry line, in candidate order.
    pub fn find_all(&self) -> impl Iterator<Item = (bool, Line)> + '_ {
        self.candidate_symmetry_lines().map(move |line| {
            let is_symmetry = line.is_symmetry_line(&self.points, &self.cfg);
            debug!(line = %line, is_symmetry, "candidate verified");
            (is_symmetry, line)
        })
    }

    /// Only the symmetry lines.
    pub fn find(&self) -> impl Iterator<Item = Line> + '_ {
        self.find_all()
            .filter_map(|(is_symmetry, line)| is_symmetry.then_some(line))
    }
}

fn centroid_of(points: &[Point], cfg: &GeomCfg) -> Point {
    let n = BigDecimal::from(points.len() as u64);
    let x = cfg.div(&cfg.sum(points.iter().map(Point::x)), &n);
    let y = cfg.div(&cfg.sum(points.iter().map(Point::y)), &n);
    Point::new(x, y, cfg)
}
