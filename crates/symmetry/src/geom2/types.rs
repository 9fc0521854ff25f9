//! Point value types compared through `GeomCfg::normalize`.
//!
//! - `Point`: immutable `(x, y)`; Eq/Hash on the normalized pair.
//! - `BisectionPoint`: midpoint of two points, keeping its parents for display.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;

use bigdecimal::BigDecimal;

use super::cfg::GeomCfg;
use crate::error::GeomError;

/// Two-dimensional point with exact decimal coordinates.
///
/// Raw coordinates are kept as given (never re-rounded). The normalized pair is
/// computed once at construction and is the only thing equality and hashing see.
#[derive(Clone, Debug)]
pub struct Point {
    x: BigDecimal,
    y: BigDecimal,
    key: (BigDecimal, BigDecimal),
}

impl Point {
    pub fn new(x: impl Into<BigDecimal>, y: impl Into<BigDecimal>, cfg: &GeomCfg) -> Self {
        let (x, y) = (x.into(), y.into());
        let key = (cfg.normalize(&x), cfg.normalize(&y));
        Self { x, y, key }
    }

    /// Point from two decimal literals.
    pub fn parse(x: &str, y: &str, cfg: &GeomCfg) -> Result<Self, GeomError> {
        Ok(Self::new(GeomCfg::parse(x)?, GeomCfg::parse(y)?, cfg))
    }

    #[inline]
    pub fn x(&self) -> &BigDecimal {
        &self.x
    }

    #[inline]
    pub fn y(&self) -> &BigDecimal {
        &self.y
    }

    /// Normalized `(x, y)` used for comparisons.
    #[inline]
    pub fn normalized(&self) -> (&BigDecimal, &BigDecimal) {
        (&self.key.0, &self.key.1)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}
impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point(x={},y={})", self.key.0, self.key.1)
    }
}

/// Midpoint of `p0` and `p1`.
#[derive(Clone, Debug)]
pub struct BisectionPoint {
    point: Point,
    parents: (Point, Point),
}

impl BisectionPoint {
    pub fn new(p0: &Point, p1: &Point, cfg: &GeomCfg) -> Self {
        let two = BigDecimal::from(2);
        let half_way = |a: &BigDecimal, b: &BigDecimal| {
            cfg.add(&cfg.div(&cfg.sub(b, a), &two), a)
        };
        let point = Point::new(half_way(&p0.x, &p1.x), half_way(&p0.y, &p1.y), cfg);
        Self {
            point,
            parents: (p0.clone(), p1.clone()),
        }
    }

    #[inline]
    pub fn point(&self) -> &Point {
        &self.point
    }

    #[inline]
    pub fn into_point(self) -> Point {
        self.point
    }

    #[inline]
    pub fn parents(&self) -> (&Point, &Point) {
        (&self.parents.0, &self.parents.1)
    }
}

impl Deref for BisectionPoint {
    type Target = Point;
    fn deref(&self) -> &Point {
        &self.point
    }
}

// Parents are diagnostic only and take no part in equality.
impl PartialEq for BisectionPoint {
    fn eq(&self, other: &Self) -> bool {
        self.point == other.point
    }
}
impl Eq for BisectionPoint {}

impl PartialEq<Point> for BisectionPoint {
    fn eq(&self, other: &Point) -> bool {
        &self.point == other
    }
}

impl PartialEq<BisectionPoint> for Point {
    fn eq(&self, other: &BisectionPoint) -> bool {
        self == &other.point
    }
}

impl Hash for BisectionPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.point.hash(state);
    }
}

impl fmt::Display for BisectionPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (nx, ny) = self.point.normalized();
        write!(
            f,
            "BisectionPoint(x={},y={})[{},{}]",
            nx, ny, self.parents.0, self.parents.1
        )
    }
}
