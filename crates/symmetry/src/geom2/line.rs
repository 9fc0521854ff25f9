//! Lines in slope-intercept form or vertical, with reflection ("folding").
//!
//! References
//! - Reflection via the perpendicular foot: https://math.stackexchange.com/a/2325304
//! - Code cross-refs: `types::Point`, `cfg::GeomCfg`, `search::SymmetryLineFinder`

use std::fmt;
use std::hash::{Hash, Hasher};

use bigdecimal::BigDecimal;
use num_traits::{One, Zero};
use tracing::trace;

use super::cfg::GeomCfg;
use super::types::Point;

/// Geometric description of a line.
#[derive(Clone, Debug)]
pub enum LineForm {
    /// `y = slope·x + intercept`.
    Sloped {
        slope: BigDecimal,
        intercept: BigDecimal,
    },
    /// `x = x`.
    Vertical { x: BigDecimal },
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum LineKey {
    Sloped(BigDecimal, BigDecimal),
    Vertical(BigDecimal),
}

/// Immutable 2D line; Eq/Hash on the normalized form.
#[derive(Clone, Debug)]
pub struct Line {
    form: LineForm,
    key: LineKey,
}

impl Line {
    pub fn sloped(
        slope: impl Into<BigDecimal>,
        intercept: impl Into<BigDecimal>,
        cfg: &GeomCfg,
    ) -> Self {
        let (slope, intercept) = (slope.into(), intercept.into());
        let key = LineKey::Sloped(cfg.normalize(&slope), cfg.normalize(&intercept));
        Self {
            form: LineForm::Sloped { slope, intercept },
            key,
        }
    }

    pub fn vertical(x: impl Into<BigDecimal>, cfg: &GeomCfg) -> Self {
        let x = x.into();
        let key = LineKey::Vertical(cfg.normalize(&x));
        Self {
            form: LineForm::Vertical { x },
            key,
        }
    }

    /// Line through `p0` and `p1`; vertical iff their x coordinates are identical.
    pub fn from_points(p0: &Point, p1: &Point, cfg: &GeomCfg) -> Self {
        let den = cfg.sub(p1.x(), p0.x());
        if den.is_zero() {
            return Self::vertical(p1.x().clone(), cfg);
        }
        let slope = cfg.div(&cfg.sub(p1.y(), p0.y()), &den);
        let intercept = cfg.sub(p1.y(), &cfg.mul(&slope, p1.x()));
        Self::sloped(slope, intercept, cfg)
    }

    #[inline]
    pub fn form(&self) -> &LineForm {
        &self.form
    }

    pub fn slope(&self) -> Option<&BigDecimal> {
        match &self.form {
            LineForm::Sloped { slope, .. } => Some(slope),
            LineForm::Vertical { .. } => None,
        }
    }

    pub fn intercept(&self) -> Option<&BigDecimal> {
        match &self.form {
            LineForm::Sloped { intercept, .. } => Some(intercept),
            LineForm::Vertical { .. } => None,
        }
    }

    pub fn x(&self) -> Option<&BigDecimal> {
        match &self.form {
            LineForm::Vertical { x } => Some(x),
            LineForm::Sloped { .. } => None,
        }
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        matches!(self.form, LineForm::Vertical { .. })
    }

    /// Normalized slope is exactly zero.
    pub fn is_horizontal(&self) -> bool {
        matches!(&self.key, LineKey::Sloped(m, _) if m.is_zero())
    }

    /// `p` lies on the line (compared after normalization).
    pub fn contains_point(&self, p: &Point, cfg: &GeomCfg) -> bool {
        match &self.form {
            LineForm::Vertical { x } => cfg.normalize(p.x()) == cfg.normalize(x),
            LineForm::Sloped { slope, intercept } => {
                let y = cfg.add(&cfg.mul(p.x(), slope), intercept);
                cfg.normalize(p.y()) == cfg.normalize(&y)
            }
        }
    }

    /// Foot of the perpendicular from `p0` onto this line.
    pub fn perpendicular_intersection_point(&self, p0: &Point, cfg: &GeomCfg) -> Point {
        let (m, b) = match &self.form {
            LineForm::Vertical { x } => return Point::new(x.clone(), p0.y().clone(), cfg),
            LineForm::Sloped { slope, intercept } => (slope, intercept),
        };
        if self.is_horizontal() {
            return Point::new(p0.x().clone(), b.clone(), cfg);
        }
        // x = (m / (m² + 1)) · (y0 + x0/m − b),  y = m·x + b
        let factor = cfg.div(m, &cfg.add(&cfg.mul(m, m), &BigDecimal::one()));
        let offset = cfg.sub(&cfg.add(p0.y(), &cfg.div(p0.x(), m)), b);
        let x = cfg.mul(&factor, &offset);
        let y = cfg.add(&cfg.mul(m, &x), b);
        Point::new(x, y, cfg)
    }

    /// Mirror image of `p0` across this line.
    pub fn folded_point(&self, p0: &Point, cfg: &GeomCfg) -> Point {
        if self.contains_point(p0, cfg) {
            return p0.clone();
        }
        let foot = self.perpendicular_intersection_point(p0, cfg);
        let two = BigDecimal::from(2);
        Point::new(
            cfg.sub(&cfg.mul(&two, foot.x()), p0.x()),
            cfg.sub(&cfg.mul(&two, foot.y()), p0.y()),
            cfg,
        )
    }

    /// Whether folding `points` across this line maps every point onto a point of the set.
    ///
    /// A matched target is not consumed: two points folding onto the same third
    /// point both count as matched.
    pub fn is_symmetry_line(&self, points: &[Point], cfg: &GeomCfg) -> bool {
        trace!(line = %self, "checking symmetry");
        for (i, p) in points.iter().enumerate() {
            let folded = self.folded_point(p, cfg);
            if &folded == p {
                trace!(i, point = %p, "point lies on the line");
                continue;
            }
            match points.iter().position(|q| q == &folded) {
                Some(j) => trace!(i, j, point = %p, "folds onto another point"),
                None => {
                    trace!(i, point = %p, folded = %folded, line = %self, "not a symmetry line");
                    return false;
                }
            }
        }
        trace!(line = %self, "symmetry line");
        true
    }
}

impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}
impl Eq for Line {}

impl Hash for Line {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.key {
            LineKey::Sloped(m, b) => write!(f, "Line(m={m},b={b})"),
            LineKey::Vertical(x) => write!(f, "Line(x={x})"),
        }
    }
}
