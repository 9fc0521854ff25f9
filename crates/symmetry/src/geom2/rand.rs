//! Random scatterplots with a known mirror axis (replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler of point sets that are symmetric
//!   across a chosen axis, used by property tests and benchmarks.
//!
//! Model
//! - Draw integer points in `[-extent, extent]²` and add each one's reflection
//!   across the axis; optionally add points lying on the axis itself. Integer
//!   reflections keep every coordinate exact.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::{cfg::GeomCfg, line::Line, types::Point};

/// Axis family; the offset `c` is drawn per sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MirrorAxis {
    /// `x = c`
    Vertical,
    /// `y = c`
    Horizontal,
    /// `y = x + c`
    Diagonal,
    /// `y = -x + c`
    AntiDiagonal,
}

impl MirrorAxis {
    pub const ALL: [MirrorAxis; 4] = [
        MirrorAxis::Vertical,
        MirrorAxis::Horizontal,
        MirrorAxis::Diagonal,
        MirrorAxis::AntiDiagonal,
    ];

    #[inline]
    fn reflect(self, c: i64, (x, y): (i64, i64)) -> (i64, i64) {
        match self {
            MirrorAxis::Vertical => (2 * c - x, y),
            MirrorAxis::Horizontal => (x, 2 * c - y),
            MirrorAxis::Diagonal => (y - c, x + c),
            MirrorAxis::AntiDiagonal => (c - y, c - x),
        }
    }

    #[inline]
    fn on_axis(self, c: i64, t: i64) -> (i64, i64) {
        match self {
            MirrorAxis::Vertical => (c, t),
            MirrorAxis::Horizontal => (t, c),
            MirrorAxis::Diagonal => (t, t + c),
            MirrorAxis::AntiDiagonal => (t, c - t),
        }
    }

    fn line(self, c: i64, geom: &GeomCfg) -> Line {
        match self {
            MirrorAxis::Vertical => Line::vertical(c, geom),
            MirrorAxis::Horizontal => Line::sloped(0, c, geom),
            MirrorAxis::Diagonal => Line::sloped(1, c, geom),
            MirrorAxis::AntiDiagonal => Line::sloped(-1, c, geom),
        }
    }
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct ScatterCfg {
    /// Number of mirrored pairs drawn (duplicates are dropped afterwards).
    pub pairs: usize,
    /// Number of extra points drawn on the axis.
    pub on_axis: usize,
    /// Coordinate range of the drawn points. Clamped to at least 1.
    pub extent: i64,
    pub axis: MirrorAxis,
}

impl Default for ScatterCfg {
    fn default() -> Self {
        Self {
            pairs: 4,
            on_axis: 1,
            extent: 50,
            axis: MirrorAxis::Vertical,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// A drawn point set together with the axis it was mirrored across.
#[derive(Clone, Debug)]
pub struct SymmetricScatter {
    pub points: Vec<Point>,
    pub axis: Line,
}

/// Draw a scatterplot that is mirror-symmetric across an axis of `cfg.axis` family.
///
/// Points are distinct and shuffled. Returns `None` if fewer than 3 distinct
/// points come out (e.g. `pairs == 1` with nothing on the axis).
pub fn draw_symmetric_scatter(
    cfg: ScatterCfg,
    tok: ReplayToken,
    geom: &GeomCfg,
) -> Option<SymmetricScatter> {
    let mut rng = tok.to_std_rng();
    let extent = cfg.extent.max(1);
    let c = rng.gen_range(-extent / 2..=extent / 2);
    let mut coords: Vec<(i64, i64)> = Vec::with_capacity(2 * cfg.pairs + cfg.on_axis);
    for _ in 0..cfg.pairs {
        let p = (
            rng.gen_range(-extent..=extent),
            rng.gen_range(-extent..=extent),
        );
        coords.push(p);
        coords.push(cfg.axis.reflect(c, p));
    }
    for _ in 0..cfg.on_axis {
        let t = rng.gen_range(-extent..=extent);
        coords.push(cfg.axis.on_axis(c, t));
    }
    let mut seen = HashSet::with_capacity(coords.len());
    coords.retain(|p| seen.insert(*p));
    if coords.len() < 3 {
        return None;
    }
    coords.shuffle(&mut rng);
    let points = coords
        .into_iter()
        .map(|(x, y)| Point::new(x, y, geom))
        .collect();
    Some(SymmetricScatter {
        points,
        axis: cfg.axis.line(c, geom),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draw() {
        let geom = GeomCfg::default();
        let cfg = ScatterCfg {
            pairs: 6,
            on_axis: 2,
            extent: 20,
            axis: MirrorAxis::Diagonal,
        };
        let tok = ReplayToken { seed: 42, index: 7 };
        let a = draw_symmetric_scatter(cfg, tok, &geom).expect("scatter");
        let b = draw_symmetric_scatter(cfg, tok, &geom).expect("scatter");
        assert_eq!(a.points, b.points);
        assert_eq!(a.axis, b.axis);
        let other = draw_symmetric_scatter(cfg, ReplayToken { seed: 42, index: 8 }, &geom)
            .expect("scatter");
        assert_ne!(a.points, other.points);
    }

    #[test]
    fn reflections_stay_in_the_set() {
        let geom = GeomCfg::new(20).unwrap();
        for (k, axis) in MirrorAxis::ALL.into_iter().enumerate() {
            let cfg = ScatterCfg {
                axis,
                ..ScatterCfg::default()
            };
            let tok = ReplayToken {
                seed: 3,
                index: k as u64,
            };
            let s = draw_symmetric_scatter(cfg, tok, &geom).expect("scatter");
            for p in &s.points {
                let f = s.axis.folded_point(p, &geom);
                assert!(s.points.contains(&f), "{axis:?}: {p} folds to {f}");
            }
            assert!(s.axis.is_symmetry_line(&s.points, &geom));
        }
    }

    #[test]
    fn too_few_points_is_none() {
        let geom = GeomCfg::default();
        let cfg = ScatterCfg {
            pairs: 1,
            on_axis: 0,
            ..ScatterCfg::default()
        };
        assert!(draw_symmetric_scatter(cfg, ReplayToken { seed: 1, index: 0 }, &geom).is_none());
    }
}
