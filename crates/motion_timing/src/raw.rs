//! Fixed-layout representation of motion values
//!
//! Interchange partners that predate [`MotionCurve`] describe a curve as a
//! tag plus four floats, and a timing as `(delay, duration, curve)`. The
//! types here keep exactly that layout (`#[repr(C)]`) and convert losslessly
//! to and from the typed values for every slot that carries meaning.

use crate::curve::{MotionCurve, MotionCurveType};
use crate::error::MotionError;
use crate::timing::MotionTiming;

/// Slot positions of a bezier curve's control points in [`RawMotionCurve::data`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(usize)]
pub enum BezierDataIndex {
    P1X = 0,
    P1Y = 1,
    P2X = 2,
    P2Y = 3,
}

/// Slot positions of a spring's parameters in [`RawMotionCurve::data`].
///
/// The fourth slot is reserved: written as `0.0`, ignored when read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(usize)]
pub enum SpringDataIndex {
    Mass = 0,
    Tension = 1,
    Friction = 2,
}

/// A motion curve as `(tag, [f64; 4])`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct RawMotionCurve {
    /// Defines how to interpret `data`.
    pub curve_type: MotionCurveType,
    /// Curve parameters, see [`BezierDataIndex`] and [`SpringDataIndex`].
    pub data: [f64; 4],
}

impl RawMotionCurve {
    pub const fn new(curve_type: MotionCurveType, data: [f64; 4]) -> Self {
        Self { curve_type, data }
    }

    /// Build a raw curve from an ordinal-serialized tag.
    pub fn from_parts(ordinal: u32, data: [f64; 4]) -> Result<Self, MotionError> {
        let curve_type = MotionCurveType::from_ordinal(ordinal)?;
        Ok(Self { curve_type, data })
    }

    #[inline]
    fn bezier(&self, index: BezierDataIndex) -> f64 {
        self.data[index as usize]
    }

    #[inline]
    fn spring(&self, index: SpringDataIndex) -> f64 {
        self.data[index as usize]
    }
}

impl From<MotionCurve> for RawMotionCurve {
    fn from(curve: MotionCurve) -> Self {
        let mut data = [0.0; 4];
        match curve {
            MotionCurve::Instant | MotionCurve::Default => {}
            MotionCurve::Bezier { p1x, p1y, p2x, p2y } => {
                data[BezierDataIndex::P1X as usize] = p1x;
                data[BezierDataIndex::P1Y as usize] = p1y;
                data[BezierDataIndex::P2X as usize] = p2x;
                data[BezierDataIndex::P2Y as usize] = p2y;
            }
            MotionCurve::Spring {
                mass,
                tension,
                friction,
            } => {
                data[SpringDataIndex::Mass as usize] = mass;
                data[SpringDataIndex::Tension as usize] = tension;
                data[SpringDataIndex::Friction as usize] = friction;
            }
        }
        Self {
            curve_type: curve.curve_type(),
            data,
        }
    }
}

impl From<RawMotionCurve> for MotionCurve {
    fn from(raw: RawMotionCurve) -> Self {
        match raw.curve_type {
            MotionCurveType::Instant => MotionCurve::Instant,
            MotionCurveType::Bezier => MotionCurve::bezier(
                raw.bezier(BezierDataIndex::P1X),
                raw.bezier(BezierDataIndex::P1Y),
                raw.bezier(BezierDataIndex::P2X),
                raw.bezier(BezierDataIndex::P2Y),
            ),
            MotionCurveType::Spring => MotionCurve::spring(
                raw.spring(SpringDataIndex::Mass),
                raw.spring(SpringDataIndex::Tension),
                raw.spring(SpringDataIndex::Friction),
            ),
            MotionCurveType::Default => MotionCurve::Default,
        }
    }
}

/// A motion timing as `(delay, duration, curve)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct RawMotionTiming {
    pub delay: f64,
    pub duration: f64,
    pub curve: RawMotionCurve,
}

impl From<MotionTiming> for RawMotionTiming {
    fn from(timing: MotionTiming) -> Self {
        Self {
            delay: timing.delay,
            duration: timing.duration,
            curve: timing.curve.into(),
        }
    }
}

impl From<RawMotionTiming> for MotionTiming {
    fn from(raw: RawMotionTiming) -> Self {
        Self {
            delay: raw.delay,
            duration: raw.duration,
            curve: raw.curve.into(),
        }
    }
}
