//! Motion curves
//!
//! A [`MotionCurve`] describes how a single value should change when it is
//! animated: instantly, along a cubic bezier velocity curve, with a spring
//! simulation, or with whatever default the consuming engine defines.
//!
//! Curves are plain values. Construction never fails and never validates:
//! NaN control points, negative mass and overshooting beziers are all stored
//! verbatim. Rejecting or clamping nonsensical parameters is left to the
//! engine that eventually drives the animation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::MotionError;
use crate::raw::RawMotionCurve;

/// The kind of a [`MotionCurve`], without its parameters.
///
/// The discriminants are a stable contract for consumers that serialize the
/// tag by ordinal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
#[repr(u32)]
pub enum MotionCurveType {
    /// The value is set immediately with no animation.
    Instant = 0,
    /// The value is animated along a cubic bezier modelling its velocity.
    Bezier = 1,
    /// The value is animated with a spring simulation.
    Spring = 2,
    /// The consumer's default curve is used.
    #[default]
    Default = 3,
}

impl MotionCurveType {
    /// Every curve type, in ordinal order.
    pub fn all() -> &'static [MotionCurveType] {
        const TYPES: [MotionCurveType; 4] = [
            MotionCurveType::Instant,
            MotionCurveType::Bezier,
            MotionCurveType::Spring,
            MotionCurveType::Default,
        ];
        &TYPES
    }

    /// Stable ordinal of this type.
    pub const fn ordinal(self) -> u32 {
        self as u32
    }

    /// Decode an ordinal-serialized curve type.
    pub fn from_ordinal(ordinal: u32) -> Result<Self, MotionError> {
        match ordinal {
            0 => Ok(Self::Instant),
            1 => Ok(Self::Bezier),
            2 => Ok(Self::Spring),
            3 => Ok(Self::Default),
            other => {
                tracing::debug!(ordinal = other, "rejected unknown motion curve type");
                Err(MotionError::UnknownCurveType(other))
            }
        }
    }
}

impl TryFrom<u32> for MotionCurveType {
    type Error = MotionError;

    fn try_from(ordinal: u32) -> Result<Self, Self::Error> {
        Self::from_ordinal(ordinal)
    }
}

impl From<MotionCurveType> for u32 {
    fn from(curve_type: MotionCurveType) -> Self {
        curve_type.ordinal()
    }
}

/// A generalized representation of a motion curve.
///
/// Each variant carries only the parameters that are meaningful for it.
/// Use [`MotionCurve::data`] or [`RawMotionCurve`] when the fixed
/// `(tag, [f64; 4])` layout is needed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "type", rename_all = "snake_case")
)]
pub enum MotionCurve {
    /// Set the value immediately.
    Instant,
    /// Cubic bezier with implicit endpoints `(0, 0)` and `(1, 1)`.
    ///
    /// `(p1x, p1y)` and `(p2x, p2y)` are the second and third control
    /// points. Values outside `[0, 1]` produce anticipation or overshoot.
    Bezier {
        p1x: f64,
        p1y: f64,
        p2x: f64,
        p2y: f64,
    },
    /// Damped spring. Tension and friction correspond to stiffness and
    /// damping respectively.
    Spring {
        mass: f64,
        tension: f64,
        friction: f64,
    },
    /// Defer to the default curve of whoever consumes this value.
    #[default]
    Default,
}

impl MotionCurve {
    /// Create a bezier curve from its second and third control points.
    ///
    /// The first and last control points are fixed at `(0, 0)` and
    /// `(1, 1)`, matching `CAMediaTimingFunction` and CSS `cubic-bezier()`.
    /// Every input is stored unmodified, including values outside `[0, 1]`
    /// and non-finite values.
    pub const fn bezier(p1x: f64, p1y: f64, p2x: f64, p2y: f64) -> Self {
        Self::Bezier { p1x, p1y, p2x, p2y }
    }

    /// Create a spring curve.
    ///
    /// Zero or negative mass and any other physically implausible
    /// configuration is accepted as-is.
    pub const fn spring(mass: f64, tension: f64, friction: f64) -> Self {
        Self::Spring {
            mass,
            tension,
            friction,
        }
    }

    pub const fn curve_type(&self) -> MotionCurveType {
        match self {
            Self::Instant => MotionCurveType::Instant,
            Self::Bezier { .. } => MotionCurveType::Bezier,
            Self::Spring { .. } => MotionCurveType::Spring,
            Self::Default => MotionCurveType::Default,
        }
    }

    /// The curve parameters in the fixed four-slot layout.
    ///
    /// Slots that the curve type does not use are `0.0`.
    pub fn data(&self) -> [f64; 4] {
        RawMotionCurve::from(*self).data
    }
}
