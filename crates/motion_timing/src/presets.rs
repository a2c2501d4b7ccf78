//! Named bezier curves from the Material motion guidelines.

use std::fmt::{Display, Formatter};

use crate::curve::MotionCurve;

impl MotionCurve {
    /// Standard curve for elements moving between on-screen positions.
    pub const STANDARD: Self = Self::bezier(0.4, 0.0, 0.2, 1.0);
    /// Incoming elements enter at full velocity and slow to rest.
    pub const DECELERATION: Self = Self::bezier(0.0, 0.0, 0.2, 1.0);
    /// Outgoing elements speed up as they leave.
    pub const ACCELERATION: Self = Self::bezier(0.4, 0.0, 1.0, 1.0);
    /// Elements that may return to the screen at any time.
    pub const SHARP: Self = Self::bezier(0.4, 0.0, 0.6, 1.0);
}

/// Built-in curve catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CurvePreset {
    Standard,
    Deceleration,
    Acceleration,
    Sharp,
}

impl CurvePreset {
    /// Stable preset id, also accepted by the text notation.
    pub fn id(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Deceleration => "deceleration",
            Self::Acceleration => "acceleration",
            Self::Sharp => "sharp",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [CurvePreset] {
        const PRESETS: [CurvePreset; 4] = [
            CurvePreset::Standard,
            CurvePreset::Deceleration,
            CurvePreset::Acceleration,
            CurvePreset::Sharp,
        ];
        &PRESETS
    }

    /// Look up a preset by id, ignoring ASCII case.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|preset| preset.id().eq_ignore_ascii_case(id))
    }

    pub fn curve(self) -> MotionCurve {
        match self {
            Self::Standard => MotionCurve::STANDARD,
            Self::Deceleration => MotionCurve::DECELERATION,
            Self::Acceleration => MotionCurve::ACCELERATION,
            Self::Sharp => MotionCurve::SHARP,
        }
    }
}

impl Display for CurvePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl From<CurvePreset> for MotionCurve {
    fn from(preset: CurvePreset) -> Self {
        preset.curve()
    }
}
