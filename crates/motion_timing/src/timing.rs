//! Timing for a simple tween animation

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::curve::MotionCurve;

/// Delay, duration and curve of a single tween.
///
/// A plain aggregate: fields are public and nothing is validated. Negative
/// or non-finite delays and durations are stored as given.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MotionTiming {
    /// Seconds before the value interpolation begins.
    pub delay: f64,
    /// Seconds over which the value interpolates.
    pub duration: f64,
    /// How the value moves during `duration`.
    pub curve: MotionCurve,
}

impl MotionTiming {
    pub const fn new(delay: f64, duration: f64, curve: MotionCurve) -> Self {
        Self {
            delay,
            duration,
            curve,
        }
    }

    /// Build a timing from [`Duration`]s.
    pub fn from_durations(delay: Duration, duration: Duration, curve: MotionCurve) -> Self {
        Self::new(delay.as_secs_f64(), duration.as_secs_f64(), curve)
    }

    /// Set the delay in seconds
    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    /// Set the duration in seconds
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_curve(mut self, curve: MotionCurve) -> Self {
        self.curve = curve;
        self
    }

    /// The delay as a [`Duration`], or `None` if it is negative, NaN or
    /// out of range.
    pub fn delay_as_duration(&self) -> Option<Duration> {
        Duration::try_from_secs_f64(self.delay).ok()
    }

    /// The duration as a [`Duration`], or `None` if it is negative, NaN or
    /// out of range.
    pub fn duration_as_duration(&self) -> Option<Duration> {
        Duration::try_from_secs_f64(self.duration).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fields_read_back_exactly() {
        let timing = MotionTiming {
            delay: 0.25,
            duration: 0.5,
            curve: MotionCurve::spring(1.0, 300.0, 30.0),
        };
        assert_eq!(timing.delay, 0.25);
        assert_eq!(timing.duration, 0.5);
        assert_eq!(timing.curve, MotionCurve::spring(1.0, 300.0, 30.0));
        assert_eq!(timing, MotionTiming::new(0.25, 0.5, timing.curve));
    }

    #[test]
    fn test_default_timing() {
        let timing = MotionTiming::default();
        assert_eq!(timing.delay, 0.0);
        assert_eq!(timing.duration, 0.0);
        assert_eq!(timing.curve, MotionCurve::Default);
    }

    #[test]
    fn test_builder_methods() {
        let timing = MotionTiming::default()
            .with_delay(0.1)
            .with_duration(0.3)
            .with_curve(MotionCurve::Instant);
        assert_eq!(timing, MotionTiming::new(0.1, 0.3, MotionCurve::Instant));
    }

    #[test]
    fn test_from_durations() {
        let timing = MotionTiming::from_durations(
            Duration::from_millis(250),
            Duration::from_millis(500),
            MotionCurve::Default,
        );
        assert_eq!(timing.delay, 0.25);
        assert_eq!(timing.duration, 0.5);
        assert_eq!(timing.delay_as_duration(), Some(Duration::from_millis(250)));
        assert_eq!(timing.duration_as_duration(), Some(Duration::from_millis(500)));
    }

    #[test]
    fn test_negative_values_are_stored_but_not_durations() {
        let timing = MotionTiming::new(-1.0, f64::NAN, MotionCurve::Instant);
        assert_eq!(timing.delay, -1.0);
        assert!(timing.duration.is_nan());
        assert_eq!(timing.delay_as_duration(), None);
        assert_eq!(timing.duration_as_duration(), None);
    }

    #[test]
    fn test_copies_are_independent() {
        let original = MotionTiming::new(0.0, 1.0, MotionCurve::bezier(0.4, 0.0, 0.2, 1.0));
        let mut copy = original;
        copy.duration = 2.0;
        if let MotionCurve::Bezier { ref mut p1y, .. } = copy.curve {
            *p1y = 0.9;
        }
        assert_eq!(original.duration, 1.0);
        assert_eq!(original.curve, MotionCurve::bezier(0.4, 0.0, 0.2, 1.0));
        assert_eq!(copy.curve, MotionCurve::bezier(0.4, 0.9, 0.2, 1.0));
    }
}
