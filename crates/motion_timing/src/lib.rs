//! Motion Timing
//!
//! Declarative timing values for animations. This crate describes *how* a
//! value should animate; it never runs, samples or interpolates anything.
//!
//! # Features
//!
//! - **Motion Curves**: instant, cubic bezier, spring, or the consumer's default
//! - **Motion Timing**: delay + duration + curve for a single tween
//! - **Raw Layout**: the fixed `(tag, [f64; 4])` interchange form with stable ordinals
//! - **Notation**: CSS-like text such as `0.3s cubic-bezier(0.4, 0, 0.2, 1) 50ms`
//! - **Presets**: Material standard, deceleration, acceleration and sharp curves
//!
//! Nothing here validates its inputs. NaN control points, negative mass or a
//! negative delay are stored exactly as given; the animation engine that
//! consumes these values is responsible for rejecting or clamping them.
//!
//! # Example
//!
//! ```rust
//! use motion_timing::{MotionCurve, MotionCurveType, MotionTiming};
//!
//! let curve = MotionCurve::bezier(0.4, 0.0, 0.2, 1.0);
//! assert_eq!(curve.curve_type(), MotionCurveType::Bezier);
//! assert_eq!(curve.data(), [0.4, 0.0, 0.2, 1.0]);
//!
//! let timing = MotionTiming {
//!     delay: 0.25,
//!     duration: 0.5,
//!     curve: MotionCurve::spring(1.0, 300.0, 30.0),
//! };
//! assert_eq!(timing.curve.data(), [1.0, 300.0, 30.0, 0.0]);
//!
//! let parsed: MotionTiming = "0.5s spring(1, 300, 30) 250ms".parse().unwrap();
//! assert_eq!(parsed, timing);
//! ```

pub mod curve;
pub mod error;
pub mod notation;
pub mod presets;
pub mod raw;
pub mod timing;

pub use curve::{MotionCurve, MotionCurveType};
pub use error::MotionError;
pub use notation::ParseMotionError;
pub use presets::CurvePreset;
pub use raw::{BezierDataIndex, RawMotionCurve, RawMotionTiming, SpringDataIndex};
pub use timing::MotionTiming;
