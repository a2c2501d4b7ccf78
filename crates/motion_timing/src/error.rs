use thiserror::Error;

use crate::notation::ParseMotionError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MotionError {
    #[error("unknown motion curve type ordinal {0} (expected 0..=3)")]
    UnknownCurveType(u32),

    #[error(transparent)]
    Parse(#[from] ParseMotionError),
}
