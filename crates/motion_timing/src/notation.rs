//! Text notation for motion values
//!
//! Curves are written the way CSS writes timing functions:
//!
//! - `instant`, `default`
//! - `cubic-bezier(0.4, 0, 0.2, 1)`
//! - `spring(1, 100, 10)` (mass, tension, friction)
//! - a preset id such as `standard` or `sharp`
//!
//! Timings follow the CSS transition shorthand, `duration [curve] [delay]`:
//!
//! - `300ms`
//! - `0.5s spring(1, 300, 30) 250ms`
//!
//! Time values must carry an `s` or `ms` unit. Like the constructors, the
//! parser does not validate numbers: negative, NaN and infinite values are
//! kept as written.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use thiserror::Error;

use crate::curve::MotionCurve;
use crate::presets::CurvePreset;
use crate::timing::MotionTiming;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMotionError {
    #[error("empty motion notation")]
    Empty,

    #[error("unknown motion curve `{0}`")]
    UnknownCurve(String),

    #[error("`{function}` expects {expected} arguments, found {found}")]
    ArgumentCount {
        function: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("invalid number `{0}`")]
    InvalidNumber(String),

    #[error("unbalanced parentheses in `{0}`")]
    Unbalanced(String),

    #[error("time value `{0}` must end in `s` or `ms`")]
    MissingTimeUnit(String),

    #[error("motion timing `{0}` has no duration")]
    MissingDuration(String),

    #[error("unexpected token `{0}`")]
    UnexpectedToken(String),
}

// ============================================================================
// Curves
// ============================================================================

fn parse_curve(input: &str) -> Result<MotionCurve, ParseMotionError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseMotionError::Empty);
    }

    if let Some(open) = input.find('(') {
        let Some(close) = input.rfind(')').filter(|&close| close > open) else {
            return Err(ParseMotionError::Unbalanced(input.to_string()));
        };
        let body = &input[open + 1..close];
        if body.contains(['(', ')']) {
            return Err(ParseMotionError::Unbalanced(input.to_string()));
        }
        let trailing = &input[close + 1..];
        if !trailing.is_empty() {
            return Err(ParseMotionError::UnexpectedToken(trailing.to_string()));
        }

        // No space between the function name and its arguments, as in CSS.
        let name = &input[..open];
        if name.ends_with(char::is_whitespace) {
            return Err(ParseMotionError::UnknownCurve(
                name.trim().to_ascii_lowercase(),
            ));
        }
        let name = name.to_ascii_lowercase();
        let args = parse_arguments(body)?;
        return match name.as_str() {
            "cubic-bezier" => {
                let [p1x, p1y, p2x, p2y] = expect_arguments("cubic-bezier", &args)?;
                Ok(MotionCurve::bezier(p1x, p1y, p2x, p2y))
            }
            "spring" => {
                let [mass, tension, friction] = expect_arguments("spring", &args)?;
                Ok(MotionCurve::spring(mass, tension, friction))
            }
            _ => Err(ParseMotionError::UnknownCurve(name)),
        };
    }

    if input.contains(')') {
        return Err(ParseMotionError::Unbalanced(input.to_string()));
    }

    match input.to_ascii_lowercase().as_str() {
        "instant" => Ok(MotionCurve::Instant),
        "default" => Ok(MotionCurve::Default),
        other => CurvePreset::from_id(other)
            .map(CurvePreset::curve)
            .ok_or_else(|| ParseMotionError::UnknownCurve(other.to_string())),
    }
}

fn parse_arguments(body: &str) -> Result<Vec<f64>, ParseMotionError> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    body.split(',')
        .map(|arg| {
            let arg = arg.trim();
            arg.parse::<f64>()
                .map_err(|_| ParseMotionError::InvalidNumber(arg.to_string()))
        })
        .collect()
}

fn expect_arguments<const N: usize>(
    function: &'static str,
    args: &[f64],
) -> Result<[f64; N], ParseMotionError> {
    <[f64; N]>::try_from(args).map_err(|_| ParseMotionError::ArgumentCount {
        function,
        expected: N,
        found: args.len(),
    })
}

impl FromStr for MotionCurve {
    type Err = ParseMotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_curve(s).map_err(|err| {
            tracing::debug!(input = s, error = %err, "rejected motion curve notation");
            err
        })
    }
}

impl Display for MotionCurve {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MotionCurve::Instant => f.write_str("instant"),
            MotionCurve::Default => f.write_str("default"),
            MotionCurve::Bezier { p1x, p1y, p2x, p2y } => {
                write!(f, "cubic-bezier({p1x}, {p1y}, {p2x}, {p2y})")
            }
            MotionCurve::Spring {
                mass,
                tension,
                friction,
            } => write!(f, "spring({mass}, {tension}, {friction})"),
        }
    }
}

// ============================================================================
// Timings
// ============================================================================

/// Split on whitespace outside of parentheses.
fn tokenize(input: &str) -> Result<Vec<&str>, ParseMotionError> {
    let mut tokens = Vec::new();
    let mut depth = 0usize;
    let mut start = None;

    for (i, c) in input.char_indices() {
        match c {
            '(' => {
                depth += 1;
                start.get_or_insert(i);
            }
            ')' => {
                if depth == 0 {
                    return Err(ParseMotionError::Unbalanced(input.to_string()));
                }
                depth -= 1;
                start.get_or_insert(i);
            }
            c if c.is_whitespace() && depth == 0 => {
                if let Some(s) = start.take() {
                    tokens.push(&input[s..i]);
                }
            }
            _ => {
                start.get_or_insert(i);
            }
        }
    }

    if depth != 0 {
        return Err(ParseMotionError::Unbalanced(input.to_string()));
    }
    if let Some(s) = start {
        tokens.push(&input[s..]);
    }
    Ok(tokens)
}

/// Parse a time value in seconds (e.g. "250ms", "0.5s")
fn parse_time_value(token: &str) -> Option<f64> {
    if let Some(ms) = token.strip_suffix("ms") {
        return ms.parse::<f64>().ok().map(|ms| ms / 1000.0);
    }
    token.strip_suffix('s')?.parse::<f64>().ok()
}

fn parse_timing(input: &str) -> Result<MotionTiming, ParseMotionError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(ParseMotionError::Empty);
    }

    let mut duration = None;
    let mut delay = None;
    let mut curve = None;

    for token in tokens {
        if let Some(seconds) = parse_time_value(token) {
            if duration.is_none() {
                duration = Some(seconds);
            } else if delay.is_none() {
                delay = Some(seconds);
            } else {
                return Err(ParseMotionError::UnexpectedToken(token.to_string()));
            }
            continue;
        }

        if token.parse::<f64>().is_ok() {
            return Err(ParseMotionError::MissingTimeUnit(token.to_string()));
        }

        if curve.is_some() {
            return Err(ParseMotionError::UnexpectedToken(token.to_string()));
        }
        curve = Some(parse_curve(token)?);
    }

    let Some(duration) = duration else {
        return Err(ParseMotionError::MissingDuration(input.trim().to_string()));
    };

    Ok(MotionTiming {
        delay: delay.unwrap_or(0.0),
        duration,
        curve: curve.unwrap_or_default(),
    })
}

impl FromStr for MotionTiming {
    type Err = ParseMotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_timing(s).map_err(|err| {
            tracing::debug!(input = s, error = %err, "rejected motion timing notation");
            err
        })
    }
}

impl Display for MotionTiming {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}s {} {}s", self.duration, self.curve, self.delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_keywords() {
        assert_eq!("instant".parse::<MotionCurve>().unwrap(), MotionCurve::Instant);
        assert_eq!(" Default ".parse::<MotionCurve>().unwrap(), MotionCurve::Default);
        assert_eq!("standard".parse::<MotionCurve>().unwrap(), MotionCurve::STANDARD);
        assert_eq!("Sharp".parse::<MotionCurve>().unwrap(), MotionCurve::SHARP);
    }

    #[test]
    fn test_parse_cubic_bezier() {
        let curve: MotionCurve = "cubic-bezier(0.4, 0, 0.2, 1)".parse().unwrap();
        assert_eq!(curve, MotionCurve::bezier(0.4, 0.0, 0.2, 1.0));

        let overshoot: MotionCurve = "CUBIC-BEZIER(0.3,1.5,0.7,-0.5)".parse().unwrap();
        assert_eq!(overshoot, MotionCurve::bezier(0.3, 1.5, 0.7, -0.5));
    }

    #[test]
    fn test_parse_spring() {
        let curve: MotionCurve = "spring(1, 100, 10)".parse().unwrap();
        assert_eq!(curve, MotionCurve::spring(1.0, 100.0, 10.0));

        let negative: MotionCurve = "spring(-1, 0, -3)".parse().unwrap();
        assert_eq!(negative, MotionCurve::spring(-1.0, 0.0, -3.0));
    }

    #[test]
    fn test_parse_curve_errors() {
        assert_eq!("".parse::<MotionCurve>(), Err(ParseMotionError::Empty));
        assert_eq!(
            "linear".parse::<MotionCurve>(),
            Err(ParseMotionError::UnknownCurve("linear".to_string()))
        );
        assert_eq!(
            "steps(4)".parse::<MotionCurve>(),
            Err(ParseMotionError::UnknownCurve("steps".to_string()))
        );
        assert_eq!(
            "spring(1, 2)".parse::<MotionCurve>(),
            Err(ParseMotionError::ArgumentCount {
                function: "spring",
                expected: 3,
                found: 2,
            })
        );
        assert_eq!(
            "cubic-bezier()".parse::<MotionCurve>(),
            Err(ParseMotionError::ArgumentCount {
                function: "cubic-bezier",
                expected: 4,
                found: 0,
            })
        );
        assert_eq!(
            "cubic-bezier(0.4, x, 0.2, 1)".parse::<MotionCurve>(),
            Err(ParseMotionError::InvalidNumber("x".to_string()))
        );
        assert!(matches!(
            "spring(1, 2, 3".parse::<MotionCurve>(),
            Err(ParseMotionError::Unbalanced(_))
        ));
        assert!(matches!(
            "instant)".parse::<MotionCurve>(),
            Err(ParseMotionError::Unbalanced(_))
        ));
    }

    #[test]
    fn test_trailing_text_after_arguments() {
        assert_eq!(
            "spring(1,2,3)x".parse::<MotionCurve>(),
            Err(ParseMotionError::UnexpectedToken("x".to_string()))
        );
        assert_eq!(
            "1s cubic-bezier(0, 0, 1, 1)linear".parse::<MotionTiming>(),
            Err(ParseMotionError::UnexpectedToken("linear".to_string()))
        );
    }

    #[test]
    fn test_space_before_arguments_is_rejected() {
        let expected = Err(ParseMotionError::UnknownCurve("spring".to_string()));
        assert_eq!("spring (1, 2, 3)".parse::<MotionCurve>(), expected);
        assert_eq!(
            "1s spring (1, 2, 3)".parse::<MotionTiming>().map(|t| t.curve),
            expected
        );
    }

    #[test]
    fn test_display_curves() {
        assert_eq!(MotionCurve::Instant.to_string(), "instant");
        assert_eq!(MotionCurve::Default.to_string(), "default");
        assert_eq!(
            MotionCurve::bezier(0.4, 0.0, 0.2, 1.0).to_string(),
            "cubic-bezier(0.4, 0, 0.2, 1)"
        );
        assert_eq!(
            MotionCurve::spring(1.0, 100.0, 10.0).to_string(),
            "spring(1, 100, 10)"
        );
    }

    #[test]
    fn test_parse_timing() {
        let timing: MotionTiming = "0.5s spring(1, 300, 30) 250ms".parse().unwrap();
        assert_eq!(
            timing,
            MotionTiming::new(0.25, 0.5, MotionCurve::spring(1.0, 300.0, 30.0))
        );
    }

    #[test]
    fn test_parse_timing_defaults() {
        let timing: MotionTiming = "300ms".parse().unwrap();
        assert_eq!(timing.duration, 0.3);
        assert_eq!(timing.delay, 0.0);
        assert_eq!(timing.curve, MotionCurve::Default);

        let timing: MotionTiming = "instant 0s".parse().unwrap();
        assert_eq!(timing, MotionTiming::new(0.0, 0.0, MotionCurve::Instant));
    }

    #[test]
    fn test_parse_timing_errors() {
        assert_eq!("   ".parse::<MotionTiming>(), Err(ParseMotionError::Empty));
        assert_eq!(
            "300 standard".parse::<MotionTiming>(),
            Err(ParseMotionError::MissingTimeUnit("300".to_string()))
        );
        assert_eq!(
            "standard".parse::<MotionTiming>(),
            Err(ParseMotionError::MissingDuration("standard".to_string()))
        );
        assert_eq!(
            "1s 2s 3s".parse::<MotionTiming>(),
            Err(ParseMotionError::UnexpectedToken("3s".to_string()))
        );
        assert_eq!(
            "1s sharp standard".parse::<MotionTiming>(),
            Err(ParseMotionError::UnexpectedToken("standard".to_string()))
        );
        assert!(matches!(
            "1s spring(1, 2, 3".parse::<MotionTiming>(),
            Err(ParseMotionError::Unbalanced(_))
        ));
    }

    #[test]
    fn test_timing_display_parses_back() {
        let timing = MotionTiming::new(0.125, 0.3, MotionCurve::bezier(0.4, 0.0, 0.2, 1.0));
        let text = timing.to_string();
        assert_eq!(text, "0.3s cubic-bezier(0.4, 0, 0.2, 1) 0.125s");
        assert_eq!(text.parse::<MotionTiming>().unwrap(), timing);
    }
}
