//! Named timing functions and their textual form.
//!
//! A [`TimingFunction`] is what a user writes down: one of the CSS keywords
//! (`ease`, `ease-in-out`, …) or an explicit `cubic-bezier(x1, y1, x2, y2)`.
//! It resolves to an [`EasingCurve`] with [`TimingFunction::curve`].
//!
//! In JSON a timing function may be written as a string (either form
//! above), as an array `[x1, y1, x2, y2]`, or as an object
//! `{"x1": …, "y1": …, "x2": …, "y2": …}`.

use crate::bezier::{CurveError, EasingCurve};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The CSS easing keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Linear,
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Preset {
    /// Every preset, in declaration order.
    pub const ALL: [Preset; 5] = [
        Preset::Linear,
        Preset::Ease,
        Preset::EaseIn,
        Preset::EaseOut,
        Preset::EaseInOut,
    ];

    /// `[x1, y1, x2, y2]` as defined by CSS Easing Functions.
    pub fn control_points(self) -> [f64; 4] {
        match self {
            Preset::Linear => [0.0, 0.0, 1.0, 1.0],
            Preset::Ease => [0.25, 0.1, 0.25, 1.0],
            Preset::EaseIn => [0.42, 0.0, 1.0, 1.0],
            Preset::EaseOut => [0.0, 0.0, 0.58, 1.0],
            Preset::EaseInOut => [0.42, 0.0, 0.58, 1.0],
        }
    }

    pub fn curve(self) -> EasingCurve {
        EasingCurve::from(self.control_points())
    }

    /// The CSS keyword, e.g. `"ease-in-out"`.
    pub fn name(self) -> &'static str {
        match self {
            Preset::Linear => "linear",
            Preset::Ease => "ease",
            Preset::EaseIn => "ease-in",
            Preset::EaseOut => "ease-out",
            Preset::EaseInOut => "ease-in-out",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse a preset keyword (case-insensitive; accepts "ease-in-out",
/// "ease_in_out", "EaseInOut", etc.).
impl FromStr for Preset {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .flat_map(|c| c.to_lowercase())
            .collect();
        match normalized.as_str() {
            "linear" => Ok(Preset::Linear),
            "ease" => Ok(Preset::Ease),
            "easein" => Ok(Preset::EaseIn),
            "easeout" => Ok(Preset::EaseOut),
            "easeinout" => Ok(Preset::EaseInOut),
            _ => Err(ParseError::UnknownPreset(s.trim().to_string())),
        }
    }
}

/// Errors from parsing a textual timing function.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown timing function {0:?}")]
    UnknownPreset(String),
    #[error("malformed cubic-bezier expression {0:?}")]
    Malformed(String),
    #[error("cubic-bezier takes 4 arguments, got {0}")]
    WrongArity(usize),
    #[error("invalid number {0:?} in cubic-bezier expression")]
    InvalidNumber(String),
}

/// A timing function as written in configuration.
///
/// Explicit control points are kept as written, so the choice between
/// clamping ([`curve`](Self::curve)) and rejecting
/// ([`try_curve`](Self::try_curve)) is left to the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimingFunction {
    Preset(Preset),
    /// `cubic-bezier(x1, y1, x2, y2)`.
    CubicBezier([f64; 4]),
}

impl TimingFunction {
    pub fn control_points(&self) -> [f64; 4] {
        match *self {
            TimingFunction::Preset(preset) => preset.control_points(),
            TimingFunction::CubicBezier(points) => points,
        }
    }

    /// Build the curve, clamping out-of-range x coordinates.
    pub fn curve(&self) -> EasingCurve {
        EasingCurve::from(self.control_points())
    }

    /// Build the curve, rejecting out-of-range or non-finite coordinates.
    pub fn try_curve(&self) -> Result<EasingCurve, CurveError> {
        let [x1, y1, x2, y2] = self.control_points();
        EasingCurve::try_new(x1, y1, x2, y2)
    }
}

impl From<Preset> for TimingFunction {
    fn from(preset: Preset) -> Self {
        TimingFunction::Preset(preset)
    }
}

impl fmt::Display for TimingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimingFunction::Preset(preset) => write!(f, "{}", preset),
            TimingFunction::CubicBezier([x1, y1, x2, y2]) => {
                write!(f, "cubic-bezier({}, {}, {}, {})", x1, y1, x2, y2)
            }
        }
    }
}

/// Parse `cubic-bezier(x1, y1, x2, y2)` or a preset keyword.
impl FromStr for TimingFunction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let Some(args) = trimmed
            .get(..13)
            .filter(|head| head.eq_ignore_ascii_case("cubic-bezier("))
            .map(|_| &trimmed[13..])
        else {
            return trimmed.parse().map(TimingFunction::Preset);
        };

        let args = args
            .strip_suffix(')')
            .ok_or_else(|| ParseError::Malformed(trimmed.to_string()))?;
        let parts: Vec<&str> = args.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(ParseError::WrongArity(parts.len()));
        }

        let mut points = [0.0; 4];
        for (slot, part) in points.iter_mut().zip(&parts) {
            *slot = part
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| ParseError::InvalidNumber(part.to_string()))?;
        }
        Ok(TimingFunction::CubicBezier(points))
    }
}

impl Serialize for TimingFunction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimingFunction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{MapAccess, SeqAccess, Visitor};
        struct V;
        impl<'de> Visitor<'de> for V {
            type Value = TimingFunction;
            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(
                    f,
                    "a timing function keyword, \"cubic-bezier(x1, y1, x2, y2)\", \
                     [x1, y1, x2, y2] or {{x1, y1, x2, y2}}"
                )
            }
            fn visit_str<E>(self, s: &str) -> Result<TimingFunction, E>
            where
                E: DeError,
            {
                s.parse().map_err(DeError::custom)
            }
            fn visit_seq<A>(self, mut seq: A) -> Result<TimingFunction, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut points = [0.0; 4];
                for (i, slot) in points.iter_mut().enumerate() {
                    *slot = seq
                        .next_element()?
                        .ok_or_else(|| DeError::invalid_length(i, &self))?;
                }
                if seq.next_element::<serde::de::IgnoredAny>()?.is_some() {
                    return Err(DeError::invalid_length(5, &self));
                }
                Ok(TimingFunction::CubicBezier(points))
            }
            fn visit_map<A>(self, mut map: A) -> Result<TimingFunction, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut points = [None; 4];
                while let Some(k) = map.next_key::<String>()? {
                    match k.as_str() {
                        "x1" => points[0] = Some(map.next_value()?),
                        "y1" => points[1] = Some(map.next_value()?),
                        "x2" => points[2] = Some(map.next_value()?),
                        "y2" => points[3] = Some(map.next_value()?),
                        _ => {
                            let _: serde::de::IgnoredAny = map.next_value()?;
                        }
                    }
                }
                Ok(TimingFunction::CubicBezier([
                    points[0].ok_or_else(|| DeError::missing_field("x1"))?,
                    points[1].ok_or_else(|| DeError::missing_field("y1"))?,
                    points[2].ok_or_else(|| DeError::missing_field("x2"))?,
                    points[3].ok_or_else(|| DeError::missing_field("y2"))?,
                ]))
            }
        }
        deserializer.deserialize_any(V)
    }
}

//  Tests
