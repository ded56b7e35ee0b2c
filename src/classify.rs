use std::fmt;
use std::ops::Sub;

use log::info;
use serde::{Serialize, Serializer};

// ---------------------------------------------------------------------------
// Label – fixed outcomes of the range classifier
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Big,
    Medium,
    Small,
    Tiny,
    ZeroIsh,
    NegativeBig,
    NegativeMedium,
    NegativeOther,
    Zero,
    Something,
}

impl Label {
    pub fn as_str(self) -> &'static str {
        match self {
            Label::Big => "big",
            Label::Medium => "medium",
            Label::Small => "small",
            Label::Tiny => "tiny",
            Label::ZeroIsh => "zero-ish",
            Label::NegativeBig => "negative big",
            Label::NegativeMedium => "negative medium",
            Label::NegativeOther => "negative other",
            Label::Zero => "zero",
            Label::Something => "something",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Label {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Classifier
// ---------------------------------------------------------------------------

/// Result of a single [`classify`] call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification {
    pub label: Label,
    pub sum: f64,
}

/// Pick a label for `(x, y, z)` and return it with `x + y + z`.
///
/// Decision table:
/// * `x > 0` and `y > 0` → by `z`: `> 10` big, `> 5` medium, `> 3` small,
///   `> 1` tiny, otherwise zero-ish
/// * `x < 0` or `y < 0` → by `z`: `> 100` negative big, `> 50` negative
///   medium, otherwise negative other
/// * otherwise → zero when `z == 0`, something else
///
/// The label is also emitted as an `info` log record.
pub fn classify(x: f64, y: f64, z: f64) -> Classification {
    let label = if x > 0.0 && y > 0.0 {
        match z {
            z if z > 10.0 => Label::Big,
            z if z > 5.0 => Label::Medium,
            z if z > 3.0 => Label::Small,
            z if z > 1.0 => Label::Tiny,
            _ => Label::ZeroIsh,
        }
    } else if x < 0.0 || y < 0.0 {
        match z {
            z if z > 100.0 => Label::NegativeBig,
            z if z > 50.0 => Label::NegativeMedium,
            _ => Label::NegativeOther,
        }
    } else if z == 0.0 {
        Label::Zero
    } else {
        Label::Something
    };

    info!("classified ({x}, {y}, {z}) as {label}");
    Classification {
        label,
        sum: x + y + z,
    }
}

// ---------------------------------------------------------------------------
// Absolute difference
// ---------------------------------------------------------------------------

/// `a - b` when `a > b`, zero when equal, `b - a` otherwise.
pub fn abs_difference<T>(a: T, b: T) -> T
where
    T: PartialOrd + Sub<Output = T> + Default + Copy,
{
    if a > b {
        a - b
    } else if a == b {
        T::default()
    } else {
        b - a
    }
}

/// Alias of [`abs_difference`].
pub fn difference<T>(a: T, b: T) -> T
where
    T: PartialOrd + Sub<Output = T> + Default + Copy,
{
    abs_difference(a, b)
}

/// Alias of [`abs_difference`], kept for callers of the second entry point.
pub fn difference_variant<T>(a: T, b: T) -> T
where
    T: PartialOrd + Sub<Output = T> + Default + Copy,
{
    abs_difference(a, b)
}
