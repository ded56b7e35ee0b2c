use log::warn;

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Numeric – anything we can average or normalize
// ---------------------------------------------------------------------------

/// Primitive numbers that can be widened to `f64` for the statistics below.
pub trait Numeric: Copy {
    fn as_f64(self) -> f64;
}

macro_rules! impl_numeric {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                fn as_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_numeric!(i32, i64, u32, u64, f32, f64);

// ---------------------------------------------------------------------------
// Average
// ---------------------------------------------------------------------------

/// Arithmetic mean of `values`.
///
/// An empty slice is an error rather than `NaN` or `0.0`.
pub fn average<T: Numeric>(values: &[T]) -> Result<f64> {
    if values.is_empty() {
        return Err(Error::DivisionByZero);
    }
    let total: f64 = values.iter().map(|v| v.as_f64()).sum();
    Ok(total / values.len() as f64)
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Scale `values` so the maximum becomes `1.0`.
///
/// * empty input → empty output
/// * maximum of zero → all zeros, same length as the input
pub fn normalize<T: Numeric>(values: &[T]) -> Vec<f64> {
    let Some(max_value) = values.iter().map(|v| v.as_f64()).reduce(f64::max) else {
        return Vec::new();
    };

    if max_value == 0.0 {
        warn!(
            "maximum of {} values is zero, normalizing to zeros",
            values.len()
        );
        return vec![0.0; values.len()];
    }

    values.iter().map(|v| v.as_f64() / max_value).collect()
}
