//! One-dimensional linear interpolation.
//!
//! For a query point between two samples at (x₀, y₀) and (x₁, y₁):
//! ```text
//! y = y_0 + (y_1 - y_0) * (x - x_0) / (x_1 - x_0)
//! ```
//! Queries left of the first abscissa clamp to the first ordinate, queries
//! right of the last abscissa clamp to the last ordinate.
//!
//! `x` is expected to be sorted ascending; it is not validated.

use crate::error::{ensure_same_len, ArrayError, Result};
use crate::math::vector::Array;

/// Interpolate the samples `(x, y)` at each point of `xi`.
///
/// Interior points use the first interval `[x[j], x[j+1]]` that contains them,
/// so a query equal to a shared boundary takes the left interval. A query that
/// falls in no interval (a `NaN` query or `NaN` abscissas) yields `0.0`.
pub fn interp1d(x: &[f64], y: &[f64], xi: &[f64]) -> Result<Array> {
    ensure_same_len(x.len(), y.len())?;
    if xi.is_empty() {
        return Ok(Array::default());
    }
    let (first_x, last_x) = match (x.first(), x.last()) {
        (Some(&first), Some(&last)) => (first, last),
        _ => return Err(ArrayError::EmptyInput),
    };
    let last = x.len() - 1;

    let yi = xi
        .iter()
        .map(|&v| {
            if v <= first_x {
                y[0]
            } else if v >= last_x {
                y[last]
            } else {
                x.windows(2)
                    .position(|w| v >= w[0] && v <= w[1])
                    .map(|j| y[j] + (y[j + 1] - y[j]) * (v - x[j]) / (x[j + 1] - x[j]))
                    .unwrap_or(0.0)
            }
        })
        .collect();

    Ok(yi)
}
