//! Array construction and element-wise transcendental helpers.

use itertools_num::linspace as linspace_iter;

use crate::error::{ArrayError, Result};
use crate::math::vector::Array;

/// Largest element count a `Vec<f64>` can allocate.
pub const MAX_LEN: usize = isize::MAX as usize / std::mem::size_of::<f64>();

/// `n` evenly spaced points from `start` to `end`, both endpoints included.
///
/// The step is `(end - start) / (n - 1)`. `Stack::linspace` divides by `n`
/// instead and so never reaches `end`.
pub fn linspace(start: f64, end: f64, n: usize) -> Array {
    linspace_iter(start, end, n).collect()
}

/// Half-open range `start, start + step, ...` with
/// `floor((end - start) / step)` elements.
///
/// A negative or non-finite count (wrong-signed or zero step) gives an empty
/// array. A count above [`MAX_LEN`] returns `ArrayError::TooLong`.
pub fn arange(start: f64, end: f64, step: f64) -> Result<Array> {
    let count = ((end - start) / step).floor();
    if !count.is_finite() || count <= 0.0 {
        return Ok(Array::default());
    }
    if count > MAX_LEN as f64 {
        return Err(ArrayError::TooLong {
            requested: count,
            max: MAX_LEN,
        });
    }
    Ok((0..count as usize).map(|i| start + i as f64 * step).collect())
}

pub fn zeros(n: usize) -> Array {
    Array::from_elem(n, 0.0)
}

/// Element-wise natural exponential.
pub fn exp(x: &Array) -> Array {
    x.mapv(f64::exp)
}

/// `numerator / x[i]` for every element.
pub fn reciprocal_scale(numerator: f64, x: &Array) -> Array {
    x.mapv(|v| numerator / v)
}
