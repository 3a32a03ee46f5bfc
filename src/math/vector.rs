use std::fmt;
use std::iter::FromIterator;
use std::ops::{Index, IndexMut};
use std::slice::{Iter, IterMut};

use statrs::statistics::Statistics;

use crate::config::PrintOptions;
use crate::error::{ensure_range, ensure_same_len, ArrayError, Result};
use crate::math::interpolation::interp1d;

/// Fixed-length sequence of `f64` values.
///
/// Every operation returns a new `Array`; slices are copies, never views into
/// the receiver. `clone` gives an independent deep copy.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Array {
    data: Vec<f64>,
}

impl Array {
    pub fn new(data: Vec<f64>) -> Self {
        Self { data }
    }

    pub fn from_vec(data: Vec<f64>) -> Self {
        Self::new(data)
    }

    pub fn from_elem(len: usize, value: f64) -> Self {
        Array::from_vec(vec![value; len])
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of elements.
    pub fn shape(&self) -> usize {
        self.len()
    }

    pub fn iter(&self) -> Iter<'_, f64> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, f64> {
        self.data.iter_mut()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    /// Apply `f` to every element.
    pub fn mapv<F>(&self, mut f: F) -> Array
    where
        F: FnMut(f64) -> f64,
    {
        self.data.iter().map(|&v| f(v)).collect()
    }

    fn zip_with<F>(&self, other: &Array, f: F) -> Result<Array>
    where
        F: Fn(f64, f64) -> f64,
    {
        ensure_same_len(self.len(), other.len())?;
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect())
    }

    /// True when both arrays have the same length and every pair of elements
    /// differs by at most `epsilon`.
    pub fn almost_equal(&self, other: &Array, epsilon: f64) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    /// Reorder elements: position `i` of the result holds `self[indices[i]]`.
    pub fn shuffle(&self, indices: &[usize]) -> Result<Array> {
        ensure_same_len(self.len(), indices.len())?;
        indices
            .iter()
            .map(|&idx| {
                self.data.get(idx).copied().ok_or(ArrayError::IndexOutOfBounds {
                    index: idx,
                    len: self.len(),
                })
            })
            .collect()
    }

    pub fn add(&self, other: &Array) -> Result<Array> {
        self.zip_with(other, |a, b| a + b)
    }

    pub fn sub(&self, other: &Array) -> Result<Array> {
        self.zip_with(other, |a, b| a - b)
    }

    pub fn mul(&self, other: &Array) -> Result<Array> {
        self.zip_with(other, |a, b| a * b)
    }

    /// Element-wise division; division by zero yields `inf`/`NaN`.
    pub fn div(&self, other: &Array) -> Result<Array> {
        self.zip_with(other, |a, b| a / b)
    }

    pub fn add_scalar(&self, value: f64) -> Array {
        self.mapv(|v| v + value)
    }

    pub fn sub_scalar(&self, value: f64) -> Array {
        self.mapv(|v| v - value)
    }

    pub fn mul_scalar(&self, value: f64) -> Array {
        self.mapv(|v| v * value)
    }

    pub fn div_scalar(&self, value: f64) -> Array {
        self.mapv(|v| v / value)
    }

    pub fn powf(&self, power: f64) -> Array {
        self.mapv(|v| v.powf(power))
    }

    pub fn dot(&self, other: &Array) -> Result<f64> {
        ensure_same_len(self.len(), other.len())?;
        Ok(self.iter().zip(other.iter()).map(|(a, b)| a * b).sum())
    }

    /// Copy of the elements in `start..end`.
    pub fn slice(&self, start: usize, end: usize) -> Result<Array> {
        ensure_range(start, end, self.len())?;
        Ok(Array::from_vec(self.data[start..end].to_vec()))
    }

    /// `self[i] - other[i]` for `i` in `start..end`.
    pub fn sub_slice(&self, other: &Array, start: usize, end: usize) -> Result<Array> {
        ensure_range(start, end, self.len())?;
        ensure_range(start, end, other.len())?;
        Ok(self.data[start..end]
            .iter()
            .zip(other.data[start..end].iter())
            .map(|(a, b)| a - b)
            .collect())
    }

    /// `self[i] / value` for `i` in `start..end`.
    pub fn div_slice(&self, value: f64, start: usize, end: usize) -> Result<Array> {
        ensure_range(start, end, self.len())?;
        Ok(self.data[start..end].iter().map(|v| v / value).collect())
    }

    /// Treat `self` as ordinates sampled at `x` and resample them at `new_x`.
    pub fn linear_interpolate(&self, x: &Array, new_x: &Array) -> Result<Array> {
        interp1d(x.as_slice(), self.as_slice(), new_x.as_slice())
    }

    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    // Reductions below follow the statistics helper and return NaN on empty
    // input. The `try_` variants turn that case into `ArrayError::EmptyInput`.

    pub fn mean(&self) -> f64 {
        self.log_if_empty("mean");
        Statistics::mean(self.data.iter())
    }

    /// Population standard deviation.
    pub fn std_dev(&self) -> f64 {
        self.log_if_empty("std_dev");
        Statistics::population_std_dev(self.data.iter())
    }

    pub fn min(&self) -> f64 {
        self.log_if_empty("min");
        Statistics::min(self.data.iter())
    }

    pub fn max(&self) -> f64 {
        self.log_if_empty("max");
        Statistics::max(self.data.iter())
    }

    pub fn try_mean(&self) -> Result<f64> {
        self.ensure_non_empty()?;
        Ok(self.mean())
    }

    pub fn try_std_dev(&self) -> Result<f64> {
        self.ensure_non_empty()?;
        Ok(self.std_dev())
    }

    pub fn try_min(&self) -> Result<f64> {
        self.ensure_non_empty()?;
        Ok(self.min())
    }

    pub fn try_max(&self) -> Result<f64> {
        self.ensure_non_empty()?;
        Ok(self.max())
    }

    fn ensure_non_empty(&self) -> Result<()> {
        if self.is_empty() {
            return Err(ArrayError::EmptyInput);
        }
        Ok(())
    }

    fn log_if_empty(&self, op: &str) {
        if self.is_empty() {
            log::debug!("{} over an empty array yields NaN", op);
        }
    }

    /// Render as `[v0 v1 ... ]` with `opts.precision` decimals per value.
    pub fn render(&self, opts: &PrintOptions) -> String {
        let mut buf = String::from("[");
        for v in self.data.iter() {
            buf.push_str(&format!("{:.*} ", opts.precision, v));
        }
        buf.push(']');
        buf
    }
}

impl From<Vec<f64>> for Array {
    fn from(value: Vec<f64>) -> Self {
        Array::from_vec(value)
    }
}

impl From<&[f64]> for Array {
    fn from(value: &[f64]) -> Self {
        Array::from_vec(value.to_vec())
    }
}

impl From<Array> for Vec<f64> {
    fn from(value: Array) -> Self {
        value.data
    }
}

impl FromIterator<f64> for Array {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Array::from_vec(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a f64;
    type IntoIter = Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl Index<usize> for Array {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl IndexMut<usize> for Array {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(&PrintOptions::default()))
    }
}
