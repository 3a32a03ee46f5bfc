use std::fmt;
use std::ops::Index;
use std::slice::Iter;

use crate::config::PrintOptions;
use crate::error::{ensure_range, ArrayError, Result};
use crate::math::vector::Array;

/// Rows of equal-length arrays, treated as a row-major matrix.
///
/// Row-wise operations delegate to the matching `Array` method and return a
/// new `Stack` (or an `Array` with one value per row for reductions).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stack {
    rows: Vec<Array>,
    cols: usize,
}

impl Stack {
    /// Build a stack, rejecting rows whose length differs from the first row.
    pub fn new(rows: Vec<Array>) -> Result<Self> {
        let cols = rows.first().map_or(0, Array::len);
        if let Some((row, found)) = rows
            .iter()
            .map(Array::len)
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            log::debug!("rejecting ragged stack at row {}", row);
            return Err(ArrayError::RaggedRows {
                row,
                expected: cols,
                found,
            });
        }
        Ok(Self { rows, cols })
    }

    pub fn from_vecs(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::new(rows.into_iter().map(Array::from_vec).collect())
    }

    // Only for rows produced by a length-preserving map over a valid stack.
    fn from_uniform_rows(rows: Vec<Array>) -> Self {
        let cols = rows.first().map_or(0, Array::len);
        Self { rows, cols }
    }

    fn map_rows<F>(&self, f: F) -> Stack
    where
        F: FnMut(&Array) -> Array,
    {
        Stack::from_uniform_rows(self.rows.iter().map(f).collect())
    }

    fn try_map_rows<F>(&self, f: F) -> Result<Stack>
    where
        F: FnMut(&Array) -> Result<Array>,
    {
        let rows = self.rows.iter().map(f).collect::<Result<Vec<_>>>()?;
        Ok(Stack::from_uniform_rows(rows))
    }

    fn reduce_rows<F>(&self, f: F) -> Array
    where
        F: FnMut(&Array) -> f64,
    {
        self.rows.iter().map(f).collect()
    }

    /// Pair row `i` with `per_row[i]`; the vector must have one entry per row.
    fn map_rows_with<F>(&self, per_row: &Array, mut f: F) -> Result<Stack>
    where
        F: FnMut(&Array, f64) -> Array,
    {
        if per_row.len() != self.nrows() {
            return Err(ArrayError::RowCountMismatch {
                left: self.nrows(),
                right: per_row.len(),
            });
        }
        Ok(Stack::from_uniform_rows(
            self.rows
                .iter()
                .zip(per_row.iter())
                .map(|(row, &v)| f(row, v))
                .collect(),
        ))
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    /// `(rows, columns)`; a stack built from no rows is `(0, 0)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows(), self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Array] {
        &self.rows
    }

    pub fn row(&self, row: usize) -> Option<&Array> {
        self.rows.get(row)
    }

    pub fn iter(&self) -> Iter<'_, Array> {
        self.rows.iter()
    }

    pub fn into_rows(self) -> Vec<Array> {
        self.rows
    }

    /// Reorder rows: row `i` of the result is row `indices[i]` of `self`.
    pub fn shuffle(&self, indices: &[usize]) -> Result<Stack> {
        if indices.len() != self.nrows() {
            return Err(ArrayError::RowCountMismatch {
                left: self.nrows(),
                right: indices.len(),
            });
        }
        let rows = indices
            .iter()
            .map(|&idx| {
                self.rows.get(idx).cloned().ok_or(ArrayError::IndexOutOfBounds {
                    index: idx,
                    len: self.nrows(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Stack {
            rows,
            cols: self.cols,
        })
    }

    /// Element `col` of every row.
    pub fn column(&self, col: usize) -> Result<Array> {
        if col >= self.cols {
            return Err(ArrayError::IndexOutOfBounds {
                index: col,
                len: self.cols,
            });
        }
        Ok(self.reduce_rows(|row| row[col]))
    }

    pub fn mean(&self) -> Array {
        self.reduce_rows(Array::mean)
    }

    /// Mean of the per-row means.
    pub fn scalar_mean(&self) -> f64 {
        self.mean().mean()
    }

    pub fn std_dev(&self) -> Array {
        self.reduce_rows(Array::std_dev)
    }

    /// Combined standard deviation across rows.
    ///
    /// Within-row variance plus the squared deviation of each row mean from
    /// the mean of means, averaged over rows:
    /// ```text
    /// sqrt( sum_i (std_i^2 + (mean_i - scalar_mean)^2) / nrows )
    /// ```
    /// A stack with no rows sums nothing and returns `0.0`, unlike
    /// `scalar_mean` which returns `NaN`.
    pub fn scalar_std_dev(&self) -> f64 {
        let std = self.std_dev();
        let mean = self.mean();
        let scalar_mean = self.scalar_mean();
        let within = std.powf(2.0);
        let between = mean.sub_scalar(scalar_mean).powf(2.0);
        // both arrays hold one value per row
        within
            .iter()
            .zip(between.iter())
            .map(|(w, b)| (w + b) / std.len() as f64)
            .sum::<f64>()
            .sqrt()
    }

    pub fn max(&self) -> Array {
        self.reduce_rows(Array::max)
    }

    pub fn min(&self) -> Array {
        self.reduce_rows(Array::min)
    }

    pub fn sum(&self) -> Array {
        self.reduce_rows(Array::sum)
    }

    /// Subtract `per_row[i]` from every element of row `i`.
    pub fn sub(&self, per_row: &Array) -> Result<Stack> {
        self.map_rows_with(per_row, |row, v| row.sub_scalar(v))
    }

    /// Divide every element of row `i` by `per_row[i]`.
    pub fn div(&self, per_row: &Array) -> Result<Stack> {
        self.map_rows_with(per_row, |row, v| row.div_scalar(v))
    }

    /// Row-wise sum of two stacks.
    pub fn add(&self, other: &Stack) -> Result<Stack> {
        if self.nrows() != other.nrows() {
            return Err(ArrayError::RowCountMismatch {
                left: self.nrows(),
                right: other.nrows(),
            });
        }
        let rows = self
            .rows
            .iter()
            .zip(other.rows.iter())
            .map(|(a, b)| a.add(b))
            .collect::<Result<Vec<_>>>()?;
        Ok(Stack::from_uniform_rows(rows))
    }

    pub fn add_scalar(&self, value: f64) -> Stack {
        self.map_rows(|row| row.add_scalar(value))
    }

    pub fn sub_scalar(&self, value: f64) -> Stack {
        self.map_rows(|row| row.sub_scalar(value))
    }

    pub fn mul_scalar(&self, value: f64) -> Stack {
        self.map_rows(|row| row.mul_scalar(value))
    }

    pub fn div_scalar(&self, value: f64) -> Stack {
        self.map_rows(|row| row.div_scalar(value))
    }

    pub fn mapv<F>(&self, mut f: F) -> Stack
    where
        F: FnMut(f64) -> f64,
    {
        self.map_rows(|row| row.mapv(&mut f))
    }

    pub fn slice(&self, start: usize, end: usize) -> Result<Stack> {
        ensure_range(start, end, self.cols)?;
        self.try_map_rows(|row| row.slice(start, end))
    }

    pub fn sub_slice(&self, other: &Array, start: usize, end: usize) -> Result<Stack> {
        ensure_range(start, end, self.cols)?;
        self.try_map_rows(|row| row.sub_slice(other, start, end))
    }

    pub fn div_slice(&self, value: f64, start: usize, end: usize) -> Result<Stack> {
        ensure_range(start, end, self.cols)?;
        self.try_map_rows(|row| row.div_slice(value, start, end))
    }

    /// Resample every row from abscissas `x` to `new_x`.
    pub fn linear_interpolate(&self, x: &Array, new_x: &Array) -> Result<Stack> {
        let rows = self
            .rows
            .iter()
            .map(|row| row.linear_interpolate(x, new_x))
            .collect::<Result<Vec<_>>>()?;
        Ok(Stack {
            rows,
            cols: new_x.len(),
        })
    }

    /// Replace every row with `n` points `start + j * (end - start) / n`.
    ///
    /// The step divides by `n`, so `end` itself is never reached. The free
    /// function `utils::linspace` includes the endpoint instead.
    pub fn linspace(&self, start: f64, end: f64, n: usize) -> Stack {
        let step = (end - start) / n as f64;
        let row: Array = (0..n).map(|j| start + j as f64 * step).collect();
        Stack {
            rows: vec![row; self.nrows()],
            cols: n,
        }
    }

    /// True when both stacks have the same row count and every pair of rows
    /// is `almost_equal` at `epsilon`.
    pub fn all_almost_equal(&self, other: &Stack, epsilon: f64) -> bool {
        self.nrows() == other.nrows()
            && self
                .rows
                .iter()
                .zip(other.rows.iter())
                .all(|(a, b)| a.almost_equal(b, epsilon))
    }

    pub fn render(&self, opts: &PrintOptions) -> String {
        let mut buf = String::from("[");
        for row in self.rows.iter() {
            buf.push_str(&row.render(opts));
            buf.push('\n');
        }
        buf.push(']');
        buf
    }
}

impl Index<usize> for Stack {
    type Output = Array;

    fn index(&self, row: usize) -> &Self::Output {
        &self.rows[row]
    }
}

impl Index<(usize, usize)> for Stack {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.rows[index.0][index.1]
    }
}

impl<'a> IntoIterator for &'a Stack {
    type Item = &'a Array;
    type IntoIter = Iter<'a, Array>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(&PrintOptions::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Stack {
        Stack::from_vecs(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap()
    }

    #[test]
    fn test_new_rejects_ragged_rows() {
        let err = Stack::from_vecs(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            ArrayError::RaggedRows {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_empty_stack_shape() {
        let s = Stack::new(vec![]).unwrap();
        assert_eq!(s.shape(), (0, 0));
        assert!(s.is_empty());
    }

    #[test]
    fn test_element_index() {
        let s = sample();
        assert_eq!(s[(1, 2)], 6.0);
        assert_eq!(s.row(0).map(Array::to_vec), Some(vec![1.0, 2.0, 3.0]));
        assert!(s.row(2).is_none());
    }

    #[test]
    fn test_map_rows_with_requires_one_value_per_row() {
        let s = sample();
        let err = s.sub(&Array::from_vec(vec![1.0])).unwrap_err();
        assert_eq!(err, ArrayError::RowCountMismatch { left: 2, right: 1 });
    }

    #[test]
    fn test_empty_stack_statistics() {
        let s = Stack::default();
        assert!(s.scalar_mean().is_nan());
        assert_eq!(s.scalar_std_dev(), 0.0);
    }

    #[test]
    fn test_linspace_keeps_row_count_on_empty_stack() {
        let s = Stack::default().linspace(0.0, 1.0, 4);
        assert_eq!(s.shape(), (0, 4));
    }
}
