//! nplite: a small NumPy-inspired numeric array library.
//!
//! This crate provides a one-dimensional `f64` array (`Array`) with
//! element-wise arithmetic, reductions, slicing, shuffling and linear
//! interpolation, plus a `Stack` of equal-length arrays that applies the same
//! operations row-wise and adds aggregate statistics across rows.
//!
//! Construction helpers (`linspace`, `arange`, `zeros`) and random sampling
//! live in `utils`. Binary operations on mismatched shapes fail fast with an
//! `ArrayError`; nothing is computed partially.
pub mod config;
pub mod error;
pub mod math;
pub mod utils;

pub use config::{NpConfig, PrintOptions, RandomConfig};
pub use error::{ArrayError, Result};
pub use math::{interp1d, Array, Stack};
