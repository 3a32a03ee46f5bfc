//! Array types of the crate.
//!
//! `Array` is an owned one-dimensional `f64` sequence, `Stack` is a list of
//! equal-length arrays treated as matrix rows. Both are plain values: every
//! operation returns a fresh result and never aliases the receiver.
pub mod interpolation;
pub mod matrix;
pub mod vector;

pub use interpolation::interp1d;
pub use matrix::Stack;
pub use vector::Array;
