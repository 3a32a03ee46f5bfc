//! Free functions: array construction, element-wise helpers and random
//! sampling.
pub mod construct;
pub mod random;

pub use construct::{arange, exp, linspace, reciprocal_scale, zeros, MAX_LEN};
pub use random::{covering_mask, rand_choice, randn};
