//! Random sampling helpers driven by a caller-owned generator.
//!
//! The generator is passed in explicitly so that draws are reproducible with a
//! seeded `StdRng` (see `RandomConfig::rng`).

use rand::distributions::Distribution;
use rand::{Rng, RngCore};
use statrs::distribution::Normal;

use crate::error::{ArrayError, Result};
use crate::math::vector::Array;

/// `n` independent standard-normal samples.
pub fn randn<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Result<Array> {
    let normal = Normal::new(0.0, 1.0).map_err(|e| ArrayError::Distribution(e.to_string()))?;
    Ok((0..n).map(|_| normal.sample(rng)).collect())
}

/// Smallest all-ones bitmask covering `value` (next power of two minus one).
pub fn covering_mask(value: u64) -> u64 {
    let mut mask = value;
    mask |= mask >> 1;
    mask |= mask >> 2;
    mask |= mask >> 4;
    mask |= mask >> 8;
    mask |= mask >> 16;
    mask |= mask >> 32;
    mask
}

/// Uniform integer in `[0, n)` by rejection sampling.
///
/// Each draw is a `u32` masked down to the smallest power-of-two range
/// covering `n - 1`; draws `>= n` are discarded, which avoids modulo bias.
/// At most half of the masked range is rejected, so the expected number of
/// draws is below two.
pub fn rand_choice<R: RngCore + ?Sized>(rng: &mut R, n: usize) -> Result<usize> {
    let bound = n as u64;
    if bound == 0 || bound > u64::from(u32::MAX) + 1 {
        return Err(ArrayError::InvalidChoice(n));
    }
    let mask = covering_mask(bound - 1);

    let mut rejected = 0usize;
    loop {
        let candidate = u64::from(rng.next_u32()) & mask;
        if candidate < bound {
            if rejected > 0 {
                log::trace!("rand_choice({}) rejected {} draws", n, rejected);
            }
            return Ok(candidate as usize);
        }
        rejected += 1;
    }
}
