//! Crate-level configuration: text rendering and random number generation.
//!
//! Configuration is plain serde data so it can be embedded in a larger
//! application config or loaded from JSON on its own.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Controls how arrays and stacks are rendered as text.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PrintOptions {
    /// Decimal places per value.
    pub precision: usize,
}

impl PrintOptions {
    pub const DEFAULT_PRECISION: usize = 8;

    pub fn new(precision: usize) -> Self {
        Self { precision }
    }
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            precision: Self::DEFAULT_PRECISION,
        }
    }
}

impl FromStr for PrintOptions {
    type Err = String;

    /// Accepts a bare precision (`"4"`) or `"precision=4"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        let value = value
            .strip_prefix("precision=")
            .map(str::trim)
            .unwrap_or(value);
        value
            .parse::<usize>()
            .map(PrintOptions::new)
            .map_err(|e| format!("Invalid print options '{}': {}", s, e))
    }
}

/// Source of randomness for the sampling helpers.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct RandomConfig {
    /// Fixed seed for reproducible draws; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl RandomConfig {
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Central configuration for the crate.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct NpConfig {
    pub print: PrintOptions,
    pub random: RandomConfig,
}

impl NpConfig {
    pub fn new(print: PrintOptions, random: RandomConfig) -> Self {
        Self { print, random }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse nplite config JSON")
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_json_str(&contents)
            .with_context(|| format!("Invalid config in {}", path.display()))?;
        log::debug!("loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}
