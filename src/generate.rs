// Uniform random matrix generation, the core of the crate.
// The RNG is passed in by the caller, so every call (and every test)
// owns an isolated, deterministic source.
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use super::matrix::Matrix;
use super::Element;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    /// The sampling range is empty
    #[error("invalid sampling range: min {min} > max {max}")]
    InvalidRange { min: Element, max: Element },

    /// Zero rows or columns requested
    #[error("matrix dimensions must be positive, got {rows}x{cols}")]
    InvalidDimension { rows: usize, cols: usize },
}

/// Generate a `rows x cols` matrix of integers drawn uniformly from
/// `[min_value, max_value]` inclusive, using the given RNG.
pub fn generate(
    rows: usize,
    cols: usize,
    min_value: Element,
    max_value: Element,
    rng: &mut impl Rng,
) -> Result<Matrix, GenerateError> {
    if rows == 0 || cols == 0 {
        return Err(GenerateError::InvalidDimension { rows, cols });
    }
    if min_value > max_value {
        return Err(GenerateError::InvalidRange {
            min: min_value,
            max: max_value,
        });
    }
    Ok(Matrix::from_fn(rows, cols, |_, _| {
        rng.gen_range(min_value..=max_value)
    }))
}

/// Like [`generate`], but builds the RNG internally: `Some(seed)` gives
/// a reproducible matrix, `None` draws from OS entropy.
pub fn generate_with_seed(
    rows: usize,
    cols: usize,
    min_value: Element,
    max_value: Element,
    seed: Option<u64>,
) -> Result<Matrix, GenerateError> {
    let mut rng = match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    generate(rows, cols, min_value, max_value, &mut rng)
}
