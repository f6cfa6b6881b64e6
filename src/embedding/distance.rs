// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Vector distance.

use crate::error::{InvalidInput, Result};

use super::TermVector;

/// Euclidean distance between two term vectors.
///
/// Components are `f32` on disk; the sum is accumulated in `f64` so long
/// vectors don't lose precision. Vectors of different length mean the store
/// is corrupt and the call fails with `InvalidInput::DimensionMismatch`.
pub fn euclidean_distance(left: &TermVector, right: &TermVector) -> Result<f64> {
    let (a, b) = (left.as_slice(), right.as_slice());
    if a.len() != b.len() {
        return Err(InvalidInput::DimensionMismatch {
            expected: a.len(),
            found: b.len(),
        }
        .into());
    }

    let sum: f64 = a
        .iter()
        .zip(b)
        .map(|(x, y)| {
            let d = f64::from(*x) - f64::from(*y);
            d * d
        })
        .sum();
    Ok(sum.sqrt())
}
