use rand::Rng;

use crate::foundation::error::{MondriError, MondriResult};

/// Divisor of a golden-ratio split: the major part of a length `l` is `l / GOLDEN_RATIO`.
pub const GOLDEN_RATIO: f64 = 1.618033988749894;

/// Split `length` into `2^depth` segments by repeated golden-ratio division.
///
/// Each pass replaces every segment `l` with the pair `(l / phi, l - l / phi)`,
/// ordered by a fair coin flip so sibling regions need not mirror each other.
/// The output always sums back to `length` up to accumulated rounding, and
/// every segment is strictly positive.
///
/// Fails with [`MondriError::Partition`] when `depth < 1` or `length` is not
/// a positive finite number; a zero depth would return the input unsplit and
/// a non-positive length would produce degenerate segments.
pub fn divide<R: Rng + ?Sized>(length: f64, depth: u32, rng: &mut R) -> MondriResult<Vec<f64>> {
    if depth == 0 {
        return Err(MondriError::partition("depth must be >= 1"));
    }
    if !length.is_finite() || length <= 0.0 {
        return Err(MondriError::partition(format!(
            "length must be finite and > 0, got {length}"
        )));
    }

    let mut segments = vec![length];
    for _ in 0..depth {
        let mut next = Vec::with_capacity(segments.len() * 2);
        for len in segments {
            let major = len / GOLDEN_RATIO;
            let minor = len - major;
            if rng.random_bool(0.5) {
                next.push(major);
                next.push(minor);
            } else {
                next.push(minor);
                next.push(major);
            }
        }
        segments = next;
    }
    Ok(segments)
}

#[cfg(test)]
#[path = "../tests/unit/partition.rs"]
mod tests;
