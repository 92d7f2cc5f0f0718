use log::debug;
use rand::Rng;

use crate::generator::errors::GenerationError;

/// Draw uniformly from `[lo, hi]`, or from `[fallback_lo, fallback_hi]` when
/// `lo > hi`.
///
/// A reversed fallback range is swapped rather than rejected, so this never
/// fails.
pub fn safe_random<R: Rng>(
    rng: &mut R,
    lo: i64,
    hi: i64,
    fallback_lo: i64,
    fallback_hi: i64,
) -> i64 {
    if lo <= hi {
        return rng.random_range(lo..=hi);
    }

    debug!(
        "Empty range [{}, {}], drawing from fallback [{}, {}]",
        lo, hi, fallback_lo, fallback_hi
    );
    if fallback_lo <= fallback_hi {
        rng.random_range(fallback_lo..=fallback_hi)
    } else {
        rng.random_range(fallback_hi..=fallback_lo)
    }
}

/// Draw uniformly from `[lo, hi]`.
///
/// # Errors
///
/// Returns [`GenerationError::InfeasibleRange`] when `lo > hi`.
pub(crate) fn draw<R: Rng>(rng: &mut R, lo: i64, hi: i64) -> Result<i64, GenerationError> {
    if lo > hi {
        debug!("Empty range [{}, {}]", lo, hi);
        return Err(GenerationError::InfeasibleRange { lo, hi });
    }
    Ok(rng.random_range(lo..=hi))
}
