use log::{debug, warn};

use crate::generator::errors::GenerationError;
use crate::problem::Problem;

/// Run `generator` up to `max_attempts` times and keep the first success.
///
/// Each attempt is independent apart from the random draws it consumes.
///
/// # Errors
///
/// Returns [`GenerationError::ExhaustedRetries`] when every attempt fails.
pub fn retry<F>(mut generator: F, max_attempts: usize) -> Result<Problem, GenerationError>
where
    F: FnMut() -> Result<Problem, GenerationError>,
{
    for attempt in 1..=max_attempts {
        match generator() {
            Ok(problem) => return Ok(problem),
            Err(err) => debug!("Attempt {}/{} failed: {}", attempt, max_attempts, err),
        }
    }

    Err(GenerationError::ExhaustedRetries {
        attempts: max_attempts,
    })
}

/// Like [`retry`], but substitutes [`Problem::Fallback`] (`1 + 1 =`) when
/// every attempt fails.
pub fn safe_generate<F>(generator: F, max_attempts: usize) -> Problem
where
    F: FnMut() -> Result<Problem, GenerationError>,
{
    retry(generator, max_attempts).unwrap_or_else(|err| {
        warn!("{}, using fallback problem", err);
        Problem::Fallback
    })
}
