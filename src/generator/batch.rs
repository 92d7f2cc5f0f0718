use log::info;
use rayon::prelude::*;

use crate::generator::config::GeneratorConfig;
use crate::generator::engine::{ProblemGenerator, check_batch_size};
use crate::generator::errors::ConfigError;
use crate::problem::Problem;

/// Generate `count` problems across the rayon pool.
///
/// Every worker owns its own OS-seeded generator over a copy of `config`,
/// so no state is shared between threads. Output is not reproducible; use
/// [`ProblemGenerator::with_seed`] for that.
///
/// # Errors
///
/// Returns an error if no operation is enabled or `count` exceeds the
/// batch limit.
pub fn generate_batch_parallel(
    config: &GeneratorConfig,
    count: usize,
) -> Result<Vec<Problem>, ConfigError> {
    check_batch_size(count)?;
    config.validate()?;
    info!("Generating {} problems in parallel", count);

    let config = *config;
    Ok((0..count)
        .into_par_iter()
        .map_init(
            || ProblemGenerator::new(config),
            |generator, _| generator.generate(),
        )
        .collect())
}
