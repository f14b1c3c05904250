use selam_config::Config;
use selam_core::{CurriculumGenerator, practice_set_with_size};

use crate::catalog::build_catalog;
use crate::commands::rng_from_seed;

pub fn run(
    config: &Config,
    native: &str,
    learning: &str,
    kind: &str,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    let catalog = build_catalog(config);
    let generator = CurriculumGenerator::new(&catalog);
    let mut rng = rng_from_seed(seed);

    let curriculum = generator.generate_with_rng(native, learning, &mut rng);
    let lesson = practice_set_with_size(
        &curriculum,
        kind,
        config.generator.practice_size,
        &mut rng,
    );

    println!("{}", serde_json::to_string_pretty(&lesson)?);
    Ok(())
}
