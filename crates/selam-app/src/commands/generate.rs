use std::fs;
use std::path::Path;

use selam_config::Config;
use selam_core::CurriculumGenerator;

use crate::catalog::build_catalog;
use crate::commands::rng_from_seed;

pub fn run(
    config: &Config,
    native: &str,
    learning: &str,
    out: Option<&Path>,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    let catalog = build_catalog(config);
    let generator = CurriculumGenerator::new(&catalog);
    let mut rng = rng_from_seed(seed);

    let curriculum = generator.generate_with_rng(native, learning, &mut rng);
    let json = serde_json::to_string_pretty(&curriculum)?;

    match out {
        Some(path) => {
            fs::write(path, json)?;
            tracing::info!("Wrote curriculum to {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
