// Runs the three dataset presets against ../Data, the layout the datasets
// are unpacked into. Everything else lives in the library.
use std::path::Path;

use anyhow::{Context, Result};

use facegrid::logging::{init_logger, level_from_env};
use facegrid::{presets, Exporter};

fn main() -> Result<()> {
    init_logger(level_from_env()).context("Failed to initialize logger")?;

    let data_dir = Path::new("../Data");
    for (name, config) in presets::all(data_dir) {
        log::info!("running preset {}", name);
        let report = Exporter::new(config)
            .with_context(|| format!("invalid preset {}", name))?
            .export()
            .with_context(|| format!("preset {} failed", name))?;
        println!(
            "{}: {} image(s) -> {} table(s)",
            name,
            report.converted,
            report.tables.len()
        );
    }
    Ok(())
}
