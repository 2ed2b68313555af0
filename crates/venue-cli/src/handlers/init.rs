use anyhow::{bail, Context as _, Result};
use std::fs;
use std::path::Path;

use venue_store::Config;

use crate::context::ExecutionContext;

pub fn handle(
    ctx: &ExecutionContext,
    program: &Path,
    images: Option<&Path>,
    access_code: Option<String>,
    force: bool,
) -> Result<()> {
    println!("Initializing venue data directory: {}", ctx.data_dir().display());

    // Parse before installing so a broken file never lands in the data dir.
    let parsed = venue_store::load_program(program)
        .with_context(|| format!("Invalid program data: {}", program.display()))?;

    let target = ctx.program_path();
    if target.exists() && !force {
        bail!(
            "Program data already installed at {}. Re-run with --force to replace it.",
            target.display()
        );
    }

    fs::create_dir_all(ctx.data_dir())?;
    fs::copy(program, &target)
        .with_context(|| format!("Failed to install program data to {}", target.display()))?;

    let session_count: usize = parsed.days().iter().map(|d| d.sessions.len()).sum();
    println!(
        "  Installed program: {} days, {} sessions",
        parsed.days().len(),
        session_count
    );

    if let Some(images) = images {
        let images_target = ctx.images_path();
        fs::copy(images, &images_target).with_context(|| {
            format!("Failed to install speaker images to {}", images_target.display())
        })?;
        println!("  Installed speaker images");
    }

    let config_path = Config::path_in(ctx.data_dir());
    if access_code.is_some() || !config_path.exists() {
        let config = Config { access_code };
        config.save_to(&config_path)?;
        println!("  Config written: {}", config_path.display());
    }

    println!("\nNext:");
    println!("  venue unlock <code>");
    println!("  venue agenda --day <key>");
    Ok(())
}
