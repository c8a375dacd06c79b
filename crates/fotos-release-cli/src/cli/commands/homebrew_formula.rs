//! `fotos-release homebrew-formula` – fotos-mcp formula from a checksum listing.

use anyhow::Result;
use fotos_release_core::checksum::{ChecksumMap, Platform, Precedence};
use fotos_release_core::config::ReleaseConfig;
use fotos_release_core::manifest::{self, formula};
use std::path::Path;

use crate::cli::TargetArgs;

/// Platforms missing from the listing are left out of the formula.
pub fn run_homebrew_formula(
    cfg: &ReleaseConfig,
    target: &TargetArgs,
    checksums_path: &Path,
) -> Result<()> {
    let checksums = ChecksumMap::read(checksums_path, &Platform::UNIX, Precedence::Last)?;
    let rendered = formula::render(cfg, &target.release(cfg), &checksums)?;
    manifest::write_manifest(&target.path, &rendered)?;
    print!("{}", rendered.summary(&target.path));
    Ok(())
}
