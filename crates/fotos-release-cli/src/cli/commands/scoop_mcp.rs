//! `fotos-release scoop-mcp` – fotos-mcp Scoop manifest from a checksum listing.

use anyhow::Result;
use fotos_release_core::checksum::{ChecksumMap, Platform, Precedence};
use fotos_release_core::config::ReleaseConfig;
use fotos_release_core::manifest::{self, scoop};
use std::path::Path;

use crate::cli::TargetArgs;

/// Fails before touching the output path when the listing has no windows_amd64 entry.
pub fn run_scoop_mcp(
    cfg: &ReleaseConfig,
    target: &TargetArgs,
    checksums_path: &Path,
) -> Result<()> {
    let checksums =
        ChecksumMap::read(checksums_path, &[Platform::WindowsAmd64], Precedence::First)?;
    let rendered = scoop::render_mcp(cfg, &target.release(cfg), &checksums)?;
    manifest::write_manifest(&target.path, &rendered)?;
    print!("{}", rendered.summary(&target.path));
    Ok(())
}
