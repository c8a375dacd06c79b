//! `fotos-release homebrew-cask` – desktop app cask.

use anyhow::Result;
use fotos_release_core::config::ReleaseConfig;
use fotos_release_core::manifest::{self, cask};

use crate::cli::TargetArgs;

pub fn run_homebrew_cask(
    cfg: &ReleaseConfig,
    target: &TargetArgs,
    appimage_sha: &str,
) -> Result<()> {
    let rendered = cask::render(cfg, &target.release(cfg), appimage_sha);
    manifest::write_manifest(&target.path, &rendered)?;
    print!("{}", rendered.summary(&target.path));
    Ok(())
}
