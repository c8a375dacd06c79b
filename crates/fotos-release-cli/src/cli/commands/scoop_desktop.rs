//! `fotos-release scoop-desktop` – desktop app Scoop manifest.

use anyhow::Result;
use fotos_release_core::config::ReleaseConfig;
use fotos_release_core::manifest::{self, scoop};

use crate::cli::TargetArgs;

pub fn run_scoop_desktop(cfg: &ReleaseConfig, target: &TargetArgs, msi_sha: &str) -> Result<()> {
    let rendered = scoop::render_desktop(cfg, &target.release(cfg), msi_sha)?;
    manifest::write_manifest(&target.path, &rendered)?;
    print!("{}", rendered.summary(&target.path));
    Ok(())
}
