//! CLI command handlers, one generator per file.

mod checksums;
mod homebrew_cask;
mod homebrew_formula;
mod scoop_desktop;
mod scoop_mcp;

pub use checksums::run_checksums;
pub use homebrew_cask::run_homebrew_cask;
pub use homebrew_formula::run_homebrew_formula;
pub use scoop_desktop::run_scoop_desktop;
pub use scoop_mcp::run_scoop_mcp;

use anyhow::Result;
use fotos_release_core::checksum;
use std::path::Path;

/// Digest given on the command line, or computed from `--artifact`.
/// Clap guarantees exactly one of the two is present.
pub fn resolve_digest(sha256: Option<String>, artifact: Option<&Path>) -> Result<String> {
    match (sha256, artifact) {
        (Some(sha), _) => Ok(sha),
        (None, Some(path)) => {
            let digest = checksum::sha256_path(path)?;
            tracing::info!(artifact = %path.display(), "computed sha256");
            Ok(digest)
        }
        (None, None) => anyhow::bail!("either a sha256 or --artifact is required"),
    }
}
