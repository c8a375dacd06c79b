//! `fotos-release checksums` – hash artifacts into a listing the generators can read.

use anyhow::{Context, Result};
use fotos_release_core::checksum;
use std::fs;
use std::path::{Path, PathBuf};

/// One `<sha256>  <file name>` line per artifact, in argument order. Only the
/// file name is recorded, matching how release assets are named.
pub fn run_checksums(files: &[PathBuf], output: Option<&Path>) -> Result<()> {
    let mut listing = String::new();
    for file in files {
        let digest = checksum::sha256_path(file)?;
        let name = file
            .file_name()
            .with_context(|| format!("no file name in {}", file.display()))?
            .to_string_lossy();
        listing.push_str(&checksum::listing_line(&digest, &name));
        listing.push('\n');
    }

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("create directory {}", parent.display()))?;
            }
            fs::write(path, &listing).with_context(|| format!("write {}", path.display()))?;
            println!("Wrote {} ({} files)", path.display(), files.len());
        }
        None => print!("{listing}"),
    }
    Ok(())
}
