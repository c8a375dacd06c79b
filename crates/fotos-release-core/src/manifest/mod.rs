//! Manifest rendering and writing.
//!
//! Each renderer turns release coordinates and digests into the complete text
//! of one package-manager file. Rendering is deterministic: identical inputs
//! give byte-identical output. Writing always replaces the target file.

pub mod cask;
pub mod formula;
pub mod scoop;

use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Number of digest characters shown in summaries.
const DIGEST_PREFIX_LEN: usize = 16;

/// A fully rendered manifest plus what the summary reports about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedManifest {
    pub contents: String,
    pub version: String,
    /// Download URL, for manifests that point at a single artifact.
    pub url: Option<String>,
    /// `(label, digest)` pairs in output order.
    pub digests: Vec<(String, String)>,
}

impl RenderedManifest {
    /// Human-readable lines printed after writing to `path`.
    pub fn summary(&self, path: &Path) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Wrote {} (version {})", path.display(), self.version);
        if let Some(url) = &self.url {
            let _ = writeln!(out, "  url: {url}");
        }
        for (label, digest) in &self.digests {
            let _ = writeln!(out, "  {label}: {}...", short_digest(digest));
        }
        out
    }
}

/// First 16 characters of a digest (or all of it when shorter).
pub fn short_digest(digest: &str) -> &str {
    match digest.char_indices().nth(DIGEST_PREFIX_LEN) {
        Some((idx, _)) => &digest[..idx],
        None => digest,
    }
}

/// Write `manifest` to `path`, creating parent directories and replacing any
/// existing file. Not atomic: a crash mid-write can leave a truncated file.
pub fn write_manifest(path: &Path, manifest: &RenderedManifest) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    fs::write(path, &manifest.contents).with_context(|| format!("write {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        version = %manifest.version,
        bytes = manifest.contents.len(),
        "wrote manifest"
    );
    Ok(())
}

/// Pretty JSON with four-space indentation and a trailing newline, as Scoop
/// buckets format their manifests.
pub(crate) fn to_pretty_json<T: serde::Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser).context("serialize manifest JSON")?;
    let mut out = String::from_utf8(buf).context("manifest JSON is not UTF-8")?;
    out.push('\n');
    Ok(out)
}
