//! Parse checksum listings into a platform → digest map.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use super::{ChecksumError, Platform};

/// Which line wins when several lines match the same platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precedence {
    /// Keep the first matching line; scanning stops once every platform is found.
    First,
    /// Scan the whole listing; later lines overwrite earlier ones.
    Last,
}

/// Digests found in one listing, at most one per platform.
#[derive(Debug, Clone)]
pub struct ChecksumMap {
    source: PathBuf,
    digests: BTreeMap<Platform, String>,
}

impl ChecksumMap {
    /// Read and scan the listing at `path` for the given platforms.
    pub fn read(path: &Path, platforms: &[Platform], precedence: Precedence) -> Result<Self> {
        let file =
            File::open(path).with_context(|| format!("open checksum listing {}", path.display()))?;
        Self::from_reader(BufReader::new(file), path, platforms, precedence)
    }

    /// Scan a listing. Lines that do not split into exactly two whitespace
    /// separated tokens are skipped; the digest token is taken as-is.
    pub fn from_reader<R: BufRead>(
        reader: R,
        source: impl Into<PathBuf>,
        platforms: &[Platform],
        precedence: Precedence,
    ) -> Result<Self> {
        let source = source.into();
        let mut digests = BTreeMap::new();

        for (lineno, line) in reader.lines().enumerate() {
            let line = line.with_context(|| format!("read {}", source.display()))?;
            let mut tokens = line.split_whitespace();
            let (digest, name) = match (tokens.next(), tokens.next(), tokens.next()) {
                (Some(digest), Some(name), None) => (digest, name),
                _ => {
                    tracing::trace!(line = lineno + 1, "skipping listing line");
                    continue;
                }
            };

            for &platform in platforms {
                if !name.contains(platform.as_str()) {
                    continue;
                }
                match precedence {
                    Precedence::Last => {
                        digests.insert(platform, digest.to_string());
                    }
                    Precedence::First => {
                        digests
                            .entry(platform)
                            .or_insert_with(|| digest.to_string());
                    }
                }
                tracing::debug!(%platform, file = name, "matched checksum");
            }

            if precedence == Precedence::First && digests.len() == platforms.len() {
                break;
            }
        }

        Ok(Self { source, digests })
    }

    pub fn get(&self, platform: Platform) -> Option<&str> {
        self.digests.get(&platform).map(String::as_str)
    }

    /// Digest for a platform the caller cannot do without.
    pub fn require(&self, platform: Platform) -> Result<&str, ChecksumError> {
        self.get(platform)
            .ok_or_else(|| ChecksumError::MissingPlatform {
                platform,
                path: self.source.clone(),
            })
    }

    /// Found digests in platform order.
    pub fn iter(&self) -> impl Iterator<Item = (Platform, &str)> {
        self.digests.iter().map(|(p, d)| (*p, d.as_str()))
    }

    pub fn len(&self) -> usize {
        self.digests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digests.is_empty()
    }

    pub fn source(&self) -> &Path {
        &self.source
    }
}
