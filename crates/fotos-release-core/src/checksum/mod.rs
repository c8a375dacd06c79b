//! Checksum listings: map release artifacts to per-platform SHA-256 digests.
//!
//! A listing is the plain-text file published next to the release archives,
//! one `<digest> <filename>` pair per line. The platform of each line is found
//! by substring match of a known platform identifier against the filename.

mod digest;
mod listing;

pub use digest::{listing_line, sha256_path};
pub use listing::{ChecksumMap, Precedence};

use std::fmt;
use std::path::PathBuf;

/// Operating system + architecture identifier used in artifact names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Platform {
    DarwinArm64,
    DarwinAmd64,
    LinuxArm64,
    LinuxAmd64,
    WindowsAmd64,
}

impl Platform {
    /// Platforms with a Homebrew formula branch, in formula order.
    pub const UNIX: [Platform; 4] = [
        Platform::DarwinArm64,
        Platform::DarwinAmd64,
        Platform::LinuxArm64,
        Platform::LinuxAmd64,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::DarwinArm64 => "darwin_arm64",
            Platform::DarwinAmd64 => "darwin_amd64",
            Platform::LinuxArm64 => "linux_arm64",
            Platform::LinuxAmd64 => "linux_amd64",
            Platform::WindowsAmd64 => "windows_amd64",
        }
    }

    /// Archive extension of the MCP server build for this platform.
    pub fn archive_extension(self) -> &'static str {
        match self {
            Platform::WindowsAmd64 => "zip",
            _ => "tar.gz",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ChecksumError {
    /// A generator needs this platform and the listing has no line for it.
    #[error("{platform} checksum not found in {}", .path.display())]
    MissingPlatform { platform: Platform, path: PathBuf },
}
