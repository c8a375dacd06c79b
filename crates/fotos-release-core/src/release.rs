//! Release coordinates and the artifact naming convention.
//!
//! Every download URL has the shape
//! `https://github.com/<repository>/releases/download/<tag>/<artifact>`,
//! where the artifact name embeds the version. Neither version nor tag is
//! escaped; both come from the release pipeline.

use crate::checksum::Platform;

/// Name of the desktop app artifacts (`fotos_<version>_...`).
pub const DESKTOP_NAME: &str = "fotos";
/// Name of the MCP server binary and its archives.
pub const MCP_NAME: &str = "fotos-mcp";

/// A published GitHub release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    pub repository: String,
    pub version: String,
    pub tag: String,
}

impl Release {
    pub fn new(
        repository: impl Into<String>,
        version: impl Into<String>,
        tag: impl Into<String>,
    ) -> Self {
        Self {
            repository: repository.into(),
            version: version.into(),
            tag: tag.into(),
        }
    }

    /// `https://github.com/<repository>/releases/download/<tag>`
    pub fn base_url(&self) -> String {
        format!(
            "https://github.com/{}/releases/download/{}",
            self.repository, self.tag
        )
    }

    pub fn asset_url(&self, artifact: &str) -> String {
        format!("{}/{}", self.base_url(), artifact)
    }

    pub fn appimage(&self) -> String {
        appimage_name(&self.version)
    }

    pub fn dmg(&self) -> String {
        format!("{DESKTOP_NAME}_{}_x64.dmg", self.version)
    }

    pub fn msi(&self) -> String {
        msi_name(&self.version)
    }

    pub fn mcp_archive(&self, platform: Platform) -> String {
        mcp_archive_name(&self.version, platform)
    }
}

/// `fotos_<version>_amd64.AppImage`. Also used with `#{version}` as the Ruby interpolation.
pub fn appimage_name(version: &str) -> String {
    format!("{DESKTOP_NAME}_{version}_amd64.AppImage")
}

pub fn msi_name(version: &str) -> String {
    format!("{DESKTOP_NAME}_{version}_x64_en-US.msi")
}

pub fn mcp_archive_name(version: &str, platform: Platform) -> String {
    format!(
        "{MCP_NAME}_{version}_{platform}.{}",
        platform.archive_extension()
    )
}

/// URL template Scoop's autoupdate fills in; `$version` is Scoop's placeholder.
pub fn autoupdate_url(repository: &str, artifact_template: &str) -> String {
    format!("https://github.com/{repository}/releases/download/v$version/{artifact_template}")
}
