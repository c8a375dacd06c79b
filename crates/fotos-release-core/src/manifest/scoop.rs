//! Scoop manifests: the desktop MSI installer and the MCP server zip.

use anyhow::Result;
use serde::Serialize;

use crate::checksum::{ChecksumMap, Platform};
use crate::config::ReleaseConfig;
use crate::release::{autoupdate_url, mcp_archive_name, msi_name, Release, MCP_NAME};

use super::{to_pretty_json, RenderedManifest};

/// Scoop app manifest. Field order is the order keys are written.
#[derive(Debug, Serialize)]
struct ScoopManifest<'a> {
    version: &'a str,
    description: &'a str,
    homepage: String,
    license: &'a str,
    url: String,
    hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    installer: Option<Installer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bin: Option<String>,
    checkver: Checkver,
    autoupdate: Autoupdate,
}

#[derive(Debug, Serialize)]
struct Installer {
    file: String,
}

#[derive(Debug, Serialize)]
struct Checkver {
    github: String,
}

#[derive(Debug, Serialize)]
struct Autoupdate {
    url: String,
}

/// Manifest for the desktop app, installed from the MSI.
pub fn render_desktop(
    cfg: &ReleaseConfig,
    release: &Release,
    msi_sha: &str,
) -> Result<RenderedManifest> {
    let url = release.asset_url(&release.msi());
    let manifest = ScoopManifest {
        version: &release.version,
        description: &cfg.desktop_description,
        homepage: cfg.homepage(),
        license: &cfg.license,
        url: url.clone(),
        hash: format!("sha256:{msi_sha}"),
        installer: Some(Installer {
            file: release.msi(),
        }),
        bin: None,
        checkver: Checkver {
            github: cfg.homepage(),
        },
        autoupdate: Autoupdate {
            url: autoupdate_url(&cfg.repository, &msi_name("$version")),
        },
    };

    Ok(RenderedManifest {
        contents: to_pretty_json(&manifest)?,
        version: release.version.clone(),
        url: Some(url),
        digests: vec![("sha256".to_string(), msi_sha.to_string())],
    })
}

/// Manifest for the MCP server. Windows is the only platform Scoop serves, so
/// a listing without a `windows_amd64` line is an error and nothing is rendered.
pub fn render_mcp(
    cfg: &ReleaseConfig,
    release: &Release,
    checksums: &ChecksumMap,
) -> Result<RenderedManifest> {
    let sha = checksums.require(Platform::WindowsAmd64)?;
    let url = release.asset_url(&release.mcp_archive(Platform::WindowsAmd64));
    let manifest = ScoopManifest {
        version: &release.version,
        description: &cfg.mcp_description,
        homepage: cfg.homepage(),
        license: &cfg.license,
        url: url.clone(),
        hash: format!("sha256:{sha}"),
        installer: None,
        bin: Some(format!("{MCP_NAME}.exe")),
        checkver: Checkver {
            github: cfg.homepage(),
        },
        autoupdate: Autoupdate {
            url: autoupdate_url(
                &cfg.repository,
                &mcp_archive_name("$version", Platform::WindowsAmd64),
            ),
        },
    };

    Ok(RenderedManifest {
        contents: to_pretty_json(&manifest)?,
        version: release.version.clone(),
        url: Some(url),
        digests: vec![("sha256".to_string(), sha.to_string())],
    })
}
