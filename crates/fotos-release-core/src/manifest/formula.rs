//! Homebrew formula for the MCP server.
//!
//! One `on_arm`/`on_intel` branch per platform found in the checksum listing.
//! Branches without a digest are left out, and an OS block with no branches is
//! dropped entirely.

use anyhow::Result;
use std::fmt::Write as _;

use crate::checksum::{ChecksumMap, Platform};
use crate::config::ReleaseConfig;
use crate::release::{Release, MCP_NAME};

use super::RenderedManifest;

struct Branch {
    arch: &'static str,
    platform: Platform,
    /// Wrap in `if Hardware::CPU.is_64_bit?` (there is no 32-bit ARM build).
    require_64_bit: bool,
}

const MACOS: [Branch; 2] = [
    Branch {
        arch: "on_arm",
        platform: Platform::DarwinArm64,
        require_64_bit: false,
    },
    Branch {
        arch: "on_intel",
        platform: Platform::DarwinAmd64,
        require_64_bit: false,
    },
];

const LINUX: [Branch; 2] = [
    Branch {
        arch: "on_arm",
        platform: Platform::LinuxArm64,
        require_64_bit: true,
    },
    Branch {
        arch: "on_intel",
        platform: Platform::LinuxAmd64,
        require_64_bit: false,
    },
];

pub fn render(
    cfg: &ReleaseConfig,
    release: &Release,
    checksums: &ChecksumMap,
) -> Result<RenderedManifest> {
    let mut out = String::new();
    writeln!(out, "# typed: false")?;
    writeln!(out, "# frozen_string_literal: true")?;
    writeln!(out)?;
    writeln!(out, "class FotosMcp < Formula")?;
    writeln!(out, "  desc \"{}\"", cfg.mcp_description)?;
    writeln!(out, "  homepage \"{}\"", cfg.homepage())?;
    writeln!(out, "  version \"{}\"", release.version)?;
    writeln!(out, "  license \"{}\"", cfg.license)?;

    write_os_block(&mut out, "on_macos", &MACOS, release, checksums)?;
    write_os_block(&mut out, "on_linux", &LINUX, release, checksums)?;

    writeln!(out)?;
    writeln!(out, "  def install")?;
    writeln!(out, "    bin.install \"{MCP_NAME}\"")?;
    writeln!(out, "  end")?;
    writeln!(out)?;
    writeln!(out, "  test do")?;
    writeln!(out, "    system \"\\#{{bin}}/{MCP_NAME}\", \"--version\"")?;
    writeln!(out, "  end")?;
    writeln!(out, "end")?;

    Ok(RenderedManifest {
        contents: out,
        version: release.version.clone(),
        url: None,
        digests: checksums
            .iter()
            .map(|(p, d)| (p.to_string(), d.to_string()))
            .collect(),
    })
}

fn write_os_block(
    out: &mut String,
    os: &str,
    branches: &[Branch],
    release: &Release,
    checksums: &ChecksumMap,
) -> Result<()> {
    let present: Vec<(&Branch, &str)> = branches
        .iter()
        .filter_map(|b| match checksums.get(b.platform) {
            Some(digest) => Some((b, digest)),
            None => {
                tracing::warn!(platform = %b.platform, "no checksum in listing; omitting branch");
                None
            }
        })
        .collect();
    if present.is_empty() {
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "  {os} do")?;
    for (branch, digest) in present {
        let url = release.asset_url(&release.mcp_archive(branch.platform));
        writeln!(out, "    {} do", branch.arch)?;
        if branch.require_64_bit {
            writeln!(out, "      if Hardware::CPU.is_64_bit?")?;
            writeln!(out, "        url \"{url}\"")?;
            writeln!(out, "        sha256 \"{digest}\"")?;
            writeln!(out, "      end")?;
        } else {
            writeln!(out, "      url \"{url}\"")?;
            writeln!(out, "      sha256 \"{digest}\"")?;
        }
        writeln!(out, "    end")?;
    }
    writeln!(out, "  end")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checksum::Precedence;

    fn checksums(text: &str) -> ChecksumMap {
        ChecksumMap::from_reader(text.as_bytes(), "checksums.txt", &Platform::UNIX, Precedence::Last)
            .unwrap()
    }

    fn render_with(text: &str) -> RenderedManifest {
        let release = Release::new("charly-vibes/fotos", "1.2.0", "v1.2.0");
        render(&ReleaseConfig::default(), &release, &checksums(text)).unwrap()
    }

    #[test]
    fn full_listing_renders_all_branches() {
        let m = render_with(
            "a1 fotos-mcp_1.2.0_darwin_arm64.tar.gz\n\
             a2 fotos-mcp_1.2.0_darwin_amd64.tar.gz\n\
             a3 fotos-mcp_1.2.0_linux_arm64.tar.gz\n\
             a4 fotos-mcp_1.2.0_linux_amd64.tar.gz\n\
             a5 fotos-mcp_1.2.0_windows_amd64.zip\n",
        );
        let base = "https://github.com/charly-vibes/fotos/releases/download/v1.2.0";
        let expected = format!(
            r##"# typed: false
# frozen_string_literal: true

class FotosMcp < Formula
  desc "MCP server for Fotos — AI-powered screenshot tool"
  homepage "https://github.com/charly-vibes/fotos"
  version "1.2.0"
  license "MIT"

  on_macos do
    on_arm do
      url "{base}/fotos-mcp_1.2.0_darwin_arm64.tar.gz"
      sha256 "a1"
    end
    on_intel do
      url "{base}/fotos-mcp_1.2.0_darwin_amd64.tar.gz"
      sha256 "a2"
    end
  end

  on_linux do
    on_arm do
      if Hardware::CPU.is_64_bit?
        url "{base}/fotos-mcp_1.2.0_linux_arm64.tar.gz"
        sha256 "a3"
      end
    end
    on_intel do
      url "{base}/fotos-mcp_1.2.0_linux_amd64.tar.gz"
      sha256 "a4"
    end
  end

  def install
    bin.install "fotos-mcp"
  end

  test do
    system "\#{{bin}}/fotos-mcp", "--version"
  end
end
"##
        );
        assert_eq!(m.contents, expected);
        assert_eq!(m.digests.len(), 4);
    }

    #[test]
    fn missing_platforms_are_omitted() {
        let m = render_with(
            "aaaa fotos-mcp_1.2.0_darwin_arm64.tar.gz\n\
             bbbb fotos-mcp_1.2.0_linux_amd64.tar.gz\n",
        );
        assert!(m.contents.contains(
            "    on_arm do\n      url \"https://github.com/charly-vibes/fotos/releases/download/v1.2.0/fotos-mcp_1.2.0_darwin_arm64.tar.gz\"\n      sha256 \"aaaa\"\n    end\n"
        ));
        assert!(!m.contents.contains("darwin_amd64"));
        assert!(!m.contents.contains("linux_arm64"));
        assert!(!m.contents.contains("Hardware::CPU"));
        assert!(m.contents.contains("fotos-mcp_1.2.0_linux_amd64.tar.gz"));
        assert_eq!(
            m.digests,
            vec![
                ("darwin_arm64".to_string(), "aaaa".to_string()),
                ("linux_amd64".to_string(), "bbbb".to_string()),
            ]
        );
    }

    #[test]
    fn os_block_without_branches_is_dropped() {
        let m = render_with("cccc fotos-mcp_1.2.0_linux_amd64.tar.gz\n");
        assert!(!m.contents.contains("on_macos"));
        assert!(m.contents.contains("  license \"MIT\"\n\n  on_linux do\n"));
    }

    #[test]
    fn empty_listing_still_renders_install_and_test() {
        let m = render_with("");
        assert!(!m.contents.contains("on_macos"));
        assert!(!m.contents.contains("on_linux"));
        assert!(m.contents.contains("  license \"MIT\"\n\n  def install\n"));
        assert!(m.digests.is_empty());
    }
}
