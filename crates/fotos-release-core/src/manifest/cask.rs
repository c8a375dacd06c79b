//! Homebrew cask for the desktop app.
//!
//! Linux installs the AppImage (pinned by digest); macOS installs the DMG with
//! `sha256 :no_check` since the DMG is not part of the checksum pipeline.

use crate::config::ReleaseConfig;
use crate::release::{appimage_name, Release};

use super::RenderedManifest;

/// Files removed by `brew uninstall --zap`.
const ZAP_TRASH: [&str; 5] = [
    "~/.config/fotos",
    "~/.local/share/fotos",
    "~/Library/Application Support/fotos",
    "~/Library/Caches/fotos",
    "~/Library/Preferences/io.github.charly.fotos.plist",
];

pub fn render(cfg: &ReleaseConfig, release: &Release, appimage_sha: &str) -> RenderedManifest {
    let version = &release.version;
    let appimage_url = release.asset_url(&release.appimage());
    let dmg_url = release.asset_url(&release.dmg());
    // Ruby interpolation, evaluated by Homebrew at install time.
    let binary = appimage_name("\\#{version}");
    let zap: String = ZAP_TRASH
        .iter()
        .map(|p| format!("    \"{p}\",\n"))
        .collect();

    let contents = format!(
        r##"cask "fotos" do
  version "{version}"

  on_linux do
    url "{appimage_url}"
    sha256 "{appimage_sha}"
  end

  on_macos do
    url "{dmg_url}"
    sha256 :no_check
  end

  name "Fotos"
  desc "{desc}"
  homepage "{homepage}"

  on_linux do
    binary "{binary}", target: "fotos"
  end

  on_macos do
    app "Fotos.app"
  end

  zap trash: [
{zap}  ]
end
"##,
        desc = cfg.desktop_description,
        homepage = cfg.homepage(),
    );

    RenderedManifest {
        contents,
        version: version.clone(),
        url: None,
        digests: vec![("AppImage sha256".to_string(), appimage_sha.to_string())],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHA: &str = "a1b2c3d4e5f60718293a4b5c6d7e8f90a1b2c3d4e5f60718293a4b5c6d7e8f90";

    fn rendered() -> RenderedManifest {
        let release = Release::new("charly-vibes/fotos", "1.4.0", "v1.4.0");
        render(&ReleaseConfig::default(), &release, SHA)
    }

    #[test]
    fn cask_matches_published_layout() {
        let expected = format!(
            r##"cask "fotos" do
  version "1.4.0"

  on_linux do
    url "https://github.com/charly-vibes/fotos/releases/download/v1.4.0/fotos_1.4.0_amd64.AppImage"
    sha256 "{SHA}"
  end

  on_macos do
    url "https://github.com/charly-vibes/fotos/releases/download/v1.4.0/fotos_1.4.0_x64.dmg"
    sha256 :no_check
  end

  name "Fotos"
  desc "AI-powered screenshot capture and analysis tool"
  homepage "https://github.com/charly-vibes/fotos"

  on_linux do
    binary "fotos_\#{{version}}_amd64.AppImage", target: "fotos"
  end

  on_macos do
    app "Fotos.app"
  end

  zap trash: [
    "~/.config/fotos",
    "~/.local/share/fotos",
    "~/Library/Application Support/fotos",
    "~/Library/Caches/fotos",
    "~/Library/Preferences/io.github.charly.fotos.plist",
  ]
end
"##
        );
        assert_eq!(rendered().contents, expected);
    }

    #[test]
    fn summary_digest_is_labelled() {
        let m = rendered();
        assert_eq!(m.url, None);
        assert_eq!(m.digests, vec![("AppImage sha256".to_string(), SHA.to_string())]);
    }

    #[test]
    fn description_comes_from_config() {
        let cfg = ReleaseConfig {
            desktop_description: "Screenshots".to_string(),
            ..ReleaseConfig::default()
        };
        let release = Release::new("charly-vibes/fotos", "1.4.0", "v1.4.0");
        assert!(render(&cfg, &release, SHA)
            .contents
            .contains("  desc \"Screenshots\"\n"));
    }
}
