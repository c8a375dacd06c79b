//! CLI for the Fotos release manifest generators.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use fotos_release_core::config::{self, ReleaseConfig};
use fotos_release_core::release::Release;
use std::path::PathBuf;

use commands::{
    resolve_digest, run_checksums, run_homebrew_cask, run_homebrew_formula, run_scoop_desktop,
    run_scoop_mcp,
};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "fotos-release")]
#[command(about = "Generate Homebrew and Scoop manifests for a Fotos release", long_about = None)]
pub struct Cli {
    /// Config file (defaults to ~/.config/fotos-release/config.toml if it exists).
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Where to write and which release to point at.
#[derive(Debug, Args)]
pub struct TargetArgs {
    /// Output file; parent directories are created.
    pub path: PathBuf,
    /// Release version without the tag prefix (e.g. 1.2.0).
    pub version: String,
    /// Git tag the release assets are published under (e.g. v1.2.0).
    pub tag: String,
}

impl TargetArgs {
    pub fn release(&self, cfg: &ReleaseConfig) -> Release {
        Release::new(cfg.repository.clone(), self.version.clone(), self.tag.clone())
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Write the Homebrew cask for the desktop app.
    HomebrewCask {
        #[command(flatten)]
        target: TargetArgs,

        /// SHA-256 of the Linux AppImage.
        #[arg(required_unless_present = "artifact")]
        sha256: Option<String>,

        /// Compute the AppImage SHA-256 from this local file instead.
        #[arg(long, value_name = "FILE", conflicts_with = "sha256")]
        artifact: Option<PathBuf>,
    },

    /// Write the Homebrew formula for fotos-mcp from a checksum listing.
    HomebrewFormula {
        #[command(flatten)]
        target: TargetArgs,

        /// Checksum listing (`<sha256> <filename>` per line).
        checksums: PathBuf,
    },

    /// Write the Scoop manifest for the desktop app.
    ScoopDesktop {
        #[command(flatten)]
        target: TargetArgs,

        /// SHA-256 of the MSI installer.
        #[arg(required_unless_present = "artifact")]
        sha256: Option<String>,

        /// Compute the MSI SHA-256 from this local file instead.
        #[arg(long, value_name = "FILE", conflicts_with = "sha256")]
        artifact: Option<PathBuf>,
    },

    /// Write the Scoop manifest for fotos-mcp; fails without a windows_amd64 checksum.
    ScoopMcp {
        #[command(flatten)]
        target: TargetArgs,

        /// Checksum listing (`<sha256> <filename>` per line).
        checksums: PathBuf,
    },

    /// Compute SHA-256 of release artifacts and emit a checksum listing.
    Checksums {
        /// Artifacts to hash.
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Write the listing here instead of stdout.
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        Cli::parse().run()
    }
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let cfg = config::load(self.config.as_deref())?;
        tracing::debug!("loaded config: {:?}", cfg);

        match self.command {
            CliCommand::HomebrewCask {
                target,
                sha256,
                artifact,
            } => {
                let sha = resolve_digest(sha256, artifact.as_deref())?;
                run_homebrew_cask(&cfg, &target, &sha)?;
            }
            CliCommand::HomebrewFormula { target, checksums } => {
                run_homebrew_formula(&cfg, &target, &checksums)?;
            }
            CliCommand::ScoopDesktop {
                target,
                sha256,
                artifact,
            } => {
                let sha = resolve_digest(sha256, artifact.as_deref())?;
                run_scoop_desktop(&cfg, &target, &sha)?;
            }
            CliCommand::ScoopMcp { target, checksums } => {
                run_scoop_mcp(&cfg, &target, &checksums)?;
            }
            CliCommand::Checksums { files, output } => {
                run_checksums(&files, output.as_deref())?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
