// components/playlist_fetcher/src/types.rs
use crate::command::DownloadCommand;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to create output directory {path}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot expand '~': home directory is unknown")]
    HomeDirectoryUnavailable,

    #[error("cannot resolve relative path: current directory is unavailable")]
    CurrentDirectory(#[source] std::io::Error),

    #[error("Required dependency not found: {0}")]
    DependencyNotFound(String),

    #[error("failed to launch {command}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{command} exited with status: {status}")]
    DownloaderFailed { command: String, status: ExitStatus },
}

/// What to fetch and where to put it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Opaque playlist identifier, passed through untouched
    pub playlist_reference: String,

    /// Destination directory, may start with `~`
    pub output_directory: PathBuf,
}

impl FetchConfig {
    pub fn new(
        playlist_reference: impl Into<String>,
        output_directory: impl Into<PathBuf>,
    ) -> Self {
        Self {
            playlist_reference: playlist_reference.into(),
            output_directory: output_directory.into(),
        }
    }

    /// Return a copy with the output directory expanded to an absolute path
    pub fn resolve(&self) -> Result<Self, FetchError> {
        Ok(Self {
            playlist_reference: self.playlist_reference.clone(),
            output_directory: crate::paths::resolve_output_directory(&self.output_directory)?,
        })
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYLIST, DEFAULT_OUTPUT_DIRECTORY)
    }
}

pub const DEFAULT_PLAYLIST: &str =
    "https://open.spotify.com/playlist/70XaRIzoHYDYyAGEAde0lX?si=32c476199c9c46f5";
pub const DEFAULT_OUTPUT_DIRECTORY: &str = "~/Music/mymusic";

/// How a non-zero exit from the external downloader is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExitStatusPolicy {
    #[default]
    Enforce,
    Ignore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    #[default]
    Run,
    /// Report what would happen, touch nothing
    DryRun,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FetcherOptions {
    pub exit_status: ExitStatusPolicy,
    pub mode: ExecutionMode,
}

/// Result of one fetch
#[derive(Debug)]
pub struct FetchOutcome {
    pub output_directory: PathBuf,
    pub command: DownloadCommand,
    /// `None` when nothing was launched (dry run)
    pub status: Option<ExitStatus>,
}
