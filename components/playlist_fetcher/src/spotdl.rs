// components/playlist_fetcher/src/spotdl.rs
use crate::command::DownloadCommand;
use crate::types::{FetchConfig, FetchError};
use async_trait::async_trait;
use std::ffi::OsString;
use std::process::{ExitStatus, Stdio};

#[async_trait]
pub trait Downloader {
    /// Check that the executable can be found on PATH
    async fn check_available(&self) -> Result<(), FetchError>;

    /// Build the invocation for an already resolved config
    fn command(&self, config: &FetchConfig) -> DownloadCommand;

    /// Launch with inherited stdio and wait for it to exit
    async fn run(&self, command: &DownloadCommand) -> Result<ExitStatus, FetchError>;
}

pub struct SpotDl {
    program: OsString,
}

impl SpotDl {
    pub fn new() -> Self {
        Self::with_program("spotdl")
    }

    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait]
impl Downloader for SpotDl {
    async fn check_available(&self) -> Result<(), FetchError> {
        which::which(&self.program)
            .map(|path| tracing::debug!("using {}", path.display()))
            .map_err(|_| {
                FetchError::DependencyNotFound(self.program.to_string_lossy().into_owned())
            })
    }

    fn command(&self, config: &FetchConfig) -> DownloadCommand {
        DownloadCommand::new(&self.program)
            .arg(&config.playlist_reference)
            .arg("--output")
            .arg(&config.output_directory)
    }

    async fn run(&self, command: &DownloadCommand) -> Result<ExitStatus, FetchError> {
        command
            .to_tokio()
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| match source.kind() {
                std::io::ErrorKind::NotFound => FetchError::DependencyNotFound(
                    command.program.to_string_lossy().into_owned(),
                ),
                _ => FetchError::Spawn {
                    command: command.to_string(),
                    source,
                },
            })
    }
}
