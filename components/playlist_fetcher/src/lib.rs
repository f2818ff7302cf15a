// components/playlist_fetcher/src/lib.rs
mod command;
mod paths;
mod spotdl;
mod types;

use std::sync::Arc;

pub use command::DownloadCommand;
pub use paths::{ensure_output_directory, resolve_output_directory};
pub use spotdl::{Downloader, SpotDl};
pub use types::{
    ExecutionMode, ExitStatusPolicy, FetchConfig, FetchError, FetchOutcome, FetcherOptions,
    DEFAULT_OUTPUT_DIRECTORY, DEFAULT_PLAYLIST,
};

pub struct PlaylistFetcher {
    config: FetchConfig,
    options: FetcherOptions,
    downloader: Arc<dyn Downloader + Send + Sync>,
}

impl PlaylistFetcher {
    /// Create a fetcher with a specific downloader implementation
    pub fn new_with_downloader(
        config: FetchConfig,
        options: FetcherOptions,
        downloader: Arc<dyn Downloader + Send + Sync>,
    ) -> Self {
        Self {
            config,
            options,
            downloader,
        }
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Ensure the output directory, then run the downloader once and wait for it
    pub async fn fetch(&self) -> Result<FetchOutcome, FetchError> {
        let resolved = self.config.resolve()?;
        let command = self.downloader.command(&resolved);
        tracing::debug!("resolved output directory: {}", resolved.output_directory.display());

        if self.options.mode == ExecutionMode::DryRun {
            tracing::info!("dry run, would run: {}", command);
            return Ok(FetchOutcome {
                output_directory: resolved.output_directory,
                command,
                status: None,
            });
        }

        ensure_output_directory(&resolved.output_directory).await?;
        self.downloader.check_available().await?;

        tracing::info!("running: {}", command);
        let status = self.downloader.run(&command).await?;

        if !status.success() {
            match self.options.exit_status {
                ExitStatusPolicy::Enforce => {
                    return Err(FetchError::DownloaderFailed {
                        command: command.to_string(),
                        status,
                    });
                }
                ExitStatusPolicy::Ignore => {
                    tracing::warn!(
                        "{} exited with {}, ignoring",
                        command.program.to_string_lossy(),
                        status
                    );
                }
            }
        }

        Ok(FetchOutcome {
            output_directory: resolved.output_directory,
            command,
            status: Some(status),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use spotdl::stub::RecordingDownloader;
    use std::ffi::OsString;
    use std::fs;
    use tempfile::TempDir;

    fn fetcher(
        config: FetchConfig,
        options: FetcherOptions,
        downloader: &Arc<RecordingDownloader>,
    ) -> PlaylistFetcher {
        PlaylistFetcher::new_with_downloader(config, options, downloader.clone())
    }

    #[tokio::test]
    async fn fetch_creates_directory_and_invokes_once() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("out");
        let downloader = Arc::new(RecordingDownloader::new());
        let config = FetchConfig::new("https://example.test/playlist/abc", &out);

        let outcome = fetcher(config, FetcherOptions::default(), &downloader)
            .fetch()
            .await
            .unwrap();

        assert!(out.is_dir());
        assert_eq!(outcome.output_directory, out);
        assert!(outcome.status.unwrap().success());

        let invocations = downloader.invocations();
        assert_eq!(invocations.len(), 1);
        assert_eq!(
            invocations[0].args,
            vec![
                OsString::from("https://example.test/playlist/abc"),
                OsString::from("--output"),
                out.clone().into_os_string(),
            ]
        );
    }

    #[tokio::test]
    async fn fetch_into_existing_directory_keeps_contents() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("old.mp3"), b"x").unwrap();
        let downloader = Arc::new(RecordingDownloader::new());
        let config = FetchConfig::new("p", temp_dir.path());

        fetcher(config, FetcherOptions::default(), &downloader)
            .fetch()
            .await
            .unwrap();

        assert_eq!(fs::read(temp_dir.path().join("old.mp3")).unwrap(), b"x");
        assert_eq!(downloader.invocations().len(), 1);
    }

    #[tokio::test]
    async fn directory_failure_prevents_launch() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("file");
        fs::write(&file, b"").unwrap();
        let downloader = Arc::new(RecordingDownloader::new());
        let config = FetchConfig::new("p", &file);

        let result = fetcher(config, FetcherOptions::default(), &downloader)
            .fetch()
            .await;

        assert_matches!(result, Err(FetchError::CreateDirectory { .. }));
        assert!(downloader.invocations().is_empty());
    }

    #[tokio::test]
    async fn missing_executable_still_leaves_directory() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("music").join("mine");
        let downloader = Arc::new(RecordingDownloader::unavailable());
        let config = FetchConfig::new("p", &out);

        let result = fetcher(config, FetcherOptions::default(), &downloader)
            .fetch()
            .await;

        assert_matches!(result, Err(FetchError::DependencyNotFound(_)));
        assert!(out.is_dir());
        assert!(downloader.invocations().is_empty());
    }

    #[tokio::test]
    async fn non_zero_exit_is_an_error_by_default() {
        let temp_dir = TempDir::new().unwrap();
        let downloader = Arc::new(RecordingDownloader::exiting_with(2));
        let config = FetchConfig::new("p", temp_dir.path());

        let result = fetcher(config, FetcherOptions::default(), &downloader)
            .fetch()
            .await;

        assert_matches!(
            result,
            Err(FetchError::DownloaderFailed { status, .. }) if status.code() == Some(2)
        );
    }

    #[tokio::test]
    async fn non_zero_exit_can_be_ignored() {
        let temp_dir = TempDir::new().unwrap();
        let downloader = Arc::new(RecordingDownloader::exiting_with(1));
        let config = FetchConfig::new("p", temp_dir.path());
        let options = FetcherOptions {
            exit_status: ExitStatusPolicy::Ignore,
            ..FetcherOptions::default()
        };

        let outcome = fetcher(config, options, &downloader).fetch().await.unwrap();

        assert_eq!(outcome.status.and_then(|s| s.code()), Some(1));
    }

    #[tokio::test]
    async fn dry_run_touches_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("out");
        let downloader = Arc::new(RecordingDownloader::new());
        let config = FetchConfig::new("https://example.test/playlist/abc", &out);
        let options = FetcherOptions {
            mode: ExecutionMode::DryRun,
            ..FetcherOptions::default()
        };

        let outcome = fetcher(config, options, &downloader).fetch().await.unwrap();

        assert!(!out.exists());
        assert!(downloader.invocations().is_empty());
        assert!(outcome.status.is_none());
        assert_eq!(
            outcome.command.to_string(),
            format!("spotdl https://example.test/playlist/abc --output {}", out.display())
        );
    }
}
