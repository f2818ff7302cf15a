// bases/fetch_cli/src/args.rs
use clap::Parser;
use playlist_fetcher::{
    ExecutionMode, ExitStatusPolicy, FetchConfig, FetcherOptions, DEFAULT_OUTPUT_DIRECTORY,
    DEFAULT_PLAYLIST,
};
use std::path::PathBuf;

/// Download a playlist into a local music folder using spotdl
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Playlist URL, passed to the downloader as-is
    #[arg(default_value = DEFAULT_PLAYLIST)]
    pub playlist: String,

    /// Directory to store downloaded files (`~` is expanded)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIRECTORY)]
    pub output_dir: PathBuf,

    /// Downloader executable to run
    #[arg(long, default_value = "spotdl")]
    pub downloader: String,

    /// Succeed even if the downloader exits with a non-zero status
    #[arg(long)]
    pub ignore_exit_status: bool,

    /// Print what would be run without creating directories or launching anything
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub fetch: FetchConfig,
    pub options: FetcherOptions,
    pub downloader: String,
    pub verbose: bool,
}

impl Config {
    pub fn from_args(args: CliArgs) -> Self {
        let exit_status = if args.ignore_exit_status {
            ExitStatusPolicy::Ignore
        } else {
            ExitStatusPolicy::Enforce
        };
        let mode = if args.dry_run {
            ExecutionMode::DryRun
        } else {
            ExecutionMode::Run
        };

        Self {
            fetch: FetchConfig::new(args.playlist, args.output_dir),
            options: FetcherOptions { exit_status, mode },
            downloader: args.downloader,
            verbose: args.verbose,
        }
    }
}
