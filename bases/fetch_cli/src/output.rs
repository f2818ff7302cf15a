// bases/fetch_cli/src/output.rs
use playlist_fetcher::{FetchConfig, FetchOutcome};

pub struct OutputHandler {
    verbose: bool,
}

impl OutputHandler {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn print_fetch_start(&self, config: &FetchConfig) {
        println!("Fetching playlist: {}", config.playlist_reference);
    }

    pub fn print_fetch_complete(&self, outcome: &FetchOutcome) {
        match outcome.status {
            Some(status) => {
                println!("Downloader finished ({})", status);
                println!("Output directory: {}", outcome.output_directory.display());
            }
            None => {
                println!("Dry run, nothing was launched");
                println!("Would run: {}", outcome.command);
            }
        }

        if self.verbose && outcome.status.is_some() {
            println!("Command: {}", outcome.command);
        }
    }

    pub fn print_error(&self, error: &color_eyre::Report) {
        eprintln!("Error: {}", error);

        if self.verbose {
            eprintln!("\nError details:");
            error.chain().skip(1).for_each(|cause| {
                eprintln!("  caused by: {}", cause);
            });
        }
    }
}
