// bases/fetch_cli/src/app.rs
use crate::args::Config;
use crate::output::OutputHandler;
use color_eyre::Result;
use playlist_fetcher::{PlaylistFetcher, SpotDl};
use std::sync::Arc;

pub struct App {
    fetcher: PlaylistFetcher,
    output: OutputHandler,
}

impl App {
    pub fn new(config: Config) -> Self {
        tracing::debug!("config: {:?}", config);
        let output = OutputHandler::new(config.verbose);
        let fetcher = PlaylistFetcher::new_with_downloader(
            config.fetch,
            config.options,
            Arc::new(SpotDl::with_program(config.downloader)),
        );
        Self { fetcher, output }
    }

    pub async fn run(&self) -> Result<()> {
        self.output.print_fetch_start(self.fetcher.config());

        let outcome = self.fetcher.fetch().await?;

        self.output.print_fetch_complete(&outcome);
        Ok(())
    }

    pub fn print_error(&self, error: &color_eyre::Report) {
        self.output.print_error(error);
    }
}
