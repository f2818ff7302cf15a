// bases/fetch_cli/src/main.rs
mod app;
mod args;
mod output;

use app::App;
use args::{CliArgs, Config};
use clap::Parser;
use color_eyre::Result;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fetch_playlist=info,playlist_fetcher=info".into()),
        )
        .init();

    let config = Config::from_args(CliArgs::parse());
    let app = App::new(config);

    if let Err(error) = app.run().await {
        app.print_error(&error);
        std::process::exit(1);
    }
    Ok(())
}
