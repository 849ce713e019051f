use breeze_core::{
    config::Config,
    controller::Controller,
    location::IpLocationSource,
    provider::openweather::OpenWeather,
    store::FileStore,
};
use clap::{Parser, Subcommand};

use crate::term::TerminalView;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "breeze", version, about = "Geolocated weather widget")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the current weather for this machine's position.
    Show,

    /// Clear the cached weather, then show fresh data.
    Refresh,

    /// Store the OpenWeatherMap API key.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show => cycle(false).await,
            Command::Refresh => cycle(true).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Password::new("OpenWeatherMap API key:")
        .without_confirmation()
        .prompt()?;
    config.api_key = Some(api_key);
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn cycle(refresh: bool) -> anyhow::Result<()> {
    let config = Config::load()?;
    let widget = config.widget_config()?;

    let api = OpenWeather::new(widget.api_key.clone());
    let mut controller = Controller::new(
        widget,
        Box::new(FileStore::open()?),
        Box::new(IpLocationSource::new()),
        Box::new(api),
        Box::new(TerminalView::new()),
    );

    if refresh {
        controller.refresh().await;
    } else {
        controller.run().await;
    }

    Ok(())
}
