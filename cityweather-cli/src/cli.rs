use std::process::ExitCode;

use cityweather_core::{Config, Lookup, OpenWeatherProvider, SearchForm, Submission};
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, Text};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "cityweather", version, about = "Current weather for any city")]
pub struct Cli {
    /// OpenWeather API key; overrides OPENWEATHER_API_KEY and the config file.
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Log request details to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key in the config file.
    Configure,

    /// Prompt for city names until Esc or Ctrl-C (the default).
    Search,

    /// Show current weather for one city and exit.
    Show {
        /// City name, e.g. "Rio de Janeiro".
        #[arg(required = true, num_args = 1..)]
        city: Vec<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match self.command.unwrap_or(Command::Search) {
            Command::Configure => configure().map(|()| ExitCode::SUCCESS),
            Command::Search => {
                let config = Config::resolve(self.api_key)?;
                interactive(&OpenWeatherProvider::new(&config)).await?;
                Ok(ExitCode::SUCCESS)
            }
            Command::Show { city } => {
                let config = Config::resolve(self.api_key)?;
                show(&OpenWeatherProvider::new(&config), &city.join(" ")).await
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .with_help_message("Get one at https://home.openweathermap.org/api_keys")
        .prompt()?;

    config.api_key = api_key.trim().to_string();
    let path = config.save()?;

    println!("Saved API key to {}", path.display());
    Ok(())
}

async fn show(provider: &OpenWeatherProvider, city: &str) -> anyhow::Result<ExitCode> {
    tracing::debug!(city, "one-shot lookup");

    let mut form = SearchForm::new();
    form.set_query(city);
    form.submit(provider).await;

    match render::outcome(&form) {
        Ok(card) => {
            println!("{card}");
            Ok(ExitCode::SUCCESS)
        }
        Err(banner) => {
            eprintln!("{banner}");
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn interactive(provider: &OpenWeatherProvider) -> anyhow::Result<()> {
    println!("{}", render::header());

    let mut form = SearchForm::new();
    loop {
        let input = match Text::new("Enter city name").with_initial_value(form.query()).prompt() {
            Ok(text) => text,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                tracing::debug!("search prompt closed");
                break;
            }
            Err(err) => return Err(err.into()),
        };

        form.set_query(input);
        if let Submission::Started(city) = form.begin_submit() {
            println!("{}", render::form(&form));
            let outcome = Lookup::run(provider, &city).await.outcome();
            form.complete(outcome);
        }

        println!("{}\n", render::form(&form));
    }

    Ok(())
}
