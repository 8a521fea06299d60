//! Headless command-line driver.
//!
//! Each command dispatches the matching triggers, lets the workflows settle
//! and prints the observed state.
//!
//! ```no_run
//! use who_drowning::cli::{parse_args, run_cli};
//! use who_drowning::config::ClientConfig;
//!
//! # async fn demo() -> color_eyre::Result<()> {
//! let args = parse_args(std::env::args());
//! run_cli(args, ClientConfig::from_env()).await?;
//! # Ok(())
//! # }
//! ```

pub mod args;
pub mod render;
pub mod version;

pub use args::{parse_args, CliArgs, CliCommand, ListFilter, USAGE};
pub use version::{version_line, VERSION};

use color_eyre::eyre::{bail, eyre};
use color_eyre::Result;
use serde::Serialize;
use std::sync::Arc;

use crate::adapters::{FileKeyValueStore, ReqwestHttpClient};
use crate::app::App;
use crate::config::ClientConfig;
use crate::models::FavouriteEntry;
use crate::state::{AppEvent, AppState};

/// Parse-independent entry point used by `main`.
pub async fn run_cli(args: CliArgs, config: ClientConfig) -> Result<()> {
    match &args.command {
        CliCommand::Version => {
            println!("{}", version_line());
            return Ok(());
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        CliCommand::Invalid(message) => {
            bail!("{}\n\n{}", message, USAGE);
        }
        _ => {}
    }

    let store = match &config.data_dir {
        Some(dir) => FileKeyValueStore::with_dir(dir),
        None => FileKeyValueStore::new()?,
    };
    let mut app = App::new(
        config,
        Arc::new(ReqwestHttpClient::new()),
        Arc::new(store),
    );

    let output = execute(&mut app, &args.command, args.json).await;
    app.shutdown().await;
    print!("{}", output?);
    Ok(())
}

/// Run one command against `app` and return what should be printed.
pub async fn execute(app: &mut App, command: &CliCommand, json: bool) -> Result<String> {
    match command {
        CliCommand::Countries(filter) => {
            app.dispatch(AppEvent::RequestCountries);
            app.run_until(|s| !s.countries.loading()).await;
            if let Some(message) = app.state().countries.error() {
                bail!("{}", message);
            }

            match filter {
                ListFilter::All => {}
                ListFilter::Search(text) => {
                    app.dispatch(AppEvent::SetSearchText(text.clone()));
                }
                ListFilter::Segment(label) => {
                    app.dispatch(AppEvent::SelectSegment(Some(label.clone())));
                }
                ListFilter::Letter(letter) => {
                    app.dispatch(AppEvent::SelectLetter(*letter));
                }
            }

            let countries = &app.state().countries;
            output(json, &countries.grouped_countries, || {
                render::sections(&countries.grouped_countries)
            })
        }
        CliCommand::Profile { code } | CliCommand::Explore { code } => {
            load_profile(app, code).await;
            let indicators = &app.state().indicators;
            output(json, indicators, || match command {
                CliCommand::Explore { .. } => render::explore(indicators),
                _ => render::profile(indicators),
            })
        }
        CliCommand::Favourites => {
            let state = hydrated(app).await;
            output(json, &state.favourites, || {
                render::favourites(state.favourites.items())
            })
        }
        CliCommand::ToggleFavourite { code } => {
            hydrated(app).await;
            let entry = if app.state().favourites.contains(code) {
                FavouriteEntry::new(code.clone(), "")
            } else {
                load_profile(app, code).await;
                let indicators = &app.state().indicators;
                let profile = indicators.selected_country.as_ref().ok_or_else(|| {
                    eyre!(
                        "Cannot add {}: {}",
                        code,
                        indicators.error().unwrap_or("No data available")
                    )
                })?;
                FavouriteEntry::from_profile(code, profile)
            };

            app.dispatch(AppEvent::ToggleFavourite(entry));
            let favourites = &app.state().favourites;
            output(json, favourites, || render::favourites(favourites.items()))
        }
        CliCommand::RemoveFavourite { code } => {
            hydrated(app).await;
            app.dispatch(AppEvent::RemoveFavourite(code.clone()));
            let favourites = &app.state().favourites;
            output(json, favourites, || render::favourites(favourites.items()))
        }
        CliCommand::CheckVersion => {
            app.dispatch(AppEvent::RequestVersionCheck);
            app.run_until(|s| !s.version.loading()).await;
            let version = &app.state().version;
            output(json, version, || render::version(version))
        }
        CliCommand::Version => Ok(format!("{}\n", version_line())),
        CliCommand::Help => Ok(format!("{}\n", USAGE)),
        CliCommand::Invalid(message) => bail!("{}", message),
    }
}

async fn load_profile(app: &mut App, code: &str) {
    app.dispatch(AppEvent::SelectCountry(code.to_string()));
    app.dispatch(AppEvent::RequestIndicators(code.to_string()));
    app.run_until(|s| !s.indicators.loading()).await;
}

async fn hydrated(app: &mut App) -> &AppState {
    app.run_until(|s| s.favourites_loaded).await
}

fn output<T: Serialize>(json: bool, value: &T, text: impl FnOnce() -> String) -> Result<String> {
    if json {
        Ok(format!("{}\n", serde_json::to_string_pretty(value)?))
    } else {
        Ok(text())
    }
}
