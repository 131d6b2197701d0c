//! Walkthrough entry point.
//!
//! Replays every capability module example and logs what each call
//! returned.

use capcell::walkthrough::{self, WalkthroughConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Configuration decides the log filter, so load it before tracing exists
    // and report any problem once the subscriber is installed.
    let loaded = WalkthroughConfig::from_env();
    let config = loaded.clone().unwrap_or_default();

    let (filter, filter_error) = match config.env_filter() {
        Ok(filter) => (filter, None),
        Err(error) => (walkthrough::DEFAULT_LOG_FILTER.into(), Some(error)),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(error) = loaded {
        tracing::warn!("Failed to load configuration from environment: {error}");
        tracing::info!("Using default configuration");
    }
    if let Some(error) = filter_error {
        tracing::warn!("Failed to parse log filter: {error}");
        tracing::info!("Using default log filter {}", walkthrough::DEFAULT_LOG_FILTER);
    }

    let sections: Vec<String> = config.sections.iter().map(ToString::to_string).collect();
    tracing::info!(sections = %sections.join(","), "Starting capability module walkthrough");

    for step in walkthrough::run(&config.sections) {
        tracing::info!(section = %step.section, "{} => {}", step.label, step.value);
    }

    tracing::info!("Walkthrough finished");
}
