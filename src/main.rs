//! Shopsync - A safe-by-default store-sync agent for B2B commerce portals.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use shopsync::cli::output;
use shopsync::cli::{execute, Cli};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("SHOPSYNC_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("shopsync=debug")
        } else {
            EnvFilter::new("shopsync=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli.command) {
        // Format error with suggestion if available
        let error_msg = e.to_string();
        let suggestion = match &e {
            shopsync::error::Error::Secret(
                shopsync::error::SecretError::BackendUnavailable(_),
            ) => Some("drop --live to use the placeholder backend"),
            shopsync::error::Error::Config(shopsync::error::ConfigError::UnknownStore(_)) => {
                Some("set SHOPSYNC_STORE to shopify or woocommerce")
            }
            _ => None,
        };

        output::error(&error_msg);
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
