//! Quick status overview command.

use crate::cli::output;
use crate::core::config::SyncConfig;
use crate::core::secrets::{SecretAlias, SecretProvider};
use crate::error::Result;

/// Show resolved configuration and backend availability.
pub fn execute(json: bool) -> Result<()> {
    let config = SyncConfig::load()?;
    let live = SecretProvider::live(&config.project_id);

    if json {
        let value = serde_json::json!({
            "project": config.project_id,
            "environment": config.env_name,
            "store": config.store.as_str(),
            "portal": config.portal,
            "notifications": config.notify,
            "backends": {
                "mock": true,
                "live": live.is_ok(),
            },
            "aliases": SecretAlias::ALL.iter().map(|a| a.as_str()).collect::<Vec<_>>(),
        });
        println!("{:#}", value);
        return Ok(());
    }

    output::section("Shopsync Status");

    let config_path = SyncConfig::config_path();
    if config_path.exists() {
        output::kv("config file", config_path.display());
    } else {
        output::kv("config file", "not found (defaults + environment)");
    }

    output::kv("project", &config.project_id);
    output::kv("environment", &config.env_name);
    output::kv("store", config.store);
    output::kv("portal", &config.portal);
    output::kv(
        "notifications",
        if config.notify { "enabled" } else { "disabled" },
    );

    output::section("Secret Backends");
    output::kv("mock", "available");
    match live {
        Ok(provider) => output::kv("live", format!("available ({})", provider.backend_name())),
        Err(e) => {
            output::kv("live", "unavailable");
            output::warn(&e.to_string());
        }
    }

    output::section("Secret Aliases");
    for alias in SecretAlias::ALL {
        output::list_item(alias.as_str());
    }

    println!();
    output::hint(&format!("Start a run with {}", output::cmd("shopsync run")));

    Ok(())
}
