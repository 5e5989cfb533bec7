//! Run command.
//!
//! Executes one best-effort sync run and reports the classified outcome.

use crate::cli::output;
use crate::core::agent::{RunOutcome, SyncAgent};
use crate::core::config::SyncConfig;
use crate::core::secrets::SecretProvider;
use crate::error::Result;

/// Execute a sync run.
///
/// With `live`, secrets come from the live backend; provider
/// misconfiguration surfaces here, before the run starts. The default is
/// the placeholder backend.
pub fn execute(live: bool) -> Result<()> {
    let config = SyncConfig::load()?;

    let provider = if live {
        SecretProvider::live(&config.project_id)?
    } else {
        SecretProvider::mock()
    };

    output::kv("environment", &config.env_name);
    output::kv("store", config.store);
    output::kv("secrets", provider.backend_name());

    let agent = SyncAgent::new(config, provider);
    match agent.run() {
        RunOutcome::Completed(report) => {
            output::success(&format!(
                "sync complete: updated={}, failed={}",
                report.updated, report.failed
            ));
            output::dimmed(&format!("export: {}", report.export_file));
            Ok(())
        }
        RunOutcome::Failed { category } => {
            output::error(&format!("sync failed ({})", category));
            std::process::exit(1);
        }
    }
}
