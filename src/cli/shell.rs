use std::io;

use tracing::debug;

use crate::cli::core::{CliError, CliMode, EditorReader, LineReader, ScriptReader, ShellContext};
use crate::cli::output::{self, OutputPreferences};
use crate::config::Config;
use crate::core::LedgerManager;
use crate::storage::JsonStorage;

const BUILD_HASH: &str = env!("FINANCE_TRACKER_BUILD_HASH");
const BUILD_PROFILE: &str = env!("FINANCE_TRACKER_BUILD_PROFILE");

/// Opens the configured ledger and runs the menu loop until exit.
pub fn run_cli(config: Config) -> Result<(), CliError> {
    let mode = if config.script_mode {
        CliMode::Script
    } else {
        CliMode::Interactive
    };
    output::set_preferences(OutputPreferences {
        plain: mode == CliMode::Script,
    });

    debug!(
        data_file = %config.data_file.display(),
        ?mode,
        build = BUILD_HASH,
        profile = BUILD_PROFILE,
        "starting finance tracker"
    );

    let manager = LedgerManager::open(Box::new(JsonStorage::new(config.data_file)))?;
    let mut context = ShellContext::new(mode, manager);

    let mut reader: Box<dyn LineReader> = match mode {
        CliMode::Interactive => {
            output::info(banner());
            Box::new(EditorReader::new()?)
        }
        CliMode::Script => Box::new(ScriptReader::new(io::stdin().lock())),
    };
    context.run(reader.as_mut())
}

pub fn banner() -> String {
    format!(
        "Personal Finance Tracker v{} ({})",
        env!("CARGO_PKG_VERSION"),
        BUILD_HASH
    )
}
