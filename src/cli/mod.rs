pub mod core;
pub mod formatting;
pub mod input;
pub mod menu;
pub mod output;
mod shell;

pub use self::core::{CliError, CliMode, LineReader, ScriptReader, ShellContext};
pub use shell::{banner, run_cli};
