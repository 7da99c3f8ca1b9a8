use std::io::{self, BufRead};

use rustyline::{error::ReadlineError, history::DefaultHistory, Editor};
use thiserror::Error;

use crate::cli::{
    formatting, input,
    menu::{self, MenuChoice},
    output,
};
use crate::core::LedgerManager;
use crate::errors::LedgerError;
use crate::ledger::TransactionKind;

/// User-facing CLI error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] LedgerError),
    #[error("Readline error: {0}")]
    Readline(#[from] ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Source of user answers. `Ok(None)` means the user is gone (EOF or Ctrl-C).
pub trait LineReader {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError>;
}

/// Line editor for terminal sessions.
pub struct EditorReader {
    editor: Editor<(), DefaultHistory>,
}

impl EditorReader {
    pub fn new() -> Result<Self, CliError> {
        Ok(Self {
            editor: Editor::new()?,
        })
    }
}

impl LineReader for EditorReader {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

/// Reads answers line by line without echoing prompts.
pub struct ScriptReader<R> {
    input: R,
}

impl<R: BufRead> ScriptReader<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> LineReader for ScriptReader<R> {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>, CliError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Menu session over a loaded ledger.
pub struct ShellContext {
    pub mode: CliMode,
    pub running: bool,
    manager: LedgerManager,
}

impl ShellContext {
    pub fn new(mode: CliMode, manager: LedgerManager) -> Self {
        Self {
            mode,
            running: true,
            manager,
        }
    }

    pub fn manager(&self) -> &LedgerManager {
        &self.manager
    }

    /// Runs the menu until the user exits or input runs out.
    pub fn run(&mut self, reader: &mut dyn LineReader) -> Result<(), CliError> {
        while self.running {
            self.print_menu();
            let Some(line) = reader.read_line(menu::CHOICE_PROMPT)? else {
                break;
            };
            let control = match MenuChoice::parse(&line) {
                Some(choice) => self.dispatch(choice, reader)?,
                None => {
                    output::warning(formatting::INVALID_CHOICE);
                    LoopControl::Continue
                }
            };
            if control == LoopControl::Exit {
                self.running = false;
            }
        }
        Ok(())
    }

    pub fn dispatch(
        &mut self,
        choice: MenuChoice,
        reader: &mut dyn LineReader,
    ) -> Result<LoopControl, CliError> {
        if let Some(kind) = choice.transaction_kind() {
            return self.add_transaction(kind, reader);
        }
        match choice {
            MenuChoice::ViewBalance => self.show_balance(),
            MenuChoice::ViewTransactions => self.show_transactions(),
            MenuChoice::ViewSummary => self.show_summary(),
            MenuChoice::Exit => {
                output::info(formatting::GOODBYE);
                return Ok(LoopControl::Exit);
            }
            MenuChoice::AddIncome | MenuChoice::AddExpense => {}
        }
        Ok(LoopControl::Continue)
    }

    fn add_transaction(
        &mut self,
        kind: TransactionKind,
        reader: &mut dyn LineReader,
    ) -> Result<LoopControl, CliError> {
        let amount = loop {
            let Some(raw) = reader.read_line(menu::amount_prompt(kind))? else {
                return Ok(LoopControl::Exit);
            };
            match input::parse_amount(&raw) {
                Ok(amount) => break amount,
                Err(err) => output::warning(err),
            }
        };
        let Some(raw) = reader.read_line(menu::category_prompt(kind))? else {
            return Ok(LoopControl::Exit);
        };
        let category = input::parse_category(&raw);

        let balance = self.manager.add_transaction(amount, category.as_str(), kind)?;
        output::success(formatting::confirmation_line(kind, amount, &category));
        output::info(formatting::balance_line(balance));
        Ok(LoopControl::Continue)
    }

    fn show_balance(&self) {
        output::info(formatting::balance_line(self.manager.balance()));
    }

    fn show_transactions(&self) {
        let transactions = self.manager.list_transactions();
        if transactions.is_empty() {
            output::info(formatting::NO_TRANSACTIONS);
            return;
        }
        output::section(formatting::TRANSACTIONS_TITLE);
        for transaction in transactions {
            output::info(formatting::transaction_line(transaction));
        }
    }

    fn show_summary(&self) {
        let summary = self.manager.summarize_by_category();
        if summary.is_empty() {
            output::info(formatting::NOTHING_TO_SUMMARIZE);
            return;
        }
        output::section(formatting::SUMMARY_TITLE);
        for entry in &summary {
            output::info(formatting::summary_line(entry));
        }
    }

    fn print_menu(&self) {
        output::section(menu::MENU_TITLE);
        output::info(menu::render_menu());
    }
}
