use std::fmt::Write as _;

use crate::ledger::TransactionKind;

pub const MENU_TITLE: &str = "Personal Finance Tracker Menu";
pub const CHOICE_PROMPT: &str = "Choose an option (1-6): ";

/// The six actions offered by the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    AddIncome,
    AddExpense,
    ViewBalance,
    ViewTransactions,
    ViewSummary,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::AddIncome,
        MenuChoice::AddExpense,
        MenuChoice::ViewBalance,
        MenuChoice::ViewTransactions,
        MenuChoice::ViewSummary,
        MenuChoice::Exit,
    ];

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::AddIncome),
            "2" => Some(MenuChoice::AddExpense),
            "3" => Some(MenuChoice::ViewBalance),
            "4" => Some(MenuChoice::ViewTransactions),
            "5" => Some(MenuChoice::ViewSummary),
            "6" => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    pub fn number(self) -> usize {
        Self::ALL
            .iter()
            .position(|choice| *choice == self)
            .map(|idx| idx + 1)
            .unwrap_or_default()
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddIncome => "Add Income",
            MenuChoice::AddExpense => "Add Expense",
            MenuChoice::ViewBalance => "View Balance",
            MenuChoice::ViewTransactions => "View Transactions",
            MenuChoice::ViewSummary => "View Summary by Category",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Transaction kind recorded by this entry, if it records one.
    pub fn transaction_kind(self) -> Option<TransactionKind> {
        match self {
            MenuChoice::AddIncome => Some(TransactionKind::Income),
            MenuChoice::AddExpense => Some(TransactionKind::Expense),
            _ => None,
        }
    }
}

/// Menu body printed before each choice prompt.
pub fn render_menu() -> String {
    let mut text = String::new();
    for choice in MenuChoice::ALL {
        let _ = writeln!(text, "{}. {}", choice.number(), choice.label());
    }
    text.truncate(text.trim_end().len());
    text
}

pub fn amount_prompt(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Income => "Enter income amount: ",
        TransactionKind::Expense => "Enter expense amount: ",
    }
}

pub fn category_prompt(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Income => "Enter category for income (e.g., Salary, Freelance): ",
        TransactionKind::Expense => "Enter category for expense (e.g., Groceries, Rent): ",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choices_round_trip_through_their_numbers() {
        for choice in MenuChoice::ALL {
            let typed = choice.number().to_string();
            assert_eq!(MenuChoice::parse(&typed), Some(choice));
        }
    }

    #[test]
    fn unknown_input_is_not_a_choice() {
        for raw in ["", "0", "7", "exit", "1 2"] {
            assert_eq!(MenuChoice::parse(raw), None, "{raw}");
        }
        assert_eq!(MenuChoice::parse(" 3 \n"), Some(MenuChoice::ViewBalance));
    }

    #[test]
    fn menu_lists_six_numbered_entries() {
        let menu = render_menu();
        let lines: Vec<&str> = menu.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "1. Add Income");
        assert_eq!(lines[4], "5. View Summary by Category");
        assert_eq!(lines[5], "6. Exit");
    }

    #[test]
    fn only_add_entries_record_transactions() {
        assert_eq!(
            MenuChoice::AddExpense.transaction_kind(),
            Some(TransactionKind::Expense)
        );
        assert_eq!(MenuChoice::ViewBalance.transaction_kind(), None);
    }
}
