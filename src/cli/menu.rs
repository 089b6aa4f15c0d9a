//! Numbered menu loop
//!
//! Every action recovers from its own errors: the message is printed and
//! the menu is shown again. Running out of input behaves like choosing
//! "Save & exit".

use std::io::Write;

use log::debug;

use crate::app::App;
use crate::display::{format_balance, format_history, format_monthly_summary, format_totals};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Period, TransactionKind};
use crate::services::transaction::parse_amount;
use crate::services::AddTransactionInput;

use super::prompt::Prompter;

/// Tries allowed for a malformed type, amount or month before the action aborts
const INPUT_ATTEMPTS: u32 = 3;

/// Menu entries in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateAccount,
    ResetPin,
    AddTransaction,
    CheckBalance,
    Totals,
    ViewHistory,
    MonthlySummary,
    SaveAndExit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 8] = [
        Self::CreateAccount,
        Self::ResetPin,
        Self::AddTransaction,
        Self::CheckBalance,
        Self::Totals,
        Self::ViewHistory,
        Self::MonthlySummary,
        Self::SaveAndExit,
    ];

    /// Parse the number typed at the menu prompt
    pub fn parse(input: &str) -> LedgerResult<Self> {
        let input = input.trim();
        input
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| Self::ALL.get(index).copied())
            .ok_or_else(|| {
                LedgerError::Validation(format!(
                    "Invalid choice '{}': enter a number from 1 to {}",
                    input,
                    Self::ALL.len()
                ))
            })
    }

    pub fn number(&self) -> usize {
        Self::ALL
            .iter()
            .position(|choice| choice == self)
            .map_or(0, |index| index + 1)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::CreateAccount => "Create account",
            Self::ResetPin => "Reset PIN",
            Self::AddTransaction => "Add transaction",
            Self::CheckBalance => "Check balance",
            Self::Totals => "Show totals",
            Self::ViewHistory => "View history",
            Self::MonthlySummary => "Monthly summary",
            Self::SaveAndExit => "Save & exit",
        }
    }
}

/// The interactive session over one [`App`]
pub struct Menu<'a, P: Prompter, W: Write> {
    app: &'a mut App,
    prompter: &'a mut P,
    out: &'a mut W,
}

impl<'a, P: Prompter, W: Write> Menu<'a, P, W> {
    pub fn new(app: &'a mut App, prompter: &'a mut P, out: &'a mut W) -> Self {
        Self { app, prompter, out }
    }

    /// Show the menu until the user saves and exits or input runs out
    pub fn run(&mut self) -> LedgerResult<()> {
        writeln!(self.out, "Personal Finance Ledger")?;

        loop {
            self.print_menu()?;

            let Some(line) = self.prompter.read_line("Choice: ")? else {
                writeln!(self.out)?;
                return self.save_and_exit();
            };

            let choice = match MenuChoice::parse(&line) {
                Ok(choice) => choice,
                Err(e) => {
                    writeln!(self.out, "Error: {}", e)?;
                    continue;
                }
            };
            debug!("Menu choice: {:?}", choice);

            if choice == MenuChoice::SaveAndExit {
                return self.save_and_exit();
            }
            if let Err(e) = self.dispatch(choice) {
                writeln!(self.out, "Error: {}", e)?;
            }
        }
    }

    fn print_menu(&mut self) -> LedgerResult<()> {
        writeln!(self.out)?;
        for choice in MenuChoice::ALL {
            writeln!(self.out, "{}. {}", choice.number(), choice.label())?;
        }
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> LedgerResult<()> {
        match choice {
            MenuChoice::CreateAccount => self.create_account(),
            MenuChoice::ResetPin => self.reset_pin(),
            MenuChoice::AddTransaction => self.add_transaction(),
            MenuChoice::CheckBalance => self.check_balance(),
            MenuChoice::Totals => self.show_totals(),
            MenuChoice::ViewHistory => self.view_history(),
            MenuChoice::MonthlySummary => self.monthly_summary(),
            MenuChoice::SaveAndExit => self.save_and_exit(),
        }
    }

    fn create_account(&mut self) -> LedgerResult<()> {
        let username = self.read_username()?;
        let account = self
            .app
            .accounts()
            .create_interactive(&username, &mut *self.prompter)?;
        writeln!(self.out, "Account '{}' created.", account.username)?;
        Ok(())
    }

    fn reset_pin(&mut self) -> LedgerResult<()> {
        let username = self.read_username()?;
        self.app
            .accounts()
            .reset_pin_interactive(&username, &mut *self.prompter)?;
        writeln!(self.out, "PIN updated for '{}'.", username)?;
        Ok(())
    }

    fn add_transaction(&mut self) -> LedgerResult<()> {
        let owner = self.login()?;

        let kind = self.prompt_parsed("Type (income/expense/saving): ", TransactionKind::parse)?;
        let amount = self.prompt_parsed("Amount: ", parse_amount)?;
        let note = self.read_required("Note: ")?;
        let period = self.prompt_parsed("Month (YYYY-MM, blank for current): ", |raw| {
            if raw.trim().is_empty() {
                Ok(Period::current())
            } else {
                Period::parse(raw.trim())
            }
        })?;

        let record = self.app.transactions().add(
            &owner,
            AddTransactionInput {
                kind,
                amount,
                note,
                period,
            },
        )?;

        let symbol = &self.app.settings().currency_symbol;
        writeln!(
            self.out,
            "Saved transaction #{}: {} {} in {}.",
            record.id,
            record.kind,
            record.amount.format_with_symbol(symbol),
            record.period
        )?;
        Ok(())
    }

    fn check_balance(&mut self) -> LedgerResult<()> {
        let owner = self.login()?;
        let balance = self.app.summary().balance(&owner);
        let report = format_balance(&owner, &balance, &self.app.settings().currency_symbol);
        write!(self.out, "{}", report)?;
        Ok(())
    }

    fn show_totals(&mut self) -> LedgerResult<()> {
        let owner = self.login()?;
        let totals = self.app.summary().totals(&owner);
        let report = format_totals(&owner, &totals, &self.app.settings().currency_symbol);
        write!(self.out, "{}", report)?;
        Ok(())
    }

    fn view_history(&mut self) -> LedgerResult<()> {
        let owner = self.login()?;
        let summary = self.app.summary();
        let history = summary.history(&owner);
        let report = format_history(&owner, &history, &self.app.settings().currency_symbol);
        write!(self.out, "{}", report)?;
        Ok(())
    }

    fn monthly_summary(&mut self) -> LedgerResult<()> {
        let owner = self.login()?;
        let period = self.prompt_parsed("Month (YYYY-MM): ", |raw| Period::parse(raw.trim()))?;

        let summary = self.app.summary().monthly_summary_for(&owner, period);
        let report =
            format_monthly_summary(&owner, &summary, &self.app.settings().currency_symbol);
        write!(self.out, "{}", report)?;
        Ok(())
    }

    fn save_and_exit(&mut self) -> LedgerResult<()> {
        match self.app.save_all() {
            Ok(()) => writeln!(self.out, "Data saved. Goodbye!")?,
            Err(e) => writeln!(self.out, "Error: {}", e)?,
        }
        Ok(())
    }

    /// Ask for a username and its PIN; yields the authenticated username
    fn login(&mut self) -> LedgerResult<String> {
        let username = self.read_username()?;
        let account = self
            .app
            .accounts()
            .authenticate(&username, &mut *self.prompter)?;
        Ok(account.username)
    }

    fn read_username(&mut self) -> LedgerResult<String> {
        Ok(self.read_required("Username: ")?.trim().to_string())
    }

    fn read_required(&mut self, prompt: &str) -> LedgerResult<String> {
        self.prompter
            .read_line(prompt)?
            .ok_or_else(|| LedgerError::Validation("input ended".to_string()))
    }

    fn prompt_parsed<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> LedgerResult<T>,
    ) -> LedgerResult<T> {
        let mut attempt = 1;
        loop {
            let raw = self.read_required(prompt)?;
            match parse(&raw) {
                Ok(value) => return Ok(value),
                Err(e) if attempt >= INPUT_ATTEMPTS => return Err(e),
                Err(e) => {
                    writeln!(self.out, "Error: {}", e)?;
                    attempt += 1;
                }
            }
        }
    }
}
