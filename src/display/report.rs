//! Report formatting for balance, totals and monthly summaries

use crate::services::{Balance, MonthlySummary, Totals};

/// Format the balance report for one owner
pub fn format_balance(owner: &str, balance: &Balance, currency_symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Balance for {}\n", owner));
    output.push_str(&format!(
        "Main Balance: {}\n",
        balance.main.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "Savings: {}\n",
        balance.savings.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "Total Balance: {}\n",
        balance.total.format_with_symbol(currency_symbol)
    ));
    output
}

/// Format per-kind totals for one owner
pub fn format_totals(owner: &str, totals: &Totals, currency_symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Totals for {} ({} transactions)\n", owner, totals.count));
    output.push_str(&format!(
        "Total Income: {}\n",
        totals.income.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "Total Expense: {}\n",
        totals.expense.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "Total Saving: {}\n",
        totals.saving.format_with_symbol(currency_symbol)
    ));
    output
}

/// Format the income and expense summary of one month
pub fn format_monthly_summary(
    owner: &str,
    summary: &MonthlySummary,
    currency_symbol: &str,
) -> String {
    let mut output = String::new();
    output.push_str(&format!("Summary for {} in {}\n", owner, summary.period));
    if summary.count == 0 {
        output.push_str("No transactions in this month.\n");
    }
    output.push_str(&format!(
        "Income: {}\n",
        summary.income.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "Expense: {}\n",
        summary.expense.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "Balance: {}\n",
        summary.balance.format_with_symbol(currency_symbol)
    ));
    output
}
