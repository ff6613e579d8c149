use super::ui;
use crate::core::analytics::Summary;
use crate::core::ledger::Ledger;
use crate::core::storage::KeyValueStore;
use comfy_table::Cell;

pub const NO_TRANSACTIONS: &str = "No transactions yet. Add income or expense.";

impl Summary {
    pub fn display_as_table(&self, currency: &str) -> String {
        let mut table = ui::new_styled_table();
        table.set_header(vec![ui::header_cell(""), ui::header_cell("Amount")]);

        table.add_row(vec![
            Cell::new(format!("Income ({})", self.month)),
            ui::balance_cell(self.month_income, currency),
        ]);
        table.add_row(vec![
            Cell::new(format!("Expenses ({})", self.month)),
            ui::balance_cell(-self.month_expense, currency),
        ]);
        table.add_row(vec![
            Cell::new("Total income"),
            ui::balance_cell(self.total_income, currency),
        ]);
        table.add_row(vec![
            Cell::new("Total expenses"),
            ui::balance_cell(-self.total_expense, currency),
        ]);

        let balance_style = if self.balance >= 0.0 {
            ui::StyleType::TotalValue
        } else {
            ui::StyleType::Error
        };

        let mut output = format!(
            "Balance: {}\n\n",
            ui::style_text(&ui::format_money(self.balance, currency), balance_style)
        );
        output.push_str(&table.to_string());
        output
    }
}

/// The dashboard: totals followed by the most recent transactions.
pub fn render<S: KeyValueStore>(ledger: &Ledger<S>, currency: &str, recent_count: usize) -> String {
    let mut output = ledger.summary().display_as_table(currency);
    output.push_str(&format!(
        "\n\n{}\n\n",
        ui::style_text("Recent transactions", ui::StyleType::Title)
    ));
    output.push_str(&ui::transactions_table(
        &ledger.recent(recent_count),
        currency,
        NO_TRANSACTIONS,
    ));
    output
}
