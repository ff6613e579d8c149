use crate::core::transaction::{Transaction, TransactionType};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    TotalLabel,
    TotalValue,
    Error,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::TotalLabel => style(text).bold(),
        StyleType::TotalValue => style(text).green().bold(),
        StyleType::Error => style(text).red(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Formats an amount with two decimals and the currency label, e.g. `USD 1155.00`.
pub fn format_money(amount: f64, currency: &str) -> String {
    format!("{currency} {amount:.2}")
}

/// Signed amount cell, green for income and red for expenses.
pub fn amount_cell(transaction: &Transaction, currency: &str) -> Cell {
    let money = format_money(transaction.amount(), currency);
    let (text, color) = match transaction.kind() {
        TransactionType::Income => (format!("+ {money}"), Color::Green),
        TransactionType::Expense => (format!("- {money}"), Color::Red),
    };
    Cell::new(text).fg(color).set_alignment(CellAlignment::Right)
}

/// Colors a total by its sign.
pub fn balance_cell(value: f64, currency: &str) -> Cell {
    let color = if value >= 0.0 { Color::Green } else { Color::Red };
    Cell::new(format_money(value, currency))
        .fg(color)
        .add_attribute(Attribute::Bold)
        .set_alignment(CellAlignment::Right)
}

/// Renders transactions as a table, or `empty_message` when there are none.
pub fn transactions_table(
    transactions: &[&Transaction],
    currency: &str,
    empty_message: &str,
) -> String {
    if transactions.is_empty() {
        return style_text(empty_message, StyleType::Subtle);
    }

    let mut table = new_styled_table();
    table.set_header(vec![
        header_cell("Date"),
        header_cell("Title"),
        header_cell("Category"),
        header_cell("Amount"),
        header_cell("Id"),
    ]);

    for t in transactions {
        table.add_row(vec![
            Cell::new(t.date().format("%Y-%m-%d")),
            Cell::new(t.title()),
            Cell::new(t.category()),
            amount_cell(t, currency),
            Cell::new(t.id()).fg(Color::DarkGrey),
        ]);
    }
    table.to_string()
}
