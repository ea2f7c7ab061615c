//! Transaction table rendering
//!
//! Joins each transaction to its customer and writes one row per transaction
//! into a [`TableSink`].

use serde::Serialize;

use crate::dataset::{Customer, CustomerIndex, Transaction};

/// One rendered table row: customer name, amount, date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub customer: String,
    pub amount: String,
    pub date: String,
}

/// Something rows can be written into (a DOM table body, a terminal buffer)
pub trait TableSink {
    /// Remove every existing row
    fn clear(&mut self);

    /// Append a row after the existing ones
    fn insert_row(&mut self, row: TableRow);

    /// Replace every row at once
    ///
    /// Sinks that publish changes (reactive UIs) override this so a render
    /// is observed as a single update.
    fn replace_rows(&mut self, rows: Vec<TableRow>) {
        self.clear();
        for row in rows {
            self.insert_row(row);
        }
    }
}

/// Plain numeric rendering, no currency formatting
///
/// Follows the browser's number-to-text conversion: decimal notation for
/// magnitudes in `[1e-6, 1e21)`, otherwise `1e+21` / `1.5e-7`. Zero of
/// either sign is `0`.
pub fn format_amount(amount: f64) -> String {
    if amount == 0.0 {
        return "0".to_string();
    }
    if amount.is_nan() {
        return "NaN".to_string();
    }
    if amount.is_infinite() {
        return if amount > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    if (1e-6..1e21).contains(&amount.abs()) {
        return amount.to_string();
    }

    let exponential = format!("{:e}", amount);
    match exponential.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => exponential,
    }
}

/// Derive rows for `transactions` in input order
pub fn table_rows(customers: &[Customer], transactions: &[Transaction]) -> Vec<TableRow> {
    let index = CustomerIndex::new(customers);
    transactions
        .iter()
        .map(|tx| TableRow {
            customer: index.display_name(tx.customer_id).to_string(),
            amount: format_amount(tx.amount),
            date: tx.date.clone(),
        })
        .collect()
}

/// Replace the sink's contents with one row per transaction
pub fn render<S: TableSink + ?Sized>(
    sink: &mut S,
    customers: &[Customer],
    transactions: &[Transaction],
) {
    sink.replace_rows(table_rows(customers, transactions));
}

/// In-memory table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowBuffer {
    rows: Vec<TableRow>,
}

impl RowBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl TableSink for RowBuffer {
    fn clear(&mut self) {
        self.rows.clear();
    }

    fn insert_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }
}
