//! Terminal output
//!
//! Writes rendered rows and daily totals as an aligned table, JSON or CSV.

use std::io::Write;

use crate::view::{DailyTotals, TableRow};

/// Output format for rows and totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

/// Errors writing output
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ExportResult<T> = Result<T, ExportError>;

const COLUMNS: [&str; 3] = ["Customer Name", "Amount", "Date"];

/// Write table rows in the requested format
pub fn write_rows<W: Write>(
    out: &mut W,
    rows: &[TableRow],
    format: OutputFormat,
) -> ExportResult<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, rows)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            writer.write_record(["customer", "amount", "date"])?;
            for row in rows {
                writer.write_record([&row.customer, &row.amount, &row.date])?;
            }
            writer.flush()?;
        }
        OutputFormat::Table => {
            if rows.is_empty() {
                writeln!(out, "No transactions match the current filters")?;
                return Ok(());
            }

            let name_width = rows
                .iter()
                .map(|r| r.customer.chars().count())
                .chain([COLUMNS[0].len()])
                .max()
                .unwrap_or_default();

            writeln!(
                out,
                "{:<name_width$}  {:>10}  {}",
                COLUMNS[0], COLUMNS[1], COLUMNS[2]
            )?;
            writeln!(out, "{}", "-".repeat(name_width + 2 + 10 + 2 + 10))?;
            for row in rows {
                writeln!(
                    out,
                    "{:<name_width$}  {:>10}  {}",
                    row.customer, row.amount, row.date
                )?;
            }
        }
    }

    Ok(())
}

/// Write per-date totals in the requested format
pub fn write_totals<W: Write>(
    out: &mut W,
    totals: &DailyTotals,
    format: OutputFormat,
) -> ExportResult<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, totals)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            writer.write_record(["date", "total"])?;
            for (date, total) in totals.iter() {
                writer.write_record([date.to_string(), total.to_string()])?;
            }
            writer.flush()?;
        }
        OutputFormat::Table => {
            if totals.is_empty() {
                return Ok(());
            }

            writeln!(out, "{:<12}  {:>12}", "Date", "Total")?;
            writeln!(out, "{}", "-".repeat(26))?;
            for (date, total) in totals.iter() {
                writeln!(out, "{:<12}  {:>12}", date, total)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::fallback_dataset;
    use crate::view::{aggregate_by_date, table_rows};

    fn rendered(format: OutputFormat) -> String {
        let dataset = fallback_dataset();
        let rows = table_rows(&dataset.customers, &dataset.transactions[..2]);
        let mut out = Vec::new();
        write_rows(&mut out, &rows, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_table_output() {
        let text = rendered(OutputFormat::Table);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Customer Name"));
        assert!(lines[2].starts_with("Ahmed Ali"));
        assert!(lines[2].ends_with("1000  2022-01-01"));
    }

    #[test]
    fn test_csv_output() {
        assert_eq!(
            rendered(OutputFormat::Csv),
            "customer,amount,date\nAhmed Ali,1000,2022-01-01\nAhmed Ali,2000,2022-01-02\n"
        );
    }

    #[test]
    fn test_json_output() {
        let value: serde_json::Value = serde_json::from_str(&rendered(OutputFormat::Json)).unwrap();
        assert_eq!(value[1]["amount"], "2000");
        assert_eq!(value[1]["customer"], "Ahmed Ali");
    }

    #[test]
    fn test_empty_table_message() {
        let mut out = Vec::new();
        write_rows(&mut out, &[], OutputFormat::Table).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "No transactions match the current filters\n"
        );
    }

    #[test]
    fn test_totals_csv() {
        let totals = aggregate_by_date(&fallback_dataset().transactions);
        let mut out = Vec::new();
        write_totals(&mut out, &totals, OutputFormat::Csv).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "date,total\n2022-01-01,5300\n2022-01-02,5425\n"
        );
    }
}
