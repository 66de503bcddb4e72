//! Rendering of listed records as a table, JSON, or CSV.

use std::io::Write;

use booking::{Customer, ReservationView, Restaurant};
use clap::ValueEnum;
use serde::Serialize;

use crate::error::CliError;
use crate::utils::format_timestamp;

/// Output format for list commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}

impl From<booking::config::OutputFormat> for OutputFormat {
    fn from(format: booking::config::OutputFormat) -> Self {
        match format {
            booking::config::OutputFormat::Table => Self::Table,
            booking::config::OutputFormat::Json => Self::Json,
            booking::config::OutputFormat::Csv => Self::Csv,
        }
    }
}

/// A record that can be printed as one row.
pub trait Tabular: Serialize {
    /// Column headers, lowercase.
    const HEADERS: &'static [&'static str];

    /// The row's cells, in header order.
    fn cells(&self) -> Vec<String>;
}

impl Tabular for Customer {
    const HEADERS: &'static [&'static str] = &["id", "name"];

    fn cells(&self) -> Vec<String> {
        vec![self.id.to_string(), self.name.clone()]
    }
}

impl Tabular for Restaurant {
    const HEADERS: &'static [&'static str] = &["id", "name"];

    fn cells(&self) -> Vec<String> {
        vec![self.id.to_string(), self.name.clone().unwrap_or_default()]
    }
}

impl Tabular for ReservationView {
    const HEADERS: &'static [&'static str] = &[
        "reservation_id",
        "date",
        "party_count",
        "customer_id",
        "customer_name",
        "restaurant_id",
        "restaurant_name",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.reservation_id.to_string(),
            format_timestamp(self.date),
            self.party_count.to_string(),
            self.customer_id.to_string(),
            self.customer_name.clone(),
            self.restaurant_id.to_string(),
            self.restaurant_name.clone().unwrap_or_default(),
        ]
    }
}

/// Writes `rows` to stdout in the requested format.
pub fn print_rows<T: Tabular>(rows: &[T], format: OutputFormat) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write_rows(&mut handle, rows, format)
}

/// Writes `rows` to `out` in the requested format.
pub fn write_rows<T: Tabular, W: Write>(
    out: &mut W,
    rows: &[T],
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Table => write_table(out, rows),
        OutputFormat::Json => write_json(out, rows),
        OutputFormat::Csv => write_csv(out, rows),
    }
}

fn write_table<T: Tabular, W: Write>(out: &mut W, rows: &[T]) -> Result<(), CliError> {
    let header_line = T::HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(out, "{header_line}")?;

    for row in rows {
        let cells: Vec<String> = row
            .cells()
            .into_iter()
            .map(|cell| if cell.is_empty() { "-".into() } else { cell })
            .collect();
        writeln!(out, "{}", cells.join("\t"))?;
    }

    Ok(())
}

fn write_json<T: Tabular, W: Write>(out: &mut W, rows: &[T]) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, rows)
        .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
    writeln!(out)?;
    Ok(())
}

/// Convert `csv::Error` to `CliError`.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e))
}

fn write_csv<T: Tabular, W: Write>(out: &mut W, rows: &[T]) -> Result<(), CliError> {
    let mut writer = csv::WriterBuilder::new().from_writer(out);

    writer.write_record(T::HEADERS).map_err(csv_error)?;
    for row in rows {
        writer.write_record(row.cells()).map_err(csv_error)?;
    }

    writer.flush()?;
    Ok(())
}
