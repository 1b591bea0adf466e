//! Output formatting for calculated subnets.
//!
//! - [`terminal`] - Plain text tables and a coloured banner
//! - [`csv`] - CSV output formatting
//! - [`json`] - Pretty printed JSON
//! - [`explain`] - Step by step calculation notes

mod csv;
mod explain;
mod json;
mod terminal;

pub use csv::{flsm_csv, summary_csv, vlsm_csv};
pub use explain::{explain_flsm, explain_vlsm};
pub use json::to_json;
pub use terminal::{banner, format_field, render_flsm, render_summary, render_table, render_vlsm};

use std::fmt;
use std::str::FromStr;

/// How results are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" | "text" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "Unknown output format '{other}' (expected table, csv or json)"
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Table => "table",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        };
        f.write_str(name)
    }
}
