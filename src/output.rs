//! Output formatting for per-case results.
//!
//! Supports the plain text lines of the original programs, JSON lines, and CSV.

use std::fmt::Display;
use std::io::Write;

use anyhow::{Result, anyhow};
use clap::ValueEnum;
use csv::WriterBuilder;
use serde::Serialize;
use tracing::debug;

use crate::error::CalcError;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One value or error message per line
    #[default]
    Text,
    /// One JSON object per line
    Json,
    /// CSV with a header row
    Csv,
}

/// The outcome of a single test case.
#[derive(Debug, Serialize)]
pub struct CaseReport<T> {
    pub case: usize,
    pub count: usize,
    pub result: Option<T>,
    pub error: Option<String>,
}

impl<T> CaseReport<T> {
    pub fn new(case: usize, count: usize, outcome: Result<T, CalcError>) -> Self {
        match outcome {
            Ok(value) => Self {
                case,
                count,
                result: Some(value),
                error: None,
            },
            Err(e) => Self {
                case,
                count,
                result: None,
                error: Some(e.to_string()),
            },
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

impl<T: Display> CaseReport<T> {
    /// The line printed in [`OutputFormat::Text`].
    pub fn text_line(&self) -> String {
        match (&self.result, &self.error) {
            (Some(value), _) => value.to_string(),
            (None, Some(e)) => format!("Error: {e}"),
            (None, None) => String::new(),
        }
    }
}

enum Sink<W: Write> {
    Text(W),
    Json(W),
    Csv(csv::Writer<W>),
}

/// Writes [`CaseReport`]s to `W` in the chosen [`OutputFormat`].
pub struct ReportWriter<W: Write> {
    sink: Sink<W>,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(format: OutputFormat, writer: W) -> Self {
        let sink = match format {
            OutputFormat::Text => Sink::Text(writer),
            OutputFormat::Json => Sink::Json(writer),
            OutputFormat::Csv => Sink::Csv(
                WriterBuilder::new()
                    .has_headers(true) // written before the first row
                    .from_writer(writer),
            ),
        };
        Self { sink }
    }

    pub fn write<T: Display + Serialize>(&mut self, report: &CaseReport<T>) -> Result<()> {
        match &mut self.sink {
            Sink::Text(w) => writeln!(w, "{}", report.text_line())?,
            Sink::Json(w) => {
                serde_json::to_writer(&mut *w, report)?;
                writeln!(w)?;
            }
            Sink::Csv(w) => w.serialize(report)?,
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        debug!("Flushing report output");
        match &mut self.sink {
            Sink::Text(w) | Sink::Json(w) => w.flush()?,
            Sink::Csv(w) => w.flush()?,
        }
        Ok(())
    }

    /// Flushes and returns the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        match self.sink {
            Sink::Text(mut w) | Sink::Json(mut w) => {
                w.flush()?;
                Ok(w)
            }
            Sink::Csv(w) => w
                .into_inner()
                .map_err(|e| anyhow!("failed to flush CSV output: {}", e.error())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::trimmed_mean::Mean;

    fn render<T: Display + Serialize>(format: OutputFormat, reports: &[CaseReport<T>]) -> String {
        let mut writer = ReportWriter::new(format, Vec::new());
        for report in reports {
            writer.write(report).unwrap();
        }
        String::from_utf8(writer.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_text_lines() {
        let reports = vec![
            CaseReport::new(1, 5, Ok(Mean(3.0))),
            CaseReport::new(2, 3, Err(CalcError::NoData)),
        ];

        assert_eq!(
            render(OutputFormat::Text, &reports),
            "3.00\nError: No numbers left after removal\n"
        );
    }

    #[test]
    fn test_json_lines() {
        let reports = vec![
            CaseReport::new(1, 6, Ok(5i64)),
            CaseReport::new(2, 0, Err(CalcError::EmptyPrices)),
        ];

        let out = render(OutputFormat::Json, &reports);
        let lines: Vec<serde_json::Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["case"], 1);
        assert_eq!(lines[0]["result"], 5);
        assert!(lines[0]["error"].is_null());
        assert!(lines[1]["result"].is_null());
        assert_eq!(lines[1]["error"], "No prices given");
    }

    #[test]
    fn test_csv_writes_header_once() {
        let reports = vec![
            CaseReport::new(1, 6, Ok(5i64)),
            CaseReport::new(2, 5, Ok(0i64)),
        ];

        let out = render(OutputFormat::Csv, &reports);
        let lines: Vec<_> = out.lines().collect();

        assert_eq!(lines, vec!["case,count,result,error", "1,6,5,", "2,5,0,"]);
    }

    #[test]
    fn test_is_error() {
        assert!(CaseReport::<i64>::new(1, 0, Err(CalcError::EmptyPrices)).is_error());
        assert!(!CaseReport::new(1, 1, Ok(0i64)).is_error());
    }
}
