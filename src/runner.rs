//! Drives a [`Calculator`] over every test case of an input stream.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::calculators::Calculator;
use crate::input::read_cases;
use crate::output::{CaseReport, ReportWriter};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub cases: usize,
    pub failed: usize,
}

/// Computes and writes one report per test case until end of input.
///
/// Per-case calculation errors are reported and the run continues. A framing
/// error in the input ends the run; everything written before it is flushed
/// first.
#[tracing::instrument(skip_all, fields(calculator = calculator.name()))]
pub fn run<C, R, W>(calculator: &C, reader: R, out: &mut ReportWriter<W>) -> Result<RunSummary>
where
    C: Calculator,
    R: BufRead,
    W: Write,
{
    let mut summary = RunSummary::default();

    for case in read_cases(reader) {
        let values = match case {
            Ok(values) => values,
            Err(e) => {
                out.flush()?;
                return Err(e).with_context(|| format!("reading test case {}", summary.cases + 1));
            }
        };

        summary.cases += 1;
        let outcome = calculator.compute(&values);
        match &outcome {
            Ok(value) => debug!(case = summary.cases, count = values.len(), %value, "Case computed"),
            Err(e) => {
                summary.failed += 1;
                warn!(case = summary.cases, count = values.len(), error = %e, "Case has no result");
            }
        }

        out.write(&CaseReport::new(summary.cases, values.len(), outcome))
            .with_context(|| format!("writing result of test case {}", summary.cases))?;
    }

    out.flush()?;
    info!(cases = summary.cases, failed = summary.failed, "Finished processing input");
    Ok(summary)
}
