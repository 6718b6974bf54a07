use std::fmt;

use serde::Serialize;

use super::Calculator;
use crate::error::CalcError;

/// Average of a sequence after dropping every value equal to its minimum or maximum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Mean(pub f64);

impl fmt::Display for Mean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TrimmedMean;

impl Calculator for TrimmedMean {
    type Output = Mean;

    fn name(&self) -> &'static str {
        "trimmed_mean"
    }

    fn compute(&self, values: &[i32]) -> Result<Mean, CalcError> {
        trimmed_mean(values).map(Mean)
    }
}

/// Removes all occurrences of the minimum and of the maximum, then averages the rest.
///
/// # Errors
///
/// Returns [`CalcError::NoData`] when nothing is left, which includes the
/// empty sequence, a single value, two distinct values, and any sequence of
/// identical values.
pub fn trimmed_mean(values: &[i32]) -> Result<f64, CalcError> {
    let (Some(&min), Some(&max)) = (values.iter().min(), values.iter().max()) else {
        return Err(CalcError::NoData);
    };

    let (sum, count) = values
        .iter()
        .filter(|&&v| v != min && v != max)
        .fold((0i64, 0usize), |(sum, count), &v| {
            (sum + i64::from(v), count + 1)
        });

    if count == 0 {
        return Err(CalcError::NoData);
    }

    Ok(sum as f64 / count as f64)
}
