//! Per-case calculations over integer sequences.
//!
//! Each calculator turns one test case into a single value, or a
//! [`CalcError`] when the case has no answer.

pub mod max_profit;
pub mod trimmed_mean;

pub use max_profit::MaxProfit;
pub use trimmed_mean::TrimmedMean;

use std::fmt::Display;

use serde::Serialize;

use crate::error::CalcError;

pub trait Calculator {
    type Output: Display + Serialize;

    /// Short name used in logs.
    fn name(&self) -> &'static str;

    fn compute(&self, values: &[i32]) -> Result<Self::Output, CalcError>;
}
