pub mod calculators;
pub mod error;
pub mod input;
pub mod output;
pub mod runner;
