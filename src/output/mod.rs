//! Terminal output formatting
//!
//! Display utilities for the line-based front end and command results.

pub mod display;
pub mod formatters;

pub use display::{print_auto_result, print_evaluation, print_view};
