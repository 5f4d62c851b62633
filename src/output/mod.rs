//! Terminal output formatting
//!
//! Display utilities for the game and for command results.

pub mod display;
pub mod formatters;

pub use display::{print_family_report, print_round_status, print_simulation_result};
