//! Command implementations

pub mod play;
pub mod simulate;

pub use play::{PlayConfig, run_play};
pub use simulate::{RoundResult, SimulateConfig, SimulationResult, run_simulation};
