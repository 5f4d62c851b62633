//! Word families
//!
//! Partitioning of candidates by guess outcome, and selection of the family that
//! survives a guess.

mod partition;
mod selector;

pub use partition::{Family, FamilyCounts, family_counts, partition};
pub use selector::{Selection, compare_hardness, select_family};
