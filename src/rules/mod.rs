//! Game rules.
//!
//! - `standing`: elimination and warning thresholds
//! - `outcome`: the completion rule, derived from totals
//! - `engine`: `Scorekeeper`, the clocked entry point for all transitions
//! - `flow`: where score entry goes next
//!
//! Thresholds are fixed constants; the rules take no configuration.

pub mod standing;
pub mod outcome;
pub mod engine;
pub mod flow;

pub use standing::{Standing, ELIMINATION_THRESHOLD, WARNING_THRESHOLD};
pub use outcome::Outcome;
pub use engine::{RulesError, Scorekeeper};
pub use flow::{next_open_cell, should_add_round, NextCell};
