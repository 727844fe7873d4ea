//! Replacement pairing for habits to break.
//!
//! Every bad habit registered with the collection gets a positive replacement
//! picked from a title-keyed alternatives table (falling back to one generic
//! alternative per category). Replacements already used for the same title
//! are skipped, and once the table is exhausted titles cycle with a numeric
//! suffix, so no literal title repeats within a title group.

mod alternatives;
mod engine;

pub use alternatives::{alternatives_for, Alternative};
pub use engine::{pair_bad_habit, PairedHabits, REPLACEMENT_WEEKLY_TARGET};
