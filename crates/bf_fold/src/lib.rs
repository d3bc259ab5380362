//! Beam-pruned minimum free energy secondary structure prediction.
//!
//! [`fold`] scans the sequence left to right, keeping only the `beam`
//! most promising chart states per position, which makes the runtime
//! linear in sequence length for a fixed beam. Beam 0 disables pruning
//! and recovers the exact quadratic-space search.

mod fold;
mod state;

pub use fold::{DEFAULT_BEAM, fold, fold_with};
pub use state::{Manner, State, VALUE_MIN};
