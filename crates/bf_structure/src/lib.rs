//! The bf_structure crate.
//!
//! Secondary structure representations shared by the folding engine and
//! the free energy evaluator:
//!  - dot-bracket strings (`DotBracket`, `DotBracketVec`)
//!  - pair tables (`PairTable`)
//!
//! Parsing a dot-bracket string validates bracket balance; rendering a
//! `PairTable` back to dot-bracket is the exact inverse.

mod error;
mod dotbracket;
mod pair_table;

pub use error::*;
pub use dotbracket::*;
pub use pair_table::*;


/// Nucleic Acid INdeX: we use `u16` (0 to 65k), which is plenty for
/// nucleic acids. Positions on a strand are 0-based throughout.
pub type NAIDX = u16;
