//! Nearest-neighbor free energy model for nucleic acid secondary
//! structures.
//!
//! [`EnergyParams`] holds the temperature-rescaled parameter set and the
//! loop energy primitives; [`evaluate`] scores a fixed (sequence,
//! structure) pair by decomposing it into loops. All internal energies
//! are integers in hundredths of kcal/mol, converted to kcal/mol only at
//! the public boundary.

mod eval;
mod nucleotide;
mod params;
mod tables;

pub use eval::{Dangles, EvalError, EvalOptions, evaluate, evaluate_with};
pub use nucleotide::{Nucleotide, PairType, encode};
pub use params::{DEFAULT_TEMPERATURE, EnergyParams, PARAMS_37, ParamError};
pub use tables::{INF, MAX_LOOP};
