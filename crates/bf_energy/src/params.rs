//! Temperature-rescaled energy parameters.
//!
//! [`EnergyParams`] turns the 37 degree literature tables of
//! [`crate::tables`] into one immutable aggregate for a given folding
//! temperature. Construction rescales every entry with
//! `dG(T) = dH - (dH - dG37) * (T + 273.15) / 310.15`; afterwards the
//! aggregate is read-only and can be shared freely across concurrent
//! calls.

use std::fmt;

use ahash::AHashMap;
use ndarray::{Array2, Array3, Array4};
use once_cell::sync::Lazy;

use crate::Nucleotide;
use crate::PairType;
use crate::tables;
use crate::tables::{INF, MAX_LOOP};

/// Reference temperature of the literature tables, in Kelvin.
const T37: f64 = 310.15;

/// Default folding temperature in degrees Celsius.
pub const DEFAULT_TEMPERATURE: f64 = 37.0;

/// Shared 37 degree parameter set; building it once amortizes the
/// rescaling cost across fold and evaluation calls.
pub static PARAMS_37: Lazy<EnergyParams> =
    Lazy::new(|| EnergyParams::new(DEFAULT_TEMPERATURE).expect("37 C rescaling is finite"));

/// Error type for parameter construction.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamError {
    /// The requested temperature does not yield a finite rescaling factor.
    NonFiniteTemperature { temperature: f64 },
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamError::NonFiniteTemperature { temperature } => {
                write!(f, "temperature {temperature} C does not rescale to finite energies")
            }
        }
    }
}

impl std::error::Error for ParamError {}

/// Immutable aggregate of temperature-rescaled free energy tables.
/// All entries are integers in hundredths of kcal/mol.
#[derive(Debug, Clone)]
pub struct EnergyParams {
    temperature: f64,

    stack: Array2<i32>,                // pair x pair
    mismatch_hairpin: Array3<i32>,     // pair x nuc x nuc
    mismatch_interior: Array3<i32>,
    mismatch_multi: Array3<i32>,
    mismatch_exterior: Array3<i32>,
    dangle5: Array2<i32>,              // pair x nuc
    dangle3: Array2<i32>,
    int11: Array4<i32>,                // pair x pair x nuc x nuc

    hairpin_len: [i32; 31],
    bulge_len: [i32; 31],
    internal_len: [i32; 31],

    terminal_au: i32,
    ml_closing: i32,
    ml_intern: i32,
    ml_base: i32,
    ninio: i32,
    max_ninio: i32,
    lxc: f64,

    special_hairpins: AHashMap<String, i32>,
}

/// Rescale one (dG37, dH) entry to the given scaling factor. `INF`
/// entries mark forbidden states and pass through unchanged.
fn rescale(dg37: i32, dh: i32, tempf: f64) -> i32 {
    if dg37 >= INF {
        return INF;
    }
    let dh = dh as f64;
    (dh - (dh - dg37 as f64) * tempf).round() as i32
}

fn rescale_len(dg: &[i32; 31], dh: &[i32; 31], tempf: f64) -> [i32; 31] {
    let mut out = [0; 31];
    for i in 0..31 {
        out[i] = rescale(dg[i], dh[i], tempf);
    }
    out
}

impl EnergyParams {
    /// Build the parameter aggregate for a temperature in degrees
    /// Celsius. Fails only if the temperature yields a non-finite
    /// rescaling factor.
    pub fn new(temperature_celsius: f64) -> Result<Self, ParamError> {
        let tempf = (temperature_celsius + 273.15) / T37;
        if !tempf.is_finite() {
            return Err(ParamError::NonFiniteTemperature { temperature: temperature_celsius });
        }

        // Canonical pair rows of the 6x6 raw tables sit at indices 1..=6
        // of the 8-class pair axis; NoPair and NS rows stay neutral.
        let mut stack = Array2::zeros((PairType::COUNT, PairType::COUNT));
        for a in 0..6 {
            for b in 0..6 {
                stack[(a + 1, b + 1)] =
                    rescale(tables::STACK_DG[a][b], tables::STACK_DH[a][b], tempf);
            }
        }

        let grid3 = |dg: &[[[i32; 5]; 5]; 8], dh: &[[[i32; 5]; 5]; 8]| {
            Array3::from_shape_fn((PairType::COUNT, Nucleotide::COUNT, Nucleotide::COUNT),
                |(p, x, y)| rescale(dg[p][x][y], dh[p][x][y], tempf))
        };
        let mismatch_hairpin =
            grid3(&tables::MISMATCH_HAIRPIN_DG, &tables::MISMATCH_HAIRPIN_DH);
        let mismatch_interior =
            grid3(&tables::MISMATCH_INTERIOR_DG, &tables::MISMATCH_INTERIOR_DH);
        let mismatch_multi = grid3(&tables::MISMATCH_MULTI_DG, &tables::MISMATCH_MULTI_DH);
        let mismatch_exterior =
            grid3(&tables::MISMATCH_EXTERIOR_DG, &tables::MISMATCH_EXTERIOR_DH);

        let dangle = |dg: &[[i32; 5]; 6], dh: &[[i32; 5]; 6]| {
            Array2::from_shape_fn((PairType::COUNT, Nucleotide::COUNT), |(p, x)| {
                if (1..=6).contains(&p) {
                    rescale(dg[p - 1][x], dh[p - 1][x], tempf)
                } else {
                    0
                }
            })
        };
        let dangle5 = dangle(&tables::DANGLE5_DG, &tables::DANGLE5_DH);
        let dangle3 = dangle(&tables::DANGLE3_DG, &tables::DANGLE3_DH);

        let hairpin_len = rescale_len(&tables::HAIRPIN_DG, &tables::HAIRPIN_DH, tempf);
        let bulge_len = rescale_len(&tables::BULGE_DG, &tables::BULGE_DH, tempf);
        let internal_len = rescale_len(&tables::INTERNAL_DG, &tables::INTERNAL_DH, tempf);

        let terminal_au = rescale(tables::TERMINAL_AU.0, tables::TERMINAL_AU.1, tempf);
        let ml_closing = rescale(tables::ML_CLOSING.0, tables::ML_CLOSING.1, tempf);
        let ml_intern = rescale(tables::ML_INTERN.0, tables::ML_INTERN.1, tempf);
        let ml_base = rescale(tables::ML_BASE.0, tables::ML_BASE.1, tempf);
        let ninio = rescale(tables::NINIO.0, tables::NINIO.1, tempf);

        // The measured 1x1 grid covers canonical closings only; a loop
        // closed by a claimed non-canonical pair is priced as an
        // unmeasured loop.
        let weak = |p: usize| if p == 1 || p == 2 { 0 } else { terminal_au };
        let int11 = Array4::from_shape_fn(
            (PairType::COUNT, PairType::COUNT, Nucleotide::COUNT, Nucleotide::COUNT),
            |(p1, p2, x, y)| {
                if p1 == 0 || p2 == 0 {
                    return INF;
                }
                if p1 <= 6 && p2 <= 6 {
                    rescale(
                        tables::INT11_DG[p1 - 1][p2 - 1][x][y],
                        tables::INT11_DH[p1 - 1][p2 - 1][x][y],
                        tempf,
                    )
                } else {
                    internal_len[2] + weak(p1) + weak(p2)
                }
            },
        );

        let params = EnergyParams {
            temperature: temperature_celsius,
            stack,
            mismatch_hairpin,
            mismatch_interior,
            mismatch_multi,
            mismatch_exterior,
            dangle5,
            dangle3,
            int11,
            hairpin_len,
            bulge_len,
            internal_len,
            terminal_au,
            ml_closing,
            ml_intern,
            ml_base,
            ninio,
            max_ninio: tables::MAX_NINIO,
            lxc: tables::LXC37 * tempf,
            special_hairpins: tables::SPECIAL_HAIRPINS
                .iter()
                .map(|&(seq, dg, dh)| (seq.to_string(), rescale(dg, dh, tempf)))
                .collect(),
        };
        Ok(params)
    }

    /// Temperature this aggregate was built for, in degrees Celsius.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Stacking energy of `inner` directly enclosed by `outer`.
    #[inline]
    pub fn stack(&self, outer: PairType, inner: PairType) -> i32 {
        self.stack[(outer.idx(), inner.idx())]
    }

    /// Terminal AU/GU end penalty for a helix closed by `pt`.
    #[inline]
    pub fn terminal_au(&self, pt: PairType) -> i32 {
        if pt.is_weak() { self.terminal_au } else { 0 }
    }

    #[inline]
    pub fn dangle5(&self, pt: PairType, n: Nucleotide) -> i32 {
        self.dangle5[(pt.idx(), n.idx())]
    }

    #[inline]
    pub fn dangle3(&self, pt: PairType, n: Nucleotide) -> i32 {
        self.dangle3[(pt.idx(), n.idx())]
    }

    #[inline]
    pub fn mismatch_multi(&self, pt: PairType, s5: Nucleotide, s3: Nucleotide) -> i32 {
        self.mismatch_multi[(pt.idx(), s5.idx(), s3.idx())]
    }

    /// Multiloop closing penalty (one per loop).
    #[inline]
    pub fn ml_closing(&self) -> i32 {
        self.ml_closing
    }

    /// Loop length table lookup with logarithmic extrapolation past 30.
    fn loop_len(&self, table: &[i32; 31], size: usize) -> i32 {
        if size <= MAX_LOOP {
            table[size]
        } else {
            table[MAX_LOOP] + (self.lxc * (size as f64 / MAX_LOOP as f64).ln()).round() as i32
        }
    }

    /// Hairpin loop closed by `pt` with `size` unpaired bases.
    /// `loop_seq` spans the closing pair inclusively and is consulted for
    /// the tri/tetra/hexaloop bonuses; `s5`/`s3` are the first and last
    /// unpaired bases of the loop.
    pub fn hairpin(
        &self,
        size: usize,
        pt: PairType,
        s5: Nucleotide,
        s3: Nucleotide,
        loop_seq: &[Nucleotide],
    ) -> i32 {
        let mut e = self.loop_len(&self.hairpin_len, size);
        if size == 3 {
            e += self.terminal_au(pt);
        } else {
            e += self.mismatch_hairpin[(pt.idx(), s5.idx(), s3.idx())];
        }
        if matches!(size, 3 | 4 | 6) {
            debug_assert_eq!(loop_seq.len(), size + 2);
            let key: String = loop_seq.iter().map(|&n| char::from(n)).collect();
            if let Some(&bonus) = self.special_hairpins.get(&key) {
                e += bonus;
            }
        }
        e
    }

    /// Bulge or interior loop between an outer pair and an inner pair.
    ///
    /// `n1`/`n2` count the unpaired bases on the 5' and 3' side; `pt_out`
    /// is the outer pair (i, j), `pt_in` the inner pair read backwards
    /// (q, p). `sl1`/`sr1` neighbor the outer pair on the inside,
    /// `sl2`/`sr2` neighbor the inner pair on the outside.
    #[allow(clippy::too_many_arguments)]
    pub fn interior(
        &self,
        n1: usize,
        n2: usize,
        pt_out: PairType,
        pt_in: PairType,
        sl1: Nucleotide,
        sr1: Nucleotide,
        sl2: Nucleotide,
        sr2: Nucleotide,
    ) -> i32 {
        if n1 == 0 && n2 == 0 {
            return self.stack(pt_out, pt_in);
        }
        let size = n1 + n2;
        if n1 == 0 || n2 == 0 {
            // bulge; a single bulged base keeps the helix stack
            return if size == 1 {
                self.bulge_len[1] + self.stack(pt_out, pt_in)
            } else {
                self.loop_len(&self.bulge_len, size)
                    + self.terminal_au(pt_out)
                    + self.terminal_au(pt_in)
            };
        }
        if (n1, n2) == (1, 1) {
            return self.int11[(pt_out.idx(), pt_in.idx(), sl1.idx(), sr1.idx())];
        }
        // larger loops: initiation, asymmetry, and both terminal mismatches
        let asym = ((n1 as i32 - n2 as i32).abs() * self.ninio).min(self.max_ninio);
        self.loop_len(&self.internal_len, size)
            + asym
            + self.mismatch_interior[(pt_out.idx(), sl1.idx(), sr1.idx())]
            + self.mismatch_interior[(pt_in.idx(), sr2.idx(), sl2.idx())]
    }

    /// Energy of one multiloop branch stem, including the per-stem
    /// penalty, the terminal AU penalty, and the dangle contribution of
    /// the neighbor bases the caller assigns (model 0 passes none,
    /// model 2 both, model 3 whichever the traversal hands out).
    pub fn ml_stem(&self, pt: PairType, s5: Option<Nucleotide>, s3: Option<Nucleotide>) -> i32 {
        self.ml_intern + self.terminal_au(pt) + self.stem_dangles(&self.mismatch_multi, pt, s5, s3)
    }

    /// Energy of one exterior loop stem; same dangle convention as
    /// [`EnergyParams::ml_stem`].
    pub fn ext_stem(&self, pt: PairType, s5: Option<Nucleotide>, s3: Option<Nucleotide>) -> i32 {
        self.terminal_au(pt) + self.stem_dangles(&self.mismatch_exterior, pt, s5, s3)
    }

    fn stem_dangles(
        &self,
        mismatch: &Array3<i32>,
        pt: PairType,
        s5: Option<Nucleotide>,
        s3: Option<Nucleotide>,
    ) -> i32 {
        match (s5, s3) {
            (Some(a), Some(b)) => mismatch[(pt.idx(), a.idx(), b.idx())],
            (Some(a), None) => self.dangle5(pt, a),
            (None, Some(b)) => self.dangle3(pt, b),
            (None, None) => 0,
        }
    }

    /// Penalty for `count` unpaired bases inside a multiloop; linear, or
    /// logarithmic above 6 when `log_scaling` is set.
    pub fn multi_unpaired(&self, count: usize, log_scaling: bool) -> i32 {
        if log_scaling && count > 6 {
            6 * self.ml_base + (self.lxc * (count as f64 / 6.0).ln()).round() as i32
        } else {
            count as i32 * self.ml_base
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Nucleotide::*;

    #[test]
    fn test_rescale_identity_at_37() {
        let p = EnergyParams::new(37.0).unwrap();
        // at the reference temperature every entry equals its dG37 value
        assert_eq!(p.stack(PairType::CG, PairType::GC), tables::STACK_DG[0][1]);
        assert_eq!(p.terminal_au(PairType::AU), tables::TERMINAL_AU.0);
        assert_eq!(p.terminal_au(PairType::GC), 0);
    }

    #[test]
    fn test_rescale_moves_with_temperature() {
        let cold = EnergyParams::new(10.0).unwrap();
        let hot = EnergyParams::new(70.0).unwrap();
        // stacking is enthalpy-driven: weaker (less negative) when hot
        assert!(cold.stack(PairType::CG, PairType::GC) < hot.stack(PairType::CG, PairType::GC));
    }

    #[test]
    fn test_nonfinite_temperature_rejected() {
        assert!(EnergyParams::new(f64::NAN).is_err());
        assert!(EnergyParams::new(f64::INFINITY).is_err());
        assert!(EnergyParams::new(37.0).is_ok());
    }

    #[test]
    fn test_loop_length_extrapolation() {
        let p = EnergyParams::new(37.0).unwrap();
        let e30 = p.loop_len(&p.hairpin_len, 30);
        let e60 = p.loop_len(&p.hairpin_len, 60);
        let expected = e30 + (p.lxc * 2.0_f64.ln()).round() as i32;
        assert_eq!(e60, expected);
        assert!(e60 > e30);
    }

    #[test]
    fn test_hairpin_special_bonus() {
        let p = EnergyParams::new(37.0).unwrap();
        // CUUCGG: the UUCG tetraloop with a CG closing pair
        let tetra = crate::encode("CUUCGG");
        let with_bonus = p.hairpin(4, PairType::CG, U, G, &tetra);
        let plain = crate::encode("CUACGG");
        let without = p.hairpin(4, PairType::CG, U, G, &plain);
        assert!(with_bonus < without);
    }

    #[test]
    fn test_interior_dispatch() {
        let p = EnergyParams::new(37.0).unwrap();
        let stack = p.interior(0, 0, PairType::CG, PairType::CG, A, A, A, A);
        assert_eq!(stack, p.stack(PairType::CG, PairType::CG));
        let bulge1 = p.interior(1, 0, PairType::CG, PairType::CG, A, A, A, A);
        assert_eq!(bulge1, p.bulge_len[1] + stack);
        let int11 = p.interior(1, 1, PairType::CG, PairType::CG, G, G, G, G);
        assert!(int11 < p.interior(1, 1, PairType::CG, PairType::CG, A, A, A, A));
    }

    #[test]
    fn test_multi_unpaired_log_scaling() {
        let p = EnergyParams::new(37.0).unwrap();
        assert_eq!(p.multi_unpaired(3, false), 3 * p.ml_base);
        let lin = p.multi_unpaired(20, false);
        let log = p.multi_unpaired(20, true);
        // with ml_base == 0 the logarithmic term dominates
        assert!(log >= lin);
    }

    #[test]
    fn test_shared_default_params() {
        assert_eq!(PARAMS_37.temperature(), DEFAULT_TEMPERATURE);
    }
}
