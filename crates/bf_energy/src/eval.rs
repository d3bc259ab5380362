//! Exact free energy evaluation of a (sequence, structure) pair.
//!
//! The structure is decomposed into nested loops by walking its pair
//! table with an explicit work stack (never language recursion, so the
//! stack depth does not grow with structure nesting). Every loop
//! contributes an integer energy in hundredths of kcal/mol; only the
//! final total is converted to kcal/mol.

use bf_structure::PairTable;
use bf_structure::StructureError;

use crate::EnergyParams;
use crate::Nucleotide;
use crate::PairType;
use crate::encode;
use crate::params::PARAMS_37;

use std::fmt;

/// Dangling end models: 0 (none), 2 (both neighbors always counted),
/// 3 (coaxial: unpaired neighbors are assigned to stems by a greedy
/// traversal, evaluated from two starting points, keeping the minimum).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dangles {
    None,
    #[default]
    Both,
    Coaxial,
}

/// Evaluation options.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvalOptions {
    pub dangles: Dangles,
    /// Logarithmic instead of linear multiloop unpaired-base penalty
    /// above 6 unpaired bases.
    pub log_multiloop: bool,
}

/// Error type for free energy evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// Zero-length sequence or structure.
    EmptyInput,

    /// Sequence and structure lengths differ.
    LengthMismatch { sequence: usize, structure: usize },

    /// Malformed dot-bracket string.
    UnbalancedBrackets { position: usize },

    /// A character in the structure that is not `.`, `(` or `)`.
    InvalidCharacter { character: char, position: usize },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::EmptyInput => write!(f, "empty sequence or structure"),
            EvalError::LengthMismatch { sequence, structure } => {
                write!(f, "sequence length {sequence} != structure length {structure}")
            }
            EvalError::UnbalancedBrackets { position } => {
                write!(f, "unbalanced brackets at position {position}")
            }
            EvalError::InvalidCharacter { character, position } => {
                write!(f, "invalid character '{character}' at position {position}")
            }
        }
    }
}

impl std::error::Error for EvalError {}

impl From<StructureError> for EvalError {
    fn from(e: StructureError) -> Self {
        match e {
            StructureError::UnbalancedBrackets { position } => {
                EvalError::UnbalancedBrackets { position }
            }
            StructureError::InvalidCharacter { character, position } => {
                EvalError::InvalidCharacter { character, position }
            }
        }
    }
}

/// Evaluate with the shared 37 degree parameters and default options
/// (dangle model 2, linear multiloop penalty). Returns kcal/mol.
pub fn evaluate(sequence: &str, structure: &str) -> Result<f64, EvalError> {
    evaluate_with(sequence, structure, &PARAMS_37, EvalOptions::default())
}

/// Evaluate the free energy of `structure` on `sequence` in kcal/mol.
pub fn evaluate_with(
    sequence: &str,
    structure: &str,
    params: &EnergyParams,
    options: EvalOptions,
) -> Result<f64, EvalError> {
    if sequence.is_empty() || structure.is_empty() {
        return Err(EvalError::EmptyInput);
    }
    let nucs = encode(sequence);
    let structure_len = structure.chars().count();
    if nucs.len() != structure_len {
        return Err(EvalError::LengthMismatch { sequence: nucs.len(), structure: structure_len });
    }
    let pt = PairTable::try_from(structure)?;
    let total = eval_pair_table(&nucs, &pt, params, options);
    Ok(total as f64 / 100.0)
}

/// Pair type of a pair the structure claims. An undefined pair type here
/// means a corrupted table or a bug, never bad input.
fn claimed(nucs: &[Nucleotide], i: usize, j: usize) -> PairType {
    let pt = PairType::of_claimed(nucs[i], nucs[j]);
    assert!(pt != PairType::NoPair, "claimed pair ({i},{j}) has undefined pair type");
    pt
}

fn eval_pair_table(
    nucs: &[Nucleotide],
    pt: &PairTable,
    params: &EnergyParams,
    options: EvalOptions,
) -> i64 {
    let n = nucs.len();
    let mut energy: i64 = 0;

    // exterior loop: collect top-level stems left to right
    let mut stems: Vec<(usize, usize)> = Vec::new();
    let mut i = 0;
    while i < n {
        match pt.partner(i) {
            Some(j) => {
                stems.push((i, j as usize));
                i = j as usize + 1;
            }
            None => i += 1,
        }
    }
    energy += exterior_energy(nucs, pt, &stems, params, options.dangles) as i64;

    // decompose every closed pair, outermost first
    let mut work: Vec<(usize, usize)> = stems;
    while let Some((i, j)) = work.pop() {
        let mut branches: Vec<(usize, usize)> = Vec::new();
        let mut k = i + 1;
        while k < j {
            match pt.partner(k) {
                Some(l) => {
                    debug_assert!((l as usize) > k && (l as usize) < j);
                    branches.push((k, l as usize));
                    k = l as usize + 1;
                }
                None => k += 1,
            }
        }

        energy += match branches.len() {
            0 => {
                let size = j - i - 1;
                params.hairpin(size, claimed(nucs, i, j), nucs[i + 1], nucs[j - 1], &nucs[i..=j])
                    as i64
            }
            1 => {
                let (p, q) = branches[0];
                params.interior(
                    p - i - 1,
                    j - q - 1,
                    claimed(nucs, i, j),
                    claimed(nucs, q, p),
                    nucs[i + 1],
                    nucs[j - 1],
                    nucs[p - 1],
                    nucs[q + 1],
                ) as i64
            }
            _ => multiloop_energy(nucs, pt, i, j, &branches, params, options) as i64,
        };
        work.extend(branches);
    }
    energy
}

fn exterior_energy(
    nucs: &[Nucleotide],
    pt: &PairTable,
    stems: &[(usize, usize)],
    params: &EnergyParams,
    dangles: Dangles,
) -> i32 {
    let n = nucs.len();
    match dangles {
        Dangles::None => stems
            .iter()
            .map(|&(i, j)| params.ext_stem(claimed(nucs, i, j), None, None))
            .sum(),
        Dangles::Both => stems
            .iter()
            .map(|&(i, j)| {
                let s5 = (i > 0).then(|| nucs[i - 1]);
                let s3 = (j + 1 < n).then(|| nucs[j + 1]);
                params.ext_stem(claimed(nucs, i, j), s5, s3)
            })
            .sum(),
        Dangles::Coaxial => {
            let ctx: Vec<StemCtx> = stems
                .iter()
                .map(|&(i, j)| StemCtx {
                    pt: claimed(nucs, i, j),
                    s5: (i > 0).then_some(i - 1),
                    s3: (j + 1 < n).then_some(j + 1),
                })
                .collect();
            let mut free: Vec<bool> = (0..n).map(|k| pt.partner(k).is_none()).collect();
            greedy_stems(nucs, &ctx, &mut free, params, false)
        }
    }
}

/// One stem inside a loop, with the absolute positions of its potential
/// dangle neighbors.
struct StemCtx {
    pt: PairType,
    s5: Option<usize>,
    s3: Option<usize>,
}

/// Greedily assign free unpaired neighbors to stems in traversal order,
/// picking the cheapest option per stem and consuming the bases it uses.
fn greedy_stems(
    nucs: &[Nucleotide],
    stems: &[StemCtx],
    free: &mut [bool],
    params: &EnergyParams,
    multi: bool,
) -> i32 {
    let stem = |pt, s5, s3| {
        if multi { params.ml_stem(pt, s5, s3) } else { params.ext_stem(pt, s5, s3) }
    };
    let mut total = 0;
    for ctx in stems {
        let f5 = ctx.s5.filter(|&p| free[p]);
        let f3 = ctx.s3.filter(|&p| free[p]);
        let mut best = stem(ctx.pt, None, None);
        let mut used: (Option<usize>, Option<usize>) = (None, None);
        if let Some(p) = f5 {
            let e = stem(ctx.pt, Some(nucs[p]), None);
            if e < best {
                best = e;
                used = (Some(p), None);
            }
        }
        if let Some(q) = f3 {
            let e = stem(ctx.pt, None, Some(nucs[q]));
            if e < best {
                best = e;
                used = (None, Some(q));
            }
        }
        if let (Some(p), Some(q)) = (f5, f3) {
            let e = stem(ctx.pt, Some(nucs[p]), Some(nucs[q]));
            if e < best {
                best = e;
                used = (Some(p), Some(q));
            }
        }
        if let Some(p) = used.0 {
            free[p] = false;
        }
        if let Some(q) = used.1 {
            free[q] = false;
        }
        total += best;
    }
    total
}

fn multiloop_energy(
    nucs: &[Nucleotide],
    pt: &PairTable,
    i: usize,
    j: usize,
    branches: &[(usize, usize)],
    params: &EnergyParams,
    options: EvalOptions,
) -> i32 {
    let unpaired = (j - i - 1) - branches.iter().map(|&(p, q)| q - p + 1).sum::<usize>();
    let base = params.ml_closing() + params.multi_unpaired(unpaired, options.log_multiloop);

    // the closing pair is read from the inside, so its neighbors swap
    let closing = claimed(nucs, j, i);
    match options.dangles {
        Dangles::None => {
            let mut e = base + params.ml_stem(closing, None, None);
            for &(p, q) in branches {
                e += params.ml_stem(claimed(nucs, p, q), None, None);
            }
            e
        }
        Dangles::Both => {
            let mut e = base + params.ml_stem(closing, Some(nucs[j - 1]), Some(nucs[i + 1]));
            for &(p, q) in branches {
                e += params.ml_stem(claimed(nucs, p, q), Some(nucs[p - 1]), Some(nucs[q + 1]));
            }
            e
        }
        Dangles::Coaxial => {
            // walk the loop from two starting points and keep the better
            let mut ctx: Vec<StemCtx> = Vec::with_capacity(branches.len() + 1);
            ctx.push(StemCtx { pt: closing, s5: Some(j - 1), s3: Some(i + 1) });
            for &(p, q) in branches {
                ctx.push(StemCtx {
                    pt: claimed(nucs, p, q),
                    s5: Some(p - 1),
                    s3: Some(q + 1),
                });
            }
            let unpaired_mask = |free: &mut Vec<bool>| {
                for k in i..=j {
                    free[k] = pt.partner(k).is_none();
                }
            };
            let mut free = vec![false; nucs.len()];
            unpaired_mask(&mut free);
            let closing_first = greedy_stems(nucs, &ctx, &mut free, params, true);
            ctx.rotate_left(1);
            unpaired_mask(&mut free);
            let branches_first = greedy_stems(nucs, &ctx, &mut free, params, true);
            base + closing_first.min(branches_first)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(evaluate("", ""), Err(EvalError::EmptyInput));
        assert_eq!(evaluate("", "..."), Err(EvalError::EmptyInput));
    }

    #[test]
    fn test_length_mismatch() {
        assert_eq!(
            evaluate("AC", "A"),
            Err(EvalError::LengthMismatch { sequence: 2, structure: 1 })
        );
    }

    #[test]
    fn test_unbalanced_structure() {
        assert!(matches!(
            evaluate("ACGU", "(((("),
            Err(EvalError::UnbalancedBrackets { .. })
        ));
        assert!(matches!(
            evaluate("ACGU", ")(.."),
            Err(EvalError::UnbalancedBrackets { position: 0 })
        ));
    }

    #[test]
    fn test_open_chain_is_neutral() {
        let e = evaluate("ACGUACGU", "........").unwrap();
        assert_eq!(e, 0.0);
    }

    #[test]
    fn test_stable_hairpin_is_negative() {
        let e = evaluate("GGGGAAAACCCC", "((((....))))").unwrap();
        assert!(e < 0.0, "expected stabilizing energy, got {e}");
    }

    #[test]
    fn test_gc_stem_beats_au_stem() {
        let gc = evaluate("GGGGAAAACCCC", "((((....))))").unwrap();
        let au = evaluate("AAAAAAAAUUUU", "((((....))))").unwrap();
        assert!(gc < au);
    }

    #[test]
    fn test_bulge_costs_energy() {
        let plain = evaluate("GGGGAAAACCCC", "((((....))))").unwrap();
        let bulged = evaluate("GGGGAAAACCCAC", "((((....))).)").unwrap();
        assert!(bulged > plain);
    }

    #[test]
    fn test_multiloop_structure_evaluates() {
        let seq = "GGGAAACCCAAAGGGAAACCCAA";
        let db = "(((...)))...(((...)))..";
        // two exterior stems, no multiloop yet
        let e = evaluate(seq, db).unwrap();
        assert!(e < 0.0);

        let seq = "GGGGGAAACCCAAGGGAAACCCACCCC";
        let db = "(((((...)))..(((...)))))...";
        // hairpin + hairpin under one closing pair: a multiloop
        let e = evaluate(seq, db).unwrap();
        assert!(e.is_finite());
    }

    #[test]
    fn test_dangle_models_differ() {
        let seq = "AGGGGAAAACCCCA";
        let db = ".((((....)))).";
        let d0 = evaluate_with(seq, db, &PARAMS_37,
            EvalOptions { dangles: Dangles::None, ..Default::default() }).unwrap();
        let d2 = evaluate_with(seq, db, &PARAMS_37,
            EvalOptions { dangles: Dangles::Both, ..Default::default() }).unwrap();
        // model 2 always counts the (stabilizing) neighbors
        assert!(d2 < d0);
    }

    #[test]
    fn test_coaxial_not_worse_than_none() {
        let seq = "AGGGGAAAACCCCAGGGGAAAACCCCA";
        let db = ".((((....)))).((((....)))).";
        let d0 = evaluate_with(seq, db, &PARAMS_37,
            EvalOptions { dangles: Dangles::None, ..Default::default() }).unwrap();
        let d3 = evaluate_with(seq, db, &PARAMS_37,
            EvalOptions { dangles: Dangles::Coaxial, ..Default::default() }).unwrap();
        // the greedy assignment only ever adds stabilizing terms
        assert!(d3 <= d0);
    }

    #[test]
    fn test_known_hairpin_energy() {
        // six-pair stem with a tetraloop; literature value -9.3 kcal/mol
        let e = evaluate("AAAACGGUCCUUAUCAGGACCAAACA", ".....((((((....)))))).....").unwrap();
        assert!((e + 9.3).abs() < 0.05, "expected about -9.3, got {e}");
    }

    #[test]
    fn test_deterministic() {
        let seq = "GGGGAAAACCCCAAGGGAAACCC";
        let db = "((((....))))..(((...)))";
        let a = evaluate(seq, db).unwrap();
        let b = evaluate(seq, db).unwrap();
        assert_eq!(a, b);
    }
}
