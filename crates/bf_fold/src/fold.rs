//! Beam-pruned left-to-right MFE folding.
//!
//! The chart is filled one right end `j` at a time. Each of the five
//! state families (hairpin candidates H, pairs P, multiloop fragments
//! M and M2, open multiloop spans Multi) keeps a per-`j` beam keyed by
//! the left end `i`; the exterior prefix C is a single state per `j`.
//! Before a beam is expanded it is pruned to the `beam` best states,
//! ranked by the prefix heuristic `bestC[i-1] + state`. With beam 0 the
//! search is exhaustive.
//!
//! Scores are negated loop energies in hundredths of kcal/mol, so the
//! chart maximizes and the most stable structure wins. Dangling ends
//! follow model 2 (both neighbors always counted), which keeps every
//! derivation score exactly equal to the negated evaluator energy of
//! the traced structure.

use std::collections::BinaryHeap;

use itertools::Itertools;
use log::debug;
use nohash_hasher::IntMap;

use bf_energy::EnergyParams;
use bf_energy::MAX_LOOP;
use bf_energy::Nucleotide;
use bf_energy::PARAMS_37;
use bf_energy::PairType;
use bf_energy::encode;
use bf_structure::DotBracket;
use bf_structure::DotBracketVec;

use crate::state::Manner;
use crate::state::State;

/// Default beam width.
pub const DEFAULT_BEAM: usize = 100;

/// Below this beam width the candidate lists are too short for cube
/// pruning to pay off, so M2 falls back to the exhaustive combination.
const MIN_CUBE_BEAM: usize = 20;

/// Predict the MFE structure of `sequence` with the shared 37 degree
/// parameters. Returns the dot-bracket string and its score in
/// kcal/mol, the negated free energy, so stable structures score
/// positive. `beam` 0 disables pruning.
pub fn fold(sequence: &str, beam: usize) -> (String, f64) {
    fold_with(sequence, beam, &PARAMS_37)
}

/// Predict the MFE structure of `sequence` under `params`.
pub fn fold_with(sequence: &str, beam: usize, params: &EnergyParams) -> (String, f64) {
    let nucs = encode(sequence);
    if nucs.is_empty() {
        return (String::new(), 0.0);
    }
    let mut dp = BeamFold::new(nucs, beam, params);
    let best = dp.run();
    let db = dp.traceback();
    (db.to_string(), best.score as f64 / 100.0)
}

/// Traceback frames; the chart state to unwind next.
enum Frame {
    C(usize),
    P(usize, usize),
    M(usize, usize),
    M2(usize, usize),
    Multi(usize, usize),
}

struct BeamFold<'a> {
    params: &'a EnergyParams,
    nucs: Vec<Nucleotide>,
    beam: usize,
    /// `next_pair[t][j]`: first index after `j` whose base can pair
    /// with nucleotide type `t`.
    next_pair: Vec<Vec<Option<usize>>>,
    best_h: Vec<IntMap<usize, State>>,
    best_p: Vec<IntMap<usize, State>>,
    best_m: Vec<IntMap<usize, State>>,
    best_m2: Vec<IntMap<usize, State>>,
    best_multi: Vec<IntMap<usize, State>>,
    best_c: Vec<State>,
    /// M beams re-sorted by the prefix heuristic, for cube pruning.
    sorted_m: Vec<Vec<(i32, usize)>>,
}

impl<'a> BeamFold<'a> {
    fn new(nucs: Vec<Nucleotide>, beam: usize, params: &'a EnergyParams) -> Self {
        let n = nucs.len();
        assert!(
            n <= u16::MAX as usize,
            "sequence of {n} nt exceeds the supported length of {}",
            u16::MAX
        );
        let variants = [
            Nucleotide::N,
            Nucleotide::A,
            Nucleotide::C,
            Nucleotide::G,
            Nucleotide::U,
        ];
        let mut next_pair = vec![vec![None; n]; Nucleotide::COUNT];
        for t in variants {
            let row = &mut next_pair[t.idx()];
            let mut next = None;
            for j in (0..n).rev() {
                row[j] = next;
                if PairType::can_pair(t, nucs[j]) {
                    next = Some(j);
                }
            }
        }
        Self {
            params,
            nucs,
            beam,
            next_pair,
            best_h: vec![IntMap::default(); n],
            best_p: vec![IntMap::default(); n],
            best_m: vec![IntMap::default(); n],
            best_m2: vec![IntMap::default(); n],
            best_multi: vec![IntMap::default(); n],
            best_c: vec![State::default(); n],
            sorted_m: vec![Vec::new(); n],
        }
    }

    fn pair(&self, i: usize, j: usize) -> PairType {
        PairType::of(self.nucs[i], self.nucs[j])
    }

    /// Prefix heuristic: best exterior score left of `i`.
    fn prefix(&self, i: usize) -> i32 {
        if i == 0 { 0 } else { self.best_c[i - 1].score }
    }

    fn score_hairpin(&self, i: usize, j: usize) -> i32 {
        let size = j - i - 1;
        -self.params.hairpin(
            size,
            self.pair(i, j),
            self.nucs[i + 1],
            self.nucs[j - 1],
            &self.nucs[i..=j],
        )
    }

    /// Outer pair (p, q) enclosing inner pair (i, j) across a stack,
    /// bulge, or interior loop.
    fn score_single(&self, p: usize, q: usize, i: usize, j: usize) -> i32 {
        -self.params.interior(
            i - p - 1,
            q - j - 1,
            self.pair(p, q),
            self.pair(j, i),
            self.nucs[p + 1],
            self.nucs[q - 1],
            self.nucs[i - 1],
            self.nucs[j + 1],
        )
    }

    /// Stem (i, j) as a multiloop branch.
    fn score_m1(&self, i: usize, j: usize) -> i32 {
        let s5 = (i > 0).then(|| self.nucs[i - 1]);
        let s3 = (j + 1 < self.nucs.len()).then(|| self.nucs[j + 1]);
        -self.params.ml_stem(self.pair(i, j), s5, s3)
    }

    /// Stem (i, j) in the exterior loop.
    fn score_ext(&self, i: usize, j: usize) -> i32 {
        let s5 = (i > 0).then(|| self.nucs[i - 1]);
        let s3 = (j + 1 < self.nucs.len()).then(|| self.nucs[j + 1]);
        -self.params.ext_stem(self.pair(i, j), s5, s3)
    }

    /// Pair (i, j) closing a multiloop; the pair is read from inside.
    fn score_multi_close(&self, i: usize, j: usize) -> i32 {
        -(self.params.ml_closing()
            + self.params.ml_stem(
                self.pair(j, i),
                Some(self.nucs[j - 1]),
                Some(self.nucs[i + 1]),
            ))
    }

    /// Drop all but the `beam` best states, ranked by the prefix
    /// heuristic. Ties at the threshold survive.
    fn beam_prune(&self, map: &mut IntMap<usize, State>) {
        if self.beam == 0 || map.len() <= self.beam {
            return;
        }
        let mut scores: Vec<i32> = map.iter().map(|(&i, s)| self.prefix(i) + s.score).collect();
        let k = scores.len() - self.beam;
        let (_, &mut threshold, _) = scores.select_nth_unstable(k);
        map.retain(|&i, s| self.prefix(i) + s.score >= threshold);
    }

    fn run(&mut self) -> State {
        let n = self.nucs.len();
        let use_cube = self.beam >= MIN_CUBE_BEAM;
        self.best_c[0] = State { score: 0, manner: Manner::CUnpaired };

        for j in 0..n {
            // H: seed a fresh hairpin candidate opening at j, then
            // extend and close the candidates ending here.
            {
                let mut beam = std::mem::take(&mut self.best_h[j]);
                self.beam_prune(&mut beam);

                let tj = self.nucs[j].idx();
                let mut jnext = self.next_pair[tj][j];
                while let Some(k) = jnext {
                    // no sharp turn: at least 3 unpaired between i and j
                    if k - j > 3 {
                        break;
                    }
                    jnext = self.next_pair[tj][k];
                }
                if let Some(k) = jnext {
                    let sc = self.score_hairpin(j, k);
                    self.best_h[k].entry(j).or_default().update(sc, Manner::Hairpin);
                }

                for (&i, state) in &beam {
                    if let Some(k) = self.next_pair[self.nucs[i].idx()][j] {
                        let sc = self.score_hairpin(i, k);
                        self.best_h[k].entry(i).or_default().update(sc, Manner::Hairpin);
                    }
                    self.best_p[j]
                        .entry(i)
                        .or_default()
                        .update(state.score, Manner::HairpinClose);
                }
                self.best_h[j] = beam;
            }

            // Multi: extend the open span rightwards or close it into P.
            {
                let mut beam = std::mem::take(&mut self.best_multi[j]);
                self.beam_prune(&mut beam);
                for (&i, state) in &beam {
                    let (l1, l2) = match state.manner {
                        Manner::Multi { l1, l2 } => (l1, l2),
                        m => unreachable!("Multi state with manner {m:?}"),
                    };
                    if let Some(k) = self.next_pair[self.nucs[i].idx()][j] {
                        let new_l2 = l2 as usize + (k - j);
                        if new_l2 <= MAX_LOOP {
                            self.best_multi[k].entry(i).or_default().update(
                                state.score,
                                Manner::Multi { l1, l2: new_l2 as u16 },
                            );
                        }
                    }
                    let sc = state.score + self.score_multi_close(i, j);
                    self.best_p[j].entry(i).or_default().update(sc, Manner::PFromMulti);
                }
                self.best_multi[j] = beam;
            }

            // P: grow helices outward, become a lone M branch, combine
            // into M2, or attach to the exterior prefix.
            {
                let mut beam = std::mem::take(&mut self.best_p[j]);
                self.beam_prune(&mut beam);
                for (&i, state) in &beam {
                    debug_assert!(self.pair(i, j) != PairType::NoPair);

                    // enclose (i, j) by an outer pair (p, q)
                    if i > 0 {
                        let p_min = i.saturating_sub(MAX_LOOP + 1);
                        for p in (p_min..i).rev() {
                            let l1 = i - p - 1;
                            let mut q = self.next_pair[self.nucs[p].idx()][j];
                            while let Some(qq) = q {
                                let l2 = qq - j - 1;
                                if l1 + l2 > MAX_LOOP {
                                    break;
                                }
                                let manner = if l1 == 0 && l2 == 0 {
                                    Manner::Helix
                                } else {
                                    Manner::Single { l1: l1 as u16, l2: l2 as u16 }
                                };
                                let sc = state.score + self.score_single(p, qq, i, j);
                                self.best_p[qq].entry(p).or_default().update(sc, manner);
                                q = self.next_pair[self.nucs[p].idx()][qq];
                            }
                        }
                    }

                    // M = P
                    if i > 0 && j + 1 < n {
                        let sc = state.score + self.score_m1(i, j);
                        self.best_m[j].entry(i).or_default().update(sc, Manner::MFromP);
                    }

                    // M2 = M + P, exhaustively when cube pruning is off
                    if !use_cube && i > 0 && !self.best_m[i - 1].is_empty() {
                        let branch = state.score + self.score_m1(i, j);
                        let combined: Vec<(usize, i32)> = self.best_m[i - 1]
                            .iter()
                            .map(|(&k, m)| (k, m.score + branch))
                            .collect();
                        for (k, score) in combined {
                            self.best_m2[j]
                                .entry(k)
                                .or_default()
                                .update(score, Manner::M2Split { split: i as u16 });
                        }
                    }

                    // C = C + P
                    let total = self.prefix(i) + state.score + self.score_ext(i, j);
                    self.best_c[j].update(total, Manner::CSplit { split: i as u16 });
                }

                // M2 = M + P with cube pruning: walk the pre-sorted M
                // candidate lists lazily, best estimates first.
                if use_cube {
                    let pstates: Vec<(usize, i32)> =
                        beam.iter().map(|(&i, s)| (i, s.score)).collect();
                    let mut heap: BinaryHeap<(i32, usize, usize)> = BinaryHeap::new();
                    for (idx, &(i, score)) in pstates.iter().enumerate() {
                        if i > 0 && !self.sorted_m[i - 1].is_empty() {
                            heap.push((score + self.sorted_m[i - 1][0].0, idx, 0));
                        }
                    }
                    let mut filled = 0;
                    let mut last = i32::MAX;
                    while let Some((est, idx, rank)) = heap.pop() {
                        if filled >= self.beam && est < last {
                            break;
                        }
                        let (i, pscore) = pstates[idx];
                        let (_, k) = self.sorted_m[i - 1][rank];
                        let mscore = self.best_m[i - 1][&k].score;
                        let sc = mscore + pscore + self.score_m1(i, j);
                        self.best_m2[j]
                            .entry(k)
                            .or_default()
                            .update(sc, Manner::M2Split { split: i as u16 });
                        filled += 1;
                        last = est;
                        if rank + 1 < self.sorted_m[i - 1].len() {
                            heap.push((pscore + self.sorted_m[i - 1][rank + 1].0, idx, rank + 1));
                        }
                    }
                }
                self.best_p[j] = beam;
            }

            // M2: become an M, or open a Multi span with an outer pair.
            {
                let mut beam = std::mem::take(&mut self.best_m2[j]);
                self.beam_prune(&mut beam);
                for (&i, state) in &beam {
                    self.best_m[j]
                        .entry(i)
                        .or_default()
                        .update(state.score, Manner::MFromM2);

                    let p_min = i.saturating_sub(MAX_LOOP + 1);
                    for p in (p_min..i).rev() {
                        if let Some(q) = self.next_pair[self.nucs[p].idx()][j] {
                            if q - j <= MAX_LOOP {
                                self.best_multi[q].entry(p).or_default().update(
                                    state.score,
                                    Manner::Multi { l1: (i - p) as u16, l2: (q - j) as u16 },
                                );
                            }
                        }
                    }
                }
                self.best_m2[j] = beam;
            }

            // M: absorb one more unpaired base on the right.
            {
                let mut beam = std::mem::take(&mut self.best_m[j]);
                self.beam_prune(&mut beam);
                if j + 1 < n {
                    for (&i, state) in &beam {
                        self.best_m[j + 1]
                            .entry(i)
                            .or_default()
                            .update(state.score, Manner::MUnpaired);
                    }
                }
                if use_cube {
                    self.sorted_m[j] = beam
                        .iter()
                        .map(|(&i, s)| (self.prefix(i) + s.score, i))
                        .sorted_unstable_by(|a, b| b.cmp(a))
                        .collect();
                }
                self.best_m[j] = beam;
            }

            // C: the prefix gains one unpaired base.
            if j + 1 < n {
                let state = self.best_c[j];
                self.best_c[j + 1].update(state.score, Manner::CUnpaired);
            }
        }

        let best = self.best_c[n - 1];
        debug!("folded {n} nt with beam {}: score {}", self.beam, best.score);
        best
    }

    /// Unwind the chart from bestC[n-1], marking pairs as derivations
    /// are replayed. Every referenced state survived pruning, so the
    /// lookups cannot miss.
    fn traceback(&self) -> DotBracketVec {
        let n = self.nucs.len();
        let mut db = vec![DotBracket::Unpaired; n];
        let mut stack = vec![Frame::C(n - 1)];
        while let Some(frame) = stack.pop() {
            match frame {
                Frame::C(j) => match self.best_c[j].manner {
                    Manner::CUnpaired => {
                        if j > 0 {
                            stack.push(Frame::C(j - 1));
                        }
                    }
                    Manner::CSplit { split } => {
                        let i = split as usize;
                        db[i] = DotBracket::Open;
                        db[j] = DotBracket::Close;
                        stack.push(Frame::P(i, j));
                        if i > 0 {
                            stack.push(Frame::C(i - 1));
                        }
                    }
                    m => unreachable!("C state with manner {m:?}"),
                },
                Frame::P(i, j) => match self.best_p[j][&i].manner {
                    Manner::HairpinClose => {}
                    Manner::Helix => {
                        db[i + 1] = DotBracket::Open;
                        db[j - 1] = DotBracket::Close;
                        stack.push(Frame::P(i + 1, j - 1));
                    }
                    Manner::Single { l1, l2 } => {
                        let p = i + l1 as usize + 1;
                        let q = j - l2 as usize - 1;
                        db[p] = DotBracket::Open;
                        db[q] = DotBracket::Close;
                        stack.push(Frame::P(p, q));
                    }
                    Manner::PFromMulti => stack.push(Frame::Multi(i, j)),
                    m => unreachable!("P state with manner {m:?}"),
                },
                Frame::Multi(i, j) => match self.best_multi[j][&i].manner {
                    Manner::Multi { l1, l2 } => {
                        stack.push(Frame::M2(i + l1 as usize, j - l2 as usize));
                    }
                    m => unreachable!("Multi state with manner {m:?}"),
                },
                Frame::M2(i, j) => match self.best_m2[j][&i].manner {
                    Manner::M2Split { split } => {
                        let k = split as usize;
                        db[k] = DotBracket::Open;
                        db[j] = DotBracket::Close;
                        stack.push(Frame::P(k, j));
                        stack.push(Frame::M(i, k - 1));
                    }
                    m => unreachable!("M2 state with manner {m:?}"),
                },
                Frame::M(i, j) => match self.best_m[j][&i].manner {
                    Manner::MFromP => {
                        db[i] = DotBracket::Open;
                        db[j] = DotBracket::Close;
                        stack.push(Frame::P(i, j));
                    }
                    Manner::MFromM2 => stack.push(Frame::M2(i, j)),
                    Manner::MUnpaired => stack.push(Frame::M(i, j - 1)),
                    m => unreachable!("M state with manner {m:?}"),
                },
            }
        }
        DotBracketVec(db)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bf_energy::{EvalOptions, evaluate_with};
    use bf_structure::PairTable;

    #[test]
    fn test_empty_sequence() {
        assert_eq!(fold("", DEFAULT_BEAM), (String::new(), 0.0));
    }

    #[test]
    fn test_unpairable_sequence_stays_open() {
        let (db, e) = fold("AAAAAAAAAA", DEFAULT_BEAM);
        assert_eq!(db, "..........");
        assert_eq!(e, 0.0);
    }

    #[test]
    fn test_no_sharp_turns() {
        // every candidate pair here would close a loop shorter than 3
        let (db, e) = fold("GCGC", DEFAULT_BEAM);
        assert_eq!(db, "....");
        assert_eq!(e, 0.0);
    }

    #[test]
    fn test_gc_hairpin() {
        let (db, score) = fold("GGGGAAAACCCC", DEFAULT_BEAM);
        assert_eq!(db, "((((....))))");
        assert!(score > 0.0, "expected a stabilizing fold, got {score}");
    }

    #[test]
    fn test_structure_is_balanced() {
        for seq in ["GGGAAACCCAAAGGGAAACCC", "ACGUACGUACGUACGUACGU", "GCGCGCAAAGCGCGC"] {
            let (db, _) = fold(seq, DEFAULT_BEAM);
            assert_eq!(db.len(), seq.len());
            assert!(PairTable::try_from(db.as_str()).is_ok(), "unbalanced: {db}");
        }
    }

    #[test]
    fn test_deterministic() {
        let seq = "GGGGAAAACCCCAAGGGAAACCCUUUAGGGAAACCC";
        assert_eq!(fold(seq, 50), fold(seq, 50));
    }

    #[test]
    fn test_score_matches_evaluator() {
        let _ = env_logger::builder().is_test(true).try_init();
        // the chart scores with dangle model 2, so the traced structure
        // must evaluate to exactly the reported energy
        let opts = EvalOptions::default();
        for seq in [
            "GGGGAAAACCCC",
            "GGGAAACCCAAAGGGAAACCC",
            "GCGGGAAACCAAGGGAAUCCCACGC",
            "AUGGCUACGUAGCUAGCGGAUCCGAUCG",
        ] {
            for beam in [0, DEFAULT_BEAM] {
                let (db, score) = fold(seq, beam);
                let energy = evaluate_with(seq, &db, &PARAMS_37, opts).unwrap();
                assert!(
                    (score + energy).abs() < 1e-9,
                    "{seq} (beam {beam}): folded {score} but evaluated {energy}"
                );
            }
        }
    }

    #[test]
    fn test_exhaustive_never_worse_than_beamed() {
        let seq = "GGCGCAAGCUAGCUUAAGCGCGCAAAGGCGCAAUUGCGCC";
        let (_, exact) = fold(seq, 0);
        for beam in [5, 20, 50] {
            let (_, beamed) = fold(seq, beam);
            assert!(
                exact >= beamed - 1e-9,
                "beam {beam} scored {beamed}, above exhaustive {exact}"
            );
        }
    }

    #[test]
    fn test_cube_pruning_agrees_with_plain_combination() {
        // beams straddling the cube pruning cutoff still score their
        // own traced structures exactly
        let seq = "GGGAAACCCGGGAAACCCGGGAAACCCAAAGGGAAACCC";
        for beam in [MIN_CUBE_BEAM - 1, MIN_CUBE_BEAM, MIN_CUBE_BEAM + 1] {
            let (db, score) = fold(seq, beam);
            let energy = evaluate_with(seq, &db, &PARAMS_37, EvalOptions::default()).unwrap();
            assert!((score + energy).abs() < 1e-9);
        }
    }

    #[test]
    fn test_known_structures() {
        // marginal helices lose to the open chain
        let (db, score) = fold("UGAGUUCUCGAUCUCUAAAAUCG", DEFAULT_BEAM);
        assert_eq!(db, ".......................");
        assert_eq!(score, 0.0);

        let (db, score) = fold("AAAACGGUCCUUAUCAGGACCAAACA", DEFAULT_BEAM);
        assert_eq!(db, ".....((((((....)))))).....");
        assert!((score - 9.3).abs() < 0.05, "expected about 9.3, got {score}");
    }

    #[test]
    #[should_panic(expected = "exceeds the supported length")]
    fn test_overlong_sequence_rejected() {
        let seq = "A".repeat(u16::MAX as usize + 1);
        fold(&seq, DEFAULT_BEAM);
    }

    #[test]
    fn test_lowercase_and_dna_input() {
        let (upper, e1) = fold("GCGCUUUUGCGC", DEFAULT_BEAM);
        let (lower, e2) = fold("gcgcuuuugcgc", DEFAULT_BEAM);
        let (dna, e3) = fold("GCGCTTTTGCGC", DEFAULT_BEAM);
        assert_eq!(upper, lower);
        assert_eq!(upper, dna);
        assert_eq!(e1, e2);
        assert_eq!(e1, e3);
    }
}
