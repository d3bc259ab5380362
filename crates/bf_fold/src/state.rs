//! Chart states of the beam-pruned DP.
//!
//! Every chart cell is a [`State`]: its best score so far and the
//! [`Manner`] (derivation rule plus payload) that produced it. The
//! manner is all the traceback needs, so no separate backpointer
//! tables exist.

/// Sentinel for "no derivation found". Half of `i32::MIN` so that
/// adding two unreached scores cannot wrap around.
pub const VALUE_MIN: i32 = i32::MIN / 2;

/// Derivation rule that produced a state, with enough payload to
/// reconstruct the split points during traceback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Manner {
    #[default]
    None,
    /// H: candidate hairpin span, not yet committed to a pair.
    Hairpin,
    /// P closed over an H span.
    HairpinClose,
    /// P stacked directly on an inner P.
    Helix,
    /// P enclosing an inner P across a bulge or interior loop of
    /// `l1` unpaired bases on the left and `l2` on the right.
    Single { l1: u16, l2: u16 },
    /// Multi span whose innermost M2 starts `l1` after i and ends
    /// `l2` before j.
    Multi { l1: u16, l2: u16 },
    /// P closing a Multi span as a multiloop.
    PFromMulti,
    /// M from a lone stem P.
    MFromP,
    /// M from an M2.
    MFromM2,
    /// M extended by one unpaired base on the right.
    MUnpaired,
    /// M2 = M + P, where the P branch starts at `split`.
    M2Split { split: u16 },
    /// C extended by one unpaired base on the right.
    CUnpaired,
    /// C = C + P, where the P stem starts at `split`.
    CSplit { split: u16 },
}

/// A chart cell: best score in hundredths of kcal/mol, negated so that
/// larger is more stable, plus the manner that achieved it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    pub score: i32,
    pub manner: Manner,
}

impl Default for State {
    fn default() -> Self {
        Self { score: VALUE_MIN, manner: Manner::None }
    }
}

impl State {
    /// Keep the strictly better derivation. Ties keep the incumbent,
    /// so insertion order never changes the result.
    pub fn update(&mut self, score: i32, manner: Manner) {
        if score > self.score {
            self.score = score;
            self.manner = manner;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_keeps_better() {
        let mut s = State::default();
        s.update(-50, Manner::Hairpin);
        assert_eq!(s.score, -50);
        s.update(-70, Manner::Helix);
        assert_eq!(s.score, -50);
        assert_eq!(s.manner, Manner::Hairpin);
        s.update(10, Manner::Helix);
        assert_eq!(s.manner, Manner::Helix);
    }

    #[test]
    fn test_update_ties_keep_incumbent() {
        let mut s = State::default();
        s.update(0, Manner::CUnpaired);
        s.update(0, Manner::CSplit { split: 3 });
        assert_eq!(s.manner, Manner::CUnpaired);
    }
}
