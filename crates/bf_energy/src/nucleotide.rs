//! Nucleotide and pair-type classification.
//!
//! Sequences are mapped onto a 5-symbol alphabet (A, C, G, U and N for
//! everything else), and ordered base pairs onto one of 8 pair-type
//! classes. Energy tables are indexed by these discriminants.

use std::fmt;

/// One of the 5 nucleotide symbols. `N` collects every character that is
/// not A, C, G, U (or T, which is read as U).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Nucleotide {
    N = 0,
    A = 1,
    C = 2,
    G = 3,
    U = 4,
}

impl Nucleotide {
    /// Table index of this nucleotide.
    #[inline]
    pub fn idx(self) -> usize {
        self as usize
    }

    /// Number of nucleotide symbols (table dimension).
    pub const COUNT: usize = 5;
}

impl From<char> for Nucleotide {
    fn from(c: char) -> Self {
        match c.to_ascii_uppercase() {
            'A' => Nucleotide::A,
            'C' => Nucleotide::C,
            'G' => Nucleotide::G,
            'U' | 'T' => Nucleotide::U,
            _ => Nucleotide::N,
        }
    }
}

impl From<Nucleotide> for char {
    fn from(n: Nucleotide) -> char {
        match n {
            Nucleotide::N => 'N',
            Nucleotide::A => 'A',
            Nucleotide::C => 'C',
            Nucleotide::G => 'G',
            Nucleotide::U => 'U',
        }
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}

/// Normalize and encode a sequence: uppercase, `T -> U`, anything
/// unknown becomes `N` (and will never pair).
pub fn encode(sequence: &str) -> Vec<Nucleotide> {
    sequence.chars().map(Nucleotide::from).collect()
}

/// Classification of an ordered base pair (5' base, 3' base).
///
/// The six canonical classes are listed in the order the energy tables
/// use; `NS` covers claimed pairs outside the canonical set and `NoPair`
/// marks combinations that cannot pair at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PairType {
    NoPair = 0,
    CG = 1,
    GC = 2,
    GU = 3,
    UG = 4,
    AU = 5,
    UA = 6,
    NS = 7,
}

impl PairType {
    /// Table index of this pair type.
    #[inline]
    pub fn idx(self) -> usize {
        self as usize
    }

    /// Number of pair-type classes (table dimension).
    pub const COUNT: usize = 8;

    /// Classify the ordered pair (a, b).
    pub fn of(a: Nucleotide, b: Nucleotide) -> PairType {
        use Nucleotide::*;
        match (a, b) {
            (C, G) => PairType::CG,
            (G, C) => PairType::GC,
            (G, U) => PairType::GU,
            (U, G) => PairType::UG,
            (A, U) => PairType::AU,
            (U, A) => PairType::UA,
            _ => PairType::NoPair,
        }
    }

    /// Classify a claimed pair: non-canonical combinations become `NS`
    /// instead of `NoPair`. Used by the evaluator, which must price any
    /// pair the caller's structure asserts.
    pub fn of_claimed(a: Nucleotide, b: Nucleotide) -> PairType {
        match PairType::of(a, b) {
            PairType::NoPair => PairType::NS,
            pt => pt,
        }
    }

    /// The same pair read from the other strand side: (a, b) -> (b, a).
    pub fn reversed(self) -> PairType {
        match self {
            PairType::NoPair => PairType::NoPair,
            PairType::CG => PairType::GC,
            PairType::GC => PairType::CG,
            PairType::GU => PairType::UG,
            PairType::UG => PairType::GU,
            PairType::AU => PairType::UA,
            PairType::UA => PairType::AU,
            PairType::NS => PairType::NS,
        }
    }

    /// True for pairs that carry the terminal AU/GU end penalty
    /// (everything but CG and GC).
    pub fn is_weak(self) -> bool {
        !matches!(self, PairType::CG | PairType::GC)
    }

    /// True if the two bases can actually pair.
    pub fn can_pair(a: Nucleotide, b: Nucleotide) -> bool {
        PairType::of(a, b) != PairType::NoPair
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Nucleotide::*;

    #[test]
    fn test_encode_normalizes() {
        assert_eq!(encode("acgu"), vec![A, C, G, U]);
        assert_eq!(encode("ATGC"), vec![A, U, G, C]);
        assert_eq!(encode("AxG"), vec![A, N, G]);
    }

    #[test]
    fn test_canonical_pairs() {
        assert_eq!(PairType::of(C, G), PairType::CG);
        assert_eq!(PairType::of(G, U), PairType::GU);
        assert_eq!(PairType::of(U, A), PairType::UA);
        assert_eq!(PairType::of(A, A), PairType::NoPair);
        assert_eq!(PairType::of(N, U), PairType::NoPair);
    }

    #[test]
    fn test_reversed_involution() {
        for a in [N, A, C, G, U] {
            for b in [N, A, C, G, U] {
                let pt = PairType::of(a, b);
                assert_eq!(pt.reversed(), PairType::of(b, a));
                assert_eq!(pt.reversed().reversed(), pt);
            }
        }
    }

    #[test]
    fn test_claimed_pairs() {
        assert_eq!(PairType::of_claimed(A, C), PairType::NS);
        assert_eq!(PairType::of_claimed(G, C), PairType::GC);
    }

    #[test]
    fn test_weak_pairs() {
        assert!(!PairType::CG.is_weak());
        assert!(!PairType::GC.is_weak());
        assert!(PairType::AU.is_weak());
        assert!(PairType::GU.is_weak());
        assert!(PairType::NS.is_weak());
    }
}
