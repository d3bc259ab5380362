//! PairTable definitions.
//!
//! A `PairTable` maps every position of a strand to its pairing partner,
//! or `None` if the position is unpaired. Indices are **0-based**. The
//! table is symmetric by construction: `pt[i] == Some(j)` implies
//! `pt[j] == Some(i)` with `i != j`.

use std::fmt;
use std::ops::Index;

use crate::DotBracket;
use crate::DotBracketVec;
use crate::NAIDX;
use crate::StructureError;

/// A secondary structure as a partner lookup table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairTable(Vec<Option<NAIDX>>);

impl PairTable {
    /// Create a table of `length` unpaired positions.
    pub fn new(length: usize) -> Self {
        PairTable(vec![None; length])
    }

    /// Number of positions on the strand.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Pairing partner of `i`, if any.
    pub fn partner(&self, i: usize) -> Option<NAIDX> {
        self.0[i]
    }

    /// Register the pair (i, j). Panics in debug if either side is
    /// already paired or if i == j.
    pub fn insert(&mut self, i: NAIDX, j: NAIDX) {
        debug_assert!(i != j);
        debug_assert!(self.0[i as usize].is_none());
        debug_assert!(self.0[j as usize].is_none());
        self.0[i as usize] = Some(j);
        self.0[j as usize] = Some(i);
    }

    /// Number of pairs in the table.
    pub fn num_pairs(&self) -> usize {
        self.0.iter().filter(|p| p.is_some()).count() / 2
    }

    /// Iterator over partner entries in strand order.
    pub fn iter(&self) -> std::slice::Iter<'_, Option<NAIDX>> {
        self.0.iter()
    }
}

impl Index<usize> for PairTable {
    type Output = Option<NAIDX>;

    fn index(&self, i: usize) -> &Option<NAIDX> {
        &self.0[i]
    }
}

impl TryFrom<&DotBracketVec> for PairTable {
    type Error = StructureError;

    /// Build a pair table from a dot-bracket vector, validating bracket
    /// balance with an explicit stack of open positions.
    fn try_from(dbv: &DotBracketVec) -> Result<Self, StructureError> {
        let mut pt = PairTable::new(dbv.len());
        let mut open: Vec<usize> = Vec::new();
        for (position, &db) in dbv.0.iter().enumerate() {
            match db {
                DotBracket::Unpaired => {}
                DotBracket::Open => open.push(position),
                DotBracket::Close => {
                    let i = open
                        .pop()
                        .ok_or(StructureError::UnbalancedBrackets { position })?;
                    pt.insert(i as NAIDX, position as NAIDX);
                }
            }
        }
        if let Some(&position) = open.last() {
            return Err(StructureError::UnbalancedBrackets { position });
        }
        Ok(pt)
    }
}

impl TryFrom<&str> for PairTable {
    type Error = StructureError;

    fn try_from(s: &str) -> Result<Self, StructureError> {
        let dbv = DotBracketVec::try_from(s)?;
        PairTable::try_from(&dbv)
    }
}

impl From<&PairTable> for DotBracketVec {
    fn from(pt: &PairTable) -> Self {
        let mut dbv = vec![DotBracket::Unpaired; pt.len()];
        for (i, &j_opt) in pt.iter().enumerate() {
            if let Some(j) = j_opt {
                if (i as NAIDX) < j {
                    dbv[i] = DotBracket::Open;
                    dbv[j as usize] = DotBracket::Close;
                }
            }
        }
        DotBracketVec(dbv)
    }
}

impl fmt::Display for PairTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", DotBracketVec::from(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let pt = PairTable::try_from("((..))").unwrap();
        assert_eq!(pt.len(), 6);
        assert_eq!(pt[0], Some(5));
        assert_eq!(pt[1], Some(4));
        assert_eq!(pt[2], None);
        assert_eq!(pt.num_pairs(), 2);
    }

    #[test]
    fn test_symmetry() {
        let pt = PairTable::try_from("(((..(((...)))..)))").unwrap();
        for (i, &j_opt) in pt.iter().enumerate() {
            if let Some(j) = j_opt {
                assert_ne!(i, j as usize);
                assert_eq!(pt[j as usize], Some(i as NAIDX));
            }
        }
    }

    #[test]
    fn test_roundtrip() {
        for s in ["", ".", "((..))", "(((..((.....))...)))", "..()..(())..", "......"] {
            // () is fine here: minimum loop sizes are the engines' business.
            let pt = PairTable::try_from(s).unwrap();
            assert_eq!(pt.to_string(), s);
        }
    }

    #[test]
    fn test_unbalanced_open() {
        let err = PairTable::try_from("((").unwrap_err();
        assert!(matches!(err, StructureError::UnbalancedBrackets { .. }));
    }

    #[test]
    fn test_unbalanced_close() {
        let err = PairTable::try_from(")(").unwrap_err();
        assert_eq!(err, StructureError::UnbalancedBrackets { position: 0 });
    }

    #[test]
    fn test_unbalanced_count() {
        assert!(PairTable::try_from("(()").is_err());
        assert!(PairTable::try_from("())").is_err());
    }

    #[test]
    fn test_empty() {
        let pt = PairTable::try_from("").unwrap();
        assert!(pt.is_empty());
        assert_eq!(pt.num_pairs(), 0);
    }
}
