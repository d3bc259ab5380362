//! Dot-bracket notation.
//!
//! A secondary structure is written as a string over `.`, `(` and `)`,
//! where matching brackets denote base pairs and dots unpaired bases.

use std::fmt;

use crate::StructureError;

/// One position of a dot-bracket string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotBracket {
    Unpaired,
    Open,
    Close,
}

impl TryFrom<char> for DotBracket {
    type Error = ();

    fn try_from(c: char) -> Result<Self, ()> {
        Ok(match c {
            '.' => DotBracket::Unpaired,
            '(' => DotBracket::Open,
            ')' => DotBracket::Close,
            _ => return Err(()),
        })
    }
}

impl From<DotBracket> for char {
    fn from(db: DotBracket) -> char {
        match db {
            DotBracket::Unpaired => '.',
            DotBracket::Open => '(',
            DotBracket::Close => ')',
        }
    }
}

/// A dot-bracket string as a vector of symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotBracketVec(pub Vec<DotBracket>);

impl DotBracketVec {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<&str> for DotBracketVec {
    type Error = StructureError;

    fn try_from(s: &str) -> Result<Self, StructureError> {
        let mut vec = Vec::with_capacity(s.len());
        for (position, c) in s.chars().enumerate() {
            let db = DotBracket::try_from(c)
                .map_err(|()| StructureError::InvalidCharacter { character: c, position })?;
            vec.push(db);
        }
        Ok(DotBracketVec(vec))
    }
}

impl fmt::Display for DotBracketVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &db in &self.0 {
            write!(f, "{}", char::from(db))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_roundtrip() {
        for c in ['.', '(', ')'] {
            let db = DotBracket::try_from(c).unwrap();
            assert_eq!(char::from(db), c);
        }
        assert!(DotBracket::try_from('x').is_err());
    }

    #[test]
    fn test_parse_and_display() {
        let dbv = DotBracketVec::try_from("(.())").unwrap();
        assert_eq!(dbv.len(), 5);
        assert_eq!(dbv.to_string(), "(.())");
    }

    #[test]
    fn test_invalid_character() {
        let err = DotBracketVec::try_from("((x))").unwrap_err();
        assert_eq!(err, StructureError::InvalidCharacter { character: 'x', position: 2 });
    }
}
