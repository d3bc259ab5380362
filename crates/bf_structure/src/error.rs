use std::fmt;

/// Error type for dot-bracket parsing and pair table construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    /// A closing bracket without a matching open, or leftover open
    /// brackets at the end of the string. The position points at the
    /// offending close, or at the innermost unmatched open.
    UnbalancedBrackets { position: usize },

    /// A character that is neither `.`, `(` nor `)`.
    InvalidCharacter { character: char, position: usize },
}

impl fmt::Display for StructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureError::UnbalancedBrackets { position } => {
                write!(f, "unbalanced brackets at position {position}")
            }
            StructureError::InvalidCharacter { character, position } => {
                write!(f, "invalid character '{character}' at position {position}")
            }
        }
    }
}

impl std::error::Error for StructureError {}
