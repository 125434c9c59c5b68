use derive_more::Display;

use crate::language::Symbol;

#[derive(Debug, Display, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Terminal(pub Symbol);

#[derive(Debug, Display, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NonTerminal(pub Symbol);

/// A rewrite rule `lhs → rhs`. The left-hand side is replaced wherever it
/// occurs as a suffix of a partially derived string.
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash)]
#[display("{lhs} → {rhs}")]
pub struct Production {
    pub lhs: String,
    pub rhs: String,
}

#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum GrammarError {
    #[display("invalid production: empty left-hand side")]
    EmptyLeftHandSide,
    /// The right-hand side is not a declared terminal optionally followed by
    /// a declared non-terminal (`a` or `aB`).
    #[display("unsupported production shape: {production}")]
    UnsupportedShape { production: Production },
    #[display("invalid production syntax: {_0}")]
    Parse(String),
}

impl std::error::Error for GrammarError {}
