//! Operator detection
//!
//! Finds which operator kinds occur in an expression. Nothing about
//! precedence or associativity is computed here; the set only selects which
//! grammar productions and semantic rules apply downstream.

use indexmap::IndexSet;
use std::fmt;

/// An operator symbol recognized in expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operator {
    Plus,
    Minus,
    Star,
    /// Composite `**`; supersedes a bare `*` at the same site
    StarStar,
    Slash,
    Caret,
    LParen,
    RParen,
}

impl Operator {
    /// Get the source spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::StarStar => "**",
            Self::Slash => "/",
            Self::Caret => "^",
            Self::LParen => "(",
            Self::RParen => ")",
        }
    }

    /// Single-byte operator for a source byte
    fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'+' => Some(Self::Plus),
            b'-' => Some(Self::Minus),
            b'*' => Some(Self::Star),
            b'/' => Some(Self::Slash),
            b'^' => Some(Self::Caret),
            b'(' => Some(Self::LParen),
            b')' => Some(Self::RParen),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Distinct operators found in an expression, in order of first appearance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperatorSet {
    operators: IndexSet<Operator>,
}

impl OperatorSet {
    /// Scan a whitespace-free expression left to right.
    ///
    /// A `**` pair is consumed as one token and evicts any bare `*` seen
    /// before it; a bare `*` appearing later is added again.
    pub fn detect(expression: &str) -> Self {
        let bytes = expression.as_bytes();
        let mut operators = IndexSet::new();
        let mut i = 0;

        while i < bytes.len() {
            if bytes[i] == b'*' && bytes.get(i + 1) == Some(&b'*') {
                operators.insert(Operator::StarStar);
                operators.shift_remove(&Operator::Star);
                i += 2;
                continue;
            }
            if let Some(op) = Operator::from_byte(bytes[i]) {
                operators.insert(op);
            }
            i += 1;
        }

        let set = Self { operators };
        tracing::trace!(expression, operators = %set, "detected operators");
        set
    }

    pub fn contains(&self, op: Operator) -> bool {
        self.operators.contains(&op)
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Operator> + '_ {
        self.operators.iter().copied()
    }

    /// Either spelling of exponentiation is present
    pub fn has_exponent(&self) -> bool {
        self.contains(Operator::StarStar) || self.contains(Operator::Caret)
    }
}

impl FromIterator<Operator> for OperatorSet {
    fn from_iter<I: IntoIterator<Item = Operator>>(iter: I) -> Self {
        Self {
            operators: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for OperatorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, op) in self.operators.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(op.as_str())?;
        }
        f.write_str("}")
    }
}
