//! ASCII parse tree diagrams
//!
//! A fixed decision table over substring containment picks one of six
//! diagram shapes. Operands come from splitting at the *first* occurrence of
//! the operator and rejoining the rest, so an expression with three or more
//! top-level operands still renders as two leaves. Expressions using `/`,
//! `-` or `^` fall through to the product, sum or single-leaf shapes.

/// Diagram shape chosen for an expression, in decision-table order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeShape {
    /// Contains `**` and `+`
    PowerSum,
    /// Contains `**`
    Power,
    /// Contains `*` and `+`
    ProductSum,
    /// Contains `*`
    Product,
    /// Contains `+`
    Sum,
    /// No recognized operator
    Leaf,
}

impl TreeShape {
    /// Classify an expression; the order of checks is significant
    pub fn of(expression: &str) -> Self {
        if expression.contains("**") {
            if expression.contains('+') {
                Self::PowerSum
            } else {
                Self::Power
            }
        } else if expression.contains('*') {
            if expression.contains('+') {
                Self::ProductSum
            } else {
                Self::Product
            }
        } else if expression.contains('+') {
            Self::Sum
        } else {
            Self::Leaf
        }
    }
}

/// Split at the first occurrence of `op`; later occurrences stay on the right
fn split_first<'a>(text: &'a str, op: &str) -> (&'a str, &'a str) {
    text.split_once(op).unwrap_or((text, ""))
}

/// Render the parse tree diagram for a whitespace-free expression
pub fn format_parse_tree(expression: &str) -> String {
    match TreeShape::of(expression) {
        TreeShape::PowerSum => {
            let (left, right) = split_first(expression, "+");
            let (base, power) = split_first(right, "**");
            format!(
                r"     E
    /|\
   E + T
   |   |
   T   F
   |  /|\
   F P**F
   | |  |
digit digit digit
 ({left}) ({base}) ({power})"
            )
        }
        TreeShape::Power => {
            let (base, power) = split_first(expression, "**");
            format!(
                r"     E
     |
     T
     |
     F
    /|\
   P **F
   |   |
digit digit
 ({base}) ({power})"
            )
        }
        TreeShape::ProductSum => {
            let (left, right) = split_first(expression, "+");
            let (factor1, factor2) = split_first(right, "*");
            format!(
                r"     E
    /|\
   E + T
   |  /|\
   T T * F
   | |   |
   F F digit
   | |  ({factor2})
digit digit
 ({left}) ({factor1})"
            )
        }
        TreeShape::Product => {
            let (factor1, factor2) = split_first(expression, "*");
            format!(
                r"     E
     |
     T
    /|\
   T * F
   |   |
   F digit
   |  ({factor2})
digit
 ({factor1})"
            )
        }
        TreeShape::Sum => {
            let (left, right) = split_first(expression, "+");
            format!(
                r"     E
    /|\
   E + T
   |   |
   T   F
   |   |
   F digit
   |  ({right})
digit
 ({left})"
            )
        }
        TreeShape::Leaf => format!(
            r"   E
   |
   T
   |
   F
   |
digit
 ({expression})"
        ),
    }
}
