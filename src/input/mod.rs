//! Input extraction and validation
//!
//! The gate in front of every computation: blank input is rejected here,
//! before any result is built. Past this gate nothing fails.


use thiserror::Error;

/// Required input that was missing or blank.
///
/// The display strings are shown to the user verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter an arithmetic expression.")]
    EmptyExpression,

    #[error("Please enter grammar productions.")]
    EmptyGrammar,

    #[error("Please enter semantic rules.")]
    EmptyRules,
}

/// Trim an expression field, rejecting it if blank
pub fn expression(raw: &str) -> Result<&str, InputError> {
    let expression = raw.trim();
    if expression.is_empty() {
        return Err(InputError::EmptyExpression);
    }
    Ok(expression)
}

/// Split a multi-line field into trimmed, non-blank lines
pub fn lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Grammar productions from a multi-line field
pub fn grammar_lines(raw: &str) -> Result<Vec<String>, InputError> {
    let productions = lines(raw);
    if productions.is_empty() {
        return Err(InputError::EmptyGrammar);
    }
    Ok(productions)
}

/// Semantic rules from a multi-line field
pub fn rule_lines(raw: &str) -> Result<Vec<String>, InputError> {
    let rules = lines(raw);
    if rules.is_empty() {
        return Err(InputError::EmptyRules);
    }
    Ok(rules)
}

/// Append one line to a multi-line field.
///
/// The line is trimmed; a blank line leaves the field unchanged and returns
/// `false`. A separator is only inserted when the field already has text.
pub fn append_line(field: &mut String, line: &str) -> bool {
    let line = line.trim();
    if line.is_empty() {
        return false;
    }
    if !field.is_empty() {
        field.push('\n');
    }
    field.push_str(line);
    true
}
