//! Error types shared by the parsing and evaluation modules.

use thiserror::Error;

/// Errors surfaced while tokenizing a formula or converting it to a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A character or identifier outside the active grammar's vocabulary.
    ///
    /// Carries the offending symbol for diagnostic highlighting.
    #[error("invalid symbol `{symbol}`")]
    InvalidSymbol { symbol: String },

    /// A closing parenthesis with no matching opening one.
    #[error("unbalanced parentheses")]
    UnbalancedParens,

    /// An RPN sequence with the wrong operand count for its operators.
    #[error("malformed reverse polish notation")]
    MalformedRpn,
}

pub(crate) fn invalid_symbol(symbol: char) -> ParseError {
    ParseError::InvalidSymbol {
        symbol: symbol.to_string(),
    }
}

/// Errors surfaced while evaluating a formula under an interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The interpretation does not bind one of the formula's atoms.
    #[error("variable `{name}` is not bound by the interpretation")]
    UnboundVariable { name: String },

    /// The tree contains an `Error` node, so no truth value exists for it.
    #[error("formula contains an error node and cannot be evaluated")]
    MalformedTree,
}
