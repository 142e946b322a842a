//! Strict parser for fully-parenthesized formulas.
//!
//! Every compound sub-formula must carry its own parentheses; the tree is
//! assembled directly from the nesting structure, with no precedence rules.
//! Structural failures inside a sub-formula produce the [`Formula::Error`]
//! sentinel for that subtree instead of aborting the whole parse; a tree
//! containing the sentinel fails fast at evaluation time.

use crate::ast::Formula;
use crate::error::ParseError;
use crate::token::{tokenize, Connective, Grammar, Token};

/// Parses a fully-parenthesized formula in the strict grammar
/// (`A..Z`, `n a o i e`, parentheses).
///
/// Vocabulary violations are reported as [`ParseError::InvalidSymbol`];
/// structural problems (mismatched nesting, missing depth-0 operator) show up
/// as [`Formula::Error`] nodes in the result.
pub fn parse_strict(input: &str) -> Result<Formula, ParseError> {
    let tokens = tokenize(input, Grammar::Strict)?;
    Ok(from_tokens(&tokens))
}

/// Assembles a tree from a token span representing one sub-formula.
///
/// Works for either grammar's token stream, so the canonical glyph rendering
/// of a tree can be re-parsed with the relaxed tokenizer.
pub fn from_tokens(span: &[Token]) -> Formula {
    if let [Token::Var(name)] = span {
        return Formula::atom(name.clone());
    }

    // A compound sub-formula must carry its own outer parentheses.
    let wrapped = span.len() >= 2
        && span.first() == Some(&Token::OpenParen)
        && span.last() == Some(&Token::CloseParen);
    if !wrapped {
        log::debug!("span is neither an atom nor parenthesized: {:?}", span);
        return Formula::Error;
    }

    let interior = &span[1..span.len() - 1];
    let Some(index) = dominant_operator(interior) else {
        log::debug!("no depth-0 connective in span: {:?}", interior);
        return Formula::Error;
    };
    let &Token::Op(op) = &interior[index] else {
        return Formula::Error;
    };

    match op {
        Connective::Not => {
            // Prefix operator: nothing may precede it.
            if index != 0 {
                log::debug!("negation with a non-empty left operand: {:?}", interior);
                return Formula::Error;
            }
            Formula::not(from_tokens(&interior[1..]))
        }
        _ => {
            let left = from_tokens(&interior[..index]);
            let right = from_tokens(&interior[index + 1..]);
            match op {
                Connective::And => Formula::and(left, right),
                Connective::Or => Formula::or(left, right),
                Connective::Implies => Formula::implies(left, right),
                Connective::Iff => Formula::iff(left, right),
                Connective::Not => unreachable!("handled above"),
            }
        }
    }
}

/// Finds the connective that binds the whole span: the first one at
/// parenthesis-nesting depth zero.
///
/// Expects the span's own outer parentheses to be stripped already. Returns
/// `None` when no depth-0 connective exists, which signals malformed input
/// (an over-long atom or mismatched parentheses), not a crash.
pub fn dominant_operator(span: &[Token]) -> Option<usize> {
    let mut depth: i32 = 0;
    for (i, token) in span.iter().enumerate() {
        match token {
            Token::OpenParen => depth += 1,
            Token::CloseParen => depth -= 1,
            Token::Op(_) if depth == 0 => return Some(i),
            _ => {}
        }
    }
    None
}
