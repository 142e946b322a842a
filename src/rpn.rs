//! Relaxed parser: shunting-yard conversion to Reverse Polish Notation and
//! tree reconstruction from RPN.
//!
//! The relaxed grammar needs no full parenthesization; connective priorities
//! disambiguate instead. The converter keeps an explicit operator stack, the
//! rebuilder a stack of trees. Both stacks are constructed per invocation and
//! never escape, so independent formulas can be parsed concurrently.

use crate::ast::Formula;
use crate::error::ParseError;
use crate::token::{tokenize, Connective, Grammar, Token};

/// The outcome of shunting-yard conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rpn {
    /// The token sequence in postfix order.
    pub tokens: Vec<Token>,
    /// Variables in first-seen order.
    pub variables: Vec<String>,
}

/// Converts an infix token sequence to RPN with the shunting-yard algorithm.
///
/// A connective pops every stacked connective of equal or higher priority
/// before being pushed, so equal-priority runs group left-associatively
/// (conjunction and disjunction included). A closing parenthesis with no
/// matching opening one is [`ParseError::UnbalancedParens`].
pub fn to_rpn(input: &[Token]) -> Result<Rpn, ParseError> {
    let mut stack: Vec<Token> = Vec::new();
    let mut output: Vec<Token> = Vec::new();
    let mut variables: Vec<String> = Vec::new();

    for token in input {
        match token {
            Token::Var(name) => {
                if !variables.iter().any(|v| v == name) {
                    log::debug!("identified variable `{}`", name);
                    variables.push(name.clone());
                }
                output.push(token.clone());
            }
            Token::OpenParen => stack.push(token.clone()),
            Token::CloseParen => loop {
                match stack.pop() {
                    Some(Token::OpenParen) => break,
                    Some(top) => output.push(top),
                    None => return Err(ParseError::UnbalancedParens),
                }
            },
            Token::Op(op) => {
                while matches!(stack.last(), Some(Token::Op(top)) if top.priority() >= op.priority())
                {
                    if let Some(top) = stack.pop() {
                        output.push(top);
                    }
                }
                stack.push(token.clone());
            }
        }
        log::trace!("token {}: stack {:?}, output {:?}", token, stack, output);
    }

    // Consume what is left on the stack, in LIFO order.
    while let Some(top) = stack.pop() {
        output.push(top);
    }

    Ok(Rpn { tokens: output, variables })
}

/// Rebuilds a tree from an RPN token sequence.
///
/// Variables push atoms; negation pops one tree; a binary connective pops two
/// (right first, since the most recently pushed tree is the right operand).
/// Operand underflow, a parenthesis token, or more than one tree left at the
/// end is [`ParseError::MalformedRpn`].
pub fn tree_from_rpn(tokens: &[Token]) -> Result<Formula, ParseError> {
    let mut stack: Vec<Formula> = Vec::new();

    for token in tokens {
        match token {
            Token::Var(name) => stack.push(Formula::atom(name.clone())),
            Token::Op(Connective::Not) => {
                let child = stack.pop().ok_or(ParseError::MalformedRpn)?;
                stack.push(Formula::not(child));
            }
            Token::Op(op) => {
                let right = stack.pop().ok_or(ParseError::MalformedRpn)?;
                let left = stack.pop().ok_or(ParseError::MalformedRpn)?;
                let tree = match op {
                    Connective::And => Formula::and(left, right),
                    Connective::Or => Formula::or(left, right),
                    Connective::Implies => Formula::implies(left, right),
                    Connective::Iff => Formula::iff(left, right),
                    Connective::Not => unreachable!("handled above"),
                };
                stack.push(tree);
            }
            Token::OpenParen | Token::CloseParen => return Err(ParseError::MalformedRpn),
        }
    }

    let tree = stack.pop().ok_or(ParseError::MalformedRpn)?;
    if stack.is_empty() {
        Ok(tree)
    } else {
        Err(ParseError::MalformedRpn)
    }
}

/// Parses a relaxed-grammar formula: tokenize, convert to RPN, rebuild the
/// tree. Produces the same tree shape as the strict builder would for the
/// equivalent fully-parenthesized input.
pub fn parse_relaxed(input: &str) -> Result<Formula, ParseError> {
    let tokens = tokenize(input, Grammar::Relaxed)?;
    let rpn = to_rpn(&tokens)?;
    tree_from_rpn(&rpn.tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn var(name: &str) -> Token {
        Token::var(name)
    }

    fn op(c: Connective) -> Token {
        Token::Op(c)
    }

    #[test]
    fn test_equal_priority_is_left_associative() {
        // A ∨ B ∧ C groups as (A∨B)∧C, not A∨(B∧C).
        let input = vec![
            var("A"),
            op(Connective::Or),
            var("B"),
            op(Connective::And),
            var("C"),
        ];
        let rpn = to_rpn(&input).unwrap();
        assert_eq!(
            rpn.tokens,
            vec![var("A"), var("B"), op(Connective::Or), var("C"), op(Connective::And)]
        );
        assert_eq!(rpn.variables, vec!["A", "B", "C"]);

        let tree = tree_from_rpn(&rpn.tokens).unwrap();
        assert_eq!(
            tree,
            Formula::and(Formula::or(Formula::atom("A"), Formula::atom("B")), Formula::atom("C"))
        );
    }

    #[test]
    fn test_priority_ladder() {
        // ¬A∨B⇒C⇔D groups as (((¬A)∨B)⇒C)⇔D.
        let tree = parse_relaxed("¬A∨B⇒C⇔D").unwrap();
        assert_eq!(
            tree,
            Formula::iff(
                Formula::implies(
                    Formula::or(Formula::not(Formula::atom("A")), Formula::atom("B")),
                    Formula::atom("C"),
                ),
                Formula::atom("D"),
            )
        );
    }

    #[test]
    fn test_parens_override_priority() {
        let tree = parse_relaxed("A∧(B⇒C)").unwrap();
        assert_eq!(
            tree,
            Formula::and(
                Formula::atom("A"),
                Formula::implies(Formula::atom("B"), Formula::atom("C")),
            )
        );
    }

    #[test]
    fn test_variables_in_first_seen_order() {
        let tokens = tokenize("Wet∧Rain∨Wet", Grammar::Relaxed).unwrap();
        let rpn = to_rpn(&tokens).unwrap();
        assert_eq!(rpn.variables, vec!["Wet", "Rain"]);
    }

    #[test]
    fn test_unbalanced_close_paren() {
        let tokens = tokenize(")A", Grammar::Relaxed).unwrap();
        assert_eq!(to_rpn(&tokens).unwrap_err(), ParseError::UnbalancedParens);
    }

    #[test]
    fn test_invalid_symbol_produces_no_rpn() {
        let err = parse_relaxed("A#B").unwrap_err();
        assert_eq!(err, ParseError::InvalidSymbol { symbol: "#".to_string() });
    }

    #[test]
    fn test_rpn_underflow() {
        let tokens = vec![op(Connective::And)];
        assert_eq!(tree_from_rpn(&tokens).unwrap_err(), ParseError::MalformedRpn);

        let tokens = vec![var("A"), op(Connective::And)];
        assert_eq!(tree_from_rpn(&tokens).unwrap_err(), ParseError::MalformedRpn);
    }

    #[test]
    fn test_rpn_leftover_operands() {
        let tokens = vec![var("A"), var("B")];
        assert_eq!(tree_from_rpn(&tokens).unwrap_err(), ParseError::MalformedRpn);
    }

    #[test]
    fn test_unmatched_open_paren_is_malformed() {
        // The leftover `(` is flushed to the output and rejected downstream.
        assert_eq!(parse_relaxed("(A∨B").unwrap_err(), ParseError::MalformedRpn);
    }

    #[test]
    fn test_matches_strict_builder() {
        use crate::parser::parse_strict;

        let relaxed = parse_relaxed("A∧(B∨C)").unwrap();
        let strict = parse_strict("(Aa(BoC))").unwrap();
        assert_eq!(relaxed, strict);
    }
}
