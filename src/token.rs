//! Vocabulary and tokenization for the two formula grammars.
//!
//! The strict grammar spells connectives with the letters `n a o i e` and
//! restricts atoms to the single letters `A..Z`. The relaxed grammar uses the
//! unicode glyphs `¬ ∧ ∨ ⇒ ⇔` and allows letter-initial alphanumeric
//! identifiers as atoms.

use std::fmt;

use crate::error::{invalid_symbol, ParseError};

/// One of the five propositional connectives.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Connective {
    Not,
    And,
    Or,
    Implies,
    Iff,
}

impl Connective {
    /// Binding priority. Higher binds tighter.
    ///
    /// Conjunction and disjunction share a priority, so mixed runs of the two
    /// group left-associatively.
    pub fn priority(self) -> u8 {
        match self {
            Connective::Not => 40,
            Connective::And | Connective::Or => 30,
            Connective::Implies => 20,
            Connective::Iff => 10,
        }
    }

    /// Unicode spelling used by the relaxed grammar and canonical rendering.
    pub fn glyph(self) -> char {
        match self {
            Connective::Not => '¬',
            Connective::And => '∧',
            Connective::Or => '∨',
            Connective::Implies => '⇒',
            Connective::Iff => '⇔',
        }
    }

    /// Letter spelling used by the strict grammar.
    pub fn letter(self) -> char {
        match self {
            Connective::Not => 'n',
            Connective::And => 'a',
            Connective::Or => 'o',
            Connective::Implies => 'i',
            Connective::Iff => 'e',
        }
    }

    pub fn from_glyph(c: char) -> Option<Self> {
        match c {
            '¬' => Some(Connective::Not),
            '∧' => Some(Connective::And),
            '∨' => Some(Connective::Or),
            '⇒' => Some(Connective::Implies),
            '⇔' => Some(Connective::Iff),
            _ => None,
        }
    }

    pub fn from_letter(c: char) -> Option<Self> {
        match c {
            'n' => Some(Connective::Not),
            'a' => Some(Connective::And),
            'o' => Some(Connective::Or),
            'i' => Some(Connective::Implies),
            'e' => Some(Connective::Iff),
            _ => None,
        }
    }

    /// Negation is the only prefix connective; the rest are infix.
    pub fn is_binary(self) -> bool {
        !matches!(self, Connective::Not)
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// An atomic symbol of a formula, emitted in left-to-right order.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Token {
    /// A propositional variable. Alphanumeric, first character a letter.
    Var(String),
    Op(Connective),
    OpenParen,
    CloseParen,
}

impl Token {
    pub fn var(name: impl Into<String>) -> Self {
        Token::Var(name.into())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Var(name) => write!(f, "{}", name),
            Token::Op(op) => write!(f, "{}", op),
            Token::OpenParen => write!(f, "("),
            Token::CloseParen => write!(f, ")"),
        }
    }
}

/// The active vocabulary for [`tokenize`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Grammar {
    /// Fully-parenthesized formulas over `A..Z`, `n a o i e`, and parentheses.
    Strict,
    /// Precedence-based infix formulas with glyph connectives and identifiers.
    Relaxed,
}

/// Splits a raw formula string into tokens.
///
/// Fails with [`ParseError::InvalidSymbol`] on any character outside the
/// grammar's vocabulary, carrying the offending symbol.
pub fn tokenize(input: &str, grammar: Grammar) -> Result<Vec<Token>, ParseError> {
    match grammar {
        Grammar::Strict => tokenize_strict(input),
        Grammar::Relaxed => tokenize_relaxed(input),
    }
}

fn tokenize_strict(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::with_capacity(input.len());
    for ch in input.chars() {
        let token = match ch {
            '(' => Token::OpenParen,
            ')' => Token::CloseParen,
            'A'..='Z' => Token::Var(ch.to_string()),
            _ => match Connective::from_letter(ch) {
                Some(op) => Token::Op(op),
                None => return Err(invalid_symbol(ch)),
            },
        };
        tokens.push(token);
    }
    Ok(tokens)
}

fn tokenize_relaxed(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut buf = String::new();
    for ch in input.chars() {
        let delimiter = match ch {
            '(' => Some(Token::OpenParen),
            ')' => Some(Token::CloseParen),
            _ => Connective::from_glyph(ch).map(Token::Op),
        };
        match delimiter {
            Some(token) => {
                flush_identifier(&mut buf, &mut tokens)?;
                tokens.push(token);
            }
            None => buf.push(ch),
        }
    }
    flush_identifier(&mut buf, &mut tokens)?;
    Ok(tokens)
}

/// Flushes the buffered character run as one `Var` token.
///
/// The run must be alphanumeric with a letter first; otherwise the first
/// offending character is reported.
fn flush_identifier(buf: &mut String, tokens: &mut Vec<Token>) -> Result<(), ParseError> {
    if buf.is_empty() {
        return Ok(());
    }
    let name = std::mem::take(buf);
    match name.chars().next() {
        Some(first) if first.is_alphabetic() => {}
        Some(first) => return Err(invalid_symbol(first)),
        None => return Ok(()),
    }
    if let Some(bad) = name.chars().find(|c| !c.is_alphanumeric()) {
        return Err(invalid_symbol(bad));
    }
    tokens.push(Token::Var(name));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priorities() {
        assert!(Connective::Not.priority() > Connective::And.priority());
        assert_eq!(Connective::And.priority(), Connective::Or.priority());
        assert!(Connective::Or.priority() > Connective::Implies.priority());
        assert!(Connective::Implies.priority() > Connective::Iff.priority());
    }

    #[test]
    fn test_tokenize_strict() {
        let tokens = tokenize("(Aa(BoC))", Grammar::Strict).unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::OpenParen,
                Token::var("A"),
                Token::Op(Connective::And),
                Token::OpenParen,
                Token::var("B"),
                Token::Op(Connective::Or),
                Token::var("C"),
                Token::CloseParen,
                Token::CloseParen,
            ]
        );
    }

    #[test]
    fn test_tokenize_strict_rejects_unknown() {
        let err = tokenize("(AxB)", Grammar::Strict).unwrap_err();
        assert_eq!(err, ParseError::InvalidSymbol { symbol: "x".to_string() });
    }

    #[test]
    fn test_tokenize_relaxed_identifiers() {
        let tokens = tokenize("Rain⇒Wet1", Grammar::Relaxed).unwrap();
        assert_eq!(
            tokens,
            vec![Token::var("Rain"), Token::Op(Connective::Implies), Token::var("Wet1")]
        );
    }

    #[test]
    fn test_tokenize_relaxed_glyphs_and_parens() {
        let tokens = tokenize("¬(A∨B)", Grammar::Relaxed).unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Op(Connective::Not),
                Token::OpenParen,
                Token::var("A"),
                Token::Op(Connective::Or),
                Token::var("B"),
                Token::CloseParen,
            ]
        );
    }

    #[test]
    fn test_tokenize_relaxed_rejects_invalid_run() {
        let err = tokenize("A#B", Grammar::Relaxed).unwrap_err();
        assert_eq!(err, ParseError::InvalidSymbol { symbol: "#".to_string() });
    }

    #[test]
    fn test_tokenize_relaxed_rejects_leading_digit() {
        let err = tokenize("1AB∧C", Grammar::Relaxed).unwrap_err();
        assert_eq!(err, ParseError::InvalidSymbol { symbol: "1".to_string() });
    }
}
