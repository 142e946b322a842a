//! # wff-rs: Propositional Logic in Rust
//!
//! **`wff-rs`** parses propositional-logic formulas into an abstract syntax
//! tree and evaluates them under variable assignments, up to exhaustive
//! truth-table enumeration.
//!
//! ## Two front ends
//!
//! - **Strict**: fully-parenthesized formulas over `A..Z` with the letter
//!   connectives `n a o i e`. The tree is assembled directly from the nesting
//!   structure ([`parser`]).
//! - **Relaxed**: precedence-based infix formulas with the glyph connectives
//!   `¬ ∧ ∨ ⇒ ⇔` and identifier atoms. Converted to Reverse Polish Notation
//!   with the shunting-yard algorithm, then rebuilt into the same tree shape
//!   ([`rpn`]).
//!
//! Both produce a [`Formula`][crate::ast::Formula]: an immutable tree that
//! [`eval`] walks under an [`Interpretation`][crate::eval::Interpretation]
//! and [`table`] enumerates exhaustively.
//!
//! ## Basic Usage
//!
//! ```rust
//! use wff_rs::eval::{evaluate, Interpretation};
//! use wff_rs::parser::parse_strict;
//! use wff_rs::rpn::parse_relaxed;
//! use wff_rs::table::truth_table;
//!
//! // Strict grammar: `a` is conjunction, `o` is disjunction.
//! let formula = parse_strict("(Aa(BoC))").unwrap();
//! assert_eq!(formula.to_string(), "(A∧(B∨C))");
//!
//! // The relaxed grammar needs no full parenthesization.
//! assert_eq!(parse_relaxed("A∧(B∨C)").unwrap(), formula);
//!
//! // Evaluate under one interpretation.
//! let mut interpretation = Interpretation::new();
//! interpretation.insert("A".to_string(), true);
//! interpretation.insert("B".to_string(), false);
//! interpretation.insert("C".to_string(), true);
//! let result = evaluate(&formula, &interpretation).unwrap();
//! assert!(result.value);
//!
//! // Or enumerate every interpretation.
//! let table = truth_table(&formula).unwrap();
//! assert_eq!(table.rows.len(), 8);
//! assert_eq!(table.model_count(), 3);
//! ```
//!
//! ## Core Components
//!
//! - **[`token`]**: vocabulary and tokenization for both grammars.
//! - **[`ast`]**: the formula tree, free-atom set, canonical rendering.
//! - **[`parser`]**: dominant-operator locator and strict tree builder.
//! - **[`rpn`]**: shunting-yard conversion and RPN-to-tree reconstruction.
//! - **[`eval`]**: tree-walking evaluator with a post-order trace.
//! - **[`table`]**: truth-table enumeration and model counting.

pub mod ast;
pub mod error;
pub mod eval;
pub mod parser;
pub mod rpn;
pub mod table;
pub mod token;
