//! Tree-walking evaluation of formulas under an interpretation.
//!
//! Evaluation never touches the tree: each call produces a fresh
//! [`Evaluation`] holding the truth value and a post-order trace of every
//! compound sub-expression, so one tree can be evaluated under many
//! interpretations, concurrently if the caller wants to.

use std::collections::HashMap;

use crate::ast::Formula;
use crate::error::EvalError;

/// A mapping from atom name to truth value.
///
/// Must cover the formula's free-atom set; unmapped atoms are an error,
/// never defaulted.
pub type Interpretation = HashMap<String, bool>;

/// One traced sub-expression: its canonical text and its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceEntry {
    pub formula: String,
    pub value: bool,
}

/// The result of evaluating a formula under one interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Truth value of the whole formula.
    pub value: bool,
    /// One entry per compound node, children before parents. The last entry
    /// is the whole formula (when the formula is compound at all).
    pub trace: Vec<TraceEntry>,
}

/// Evaluates a formula under an interpretation.
///
/// Fails with [`EvalError::UnboundVariable`] when the interpretation misses
/// a required atom, and with [`EvalError::MalformedTree`] when the tree
/// contains an [`Formula::Error`] node. A malformed tree never silently
/// yields a default value.
pub fn evaluate(formula: &Formula, interpretation: &Interpretation) -> Result<Evaluation, EvalError> {
    let mut trace = Vec::new();
    let value = eval_node(formula, interpretation, &mut trace)?;
    log::debug!("evaluated {} -> {}", formula, value);
    Ok(Evaluation { value, trace })
}

fn eval_node(
    formula: &Formula,
    interpretation: &Interpretation,
    trace: &mut Vec<TraceEntry>,
) -> Result<bool, EvalError> {
    let value = match formula {
        Formula::Atom(name) => {
            // Atoms are not traced; they feed their parent's entry.
            return interpretation
                .get(name)
                .copied()
                .ok_or_else(|| EvalError::UnboundVariable { name: name.clone() });
        }
        Formula::Not(child) => !eval_node(child, interpretation, trace)?,
        Formula::And(l, r) => {
            // Both operands are always evaluated so the trace is complete.
            let left = eval_node(l, interpretation, trace)?;
            let right = eval_node(r, interpretation, trace)?;
            left && right
        }
        Formula::Or(l, r) => {
            let left = eval_node(l, interpretation, trace)?;
            let right = eval_node(r, interpretation, trace)?;
            left || right
        }
        Formula::Implies(l, r) => {
            let left = eval_node(l, interpretation, trace)?;
            let right = eval_node(r, interpretation, trace)?;
            // Material implication: a false antecedent forces true.
            if !left {
                true
            } else {
                right
            }
        }
        Formula::Iff(l, r) => {
            let left = eval_node(l, interpretation, trace)?;
            let right = eval_node(r, interpretation, trace)?;
            left == right
        }
        Formula::Error => return Err(EvalError::MalformedTree),
    };
    trace.push(TraceEntry { formula: formula.to_string(), value });
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn interp(pairs: &[(&str, bool)]) -> Interpretation {
        pairs.iter().map(|&(name, value)| (name.to_string(), value)).collect()
    }

    fn example() -> Formula {
        // A ∧ (B ∨ C)
        Formula::and(Formula::atom("A"), Formula::or(Formula::atom("B"), Formula::atom("C")))
    }

    #[test]
    fn test_eval_example() {
        let f = example();
        let result = evaluate(&f, &interp(&[("A", true), ("B", false), ("C", true)])).unwrap();
        assert!(result.value);

        let result = evaluate(&f, &interp(&[("A", false), ("B", true), ("C", true)])).unwrap();
        assert!(!result.value);
    }

    #[test]
    fn test_eval_rpn_rebuilt_tree() {
        // (A∨B)∧C, the left-associative grouping of A ∨ B ∧ C.
        let f = Formula::and(Formula::or(Formula::atom("A"), Formula::atom("B")), Formula::atom("C"));
        let result = evaluate(&f, &interp(&[("A", false), ("B", true), ("C", true)])).unwrap();
        assert!(result.value);
        let result = evaluate(&f, &interp(&[("A", false), ("B", false), ("C", true)])).unwrap();
        assert!(!result.value);
    }

    #[test]
    fn test_implication_truth_conditions() {
        let f = Formula::implies(Formula::atom("A"), Formula::atom("B"));
        for (a, b, expected) in [
            (false, false, true),
            (false, true, true),
            (true, false, false),
            (true, true, true),
        ] {
            let result = evaluate(&f, &interp(&[("A", a), ("B", b)])).unwrap();
            assert_eq!(result.value, expected, "A={}, B={}", a, b);
        }
    }

    #[test]
    fn test_equivalence_truth_conditions() {
        let f = Formula::iff(Formula::atom("A"), Formula::atom("B"));
        for (a, b, expected) in [
            (false, false, true),
            (false, true, false),
            (true, false, false),
            (true, true, true),
        ] {
            let result = evaluate(&f, &interp(&[("A", a), ("B", b)])).unwrap();
            assert_eq!(result.value, expected, "A={}, B={}", a, b);
        }
    }

    #[test]
    fn test_trace_is_post_order() {
        let f = example();
        let result = evaluate(&f, &interp(&[("A", true), ("B", false), ("C", true)])).unwrap();
        assert_eq!(
            result.trace,
            vec![
                TraceEntry { formula: "(B∨C)".to_string(), value: true },
                TraceEntry { formula: "(A∧(B∨C))".to_string(), value: true },
            ]
        );
    }

    #[test]
    fn test_atom_has_empty_trace() {
        let result = evaluate(&Formula::atom("A"), &interp(&[("A", true)])).unwrap();
        assert!(result.value);
        assert!(result.trace.is_empty());
    }

    #[test]
    fn test_unbound_variable() {
        let f = example();
        let err = evaluate(&f, &interp(&[("A", true), ("B", false)])).unwrap_err();
        assert_eq!(err, EvalError::UnboundVariable { name: "C".to_string() });
    }

    #[test]
    fn test_error_node_fails_fast() {
        let f = Formula::and(Formula::atom("A"), Formula::Error);
        let err = evaluate(&f, &interp(&[("A", true)])).unwrap_err();
        assert_eq!(err, EvalError::MalformedTree);
    }
}
