//! Exhaustive truth-table enumeration.
//!
//! Columns are the sorted free atoms followed by every compound
//! sub-expression in post-order, the whole formula last. Rows enumerate the
//! `2^n` interpretations in binary counting order, most significant bit
//! mapped to the first sorted atom.

use crate::ast::Formula;
use crate::error::EvalError;
use crate::eval::{evaluate, Interpretation};

/// A fully enumerated truth table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    /// Column labels: atom names, then compound sub-expression texts.
    pub header: Vec<String>,
    /// One row of booleans per interpretation, in enumeration order, in the
    /// same column order as `header`.
    pub rows: Vec<Vec<bool>>,
}

impl TruthTable {
    /// Number of interpretations under which the whole formula is true.
    pub fn model_count(&self) -> usize {
        self.rows.iter().filter(|row| row.last() == Some(&true)).count()
    }

    /// True under every interpretation.
    pub fn is_tautology(&self) -> bool {
        self.model_count() == self.rows.len()
    }

    /// True under no interpretation.
    pub fn is_contradiction(&self) -> bool {
        self.model_count() == 0
    }
}

/// Enumerates all interpretations over the formula's free-atom set and
/// evaluates once per row.
///
/// Atoms are sorted lexicographically to fix the column order. Integer `i`
/// maps to the row where the `j`-th sorted atom takes bit `n-1-j` of `i`
/// (`0` is false, `1` is true), so row 0 is all-false and the last row
/// all-true. The sub-expression labels come from the first evaluation; they
/// are stable across rows because the tree shape never changes.
pub fn truth_table(formula: &Formula) -> Result<TruthTable, EvalError> {
    let atoms: Vec<String> = formula.atoms().into_iter().collect();
    let n = atoms.len();
    assert!(n < 64, "too many atoms to enumerate: {}", n);

    let mut header: Vec<String> = atoms.clone();
    let mut rows: Vec<Vec<bool>> = Vec::with_capacity(1 << n);

    for bits in 0u64..(1u64 << n) {
        let values: Vec<bool> = (0..n).map(|j| (bits >> (n - 1 - j)) & 1 == 1).collect();
        let interpretation: Interpretation =
            atoms.iter().cloned().zip(values.iter().copied()).collect();

        let evaluation = evaluate(formula, &interpretation)?;
        if rows.is_empty() {
            header.extend(evaluation.trace.iter().map(|entry| entry.formula.clone()));
        }

        let mut row = values;
        row.extend(evaluation.trace.iter().map(|entry| entry.value));
        rows.push(row);
    }

    log::debug!("enumerated {} rows over {} atoms", rows.len(), n);
    Ok(TruthTable { header, rows })
}
