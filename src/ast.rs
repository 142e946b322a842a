//! The formula tree.
//!
//! [`Formula`] is pure data: parsing lives in [`crate::parser`] and
//! [`crate::rpn`], evaluation in [`crate::eval`]. Trees are immutable once
//! built, so one tree can be evaluated under many interpretations without
//! interference.

use std::collections::BTreeSet;
use std::fmt;

use num_bigint::{BigUint, ToBigUint};

use crate::token::Connective;

/// A propositional formula.
///
/// `Error` is the sentinel produced when structural parsing fails inside the
/// strict builder. It carries no children and is never evaluated; see
/// [`crate::eval`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Formula {
    /// An indivisible named proposition.
    Atom(String),
    /// Negation.
    Not(Box<Formula>),
    /// Conjunction.
    And(Box<Formula>, Box<Formula>),
    /// Disjunction.
    Or(Box<Formula>, Box<Formula>),
    /// Material implication.
    Implies(Box<Formula>, Box<Formula>),
    /// Equivalence.
    Iff(Box<Formula>, Box<Formula>),
    /// Structural-failure sentinel.
    Error,
}

impl Formula {
    pub fn atom(name: impl Into<String>) -> Self {
        Formula::Atom(name.into())
    }

    pub fn not(child: Self) -> Self {
        Formula::Not(Box::new(child))
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Formula::And(Box::new(lhs), Box::new(rhs))
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Formula::Or(Box::new(lhs), Box::new(rhs))
    }

    pub fn implies(lhs: Self, rhs: Self) -> Self {
        Formula::Implies(Box::new(lhs), Box::new(rhs))
    }

    pub fn iff(lhs: Self, rhs: Self) -> Self {
        Formula::Iff(Box::new(lhs), Box::new(rhs))
    }

    /// The connective at the root, if the root is a compound node.
    pub fn connective(&self) -> Option<Connective> {
        match self {
            Formula::Atom(_) | Formula::Error => None,
            Formula::Not(_) => Some(Connective::Not),
            Formula::And(..) => Some(Connective::And),
            Formula::Or(..) => Some(Connective::Or),
            Formula::Implies(..) => Some(Connective::Implies),
            Formula::Iff(..) => Some(Connective::Iff),
        }
    }

    /// The free-atom set: a union of the children's sets, `{name}` for an
    /// atom. Purely structural, never affected by evaluation.
    ///
    /// Returned as a `BTreeSet`, so iteration order is lexicographic.
    pub fn atoms(&self) -> BTreeSet<String> {
        let mut set = BTreeSet::new();
        self.collect_atoms(&mut set);
        set
    }

    fn collect_atoms(&self, set: &mut BTreeSet<String>) {
        match self {
            Formula::Atom(name) => {
                set.insert(name.clone());
            }
            Formula::Not(child) => child.collect_atoms(set),
            Formula::And(l, r)
            | Formula::Or(l, r)
            | Formula::Implies(l, r)
            | Formula::Iff(l, r) => {
                l.collect_atoms(set);
                r.collect_atoms(set);
            }
            Formula::Error => {}
        }
    }

    /// Whether the tree is free of `Error` nodes.
    pub fn is_well_formed(&self) -> bool {
        match self {
            Formula::Atom(_) => true,
            Formula::Not(child) => child.is_well_formed(),
            Formula::And(l, r)
            | Formula::Or(l, r)
            | Formula::Implies(l, r)
            | Formula::Iff(l, r) => l.is_well_formed() && r.is_well_formed(),
            Formula::Error => false,
        }
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        match self {
            Formula::Atom(_) | Formula::Error => 1,
            Formula::Not(child) => 1 + child.size(),
            Formula::And(l, r)
            | Formula::Or(l, r)
            | Formula::Implies(l, r)
            | Formula::Iff(l, r) => 1 + l.size() + r.size(),
        }
    }

    /// Depth of the tree (0 for leaves).
    pub fn depth(&self) -> usize {
        match self {
            Formula::Atom(_) | Formula::Error => 0,
            Formula::Not(child) => 1 + child.depth(),
            Formula::And(l, r)
            | Formula::Or(l, r)
            | Formula::Implies(l, r)
            | Formula::Iff(l, r) => 1 + l.depth().max(r.depth()),
        }
    }

    /// Number of interpretations over the free-atom set, i.e. `2^n`.
    pub fn interpretation_count(&self) -> BigUint {
        let two = 2.to_biguint().unwrap();
        two.pow(self.atoms().len() as u32)
    }

    /// Multi-line outline of the tree, one node per line, indented with one
    /// dash per nesting level.
    pub fn outline(&self) -> String {
        let mut out = String::new();
        self.outline_into(0, &mut out);
        out
    }

    fn outline_into(&self, depth: usize, out: &mut String) {
        out.push_str(&"-".repeat(depth));
        match self {
            Formula::Atom(name) => out.push_str(name),
            Formula::Error => out.push_str("ERROR"),
            _ => {
                if let Some(op) = self.connective() {
                    out.push(op.glyph());
                }
            }
        }
        out.push('\n');
        match self {
            Formula::Atom(_) | Formula::Error => {}
            Formula::Not(child) => child.outline_into(depth + 1, out),
            Formula::And(l, r)
            | Formula::Or(l, r)
            | Formula::Implies(l, r)
            | Formula::Iff(l, r) => {
                l.outline_into(depth + 1, out);
                r.outline_into(depth + 1, out);
            }
        }
    }
}

/// Canonical fully-parenthesized form: atoms bare, every compound node
/// wrapped in parentheses. Re-parsing this form yields a structurally
/// identical tree.
impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::Atom(name) => write!(f, "{}", name),
            Formula::Not(child) => write!(f, "({}{})", Connective::Not, child),
            Formula::And(l, r) => write!(f, "({}{}{})", l, Connective::And, r),
            Formula::Or(l, r) => write!(f, "({}{}{})", l, Connective::Or, r),
            Formula::Implies(l, r) => write!(f, "({}{}{})", l, Connective::Implies, r),
            Formula::Iff(l, r) => write!(f, "({}{}{})", l, Connective::Iff, r),
            Formula::Error => write!(f, "ERROR"),
        }
    }
}
