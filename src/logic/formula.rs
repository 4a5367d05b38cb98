//! Propositional formulas over named symbols.
//!
//! A [`Formula`] owns its sub-formulas, so every tree is finite and acyclic by
//! construction. Formulas are built once and only read afterwards; the
//! builders below consume their inputs and return new trees.

use crate::logic::symbol::Symbol;
use itertools::Itertools;
use std::fmt::{Display, Formatter};
use std::ops::{BitAnd, BitOr, Not};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Formula {
    Atom(Symbol),
    Not(Box<Formula>),
    /// Conjunction of zero or more formulas. The empty conjunction is true.
    And(Vec<Formula>),
    /// Disjunction of one or more formulas.
    Or(Vec<Formula>),
    Implication(Box<Formula>, Box<Formula>),
    Biconditional(Box<Formula>, Box<Formula>),
}

impl Formula {
    #[must_use]
    pub fn atom(symbol: impl Into<Symbol>) -> Self {
        Self::Atom(symbol.into())
    }

    #[allow(clippy::should_implement_trait)]
    #[must_use]
    pub fn not(formula: impl Into<Self>) -> Self {
        Self::Not(Box::new(formula.into()))
    }

    #[must_use]
    pub fn and<I>(conjuncts: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        Self::And(conjuncts.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub fn or<I>(disjuncts: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        Self::Or(disjuncts.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub fn implies(antecedent: impl Into<Self>, consequent: impl Into<Self>) -> Self {
        Self::Implication(Box::new(antecedent.into()), Box::new(consequent.into()))
    }

    #[must_use]
    pub fn iff(left: impl Into<Self>, right: impl Into<Self>) -> Self {
        Self::Biconditional(Box::new(left.into()), Box::new(right.into()))
    }

    /// The empty conjunction. Callers use it as the "nothing known yet"
    /// knowledge base.
    #[must_use]
    pub const fn empty() -> Self {
        Self::And(Vec::new())
    }

    /// Appends a conjunct, turning a non-conjunction into a two-element one.
    #[must_use]
    pub fn with_conjunct(self, conjunct: impl Into<Self>) -> Self {
        match self {
            Self::And(mut conjuncts) => {
                conjuncts.push(conjunct.into());
                Self::And(conjuncts)
            }
            other => Self::And(vec![other, conjunct.into()]),
        }
    }

    /// The conjuncts of a conjunction, or `None` for every other kind.
    #[must_use]
    pub fn conjuncts(&self) -> Option<&[Self]> {
        match self {
            Self::And(conjuncts) => Some(conjuncts),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_empty_conjunction(&self) -> bool {
        self.conjuncts().is_some_and(<[Self]>::is_empty)
    }

    /// Every distinct symbol mentioned in the formula, in order of first
    /// appearance.
    #[must_use]
    pub fn symbols(&self) -> Vec<Symbol> {
        let mut atoms = Vec::new();
        self.collect_atoms(&mut atoms);
        atoms.into_iter().unique().cloned().collect_vec()
    }

    pub(crate) fn collect_atoms<'a>(&'a self, out: &mut Vec<&'a Symbol>) {
        match self {
            Self::Atom(symbol) => out.push(symbol),
            Self::Not(inner) => inner.collect_atoms(out),
            Self::And(children) | Self::Or(children) => {
                for child in children {
                    child.collect_atoms(out);
                }
            }
            Self::Implication(left, right) | Self::Biconditional(left, right) => {
                left.collect_atoms(out);
                right.collect_atoms(out);
            }
        }
    }

    fn fmt_operand(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Atom(_) | Self::Not(_) => write!(f, "{self}"),
            _ => write!(f, "({self})"),
        }
    }

    fn fmt_joined(children: &[Self], sep: &str, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, child) in children.iter().enumerate() {
            if i > 0 {
                f.write_str(sep)?;
            }
            child.fmt_operand(f)?;
        }
        Ok(())
    }
}

impl Display for Formula {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Atom(symbol) => write!(f, "{symbol}"),
            Self::Not(inner) => {
                f.write_str("¬")?;
                inner.fmt_operand(f)
            }
            Self::And(children) if children.is_empty() => f.write_str("⊤"),
            Self::Or(children) if children.is_empty() => f.write_str("⊥"),
            Self::And(children) => Self::fmt_joined(children, " ∧ ", f),
            Self::Or(children) => Self::fmt_joined(children, " ∨ ", f),
            Self::Implication(left, right) => {
                left.fmt_operand(f)?;
                f.write_str(" => ")?;
                right.fmt_operand(f)
            }
            Self::Biconditional(left, right) => {
                left.fmt_operand(f)?;
                f.write_str(" <=> ")?;
                right.fmt_operand(f)
            }
        }
    }
}

impl From<Symbol> for Formula {
    fn from(symbol: Symbol) -> Self {
        Self::Atom(symbol)
    }
}

impl From<&Symbol> for Formula {
    fn from(symbol: &Symbol) -> Self {
        Self::Atom(symbol.clone())
    }
}

impl Not for Formula {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::Not(Box::new(self))
    }
}

impl BitAnd for Formula {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.with_conjunct(rhs)
    }
}

impl BitOr for Formula {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        match self {
            Self::Or(mut disjuncts) => {
                disjuncts.push(rhs);
                Self::Or(disjuncts)
            }
            other => Self::Or(vec![other, rhs]),
        }
    }
}
