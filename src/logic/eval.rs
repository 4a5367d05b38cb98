//! Truth-value evaluation of a [`Formula`] under an [`Assignment`].

use crate::logic::assignment::Assignment;
use crate::logic::error::EvalError;
use crate::logic::formula::Formula;

/// Evaluates `formula` under `assignment`.
///
/// Conjunctions and disjunctions stop at the first operand that decides them,
/// so a missing symbol in an operand that is never reached goes unnoticed.
///
/// # Errors
///
/// - [`EvalError::MissingSymbol`] if a reached atom is absent from `assignment`.
/// - [`EvalError::EmptyDisjunction`] if a reached disjunction has no operands.
pub fn evaluate(formula: &Formula, assignment: &Assignment) -> Result<bool, EvalError> {
    match formula {
        Formula::Atom(symbol) => assignment
            .value(symbol)
            .ok_or_else(|| EvalError::MissingSymbol(symbol.clone())),
        Formula::Not(inner) => Ok(!evaluate(inner, assignment)?),
        Formula::And(conjuncts) => {
            for conjunct in conjuncts {
                if !evaluate(conjunct, assignment)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        Formula::Or(disjuncts) => {
            if disjuncts.is_empty() {
                return Err(EvalError::EmptyDisjunction);
            }
            for disjunct in disjuncts {
                if evaluate(disjunct, assignment)? {
                    return Ok(true);
                }
            }
            Ok(false)
        }
        Formula::Implication(antecedent, consequent) => {
            Ok(!evaluate(antecedent, assignment)? || evaluate(consequent, assignment)?)
        }
        Formula::Biconditional(left, right) => {
            Ok(evaluate(left, assignment)? == evaluate(right, assignment)?)
        }
    }
}

impl Formula {
    /// See [`evaluate`].
    ///
    /// # Errors
    ///
    /// As for [`evaluate`].
    pub fn evaluate(&self, assignment: &Assignment) -> Result<bool, EvalError> {
        evaluate(self, assignment)
    }
}
