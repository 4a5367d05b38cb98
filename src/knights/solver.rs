use crate::logic::{EvalError, Formula, ModelChecker, Symbol};
use log::debug;

/// What can be concluded from a puzzle's knowledge base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The knowledge base is the empty conjunction; nothing has been encoded.
    NotImplemented,
    /// The candidate symbols the knowledge base entails, in candidate order.
    Entailed(Vec<Symbol>),
}

/// Queries `knowledge` for each of `candidates`.
///
/// An empty conjunction entails only tautologies, so it is reported as
/// [`Outcome::NotImplemented`] without querying.
///
/// # Errors
///
/// Any [`EvalError`] raised by the model checker.
pub fn solve(
    knowledge: &Formula,
    candidates: &[Symbol],
    checker: &mut ModelChecker,
) -> Result<Outcome, EvalError> {
    if knowledge.is_empty_conjunction() {
        return Ok(Outcome::NotImplemented);
    }

    let mut entailed = Vec::new();
    for symbol in candidates {
        if checker.entails(knowledge, &Formula::from(symbol))? {
            entailed.push(symbol.clone());
        }
    }

    debug!("{} of {} candidates entailed", entailed.len(), candidates.len());
    Ok(Outcome::Entailed(entailed))
}
