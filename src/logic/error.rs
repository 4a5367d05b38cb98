use crate::logic::symbol::Symbol;
use thiserror::Error;

/// Contract violations raised while evaluating a formula.
///
/// Neither can happen for formulas checked through [`crate::logic::model_check`],
/// which derives its assignments from the formulas themselves and never builds
/// an empty disjunction. They surface misuse and are not meant to be recovered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("symbol `{0}` is not covered by the assignment")]
    MissingSymbol(Symbol),

    #[error("cannot evaluate a disjunction of zero disjuncts")]
    EmptyDisjunction,
}
