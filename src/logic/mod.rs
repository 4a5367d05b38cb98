#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Propositional logic: symbols, formulas, evaluation and model checking.

pub mod assignment;
pub mod error;
pub mod eval;
pub mod formula;
pub mod model_check;
pub mod symbol;

pub use assignment::Assignment;
pub use error::EvalError;
pub use formula::Formula;
pub use model_check::{entails, Assignments, CheckStats, ModelChecker};
pub use symbol::Symbol;
