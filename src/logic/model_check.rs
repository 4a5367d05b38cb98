//! Entailment by exhaustive model checking.
//!
//! The knowledge base `K` entails the query `Q` when `Q` is true in every
//! assignment that makes `K` true. The checker collects the symbols of both
//! formulas and walks all `2^n` total assignments over them, stopping at the
//! first model of `K` in which `Q` is false.
//!
//! Assignments are produced lazily by [`Assignments`], in the order of a
//! depth-first walk that branches each symbol on `true` before `false`. Only
//! the current assignment is held in memory.

use crate::logic::assignment::Assignment;
use crate::logic::error::EvalError;
use crate::logic::formula::Formula;
use crate::logic::symbol::Symbol;
use itertools::Itertools;
use log::{debug, trace};

/// Lazy enumeration of every total assignment over a list of symbols.
///
/// The first assignment sets every symbol `true` and the last sets every
/// symbol `false`. An empty symbol list yields exactly one (empty) assignment.
#[derive(Debug, Clone)]
pub struct Assignments<'a> {
    symbols: &'a [Symbol],
    values: Vec<bool>,
    exhausted: bool,
}

impl<'a> Assignments<'a> {
    #[must_use]
    pub fn new(symbols: &'a [Symbol]) -> Self {
        Self {
            symbols,
            values: vec![true; symbols.len()],
            exhausted: false,
        }
    }
}

impl Iterator for Assignments<'_> {
    type Item = Assignment;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let current = self
            .symbols
            .iter()
            .cloned()
            .zip(self.values.iter().copied())
            .collect();

        // Backtrack: the deepest symbol still on its `true` branch moves to
        // `false`, and every symbol below it restarts at `true`.
        match self.values.iter().rposition(|&v| v) {
            Some(i) => {
                self.values[i] = false;
                self.values[i + 1..].fill(true);
            }
            None => self.exhausted = true,
        }

        Some(current)
    }
}

impl std::iter::FusedIterator for Assignments<'_> {}

/// Counters accumulated across every query a [`ModelChecker`] answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckStats {
    /// Number of entailment queries answered.
    pub queries: usize,
    /// Number of assignments produced for evaluation.
    pub assignments: usize,
    /// Number of those assignments that satisfied the knowledge base.
    pub models: usize,
}

/// A brute-force model checker that keeps statistics about its work.
#[derive(Debug, Clone, Default)]
pub struct ModelChecker {
    stats: CheckStats,
}

impl ModelChecker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn stats(&self) -> CheckStats {
        self.stats
    }

    /// Does `knowledge` entail `query`?
    ///
    /// A knowledge base without models entails every query.
    ///
    /// # Errors
    ///
    /// Any [`EvalError`] raised while evaluating either formula is returned
    /// as is.
    pub fn entails(&mut self, knowledge: &Formula, query: &Formula) -> Result<bool, EvalError> {
        let symbols = symbols_of(&[knowledge, query]);
        self.stats.queries += 1;
        debug!(
            "model checking `{query}` over {} symbols ({} assignments)",
            symbols.len(),
            assignment_count(symbols.len())
        );

        for assignment in Assignments::new(&symbols) {
            self.stats.assignments += 1;
            if knowledge.evaluate(&assignment)? {
                self.stats.models += 1;
                if !query.evaluate(&assignment)? {
                    trace!("counterexample for `{query}`: {assignment}");
                    return Ok(false);
                }
            }
        }

        Ok(true)
    }

    /// Every model of `knowledge` over the symbols it mentions.
    ///
    /// # Errors
    ///
    /// Any [`EvalError`] raised while evaluating `knowledge`.
    pub fn models(&mut self, knowledge: &Formula) -> Result<Vec<Assignment>, EvalError> {
        let symbols = knowledge.symbols();
        let mut models = Vec::new();

        for assignment in Assignments::new(&symbols) {
            self.stats.assignments += 1;
            if knowledge.evaluate(&assignment)? {
                self.stats.models += 1;
                models.push(assignment);
            }
        }

        debug!("found {} models over {} symbols", models.len(), symbols.len());
        Ok(models)
    }
}

/// Does `knowledge` entail `query`? See [`ModelChecker::entails`].
///
/// # Errors
///
/// As for [`ModelChecker::entails`].
pub fn entails(knowledge: &Formula, query: &Formula) -> Result<bool, EvalError> {
    ModelChecker::new().entails(knowledge, query)
}

fn symbols_of(formulas: &[&Formula]) -> Vec<Symbol> {
    let mut atoms = Vec::new();
    for formula in formulas {
        formula.collect_atoms(&mut atoms);
    }
    atoms.into_iter().unique().cloned().collect_vec()
}

fn assignment_count(n: usize) -> String {
    u32::try_from(n)
        .ok()
        .and_then(|n| 1u128.checked_shl(n))
        .map_or_else(|| format!("2^{n}"), |count| count.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;
    use test_log::test;

    fn atom(name: &str) -> Formula {
        Formula::atom(name)
    }

    fn symbols(names: &[&str]) -> Vec<Symbol> {
        names.iter().copied().map(Symbol::new).collect()
    }

    #[test]
    fn test_assignments_are_exhaustive_and_distinct() {
        let symbols = symbols(&["P", "Q", "R", "S"]);
        let all = Assignments::new(&symbols).collect_vec();
        assert_eq!(all.len(), 16);

        let distinct: FxHashSet<Vec<bool>> = all
            .iter()
            .map(|a| symbols.iter().map(|s| a.value(s).unwrap()).collect())
            .collect();
        assert_eq!(distinct.len(), 16);
        assert!(all.iter().all(|a| a.len() == 4));
    }

    #[test]
    fn test_assignments_follow_true_first_depth_first_order() {
        let symbols = symbols(&["P", "Q"]);
        let order = Assignments::new(&symbols)
            .map(|a| (a.value(&symbols[0]).unwrap(), a.value(&symbols[1]).unwrap()))
            .collect_vec();
        assert_eq!(
            order,
            vec![(true, true), (true, false), (false, true), (false, false)]
        );
    }

    #[test]
    fn test_assignments_over_no_symbols() {
        let mut it = Assignments::new(&[]);
        assert_eq!(it.next(), Some(Assignment::new()));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_assignments_restart_from_a_clone() {
        let symbols = symbols(&["P", "Q", "R"]);
        let fresh = Assignments::new(&symbols);
        let mut used = fresh.clone();
        used.next();
        assert_eq!(fresh.count(), 8);
        assert_eq!(used.count(), 7);
    }

    #[test]
    fn test_formula_entails_itself() {
        let formulas = [
            atom("P"),
            Formula::not(atom("P")),
            Formula::or([atom("P"), atom("Q")]),
            Formula::implies(atom("P"), Formula::and([atom("Q"), atom("R")])),
            Formula::iff(atom("P"), Formula::not(atom("Q"))),
            Formula::and([atom("P"), Formula::not(atom("P"))]),
        ];
        for f in &formulas {
            assert_eq!(entails(f, f), Ok(true), "{f}");
        }
    }

    #[test]
    fn test_empty_knowledge_base_entails_everything() {
        let kb = Formula::empty();
        assert_eq!(entails(&kb, &Formula::empty()), Ok(true));
        assert_eq!(entails(&kb, &atom("P")), Ok(false));
        assert_eq!(
            entails(&kb, &Formula::or([atom("P"), Formula::not(atom("P"))])),
            Ok(true)
        );
    }

    #[test]
    fn test_contradiction_entails_anything() {
        let kb = Formula::and([atom("P"), Formula::not(atom("P"))]);
        assert_eq!(entails(&kb, &atom("Q")), Ok(true));
        assert_eq!(entails(&kb, &Formula::not(atom("Q"))), Ok(true));
    }

    #[test]
    fn test_modus_ponens() {
        let kb = Formula::and([Formula::implies(atom("rain"), atom("wet")), atom("rain")]);
        assert_eq!(entails(&kb, &atom("wet")), Ok(true));
        assert_eq!(entails(&kb, &Formula::not(atom("wet"))), Ok(false));

        let weaker = Formula::implies(atom("rain"), atom("wet"));
        assert_eq!(entails(&weaker, &atom("wet")), Ok(false));
    }

    #[test]
    fn test_failure_short_circuits_and_is_counted() {
        let mut checker = ModelChecker::new();
        // The very first assignment (P = true) is a model of `true` where ¬P fails.
        assert_eq!(
            checker.entails(&Formula::empty(), &Formula::not(atom("P"))),
            Ok(false)
        );
        assert_eq!(
            checker.stats(),
            CheckStats {
                queries: 1,
                assignments: 1,
                models: 1,
            }
        );
    }

    #[test]
    fn test_success_visits_every_assignment() {
        let mut checker = ModelChecker::new();
        let kb = Formula::and([atom("P"), atom("Q")]);
        assert_eq!(checker.entails(&kb, &atom("R")), Ok(false));

        let mut checker = ModelChecker::new();
        assert_eq!(checker.entails(&kb, &atom("P")), Ok(true));
        assert_eq!(checker.stats().assignments, 4);
        assert_eq!(checker.stats().models, 1);
    }

    #[test]
    fn test_models() {
        let mut checker = ModelChecker::new();
        let models = checker
            .models(&Formula::or([atom("P"), atom("Q")]))
            .unwrap();
        assert_eq!(models.len(), 3);
        assert!(models.iter().all(|m| !m.true_symbols().is_empty()));

        let none = checker
            .models(&Formula::and([atom("P"), Formula::not(atom("P"))]))
            .unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_evaluation_errors_propagate() {
        assert_eq!(
            entails(&Formula::Or(Vec::new()), &atom("P")),
            Err(EvalError::EmptyDisjunction)
        );
    }

    #[test]
    fn test_assignment_count_rendering() {
        assert_eq!(assignment_count(0), "1");
        assert_eq!(assignment_count(6), "64");
        assert_eq!(assignment_count(200), "2^200");
    }
}
