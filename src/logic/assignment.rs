use crate::logic::symbol::Symbol;
use itertools::Itertools;
use rustc_hash::FxHashMap;
use std::fmt::Display;

/// A truth value for each of a set of symbols.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Assignment(FxHashMap<Symbol, bool>);

impl Assignment {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(n: usize) -> Self {
        Self(FxHashMap::with_capacity_and_hasher(n, Default::default()))
    }

    pub fn set(&mut self, symbol: Symbol, value: bool) {
        self.0.insert(symbol, value);
    }

    #[must_use]
    pub fn value(&self, symbol: &Symbol) -> Option<bool> {
        self.0.get(symbol).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, bool)> {
        self.0.iter().map(|(s, &b)| (s, b))
    }

    /// The symbols assigned `true`, sorted by name.
    #[must_use]
    pub fn true_symbols(&self) -> Vec<&Symbol> {
        self.0
            .iter()
            .filter_map(|(s, &b)| b.then_some(s))
            .sorted()
            .collect_vec()
    }
}

impl FromIterator<(Symbol, bool)> for Assignment {
    fn from_iter<T: IntoIterator<Item = (Symbol, bool)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rendered = self
            .0
            .iter()
            .sorted_by(|a, b| a.0.cmp(b.0))
            .map(|(s, b)| format!("{s}={}", if *b { 'T' } else { 'F' }))
            .join(", ");
        write!(f, "{{{rendered}}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_lookup() {
        let mut a = Assignment::new();
        assert!(a.is_empty());
        a.set(Symbol::new("P"), true);
        a.set(Symbol::new("Q"), false);

        assert_eq!(a.len(), 2);
        assert_eq!(a.value(&Symbol::new("P")), Some(true));
        assert_eq!(a.value(&Symbol::new("Q")), Some(false));
        assert_eq!(a.value(&Symbol::new("R")), None);
    }

    #[test]
    fn test_true_symbols_and_display() {
        let a: Assignment = [
            (Symbol::new("b"), true),
            (Symbol::new("c"), false),
            (Symbol::new("a"), true),
        ]
        .into_iter()
        .collect();

        assert_eq!(a.true_symbols(), vec![&Symbol::new("a"), &Symbol::new("b")]);
        assert_eq!(a.to_string(), "{a=T, b=T, c=F}");
    }
}
