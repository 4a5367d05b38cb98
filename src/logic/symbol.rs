use std::fmt::Display;
use std::sync::Arc;

/// A named atomic proposition.
///
/// Two symbols are the same proposition exactly when their names are equal, so
/// `Symbol` can be used directly as a set or map key. Cloning is cheap: the
/// name is shared.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(Arc<str>);

impl Symbol {
    #[must_use]
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Symbol {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        self.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_symbol_identity_is_by_name() {
        let a = Symbol::new("A is a Knight");
        let b = Symbol::from(String::from("A is a Knight"));
        assert_eq!(a, b);

        let set: FxHashSet<Symbol> = [a, b, Symbol::new("A is a Knave")].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_symbol_display() {
        assert_eq!(Symbol::new("rain").to_string(), "rain");
    }
}
