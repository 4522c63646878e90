use std::fmt::Display;

use itertools::Itertools;

use crate::{math::Bijection, Symbol, EPSILON};

/// The label of an NFA transition, which is either a proper symbol of the [`Alphabet`]
/// or the empty word. Epsilon is deliberately not a member of the alphabet, so a
/// [`crate::Dfa`] never has epsilon transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Label {
    /// The empty word.
    Epsilon,
    /// A proper alphabet symbol.
    Symbol(Symbol),
}

impl Label {
    /// Returns the symbol if `self` is not epsilon.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Label::Epsilon => None,
            Label::Symbol(sym) => Some(sym),
        }
    }

    /// Returns true if `self` is the empty word.
    pub fn is_epsilon(self) -> bool {
        matches!(self, Label::Epsilon)
    }
}

impl From<Symbol> for Label {
    fn from(value: Symbol) -> Self {
        Label::Symbol(value)
    }
}

/// A finite, ordered collection of named symbols. Symbols are handed out in the order in
/// which they are added and duplicates are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alphabet {
    names: Bijection<String, Symbol>,
}

impl Alphabet {
    /// Creates an alphabet without any symbols.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Adds a symbol with the given name, returning its index. If a symbol with the same
    /// name exists already, its index is returned instead.
    pub fn add<S: AsRef<str>>(&mut self, name: S) -> Symbol {
        let name = name.as_ref();
        if let Some(sym) = self.names.get_by_left(name) {
            return *sym;
        }
        let sym = Symbol::new(self.names.len());
        self.names.insert(name.to_string(), sym);
        sym
    }

    /// Looks up the symbol with the given name.
    pub fn symbol(&self, name: &str) -> Option<Symbol> {
        self.names.get_by_left(name).copied()
    }

    /// Returns the name of the given symbol.
    ///
    /// # Panics
    /// If `sym` does not belong to this alphabet.
    pub fn name(&self, sym: Symbol) -> &str {
        self.names
            .get_by_right(&sym)
            .unwrap_or_else(|| panic!("symbol {sym} is not part of the alphabet"))
    }

    /// Renders a transition label, using [`EPSILON`] for the empty word.
    pub fn label_name(&self, label: Label) -> &str {
        match label {
            Label::Epsilon => EPSILON,
            Label::Symbol(sym) => self.name(sym),
        }
    }

    /// The number of symbols.
    pub fn size(&self) -> usize {
        self.names.len()
    }

    /// Returns true if there are no symbols.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over all symbols in the order in which they were added.
    pub fn universe(&self) -> impl Iterator<Item = Symbol> + Clone {
        (0..self.size()).map(Symbol::new)
    }

    /// Iterates over the names of all symbols in the order in which they were added.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.universe().map(|sym| self.name(sym))
    }
}

impl<S: AsRef<str>> FromIterator<S> for Alphabet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut alphabet = Self::empty();
        for name in iter {
            alphabet.add(name);
        }
        alphabet
    }
}

impl Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.names().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_keep_insertion_order() {
        let alphabet: Alphabet = ["b", "a", "b", "c"].into_iter().collect();
        assert_eq!(alphabet.size(), 3);
        assert_eq!(alphabet.names().collect::<Vec<_>>(), vec!["b", "a", "c"]);
        assert_eq!(alphabet.symbol("a"), Some(Symbol::new(1)));
        assert_eq!(alphabet.symbol("z"), None);
        assert_eq!(alphabet.to_string(), "[b, a, c]");
    }

    #[test]
    fn epsilon_is_not_a_symbol() {
        let alphabet: Alphabet = ["a"].into_iter().collect();
        assert_eq!(alphabet.label_name(Label::Epsilon), EPSILON);
        assert_eq!(alphabet.label_name(Label::Symbol(Symbol::new(0))), "a");
        assert_eq!(Label::Epsilon.symbol(), None);
        assert!(alphabet
            .universe()
            .all(|sym| !Label::from(sym).is_epsilon()));
    }
}
