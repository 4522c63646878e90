use itertools::Itertools;

use crate::{
    math::{Bijection, Map},
    Alphabet, Label, StateId, StateSet, Symbol,
};

mod builder;
pub use builder::NfaBuilder;

mod closure;

/// A nondeterministic finite automaton whose transitions may be labeled with epsilon.
///
/// Values of this type can only be obtained through [`NfaBuilder::build`], which means every
/// transition refers to declared states and symbols and the start and accepting states exist.
/// The transition relation maps a state and a [`Label`] to a possibly empty set of targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nfa {
    pub(crate) names: Bijection<String, StateId>,
    pub(crate) alphabet: Alphabet,
    pub(crate) transitions: Map<(StateId, Label), StateSet>,
    pub(crate) start: StateId,
    pub(crate) accepting: StateSet,
}

impl Nfa {
    /// Returns a builder for a new automaton.
    pub fn builder() -> NfaBuilder {
        NfaBuilder::default()
    }

    /// The number of states.
    pub fn size(&self) -> usize {
        self.names.len()
    }

    /// Iterates over all states in declaration order.
    pub fn state_ids(&self) -> impl Iterator<Item = StateId> + Clone {
        (0..self.size()).map(StateId::new)
    }

    /// Looks up the state with the given name.
    pub fn state(&self, name: &str) -> Option<StateId> {
        self.names.get_by_left(name).copied()
    }

    /// Returns the name of a state.
    ///
    /// # Panics
    /// If `q` is not a state of this automaton.
    pub fn name(&self, q: StateId) -> &str {
        self.names
            .get_by_right(&q)
            .unwrap_or_else(|| panic!("{q} is not a state of this automaton"))
    }

    /// The alphabet, which never contains epsilon.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Shorthand for looking up a symbol by name in [`Self::alphabet`].
    pub fn symbol(&self, name: &str) -> Option<Symbol> {
        self.alphabet.symbol(name)
    }

    /// The designated initial state.
    pub fn start(&self) -> StateId {
        self.start
    }

    /// The set of accepting states.
    pub fn accepting(&self) -> &StateSet {
        &self.accepting
    }

    /// Returns true if `q` is accepting.
    pub fn is_accepting(&self, q: StateId) -> bool {
        self.accepting.contains(q)
    }

    /// Iterates over the direct successors of `q` on `label`.
    pub fn successors(&self, q: StateId, label: Label) -> impl Iterator<Item = StateId> + '_ {
        self.transitions
            .get(&(q, label))
            .into_iter()
            .flat_map(|targets| targets.iter())
    }

    /// Returns the set of direct successors of `q` on `label`, which is `None` if the
    /// relation has no entry for the pair.
    pub fn targets(&self, q: StateId, label: Label) -> Option<&StateSet> {
        self.transitions.get(&(q, label))
    }

    /// All transitions as `(source, label, target)` triples, sorted by source, then label
    /// (epsilon first), then target.
    pub fn transitions(&self) -> Vec<(StateId, Label, StateId)> {
        self.transitions
            .iter()
            .flat_map(|(&(q, label), targets)| targets.iter().map(move |p| (q, label, p)))
            .sorted()
            .collect()
    }

    /// Returns true if the automaton has at least one epsilon transition.
    pub fn has_epsilon_transitions(&self) -> bool {
        self.transitions
            .iter()
            .any(|((_, label), targets)| label.is_epsilon() && !targets.is_empty())
    }

    /// Renders a set of states by name, for example `{A, B}`.
    pub fn show_set(&self, set: &StateSet) -> String {
        format!("{{{}}}", set.iter().map(|q| self.name(q)).join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Nfa {
        NfaBuilder::default()
            .with_states(["A", "B", "C"])
            .with_alphabet(["a", "b"])
            .with_transitions([("A", "a", "B"), ("A", "a", "C"), ("B", "", "C")])
            .with_start("A")
            .with_accepting(["C"])
            .build()
            .unwrap()
    }

    #[test_log::test]
    fn accessors() {
        let nfa = sample();
        let (a, b, c) = (
            nfa.state("A").unwrap(),
            nfa.state("B").unwrap(),
            nfa.state("C").unwrap(),
        );
        assert_eq!(nfa.size(), 3);
        assert_eq!(nfa.start(), a);
        assert!(nfa.is_accepting(c));
        assert!(!nfa.is_accepting(b));
        assert_eq!(nfa.name(b), "B");
        assert!(nfa.has_epsilon_transitions());

        let sym_a = Label::Symbol(nfa.symbol("a").unwrap());
        assert_eq!(nfa.successors(a, sym_a).collect::<Vec<_>>(), vec![b, c]);
        assert_eq!(nfa.successors(c, sym_a).count(), 0);
        assert_eq!(nfa.show_set(nfa.targets(a, sym_a).unwrap()), "{B, C}");
    }

    #[test]
    fn transitions_are_sorted() {
        let nfa = sample();
        let shown = nfa
            .transitions()
            .into_iter()
            .map(|(q, l, p)| {
                format!(
                    "{}{}{}",
                    nfa.name(q),
                    nfa.alphabet().label_name(l),
                    nfa.name(p)
                )
            })
            .collect::<Vec<_>>();
        assert_eq!(shown, vec!["AaB", "AaC", "BεC"]);
    }
}
