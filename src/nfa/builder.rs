use tracing::{debug, trace};

use crate::{
    error::IdentifierKind,
    is_epsilon_marker, is_reserved,
    math::{Bijection, Map},
    Alphabet, DefinitionError, Label, Nfa, StateId, StateSet,
};

/// Helper struct for the construction of an [`Nfa`]. It collects names of states and symbols,
/// transitions, the start state and the accepting states, and only checks them once
/// [`Self::build`] is called. Declaring the same state, symbol or transition twice has no
/// effect.
///
/// A transition label is either the name of a declared symbol or an epsilon marker, which is
/// [`crate::EPSILON`] or the empty string.
///
/// # Example
///
/// We want an automaton over `['a', 'b']` with states `A` and `B`, where `A` is initial, `B`
/// is accepting, reading `a` in `A` may stay in `A` or move to `B` and `B` has an epsilon
/// transition back to `A`.
/// ```
/// use determinize::prelude::*;
///
/// let nfa = NfaBuilder::default()
///     .with_states(["A", "B"])
///     .with_alphabet(["a", "b"])
///     .with_transitions([("A", "a", "A"), ("A", "a", "B")])
///     .epsilon("B", "A")
///     .with_start("A")
///     .with_accepting(["B"])
///     .build()
///     .unwrap();
/// assert_eq!(nfa.size(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NfaBuilder {
    states: Vec<String>,
    symbols: Vec<String>,
    transitions: Vec<(String, String, String)>,
    start: Option<String>,
    accepting: Vec<String>,
}

impl NfaBuilder {
    /// Declares a single state.
    pub fn state<S: Into<String>>(mut self, name: S) -> Self {
        self.states.push(name.into());
        self
    }

    /// Declares all given states, in order.
    pub fn with_states<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.states.extend(names.into_iter().map(Into::into));
        self
    }

    /// Declares a single alphabet symbol.
    pub fn symbol<S: Into<String>>(mut self, name: S) -> Self {
        self.symbols.push(name.into());
        self
    }

    /// Declares all given alphabet symbols, in order. The order determines the order of the
    /// columns in transition tables and the order in which successors are explored.
    pub fn with_alphabet<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symbols.extend(names.into_iter().map(Into::into));
        self
    }

    /// Adds a transition from `source` to `target` on `label`.
    pub fn transition<S, L, T>(mut self, source: S, label: L, target: T) -> Self
    where
        S: Into<String>,
        L: Into<String>,
        T: Into<String>,
    {
        self.transitions
            .push((source.into(), label.into(), target.into()));
        self
    }

    /// Adds an epsilon transition from `source` to `target`.
    pub fn epsilon<S: Into<String>, T: Into<String>>(self, source: S, target: T) -> Self {
        self.transition(source, crate::EPSILON, target)
    }

    /// Adds all given `(source, label, target)` transitions.
    pub fn with_transitions<I, S, L, T>(self, transitions: I) -> Self
    where
        I: IntoIterator<Item = (S, L, T)>,
        S: Into<String>,
        L: Into<String>,
        T: Into<String>,
    {
        transitions
            .into_iter()
            .fold(self, |acc, (source, label, target)| {
                acc.transition(source, label, target)
            })
    }

    /// Sets the start state, replacing a previously set one.
    pub fn with_start<S: Into<String>>(mut self, name: S) -> Self {
        self.start = Some(name.into());
        self
    }

    /// Marks a single state as accepting.
    pub fn accepting<S: Into<String>>(mut self, name: S) -> Self {
        self.accepting.push(name.into());
        self
    }

    /// Marks all given states as accepting.
    pub fn with_accepting<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accepting.extend(names.into_iter().map(Into::into));
        self
    }

    /// Validates the collected definition and turns it into an [`Nfa`]. Nothing is built if
    /// any check fails; the first violation found is returned together with the offending
    /// name. The checks happen in this order:
    /// 1. there is at least one state,
    /// 2. no state or symbol uses a reserved identifier,
    /// 3. every transition refers to declared states and to a declared symbol or epsilon,
    /// 4. the start state is set and declared,
    /// 5. every accepting state is declared.
    ///
    /// An empty alphabet is allowed, the resulting automaton only reads the empty word.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn build(self) -> Result<Nfa, DefinitionError> {
        if self.states.is_empty() {
            return Err(DefinitionError::NoStates);
        }

        let states = self.states.iter().map(|s| (s, IdentifierKind::State));
        let symbols = self.symbols.iter().map(|s| (s, IdentifierKind::Symbol));
        if let Some((name, kind)) = states.chain(symbols).find(|(name, _)| is_reserved(name)) {
            return Err(DefinitionError::ReservedIdentifier {
                name: name.clone(),
                kind,
            });
        }

        let mut names = Bijection::new();
        for name in self.states {
            if !names.contains_left(&name) {
                let id = StateId::new(names.len());
                names.insert(name, id);
            }
        }
        let alphabet: Alphabet = self.symbols.iter().collect();
        trace!("declared {} states and alphabet {}", names.len(), alphabet);

        let lookup = |name: &str| names.get_by_left(name).copied();
        let state = |name: &str| {
            lookup(name).ok_or_else(|| DefinitionError::UnknownState { name: name.into() })
        };

        let mut transitions: Map<(StateId, Label), StateSet> = Map::default();
        for (source, label, target) in &self.transitions {
            let q = state(source)?;
            let label = if is_epsilon_marker(label) {
                Label::Epsilon
            } else if let Some(symbol) = alphabet.symbol(label) {
                Label::Symbol(symbol)
            } else {
                return Err(DefinitionError::UnknownSymbol {
                    name: label.clone(),
                });
            };
            let p = state(target)?;
            transitions.entry((q, label)).or_default().insert(p);
        }

        let start = match &self.start {
            None => return Err(DefinitionError::MissingStart),
            Some(name) => {
                lookup(name).ok_or_else(|| DefinitionError::InvalidStart { name: name.clone() })?
            }
        };

        let accepting = self
            .accepting
            .iter()
            .map(|name| {
                lookup(name).ok_or_else(|| DefinitionError::InvalidAccepting { name: name.clone() })
            })
            .collect::<Result<StateSet, _>>()?;

        debug!(
            "built NFA with {} states, {} symbols and {} transition entries",
            names.len(),
            alphabet.size(),
            transitions.len()
        );

        Ok(Nfa {
            names,
            alphabet,
            transitions,
            start,
            accepting,
        })
    }
}
