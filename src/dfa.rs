use std::fmt::Display;

use itertools::Itertools;

use crate::{math::Map, Alphabet, DfaStateId, Nfa, StateSet, Symbol, SINK};

/// A state of a determinized automaton: either the set of NFA states it stands for, or the
/// sink which absorbs every move that has no NFA counterpart. The sink is a separate variant,
/// so it differs from every subset, including the empty one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DfaState {
    /// A set of NFA states, always closed under epsilon transitions.
    Subset(StateSet),
    /// The trap state.
    Sink,
}

impl DfaState {
    /// Returns true if `self` is the sink.
    pub fn is_sink(&self) -> bool {
        matches!(self, DfaState::Sink)
    }

    /// Returns the underlying set of NFA states, which is `None` for the sink.
    pub fn subset(&self) -> Option<&StateSet> {
        match self {
            DfaState::Subset(set) => Some(set),
            DfaState::Sink => None,
        }
    }

    /// A state is accepting iff it is not the sink and it contains at least one of the
    /// `accepting` NFA states.
    pub fn is_accepting_for(&self, accepting: &StateSet) -> bool {
        match self {
            DfaState::Subset(set) => !set.is_disjoint(accepting),
            DfaState::Sink => false,
        }
    }
}

/// A deterministic finite automaton obtained from [`Nfa::determinize`].
///
/// The transition function is total: for every state and every symbol of the alphabet there is
/// precisely one successor, see [`Dfa::successor`]. States are numbered in the order in which
/// the subset construction discovered them, so the initial state is always [`DfaStateId`] 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dfa {
    alphabet: Alphabet,
    nfa_names: Vec<String>,
    states: Vec<DfaState>,
    index: Map<DfaState, DfaStateId>,
    accepting: Vec<bool>,
    /// one row per state, one column per symbol
    rows: Vec<Vec<DfaStateId>>,
    sink: Option<DfaStateId>,
}

impl Dfa {
    /// Creates an automaton without states, which is only valid while determinizing `nfa`.
    pub(crate) fn for_nfa(nfa: &Nfa) -> Self {
        Self {
            alphabet: nfa.alphabet().clone(),
            nfa_names: nfa.state_ids().map(|q| nfa.name(q).to_string()).collect(),
            states: Vec::new(),
            index: Map::default(),
            accepting: Vec::new(),
            rows: Vec::new(),
            sink: None,
        }
    }

    /// Looks up `state` and adds it if it is new. Returns the id and whether it was added.
    /// Acceptance is decided once, upon insertion.
    pub(crate) fn intern(
        &mut self,
        state: DfaState,
        nfa_accepting: &StateSet,
    ) -> (DfaStateId, bool) {
        if let Some(id) = self.index.get(&state) {
            return (*id, false);
        }
        let id = DfaStateId::new(self.states.len());
        if state.is_sink() {
            self.sink = Some(id);
        }
        self.accepting.push(state.is_accepting_for(nfa_accepting));
        self.rows.push(Vec::with_capacity(self.alphabet.size()));
        self.index.insert(state.clone(), id);
        self.states.push(state);
        (id, true)
    }

    /// Records the successor of `source` on `symbol`. Rows have to be filled in alphabet order.
    pub(crate) fn push_transition(
        &mut self,
        source: DfaStateId,
        symbol: Symbol,
        target: DfaStateId,
    ) {
        let row = &mut self.rows[source.index()];
        debug_assert_eq!(
            row.len(),
            symbol.index(),
            "rows are filled in alphabet order"
        );
        row.push(target);
    }

    /// The alphabet, shared with the automaton this one was built from.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The initial state, which is the epsilon closure of the NFA's start state.
    pub fn start(&self) -> DfaStateId {
        DfaStateId::new(0)
    }

    /// The number of states, including the sink if there is one.
    pub fn size(&self) -> usize {
        self.states.len()
    }

    /// Iterates over all states in discovery order.
    pub fn state_ids(&self) -> impl Iterator<Item = DfaStateId> + Clone {
        (0..self.size()).map(DfaStateId::new)
    }

    /// Returns the state with the given id.
    ///
    /// # Panics
    /// If `id` does not belong to this automaton.
    pub fn state(&self, id: DfaStateId) -> &DfaState {
        &self.states[id.index()]
    }

    /// Returns the id of the state that stands for exactly the NFA states in `subset`.
    pub fn find(&self, subset: &StateSet) -> Option<DfaStateId> {
        self.index.get(&DfaState::Subset(subset.clone())).copied()
    }

    /// The sink, if some move of the NFA was undefined. An automaton without a sink is
    /// already total without it.
    pub fn sink(&self) -> Option<DfaStateId> {
        self.sink
    }

    /// Returns true if `id` is the sink.
    pub fn is_sink(&self, id: DfaStateId) -> bool {
        self.sink == Some(id)
    }

    /// Returns true if `id` contains an accepting NFA state. The sink never accepts.
    pub fn is_accepting(&self, id: DfaStateId) -> bool {
        self.accepting[id.index()]
    }

    /// Iterates over all accepting states in discovery order.
    pub fn accepting_states(&self) -> impl Iterator<Item = DfaStateId> + '_ {
        self.state_ids().filter(|id| self.is_accepting(*id))
    }

    /// The unique successor of `id` on `symbol`.
    ///
    /// # Panics
    /// If `id` or `symbol` do not belong to this automaton.
    pub fn successor(&self, id: DfaStateId, symbol: Symbol) -> DfaStateId {
        self.rows[id.index()][symbol.index()]
    }

    /// Iterates over all transitions as `(source, symbol, target)` triples, ordered by source
    /// and then by symbol.
    pub fn transitions(&self) -> impl Iterator<Item = (DfaStateId, Symbol, DfaStateId)> + '_ {
        self.rows.iter().enumerate().flat_map(|(q, row)| {
            row.iter()
                .enumerate()
                .map(move |(a, p)| (DfaStateId::new(q), Symbol::new(a), *p))
        })
    }

    /// Renders a state by the names of the NFA states it contains, for example `{A, B}`. The
    /// sink is rendered as [`SINK`].
    pub fn state_label(&self, id: DfaStateId) -> String {
        match self.state(id) {
            DfaState::Subset(set) => format!(
                "{{{}}}",
                set.iter().map(|q| self.nfa_names[q.index()].as_str()).join(", ")
            ),
            DfaState::Sink => SINK.to_string(),
        }
    }
}

impl Display for Dfa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "States: {}",
            self.state_ids().map(|q| self.state_label(q)).join(", ")
        )?;
        writeln!(f, "Alphabet: {}", self.alphabet)?;
        writeln!(f, "Transitions:")?;
        for (q, a, p) in self.transitions() {
            writeln!(
                f,
                "  {} --({})--> {}",
                self.state_label(q),
                self.alphabet.name(a),
                self.state_label(p)
            )?;
        }
        writeln!(f, "Start State: {}", self.state_label(self.start()))?;
        write!(
            f,
            "Accept States: {}",
            self.accepting_states().map(|q| self.state_label(q)).join(", ")
        )
    }
}
