use std::collections::VecDeque;

use tracing::{debug, info, trace};

use crate::{Dfa, DfaState, Nfa, StateSet};

impl Nfa {
    /// Turns `self` into an equivalent [`Dfa`] using the subset construction.
    ///
    /// Starting from the epsilon closure of the start state, each discovered set of states `S`
    /// is expanded once: for every symbol `a` the successor is the epsilon closure of
    /// [`Nfa::moves`]`(S, a)`. Sets that have not been seen before are added and queued. An
    /// empty successor is routed to a single sink state instead, which is only created when
    /// it is needed and loops on every symbol. Consequently the resulting transition
    /// function is total and a state is accepting iff it contains an accepting NFA state.
    ///
    /// # Complexity
    /// The number of states of the result is bounded by `2^n + 1` where `n` is the number of
    /// NFA states, see [`crate::math::subset_bound`]. This bound is attained by some families
    /// of automata, so the running time is exponential in the worst case. This is inherent
    /// to determinization and not specific to this implementation.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(states = self.size(), symbols = self.alphabet().size())
    )]
    pub fn determinize(&self) -> Dfa {
        let mut dfa = Dfa::for_nfa(self);
        let mut queue = VecDeque::new();

        let initial = self.epsilon_closure(&StateSet::singleton(self.start()));
        let (start, _) = dfa.intern(DfaState::Subset(initial.clone()), self.accepting());
        queue.push_back((start, initial));

        while let Some((source, subset)) = queue.pop_front() {
            trace!("expanding {} = {}", source, self.show_set(&subset));

            for symbol in self.alphabet().universe() {
                let reached = self.epsilon_closure(&self.moves(&subset, symbol));
                let target = if reached.is_empty() {
                    dfa.intern(DfaState::Sink, self.accepting()).0
                } else {
                    let (target, fresh) =
                        dfa.intern(DfaState::Subset(reached.clone()), self.accepting());
                    if fresh {
                        debug!("discovered {} = {}", target, self.show_set(&reached));
                        queue.push_back((target, reached));
                    }
                    target
                };
                dfa.push_transition(source, symbol, target);
            }
        }

        if let Some(sink) = dfa.sink() {
            for symbol in self.alphabet().universe() {
                dfa.push_transition(sink, symbol, sink);
            }
        }

        info!(
            "determinized NFA with {} states into DFA with {} states{}",
            self.size(),
            dfa.size(),
            if dfa.sink().is_some() {
                " (including sink)"
            } else {
                ""
            }
        );
        dfa
    }
}
