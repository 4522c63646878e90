use crate::{Label, Nfa, StateSet, Symbol};

impl Nfa {
    /// Computes the epsilon closure of `states`, that is the smallest superset of `states`
    /// from which no epsilon transition leads outside. Every state is pushed onto the stack
    /// at most once, so this runs in time linear in the size of the result and its epsilon
    /// edges. Applying it to its own output yields the same set.
    pub fn epsilon_closure(&self, states: &StateSet) -> StateSet {
        let mut closure = states.clone();
        let mut stack: Vec<_> = states.iter().collect();

        while let Some(q) = stack.pop() {
            for p in self.successors(q, Label::Epsilon) {
                if closure.insert(p) {
                    stack.push(p);
                }
            }
        }

        closure
    }

    /// Collects the direct `symbol` successors of all states in `states`. Epsilon transitions
    /// are not followed, combine with [`Self::epsilon_closure`] for that.
    pub fn moves(&self, states: &StateSet, symbol: Symbol) -> StateSet {
        states
            .iter()
            .flat_map(|q| self.successors(q, Label::Symbol(symbol)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    /// 0 -ε-> 1 -ε-> 2, 2 -ε-> 0, 1 -a-> 3, 3 -ε-> 4, 0 -b-> 4
    fn chain() -> Nfa {
        NfaBuilder::default()
            .with_states(["0", "1", "2", "3", "4"])
            .with_alphabet(["a", "b"])
            .with_transitions([
                ("0", "ε", "1"),
                ("1", "ε", "2"),
                ("2", "ε", "0"),
                ("1", "a", "3"),
                ("3", "", "4"),
                ("0", "b", "4"),
            ])
            .with_start("0")
            .build()
            .unwrap()
    }

    fn set(nfa: &Nfa, names: &[&str]) -> StateSet {
        names.iter().map(|n| nfa.state(n).unwrap()).collect()
    }

    #[test_log::test]
    fn closure_follows_epsilon_cycles() {
        let nfa = chain();
        assert_eq!(
            nfa.epsilon_closure(&set(&nfa, &["0"])),
            set(&nfa, &["0", "1", "2"])
        );
        assert_eq!(
            nfa.epsilon_closure(&set(&nfa, &["3"])),
            set(&nfa, &["3", "4"])
        );
        assert_eq!(nfa.epsilon_closure(&StateSet::new()), StateSet::new());
    }

    #[test]
    fn closure_is_idempotent_and_extensive() {
        let nfa = chain();
        let cases: [&[&str]; 5] = [&["0"], &["3"], &["4"], &["1", "3"], &[]];
        for names in cases {
            let s = set(&nfa, names);
            let once = nfa.epsilon_closure(&s);
            assert!(s.is_subset(&once));
            assert_eq!(nfa.epsilon_closure(&once), once);
        }
    }

    #[test]
    fn moves_do_not_follow_epsilon() {
        let nfa = chain();
        let a = nfa.symbol("a").unwrap();
        let b = nfa.symbol("b").unwrap();
        assert_eq!(nfa.moves(&set(&nfa, &["0"]), a), StateSet::new());
        assert_eq!(nfa.moves(&set(&nfa, &["0", "1"]), a), set(&nfa, &["3"]));
        assert_eq!(nfa.moves(&set(&nfa, &["0", "1"]), b), set(&nfa, &["4"]));
    }

    #[test]
    fn moves_distribute_over_union() {
        let nfa = chain();
        let all: Vec<_> = nfa.state_ids().collect();
        for sym in nfa.alphabet().universe() {
            for (i, j) in (0..all.len()).flat_map(|i| (0..all.len()).map(move |j| (i, j))) {
                let s = StateSet::from_iter(all[..i].iter().copied());
                let t = StateSet::from_iter(all[j..].iter().copied());
                assert_eq!(
                    nfa.moves(&s.union(&t), sym),
                    nfa.moves(&s, sym).union(&nfa.moves(&t, sym))
                );
            }
        }
    }
}
