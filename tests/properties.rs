use determinize::{math::subset_bound, prelude::*};

/// Runs the NFA on `word` by tracking the epsilon-closed set of reachable states.
fn nfa_accepts(nfa: &Nfa, word: &[Symbol]) -> bool {
    let mut current = nfa.epsilon_closure(&StateSet::singleton(nfa.start()));
    for &symbol in word {
        current = nfa.epsilon_closure(&nfa.moves(&current, symbol));
    }
    !current.is_disjoint(nfa.accepting())
}

fn dfa_accepts(dfa: &Dfa, word: &[Symbol]) -> bool {
    let reached = word
        .iter()
        .fold(dfa.start(), |q, &symbol| dfa.successor(q, symbol));
    dfa.is_accepting(reached)
}

/// All words over `alphabet` of length at most `max_len`.
fn words(alphabet: &Alphabet, max_len: usize) -> Vec<Vec<Symbol>> {
    let mut all = vec![vec![]];
    let mut frontier: Vec<Vec<Symbol>> = vec![vec![]];
    for _ in 0..max_len {
        frontier = frontier
            .iter()
            .flat_map(|w| {
                alphabet.universe().map(move |a| {
                    let mut next = w.clone();
                    next.push(a);
                    next
                })
            })
            .collect();
        all.extend(frontier.iter().cloned());
    }
    all
}

fn check_properties(nfa: &Nfa, max_len: usize) {
    let dfa = nfa.determinize();

    // bounded growth
    assert!(dfa.size() <= subset_bound(nfa.size()));

    // totality and determinism: one entry per (state, symbol), in order
    let transitions = dfa.transitions().collect::<Vec<_>>();
    assert_eq!(transitions.len(), dfa.size() * dfa.alphabet().size());
    for q in dfa.state_ids() {
        let row = transitions
            .iter()
            .filter(|(source, _, _)| *source == q)
            .map(|(_, symbol, _)| *symbol)
            .collect::<Vec<_>>();
        assert_eq!(row, dfa.alphabet().universe().collect::<Vec<_>>());
    }

    // the sink exists only when needed, never accepts and absorbs everything
    if let Some(sink) = dfa.sink() {
        assert!(!dfa.is_accepting(sink));
        assert!(dfa
            .alphabet()
            .universe()
            .all(|a| dfa.successor(sink, a) == sink));
        assert!(transitions.iter().any(|(q, _, p)| *p == sink && *q != sink));
    }

    // every other state is an epsilon-closed subset, classified by its members
    for q in dfa.state_ids().filter(|q| !dfa.is_sink(*q)) {
        let subset = dfa.state(q).subset().unwrap();
        assert!(!subset.is_empty());
        assert_eq!(&nfa.epsilon_closure(subset), subset);
        assert_eq!(dfa.is_accepting(q), !subset.is_disjoint(nfa.accepting()));
    }

    // acceptance equivalence on all short words
    for word in words(nfa.alphabet(), max_len) {
        assert_eq!(
            nfa_accepts(nfa, &word),
            dfa_accepts(&dfa, &word),
            "disagreement on {word:?}"
        );
    }
}

#[test_log::test]
fn handwritten_automata() {
    let nfas = [
        NfaBuilder::default()
            .with_states(["A", "B", "C"])
            .with_alphabet(["0", "1"])
            .with_transitions([
                ("A", "0", "A"),
                ("A", "1", "A"),
                ("A", "1", "B"),
                ("B", "0", "C"),
                ("B", "", "C"),
            ])
            .with_start("A")
            .with_accepting(["C"])
            .build()
            .unwrap(),
        NfaBuilder::default()
            .with_states(["p", "q", "r"])
            .with_alphabet(["x", "y", "z"])
            .with_transitions([("p", "x", "q"), ("q", "y", "r"), ("r", "ε", "p")])
            .with_start("p")
            .with_accepting(["r"])
            .build()
            .unwrap(),
        NfaBuilder::default()
            .with_states(["only"])
            .with_alphabet(["a"])
            .with_start("only")
            .build()
            .unwrap(),
    ];
    for nfa in &nfas {
        check_properties(nfa, 6);
    }
}

#[cfg(feature = "random")]
#[test_log::test]
fn random_automata() {
    use determinize::random::generate_random_nfa;

    for seed in 0..40 {
        let states = 1 + (seed as usize % 6);
        let nfa = generate_random_nfa(seed, states, 2, 0.25, 0.1);
        check_properties(&nfa, 6);
    }
}

#[cfg(feature = "random")]
#[test]
fn random_automata_with_dense_epsilon() {
    use determinize::random::generate_random_nfa;

    for seed in 100..120 {
        let nfa = generate_random_nfa(seed, 5, 3, 0.15, 0.4);
        check_properties(&nfa, 4);
    }
}
