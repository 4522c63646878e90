use tracing::debug;

use crate::{Nfa, NfaBuilder};

/// Names the `i`-th generated symbol `a`, `b`, ... and falls back to `s26`, `s27`, ... once the
/// latin letters are used up.
fn symbol_name(i: usize) -> String {
    if i < 26 {
        char::from(b'a' + i as u8).to_string()
    } else {
        format!("s{i}")
    }
}

/// Generates a random [`Nfa`] with `states` states named `q0`, `q1`, ... over `symbols`
/// symbols. For every pair of states and every symbol a transition is inserted with
/// probability `density`, epsilon transitions are inserted with probability
/// `epsilon_density`. State `q0` is initial and every state accepts with probability one
/// third. The same `seed` always produces the same automaton.
///
/// # Panics
/// If `states` is zero.
pub fn generate_random_nfa(
    seed: u64,
    states: usize,
    symbols: usize,
    density: f64,
    epsilon_density: f64,
) -> Nfa {
    assert!(states > 0, "an automaton needs at least one state");
    let mut rng = fastrand::Rng::with_seed(seed);

    let names = (0..states).map(|i| format!("q{i}")).collect::<Vec<_>>();
    let alphabet = (0..symbols).map(symbol_name).collect::<Vec<_>>();

    let mut builder = NfaBuilder::default()
        .with_states(names.iter().cloned())
        .with_alphabet(alphabet.iter().cloned())
        .with_start(names[0].clone());

    for source in &names {
        for target in &names {
            for symbol in &alphabet {
                if rng.f64() < density {
                    builder = builder.transition(source, symbol, target);
                }
            }
            if rng.f64() < epsilon_density {
                builder = builder.epsilon(source, target);
            }
        }
        if rng.f64() < 1.0 / 3.0 {
            builder = builder.accepting(source);
        }
    }

    debug!("generated random NFA with {states} states and {symbols} symbols from seed {seed}");
    builder
        .build()
        .expect("generated definitions only refer to declared names")
}
