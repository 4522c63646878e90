//! Determinization of finite automata via the subset construction.
//!
//! An [`Nfa`] is a nondeterministic finite automaton whose transitions are labeled either with
//! a symbol of its [`Alphabet`] or with epsilon, the empty word. It can only be created through
//! an [`NfaBuilder`], which rejects definitions referring to undeclared states or symbols and
//! names that collide with the reserved identifiers [`EPSILON`] and [`SINK`]. Calling
//! [`Nfa::determinize`] then produces an equivalent [`Dfa`], whose states are epsilon-closed
//! sets of NFA states. Whenever some set of states has no successor on a symbol, the move
//! leads to a single sink state which loops on every symbol, so that every state of the
//! resulting automaton has precisely one successor per symbol.
//!
//! The building blocks of the construction, [`Nfa::epsilon_closure`] and [`Nfa::moves`], are
//! exposed as well. Both automata can be displayed as transition tables (see
//! [`table::TransitionTable`]) or exported in the DOT format (see [`dot::Dottable`]), and
//! [`input`] reads definitions from a simple line-oriented text format.
//!
//! ```
//! use determinize::prelude::*;
//!
//! let nfa = NfaBuilder::default()
//!     .with_states(["A", "B"])
//!     .with_alphabet(["a"])
//!     .with_transitions([("A", "a", "A"), ("A", "a", "B")])
//!     .with_start("A")
//!     .with_accepting(["B"])
//!     .build()
//!     .unwrap();
//! let dfa = nfa.determinize();
//! assert_eq!(dfa.size(), 2);
//! let a = dfa.alphabet().symbol("a").unwrap();
//! let next = dfa.successor(dfa.start(), a);
//! assert!(dfa.is_accepting(next));
//! assert_eq!(dfa.state_label(next), "{A, B}");
//! ```
#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// The prelude is supposed to make using this package easier. Including everything, i.e.
/// `use determinize::prelude::*;` should be enough to use the package.
pub mod prelude {
    pub use super::{
        dot::Dottable, table::TransitionTable, Alphabet, DefinitionError, Dfa, DfaState,
        DfaStateId, InputError, Label, Nfa, NfaBuilder, StateId, StateSet, Symbol,
    };
}

/// This module contains type aliases for the collections used throughout the crate and the
/// [`StateSet`] type.
pub mod math;
pub use math::StateSet;

mod id;
pub use id::{DefaultIdType, DfaStateId, StateId, Symbol};

/// Module that contains definitions for dealing with alphabets and transition labels.
pub mod alphabet;
pub use alphabet::{Alphabet, Label};

/// Error types for invalid definitions and unreadable input.
pub mod error;
pub use error::{DefinitionError, InputError};

/// Nondeterministic automata, their construction, epsilon closures and moves.
pub mod nfa;
pub use nfa::{Nfa, NfaBuilder};

/// Deterministic automata as produced by the subset construction.
pub mod dfa;
pub use dfa::{Dfa, DfaState};

mod determinize;

/// Output of automata as transition tables.
pub mod table;

/// Output of automata in the DOT format.
pub mod dot;

pub mod input;

/// Implements the generation of random automata.
#[cfg(feature = "random")]
pub mod random;

/// The label under which the sink state of a [`Dfa`] is displayed. No state or symbol may
/// carry this name.
pub const SINK: &str = "Trap";

/// The textual epsilon marker. In transition labels the empty string is accepted as well.
pub const EPSILON: &str = "ε";

/// Returns true if `label` denotes the empty word.
pub fn is_epsilon_marker(label: &str) -> bool {
    label.is_empty() || label == EPSILON
}

/// Returns true if `name` may not be used for a state or a symbol, since it would be
/// confused with epsilon or the sink.
pub fn is_reserved(name: &str) -> bool {
    is_epsilon_marker(name) || name == SINK
}
