#![allow(missing_docs)]

use std::fmt::Display;

use itertools::Itertools;

use crate::{Dfa, DfaStateId, Nfa, StateId};

fn escape_dot_label(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Produces a description of an automaton in the DOT language, for more information see the
/// [graphviz documentation](https://graphviz.org/doc/info/lang.html). Turning it into an
/// image is left to graphviz. Initial states are drawn red, accepting states as green
/// double circles, and an invisible `init` node points at the initial state.
pub trait Dottable {
    type StateIndex: Copy + Eq;

    fn dot_name(&self) -> Option<String>;

    fn dot_states(&self) -> Vec<Self::StateIndex>;

    fn dot_initial(&self) -> Self::StateIndex;

    /// Identifier of a node, must be a valid DOT ID.
    fn dot_state_ident(&self, idx: Self::StateIndex) -> String;

    fn dot_state_attributes(&self, idx: Self::StateIndex) -> Vec<DotStateAttribute>;

    /// All edges as `(source, label, target)`.
    fn dot_edges(&self) -> Vec<(Self::StateIndex, String, Self::StateIndex)>;

    fn dot_header_statements(&self) -> Vec<String> {
        vec![
            "rankdir=LR".to_string(),
            "init [label=\"\", shape=none]".to_string(),
        ]
    }

    /// Compute the graphviz representation.
    fn dot_representation(&self) -> String {
        let header = std::iter::once(format!(
            "digraph {} {{",
            self.dot_name().unwrap_or("A".to_string())
        ))
        .chain(self.dot_header_statements());

        let states = self.dot_states().into_iter().map(|q| {
            format!(
                "{} [{}]",
                self.dot_state_ident(q),
                self.dot_state_attributes(q)
                    .into_iter()
                    .map(|attr| attr.to_string())
                    .join(", ")
            )
        });

        let initial = std::iter::once(format!(
            "init -> {}",
            self.dot_state_ident(self.dot_initial())
        ));

        let transitions = self.dot_edges().into_iter().map(|(q, label, p)| {
            format!(
                "{} -> {} [{}]",
                self.dot_state_ident(q),
                self.dot_state_ident(p),
                DotTransitionAttribute::Label(label)
            )
        });

        header
            .chain(states)
            .chain(initial)
            .chain(transitions)
            .chain(std::iter::once("}".to_string()))
            .join("\n")
    }
}

fn node_attributes(label: String, initial: bool, accepting: bool) -> Vec<DotStateAttribute> {
    let shape = if accepting { "doublecircle" } else { "circle" };
    let color = match (initial, accepting) {
        (true, _) => "red",
        (false, true) => "green",
        (false, false) => "black",
    };
    vec![
        DotStateAttribute::Label(label),
        DotStateAttribute::Shape(shape.into()),
        DotStateAttribute::Color(color.into()),
    ]
}

impl Dottable for Nfa {
    type StateIndex = StateId;

    fn dot_name(&self) -> Option<String> {
        Some("NFA".into())
    }

    fn dot_states(&self) -> Vec<StateId> {
        self.state_ids().collect()
    }

    fn dot_initial(&self) -> StateId {
        self.start()
    }

    fn dot_state_ident(&self, idx: StateId) -> String {
        idx.to_string()
    }

    fn dot_state_attributes(&self, idx: StateId) -> Vec<DotStateAttribute> {
        node_attributes(
            self.name(idx).to_string(),
            idx == self.start(),
            self.is_accepting(idx),
        )
    }

    fn dot_edges(&self) -> Vec<(StateId, String, StateId)> {
        self.transitions()
            .into_iter()
            .map(|(q, label, p)| (q, self.alphabet().label_name(label).to_string(), p))
            .collect()
    }
}

impl Dottable for Dfa {
    type StateIndex = DfaStateId;

    fn dot_name(&self) -> Option<String> {
        Some("DFA".into())
    }

    fn dot_states(&self) -> Vec<DfaStateId> {
        self.state_ids().collect()
    }

    fn dot_initial(&self) -> DfaStateId {
        self.start()
    }

    fn dot_state_ident(&self, idx: DfaStateId) -> String {
        idx.to_string()
    }

    fn dot_state_attributes(&self, idx: DfaStateId) -> Vec<DotStateAttribute> {
        node_attributes(
            self.state_label(idx),
            idx == self.start(),
            self.is_accepting(idx),
        )
    }

    /// Parallel edges between the same pair of states are merged into one edge whose label
    /// lists all symbols.
    fn dot_edges(&self) -> Vec<(DfaStateId, String, DfaStateId)> {
        self.transitions()
            .into_group_map_by(|(q, _, p)| (*q, *p))
            .into_iter()
            .sorted_by_key(|((q, p), _)| (*q, *p))
            .map(|((q, p), edges)| {
                let label = edges
                    .into_iter()
                    .map(|(_, a, _)| self.alphabet().name(a))
                    .join(", ");
                (q, label, p)
            })
            .collect()
    }
}

/// Enum that abstracts attributes in the DOT format.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum DotStateAttribute {
    /// The label of a node
    Label(String),
    /// The shape of a node
    Shape(String),
    /// The color of a node
    Color(String),
}

impl Display for DotStateAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DotStateAttribute::Label(s) => write!(f, "label=\"{}\"", escape_dot_label(s)),
            DotStateAttribute::Shape(s) => write!(f, "shape=\"{s}\""),
            DotStateAttribute::Color(c) => write!(f, "color=\"{c}\""),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum DotTransitionAttribute {
    Label(String),
}

impl Display for DotTransitionAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DotTransitionAttribute::Label(lbl) => write!(f, "label=\"{}\"", escape_dot_label(lbl)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    fn nfa() -> Nfa {
        NfaBuilder::default()
            .with_states(["A", "B\"x"])
            .with_alphabet(["a", "b"])
            .with_transitions([("A", "a", "A"), ("A", "b", "A"), ("A", "", "B\"x")])
            .with_start("A")
            .with_accepting(["B\"x"])
            .build()
            .unwrap()
    }

    #[test_log::test]
    fn nfa_dot() {
        let dot = nfa().dot_representation();
        assert!(dot.starts_with("digraph NFA {"));
        assert!(dot.ends_with('}'));
        assert!(dot.contains("q0 [label=\"A\", shape=\"circle\", color=\"red\"]"));
        assert!(dot.contains("q1 [label=\"B\\\"x\", shape=\"doublecircle\", color=\"green\"]"));
        assert!(dot.contains("init -> q0"));
        assert!(dot.contains("q0 -> q1 [label=\"ε\"]"));
    }

    #[test]
    fn dfa_dot_merges_parallel_edges() {
        let dfa = nfa().determinize();
        assert_eq!(dfa.size(), 1);
        let dot = dfa.dot_representation();
        assert!(dot.starts_with("digraph DFA {"));
        assert!(dot.contains("d0 -> d0 [label=\"a, b\"]"));
        assert!(dot.contains("shape=\"doublecircle\", color=\"red\""));
    }
}
