#![allow(missing_docs)]

use std::fmt::Display;

use thiserror::Error;

/// What a name was declared as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    /// A state name.
    State,
    /// An alphabet symbol.
    Symbol,
}

impl Display for IdentifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdentifierKind::State => write!(f, "state"),
            IdentifierKind::Symbol => write!(f, "symbol"),
        }
    }
}

/// Reasons for rejecting an automaton definition. All of them are detected by
/// [`crate::NfaBuilder::build`], determinization itself cannot fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("the automaton must have at least one state")]
    NoStates,
    #[error("{kind} \"{name}\" collides with a reserved identifier")]
    ReservedIdentifier { name: String, kind: IdentifierKind },
    #[error("transition refers to undeclared state \"{name}\"")]
    UnknownState { name: String },
    #[error("transition label \"{name}\" is neither a declared symbol nor epsilon")]
    UnknownSymbol { name: String },
    #[error("no start state was given")]
    MissingStart,
    #[error("start state \"{name}\" is not a declared state")]
    InvalidStart { name: String },
    #[error("accepting state \"{name}\" is not a declared state")]
    InvalidAccepting { name: String },
}

/// Errors raised while reading a line-oriented automaton definition, see [`crate::input`].
#[derive(Error, Debug)]
pub enum InputError {
    #[error("could not read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: expected {expected}")]
    Malformed { line: usize, expected: &'static str },
    #[error("input ended before the {section} section")]
    Truncated { section: &'static str },
    #[error(transparent)]
    Definition(#[from] DefinitionError),
}
