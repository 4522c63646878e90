//! Reading automaton definitions from a line-oriented text format. The format follows the
//! order in which an interactive session would ask for the parts of an automaton:
//!
//! ```text
//! # states
//! A,B,C
//! # alphabet (may be empty)
//! a,b
//! # transitions, an empty symbol stands for epsilon
//! A,a,B
//! B,,C
//! done
//! # start state
//! A
//! # accepting states
//! C
//! ```
//!
//! Lines starting with `#` are ignored everywhere, blank lines are only ignored among the
//! transitions, since the alphabet and the accepting states may legitimately be empty. All
//! names are trimmed. A blank list is empty, but an empty entry in a non-blank list such as
//! `A,,B` is passed on as the empty name and rejected when building. A missing line for the
//! accepting states means that no state accepts.

use std::io::BufRead;

use tracing::trace;

use crate::{InputError, Nfa, NfaBuilder};

struct Lines<R> {
    inner: std::io::Lines<R>,
    number: usize,
}

impl<R: BufRead> Lines<R> {
    fn new(reader: R) -> Self {
        Self {
            inner: reader.lines(),
            number: 0,
        }
    }

    /// Returns the next line that is not a comment, trimmed, together with its number.
    fn next_line(&mut self) -> Result<Option<(usize, String)>, InputError> {
        for line in self.inner.by_ref() {
            self.number += 1;
            let line = line?;
            let trimmed = line.trim();
            if trimmed.starts_with('#') {
                continue;
            }
            return Ok(Some((self.number, trimmed.to_string())));
        }
        Ok(None)
    }

    fn expect_line(&mut self, section: &'static str) -> Result<(usize, String), InputError> {
        self.next_line()?.ok_or(InputError::Truncated { section })
    }
}

fn split_list(line: &str) -> Vec<String> {
    if line.is_empty() {
        return Vec::new();
    }
    line.split(',').map(|name| name.trim().to_string()).collect()
}

/// Reads a definition in the format described in the module documentation and
/// returns the corresponding builder. Only the structure is checked here, whether the names
/// fit together is decided by [`NfaBuilder::build`].
pub fn read_definition<R: BufRead>(reader: R) -> Result<NfaBuilder, InputError> {
    let mut lines = Lines::new(reader);

    let (_, states) = lines.expect_line("states")?;
    let (_, alphabet) = lines.expect_line("alphabet")?;
    let mut builder = NfaBuilder::default()
        .with_states(split_list(&states))
        .with_alphabet(split_list(&alphabet));

    loop {
        let (number, line) = lines.expect_line("transitions")?;
        if line.eq_ignore_ascii_case("done") {
            break;
        }
        if line.is_empty() {
            continue;
        }
        let parts = line.split(',').map(str::trim).collect::<Vec<_>>();
        let [source, symbol, target] = parts[..] else {
            return Err(InputError::Malformed {
                line: number,
                expected: "`source,symbol,destination` or `done`",
            });
        };
        trace!("line {number}: transition {source} --{symbol}--> {target}");
        builder = builder.transition(source, symbol, target);
    }

    let (_, start) = lines.expect_line("start state")?;
    if !start.is_empty() {
        builder = builder.with_start(start);
    }

    if let Some((_, accepting)) = lines.next_line()? {
        builder = builder.with_accepting(split_list(&accepting));
    }

    Ok(builder)
}

/// Reads and validates a definition in one go.
pub fn read_nfa<R: BufRead>(reader: R) -> Result<Nfa, InputError> {
    Ok(read_definition(reader)?.build()?)
}

/// Convenience wrapper around [`read_nfa`] for in-memory text.
pub fn parse_nfa(text: &str) -> Result<Nfa, InputError> {
    read_nfa(text.as_bytes())
}
