use itertools::Itertools;
use owo_colors::OwoColorize;

use crate::{Dfa, Label, Nfa, EPSILON};

/// Types that can be printed as a transition table with one row per state and one column per
/// label. The first column names the state, prefixed with `→` for the initial state and `*`
/// for accepting ones.
pub trait TransitionTable {
    /// The column headers following the `State` column.
    fn table_columns(&self) -> Vec<String>;

    /// One row per state, the first cell is the decorated state name.
    fn table_rows(&self, ansi: bool) -> Vec<Vec<String>>;

    /// Returns the transition table as a plain string.
    fn transition_table(&self) -> String {
        build_table(self.table_columns(), self.table_rows(false))
    }

    /// Returns the transition table with accepting states highlighted through ANSI escape
    /// codes, for printing to a terminal.
    fn colored_transition_table(&self) -> String {
        build_table(self.table_columns(), self.table_rows(true))
    }
}

fn build_table(columns: Vec<String>, rows: Vec<Vec<String>>) -> String {
    let mut builder = tabled::builder::Builder::default();
    builder.push_record(std::iter::once("State".to_string()).chain(columns));
    for row in rows {
        builder.push_record(row);
    }
    builder
        .build()
        .with(tabled::settings::Style::rounded())
        .to_string()
}

fn decorate(name: String, initial: bool, accepting: bool, ansi: bool) -> String {
    let marker = match (initial, accepting) {
        (true, true) => "→*",
        (true, false) => "→",
        (false, true) => "*",
        (false, false) => "",
    };
    let decorated = format!("{marker}{name}");
    if ansi && accepting {
        decorated.green().bold().to_string()
    } else {
        decorated
    }
}

impl TransitionTable for Nfa {
    fn table_columns(&self) -> Vec<String> {
        self.alphabet()
            .names()
            .map(str::to_string)
            .chain(std::iter::once(EPSILON.to_string()))
            .collect()
    }

    fn table_rows(&self, ansi: bool) -> Vec<Vec<String>> {
        let labels = self
            .alphabet()
            .universe()
            .map(Label::Symbol)
            .chain(std::iter::once(Label::Epsilon))
            .collect_vec();

        self.state_ids()
            .map(|q| {
                std::iter::once(decorate(
                    self.name(q).to_string(),
                    q == self.start(),
                    self.is_accepting(q),
                    ansi,
                ))
                .chain(labels.iter().map(|label| match self.targets(q, *label) {
                    Some(targets) if !targets.is_empty() => self.show_set(targets),
                    _ => "-".to_string(),
                }))
                .collect()
            })
            .collect()
    }
}

impl TransitionTable for Dfa {
    fn table_columns(&self) -> Vec<String> {
        self.alphabet().names().map(str::to_string).collect()
    }

    fn table_rows(&self, ansi: bool) -> Vec<Vec<String>> {
        self.state_ids()
            .map(|q| {
                std::iter::once(decorate(
                    self.state_label(q),
                    q == self.start(),
                    self.is_accepting(q),
                    ansi,
                ))
                .chain(
                    self.alphabet()
                        .universe()
                        .map(|a| self.state_label(self.successor(q, a))),
                )
                .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    fn nfa() -> Nfa {
        NfaBuilder::default()
            .with_states(["A", "B"])
            .with_alphabet(["a", "b"])
            .with_transitions([("A", "a", "A"), ("A", "a", "B"), ("B", "", "A")])
            .with_start("A")
            .with_accepting(["B"])
            .build()
            .unwrap()
    }

    #[test_log::test]
    fn nfa_rows_list_target_sets() {
        let rows = nfa().table_rows(false);
        assert_eq!(
            rows,
            vec![vec!["→A", "{A, B}", "-", "-"], vec!["*B", "-", "-", "{A}"]]
        );
        assert_eq!(nfa().table_columns(), vec!["a", "b", EPSILON]);
    }

    #[test]
    fn dfa_rows_are_total() {
        let dfa = nfa().determinize();
        let rows = dfa.table_rows(false);
        assert_eq!(rows.len(), dfa.size());
        assert!(rows
            .iter()
            .all(|row| row.len() == 1 + dfa.alphabet().size()));
        assert_eq!(rows[0], vec!["→{A}", "{A, B}", crate::SINK]);
        let table = dfa.transition_table();
        assert!(table.contains("State"));
        assert!(table.contains(crate::SINK));
        assert!(table.starts_with('╭'));
    }

    #[test]
    fn colors_only_when_asked() {
        let dfa = nfa().determinize();
        assert!(!dfa.transition_table().contains('\u{1b}'));
        assert!(dfa.colored_transition_table().contains('\u{1b}'));
    }
}
