use std::{io::BufReader, process::ExitCode};

use determinize::{input, prelude::*};

use tracing::{debug, error, trace};
use tracing_subscriber::{filter, prelude::*};

use clap::{Arg, ArgAction, ArgMatches, Command};

fn cli() -> clap::Command {
    Command::new("determinize")
        .about("Reads an NFA definition and converts it into a DFA using the subset construction")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .help("file containing the definition, stdin is used if absent"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_parser(["all", "table", "summary", "dot"])
                .default_value("all")
                .help("what to print: transition tables, DFA summary, DOT, or all but DOT"),
        )
        .arg(
            Arg::new("ansi")
                .long("ansi")
                .action(ArgAction::SetTrue)
                .help("highlight accepting states in transition tables"),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbosity")
                .num_args(0..=1)
                .require_equals(true)
                .value_parser(["info", "debug", "trace"])
                .default_missing_value("info"),
        )
}

fn setup_logging(matches: &ArgMatches) {
    let level = match matches
        .try_get_one::<String>("verbosity")
        .ok()
        .flatten()
        .map(|m| m.as_str())
    {
        Some("trace") => filter::LevelFilter::TRACE,
        Some("debug") => filter::LevelFilter::DEBUG,
        Some("info") => filter::LevelFilter::INFO,
        _ => filter::LevelFilter::WARN,
    };

    let stderr_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(stderr_log.with_filter(level))
        .init();

    trace!("setup {level} logging");
}

fn read(matches: &ArgMatches) -> Result<Nfa, InputError> {
    match matches.get_one::<String>("input") {
        Some(path) => {
            debug!("reading definition from {path}");
            let file = std::fs::File::open(path)?;
            input::read_nfa(BufReader::new(file))
        }
        None => {
            debug!("reading definition from stdin");
            input::read_nfa(std::io::stdin().lock())
        }
    }
}

fn table<T: TransitionTable>(automaton: &T, ansi: bool) -> String {
    if ansi {
        automaton.colored_transition_table()
    } else {
        automaton.transition_table()
    }
}

pub fn main() -> ExitCode {
    let matches = cli().get_matches();

    setup_logging(&matches);

    let nfa = match read(&matches) {
        Ok(nfa) => nfa,
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let start = std::time::Instant::now();
    let dfa = nfa.determinize();
    debug!("determinization took {}µs", start.elapsed().as_micros());

    let ansi = matches.get_flag("ansi");
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("all");

    if matches!(format, "all" | "table") {
        println!("NFA transition table:\n{}", table(&nfa, ansi));
        println!("DFA transition table:\n{}", table(&dfa, ansi));
    }
    if matches!(format, "all" | "summary") {
        println!("DFA:\n{dfa}");
    }
    if format == "dot" {
        println!("{}", nfa.dot_representation());
        println!("{}", dfa.dot_representation());
    }

    ExitCode::SUCCESS
}
