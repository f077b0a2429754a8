use clap::{App, Arg};
use log::info;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::process;

use turing_sim::configuration::Configuration;
use turing_sim::engine::{Engine, EngineError, SimulationResult, DEFAULT_MAX_STEPS};
use turing_sim::machine_parser::{MachineLoader, ParsedMachine};
use turing_sim::TuringMachine;

/// Cells shown on each side of the head when rendering a tape
const RENDER_WINDOW: i64 = 10;

struct Options {
    trace: bool,
    strict: bool,
    max_steps: usize,
}

fn main() {
    let matches = App::new("turing_sim")
        .version("0.1")
        .about("Simulate a deterministic Turing machine over a batch of words")
        .arg(
            Arg::with_name("machine")
                .required(true)
                .index(1)
                .takes_value(true)
                .value_name("FILE")
                .help("The machine definition file to load"),
        )
        .arg(
            Arg::with_name("trace")
                .long("trace")
                .help("Emit the step-by-step trace after each word's result"),
        )
        .arg(
            Arg::with_name("words")
                .long("words")
                .takes_value(true)
                .value_name("FILE")
                .help("Read words from a file instead of stdin, one per line"),
        )
        .arg(
            Arg::with_name("strict")
                .long("strict")
                .help("Diagnose words with symbols outside the input alphabet"),
        )
        .arg(
            Arg::with_name("max-steps")
                .long("max-steps")
                .takes_value(true)
                .value_name("N")
                .help("Step budget per word; 0 means unbounded"),
        )
        .arg(
            Arg::with_name("info")
                .long("info")
                .help("Print a summary of the machine and exit"),
        )
        .get_matches();

    // Initialize the logger
    env_logger::init();

    let max_steps = match matches.value_of("max-steps") {
        Some(raw) => match raw.parse::<usize>() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("invalid --max-steps value: {}", raw);
                process::exit(1);
            }
        },
        None => DEFAULT_MAX_STEPS,
    };

    // Path is required, so it must be this
    let machine_path = matches.value_of("machine").unwrap();
    let mut loader = MachineLoader::new();
    let machine = match loader.load_path(Path::new(machine_path)) {
        Some(machine) => machine,
        None => {
            eprintln!(
                "{}",
                loader.last_error().unwrap_or("machine definition failed to load")
            );
            process::exit(2);
        }
    };

    info!(
        "loaded {} with {} tape(s)",
        machine_path,
        machine.tape_count()
    );

    if matches.is_present("info") {
        print_info(&machine);
        process::exit(0);
    }

    let words: Box<dyn BufRead> = match matches.value_of("words") {
        Some(path) => match File::open(path) {
            Ok(file) => Box::new(BufReader::new(file)),
            Err(err) => {
                eprintln!("cannot open words file {}: {}", path, err);
                process::exit(3);
            }
        },
        None => Box::new(BufReader::new(io::stdin())),
    };

    let options = Options {
        trace: matches.is_present("trace"),
        strict: matches.is_present("strict"),
        max_steps,
    };

    let exit_code = match &machine {
        ParsedMachine::Mono(m) => run(m, words, &options),
        ParsedMachine::Multi(m) => run(m, words, &options),
    };
    process::exit(exit_code);
}

/// Simulate every word in the batch, emitting one result token per word
/// followed by the final tape rendering. Returns the process exit code.
fn run<M>(machine: &M, words: Box<dyn BufRead>, options: &Options) -> i32
where
    M: TuringMachine,
{
    let mut engine = Engine::with_max_steps(machine, options.max_steps);

    for line in words.lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                eprintln!("error reading words: {}", err);
                return 3;
            }
        };
        // inner whitespace is stripped; a blank line is the empty word
        let word: String = line.chars().filter(|c| !c.is_whitespace()).collect();

        let result = engine.simulate(&word, options.trace);
        let shown = match (result, engine.last_error()) {
            (SimulationResult::Error, Some(EngineError::SymbolOutsideInputAlphabet(symbol))) => {
                if options.strict {
                    eprintln!(
                        "word {:?}: symbol {:?} is not in the input alphabet",
                        word, symbol
                    );
                    SimulationResult::Error
                } else {
                    SimulationResult::Rejected
                }
            }
            (SimulationResult::Error, Some(err)) => {
                eprintln!("{}", err);
                SimulationResult::Error
            }
            (other, _) => other,
        };

        println!("{}", shown);
        if options.trace {
            print_trace(engine.trace());
        }
        print_tapes(engine.configuration());
        info!("word {:?}: {} after {} steps", word, shown, engine.steps());
    }

    0
}

fn print_trace(trace: &[Configuration]) {
    for snapshot in trace {
        let tapes = snapshot
            .tapes()
            .iter()
            .map(|tape| tape.render(RENDER_WINDOW))
            .collect::<Vec<_>>()
            .join(" | ");
        println!("  {:>4} {} {}", snapshot.step_count(), snapshot.state(), tapes);
    }
}

fn print_tapes(configuration: &Configuration) {
    let tapes = configuration.tapes();
    if tapes.len() == 1 {
        println!("Cinta final: {}", tapes[0].render(RENDER_WINDOW));
    } else {
        println!("Cintas finales:");
        for tape in tapes {
            println!("{}", tape.render(RENDER_WINDOW));
        }
    }
}

fn print_info(machine: &ParsedMachine) {
    match machine {
        ParsedMachine::Mono(m) => {
            println!("Tipo: monocinta");
            print_summary(
                m.states(),
                m.input_alphabet(),
                m.tape_alphabet(),
                m.initial_state(),
                m.accept_states(),
                m.blank(),
                m.table().len(),
            );
        }
        ParsedMachine::Multi(m) => {
            println!("Tipo: multicinta ({} cintas)", m.tape_count());
            print_summary(
                m.states(),
                m.input_alphabet(),
                m.tape_alphabet(),
                m.initial_state(),
                m.accept_states(),
                m.blank(),
                m.table().len(),
            );
        }
    }
}

fn print_summary(
    states: &HashSet<String>,
    input_alphabet: &HashSet<char>,
    tape_alphabet: &HashSet<char>,
    initial: &str,
    accepts: &HashSet<String>,
    blank: char,
    transitions: usize,
) {
    println!("Estados: {}", sorted_names(states));
    println!("Estado inicial: {}", initial);
    println!("Estados de aceptacion: {}", sorted_names(accepts));
    println!("Simbolo blanco: {:?}", blank);
    println!("Alfabeto de entrada: {}", sorted_symbols(input_alphabet));
    println!("Alfabeto de cinta: {}", sorted_symbols(tape_alphabet));
    println!("Transiciones: {}", transitions);
}

fn sorted_names(names: &HashSet<String>) -> String {
    let mut sorted: Vec<&str> = names.iter().map(String::as_str).collect();
    sorted.sort();
    sorted.join(" ")
}

fn sorted_symbols(symbols: &HashSet<char>) -> String {
    let mut sorted: Vec<char> = symbols.iter().copied().collect();
    sorted.sort();
    sorted
        .into_iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
