//! Loader for the line-oriented machine definition format.
//!
//! A definition is UTF-8 text. Lines whose first non-whitespace character is
//! `#` are comments; blank lines are skipped. The remaining lines form seven
//! sections in a fixed order: states, input alphabet, tape alphabet, initial
//! state, blank symbol, accept states, and then one transition per line. A
//! first line of `MULTICINTA <k>` switches to the k-tape variant, whose
//! transition fields are comma-separated tuples of length k.
//!
//! Every error carries the 1-based line number of the offending line in the
//! original file, comments included.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::Path;

use lazy_static::lazy_static;
use log::debug;

use crate::common::{Motion, ValidationError};
use crate::mono::MonoMachine;
use crate::multi::MultiMachine;
use crate::transition::{MultiTransition, Transition};
use crate::TuringMachine;

/// First token of the header line that selects the k-tape format
const MULTI_HEADER: &str = "MULTICINTA";

lazy_static! {
    /// Multi-character tokens accepted where one symbol is expected
    static ref SYMBOL_ALIASES: HashMap<&'static str, char> = {
        let mut m = HashMap::with_capacity(2);
        m.insert("espacio", ' ');
        m.insert("space", ' ');
        m
    };
}

/// A Error type for errors returned by [`parse`](fn.parse.html).
/// Each variant expresses a particular error type and can be used to diagnose
/// format mistakes.
#[derive(Debug)]
pub enum ParsingError {
    /// Error encountered in interacting with `io`
    IO(io::Error),

    /// The file ended before the named section was read
    MissingSection(&'static str),

    /// The k-tape header line is malformed
    Header { line: usize, token: String },

    /// A multi-character token that is not a recognized symbol alias
    Symbol { line: usize, token: String },

    /// A movement token other than L, R or S
    Motion { line: usize, token: String },

    /// A line with the wrong number of whitespace-separated tokens
    TokenCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A comma-separated tuple whose length disagrees with the tape count
    TupleArity {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A line that breaks a structural rule (duplicate transition,
    /// undeclared state, blank used as an input symbol)
    Invalid { line: usize, source: ValidationError },

    /// The finished machine failed its structural check
    Validation(ValidationError),
}

impl From<io::Error> for ParsingError {
    fn from(err: io::Error) -> Self {
        ParsingError::IO(err)
    }
}

impl std::fmt::Display for ParsingError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ParsingError::IO(err) => write!(f, "io error: {}", err),
            ParsingError::MissingSection(section) => {
                write!(f, "file ended before the {} section", section)
            }
            ParsingError::Header { line, token } => write!(
                f,
                "line {}: malformed {} header near {:?}",
                line, MULTI_HEADER, token
            ),
            ParsingError::Symbol { line, token } => {
                write!(f, "line {}: {:?} does not denote a symbol", line, token)
            }
            ParsingError::Motion { line, token } => write!(
                f,
                "line {}: {:?} is not a movement (expected L, R or S)",
                line, token
            ),
            ParsingError::TokenCount {
                line,
                expected,
                found,
            } => write!(
                f,
                "line {}: expected {} tokens, found {}",
                line, expected, found
            ),
            ParsingError::TupleArity {
                line,
                expected,
                found,
            } => write!(
                f,
                "line {}: expected a tuple of {} fields, found {}",
                line, expected, found
            ),
            ParsingError::Invalid { line, source } => write!(f, "line {}: {}", line, source),
            ParsingError::Validation(source) => write!(f, "invalid machine: {}", source),
        }
    }
}

/// A successfully loaded definition of either kind. The surrounding driver
/// dispatches on the variant; both payloads implement
/// [`TuringMachine`](../trait.TuringMachine.html).
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedMachine {
    Mono(MonoMachine),
    Multi(MultiMachine),
}

impl ParsedMachine {
    pub fn tape_count(&self) -> usize {
        match self {
            ParsedMachine::Mono(m) => m.tape_count(),
            ParsedMachine::Multi(m) => m.tape_count(),
        }
    }
}

/// Parse a machine definition, auto-detecting the format from the first
/// non-comment line.
///
/// # Usage:
/// ```
/// use turing_sim::machine_parser::{parse, ParsedMachine};
///
/// // Ideally this will be read from a file
/// let definition = "par impar si\n0 1\n0 1 _\npar\n_\nsi\npar 0 impar 0 R\npar 1 par 1 R\nimpar 0 par 0 R\nimpar 1 impar 1 R\nimpar _ si _ S\n";
/// match parse(definition.as_bytes()) {
///     Ok(ParsedMachine::Mono(_)) => {}
///     other => panic!("expected a single-tape machine, got {:?}", other),
/// }
/// ```
/// Invalid definition:
/// ```
/// use turing_sim::machine_parser::parse;
///
/// let res = parse("some gibberish".as_bytes());
/// assert!(res.is_err());
/// ```
pub fn parse(source: impl Read) -> Result<ParsedMachine, ParsingError> {
    let lines = logical_lines(source)?;
    let is_multi = lines
        .first()
        .map(|(_, text)| text.split_whitespace().next() == Some(MULTI_HEADER))
        .unwrap_or(false);
    if is_multi {
        parse_multi_lines(&lines).map(ParsedMachine::Multi)
    } else {
        parse_mono_lines(&lines).map(ParsedMachine::Mono)
    }
}

/// Parse a definition known to be single-tape
pub fn parse_mono(source: impl Read) -> Result<MonoMachine, ParsingError> {
    let lines = logical_lines(source)?;
    parse_mono_lines(&lines)
}

/// Parse a definition known to be k-tape, `MULTICINTA` header included
pub fn parse_multi(source: impl Read) -> Result<MultiMachine, ParsingError> {
    let lines = logical_lines(source)?;
    parse_multi_lines(&lines)
}

/// Strip comments and blank lines, keeping the original 1-based line numbers
fn logical_lines(source: impl Read) -> Result<Vec<(usize, String)>, ParsingError> {
    let reader = BufReader::new(source);
    let mut lines = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        lines.push((index + 1, trimmed.to_string()));
    }
    Ok(lines)
}

fn take<'a>(
    lines: &mut std::slice::Iter<'a, (usize, String)>,
    section: &'static str,
) -> Result<(usize, Vec<&'a str>), ParsingError> {
    lines
        .next()
        .map(|(number, text)| (*number, text.split_whitespace().collect()))
        .ok_or(ParsingError::MissingSection(section))
}

/// One symbol: a single character, or one of the whitespace aliases
fn symbol_token(token: &str, line: usize) -> Result<char, ParsingError> {
    if let Some(&aliased) = SYMBOL_ALIASES.get(token) {
        return Ok(aliased);
    }
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ParsingError::Symbol {
            line,
            token: token.to_string(),
        }),
    }
}

fn motion_token(token: &str, line: usize) -> Result<Motion, ParsingError> {
    Motion::from_token(token).ok_or_else(|| ParsingError::Motion {
        line,
        token: token.to_string(),
    })
}

struct Sections<'a> {
    states: Vec<&'a str>,
    sigma: (usize, Vec<&'a str>),
    gamma: (usize, Vec<&'a str>),
    initial: &'a str,
    blank: char,
    accepts: Vec<&'a str>,
}

/// Read the six ordered header sections shared by both formats
fn take_sections<'a>(
    lines: &mut std::slice::Iter<'a, (usize, String)>,
) -> Result<Sections<'a>, ParsingError> {
    let (_, states) = take(lines, "states")?;
    let sigma = take(lines, "input alphabet")?;
    let gamma = take(lines, "tape alphabet")?;
    let (initial_line, initial_tokens) = take(lines, "initial state")?;
    let (blank_line, blank_tokens) = take(lines, "blank symbol")?;
    let (_, accepts) = take(lines, "accept states")?;

    if initial_tokens.len() != 1 {
        return Err(ParsingError::TokenCount {
            line: initial_line,
            expected: 1,
            found: initial_tokens.len(),
        });
    }
    if blank_tokens.len() != 1 {
        return Err(ParsingError::TokenCount {
            line: blank_line,
            expected: 1,
            found: blank_tokens.len(),
        });
    }
    let blank = symbol_token(blank_tokens[0], blank_line)?;
    let initial = initial_tokens[0];

    // the initial state must come from the declared set, whatever either
    // machine kind would otherwise tolerate
    if !states.contains(&initial) {
        return Err(ParsingError::Validation(ValidationError::UndeclaredState(
            initial.to_string(),
        )));
    }

    Ok(Sections {
        states,
        sigma,
        gamma,
        initial,
        blank,
        accepts,
    })
}

fn parse_mono_lines(lines: &[(usize, String)]) -> Result<MonoMachine, ParsingError> {
    let mut it = lines.iter();
    let sections = take_sections(&mut it)?;

    let mut machine = MonoMachine::new(sections.blank);
    for state in &sections.states {
        machine.add_state(state);
    }
    let (sigma_line, sigma_tokens) = sections.sigma;
    for token in sigma_tokens {
        let symbol = symbol_token(token, sigma_line)?;
        machine.add_input_symbol(symbol).map_err(|source| {
            ParsingError::Invalid {
                line: sigma_line,
                source,
            }
        })?;
    }
    let (gamma_line, gamma_tokens) = sections.gamma;
    for token in gamma_tokens {
        machine.add_tape_symbol(symbol_token(token, gamma_line)?);
    }
    machine.set_initial_state(sections.initial);
    for state in &sections.accepts {
        if !sections.states.contains(state) {
            return Err(ParsingError::Validation(ValidationError::UndeclaredState(
                state.to_string(),
            )));
        }
        machine.add_accept_state(state);
    }

    for (line, text) in it {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.len() != 5 {
            return Err(ParsingError::TokenCount {
                line: *line,
                expected: 5,
                found: tokens.len(),
            });
        }
        let transition = Transition::new(
            tokens[0].to_string(),
            symbol_token(tokens[1], *line)?,
            tokens[2].to_string(),
            symbol_token(tokens[3], *line)?,
            motion_token(tokens[4], *line)?,
        );
        machine
            .add_transition(transition)
            .map_err(|source| ParsingError::Invalid {
                line: *line,
                source,
            })?;
    }

    machine.validate().map_err(ParsingError::Validation)?;
    Ok(machine)
}

fn parse_multi_lines(lines: &[(usize, String)]) -> Result<MultiMachine, ParsingError> {
    let mut it = lines.iter();

    let (header_line, header_tokens) = take(&mut it, "tape count header")?;
    if header_tokens.len() != 2 || header_tokens[0] != MULTI_HEADER {
        return Err(ParsingError::Header {
            line: header_line,
            token: header_tokens.join(" "),
        });
    }
    let tapes = match header_tokens[1].parse::<usize>() {
        Ok(k) if k >= 1 => k,
        _ => {
            return Err(ParsingError::Header {
                line: header_line,
                token: header_tokens[1].to_string(),
            });
        }
    };

    let sections = take_sections(&mut it)?;

    let mut machine = MultiMachine::new(tapes, sections.blank);
    for state in &sections.states {
        machine.add_state(state);
    }
    let (sigma_line, sigma_tokens) = sections.sigma;
    for token in sigma_tokens {
        let symbol = symbol_token(token, sigma_line)?;
        machine.add_input_symbol(symbol).map_err(|source| {
            ParsingError::Invalid {
                line: sigma_line,
                source,
            }
        })?;
    }
    let (gamma_line, gamma_tokens) = sections.gamma;
    for token in gamma_tokens {
        machine.add_tape_symbol(symbol_token(token, gamma_line)?);
    }
    machine.set_initial_state(sections.initial);
    for state in &sections.accepts {
        machine.add_accept_state(state);
    }

    for (line, text) in it {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.len() != 5 {
            return Err(ParsingError::TokenCount {
                line: *line,
                expected: 5,
                found: tokens.len(),
            });
        }
        let reads = symbol_tuple(tokens[1], tapes, *line)?;
        let writes = symbol_tuple(tokens[3], tapes, *line)?;
        let motions = motion_tuple(tokens[4], tapes, *line)?;
        let transition = MultiTransition::new(
            tokens[0].to_string(),
            reads,
            tokens[2].to_string(),
            writes,
            motions,
        )
        .map_err(|source| ParsingError::Invalid {
            line: *line,
            source,
        })?;
        machine
            .add_transition(transition)
            .map_err(|source| ParsingError::Invalid {
                line: *line,
                source,
            })?;
    }

    machine.validate().map_err(ParsingError::Validation)?;
    Ok(machine)
}

fn symbol_tuple(token: &str, tapes: usize, line: usize) -> Result<Vec<char>, ParsingError> {
    let fields: Vec<&str> = token.split(',').collect();
    if fields.len() != tapes {
        return Err(ParsingError::TupleArity {
            line,
            expected: tapes,
            found: fields.len(),
        });
    }
    fields
        .into_iter()
        .map(|field| symbol_token(field, line))
        .collect()
}

fn motion_tuple(token: &str, tapes: usize, line: usize) -> Result<Vec<Motion>, ParsingError> {
    let fields: Vec<&str> = token.split(',').collect();
    if fields.len() != tapes {
        return Err(ParsingError::TupleArity {
            line,
            expected: tapes,
            found: fields.len(),
        });
    }
    fields
        .into_iter()
        .map(|field| motion_token(field, line))
        .collect()
}

/// Loads definition files and keeps the diagnostic of the most recent
/// failure around for callers that report it later. The slot is cleared at
/// the start of every load, so a stale diagnostic can never leak into the
/// next one.
#[derive(Debug, Default)]
pub struct MachineLoader {
    last_error: Option<String>,
}

impl MachineLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a definition file, auto-detecting the kind
    pub fn load_path(&mut self, path: &Path) -> Option<ParsedMachine> {
        self.last_error = None;
        debug!("loading machine definition from {:?}", path);
        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) => {
                self.last_error = Some(format!("cannot open {}: {}", path.display(), err));
                return None;
            }
        };
        self.load_reader(file)
    }

    /// Load a definition from any reader, auto-detecting the kind
    pub fn load_reader(&mut self, source: impl Read) -> Option<ParsedMachine> {
        self.last_error = None;
        match parse(source) {
            Ok(machine) => Some(machine),
            Err(err) => {
                self.last_error = Some(err.to_string());
                None
            }
        }
    }

    /// The diagnostic of the most recent failed load, if any
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_ref().map(String::as_str)
    }
}

/// Re-serialize a single-tape machine to the definition format, with sorted
/// sections so the output is deterministic. The whitespace symbol is written
/// back through its `espacio` alias.
pub fn save(machine: &MonoMachine, sink: &mut impl Write) -> io::Result<()> {
    let mut states: Vec<&String> = machine.states().iter().collect();
    states.sort();
    writeln!(
        sink,
        "{}",
        states
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    )?;

    writeln!(sink, "{}", sorted_symbols(machine.input_alphabet()))?;
    writeln!(sink, "{}", sorted_symbols(machine.tape_alphabet()))?;
    writeln!(sink, "{}", machine.initial_state())?;
    writeln!(sink, "{}", symbol_text(machine.blank()))?;

    let mut accepts: Vec<&String> = machine.accept_states().iter().collect();
    accepts.sort();
    writeln!(
        sink,
        "{}",
        accepts
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    )?;

    let mut entries: Vec<_> = machine.table().iter().collect();
    entries.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
    for (from, read, action) in entries {
        writeln!(
            sink,
            "{} {} {} {} {}",
            from,
            symbol_text(read),
            action.next_state(),
            symbol_text(action.writes()[0]),
            action.motions()[0]
        )?;
    }
    Ok(())
}

fn sorted_symbols(symbols: &std::collections::HashSet<char>) -> String {
    let mut sorted: Vec<char> = symbols.iter().copied().collect();
    sorted.sort();
    sorted
        .into_iter()
        .map(symbol_text)
        .collect::<Vec<_>>()
        .join(" ")
}

fn symbol_text(symbol: char) -> String {
    if symbol == ' ' {
        "espacio".to_string()
    } else {
        symbol.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Engine, SimulationResult};

    const ODD_ZEROS: &str = "\
# reconoce las palabras con un numero impar de ceros
par impar si
0 1
0 1 _
par
_
si
par 0 impar 0 R
par 1 par 1 R
impar 0 par 0 R
impar 1 impar 1 R
impar _ si _ S
";

    const TWO_TAPE_SUM: &str = "\
MULTICINTA 2
s t si
1 0
1 0 _
s
_
si
s 1,_ s 1,1 R,R
s 0,_ t 0,_ R,S
t 1,_ t 1,1 R,R
t _,_ si _,_ S,S
";

    #[test]
    fn valid_mono_definition() {
        let machine = parse_mono(ODD_ZEROS.as_bytes()).expect("the parse should have succeeded");

        assert_eq!(machine.states().len(), 3);
        assert_eq!(machine.initial_state(), "par");
        assert!(machine.is_accepting("si"));
        assert_eq!(machine.input_alphabet().len(), 2);
        assert!(machine.tape_alphabet().contains(&'_'));
        assert_eq!(machine.table().len(), 5);
        assert!(machine.is_valid());
    }

    #[test]
    fn parsed_mono_machine_runs() {
        let machine = parse_mono(ODD_ZEROS.as_bytes()).unwrap();
        let mut engine = Engine::new(&machine);
        assert_eq!(engine.simulate("0", false), SimulationResult::Accepted);
        assert_eq!(engine.simulate("00", false), SimulationResult::Rejected);
    }

    #[test]
    fn auto_detection_picks_the_kind() {
        match parse(ODD_ZEROS.as_bytes()).unwrap() {
            ParsedMachine::Mono(_) => {}
            other => panic!("expected mono, got {:?}", other),
        }
        match parse(TWO_TAPE_SUM.as_bytes()).unwrap() {
            ParsedMachine::Multi(m) => assert_eq!(m.tape_count(), 2),
            other => panic!("expected multi, got {:?}", other),
        }
    }

    #[test]
    fn parsed_multi_machine_runs() {
        let machine = parse_multi(TWO_TAPE_SUM.as_bytes()).unwrap();
        let mut engine = Engine::new(&machine);
        assert_eq!(engine.simulate("1110111", false), SimulationResult::Accepted);
        assert_eq!(engine.configuration().tapes()[1].content(), "111111");
    }

    #[test]
    fn empty_input_misses_the_first_section() {
        match parse("".as_bytes()) {
            Err(ParsingError::MissingSection("states")) => {}
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn four_token_transition_reports_its_line() {
        let text = "# comment\nq0 qa\na\na _\nq0\n_\nqa\nq0 a qa a\n";
        match parse_mono(text.as_bytes()) {
            Err(ParsingError::TokenCount {
                line: 8,
                expected: 5,
                found: 4,
            }) => {}
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn six_token_transition_reports_its_line() {
        let text = "q0 qa\na\na _\nq0\n_\nqa\nq0 a qa a R extra\n";
        match parse_mono(text.as_bytes()) {
            Err(ParsingError::TokenCount {
                line: 7,
                expected: 5,
                found: 6,
            }) => {}
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn undeclared_initial_state_fails_validation() {
        let text = "q0 qa\na\na _\nmissing\n_\nqa\n";
        match parse_mono(text.as_bytes()) {
            Err(ParsingError::Validation(ValidationError::UndeclaredState(state))) => {
                assert_eq!(state, "missing");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn blank_missing_from_tape_alphabet_fails_validation() {
        let text = "q0 qa\na\na b\nq0\n_\nqa\n";
        match parse_mono(text.as_bytes()) {
            Err(ParsingError::Validation(ValidationError::BlankNotInTapeAlphabet('_'))) => {}
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn multi_tuple_of_the_wrong_length_reports_its_line() {
        let text = "\
MULTICINTA 2
s si
1
1 _
s
_
si
s 1,_ si 1 R,R
";
        match parse_multi(text.as_bytes()) {
            Err(ParsingError::TupleArity {
                line: 8,
                expected: 2,
                found: 1,
            }) => {}
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn malformed_multi_header_is_rejected() {
        for header in &["MULTICINTA", "MULTICINTA zero", "MULTICINTA 0"] {
            let text = format!("{}\ns si\n1\n1 _\ns\n_\nsi\n", header);
            match parse_multi(text.as_bytes()) {
                Err(ParsingError::Header { line: 1, .. }) => {}
                other => panic!("unexpected outcome for {:?}: {:?}", header, other),
            }
        }
    }

    #[test]
    fn multi_character_symbol_token_is_rejected() {
        let text = "q0 qa\nab\na b _\nq0\n_\nqa\n";
        match parse_mono(text.as_bytes()) {
            Err(ParsingError::Symbol { line: 2, token }) => assert_eq!(token, "ab"),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn whitespace_aliases_denote_the_space_symbol() {
        let text = "q0 qa\na\na espacio\nq0\nespacio\nqa\nq0 a qa space R\n";
        let machine = parse_mono(text.as_bytes()).unwrap();
        assert_eq!(machine.blank(), ' ');
        assert!(machine.tape_alphabet().contains(&' '));
        let action = machine.table().lookup("q0", 'a').unwrap();
        assert_eq!(action.writes(), &[' ']);
    }

    #[test]
    fn bad_motion_token_is_rejected() {
        let text = "q0 qa\na\na _\nq0\n_\nqa\nq0 a qa a X\n";
        match parse_mono(text.as_bytes()) {
            Err(ParsingError::Motion { line: 7, token }) => assert_eq!(token, "X"),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn duplicate_transition_reports_its_line() {
        let text = "q0 qa\na\na _\nq0\n_\nqa\nq0 a qa a R\nq0 a q0 a L\n";
        match parse_mono(text.as_bytes()) {
            Err(ParsingError::Invalid {
                line: 8,
                source: ValidationError::DuplicateTransition(_),
            }) => {}
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn loader_records_the_last_failure() {
        let mut loader = MachineLoader::new();
        assert!(loader.load_reader("nonsense".as_bytes()).is_none());
        let diagnostic = loader.last_error().expect("a diagnostic should be kept");
        assert!(diagnostic.contains("section"));

        // a later success clears the slot
        assert!(loader.load_reader(ODD_ZEROS.as_bytes()).is_some());
        assert!(loader.last_error().is_none());
    }

    #[test]
    fn loader_reports_unreadable_paths() {
        let mut loader = MachineLoader::new();
        assert!(loader
            .load_path(Path::new("definitely/not/a/real/file.tm"))
            .is_none());
        assert!(loader.last_error().is_some());
    }

    #[test]
    fn save_round_trips_a_mono_machine() {
        let machine = parse_mono(ODD_ZEROS.as_bytes()).unwrap();
        let mut buffer = Vec::new();
        save(&machine, &mut buffer).unwrap();
        let reparsed = parse_mono(buffer.as_slice()).unwrap();
        assert_eq!(machine, reparsed);
    }

    #[test]
    fn save_uses_the_space_alias() {
        let text = "q0 qa\na\na espacio\nq0\nespacio\nqa\nq0 a qa espacio R\n";
        let machine = parse_mono(text.as_bytes()).unwrap();
        let mut buffer = Vec::new();
        save(&machine, &mut buffer).unwrap();
        let serialized = String::from_utf8(buffer).unwrap();
        assert!(serialized.contains("espacio"));
        let reparsed = parse_mono(serialized.as_bytes()).unwrap();
        assert_eq!(machine, reparsed);
    }
}
