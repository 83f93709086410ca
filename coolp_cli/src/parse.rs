use std::error::Error;
use std::fmt;
use std::fs;

use coolp::ast::Program;
use coolp::{
    parse_str, Diagnostic, DiagnosticSink, ParseFailure, ParserConfig, Scanner, StderrSink,
};

pub struct ParseOptions {
    pub canonical: bool,
    pub max_errors: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            canonical: false,
            max_errors: ParserConfig::default().max_errors,
        }
    }
}

/// Reasons for stopping before any tree is printed
#[derive(Debug, PartialEq, Eq)]
pub enum Halted {
    /// More errors than `max_errors` were reported over all files together
    TooManyErrors { max_errors: usize },
    Errors,
}

impl fmt::Display for Halted {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Halted::TooManyErrors { max_errors } => write!(f, "More than {} errors", max_errors),
            Halted::Errors => write!(f, "Compilation halted due to lex and parse errors"),
        }
    }
}

impl Error for Halted {}

/// Forwards diagnostics and counts them across files
struct Counting<'a, D: ?Sized> {
    inner: &'a mut D,
    reported: usize,
}

impl<'a, D: DiagnosticSink + ?Sized> DiagnosticSink for Counting<'a, D> {
    fn report(&mut self, diagnostic: &Diagnostic) {
        self.reported += 1;
        self.inner.report(diagnostic);
    }
}

/// Parses `(filename, source)` pairs into a single program
///
/// The error threshold applies to all files together: each file only gets what the
/// files before it left of `options.max_errors`.
pub fn parse_sources<D>(
    sources: &[(&str, &str)],
    options: &ParseOptions,
    sink: &mut D,
) -> Result<Program, Halted>
where
    D: DiagnosticSink + ?Sized,
{
    let mut counting = Counting {
        inner: sink,
        reported: 0,
    };
    let mut failed = false;
    let mut program: Option<Program> = None;

    for (filename, source) in sources {
        let remaining = options.max_errors.saturating_sub(counting.reported);
        let config = ParserConfig::default()
            .with_source_name(*filename)
            .with_max_errors(remaining);
        match parse_str(source, &mut counting, &config) {
            Ok(parsed) => match program.as_mut() {
                Some(program) => program.classes.extend(parsed.classes),
                None => program = Some(parsed),
            },
            Err(ParseFailure::TooManyErrors { .. }) => {
                return Err(Halted::TooManyErrors {
                    max_errors: options.max_errors,
                });
            }
            Err(_) => failed = true,
        }
    }

    if failed || counting.reported > 0 {
        return Err(Halted::Errors);
    }
    Ok(program.unwrap_or(Program {
        classes: Vec::new(),
        line: 0,
    }))
}

/// Parses all files into a single program and prints it
pub fn parse_files(filenames: &[&str], options: &ParseOptions) -> Result<(), Box<dyn Error>> {
    let mut contents = Vec::with_capacity(filenames.len());
    for filename in filenames {
        contents.push(fs::read_to_string(filename)?);
    }
    let sources: Vec<(&str, &str)> = filenames
        .iter()
        .cloned()
        .zip(contents.iter().map(String::as_str))
        .collect();

    let program = parse_sources(&sources, options, &mut StderrSink)?;
    if options.canonical {
        print!("{}", program);
    } else {
        print!("{}", program.dump());
    }
    Ok(())
}

pub fn print_tokens(filename: &str) -> Result<(), Box<dyn Error>> {
    let source = fs::read_to_string(filename)?;
    for token in Scanner::new(&source) {
        println!("#{} {}", token.line, token);
    }
    Ok(())
}
