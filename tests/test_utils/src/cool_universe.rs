//! Shared helpers for the integration test crates

use coolp::ast::{ClassEntry, Expr, ExprKind, Feature, Program};
use coolp::{
    parse, parse_str, Diagnostic, ParseFailure, ParserConfig, Terminal, Token, ID_TABLE,
    INT_TABLE, STRING_TABLE,
};

/// Outcome of a parse together with everything reported along the way
pub struct Parsed {
    pub result: Result<Program, ParseFailure>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Parsed {
    pub fn program(&self) -> &Program {
        match &self.result {
            Ok(program) => program,
            Err(failure) => panic!("expected a program, parse failed: {}", failure),
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.diagnostics.iter().map(|d| d.to_string()).collect()
    }
}

pub fn parse_source(source: &str) -> Parsed {
    parse_source_with(source, &ParserConfig::default().with_source_name("test.cl"))
}

pub fn parse_source_with(source: &str, config: &ParserConfig) -> Parsed {
    let mut diagnostics = Vec::new();
    let result = parse_str(source, &mut diagnostics, config);
    Parsed {
        result,
        diagnostics,
    }
}

/// Parses a bare token sequence, filling in placeholder lexemes
pub fn parse_terminals(kinds: &[Terminal]) -> Parsed {
    let mut diagnostics = Vec::new();
    let result = parse(
        terminals(kinds).into_iter(),
        &mut diagnostics,
        &ParserConfig::default(),
    );
    Parsed {
        result,
        diagnostics,
    }
}

/// One token per terminal, the i-th on line i + 1
pub fn terminals(kinds: &[Terminal]) -> Vec<Token> {
    kinds
        .iter()
        .enumerate()
        .map(|(i, kind)| {
            let line = i + 1;
            match kind {
                Terminal::TypeId => Token::with_atom(*kind, ID_TABLE.intern("T"), line),
                Terminal::ObjectId => Token::with_atom(*kind, ID_TABLE.intern("x"), line),
                Terminal::IntConst => Token::with_atom(*kind, INT_TABLE.intern("0"), line),
                Terminal::StrConst => Token::with_atom(*kind, STRING_TABLE.intern(""), line),
                Terminal::BoolConst => Token::boolean(true, line),
                Terminal::LexError => Token::error("?", line),
                _ => Token::new(*kind, line),
            }
        })
        .collect()
}

/// The tree dump with all `#line` lines removed
pub fn without_lines(dump: &str) -> String {
    dump.lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .map(|line| format!("{}\n", line))
        .collect()
}

/// Body of the `index`-th feature of the `class`-th entry, if that feature is a method
pub fn method_body(program: &Program, class: usize, index: usize) -> &Expr {
    match &program.classes[class] {
        ClassEntry::Class(class) => match &class.features[index] {
            Feature::Method(method) => &method.body,
            other => panic!("expected a method, found {:?}", other),
        },
        ClassEntry::Unparsable(u) => panic!("expected a class, found {:?}", u),
    }
}

pub fn is_unparsable(expr: &Expr) -> bool {
    match expr.kind {
        ExprKind::Unparsable(_) => true,
        _ => false,
    }
}
