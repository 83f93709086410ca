//! Parser for COOL, the Classroom Object-Oriented Language
//!
//! The parser is a table-driven LALR(1) automaton. Tokens are pulled from a
//! [`TokenSource`], every reduction runs a semantic action building the typed AST in
//! [`ast`], and syntax errors are recovered at class, feature, `let` binding and block
//! statement boundaries so that a single mistake does not hide the rest of a program.
//!
//! ```
//! use coolp::{parse_str, Diagnostic, ParserConfig};
//!
//! let mut diagnostics: Vec<Diagnostic> = Vec::new();
//! let program = parse_str(
//!     "class Main { main(): Int { 1 + 2 }; };",
//!     &mut diagnostics,
//!     &ParserConfig::default(),
//! )
//! .unwrap();
//! assert_eq!(program.classes.len(), 1);
//! assert!(diagnostics.is_empty());
//! ```

pub mod ast;
pub mod atom;
mod actions;
mod config;
mod diagnostic;
mod dump;
mod engine;
mod error;
pub mod extra;
mod recovery;
mod stack;
mod token;
mod traits;
mod unparse;

pub use crate::atom::{Atom, SymbolTable, ID_TABLE, INT_TABLE, STRING_TABLE};
pub use crate::config::ParserConfig;
pub use crate::diagnostic::{Diagnostic, DiagnosticSink, StderrSink};
pub use crate::engine::{parse, Parser};
pub use crate::error::ParseFailure;
pub use crate::recovery::{unwind, Resync};
pub use crate::stack::{ParseStack, StackOverflow};
pub use crate::token::{Token, TokenValue};
pub use crate::traits::TokenSource;

#[cfg(feature = "logos_support")]
pub use crate::extra::scanner::{parse_str, LexicalError, Scanner};

pub use coolp_core::{Action, Nonterminal, ParseTable, Production, StateId, Symbol, Terminal};
