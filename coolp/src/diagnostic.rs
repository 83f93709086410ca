use std::fmt;

use crate::Token;

/// A reported lexical or syntax error
///
/// Displays in the format COOL graders expect:
/// `"<source>", line <N>: syntax error at or near <token>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub source_name: String,
    pub line: usize,
    pub message: String,
    /// Description of the offending token
    pub near: String,
}

impl Diagnostic {
    pub fn syntax_error(source_name: &str, token: &Token) -> Self {
        Diagnostic::at_token(source_name, "syntax error", token)
    }

    pub fn at_token(source_name: &str, message: &str, token: &Token) -> Self {
        Diagnostic {
            source_name: source_name.to_string(),
            line: token.line,
            message: message.to_string(),
            near: token.to_string(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(
            f,
            "\"{}\", line {}: {} at or near {}",
            self.source_name, self.line, self.message, self.near
        )
    }
}

/// Receiver of diagnostics, called once per reported error
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: &Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: &Diagnostic) {
        self.push(diagnostic.clone());
    }
}

/// Prints every diagnostic on its own line to stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn report(&mut self, diagnostic: &Diagnostic) {
        eprintln!("{}", diagnostic);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Terminal;

    #[test]
    fn test_format() {
        let diagnostic = Diagnostic::syntax_error("test.cl", &Token::new(Terminal::Else, 12));
        assert_eq!(
            diagnostic.to_string(),
            "\"test.cl\", line 12: syntax error at or near ELSE"
        );
    }
}
