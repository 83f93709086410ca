use std::fmt;

use crate::{Atom, Terminal};

/// Semantic value attached to a token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValue {
    None,
    /// Identifier, type name, integer or string literal
    Atom(Atom),
    Bool(bool),
    /// Message of a lexical error, carried by `Terminal::LexError` tokens
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: Terminal,
    pub value: TokenValue,
    pub line: usize,
}

impl Token {
    pub fn new(kind: Terminal, line: usize) -> Self {
        Token {
            kind,
            value: TokenValue::None,
            line,
        }
    }

    pub fn with_atom(kind: Terminal, atom: Atom, line: usize) -> Self {
        Token {
            kind,
            value: TokenValue::Atom(atom),
            line,
        }
    }

    pub fn boolean(value: bool, line: usize) -> Self {
        Token {
            kind: Terminal::BoolConst,
            value: TokenValue::Bool(value),
            line,
        }
    }

    pub fn error<S: Into<String>>(message: S, line: usize) -> Self {
        Token {
            kind: Terminal::LexError,
            value: TokenValue::Error(message.into()),
            line,
        }
    }

    /// The end-of-input token the parser synthesizes once the source runs dry
    pub fn end(line: usize) -> Self {
        Token::new(Terminal::End, line)
    }
}

/// Describes the token the way the classic COOL token printer does, e.g. `CLASS`,
/// `OBJECTID = foo`, `STR_CONST = "a\n"` or `';'`
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match (&self.kind, &self.value) {
            (Terminal::StrConst, TokenValue::Atom(atom)) => {
                write!(f, "{} = \"{}\"", self.kind, Escaped(atom.as_str()))
            }
            (Terminal::LexError, TokenValue::Error(message)) => {
                write!(f, "{} = \"{}\"", self.kind, Escaped(message))
            }
            (_, TokenValue::Atom(atom)) => write!(f, "{} = {}", self.kind, atom),
            (_, TokenValue::Bool(value)) => write!(f, "{} = {}", self.kind, value),
            _ => write!(f, "{}", self.kind),
        }
    }
}

/// Writes a string with COOL escapes; non-printable bytes become octal escapes
pub(crate) struct Escaped<'a>(pub &'a str);

impl<'a> fmt::Display for Escaped<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        for c in self.0.chars() {
            match c {
                '\\' => write!(f, "\\\\")?,
                '"' => write!(f, "\\\"")?,
                '\n' => write!(f, "\\n")?,
                '\t' => write!(f, "\\t")?,
                '\u{8}' => write!(f, "\\b")?,
                '\u{c}' => write!(f, "\\f")?,
                c if c.is_ascii_graphic() || c == ' ' => write!(f, "{}", c)?,
                c => {
                    let mut buf = [0; 4];
                    for byte in c.encode_utf8(&mut buf).bytes() {
                        write!(f, "\\{:03o}", byte)?;
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{ID_TABLE, STRING_TABLE};

    #[test]
    fn test_describe_tokens() {
        assert_eq!(Token::new(Terminal::Class, 1).to_string(), "CLASS");
        assert_eq!(Token::new(Terminal::Semicolon, 1).to_string(), "';'");
        assert_eq!(Token::end(3).to_string(), "EOF");
        assert_eq!(
            Token::with_atom(Terminal::ObjectId, ID_TABLE.intern("foo"), 1).to_string(),
            "OBJECTID = foo"
        );
        assert_eq!(Token::boolean(true, 1).to_string(), "BOOL_CONST = true");
        assert_eq!(
            Token::error("Unmatched *)", 2).to_string(),
            "ERROR = \"Unmatched *)\""
        );
    }

    #[test]
    fn test_describe_string_escapes() {
        let token = Token::with_atom(
            Terminal::StrConst,
            STRING_TABLE.intern("a\n\"b\"\t\\\u{1}"),
            1,
        );
        assert_eq!(token.to_string(), "STR_CONST = \"a\\n\\\"b\\\"\\t\\\\\\001\"");
    }
}
