use std::error::Error;
use std::fmt;

use logos::Logos;

use crate::ast::Program;
use crate::{
    parse, DiagnosticSink, ParseFailure, ParserConfig, Terminal, Token, ID_TABLE, INT_TABLE,
    STRING_TABLE,
};

/// Longest string constant the scanner accepts, in characters
pub const MAX_STRING_LENGTH: usize = 1024;

/// A malformed lexeme, passed on to the parser as a `Terminal::LexError` token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexicalError {
    EofInComment,
    UnmatchedCommentClose,
    EofInString,
    UnterminatedString,
    StringTooLong,
    NullInString,
    EscapedNullInString,
    Unrecognized(char),
}

impl fmt::Display for LexicalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            LexicalError::EofInComment => write!(f, "EOF in comment"),
            LexicalError::UnmatchedCommentClose => write!(f, "Unmatched *)"),
            LexicalError::EofInString => write!(f, "EOF in string constant"),
            LexicalError::UnterminatedString => write!(f, "Unterminated string constant"),
            LexicalError::StringTooLong => write!(f, "String constant too long"),
            LexicalError::NullInString => write!(f, "String contains null character."),
            LexicalError::EscapedNullInString => {
                write!(f, "String contains escaped null character.")
            }
            LexicalError::Unrecognized(c) => write!(f, "{}", c),
        }
    }
}

impl Error for LexicalError {}

/// Lexemes recognized directly by the generated automaton
///
/// Comments and string literals only have their opening delimiter matched here; the
/// scanner consumes the rest by hand since both need nesting or escape handling.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\x0B\x0C]+")]
enum RawToken {
    #[token("\n")]
    Newline,
    #[regex(r"--[^\n]*")]
    LineComment,
    #[token("(*")]
    CommentOpen,
    #[token("*)")]
    CommentClose,
    #[token("\"")]
    Quote,

    #[regex(r"(?i:class)")]
    Class,
    #[regex(r"(?i:else)")]
    Else,
    #[regex(r"(?i:fi)")]
    Fi,
    #[regex(r"(?i:if)")]
    If,
    #[regex(r"(?i:in)")]
    In,
    #[regex(r"(?i:inherits)")]
    Inherits,
    #[regex(r"(?i:isvoid)")]
    Isvoid,
    #[regex(r"(?i:let)")]
    Let,
    #[regex(r"(?i:loop)")]
    Loop,
    #[regex(r"(?i:pool)")]
    Pool,
    #[regex(r"(?i:then)")]
    Then,
    #[regex(r"(?i:while)")]
    While,
    #[regex(r"(?i:case)")]
    Case,
    #[regex(r"(?i:esac)")]
    Esac,
    #[regex(r"(?i:new)")]
    New,
    #[regex(r"(?i:of)")]
    Of,
    #[regex(r"(?i:not)")]
    Not,
    // The first letter of a boolean must be lower case
    #[regex(r"t[rR][uU][eE]")]
    True,
    #[regex(r"f[aA][lL][sS][eE]")]
    False,

    #[regex(r"[0-9]+")]
    IntConst,
    #[regex(r"[A-Z][A-Za-z0-9_]*")]
    TypeId,
    #[regex(r"[a-z][A-Za-z0-9_]*")]
    ObjectId,

    #[token("=>")]
    Darrow,
    #[token("<-")]
    Assign,
    #[token("<=")]
    Le,
    #[token("<")]
    Lt,
    #[token("=")]
    Eq,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("~")]
    Tilde,
    #[token("@")]
    At,
    #[token(".")]
    Dot,
    #[token("{")]
    LeftBrace,
    #[token("}")]
    RightBrace,
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
}

impl RawToken {
    /// Terminal of lexemes that carry no value
    fn terminal(self) -> Option<Terminal> {
        let terminal = match self {
            RawToken::Class => Terminal::Class,
            RawToken::Else => Terminal::Else,
            RawToken::Fi => Terminal::Fi,
            RawToken::If => Terminal::If,
            RawToken::In => Terminal::In,
            RawToken::Inherits => Terminal::Inherits,
            RawToken::Isvoid => Terminal::Isvoid,
            RawToken::Let => Terminal::Let,
            RawToken::Loop => Terminal::Loop,
            RawToken::Pool => Terminal::Pool,
            RawToken::Then => Terminal::Then,
            RawToken::While => Terminal::While,
            RawToken::Case => Terminal::Case,
            RawToken::Esac => Terminal::Esac,
            RawToken::New => Terminal::New,
            RawToken::Of => Terminal::Of,
            RawToken::Not => Terminal::Not,
            RawToken::Darrow => Terminal::Darrow,
            RawToken::Assign => Terminal::Assign,
            RawToken::Le => Terminal::Le,
            RawToken::Lt => Terminal::Lt,
            RawToken::Eq => Terminal::Eq,
            RawToken::Plus => Terminal::Plus,
            RawToken::Minus => Terminal::Minus,
            RawToken::Star => Terminal::Star,
            RawToken::Slash => Terminal::Slash,
            RawToken::Tilde => Terminal::Tilde,
            RawToken::At => Terminal::At,
            RawToken::Dot => Terminal::Dot,
            RawToken::LeftBrace => Terminal::LeftBrace,
            RawToken::RightBrace => Terminal::RightBrace,
            RawToken::LeftParen => Terminal::LeftParen,
            RawToken::RightParen => Terminal::RightParen,
            RawToken::Semicolon => Terminal::Semicolon,
            RawToken::Colon => Terminal::Colon,
            RawToken::Comma => Terminal::Comma,
            _ => return None,
        };
        Some(terminal)
    }
}

/// COOL scanner built on `logos`
///
/// Yields one `Token` per lexeme, each stamped with the line it ends on. Lexical errors
/// become `Terminal::LexError` tokens so the parser can report and recover from them.
pub struct Scanner<'source> {
    lexer: logos::Lexer<'source, RawToken>,
    line: usize,
}

impl<'source> Scanner<'source> {
    pub fn new(source: &'source str) -> Self {
        Scanner {
            lexer: RawToken::lexer(source),
            line: 1,
        }
    }

    fn error(&self, error: LexicalError) -> Token {
        Token::error(error.to_string(), self.line)
    }

    /// Consumes a possibly nested comment after its opening `(*`
    fn block_comment(&mut self) -> Result<(), LexicalError> {
        let rest = self.lexer.remainder();
        let bytes = rest.as_bytes();
        let mut depth = 1;
        let mut i = 0;
        while i < bytes.len() {
            match (bytes[i], bytes.get(i + 1)) {
                (b'(', Some(b'*')) => {
                    depth += 1;
                    i += 2;
                }
                (b'*', Some(b')')) => {
                    depth -= 1;
                    i += 2;
                    if depth == 0 {
                        self.lexer.bump(i);
                        return Ok(());
                    }
                }
                (b'\n', _) => {
                    self.line += 1;
                    i += 1;
                }
                _ => i += 1,
            }
        }
        self.lexer.bump(rest.len());
        Err(LexicalError::EofInComment)
    }

    /// Consumes a string constant after its opening quote
    ///
    /// After an error the scanner resumes behind the closing quote or the offending end of
    /// line, reporting only the first problem of the constant.
    fn string_constant(&mut self) -> Result<String, LexicalError> {
        let rest = self.lexer.remainder();
        let mut value = String::new();
        let mut error = None;
        let mut chars = rest.char_indices();
        let consumed = loop {
            let (i, c) = match chars.next() {
                Some(next) => next,
                None => {
                    self.lexer.bump(rest.len());
                    return Err(error.unwrap_or(LexicalError::EofInString));
                }
            };
            match c {
                '"' => break i + 1,
                '\n' => {
                    self.line += 1;
                    self.lexer.bump(i + 1);
                    return Err(error.unwrap_or(LexicalError::UnterminatedString));
                }
                '\0' => {
                    error.get_or_insert(LexicalError::NullInString);
                }
                '\\' => match chars.next() {
                    None => {
                        self.lexer.bump(rest.len());
                        return Err(error.unwrap_or(LexicalError::EofInString));
                    }
                    Some((_, escaped)) => match escaped {
                        'n' => value.push('\n'),
                        't' => value.push('\t'),
                        'b' => value.push('\u{8}'),
                        'f' => value.push('\u{c}'),
                        '\0' => {
                            error.get_or_insert(LexicalError::EscapedNullInString);
                        }
                        '\n' => {
                            self.line += 1;
                            value.push('\n');
                        }
                        other => value.push(other),
                    },
                },
                other => value.push(other),
            }
        };
        self.lexer.bump(consumed);

        if let Some(error) = error {
            return Err(error);
        }
        if value.chars().count() > MAX_STRING_LENGTH {
            return Err(LexicalError::StringTooLong);
        }
        Ok(value)
    }
}

impl<'source> Iterator for Scanner<'source> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            let raw = match self.lexer.next()? {
                Ok(raw) => raw,
                Err(()) => {
                    let c = self.lexer.slice().chars().next().unwrap_or('\u{fffd}');
                    return Some(self.error(LexicalError::Unrecognized(c)));
                }
            };

            let token = match raw {
                RawToken::Newline => {
                    self.line += 1;
                    continue;
                }
                RawToken::LineComment => continue,
                RawToken::CommentOpen => match self.block_comment() {
                    Ok(()) => continue,
                    Err(error) => self.error(error),
                },
                RawToken::CommentClose => self.error(LexicalError::UnmatchedCommentClose),
                RawToken::Quote => match self.string_constant() {
                    Ok(value) => {
                        let atom = STRING_TABLE.intern(&value);
                        Token::with_atom(Terminal::StrConst, atom, self.line)
                    }
                    Err(error) => self.error(error),
                },
                RawToken::True => Token::boolean(true, self.line),
                RawToken::False => Token::boolean(false, self.line),
                RawToken::IntConst => {
                    let atom = INT_TABLE.intern(self.lexer.slice());
                    Token::with_atom(Terminal::IntConst, atom, self.line)
                }
                RawToken::TypeId => {
                    let atom = ID_TABLE.intern(self.lexer.slice());
                    Token::with_atom(Terminal::TypeId, atom, self.line)
                }
                RawToken::ObjectId => {
                    let atom = ID_TABLE.intern(self.lexer.slice());
                    Token::with_atom(Terminal::ObjectId, atom, self.line)
                }
                other => match other.terminal() {
                    Some(terminal) => Token::new(terminal, self.line),
                    None => continue,
                },
            };
            return Some(token);
        }
    }
}

/// Scans and parses COOL source text
pub fn parse_str<D>(
    source: &str,
    sink: &mut D,
    config: &ParserConfig,
) -> Result<Program, ParseFailure>
where
    D: DiagnosticSink + ?Sized,
{
    parse(Scanner::new(source), sink, config)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::TokenValue;

    fn kinds(source: &str) -> Vec<Terminal> {
        Scanner::new(source).map(|t| t.kind).collect()
    }

    fn errors(source: &str) -> Vec<(String, usize)> {
        Scanner::new(source)
            .filter_map(|t| match t.value {
                TokenValue::Error(message) => Some((message, t.line)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_keywords_ignore_case() {
        assert_eq!(
            kinds("CLASS Class inherits INHERITS iF Fi"),
            vec![
                Terminal::Class,
                Terminal::Class,
                Terminal::Inherits,
                Terminal::Inherits,
                Terminal::If,
                Terminal::Fi,
            ]
        );
    }

    #[test]
    fn test_booleans_need_lower_case_initial() {
        let tokens: Vec<_> = Scanner::new("true fALSE True").collect();
        assert_eq!(tokens[0].value, TokenValue::Bool(true));
        assert_eq!(tokens[1].value, TokenValue::Bool(false));
        assert_eq!(tokens[2].kind, Terminal::TypeId);
    }

    #[test]
    fn test_identifiers_and_integers() {
        let tokens: Vec<_> = Scanner::new("x1 Foo_bar 0042 self").collect();
        assert_eq!(tokens[0].to_string(), "OBJECTID = x1");
        assert_eq!(tokens[1].to_string(), "TYPEID = Foo_bar");
        assert_eq!(tokens[2].to_string(), "INT_CONST = 0042");
        assert_eq!(tokens[3].value, TokenValue::Atom(ID_TABLE.intern("self")));
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            kinds("=> <- <= < = + - * / ~ @ . { } ( ) ; : ,"),
            vec![
                Terminal::Darrow,
                Terminal::Assign,
                Terminal::Le,
                Terminal::Lt,
                Terminal::Eq,
                Terminal::Plus,
                Terminal::Minus,
                Terminal::Star,
                Terminal::Slash,
                Terminal::Tilde,
                Terminal::At,
                Terminal::Dot,
                Terminal::LeftBrace,
                Terminal::RightBrace,
                Terminal::LeftParen,
                Terminal::RightParen,
                Terminal::Semicolon,
                Terminal::Colon,
                Terminal::Comma,
            ]
        );
    }

    #[test]
    fn test_comments_and_lines() {
        let tokens: Vec<_> = Scanner::new("a -- comment\n(* outer (* inner *)\n *) b\nc").collect();
        let lines: Vec<_> = tokens.iter().map(|t| t.line).collect();
        assert_eq!(lines, vec![1, 3, 4]);
        assert!(tokens.iter().all(|t| t.kind == Terminal::ObjectId));
    }

    #[test]
    fn test_comment_errors() {
        assert_eq!(errors("x *) y"), vec![("Unmatched *)".to_string(), 1)]);
        assert_eq!(errors("(* open\n(* nested *)"), vec![("EOF in comment".to_string(), 2)]);
    }

    #[test]
    fn test_string_escapes() {
        let tokens: Vec<_> = Scanner::new("\"a\\tb\\nc\\\"d\\\\e\\qf\\\ng\"").collect();
        assert_eq!(tokens.len(), 1);
        assert_eq!(
            tokens[0].value,
            TokenValue::Atom(STRING_TABLE.intern("a\tb\nc\"d\\eqf\ng"))
        );
        assert_eq!(tokens[0].line, 2);
    }

    #[test]
    fn test_string_errors_resume() {
        assert_eq!(
            kinds("\"abc\nx"),
            vec![Terminal::LexError, Terminal::ObjectId]
        );
        assert_eq!(errors("\"abc\nx"), vec![("Unterminated string constant".to_string(), 2)]);
        assert_eq!(errors("\"a\0b\" x"), vec![("String contains null character.".to_string(), 1)]);
        assert_eq!(
            errors("\"a\\\0b\""),
            vec![("String contains escaped null character.".to_string(), 1)]
        );
        assert_eq!(errors("\"abc"), vec![("EOF in string constant".to_string(), 1)]);
        let long = format!("\"{}\" x", "a".repeat(MAX_STRING_LENGTH + 1));
        assert_eq!(errors(&long), vec![("String constant too long".to_string(), 1)]);
        let fits = format!("\"{}\"", "a".repeat(MAX_STRING_LENGTH));
        assert!(errors(&fits).is_empty());
    }

    #[test]
    fn test_unrecognized_character() {
        let tokens: Vec<_> = Scanner::new("a # b").collect();
        assert_eq!(tokens[1].to_string(), "ERROR = \"#\"");
        assert_eq!(tokens[2].kind, Terminal::ObjectId);
    }

    #[test]
    fn test_parse_str() {
        let mut diagnostics = Vec::new();
        let program = parse_str(
            "class Main inherits IO {\n  main() : Object { out_string(\"hi\") };\n};",
            &mut diagnostics,
            &ParserConfig::default(),
        )
        .unwrap();
        assert!(diagnostics.is_empty());
        assert_eq!(program.classes().next().unwrap().parent.as_str(), "IO");
    }
}
