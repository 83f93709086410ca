use std::fmt;

/// Terminal symbols of the COOL grammar
///
/// The discriminants are the symbol numbers the parse tables are indexed with. `Error` is the
/// pseudo-symbol shifted during error recovery and never produced by a scanner, whereas
/// `LexError` is the token a scanner emits for malformed input.
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Terminal {
    End = 0,
    Error = 1,
    Undefined = 2,
    Class = 3,
    Else = 4,
    Fi = 5,
    If = 6,
    In = 7,
    Inherits = 8,
    Let = 9,
    Loop = 10,
    Pool = 11,
    Then = 12,
    While = 13,
    Case = 14,
    Esac = 15,
    Of = 16,
    Darrow = 17,
    New = 18,
    Isvoid = 19,
    StrConst = 20,
    IntConst = 21,
    BoolConst = 22,
    TypeId = 23,
    ObjectId = 24,
    Assign = 25,
    Not = 26,
    Le = 27,
    LexError = 28,
    Lt = 29,
    Eq = 30,
    Plus = 31,
    Minus = 32,
    Star = 33,
    Slash = 34,
    Tilde = 35,
    At = 36,
    Dot = 37,
    LeftBrace = 38,
    RightBrace = 39,
    Semicolon = 40,
    LeftParen = 41,
    RightParen = 42,
    Colon = 43,
    Comma = 44,
}

impl Terminal {
    pub const COUNT: usize = 45;

    pub const ALL: [Terminal; Terminal::COUNT] = [
        Terminal::End,
        Terminal::Error,
        Terminal::Undefined,
        Terminal::Class,
        Terminal::Else,
        Terminal::Fi,
        Terminal::If,
        Terminal::In,
        Terminal::Inherits,
        Terminal::Let,
        Terminal::Loop,
        Terminal::Pool,
        Terminal::Then,
        Terminal::While,
        Terminal::Case,
        Terminal::Esac,
        Terminal::Of,
        Terminal::Darrow,
        Terminal::New,
        Terminal::Isvoid,
        Terminal::StrConst,
        Terminal::IntConst,
        Terminal::BoolConst,
        Terminal::TypeId,
        Terminal::ObjectId,
        Terminal::Assign,
        Terminal::Not,
        Terminal::Le,
        Terminal::LexError,
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
        Terminal::Semicolon,
        Terminal::LeftParen,
        Terminal::RightParen,
        Terminal::Colon,
        Terminal::Comma,
    ];

    /// Symbol number used as the column index of the action table
    pub fn number(self) -> usize {
        self as usize
    }

    /// Name used by the classic COOL token printer, e.g. `CLASS`, `OBJECTID` or `';'`
    pub fn name(self) -> &'static str {
        match self {
            Terminal::End => "EOF",
            Terminal::Error => "error",
            Terminal::Undefined => "$undefined",
            Terminal::Class => "CLASS",
            Terminal::Else => "ELSE",
            Terminal::Fi => "FI",
            Terminal::If => "IF",
            Terminal::In => "IN",
            Terminal::Inherits => "INHERITS",
            Terminal::Let => "LET",
            Terminal::Loop => "LOOP",
            Terminal::Pool => "POOL",
            Terminal::Then => "THEN",
            Terminal::While => "WHILE",
            Terminal::Case => "CASE",
            Terminal::Esac => "ESAC",
            Terminal::Of => "OF",
            Terminal::Darrow => "DARROW",
            Terminal::New => "NEW",
            Terminal::Isvoid => "ISVOID",
            Terminal::StrConst => "STR_CONST",
            Terminal::IntConst => "INT_CONST",
            Terminal::BoolConst => "BOOL_CONST",
            Terminal::TypeId => "TYPEID",
            Terminal::ObjectId => "OBJECTID",
            Terminal::Assign => "ASSIGN",
            Terminal::Not => "NOT",
            Terminal::Le => "LE",
            Terminal::LexError => "ERROR",
            Terminal::Lt => "'<'",
            Terminal::Eq => "'='",
            Terminal::Plus => "'+'",
            Terminal::Minus => "'-'",
            Terminal::Star => "'*'",
            Terminal::Slash => "'/'",
            Terminal::Tilde => "'~'",
            Terminal::At => "'@'",
            Terminal::Dot => "'.'",
            Terminal::LeftBrace => "'{'",
            Terminal::RightBrace => "'}'",
            Terminal::Semicolon => "';'",
            Terminal::LeftParen => "'('",
            Terminal::RightParen => "')'",
            Terminal::Colon => "':'",
            Terminal::Comma => "','",
        }
    }
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.name())
    }
}

/// Nonterminal symbols of the COOL grammar
///
/// `Accept` is the augmented start symbol `$accept -> program $end`.
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Nonterminal {
    Accept = 0,
    Program = 1,
    ClassList = 2,
    Class = 3,
    FeatureList = 4,
    Features = 5,
    Feature = 6,
    Formals = 7,
    Formal = 8,
    Expr = 9,
    LetExpr = 10,
    BlockBody = 11,
    Args = 12,
    CaseBranches = 13,
    CaseBranch = 14,
}

impl Nonterminal {
    pub const COUNT: usize = 15;

    pub const ALL: [Nonterminal; Nonterminal::COUNT] = [
        Nonterminal::Accept,
        Nonterminal::Program,
        Nonterminal::ClassList,
        Nonterminal::Class,
        Nonterminal::FeatureList,
        Nonterminal::Features,
        Nonterminal::Feature,
        Nonterminal::Formals,
        Nonterminal::Formal,
        Nonterminal::Expr,
        Nonterminal::LetExpr,
        Nonterminal::BlockBody,
        Nonterminal::Args,
        Nonterminal::CaseBranches,
        Nonterminal::CaseBranch,
    ];

    /// Column index of the goto table
    pub fn index(self) -> usize {
        self as usize
    }

    /// Symbol number, counted after the terminals
    pub fn number(self) -> usize {
        Terminal::COUNT + self.index()
    }

    pub fn name(self) -> &'static str {
        match self {
            Nonterminal::Accept => "$accept",
            Nonterminal::Program => "program",
            Nonterminal::ClassList => "class_list",
            Nonterminal::Class => "class",
            Nonterminal::FeatureList => "feature_list",
            Nonterminal::Features => "features",
            Nonterminal::Feature => "feature",
            Nonterminal::Formals => "formals",
            Nonterminal::Formal => "formal",
            Nonterminal::Expr => "expr",
            Nonterminal::LetExpr => "let_expr",
            Nonterminal::BlockBody => "block_body",
            Nonterminal::Args => "args",
            Nonterminal::CaseBranches => "case_branches",
            Nonterminal::CaseBranch => "case_branch",
        }
    }
}

impl fmt::Display for Nonterminal {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Terminal(Terminal),
    Nonterminal(Nonterminal),
}

impl Symbol {
    /// Inverse of `Terminal::number` and `Nonterminal::number`
    pub fn from_number(number: usize) -> Option<Symbol> {
        if number < Terminal::COUNT {
            Some(Symbol::Terminal(Terminal::ALL[number]))
        } else {
            Nonterminal::ALL
                .get(number - Terminal::COUNT)
                .map(|n| Symbol::Nonterminal(*n))
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt<'a>(&self, f: &mut fmt::Formatter<'a>) -> Result<(), fmt::Error> {
        match self {
            Symbol::Terminal(t) => write!(f, "{}", t),
            Symbol::Nonterminal(n) => write!(f, "{}", n),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_numbers_match_positions() {
        for (i, t) in Terminal::ALL.iter().enumerate() {
            assert_eq!(t.number(), i);
        }
        for (i, n) in Nonterminal::ALL.iter().enumerate() {
            assert_eq!(n.index(), i);
            assert_eq!(Symbol::from_number(n.number()), Some(Symbol::Nonterminal(*n)));
        }
        assert_eq!(Symbol::from_number(60), None);
    }
}
