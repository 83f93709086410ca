use std::fmt;

use crate::lalr::{Nonterminal, Symbol};

/// A grammar rule `lhs -> rhs`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    pub lhs: Nonterminal,
    pub rhs: &'static [Symbol],
}

impl Rule {
    /// Number of stack slots a reduction by this rule pops
    pub fn len(&self) -> usize {
        self.rhs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rhs.is_empty()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{} ->", self.lhs)?;
        if self.rhs.is_empty() {
            return write!(f, " %empty");
        }
        for symbol in self.rhs {
            write!(f, " {}", symbol)?;
        }
        Ok(())
    }
}

/// The productions of the COOL grammar, numbered as in the parse tables
///
/// Production 1 is the augmented start rule. The semantic action run on a reduction is
/// selected by matching on this enum.
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Production {
    /// `$accept: program $end`
    Accept = 1,
    Program = 2,
    ClassListSingle = 3,
    ClassListAppend = 4,
    Class = 5,
    ClassInherits = 6,
    /// `CLASS TYPEID { error } ;`
    ClassMalformedBody = 7,
    /// `CLASS error { feature_list } ;`
    ClassMalformedHeader = 8,
    /// `CLASS error { error } ;`
    ClassMalformed = 9,
    FeatureList = 10,
    FeatureListEmpty = 11,
    FeaturesSingle = 12,
    FeaturesAppend = 13,
    /// `error ;`
    FeaturesMalformed = 14,
    Method = 15,
    Attribute = 16,
    AttributeInit = 17,
    FormalsSingle = 18,
    FormalsAppend = 19,
    FormalsEmpty = 20,
    Formal = 21,
    Assign = 22,
    Dispatch = 23,
    StaticDispatch = 24,
    /// `OBJECTID ( args )`, a dispatch on `self`
    SelfDispatch = 25,
    Cond = 26,
    Loop = 27,
    Block = 28,
    Let = 29,
    TypeCase = 30,
    New = 31,
    IsVoid = 32,
    Plus = 33,
    Sub = 34,
    Mul = 35,
    Divide = 36,
    Complement = 37,
    Lt = 38,
    Leq = 39,
    Eq = 40,
    Not = 41,
    /// `( expr )`
    Paren = 42,
    Object = 43,
    IntConst = 44,
    StrConst = 45,
    BoolConst = 46,
    LetBinding = 47,
    LetBindingInit = 48,
    LetNested = 49,
    LetNestedInit = 50,
    /// `error IN expr`
    LetMalformed = 51,
    /// `error , let_expr`
    LetMalformedNested = 52,
    BlockSingle = 53,
    BlockAppend = 54,
    /// `error ;`
    BlockMalformed = 55,
    ArgsSingle = 56,
    ArgsAppend = 57,
    ArgsEmpty = 58,
    CaseBranchesSingle = 59,
    CaseBranchesAppend = 60,
    CaseBranch = 61,
}

impl Production {
    pub const COUNT: usize = 61;

    pub const ALL: [Production; Production::COUNT] = [
        Production::Accept,
        Production::Program,
        Production::ClassListSingle,
        Production::ClassListAppend,
        Production::Class,
        Production::ClassInherits,
        Production::ClassMalformedBody,
        Production::ClassMalformedHeader,
        Production::ClassMalformed,
        Production::FeatureList,
        Production::FeatureListEmpty,
        Production::FeaturesSingle,
        Production::FeaturesAppend,
        Production::FeaturesMalformed,
        Production::Method,
        Production::Attribute,
        Production::AttributeInit,
        Production::FormalsSingle,
        Production::FormalsAppend,
        Production::FormalsEmpty,
        Production::Formal,
        Production::Assign,
        Production::Dispatch,
        Production::StaticDispatch,
        Production::SelfDispatch,
        Production::Cond,
        Production::Loop,
        Production::Block,
        Production::Let,
        Production::TypeCase,
        Production::New,
        Production::IsVoid,
        Production::Plus,
        Production::Sub,
        Production::Mul,
        Production::Divide,
        Production::Complement,
        Production::Lt,
        Production::Leq,
        Production::Eq,
        Production::Not,
        Production::Paren,
        Production::Object,
        Production::IntConst,
        Production::StrConst,
        Production::BoolConst,
        Production::LetBinding,
        Production::LetBindingInit,
        Production::LetNested,
        Production::LetNestedInit,
        Production::LetMalformed,
        Production::LetMalformedNested,
        Production::BlockSingle,
        Production::BlockAppend,
        Production::BlockMalformed,
        Production::ArgsSingle,
        Production::ArgsAppend,
        Production::ArgsEmpty,
        Production::CaseBranchesSingle,
        Production::CaseBranchesAppend,
        Production::CaseBranch,
    ];

    /// Rule number as used by the reduce entries of the action table
    pub fn number(self) -> usize {
        self as usize
    }

    pub fn from_number(number: usize) -> Option<Production> {
        if number == 0 {
            return None;
        }
        Production::ALL.get(number - 1).copied()
    }

    pub fn rule(self) -> &'static Rule {
        &RULES[self.number() - 1]
    }

    pub fn lhs(self) -> Nonterminal {
        self.rule().lhs
    }

    /// Arity of the right-hand side
    pub fn len(self) -> usize {
        self.rule().len()
    }

    pub fn is_empty(self) -> bool {
        self.rule().is_empty()
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.rule())
    }
}

// Terminals are spelled in upper case and nonterminals in lower case, as in a yacc grammar.
#[allow(non_upper_case_globals)]
mod grammar_symbols {
    use crate::lalr::{Nonterminal, Symbol, Terminal};

    pub const END: Symbol = Symbol::Terminal(Terminal::End);
    pub const ERROR: Symbol = Symbol::Terminal(Terminal::Error);
    pub const CLASS: Symbol = Symbol::Terminal(Terminal::Class);
    pub const ELSE: Symbol = Symbol::Terminal(Terminal::Else);
    pub const FI: Symbol = Symbol::Terminal(Terminal::Fi);
    pub const IF: Symbol = Symbol::Terminal(Terminal::If);
    pub const IN: Symbol = Symbol::Terminal(Terminal::In);
    pub const INHERITS: Symbol = Symbol::Terminal(Terminal::Inherits);
    pub const LET: Symbol = Symbol::Terminal(Terminal::Let);
    pub const LOOP: Symbol = Symbol::Terminal(Terminal::Loop);
    pub const POOL: Symbol = Symbol::Terminal(Terminal::Pool);
    pub const THEN: Symbol = Symbol::Terminal(Terminal::Then);
    pub const WHILE: Symbol = Symbol::Terminal(Terminal::While);
    pub const CASE: Symbol = Symbol::Terminal(Terminal::Case);
    pub const ESAC: Symbol = Symbol::Terminal(Terminal::Esac);
    pub const OF: Symbol = Symbol::Terminal(Terminal::Of);
    pub const DARROW: Symbol = Symbol::Terminal(Terminal::Darrow);
    pub const NEW: Symbol = Symbol::Terminal(Terminal::New);
    pub const ISVOID: Symbol = Symbol::Terminal(Terminal::Isvoid);
    pub const STR_CONST: Symbol = Symbol::Terminal(Terminal::StrConst);
    pub const INT_CONST: Symbol = Symbol::Terminal(Terminal::IntConst);
    pub const BOOL_CONST: Symbol = Symbol::Terminal(Terminal::BoolConst);
    pub const TYPEID: Symbol = Symbol::Terminal(Terminal::TypeId);
    pub const OBJECTID: Symbol = Symbol::Terminal(Terminal::ObjectId);
    pub const ASSIGN: Symbol = Symbol::Terminal(Terminal::Assign);
    pub const NOT: Symbol = Symbol::Terminal(Terminal::Not);
    pub const LE: Symbol = Symbol::Terminal(Terminal::Le);
    pub const LT: Symbol = Symbol::Terminal(Terminal::Lt);
    pub const EQ: Symbol = Symbol::Terminal(Terminal::Eq);
    pub const PLUS: Symbol = Symbol::Terminal(Terminal::Plus);
    pub const MINUS: Symbol = Symbol::Terminal(Terminal::Minus);
    pub const STAR: Symbol = Symbol::Terminal(Terminal::Star);
    pub const SLASH: Symbol = Symbol::Terminal(Terminal::Slash);
    pub const TILDE: Symbol = Symbol::Terminal(Terminal::Tilde);
    pub const AT: Symbol = Symbol::Terminal(Terminal::At);
    pub const DOT: Symbol = Symbol::Terminal(Terminal::Dot);
    pub const LBRACE: Symbol = Symbol::Terminal(Terminal::LeftBrace);
    pub const RBRACE: Symbol = Symbol::Terminal(Terminal::RightBrace);
    pub const SEMI: Symbol = Symbol::Terminal(Terminal::Semicolon);
    pub const LPAREN: Symbol = Symbol::Terminal(Terminal::LeftParen);
    pub const RPAREN: Symbol = Symbol::Terminal(Terminal::RightParen);
    pub const COLON: Symbol = Symbol::Terminal(Terminal::Colon);
    pub const COMMA: Symbol = Symbol::Terminal(Terminal::Comma);
    pub const program: Symbol = Symbol::Nonterminal(Nonterminal::Program);
    pub const class_list: Symbol = Symbol::Nonterminal(Nonterminal::ClassList);
    pub const class: Symbol = Symbol::Nonterminal(Nonterminal::Class);
    pub const feature_list: Symbol = Symbol::Nonterminal(Nonterminal::FeatureList);
    pub const features: Symbol = Symbol::Nonterminal(Nonterminal::Features);
    pub const feature: Symbol = Symbol::Nonterminal(Nonterminal::Feature);
    pub const formals: Symbol = Symbol::Nonterminal(Nonterminal::Formals);
    pub const formal: Symbol = Symbol::Nonterminal(Nonterminal::Formal);
    pub const expr: Symbol = Symbol::Nonterminal(Nonterminal::Expr);
    pub const let_expr: Symbol = Symbol::Nonterminal(Nonterminal::LetExpr);
    pub const block_body: Symbol = Symbol::Nonterminal(Nonterminal::BlockBody);
    pub const args: Symbol = Symbol::Nonterminal(Nonterminal::Args);
    pub const case_branches: Symbol = Symbol::Nonterminal(Nonterminal::CaseBranches);
    pub const case_branch: Symbol = Symbol::Nonterminal(Nonterminal::CaseBranch);
}

use self::grammar_symbols::*;

static RULES: [Rule; Production::COUNT] = [
    // 1
    Rule { lhs: Nonterminal::Accept, rhs: &[program, END] },
    // 2
    Rule { lhs: Nonterminal::Program, rhs: &[class_list] },
    // 3
    Rule { lhs: Nonterminal::ClassList, rhs: &[class] },
    // 4
    Rule { lhs: Nonterminal::ClassList, rhs: &[class_list, class] },
    // 5
    Rule { lhs: Nonterminal::Class, rhs: &[CLASS, TYPEID, LBRACE, feature_list, RBRACE, SEMI] },
    // 6
    Rule {
        lhs: Nonterminal::Class,
        rhs: &[CLASS, TYPEID, INHERITS, TYPEID, LBRACE, feature_list, RBRACE, SEMI],
    },
    // 7
    Rule { lhs: Nonterminal::Class, rhs: &[CLASS, TYPEID, LBRACE, ERROR, RBRACE, SEMI] },
    // 8
    Rule { lhs: Nonterminal::Class, rhs: &[CLASS, ERROR, LBRACE, feature_list, RBRACE, SEMI] },
    // 9
    Rule { lhs: Nonterminal::Class, rhs: &[CLASS, ERROR, LBRACE, ERROR, RBRACE, SEMI] },
    // 10
    Rule { lhs: Nonterminal::FeatureList, rhs: &[features] },
    // 11
    Rule { lhs: Nonterminal::FeatureList, rhs: &[] },
    // 12
    Rule { lhs: Nonterminal::Features, rhs: &[feature, SEMI] },
    // 13
    Rule { lhs: Nonterminal::Features, rhs: &[features, feature, SEMI] },
    // 14
    Rule { lhs: Nonterminal::Features, rhs: &[ERROR, SEMI] },
    // 15
    Rule {
        lhs: Nonterminal::Feature,
        rhs: &[OBJECTID, LPAREN, formals, RPAREN, COLON, TYPEID, LBRACE, expr, RBRACE],
    },
    // 16
    Rule { lhs: Nonterminal::Feature, rhs: &[OBJECTID, COLON, TYPEID] },
    // 17
    Rule { lhs: Nonterminal::Feature, rhs: &[OBJECTID, COLON, TYPEID, ASSIGN, expr] },
    // 18
    Rule { lhs: Nonterminal::Formals, rhs: &[formal] },
    // 19
    Rule { lhs: Nonterminal::Formals, rhs: &[formals, COMMA, formal] },
    // 20
    Rule { lhs: Nonterminal::Formals, rhs: &[] },
    // 21
    Rule { lhs: Nonterminal::Formal, rhs: &[OBJECTID, COLON, TYPEID] },
    // 22
    Rule { lhs: Nonterminal::Expr, rhs: &[OBJECTID, ASSIGN, expr] },
    // 23
    Rule { lhs: Nonterminal::Expr, rhs: &[expr, DOT, OBJECTID, LPAREN, args, RPAREN] },
    // 24
    Rule { lhs: Nonterminal::Expr, rhs: &[expr, AT, TYPEID, DOT, OBJECTID, LPAREN, args, RPAREN] },
    // 25
    Rule { lhs: Nonterminal::Expr, rhs: &[OBJECTID, LPAREN, args, RPAREN] },
    // 26
    Rule { lhs: Nonterminal::Expr, rhs: &[IF, expr, THEN, expr, ELSE, expr, FI] },
    // 27
    Rule { lhs: Nonterminal::Expr, rhs: &[WHILE, expr, LOOP, expr, POOL] },
    // 28
    Rule { lhs: Nonterminal::Expr, rhs: &[LBRACE, block_body, RBRACE] },
    // 29
    Rule { lhs: Nonterminal::Expr, rhs: &[LET, let_expr] },
    // 30
    Rule { lhs: Nonterminal::Expr, rhs: &[CASE, expr, OF, case_branches, ESAC] },
    // 31
    Rule { lhs: Nonterminal::Expr, rhs: &[NEW, TYPEID] },
    // 32
    Rule { lhs: Nonterminal::Expr, rhs: &[ISVOID, expr] },
    // 33
    Rule { lhs: Nonterminal::Expr, rhs: &[expr, PLUS, expr] },
    // 34
    Rule { lhs: Nonterminal::Expr, rhs: &[expr, MINUS, expr] },
    // 35
    Rule { lhs: Nonterminal::Expr, rhs: &[expr, STAR, expr] },
    // 36
    Rule { lhs: Nonterminal::Expr, rhs: &[expr, SLASH, expr] },
    // 37
    Rule { lhs: Nonterminal::Expr, rhs: &[TILDE, expr] },
    // 38
    Rule { lhs: Nonterminal::Expr, rhs: &[expr, LT, expr] },
    // 39
    Rule { lhs: Nonterminal::Expr, rhs: &[expr, LE, expr] },
    // 40
    Rule { lhs: Nonterminal::Expr, rhs: &[expr, EQ, expr] },
    // 41
    Rule { lhs: Nonterminal::Expr, rhs: &[NOT, expr] },
    // 42
    Rule { lhs: Nonterminal::Expr, rhs: &[LPAREN, expr, RPAREN] },
    // 43
    Rule { lhs: Nonterminal::Expr, rhs: &[OBJECTID] },
    // 44
    Rule { lhs: Nonterminal::Expr, rhs: &[INT_CONST] },
    // 45
    Rule { lhs: Nonterminal::Expr, rhs: &[STR_CONST] },
    // 46
    Rule { lhs: Nonterminal::Expr, rhs: &[BOOL_CONST] },
    // 47
    Rule { lhs: Nonterminal::LetExpr, rhs: &[OBJECTID, COLON, TYPEID, IN, expr] },
    // 48
    Rule { lhs: Nonterminal::LetExpr, rhs: &[OBJECTID, COLON, TYPEID, ASSIGN, expr, IN, expr] },
    // 49
    Rule { lhs: Nonterminal::LetExpr, rhs: &[OBJECTID, COLON, TYPEID, COMMA, let_expr] },
    // 50
    Rule {
        lhs: Nonterminal::LetExpr,
        rhs: &[OBJECTID, COLON, TYPEID, ASSIGN, expr, COMMA, let_expr],
    },
    // 51
    Rule { lhs: Nonterminal::LetExpr, rhs: &[ERROR, IN, expr] },
    // 52
    Rule { lhs: Nonterminal::LetExpr, rhs: &[ERROR, COMMA, let_expr] },
    // 53
    Rule { lhs: Nonterminal::BlockBody, rhs: &[expr, SEMI] },
    // 54
    Rule { lhs: Nonterminal::BlockBody, rhs: &[block_body, expr, SEMI] },
    // 55
    Rule { lhs: Nonterminal::BlockBody, rhs: &[ERROR, SEMI] },
    // 56
    Rule { lhs: Nonterminal::Args, rhs: &[expr] },
    // 57
    Rule { lhs: Nonterminal::Args, rhs: &[args, COMMA, expr] },
    // 58
    Rule { lhs: Nonterminal::Args, rhs: &[] },
    // 59
    Rule { lhs: Nonterminal::CaseBranches, rhs: &[case_branch] },
    // 60
    Rule { lhs: Nonterminal::CaseBranches, rhs: &[case_branches, case_branch] },
    // 61
    Rule { lhs: Nonterminal::CaseBranch, rhs: &[OBJECTID, COLON, TYPEID, DARROW, expr, SEMI] },
];

#[cfg(test)]
mod test {
    use super::*;
    use crate::lalr::Terminal;

    #[test]
    fn test_production_numbers() {
        for (i, production) in Production::ALL.iter().enumerate() {
            assert_eq!(production.number(), i + 1);
            assert_eq!(Production::from_number(i + 1), Some(*production));
        }
        assert_eq!(Production::from_number(0), None);
        assert_eq!(Production::from_number(62), None);
    }

    #[test]
    fn test_rule_shapes() {
        assert_eq!(Production::Accept.lhs(), Nonterminal::Accept);
        assert_eq!(
            Production::Accept.rule().rhs.last(),
            Some(&Symbol::Terminal(Terminal::End))
        );
        assert_eq!(Production::ClassInherits.len(), 8);
        assert_eq!(Production::Method.len(), 9);
        assert_eq!(Production::LetMalformed.len(), 3);
        assert!(Production::FeatureListEmpty.is_empty());
        assert!(Production::FormalsEmpty.is_empty());
        assert!(Production::ArgsEmpty.is_empty());
        assert_eq!(Production::SelfDispatch.lhs(), Nonterminal::Expr);
        assert_eq!(Production::CaseBranch.lhs(), Nonterminal::CaseBranch);
    }

    #[test]
    fn test_error_productions() {
        let error = Symbol::Terminal(Terminal::Error);
        let with_error: Vec<_> = Production::ALL
            .iter()
            .filter(|p| p.rule().rhs.contains(&error))
            .copied()
            .collect();
        assert_eq!(
            with_error,
            vec![
                Production::ClassMalformedBody,
                Production::ClassMalformedHeader,
                Production::ClassMalformed,
                Production::FeaturesMalformed,
                Production::LetMalformed,
                Production::LetMalformedNested,
                Production::BlockMalformed,
            ]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Production::Paren.to_string(), "expr -> '(' expr ')'");
        assert_eq!(Production::ArgsEmpty.to_string(), "args -> %empty");
    }
}
