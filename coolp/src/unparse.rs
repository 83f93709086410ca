//! Canonical COOL source for AST nodes
//!
//! Printing a tree and parsing the output again yields the same tree, apart from line
//! numbers. Compound operands are always parenthesized. Fragments replaced by error
//! recovery print as comments and do not survive the round trip.

use std::fmt;

use crate::ast::*;
use crate::atom::names;

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        for (i, entry) in self.classes.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            match entry {
                ClassEntry::Class(class) => write!(f, "{}", class)?,
                ClassEntry::Unparsable(u) => writeln!(f, "{}", u)?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "class {}", self.name)?;
        if self.parent.as_str() != names::OBJECT {
            write!(f, " inherits {}", self.parent)?;
        }
        writeln!(f, " {{")?;
        for feature in self.features.iter() {
            match feature {
                Feature::Unparsable(u) => writeln!(f, "    {}", u)?,
                _ => writeln!(f, "    {};", feature)?,
            }
        }
        writeln!(f, "}};")
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Feature::Method(method) => {
                write!(f, "{}(", method.name)?;
                for (i, formal) in method.formals.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{} : {}", formal.name, formal.type_decl)?;
                }
                write!(f, ") : {} {{ {} }}", method.return_type, method.body)
            }
            Feature::Attribute(attr) => {
                write!(f, "{} : {}", attr.name, attr.type_decl)?;
                if !attr.init.is_no_expr() {
                    write!(f, " <- {}", attr.init)?;
                }
                Ok(())
            }
            Feature::Unparsable(u) => write!(f, "{}", u),
        }
    }
}

impl fmt::Display for Unparsable {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "(* unparsable, line {}: {} *)", self.line, self.diagnostic.message)
    }
}

impl BinOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Plus => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Divide => "/",
            BinOp::Lt => "<",
            BinOp::Leq => "<=",
            BinOp::Eq => "=",
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol())
    }
}

/// An expression in operand position, parenthesized unless it delimits itself
struct Operand<'a>(&'a Expr);

impl<'a> fmt::Display for Operand<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self.0.kind {
            ExprKind::IntConst(_)
            | ExprKind::StrConst(_)
            | ExprKind::BoolConst(_)
            | ExprKind::Object(_)
            | ExprKind::Block(_)
            | ExprKind::Cond { .. }
            | ExprKind::Loop { .. }
            | ExprKind::TypeCase { .. } => write!(f, "{}", self.0),
            _ => write!(f, "({})", self.0),
        }
    }
}

/// A string literal using only the escapes the scanner reads back
struct Quoted<'a>(&'a str);

impl<'a> fmt::Display for Quoted<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "\"")?;
        for c in self.0.chars() {
            match c {
                '\\' => write!(f, "\\\\")?,
                '"' => write!(f, "\\\"")?,
                '\n' => write!(f, "\\n")?,
                '\t' => write!(f, "\\t")?,
                '\u{8}' => write!(f, "\\b")?,
                '\u{c}' => write!(f, "\\f")?,
                c => write!(f, "{}", c)?,
            }
        }
        write!(f, "\"")
    }
}

struct Args<'a>(&'a [Expr]);

impl<'a> fmt::Display for Args<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "(")?;
        for (i, arg) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", arg)?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match &self.kind {
            ExprKind::IntConst(value) => write!(f, "{}", value),
            ExprKind::StrConst(value) => write!(f, "{}", Quoted(value.as_str())),
            ExprKind::BoolConst(value) => write!(f, "{}", value),
            ExprKind::Object(name) => write!(f, "{}", name),
            ExprKind::Assign { name, value } => write!(f, "{} <- {}", name, Operand(value)),
            ExprKind::Dispatch {
                receiver,
                method,
                args,
            } => write!(f, "{}.{}{}", Operand(receiver), method, Args(args)),
            ExprKind::StaticDispatch {
                receiver,
                type_name,
                method,
                args,
            } => write!(
                f,
                "{}@{}.{}{}",
                Operand(receiver),
                type_name,
                method,
                Args(args)
            ),
            ExprKind::Cond {
                predicate,
                then_branch,
                else_branch,
            } => write!(
                f,
                "if {} then {} else {} fi",
                predicate, then_branch, else_branch
            ),
            ExprKind::Loop { predicate, body } => {
                write!(f, "while {} loop {} pool", predicate, body)
            }
            ExprKind::Block(body) => {
                write!(f, "{{ ")?;
                for expr in body {
                    match expr.kind {
                        ExprKind::Unparsable(_) => write!(f, "{} ", expr)?,
                        _ => write!(f, "{}; ", expr)?,
                    }
                }
                write!(f, "}}")
            }
            ExprKind::Let {
                name,
                type_decl,
                init,
                body,
            } => {
                write!(f, "let {} : {}", name, type_decl)?;
                if !init.is_no_expr() {
                    write!(f, " <- {}", Operand(init))?;
                }
                write!(f, " in {}", body)
            }
            ExprKind::TypeCase {
                scrutinee,
                branches,
            } => {
                write!(f, "case {} of ", scrutinee)?;
                for branch in branches {
                    write!(
                        f,
                        "{} : {} => {}; ",
                        branch.name, branch.type_decl, branch.body
                    )?;
                }
                write!(f, "esac")
            }
            ExprKind::New(type_name) => write!(f, "new {}", type_name),
            ExprKind::IsVoid(e) => write!(f, "isvoid {}", Operand(e)),
            ExprKind::Complement(e) => write!(f, "~{}", Operand(e)),
            ExprKind::Not(e) => write!(f, "not {}", Operand(e)),
            ExprKind::Binary { op, left, right } => {
                write!(f, "{} {} {}", Operand(left), op, Operand(right))
            }
            ExprKind::NoExpr => Ok(()),
            ExprKind::Unparsable(u) => write!(f, "{}", u),
        }
    }
}
