//! Abstract syntax tree of a COOL program
//!
//! Nodes are built bottom-up by the parser and never change afterwards. Every name and
//! type is an [`Atom`]. Fragments that could not be parsed are kept in the tree as
//! `Unparsable` nodes carrying the diagnostic issued for them, so later phases can tell
//! a missing initializer (`ExprKind::NoExpr`) from a broken one.

use crate::{Atom, Diagnostic};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub classes: Vec<ClassEntry>,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassEntry {
    Class(Class),
    Unparsable(Unparsable),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    pub name: Atom,
    /// `Object` when the class has no `inherits` clause
    pub parent: Atom,
    pub features: Vec<Feature>,
    pub filename: Atom,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feature {
    Method(Method),
    Attribute(Attribute),
    Unparsable(Unparsable),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    pub name: Atom,
    pub formals: Vec<Formal>,
    pub return_type: Atom,
    pub body: Expr,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: Atom,
    pub type_decl: Atom,
    /// `ExprKind::NoExpr` when there is no initializer
    pub init: Expr,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formal {
    pub name: Atom,
    pub type_decl: Atom,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub name: Atom,
    pub type_decl: Atom,
    pub body: Expr,
    pub line: usize,
}

/// A construct replaced by recovery, with the diagnostic that started the recovery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unparsable {
    pub line: usize,
    pub diagnostic: Diagnostic,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expr {
    pub line: usize,
    pub kind: ExprKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    Plus,
    Sub,
    Mul,
    Divide,
    Lt,
    Leq,
    Eq,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprKind {
    IntConst(Atom),
    StrConst(Atom),
    BoolConst(bool),
    Object(Atom),
    Assign {
        name: Atom,
        value: Box<Expr>,
    },
    /// `receiver.method(args)`; a bare `method(args)` has an `Object(self)` receiver
    Dispatch {
        receiver: Box<Expr>,
        method: Atom,
        args: Vec<Expr>,
    },
    /// `receiver@type_name.method(args)`
    StaticDispatch {
        receiver: Box<Expr>,
        type_name: Atom,
        method: Atom,
        args: Vec<Expr>,
    },
    Cond {
        predicate: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },
    Loop {
        predicate: Box<Expr>,
        body: Box<Expr>,
    },
    /// Never empty
    Block(Vec<Expr>),
    /// A single binding; `let a:A, b:B in e` nests one `Let` per binding
    Let {
        name: Atom,
        type_decl: Atom,
        init: Box<Expr>,
        body: Box<Expr>,
    },
    /// Never has an empty branch list
    TypeCase {
        scrutinee: Box<Expr>,
        branches: Vec<Branch>,
    },
    New(Atom),
    IsVoid(Box<Expr>),
    /// Integer negation `~e`
    Complement(Box<Expr>),
    Not(Box<Expr>),
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Absent optional expression
    NoExpr,
    Unparsable(Unparsable),
}

impl Expr {
    pub fn new(line: usize, kind: ExprKind) -> Self {
        Expr { line, kind }
    }

    pub fn no_expr(line: usize) -> Self {
        Expr::new(line, ExprKind::NoExpr)
    }

    pub fn is_no_expr(&self) -> bool {
        match self.kind {
            ExprKind::NoExpr => true,
            _ => false,
        }
    }
}

impl Program {
    /// Well-formed classes, skipping unparsable ones
    pub fn classes(&self) -> impl Iterator<Item = &Class> {
        self.classes.iter().filter_map(|entry| match entry {
            ClassEntry::Class(class) => Some(class),
            ClassEntry::Unparsable(_) => None,
        })
    }

    /// Recovered fragments anywhere in the tree, in source order
    pub fn unparsable(&self) -> Vec<&Unparsable> {
        let mut found = Vec::new();
        for entry in self.classes.iter() {
            match entry {
                ClassEntry::Unparsable(u) => found.push(u),
                ClassEntry::Class(class) => {
                    for feature in class.features.iter() {
                        match feature {
                            Feature::Unparsable(u) => found.push(u),
                            Feature::Method(m) => m.body.collect_unparsable(&mut found),
                            Feature::Attribute(a) => a.init.collect_unparsable(&mut found),
                        }
                    }
                }
            }
        }
        found
    }
}

impl Expr {
    fn collect_unparsable<'a>(&'a self, found: &mut Vec<&'a Unparsable>) {
        match &self.kind {
            ExprKind::Unparsable(u) => found.push(u),
            ExprKind::IntConst(_)
            | ExprKind::StrConst(_)
            | ExprKind::BoolConst(_)
            | ExprKind::Object(_)
            | ExprKind::New(_)
            | ExprKind::NoExpr => {}
            ExprKind::Assign { value, .. } => value.collect_unparsable(found),
            ExprKind::Dispatch { receiver, args, .. }
            | ExprKind::StaticDispatch { receiver, args, .. } => {
                receiver.collect_unparsable(found);
                for arg in args {
                    arg.collect_unparsable(found);
                }
            }
            ExprKind::Cond {
                predicate,
                then_branch,
                else_branch,
            } => {
                predicate.collect_unparsable(found);
                then_branch.collect_unparsable(found);
                else_branch.collect_unparsable(found);
            }
            ExprKind::Loop { predicate, body } => {
                predicate.collect_unparsable(found);
                body.collect_unparsable(found);
            }
            ExprKind::Block(body) => {
                for expr in body {
                    expr.collect_unparsable(found);
                }
            }
            ExprKind::Let { init, body, .. } => {
                init.collect_unparsable(found);
                body.collect_unparsable(found);
            }
            ExprKind::TypeCase {
                scrutinee,
                branches,
            } => {
                scrutinee.collect_unparsable(found);
                for branch in branches {
                    branch.body.collect_unparsable(found);
                }
            }
            ExprKind::IsVoid(e) | ExprKind::Complement(e) | ExprKind::Not(e) => {
                e.collect_unparsable(found)
            }
            ExprKind::Binary { left, right, .. } => {
                left.collect_unparsable(found);
                right.collect_unparsable(found);
            }
        }
    }
}
