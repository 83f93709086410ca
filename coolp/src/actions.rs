//! Semantic actions, one per grammar production
//!
//! A reduction pops the right-hand side slots off the parser stacks and hands them to
//! [`reduce`] as an [`Rhs`]. The action moves the children out of their slots and
//! returns the value pushed for the left-hand side. Actions are pure apart from
//! interning the few names they need.

use std::mem;

use crate::ast::*;
use crate::atom::{self, names};
use crate::{Atom, Diagnostic, Production, TokenValue, STRING_TABLE};

/// Semantic value held in one stack slot
#[derive(Debug)]
pub(crate) enum Value {
    /// Bottom slot and slots whose value was already moved out
    Empty,
    Token(TokenValue),
    /// The `error` pseudo-token pushed by recovery
    Error(Diagnostic),
    Program(Program),
    Classes(Vec<ClassEntry>),
    Class(ClassEntry),
    Features(Vec<Feature>),
    Feature(Feature),
    Formals(Vec<Formal>),
    Formal(Formal),
    Expr(Expr),
    Exprs(Vec<Expr>),
    Branches(Vec<Branch>),
    Branch(Branch),
}

impl Value {
    fn kind(&self) -> &'static str {
        match self {
            Value::Empty => "empty",
            Value::Token(_) => "token",
            Value::Error(_) => "error",
            Value::Program(_) => "program",
            Value::Classes(_) => "class list",
            Value::Class(_) => "class",
            Value::Features(_) => "feature list",
            Value::Feature(_) => "feature",
            Value::Formals(_) => "formal list",
            Value::Formal(_) => "formal",
            Value::Expr(_) => "expression",
            Value::Exprs(_) => "expression list",
            Value::Branches(_) => "branch list",
            Value::Branch(_) => "branch",
        }
    }
}

/// Context shared by all actions of one parse
pub(crate) struct ActionEnv {
    pub filename: Atom,
    pub object: Atom,
    pub self_name: Atom,
}

impl ActionEnv {
    pub fn new(source_name: &str) -> Self {
        ActionEnv {
            filename: STRING_TABLE.intern(source_name),
            object: atom::id(names::OBJECT),
            self_name: atom::id(names::SELF),
        }
    }
}

/// The popped right-hand side of a reduction, bottom to top
pub(crate) struct Rhs {
    slots: Vec<(Value, usize)>,
}

macro_rules! take_as {
    ($name:ident, $variant:ident, $ty:ty) => {
        fn $name(&mut self, index: usize) -> $ty {
            match self.take(index) {
                Value::$variant(v) => v,
                other => mismatch(stringify!($variant), &other),
            }
        }
    };
}

impl Rhs {
    pub fn new(slots: Vec<(Value, usize)>) -> Self {
        Rhs { slots }
    }

    pub fn line(&self, index: usize) -> usize {
        self.slots[index].1
    }

    fn take(&mut self, index: usize) -> Value {
        mem::replace(&mut self.slots[index].0, Value::Empty)
    }

    fn atom(&mut self, index: usize) -> Atom {
        match self.take(index) {
            Value::Token(TokenValue::Atom(atom)) => atom,
            other => mismatch("Atom", &other),
        }
    }

    fn boolean(&mut self, index: usize) -> bool {
        match self.take(index) {
            Value::Token(TokenValue::Bool(value)) => value,
            other => mismatch("Bool", &other),
        }
    }

    take_as!(error, Error, Diagnostic);
    take_as!(classes, Classes, Vec<ClassEntry>);
    take_as!(class, Class, ClassEntry);
    take_as!(features, Features, Vec<Feature>);
    take_as!(feature, Feature, Feature);
    take_as!(formals, Formals, Vec<Formal>);
    take_as!(formal, Formal, Formal);
    take_as!(expr, Expr, Expr);
    take_as!(exprs, Exprs, Vec<Expr>);
    take_as!(branches, Branches, Vec<Branch>);
    take_as!(branch, Branch, Branch);

    fn boxed(&mut self, index: usize) -> Box<Expr> {
        Box::new(self.expr(index))
    }

    fn unparsable(&mut self, error_index: usize) -> Unparsable {
        Unparsable {
            line: self.line(0),
            diagnostic: self.error(error_index),
        }
    }
}

fn mismatch(expected: &str, found: &Value) -> ! {
    eprintln!(
        "Fatal error: Expected {} on the value stack, found {}.",
        expected,
        found.kind()
    );
    panic!("Fatal error: This is a bug in coolp. Please report this.");
}

/// Turns the value under a class-level resynchronization back into a class list
///
/// The skipped tokens become `unparsable`, unless the list already ends with an
/// unparsable class they are the rest of.
pub(crate) fn reopen_class_list(value: Value, unparsable: Unparsable) -> Value {
    let mut classes = match value {
        Value::Program(program) => program.classes,
        Value::Classes(classes) => classes,
        other => mismatch("class list", &other),
    };
    match classes.last() {
        Some(ClassEntry::Unparsable(_)) => {}
        _ => classes.push(ClassEntry::Unparsable(unparsable)),
    }
    Value::Classes(classes)
}

/// Runs the semantic action of `production`
pub(crate) fn reduce(production: Production, mut rhs: Rhs, env: &ActionEnv) -> Value {
    let line = if production.is_empty() { 0 } else { rhs.line(0) };
    match production {
        Production::Accept => mismatch("no reduction by the start rule", &Value::Empty),

        Production::Program => Value::Program(Program {
            classes: rhs.classes(0),
            line,
        }),

        Production::ClassListSingle => Value::Classes(vec![rhs.class(0)]),
        Production::ClassListAppend => {
            let mut classes = rhs.classes(0);
            classes.push(rhs.class(1));
            Value::Classes(classes)
        }

        Production::Class => Value::Class(ClassEntry::Class(Class {
            name: rhs.atom(1),
            parent: env.object.clone(),
            features: rhs.features(3),
            filename: env.filename.clone(),
            line,
        })),
        Production::ClassInherits => Value::Class(ClassEntry::Class(Class {
            name: rhs.atom(1),
            parent: rhs.atom(3),
            features: rhs.features(5),
            filename: env.filename.clone(),
            line,
        })),
        Production::ClassMalformedBody => Value::Class(ClassEntry::Unparsable(rhs.unparsable(3))),
        Production::ClassMalformedHeader | Production::ClassMalformed => {
            Value::Class(ClassEntry::Unparsable(rhs.unparsable(1)))
        }

        Production::FeatureList => Value::Features(rhs.features(0)),
        Production::FeatureListEmpty => Value::Features(Vec::new()),
        Production::FeaturesSingle => Value::Features(vec![rhs.feature(0)]),
        Production::FeaturesAppend => {
            let mut features = rhs.features(0);
            features.push(rhs.feature(1));
            Value::Features(features)
        }
        Production::FeaturesMalformed => {
            Value::Features(vec![Feature::Unparsable(rhs.unparsable(0))])
        }

        Production::Method => Value::Feature(Feature::Method(Method {
            name: rhs.atom(0),
            formals: rhs.formals(2),
            return_type: rhs.atom(5),
            body: rhs.expr(7),
            line,
        })),
        Production::Attribute => Value::Feature(Feature::Attribute(Attribute {
            name: rhs.atom(0),
            type_decl: rhs.atom(2),
            init: Expr::no_expr(line),
            line,
        })),
        Production::AttributeInit => Value::Feature(Feature::Attribute(Attribute {
            name: rhs.atom(0),
            type_decl: rhs.atom(2),
            init: rhs.expr(4),
            line,
        })),

        Production::FormalsSingle => Value::Formals(vec![rhs.formal(0)]),
        Production::FormalsAppend => {
            let mut formals = rhs.formals(0);
            formals.push(rhs.formal(2));
            Value::Formals(formals)
        }
        Production::FormalsEmpty => Value::Formals(Vec::new()),
        Production::Formal => Value::Formal(Formal {
            name: rhs.atom(0),
            type_decl: rhs.atom(2),
            line,
        }),

        Production::Assign => expr(
            line,
            ExprKind::Assign {
                name: rhs.atom(0),
                value: rhs.boxed(2),
            },
        ),
        Production::Dispatch => expr(
            line,
            ExprKind::Dispatch {
                receiver: rhs.boxed(0),
                method: rhs.atom(2),
                args: rhs.exprs(4),
            },
        ),
        Production::StaticDispatch => expr(
            line,
            ExprKind::StaticDispatch {
                receiver: rhs.boxed(0),
                type_name: rhs.atom(2),
                method: rhs.atom(4),
                args: rhs.exprs(6),
            },
        ),
        Production::SelfDispatch => expr(
            line,
            ExprKind::Dispatch {
                receiver: Box::new(Expr::new(line, ExprKind::Object(env.self_name.clone()))),
                method: rhs.atom(0),
                args: rhs.exprs(2),
            },
        ),
        Production::Cond => expr(
            line,
            ExprKind::Cond {
                predicate: rhs.boxed(1),
                then_branch: rhs.boxed(3),
                else_branch: rhs.boxed(5),
            },
        ),
        Production::Loop => expr(
            line,
            ExprKind::Loop {
                predicate: rhs.boxed(1),
                body: rhs.boxed(3),
            },
        ),
        Production::Block => expr(line, ExprKind::Block(rhs.exprs(1))),
        // The let bindings already built the nested `Let` nodes
        Production::Let => Value::Expr(rhs.expr(1)),
        Production::TypeCase => expr(
            line,
            ExprKind::TypeCase {
                scrutinee: rhs.boxed(1),
                branches: rhs.branches(3),
            },
        ),
        Production::New => expr(line, ExprKind::New(rhs.atom(1))),
        Production::IsVoid => expr(line, ExprKind::IsVoid(rhs.boxed(1))),
        Production::Plus => binary(&mut rhs, BinOp::Plus),
        Production::Sub => binary(&mut rhs, BinOp::Sub),
        Production::Mul => binary(&mut rhs, BinOp::Mul),
        Production::Divide => binary(&mut rhs, BinOp::Divide),
        Production::Complement => expr(line, ExprKind::Complement(rhs.boxed(1))),
        Production::Lt => binary(&mut rhs, BinOp::Lt),
        Production::Leq => binary(&mut rhs, BinOp::Leq),
        Production::Eq => binary(&mut rhs, BinOp::Eq),
        Production::Not => expr(line, ExprKind::Not(rhs.boxed(1))),
        Production::Paren => Value::Expr(rhs.expr(1)),
        Production::Object => expr(line, ExprKind::Object(rhs.atom(0))),
        Production::IntConst => expr(line, ExprKind::IntConst(rhs.atom(0))),
        Production::StrConst => expr(line, ExprKind::StrConst(rhs.atom(0))),
        Production::BoolConst => expr(line, ExprKind::BoolConst(rhs.boolean(0))),

        Production::LetBinding => let_binding(&mut rhs, Expr::no_expr(line), 4),
        Production::LetBindingInit => {
            let init = rhs.expr(4);
            let_binding(&mut rhs, init, 6)
        }
        Production::LetNested => let_binding(&mut rhs, Expr::no_expr(line), 4),
        Production::LetNestedInit => {
            let init = rhs.expr(4);
            let_binding(&mut rhs, init, 6)
        }
        Production::LetMalformed | Production::LetMalformedNested => {
            expr(line, ExprKind::Unparsable(rhs.unparsable(0)))
        }

        Production::BlockSingle => Value::Exprs(vec![rhs.expr(0)]),
        Production::BlockAppend => {
            let mut body = rhs.exprs(0);
            body.push(rhs.expr(1));
            Value::Exprs(body)
        }
        Production::BlockMalformed => {
            let unparsable = rhs.unparsable(0);
            Value::Exprs(vec![Expr::new(line, ExprKind::Unparsable(unparsable))])
        }

        Production::ArgsSingle => Value::Exprs(vec![rhs.expr(0)]),
        Production::ArgsAppend => {
            let mut args = rhs.exprs(0);
            args.push(rhs.expr(2));
            Value::Exprs(args)
        }
        Production::ArgsEmpty => Value::Exprs(Vec::new()),

        Production::CaseBranchesSingle => Value::Branches(vec![rhs.branch(0)]),
        Production::CaseBranchesAppend => {
            let mut branches = rhs.branches(0);
            branches.push(rhs.branch(1));
            Value::Branches(branches)
        }
        Production::CaseBranch => Value::Branch(Branch {
            name: rhs.atom(0),
            type_decl: rhs.atom(2),
            body: rhs.expr(4),
            line,
        }),
    }
}

fn expr(line: usize, kind: ExprKind) -> Value {
    Value::Expr(Expr::new(line, kind))
}

/// `expr op expr`, stamped with the line of the right operand
fn binary(rhs: &mut Rhs, op: BinOp) -> Value {
    expr(
        rhs.line(2),
        ExprKind::Binary {
            op,
            left: rhs.boxed(0),
            right: rhs.boxed(2),
        },
    )
}

/// `OBJECTID : TYPEID [<- init] (IN expr | , let_expr)`; the body sits at `body_index`
fn let_binding(rhs: &mut Rhs, init: Expr, body_index: usize) -> Value {
    expr(
        rhs.line(0),
        ExprKind::Let {
            name: rhs.atom(0),
            type_decl: rhs.atom(2),
            init: Box::new(init),
            body: rhs.boxed(body_index),
        },
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ID_TABLE;
    use matches::assert_matches;

    fn id(name: &str, line: usize) -> (Value, usize) {
        (Value::Token(TokenValue::Atom(ID_TABLE.intern(name))), line)
    }

    fn punct(line: usize) -> (Value, usize) {
        (Value::Token(TokenValue::None), line)
    }

    fn object(name: &str, line: usize) -> (Value, usize) {
        (
            Value::Expr(Expr::new(line, ExprKind::Object(ID_TABLE.intern(name)))),
            line,
        )
    }

    #[test]
    fn test_class_without_parent_inherits_object() {
        let env = ActionEnv::new("a.cl");
        let rhs = Rhs::new(vec![
            punct(1),
            id("A", 1),
            punct(1),
            (Value::Features(Vec::new()), 1),
            punct(2),
            punct(2),
        ]);
        match reduce(Production::Class, rhs, &env) {
            Value::Class(ClassEntry::Class(class)) => {
                assert_eq!(class.parent, ID_TABLE.intern("Object"));
                assert_eq!(class.filename, STRING_TABLE.intern("a.cl"));
                assert_eq!(class.line, 1);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_binary_takes_line_of_right_operand() {
        let env = ActionEnv::new("a.cl");
        let rhs = Rhs::new(vec![object("a", 3), punct(3), object("b", 4)]);
        match reduce(Production::Plus, rhs, &env) {
            Value::Expr(e) => {
                assert_eq!(e.line, 4);
                assert_matches!(e.kind, ExprKind::Binary { op: BinOp::Plus, .. });
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_self_dispatch() {
        let env = ActionEnv::new("a.cl");
        let rhs = Rhs::new(vec![
            id("f", 7),
            punct(7),
            (Value::Exprs(Vec::new()), 7),
            punct(7),
        ]);
        match reduce(Production::SelfDispatch, rhs, &env) {
            Value::Expr(Expr {
                kind: ExprKind::Dispatch { receiver, method, args },
                ..
            }) => {
                assert_eq!(receiver.kind, ExprKind::Object(ID_TABLE.intern("self")));
                assert_eq!(method, ID_TABLE.intern("f"));
                assert!(args.is_empty());
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_attribute_without_init() {
        let env = ActionEnv::new("a.cl");
        let rhs = Rhs::new(vec![id("x", 2), punct(2), id("Int", 2)]);
        match reduce(Production::Attribute, rhs, &env) {
            Value::Feature(Feature::Attribute(attr)) => assert!(attr.init.is_no_expr()),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    #[should_panic(expected = "This is a bug in coolp")]
    fn test_mismatched_value_panics() {
        let env = ActionEnv::new("a.cl");
        let rhs = Rhs::new(vec![punct(1)]);
        reduce(Production::Object, rhs, &env);
    }
}
