//! The indented tree dump COOL course tools exchange between phases
//!
//! Every node starts with its `#line`, followed by its `_kind` and its children indented
//! two more spaces. Expressions end with their static type, which is always `_no_type`
//! right after parsing.

use crate::ast::*;
use crate::token::Escaped;

impl Program {
    pub fn dump(&self) -> String {
        let mut out = String::new();
        Dumper { out: &mut out }.program(self, 0);
        out
    }
}

struct Dumper<'a> {
    out: &'a mut String,
}

impl<'a> Dumper<'a> {
    fn line(&mut self, indent: usize, text: &str) {
        self.out.extend(std::iter::repeat(' ').take(indent));
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn header(&mut self, indent: usize, line: usize, kind: &str) {
        self.line(indent, &format!("#{}", line));
        self.line(indent, kind)
    }

    fn program(&mut self, program: &Program, n: usize) {
        self.header(n, program.line, "_program");
        for entry in program.classes.iter() {
            match entry {
                ClassEntry::Class(class) => self.class(class, n + 2),
                ClassEntry::Unparsable(u) => self.unparsable(u, n + 2),
            }
        }
    }

    fn class(&mut self, class: &Class, n: usize) {
        self.header(n, class.line, "_class");
        self.line(n + 2, class.name.as_str());
        self.line(n + 2, class.parent.as_str());
        self.line(n + 2, &format!("\"{}\"", Escaped(class.filename.as_str())));
        self.line(n + 2, "(");
        for feature in class.features.iter() {
            match feature {
                Feature::Method(method) => {
                    self.header(n + 2, method.line, "_method");
                    self.line(n + 4, method.name.as_str());
                    for formal in method.formals.iter() {
                        self.header(n + 4, formal.line, "_formal");
                        self.line(n + 6, formal.name.as_str());
                        self.line(n + 6, formal.type_decl.as_str());
                    }
                    self.line(n + 4, method.return_type.as_str());
                    self.expr(&method.body, n + 4);
                }
                Feature::Attribute(attr) => {
                    self.header(n + 2, attr.line, "_attr");
                    self.line(n + 4, attr.name.as_str());
                    self.line(n + 4, attr.type_decl.as_str());
                    self.expr(&attr.init, n + 4);
                }
                Feature::Unparsable(u) => self.unparsable(u, n + 2),
            }
        }
        self.line(n + 2, ")")
    }

    fn unparsable(&mut self, u: &Unparsable, n: usize) {
        self.header(n, u.line, "_unparsable")
    }

    fn exprs(&mut self, exprs: &[Expr], n: usize) {
        for e in exprs {
            self.expr(e, n);
        }
    }

    fn expr(&mut self, e: &Expr, n: usize) {
        let kind = match &e.kind {
            ExprKind::IntConst(_) => "_int",
            ExprKind::StrConst(_) => "_string",
            ExprKind::BoolConst(_) => "_bool",
            ExprKind::Object(_) => "_object",
            ExprKind::Assign { .. } => "_assign",
            ExprKind::Dispatch { .. } => "_dispatch",
            ExprKind::StaticDispatch { .. } => "_static_dispatch",
            ExprKind::Cond { .. } => "_cond",
            ExprKind::Loop { .. } => "_loop",
            ExprKind::Block(_) => "_block",
            ExprKind::Let { .. } => "_let",
            ExprKind::TypeCase { .. } => "_typcase",
            ExprKind::New(_) => "_new",
            ExprKind::IsVoid(_) => "_isvoid",
            ExprKind::Complement(_) => "_neg",
            ExprKind::Not(_) => "_comp",
            ExprKind::Binary { op, .. } => match op {
                BinOp::Plus => "_plus",
                BinOp::Sub => "_sub",
                BinOp::Mul => "_mul",
                BinOp::Divide => "_divide",
                BinOp::Lt => "_lt",
                BinOp::Leq => "_leq",
                BinOp::Eq => "_eq",
            },
            ExprKind::NoExpr => "_no_expr",
            ExprKind::Unparsable(_) => "_unparsable",
        };
        self.header(n, e.line, kind);

        let m = n + 2;
        match &e.kind {
            ExprKind::IntConst(value) => self.line(m, value.as_str()),
            ExprKind::StrConst(value) => {
                self.line(m, &format!("\"{}\"", Escaped(value.as_str())))
            }
            ExprKind::BoolConst(value) => self.line(m, if *value { "1" } else { "0" }),
            ExprKind::Object(name) | ExprKind::New(name) => self.line(m, name.as_str()),
            ExprKind::Assign { name, value } => {
                self.line(m, name.as_str());
                self.expr(value, m);
            }
            ExprKind::Dispatch {
                receiver,
                method,
                args,
            } => {
                self.expr(receiver, m);
                self.line(m, method.as_str());
                self.line(m, "(");
                self.exprs(args, m);
                self.line(m, ")");
            }
            ExprKind::StaticDispatch {
                receiver,
                type_name,
                method,
                args,
            } => {
                self.expr(receiver, m);
                self.line(m, type_name.as_str());
                self.line(m, method.as_str());
                self.line(m, "(");
                self.exprs(args, m);
                self.line(m, ")");
            }
            ExprKind::Cond {
                predicate,
                then_branch,
                else_branch,
            } => {
                self.expr(predicate, m);
                self.expr(then_branch, m);
                self.expr(else_branch, m);
            }
            ExprKind::Loop { predicate, body } => {
                self.expr(predicate, m);
                self.expr(body, m);
            }
            ExprKind::Block(body) => self.exprs(body, m),
            ExprKind::Let {
                name,
                type_decl,
                init,
                body,
            } => {
                self.line(m, name.as_str());
                self.line(m, type_decl.as_str());
                self.expr(init, m);
                self.expr(body, m);
            }
            ExprKind::TypeCase {
                scrutinee,
                branches,
            } => {
                self.expr(scrutinee, m);
                for branch in branches {
                    self.header(m, branch.line, "_branch");
                    self.line(m + 2, branch.name.as_str());
                    self.line(m + 2, branch.type_decl.as_str());
                    self.expr(&branch.body, m + 2);
                }
            }
            ExprKind::IsVoid(operand) | ExprKind::Complement(operand) | ExprKind::Not(operand) => {
                self.expr(operand, m)
            }
            ExprKind::Binary { left, right, .. } => {
                self.expr(left, m);
                self.expr(right, m);
            }
            ExprKind::NoExpr | ExprKind::Unparsable(_) => {}
        }
        self.line(n, ": _no_type")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Diagnostic, ID_TABLE, INT_TABLE, STRING_TABLE};

    #[test]
    fn test_dump_attribute() {
        let program = Program {
            line: 1,
            classes: vec![ClassEntry::Class(Class {
                name: ID_TABLE.intern("A"),
                parent: ID_TABLE.intern("Object"),
                features: vec![Feature::Attribute(Attribute {
                    name: ID_TABLE.intern("x"),
                    type_decl: ID_TABLE.intern("Int"),
                    init: Expr::new(
                        2,
                        ExprKind::Complement(Box::new(Expr::new(
                            2,
                            ExprKind::IntConst(INT_TABLE.intern("4")),
                        ))),
                    ),
                    line: 2,
                })],
                filename: STRING_TABLE.intern("a.cl"),
                line: 1,
            })],
        };
        let expected = "\
#1
_program
  #1
  _class
    A
    Object
    \"a.cl\"
    (
    #2
    _attr
      x
      Int
      #2
      _neg
        #2
        _int
          4
        : _no_type
      : _no_type
    )
";
        assert_eq!(program.dump(), expected);
    }

    #[test]
    fn test_dump_unparsable_class() {
        let diagnostic = Diagnostic {
            source_name: "a.cl".to_owned(),
            line: 3,
            message: "syntax error".to_owned(),
            near: "'}'".to_owned(),
        };
        let program = Program {
            line: 1,
            classes: vec![
                ClassEntry::Unparsable(Unparsable {
                    line: 3,
                    diagnostic,
                }),
                ClassEntry::Class(Class {
                    name: ID_TABLE.intern("C"),
                    parent: ID_TABLE.intern("Object"),
                    features: Vec::new(),
                    filename: STRING_TABLE.intern("a.cl"),
                    line: 6,
                }),
            ],
        };
        let expected = "\
#1
_program
  #3
  _unparsable
  #6
  _class
    C
    Object
    \"a.cl\"
    (
    )
";
        assert_eq!(program.dump(), expected);
    }
}
