#![cfg(test)]

use coolp::ast::{ClassEntry, ExprKind, Feature};
use coolp::{ParseFailure, ParserConfig, Terminal};
use matches::assert_matches;
use test_utils::{is_unparsable, method_body, parse_source, parse_source_with, parse_terminals};

#[test]
fn test_lexical_error_is_reported_like_a_syntax_error() {
    let parsed = parse_source("class A {\n  x : Int <- # ;\n  y : Int;\n};\n");
    assert_eq!(
        parsed.messages(),
        vec![r##""test.cl", line 2: syntax error at or near ERROR = "#""##.to_string()]
    );
    let program = parsed.program();
    match &program.classes[0] {
        ClassEntry::Class(class) => {
            assert_matches!(class.features[0], Feature::Unparsable(_));
            match &class.features[1] {
                Feature::Attribute(attr) => assert_eq!(attr.name.as_str(), "y"),
                other => panic!("unexpected feature {:?}", other),
            }
        }
        other => panic!("unexpected entry {:?}", other),
    }
}

#[test]
fn test_missing_parent_replaces_class() {
    let parsed = parse_source("class A inherits { };\nclass B { };\n");
    assert_eq!(
        parsed.messages(),
        vec![r#""test.cl", line 1: syntax error at or near '{'"#.to_string()]
    );
    let program = parsed.program();
    assert_eq!(program.classes.len(), 2);
    assert_matches!(program.classes[0], ClassEntry::Unparsable(_));
    let names: Vec<_> = program.classes().map(|c| c.name.as_str().to_owned()).collect();
    assert_eq!(names, vec!["B"]);
}

#[test]
fn test_errors_in_later_classes_are_independent() {
    let parsed = parse_source("class A { x : Int; } ; class B { y : ; }; class C inherits D { };");
    assert_eq!(parsed.diagnostics.len(), 1);
    let program = parsed.program();
    assert_eq!(program.classes().count(), 3);
    assert_eq!(program.unparsable().len(), 1);
    let c = program.classes().nth(2).unwrap();
    assert_eq!(c.parent.as_str(), "D");
}

#[test]
fn test_block_statement_line() {
    let parsed =
        parse_source("class A {\n  f() : Int {\n    {\n      x <- ;\n      y;\n    }\n  };\n};\n");
    assert_eq!(parsed.diagnostics.len(), 1);
    assert_eq!(parsed.diagnostics[0].line, 4);
    let body = method_body(parsed.program(), 0, 0);
    match &body.kind {
        ExprKind::Block(statements) => {
            assert_eq!(statements.len(), 2);
            assert!(is_unparsable(&statements[0]));
            assert_eq!(statements[0].line, 4);
            assert_matches!(statements[1].kind, ExprKind::Object(_));
        }
        other => panic!("unexpected body {:?}", other),
    }
}

#[test]
fn test_close_errors_are_reported_separately() {
    // Three tokens after the first error are shifted before the second one
    let parsed = parse_source("class A { f() : Int { { 1 + ; 2 * ; 3; } }; };");
    assert_eq!(parsed.diagnostics.len(), 2);
    let body = method_body(parsed.program(), 0, 0);
    match &body.kind {
        ExprKind::Block(statements) => {
            assert_eq!(statements.len(), 2);
            assert!(is_unparsable(&statements[0]));
        }
        other => panic!("unexpected body {:?}", other),
    }

    let parsed = parse_source("class A { f() : Int { { 1 + ; 2 ; 3; } }; };");
    assert_eq!(parsed.diagnostics.len(), 1);
    let body = method_body(parsed.program(), 0, 0);
    match &body.kind {
        ExprKind::Block(statements) => assert_eq!(statements.len(), 3),
        other => panic!("unexpected body {:?}", other),
    }
}

#[test]
fn test_later_let_bindings_are_dropped() {
    let parsed =
        parse_source("class A { f() : Int { let x : Int <- 1, y : Int <- , z : Int in z }; };");
    assert_eq!(parsed.diagnostics.len(), 1);
    match &method_body(parsed.program(), 0, 0).kind {
        ExprKind::Let { name, body, .. } => {
            assert_eq!(name.as_str(), "x");
            assert!(is_unparsable(body));
        }
        other => panic!("unexpected body {:?}", other),
    }
}

#[test]
fn test_bad_method_body_resumes_at_next_class() {
    let parsed = parse_source(
        "class A { };\nclass B {\n  f() : Int { 1 + };\n  g() : Int { 2 };\n};\nclass C { };\n",
    );
    assert_eq!(
        parsed.messages(),
        vec![r#""test.cl", line 3: syntax error at or near '}'"#.to_string()]
    );
    let program = parsed.program();
    assert_eq!(program.classes.len(), 3);
    assert_matches!(program.classes[1], ClassEntry::Unparsable(_));
    let names: Vec<_> = program.classes().map(|c| c.name.as_str().to_owned()).collect();
    assert_eq!(names, vec!["A", "C"]);
}

#[test]
fn test_rest_of_broken_class_is_skipped() {
    let parsed = parse_source("class A {\n  f() : Int { if x then y fi };\n  g() : Int { 1 };\n};\n");
    assert_eq!(
        parsed.messages(),
        vec![r#""test.cl", line 2: syntax error at or near FI"#.to_string()]
    );
    let program = parsed.program();
    assert_eq!(program.classes.len(), 1);
    assert_eq!(program.unparsable().len(), 1);
    assert_eq!(program.unparsable()[0].diagnostic, parsed.diagnostics[0]);
}

#[test]
fn test_end_of_input_while_recovering_aborts() {
    let parsed = parse_source("class A {\n  x : Int <- ");
    assert_eq!(parsed.result, Err(ParseFailure::Aborted { errors: 1 }));
    assert_eq!(parsed.diagnostics[0].near, "EOF");
    assert_eq!(parsed.diagnostics[0].line, 2);
}

#[test]
fn test_configured_error_threshold() {
    let source = "class B { x : ; };\nclass C { y : ; };\nclass D { z : ; };\n";
    let config = ParserConfig::default().with_max_errors(2);
    let parsed = parse_source_with(source, &config);
    assert_eq!(parsed.result, Err(ParseFailure::TooManyErrors { errors: 3 }));
    assert_eq!(parsed.diagnostics.len(), 3);
    assert_eq!(
        parsed.result.unwrap_err().to_string(),
        "More than 2 errors"
    );

    let config = ParserConfig::default().with_max_errors(3);
    let parsed = parse_source_with(source, &config);
    assert_eq!(parsed.program().unparsable().len(), 3);
}

#[test]
fn test_garbage_after_last_class() {
    let parsed = parse_terminals(&[
        Terminal::Class,
        Terminal::TypeId,
        Terminal::LeftBrace,
        Terminal::RightBrace,
        Terminal::Semicolon,
        Terminal::ObjectId,
    ]);
    assert_eq!(parsed.diagnostics.len(), 1);
    assert_eq!(parsed.diagnostics[0].near, "OBJECTID = x");
    assert_eq!(parsed.diagnostics[0].line, 6);
    let program = parsed.program();
    assert_eq!(program.classes.len(), 2);
    match &program.classes[1] {
        ClassEntry::Unparsable(unparsable) => assert_eq!(unparsable.line, 6),
        other => panic!("unexpected entry {:?}", other),
    }
}
