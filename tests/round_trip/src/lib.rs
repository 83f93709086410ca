#![cfg(test)]

use test_utils::{parse_source, without_lines};

const LIST: &str = r#"
class List inherits IO {
  item : Object;
  next : List;

  init(i : Object, n : List) : List {
    {
      item <- i;
      next <- n;
      self;
    }
  };

  flatten() : String {
    let string : String <-
      case item of
        i : Int => i2a(i);
        s : String => s;
        o : Object => { abort(); ""; };
      esac
    in
      if (isvoid next) then string else string.concat(next.flatten()) fi
  };
};

class Main inherits A2I {
  main() : Object {
    let hello : String <- "Hello\t\"world\"\n",
        n : Int <- ~(3 + 4) * 2 - 10 / 5,
        ok : Bool <- not (n <= 2) = true
    in {
      (new IO)@IO.out_string(hello);
      while 0 < n loop n <- n - 1 pool;
      out_string(i2a(n));
    }
  };
};
"#;

const ARITHMETIC: &str = "
class Main {
  a : Int <- 1 - (2 - 3) - 4;
  b : Int <- 1 * 2 + 3 * 4 / ~5;
  c : Bool <- a < b < c;
  d : Bool <- isvoid a.f(b)@B.g(c, d);
};
";

fn assert_round_trip(source: &str) {
    let first = parse_source(source);
    assert!(first.diagnostics.is_empty(), "{:?}", first.messages());
    let printed = first.program().to_string();

    let second = parse_source(&printed);
    assert!(
        second.diagnostics.is_empty(),
        "{:?}\n{}",
        second.messages(),
        printed
    );
    assert_eq!(
        without_lines(&first.program().dump()),
        without_lines(&second.program().dump()),
        "{}",
        printed
    );
    // Printing is a fixpoint after the first pass
    assert_eq!(printed, second.program().to_string());
}

#[test]
fn test_list_program() {
    assert_round_trip(LIST);
}

#[test]
fn test_operator_structure_survives() {
    assert_round_trip(ARITHMETIC);
}

#[test]
fn test_recovered_fragments_print_as_comments() {
    let parsed = parse_source("class A { x : Int <- ; y : Int; };");
    assert_eq!(parsed.diagnostics.len(), 1);
    let printed = parsed.program().to_string();
    assert!(printed.contains("(* unparsable, line 1: syntax error *)"));

    let reparsed = parse_source(&printed);
    assert!(reparsed.diagnostics.is_empty());
    let class = reparsed.program().classes().next().unwrap();
    assert_eq!(class.features.len(), 1);
    assert_eq!(class.features[0].to_string(), "y : Int");
}

#[test]
fn test_tree_dump() {
    let parsed = parse_source("class A {\n  f(x : Int) : Bool { x < 1 };\n};\n");
    let expected = r#"_program
  _class
    A
    Object
    "test.cl"
    (
    _method
      f
      _formal
        x
        Int
      Bool
      _lt
        _object
          x
        : _no_type
        _int
          1
        : _no_type
      : _no_type
    )
"#;
    assert_eq!(without_lines(&parsed.program().dump()), expected);
}
