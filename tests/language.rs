use std::fs;

use stone::{RuntimeError, interpreter::value::core::Value, run};

fn eval(source: &str) -> Value {
    run(source).unwrap_or_else(|e| panic!("Script failed: {e}"))
}

fn eval_int(source: &str) -> i32 {
    match eval(source) {
        Value::Integer(n) => n,
        other => panic!("expected integer result, got {other:?}"),
    }
}

fn eval_string(source: &str) -> String {
    match eval(source) {
        Value::Str(text) => text.to_string(),
        other => panic!("expected string result, got {other:?}"),
    }
}

fn eval_is_null(source: &str) -> bool {
    matches!(eval(source), Value::Null)
}

fn runtime_error(source: &str) -> RuntimeError {
    match run(source) {
        Ok(value) => panic!("Script succeeded with {value:?} but was expected to fail"),
        Err(e) => *e.downcast::<RuntimeError>().expect("expected a runtime error"),
    }
}

fn parse_error(source: &str) -> stone::ParseError {
    match run(source) {
        Ok(value) => panic!("Script succeeded with {value:?} but was expected to fail"),
        Err(e) => *e.downcast::<stone::ParseError>().expect("expected a parse error"),
    }
}

#[test]
fn arithmetic_and_precedence() {
    assert_eq!(eval_int("1 + 2 * 3"), 7);
    assert_eq!(eval_int("(1 + 2) * 3"), 9);
    assert_eq!(eval_int("10 - 2 - 3"), 5);
    assert_eq!(eval_int("10 / 3"), 3);
    assert_eq!(eval_int("7 % 3"), 1);
    assert_eq!(eval_int("2 * -3"), -6);
    assert_eq!(eval_int("-5 + 3"), -2);
}

#[test]
fn modulo_follows_host_semantics() {
    assert_eq!(eval_int("x = 0 - 7; x % 3"), -1);
}

#[test]
fn addition_round_trip() {
    assert_eq!(eval_int("x = 12345; y = 678; x + y - y == x"), 1);
}

#[test]
fn newlines_separate_statements() {
    assert_eq!(eval_int("even = 0\n\nodd = 1\neven + odd"), 1);
    // A trailing newline parses as a null statement and does not clobber
    // the program result.
    assert_eq!(eval_int("1 + 2\n"), 3);
    assert_eq!(eval_int("1 + 2;;; 4"), 4);
}

#[test]
fn assignment_is_right_associative() {
    assert_eq!(eval_int("a = b = 7; a + b"), 14);
    assert_eq!(eval_int("(a = 3) + 2"), 5);
}

#[test]
fn assignment_to_non_place_is_an_error() {
    assert!(matches!(runtime_error("1 = 2"),
                     RuntimeError::InvalidAssignment { line: 1 }));
    assert!(matches!(runtime_error("a + b = 2"),
                     RuntimeError::InvalidAssignment { .. }));
}

#[test]
fn if_and_else_branches() {
    assert_eq!(eval_int("if 1 { 10 } else { 20 }"), 10);
    assert_eq!(eval_int("if 0 { 10 } else { 20 }"), 20);
    assert_eq!(eval_int("x = 5; if x < 3 { 1 } else if x < 10 { 2 } else { 3 }"),
               2);
    assert!(eval_is_null("if 0 { 1 }"));
}

#[test]
fn while_loops() {
    assert_eq!(eval_int("i = 0; while i < 3 { i = i + 1 }"), 3);
    assert!(eval_is_null("while 0 { 1 }"));
}

#[test]
fn counting_evens_and_odds() {
    let source = "even = 0; odd = 0; i = 1; while i < 10 { if i % 2 == 0 { even = even + 1 } \
                  else { odd = odd + 1 }; i = i + 1 }; even + odd";

    assert_eq!(eval_int(source), 9);
}

#[test]
fn recursive_functions() {
    let source = "def fact(n) { if n < 2 { 1 } else { n * fact(n - 1) } }; fact(5)";

    assert_eq!(eval_int(source), 120);
}

#[test]
fn closures_capture_their_defining_scope() {
    let source = "def counter() { cnt = 0; fun() { cnt = cnt + 1 } }; c = counter(); c(); c(); \
                  c()";

    assert_eq!(eval_int(source), 3);
}

#[test]
fn each_closure_gets_its_own_state() {
    let source = "def counter() { cnt = 0; fun() { cnt = cnt + 1 } }; c1 = counter(); c2 = \
                  counter(); c1(); c1(); c2()";

    assert_eq!(eval_int(source), 1);
}

#[test]
fn anonymous_functions_are_values() {
    assert_eq!(eval_int("f = fun (x) { x * 2 }; f(21)"), 42);
    assert_eq!(eval_int("def apply(f, x) { f(x) }; apply(fun (n) { n + 1 }, 41)"),
               42);
}

#[test]
fn wrong_arity_is_an_error() {
    assert!(matches!(runtime_error("def f(x, y) { x + y }; f(3)"),
                     RuntimeError::InvalidArgumentCount { .. }));
    assert!(matches!(runtime_error("print(1, 2)"),
                     RuntimeError::InvalidArgumentCount { .. }));
}

#[test]
fn calling_a_non_function_is_an_error() {
    assert!(matches!(runtime_error("x = 1; x(2)"),
                     RuntimeError::NotAFunction { .. }));
    assert!(matches!(runtime_error("class A { }; A()"),
                     RuntimeError::NotAFunction { .. }));
}

#[test]
fn print_returns_its_argument() {
    assert_eq!(eval_int("print(42)"), 42);
}

#[test]
fn string_concatenation() {
    assert_eq!(eval_string(r#""a" + "b" + "c""#), "abc");
    // Concatenation is associative when no operand is an integer.
    assert_eq!(eval_int(r#"("a" + "b") + "c" == "a" + ("b" + "c")"#), 1);
}

#[test]
fn string_escapes() {
    assert_eq!(eval_string(r#""a\nb""#), "a\nb");
    assert_eq!(eval_string(r#""quote: \"""#), "quote: \"");
}

#[test]
fn mixing_string_and_integer_addition_is_an_error() {
    // `+` is integer addition whenever either operand is an integer, so a
    // string on the other side fails to coerce.
    assert!(matches!(runtime_error(r#""total: " + 3"#),
                     RuntimeError::ExpectedInteger { .. }));
}

#[test]
fn equality_rules() {
    assert_eq!(eval_int("1 == 1"), 1);
    assert_eq!(eval_int("1 != 2"), 1);
    assert_eq!(eval_int(r#""a" == "a""#), 1);
    // Either side being a string compares string forms.
    assert_eq!(eval_int(r#""3" == 3"#), 1);
    assert_eq!(eval_int(r#""3" != 4"#), 1);
    // Composite values compare by reference identity.
    assert_eq!(eval_int("a = [1]; b = [1]; a == b"), 0);
    assert_eq!(eval_int("a = [1]; b = a; a == b"), 1);
    assert_eq!(eval_int("f = fun () { 1 }; g = fun () { 1 }; f == g"), 0);
    // Null is equal to null; unbound identifiers read as null.
    assert_eq!(eval_int("x == y"), 1);
}

#[test]
fn arrays_and_indexing() {
    assert_eq!(eval_int("a = [1, 2, 3]; a[0] + a[2]"), 4);
    assert_eq!(eval_int("a = [1, 2, 3]; a[1] = 42; a[1]"), 42);
    assert_eq!(eval_int("b = [[1, 2], [3, 4]]; b[1][0]"), 3);
    assert_eq!(eval("[1, [2], \"x\"]").to_string(), "[1, [2], x]");
}

#[test]
fn arrays_are_reference_shared() {
    assert_eq!(eval_int("a = [1, 2]; b = a; b[0] = 9; a[0]"), 9);
}

#[test]
fn array_slot_replacement_changes_type() {
    let source = r#"a = [2, 3, 4]; a[1] = "three"; "a[1]: " + a[1]"#;

    assert_eq!(eval_string(source), "a[1]: three");
}

#[test]
fn out_of_bounds_indexing_is_an_error() {
    assert!(matches!(runtime_error("a = [1, 2]; a[5]"),
                     RuntimeError::IndexOutOfBounds { index: 5, length: 2, .. }));
    assert!(matches!(runtime_error("a = [1, 2]; a[-1]"),
                     RuntimeError::IndexOutOfBounds { .. }));
    assert!(matches!(runtime_error("a = [1, 2]; a[2] = 0"),
                     RuntimeError::IndexOutOfBounds { .. }));
}

#[test]
fn indexing_a_non_array_is_an_error() {
    assert!(matches!(runtime_error("x = 1; x[0]"),
                     RuntimeError::ExpectedArray { .. }));
}

#[test]
fn classes_and_instances() {
    let source = "class Position { x = y = 0; def move(_x, _y) { x = _x; y = _y } }; p = \
                  Position.new; p.move(3, 4); p.x";

    assert_eq!(eval_int(source), 3);
}

#[test]
fn instances_are_independent() {
    let source = "class Position { x = y = 0; def move(_x, _y) { x = _x; y = _y } }; p1 = \
                  Position.new; p2 = Position.new; p1.move(1, 2); p2.x";

    assert_eq!(eval_int(source), 0);
}

#[test]
fn member_assignment_from_outside() {
    let source = "class Position { x = 0 }; p = Position.new; p.x = 9; p.x";

    assert_eq!(eval_int(source), 9);
}

#[test]
fn inheritance_and_override() {
    let source = "class Position { x = y = 0; def move(_x, _y) { x = _x; y = _y } }
class Pos3D extends Position { z = 0; def set(_x, _y, _z) { x = _x; y = _y; z = _z } }
p = Pos3D.new
p.move(3, 4)
p.z";
    assert_eq!(eval_int(source), 0);

    let source = "class Position { x = y = 0; def move(_x, _y) { x = _x; y = _y } }
class Pos3D extends Position { z = 0; def set(_x, _y, _z) { x = _x; y = _y; z = _z } }
p = Pos3D.new
p.move(3, 4)
p.set(5, 6, 7)
p.z";
    assert_eq!(eval_int(source), 7);

    let source = "class A { def who() { 1 } }; class B extends A { def who() { 2 } }; B.new.who()";
    assert_eq!(eval_int(source), 2);
}

#[test]
fn this_refers_to_the_instance() {
    let source = "class A { def me() { this } }; a = A.new; a.me() == a";

    assert_eq!(eval_int(source), 1);
}

#[test]
fn classes_render_with_their_name() {
    assert_eq!(eval("class Position { x = 0 }").to_string(), "[class Position]");
}

#[test]
fn invalid_members_are_errors() {
    assert!(matches!(runtime_error("class A { x = 1 }; a = A.new; a.missing"),
                     RuntimeError::InvalidMemberName { .. }));
    assert!(matches!(runtime_error("x = 1; x.y"),
                     RuntimeError::InvalidMemberName { .. }));
    assert!(matches!(runtime_error("x = 1; x.y = 2"),
                     RuntimeError::InvalidMemberName { .. }));
}

#[test]
fn unresolved_superclass_is_an_error() {
    assert!(matches!(runtime_error("class B extends Missing { }"),
                     RuntimeError::UnknownSuperclass { .. }));
    assert!(matches!(runtime_error("x = 1; class B extends x { }"),
                     RuntimeError::UnknownSuperclass { .. }));
}

#[test]
fn division_and_overflow_are_errors() {
    assert!(matches!(runtime_error("1 / 0"), RuntimeError::DivisionByZero { .. }));
    assert!(matches!(runtime_error("1 % 0"), RuntimeError::DivisionByZero { .. }));
    assert!(matches!(runtime_error("2147483647 + 1"),
                     RuntimeError::Overflow { .. }));
}

#[test]
fn conditions_must_be_integers() {
    assert!(matches!(runtime_error(r#"if "x" { 1 }"#),
                     RuntimeError::ExpectedInteger { .. }));
}

#[test]
fn errors_carry_line_numbers() {
    assert_eq!(runtime_error("1\n2\n[1][5]").line_number(), 3);
    assert_eq!(parse_error("1 + 2\n@").line_number(), 2);
    assert_eq!(parse_error("x = )").line_number(), 1);
}

#[test]
fn test_script_file() {
    let script = fs::read_to_string("tests/example.stone").expect("missing file");

    assert_eq!(eval(&script).to_string(), "[55, 55]");
}
