use macaque::{
    evaluate_source,
    interpreter::{
        evaluator::core::{EvalConfig, Evaluator, evaluate},
        parser::parse,
        value::{core::Value, environment::Environment},
    },
    run,
};
use pretty_assertions::assert_eq;

fn eval(source: &str) -> Value {
    evaluate_source(source).unwrap_or_else(|errors| panic!("parse errors in {source:?}: {errors:?}"))
}

fn inspect(source: &str) -> String {
    eval(source).inspect()
}

fn assert_error(source: &str, message: &str) {
    assert_eq!(eval(source), Value::Error(message.to_string()), "{source}");
}

#[test]
fn integer_arithmetic() {
    let cases = [("5", 5),
                 ("-10", -10),
                 ("5 + 5 + 5 + 5 - 10", 10),
                 ("2 * 2 * 2 * 2 * 2", 32),
                 ("-50 + 100 + -50", 0),
                 ("5 * 2 + 10", 20),
                 ("5 + 2 * 10", 25),
                 ("50 / 2 * 2 + 10", 60),
                 ("2 * (5 + 10)", 30),
                 ("3 * 3 * 3 + 10", 37),
                 ("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50),
                 ("5 / 2", 2),
                 ("-7 / 2", -3)];

    for (source, expected) in cases {
        assert_eq!(eval(source), Value::Integer(expected), "{source}");
    }
}

#[test]
fn integer_overflow_wraps() {
    assert_eq!(eval("9223372036854775807 + 1"), Value::Integer(i64::MIN));
    assert_eq!(eval("-9223372036854775807 - 2"), Value::Integer(i64::MAX));
}

#[test]
fn division_by_zero_is_an_error() {
    assert_error("1 / 0", "division by zero");
}

#[test]
fn boolean_expressions() {
    let cases = [("true", true),
                 ("1 < 2", true),
                 ("1 > 2", false),
                 ("1 == 1", true),
                 ("1 != 1", false),
                 ("true == true", true),
                 ("true != false", true),
                 ("(1 < 2) == true", true),
                 ("(1 > 2) == true", false),
                 ("\"a\" == \"a\"", true),
                 ("\"a\" != \"b\"", true),
                 ("[1, 2] == [1, 2]", true),
                 ("[1, 2] == [2, 1]", false)];

    for (source, expected) in cases {
        assert_eq!(eval(source), Value::Boolean(expected), "{source}");
    }
}

#[test]
fn bang_uses_truthiness() {
    let cases = [("!true", false),
                 ("!false", true),
                 ("!5", false),
                 ("!!true", true),
                 ("!!false", false),
                 ("!!5", true),
                 ("!\"\"", false),
                 ("!if (false) { 1 }", true)];

    for (source, expected) in cases {
        assert_eq!(eval(source), Value::Boolean(expected), "{source}");
    }
}

#[test]
fn if_else_expressions() {
    let cases = [("if (true) { 10 }", "10"),
                 ("if (false) { 10 }", "NULL"),
                 ("if (1) { 10 }", "10"),
                 ("if (1 < 2) { 10 }", "10"),
                 ("if (1 > 2) { 10 }", "NULL"),
                 ("if (1 > 2) { 10 } else { 20 }", "20"),
                 ("if (1 < 2) { 10 } else { 20 }", "10"),
                 ("if (0) { 10 } else { 20 }", "10"),
                 ("if ([]) { 1 }", "1")];

    for (source, expected) in cases {
        assert_eq!(inspect(source), expected, "{source}");
    }
}

#[test]
fn return_statements() {
    let cases = [("return 10;", 10),
                 ("return 10; 9;", 10),
                 ("return 2 * 5; 9;", 10),
                 ("9; return 2 * 5; 9;", 10),
                 ("if (10 > 1) { if (10 > 1) { return 10; } return 1; }", 10),
                 ("let f = fn(x) { if (x > 5) { return x } }; f(11)", 11),
                 ("let f = fn() { return 1; 2 }; f() + 10", 11)];

    for (source, expected) in cases {
        assert_eq!(eval(source), Value::Integer(expected), "{source}");
    }

    assert_eq!(eval("return;"), Value::Null);
    assert_eq!(eval("let f = fn(x) { if (x > 5) { return x } }; f(1)"), Value::Null);
}

#[test]
fn error_messages() {
    let cases = [("5 + true;", "type mismatch: INTEGER + BOOLEAN"),
                 ("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN"),
                 ("-true", "unknown operator: -BOOLEAN"),
                 ("-\"a\"", "unknown operator: -STRING"),
                 ("true + false;", "unknown operator: BOOLEAN + BOOLEAN"),
                 ("5; true + false; 5", "unknown operator: BOOLEAN + BOOLEAN"),
                 ("if (10 > 1) { true + false; }", "unknown operator: BOOLEAN + BOOLEAN"),
                 ("if (10 > 1) { if (10 > 1) { true + false; } }",
                  "unknown operator: BOOLEAN + BOOLEAN"),
                 ("if (10 > 1) { if (10 > 1) { return true + false; } return 1; }",
                  "unknown operator: BOOLEAN + BOOLEAN"),
                 ("\"Hello\" - \"World\"", "unknown operator: STRING - STRING"),
                 ("\"a\" < \"b\"", "unknown operator: STRING < STRING"),
                 ("[1] + [2]", "unknown operator: ARRAY + ARRAY"),
                 ("\"a\" == 1", "type mismatch: STRING == INTEGER"),
                 ("foobar", "identifier not found: foobar"),
                 ("nonExistentVariable;", "identifier not found: nonExistentVariable"),
                 ("5()", "not a function: INTEGER"),
                 ("\"f\"(1)", "not a function: STRING"),
                 ("1[0]", "index operator not available with value INTEGER and index INTEGER"),
                 ("[1][true]", "index operator not available with value ARRAY and index BOOLEAN")];

    for (source, message) in cases {
        assert_error(source, message);
    }
}

#[test]
fn errors_stop_argument_and_element_evaluation() {
    assert_error("let f = fn(a, b) { a }; f(missing, puts(1))", "identifier not found: missing");
    assert_error("[1, 2 + true, nope]", "type mismatch: INTEGER + BOOLEAN");
}

#[test]
fn let_statements() {
    let cases = [("let a = 5; a;", 5),
                 ("let a = 5 * 5; a;", 25),
                 ("let a = 5; let b = a; b;", 5),
                 ("let a = 5; let b = a; let c = a + b + 5; c;", 15),
                 ("let a = 7;", 7)];

    for (source, expected) in cases {
        assert_eq!(eval(source), Value::Integer(expected), "{source}");
    }
}

#[test]
fn function_values() {
    assert_eq!(inspect("fn(x) { x + 2; };"), "fn(x) { (x + 2) }");
    assert_eq!(inspect("len"), "builtin function len");
}

#[test]
fn function_application() {
    let cases = [("let identity = fn(x) { x; }; identity(5);", 5),
                 ("let identity = fn(x) { return x; }; identity(5);", 5),
                 ("let double = fn(x) { x * 2; }; double(5);", 10),
                 ("let add = fn(x, y) { x + y; }; add(5, 5);", 10),
                 ("let add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));", 20),
                 ("fn(x) { x; }(5)", 5),
                 ("let f = fn() { 3 }; f()", 3)];

    for (source, expected) in cases {
        assert_eq!(eval(source), Value::Integer(expected), "{source}");
    }
}

#[test]
fn closures_capture_their_environment() {
    assert_eq!(eval("let newAdder = fn(x) { fn(y) { x + y } }; let addTwo = newAdder(2); addTwo(6)"),
               Value::Integer(8));
    assert_eq!(eval("let x = 1; let f = fn() { x }; let x = 2; f()"), Value::Integer(2));
}

#[test]
fn parameters_shadow_without_mutating_outer_bindings() {
    assert_eq!(eval("let x = 10; let f = fn(x) { let x = x * 2; x }; f(1) + x"),
               Value::Integer(12));
}

#[test]
fn recursion() {
    let source = "let fib = fn(n) { if (n < 2) { n } else { fib(n - 1) + fib(n - 2) } }; fib(15)";
    assert_eq!(eval(source), Value::Integer(610));
}

#[test]
fn higher_order_functions() {
    let source = r"
        let map = fn(arr, f) {
            let iter = fn(arr, acc) {
                if (len(arr) == 0) { acc } else { iter(rest(arr), push(acc, f(first(arr)))) }
            };
            iter(arr, [])
        };
        map([1, 2, 3], fn(x) { x * x })
    ";
    assert_eq!(inspect(source), "[1, 4, 9]");
}

#[test]
fn wrong_number_of_arguments_to_user_function() {
    assert_error("let f = fn(x, y) { x }; f(1)", "wrong number of arguments. got=1, want=2");
    assert_error("let f = fn() { 1 }; f(1)", "wrong number of arguments. got=1, want=0");
}

#[test]
fn unbounded_recursion_hits_the_depth_limit() {
    assert_error("let f = fn(x) { f(x) }; f(1)", "maximum call depth of 2048 exceeded");
}

#[test]
fn depth_limit_is_configurable() {
    let env = Environment::new().into_shared();
    let config = EvalConfig { max_call_depth: 10 };
    let source = "let count = fn(n) { if (n == 0) { 0 } else { 1 + count(n - 1) } };";

    run(source, &env, &config).unwrap();

    assert_eq!(run("count(9)", &env, &config).unwrap(), Value::Integer(9));
    assert_eq!(run("count(10)", &env, &config).unwrap(),
               Value::Error("maximum call depth of 10 exceeded".to_string()));
    assert_eq!(run("count(5)", &env, &config).unwrap(), Value::Integer(5));
}

#[test]
fn deep_recursion_within_the_limit_completes() {
    let source = "let count = fn(n) { if (n == 0) { 0 } else { 1 + count(n - 1) } }; count(2000)";
    assert_eq!(eval(source), Value::Integer(2000));
}

#[test]
fn strings() {
    assert_eq!(inspect("\"Hello World!\""), "Hello World!");
    assert_eq!(inspect("\"Hello\" + \" \" + \"World!\""), "Hello World!");
}

#[test]
fn arrays_and_indexing() {
    assert_eq!(inspect("[1, 2 * 2, 3 + 3]"), "[1, 4, 6]");

    let cases = [("[1, 2, 3][0]", "1"),
                 ("[1, 2, 3][1]", "2"),
                 ("[1, 2, 3][2]", "3"),
                 ("let i = 0; [1][i];", "1"),
                 ("[1, 2, 3][1 + 1];", "3"),
                 ("let myArray = [1, 2, 3]; myArray[2];", "3"),
                 ("let myArray = [1, 2, 3]; myArray[0] + myArray[1] + myArray[2];", "6"),
                 ("let myArray = [1, 2, 3]; let i = myArray[0]; myArray[i]", "2"),
                 ("[1, 2, 3][3]", "NULL"),
                 ("[1, 2, 3][4]", "NULL"),
                 ("[1, 2, 3][-1]", "NULL"),
                 ("[[1, 2], [3]][0][1]", "2")];

    for (source, expected) in cases {
        assert_eq!(inspect(source), expected, "{source}");
    }
}

#[test]
fn builtin_len() {
    assert_eq!(eval("len(\"\")"), Value::Integer(0));
    assert_eq!(eval("len(\"four\")"), Value::Integer(4));
    assert_eq!(eval("len(\"hello world\")"), Value::Integer(11));
    assert_eq!(eval("len(\"héllo\")"), Value::Integer(6));
    assert_eq!(eval("len([1, 2, 3])"), Value::Integer(3));
    assert_error("len(1)", "argument to `len` not supported, got INTEGER");
    assert_error("len(\"one\", \"two\")", "wrong number of arguments. got=2, want=1");
    assert_error("len()", "wrong number of arguments. got=0, want=1");
}

#[test]
fn builtin_array_helpers() {
    let cases = [("first([1, 2, 3])", "1"),
                 ("first([])", "NULL"),
                 ("last([1, 2, 3])", "3"),
                 ("last([])", "NULL"),
                 ("rest([1, 2, 3])", "[2, 3]"),
                 ("rest([1])", "[]"),
                 ("rest([])", "NULL"),
                 ("push([], 1)", "[1]"),
                 ("push([1], [2])", "[1, [2]]")];

    for (source, expected) in cases {
        assert_eq!(inspect(source), expected, "{source}");
    }

    assert_error("first(1)", "argument to `first` not supported, got INTEGER");
    assert_error("last(\"abc\")", "argument to `last` not supported, got STRING");
    assert_error("rest(true)", "argument to `rest` not supported, got BOOLEAN");
    assert_error("push(1, 1)", "first argument to `push` must be ARRAY, got INTEGER");
    assert_error("push([1])", "wrong number of arguments. got=1, want=2");
}

#[test]
fn push_leaves_the_input_unchanged() {
    assert_eq!(inspect("let a = [1, 2]; let b = push(a, 3); a"), "[1, 2]");
    assert_eq!(inspect("let a = [1, 2]; let b = push(a, 3); b"), "[1, 2, 3]");
}

#[test]
fn puts_returns_null() {
    assert_eq!(eval("puts(\"hello\", 1, [2])"), Value::Null);
    assert_eq!(eval("puts()"), Value::Null);
}

#[test]
fn builtins_can_be_shadowed() {
    assert_eq!(eval("let len = fn(x) { 42 }; len([1])"), Value::Integer(42));
}

#[test]
fn function_equality_is_identity() {
    assert_eq!(eval("let f = fn() { 1 }; f == f"), Value::Boolean(true));
    assert_eq!(eval("fn() { 1 } == fn() { 1 }"), Value::Boolean(false));
    assert_eq!(eval("len == len"), Value::Boolean(true));
}

#[test]
fn error_values_render_with_prefix() {
    assert_eq!(inspect("-true"), "ERROR: unknown operator: -BOOLEAN");
}

#[test]
fn evaluating_a_tree_with_parse_errors_reports_the_missing_part() {
    let (program, errors) = parse("let x = ;");
    assert!(!errors.is_empty());

    let env = Environment::new().into_shared();
    assert_eq!(evaluate(&program, &env),
               Value::Error("cannot evaluate an expression that failed to parse".to_string()));
}

#[test]
fn evaluator_state_persists_across_programs_in_one_environment() {
    let env = Environment::new().into_shared();
    let mut evaluator = Evaluator::new(EvalConfig::default());

    let (program, _) = parse("let counter = fn(x) { x + 1 };");
    evaluator.evaluate(&program, &env);
    let (program, _) = parse("counter(counter(1))");

    assert_eq!(evaluator.evaluate(&program, &env), Value::Integer(3));
    assert_eq!(evaluator.evaluate(&program, &env), Value::Integer(3));
}

#[test]
fn statements_and_expressions_evaluate_directly() {
    let (program, _) = parse("1 + 2");
    let env = Environment::new().into_shared();

    assert_eq!(evaluate(&program.statements[0], &env), Value::Integer(3));
}

#[test]
fn parse_errors_prevent_evaluation() {
    let errors = evaluate_source("let x 5; puts(x)").unwrap_err();
    assert_eq!(errors[0].to_string(), "expected next token to be =, got INT instead");
}

#[test]
fn deeply_nested_expressions_evaluate() {
    let depth = 200_000;

    assert_eq!(eval(&format!("{}1", "-".repeat(depth))), Value::Integer(1));
    assert_eq!(eval(&format!("1{}", " + 1".repeat(depth))), Value::Integer(200_001));

    let nesting = 1_000;
    let source = format!("{}1{}{}", "[".repeat(nesting), "]".repeat(nesting), "[0]".repeat(nesting));
    assert_eq!(eval(&source), Value::Integer(1));
}
