use std::fs::{self};

use macaque::{evaluate_source, interpreter::value::core::Value};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_code_blocks(&content).into_iter().enumerate() {
            count += 1;
            match evaluate_source(&code) {
                Ok(value) if !value.is_error() => {},
                outcome => panic!("Example {} in {:?} failed:\n{}\nOutcome: {:?}",
                                  i + 1,
                                  path,
                                  code,
                                  outcome),
            }
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

fn extract_code_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```macaque") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn result_of(src: &str) -> Value {
    evaluate_source(src).unwrap_or_else(|errors| panic!("Script failed to parse: {errors:?}"))
}

fn assert_result(src: &str, expected: &str) {
    let value = result_of(src);
    assert!(!value.is_error(), "Script failed: {}", value.inspect());
    assert_eq!(value.inspect(), expected, "{src}");
}

fn assert_failure(src: &str) {
    assert!(result_of(src).is_error(), "Script succeeded but was expected to fail");
}

#[test]
fn bindings_and_basic_arithmetic() {
    assert_result("let x = 1 + 2;\nx", "3");
    assert_result("let x = 7 * 9;\nx", "63");
    assert_result("let x = 8 - 5;\nx", "3");
    assert_result("let x = 10 / 2;\nx", "5");
}

#[test]
fn strings_and_builtins() {
    assert_result("let greeting = \"Hello\" + \", \" + \"world\";\nlen(greeting)", "12");
    assert_result("let a = [1, 2, 3];\nlen(push(a, 4)) + len(a)", "7");
    assert_result("first(rest([\"a\", \"b\", \"c\"]))", "b");
}

#[test]
fn user_defined_function_and_calls() {
    assert_result("let square = fn(x) { x * x };\nsquare(4) + square(2)", "20");
    assert_result("let apply = fn(f, x) { f(x) };\napply(fn(n) { n - 1 }, 10)", "9");
}

#[test]
fn if_else_and_blocks() {
    assert_result("let max = fn(a, b) { if (a > b) { a } else { b } };\nmax(3, 8)", "8");
    assert_result("let sign = fn(n) {\n  if (n < 0) { return -1 }\n  if (n > 0) { return 1 }\n  0\n};\n[sign(-5), sign(0), sign(9)]",
                  "[-1, 0, 1]");
}

#[test]
fn reduce_over_arrays() {
    let src = r"
        let reduce = fn(arr, initial, f) {
            let iter = fn(arr, result) {
                if (len(arr) == 0) { result } else { iter(rest(arr), f(result, first(arr))) }
            };
            iter(arr, initial)
        };
        let sum = fn(arr) { reduce(arr, 0, fn(acc, el) { acc + el }) };
        sum([1, 2, 3, 4, 5])
    ";
    assert_result(src, "15");
}

#[test]
fn test_script_file() {
    let script = fs::read_to_string("tests/example.mq").expect("missing file");
    assert_result(&script, "[1, 1, 2, 3, 5, 8, 13, 21, 34, 55]");
}

#[test]
fn division_by_zero_is_error() {
    assert_failure("let x = 1 / 0");
}

#[test]
fn unknown_variable_is_error() {
    assert_failure("foo == 1");
}

#[test]
fn calling_a_non_function_is_error() {
    assert_failure("let x = 1;\nx(2)");
}

#[test]
fn wrong_function_arity_is_error() {
    assert_failure("let f = fn(x, y) { x + y };\nf(3)");
}
