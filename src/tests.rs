/*
MIT License

Copyright (c) 2026 Raja Lehtihet and Wael El Oraiby

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

//! Crate unit tests.

use super::*;
use crate::combinator::Parser;
use crate::parser::{bool_expr, expr, program};
use rstest::rstest;

fn v(name: &str) -> Expr {
    Expr::var(name)
}

fn c(value: i64) -> Expr {
    Expr::Const(value)
}

fn env(pairs: &[(&str, i64)]) -> Env {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), *value))
        .collect()
}

#[rstest]
#[case("x - y - z", Expr::minus(v("x"), Expr::minus(v("y"), v("z"))))]
#[case("(x - y) - z", Expr::minus(Expr::minus(v("x"), v("y")), v("z")))]
#[case("x + y + z", Expr::plus(v("x"), Expr::plus(v("y"), v("z"))))]
#[case("x * y * z", Expr::times(v("x"), Expr::times(v("y"), v("z"))))]
#[case("-x-y", Expr::minus(c(0), Expr::minus(v("x"), v("y"))))]
#[case("x + 2*y", Expr::plus(v("x"), Expr::times(c(2), v("y"))))]
#[case("2 * x + 1", Expr::plus(Expr::times(c(2), v("x")), c(1)))]
#[case("(x + 1) * 3", Expr::times(Expr::plus(v("x"), c(1)), c(3)))]
#[case("x - -1", Expr::minus(v("x"), Expr::minus(c(0), c(1))))]
fn expressions_parse_right_associative(#[case] source: &str, #[case] expected: Expr) {
    assert_eq!(parse_expr(source), Ok(expected));
}

#[test]
fn negative_literals_depend_on_position() {
    // A leading `-` on a whole expression is unary minus ...
    assert_eq!(parse_expr("-5"), Ok(Expr::minus(c(0), c(5))));
    // ... but a literal operand keeps its sign.
    assert_eq!(parse_expr("-5 + x"), Ok(Expr::plus(c(-5), v("x"))));
    assert_eq!(parse_expr("2 * -3"), Ok(Expr::times(c(2), c(-3))));
}

#[rstest]
#[case("-5 * y", Expr::negate(Expr::times(c(5), v("y"))))]
#[case("-5 * y + 1", Expr::plus(Expr::times(c(-5), v("y")), c(1)))]
#[case("- 5", Expr::negate(c(5)))]
#[case("-0", Expr::negate(c(0)))]
#[case("(-5)", Expr::negate(c(5)))]
#[case("x - -5 * y", Expr::minus(v("x"), Expr::negate(Expr::times(c(5), v("y")))))]
#[case("-9223372036854775808", c(i64::MIN))]
#[case("-9223372036854775808 * x", Expr::times(c(i64::MIN), v("x")))]
#[case("-9223372036854775808 + x", Expr::plus(c(i64::MIN), v("x")))]
fn negative_literal_readings(#[case] source: &str, #[case] expected: Expr) {
    assert_eq!(parse_expr(source), Ok(expected));
}

#[test]
fn out_of_range_literals_do_not_parse() {
    assert_eq!(parse_expr("9223372036854775808"), Err(SyntaxError::NoMatch));
    assert_eq!(parse_expr("-9223372036854775809"), Err(SyntaxError::NoMatch));
}

#[test]
fn deep_nesting_parses_in_bounded_time() {
    let depth = 30;
    let open = "(".repeat(depth);
    let close = ")".repeat(depth);
    let started = std::time::Instant::now();

    assert_eq!(parse_expr(&format!("{open}x{close}")), Ok(v("x")));
    assert_eq!(
        parse_expr(&format!("{open}-1 * x{close}")),
        Ok(Expr::negate(Expr::times(c(1), v("x"))))
    );
    assert_eq!(
        parse_constraint(&format!("{open}x > 1{close}")),
        Ok(Constraint::GreaterThan(v("x"), c(1)))
    );
    let src = format!("Solve {open}x + 1{close} = 2 such that {open}x > 1 or y < 2{close}.");
    let parsed = parse_program(&src).expect("program should parse");
    assert_eq!(parsed.equations, vec![Constraint::Equal(Expr::plus(v("x"), c(1)), c(2))]);
    assert_eq!(parsed.constraints.len(), 1);

    let elapsed = started.elapsed();
    assert!(
        elapsed < std::time::Duration::from_secs(5),
        "nested parse took {elapsed:?}"
    );
}

#[test]
fn leading_zeros_are_dropped() {
    assert_eq!(parse_expr("00089"), Ok(c(89)));
    assert_eq!(
        expr().parse("00089abc"),
        Some((c(89), "abc")),
        "literal stops at the first non-digit"
    );
}

#[test]
fn whitespace_is_insignificant() {
    let spaced = parse_expr("2*  (y + 2) * 2");
    let tight = parse_expr("2*(y+2)*2");
    assert_eq!(spaced, tight);
    assert_eq!(
        tight,
        Ok(Expr::times(
            c(2),
            Expr::times(Expr::plus(v("y"), c(2)), c(2))
        ))
    );
    assert_eq!(parse_expr("\n  x\t+\n1  \n"), Ok(Expr::plus(v("x"), c(1))));
}

#[test]
fn and_nests_inside_or() {
    let parsed = parse_constraint("x > 1 and y<2 or y < 1");
    let expected = Constraint::or(
        Constraint::and(
            Constraint::GreaterThan(v("x"), c(1)),
            Constraint::LessThan(v("y"), c(2)),
        ),
        Constraint::LessThan(v("y"), c(1)),
    );
    assert_eq!(parsed, Ok(expected));
}

#[test]
fn boolean_operators_associate_right() {
    let parsed = parse_constraint("a < 1 or b < 2 or c < 3");
    let expected = Constraint::or(
        Constraint::LessThan(v("a"), c(1)),
        Constraint::or(
            Constraint::LessThan(v("b"), c(2)),
            Constraint::LessThan(v("c"), c(3)),
        ),
    );
    assert_eq!(parsed, Ok(expected));
}

#[test]
fn parentheses_override_boolean_precedence() {
    let parsed = parse_constraint("x > 1 and (y < 2 or y > 5)");
    let expected = Constraint::and(
        Constraint::GreaterThan(v("x"), c(1)),
        Constraint::or(
            Constraint::LessThan(v("y"), c(2)),
            Constraint::GreaterThan(v("y"), c(5)),
        ),
    );
    assert_eq!(parsed, Ok(expected));
}

#[test]
fn relations_accept_parenthesised_operands() {
    let parsed = parse_constraint("(x + 1) > 2");
    assert_eq!(
        parsed,
        Ok(Constraint::GreaterThan(Expr::plus(v("x"), c(1)), c(2)))
    );
}

#[rstest]
#[case("x <= 1")]
#[case("x >= 1")]
#[case("x != 1")]
#[case("x = 1")]
#[case("x > 1 and")]
#[case("(x > 1")]
fn unsupported_relations_are_rejected(#[case] source: &str) {
    assert!(parse_constraint(source).is_err(), "{source} should not parse");
}

#[test]
fn full_program_keeps_source_order() {
    let parsed = parse_program("Solve x + y = 10, x - y = 2 such that x > 0, y > 0.");
    let expected = Program {
        equations: vec![
            Constraint::Equal(Expr::plus(v("x"), v("y")), c(10)),
            Constraint::Equal(Expr::minus(v("x"), v("y")), c(2)),
        ],
        constraints: vec![
            Constraint::GreaterThan(v("x"), c(0)),
            Constraint::GreaterThan(v("y"), c(0)),
        ],
    };
    assert_eq!(parsed, Ok(expected));
}

#[test]
fn such_that_clause_is_optional() {
    let parsed = parse_program("Solve x = 1.").expect("program should parse");
    assert_eq!(parsed.equations, vec![Constraint::Equal(v("x"), c(1))]);
    assert!(parsed.constraints.is_empty());
}

#[test]
fn programs_may_span_lines() {
    let src = "Solve\n  x + y = 10,\n  x - y = 2\nsuch that\n  x > 0 and y > 0.\n";
    let parsed = parse_program(src).expect("program should parse");
    assert_eq!(parsed.equations.len(), 2);
    assert_eq!(parsed.constraints.len(), 1);
}

#[test]
fn double_equals_is_rejected() {
    assert_eq!(parse_program("Solve x == 1."), Err(SyntaxError::NoMatch));
}

#[test]
fn trailing_input_is_rejected() {
    assert_eq!(
        parse_program("Solve x = 1. y = 2."),
        Err(SyntaxError::TrailingInput {
            rest: "y = 2.".to_string()
        })
    );
    // Trailing whitespace alone is fine.
    assert!(parse_program("Solve x = 1.  \n").is_ok());
}

#[rstest]
#[case::missing_solve("x = 1.")]
#[case::lowercase_solve("solve x = 1.")]
#[case::keyword_runs_into_identifier("Solvex = 1.")]
#[case::missing_period("Solve x = 1")]
#[case::dangling_comma("Solve x = 1, .")]
#[case::empty_such_that("Solve x = 1 such that.")]
#[case::missing_that("Solve x = 1 such x > 0.")]
#[case::relation_as_equation("Solve x > 1.")]
#[case::equation_as_constraint("Solve x = 1 such that x = 1.")]
#[case::uppercase_variable("Solve X = 1.")]
fn malformed_programs_fail(#[case] source: &str) {
    let err = parse_program(source).expect_err("parse should fail");
    assert!(
        err.to_string().contains("does not match the language"),
        "unexpected message '{err}'"
    );
}

#[test]
fn vars_are_sorted_and_deduplicated() {
    let parsed = parse_expr("b + a * c + a").expect("expression should parse");
    let names: Vec<String> = parsed.vars().into_iter().collect();
    assert_eq!(names, vec!["a", "b", "c"]);

    let program = parse_program("Solve z = 1, y + x = 2 such that w > x.").expect("parse");
    let names: Vec<String> = program.vars().into_iter().collect();
    assert_eq!(names, vec!["w", "x", "y", "z"]);
    assert!(c(3).vars().is_empty());
}

#[test]
fn printed_program_parses_back() {
    let src = "Solve x + y = 10, x - y - z = 2 such that x > 0 and y<2 or y < 1, (x + 1) * 2 > y.";
    let parsed = parse_program(src).expect("program should parse");
    let printed = parsed.to_string();
    assert_eq!(
        printed,
        "Solve (x + y) = 10, (x - (y - z)) = 2 such that ((x > 0 and y < 2) or y < 1), ((x + 1) * 2) > y."
    );
    assert_eq!(parse_program(&printed), Ok(parsed));
}

#[test]
fn printed_constraint_parses_back() {
    let parsed = parse_constraint("x > 1 and (y < 2 or y > 5)").expect("parse");
    assert_eq!(parsed.to_string(), "(x > 1 and (y < 2 or y > 5))");
    assert_eq!(parse_constraint(&parsed.to_string()), Ok(parsed));
}

#[test]
fn negative_head_literal_prints_as_unary_minus() {
    let parsed = parse_expr("-3 * b + 1").expect("parse");
    assert_eq!(
        parsed,
        Expr::plus(Expr::times(c(-3), v("b")), c(1))
    );
    // Inside the printed parentheses `-3 * b` reads back as `0 - 3 * b`.
    let reparsed = parse_expr(&parsed.to_string()).expect("parse");
    assert_eq!(
        reparsed,
        Expr::plus(Expr::negate(Expr::times(c(3), v("b"))), c(1))
    );
    assert_eq!(reparsed.eval(&env(&[("b", 2)])), parsed.eval(&env(&[("b", 2)])));
}

#[test]
fn smtlib_script_declares_and_asserts_in_order() {
    let script = compile_smtlib("Solve x + y = 10, x - y = 2 such that x > 0, y > 0.")
        .expect("program should compile");
    assert_eq!(
        script,
        "(declare-const x Int)\n\
         (declare-const y Int)\n\
         (assert (= (+ x y) 10))\n\
         (assert (= (- x y) 2))\n\
         (assert (> x 0))\n\
         (assert (> y 0))\n\
         (check-sat)\n\
         (get-model)\n"
    );
}

#[test]
fn smtlib_lowers_boolean_structure() {
    let script = compile_smtlib("Solve a = -3 * b such that a < 0 and b > 0 or b < 0.")
        .expect("program should compile");
    assert!(script.contains("(assert (= a (- 0 (* 3 b))))"), "{script}");
    assert!(
        script.contains("(assert (or (and (< a 0) (> b 0)) (< b 0)))"),
        "{script}"
    );
}

#[test]
fn smtlib_rejects_invalid_source() {
    assert_eq!(compile_smtlib("Solve."), Err(SyntaxError::NoMatch));
}

#[test]
fn check_reports_each_clause() {
    let src = "Solve x + y = 10, x - y = 2 such that x > 0, y > 0.";
    let checks = check_program(src, &env(&[("x", 6), ("y", 4)])).expect("check");
    assert_eq!(checks.len(), 4);
    assert!(checks.iter().all(|check| check.holds));

    let checks = check_program(src, &env(&[("x", 5), ("y", 5)])).expect("check");
    let holds: Vec<bool> = checks.iter().map(|check| check.holds).collect();
    assert_eq!(holds, vec![true, false, true, true]);
    assert_eq!(
        checks[1].clause,
        Constraint::Equal(Expr::minus(v("x"), v("y")), c(2))
    );
}

#[test]
fn check_reports_unbound_variables() {
    let err = check_program("Solve x + y = 10.", &env(&[("x", 1)])).expect_err("y is unbound");
    assert_eq!(
        err,
        CheckError::Eval(EvalError::UnboundVariable("y".to_string()))
    );
}

#[test]
fn evaluation_short_circuits_booleans() {
    let constraint = parse_constraint("x > 0 or y > 0").expect("parse");
    // `y` is never looked up because the left side already holds.
    assert_eq!(constraint.holds(&env(&[("x", 1)])), Ok(true));
    assert_eq!(
        constraint.holds(&env(&[("x", 0)])),
        Err(EvalError::UnboundVariable("y".to_string()))
    );
}

#[test]
fn evaluation_detects_overflow() {
    let expr = parse_expr("x * x").expect("parse");
    assert_eq!(
        expr.eval(&env(&[("x", i64::MAX)])),
        Err(EvalError::Overflow("(x * x)".to_string()))
    );
    assert_eq!(expr.eval(&env(&[("x", -7)])), Ok(49));
}

#[test]
fn program_satisfaction() {
    let program = parse_program("Solve x = 2 * y such that y > 1.").expect("parse");
    assert_eq!(program.is_satisfied_by(&env(&[("x", 4), ("y", 2)])), Ok(true));
    assert_eq!(program.is_satisfied_by(&env(&[("x", 2), ("y", 1)])), Ok(false));
}

#[test]
fn one_parser_is_shared_across_threads() {
    let shared: Parser<Program> = program();
    let parser = &shared;
    let sources: Vec<String> = (1..=8)
        .map(|n| format!("Solve x + {n} = y such that y > {n}."))
        .collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = sources
            .iter()
            .map(|src| scope.spawn(move || parser.parse(src).map(|(program, _)| program)))
            .collect();
        for (n, handle) in (1..=8).zip(handles) {
            let parsed = handle.join().expect("thread should not panic");
            let expected = Program {
                equations: vec![Constraint::Equal(Expr::plus(v("x"), c(n)), v("y"))],
                constraints: vec![Constraint::GreaterThan(v("y"), c(n))],
            };
            assert_eq!(parsed, Some(expected));
        }
    });
}

#[test]
fn grammar_rules_compose_with_the_engine() {
    use crate::combinator::text::symbol;
    use crate::combinator::{separated_list1, terminated};

    // Semicolon-separated constraints terminated by `!`, built from the public rules.
    let list = terminated(separated_list1(bool_expr(), symbol(";")), symbol("!"));
    let (parsed, rest) = list.parse("x > 1; y < 2 !tail").expect("list should parse");
    assert_eq!(parsed.len(), 2);
    assert_eq!(rest, "tail");
}
