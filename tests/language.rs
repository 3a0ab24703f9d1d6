use complexpr::{
    ast::{Node, NodeKind, compare_ast},
    compare,
    error::{Error, ParseError, RuntimeError},
    evaluate,
    interpreter::{
        environment::Environment,
        expression::{Expression, NOTHING_EVALUATED},
        parser::parse,
        render::{execution_tree, to_lisp},
        value::Complex,
    },
};

fn env_with(bindings: &[(&str, Complex)]) -> Environment {
    bindings.iter()
            .map(|(name, value)| ((*name).to_string(), *value))
            .collect()
}

fn assert_value(src: &str, expected: Complex) {
    match evaluate(src, &Environment::new()) {
        Ok(value) => assert_eq!(value, expected, "evaluating {src}"),
        Err(e) => panic!("Expression {src} failed: {e}"),
    }
}

fn parse_error(src: &str) -> ParseError {
    match evaluate(src, &Environment::new()) {
        Err(Error::Parse(e)) => e,
        other => panic!("Expression {src} should fail to parse, got {other:?}"),
    }
}

fn runtime_error(src: &str, environment: &Environment) -> RuntimeError {
    match evaluate(src, environment) {
        Err(Error::Runtime(e)) => e,
        other => panic!("Expression {src} should fail to evaluate, got {other:?}"),
    }
}

#[test]
fn binary_operators_match_complex_arithmetic() {
    let literals = ["3+2i", "-1", "4i", "i", "-i", "0.5", "1-i"];
    let env = Environment::new();

    for a in literals {
        for b in literals {
            let x = Complex::parse(a).unwrap();
            let y = Complex::parse(b).unwrap();
            for (op, expected) in [('+', x + y), ('-', x - y), ('*', x * y), ('/', x / y)] {
                let src = format!("({a}){op}({b})");
                assert_eq!(evaluate(&src, &env).unwrap(), expected, "evaluating {src}");
            }
        }
    }
}

#[test]
fn precedence_and_associativity() {
    assert_value("2*3+4", Complex::new(10.0, 0.0));
    assert_value("2*(3+4)", Complex::new(14.0, 0.0));
    assert_value("10-4-3", Complex::new(3.0, 0.0));
    assert_value("2^3^2", Complex::new(512.0, 0.0));
    assert_value("-2^2", Complex::new(-4.0, 0.0));
    assert_value("2^-1", Complex::new(0.5, 0.0));
    assert_value("--3", Complex::new(3.0, 0.0));

    assert_eq!(to_lisp(&parse("10-4-3").unwrap()), "(- (- 10 4) 3)");
    assert_eq!(to_lisp(&parse("2^3^2").unwrap()), "(^ 2 (^ 3 2))");
    assert_eq!(to_lisp(&parse("-2^2").unwrap()), "(- 0 (^ 2 2))");
    assert_eq!(to_lisp(&parse("2^-3").unwrap()), "(^ 2 (- 0 3))");
}

#[test]
fn powers_and_roots() {
    assert_value("2^3", Complex::new(8.0, 0.0));
    assert_value("√4", Complex::new(2.0, 0.0));
    assert_value("√9*2", Complex::new(6.0, 0.0));
    assert_value("sqrt(-4)", Complex::new(0.0, 2.0));
    assert_value("√(-4)", Complex::new(0.0, 2.0));

    assert_eq!(to_lisp(&parse("√9*2").unwrap()), "(* (√ 9) 2)");
    assert_eq!(to_lisp(&parse("√(-4)").unwrap()), "(√ (- 0 4))");
}

#[test]
fn real_literals_carry_no_sign() {
    let empty_literal = |position| ParseError::MalformedLiteral { literal: String::new(),
                                                                  position };

    assert_eq!(parse_error("√-4"), empty_literal(1));
    assert_eq!(parse_error("2^+3"), empty_literal(2));
    assert_eq!(parse_error("2*+3"), empty_literal(2));
    assert_eq!(parse_error("+3"), empty_literal(0));

    assert_value("2^-3", Complex::new(0.125, 0.0));
    assert_value("+3i", Complex::new(0.0, 3.0));
}

#[test]
fn unary_minus_flips_the_sign_of_zero_parts() {
    let env = Environment::new();
    let value = |src: &str| evaluate(src, &env).unwrap();

    let negated = value("log(-1)");
    assert_eq!(negated.real, 0.0);
    assert!((negated.imaginary + std::f64::consts::PI).abs() < 1e-12);
    assert_eq!(negated.to_string(), "-3.141592653589793i");

    let subtracted = value("log(0-1)");
    assert!((subtracted.imaginary - std::f64::consts::PI).abs() < 1e-12);

    let cube_root = value("(-8)^(1/3)");
    assert!((cube_root.real - 1.0).abs() < 1e-12);
    assert!((cube_root.imaginary + 3.0_f64.sqrt()).abs() < 1e-12);

    let tree = parse("-1").unwrap();
    assert!(tree.is_negation());
    assert_eq!(tree, Node::binary("-", Node::leaf("0"), Node::leaf("1")));
    assert!(compare("-1", "0-1", &env).unwrap());
}

#[test]
fn complex_literals_are_single_leaves() {
    let tree = parse("3+4i").unwrap();
    assert!(tree.is_leaf());
    assert_eq!(tree.token(), "3+4i");
    assert_eq!(tree.kind(), NodeKind::Literal);
    assert_value("3+4i", Complex::new(3.0, 4.0));

    assert_value("(3+2i)*(1-i)", Complex::new(5.0, -1.0));
    assert_value("+3i", Complex::new(0.0, 3.0));
    assert_value("2 + 3 i", Complex::new(2.0, 3.0));
    assert_eq!(to_lisp(&parse("3+2i*1-i").unwrap()), "(* 3+2i 1-i)");
}

#[test]
fn imaginary_unit_needs_no_binding() {
    assert_value("i", Complex::new(0.0, 1.0));
    assert_value("i*i", Complex::new(-1.0, 0.0));

    let env = env_with(&[("i", Complex::new(5.0, 0.0))]);
    assert_eq!(evaluate("i", &env).unwrap(), Complex::new(0.0, 1.0));
}

#[test]
fn variables_come_from_the_environment() {
    let env = env_with(&[("x", Complex::new(3.0, 2.0)), ("y", Complex::new(2.0, 0.0))]);
    assert_eq!(evaluate("x*y", &env).unwrap(), Complex::new(6.0, 4.0));
    assert_eq!(evaluate("x - x", &env).unwrap(), Complex::new(0.0, 0.0));

    assert_eq!(runtime_error("x", &Environment::new()),
               RuntimeError::UnknownVariable { name: "x".to_string() });
    assert_eq!(runtime_error("xy", &env),
               RuntimeError::UnknownVariable { name: "xy".to_string() });
}

#[test]
fn functions_dispatch_case_insensitively() {
    assert_value("sin(0)", Complex::new(0.0, 0.0));
    assert_value("SIN(0)", Complex::new(0.0, 0.0));
    assert_value("cos(0)", Complex::new(1.0, 0.0));
    assert_value("tan(0)", Complex::new(0.0, 0.0));
    assert_value("exp(0)", Complex::new(1.0, 0.0));
    assert_value("Log(1)", Complex::new(0.0, 0.0));
    assert_value("abs(3+4i)", Complex::new(5.0, 0.0));
    assert_value("abs(-5)", Complex::new(5.0, 0.0));
    assert_value("sqrt(16)", Complex::new(4.0, 0.0));

    let tree = parse("Sqrt(4)").unwrap();
    assert_eq!(tree.token(), "Sqrt");
    assert_eq!(tree.children().len(), 1);
}

#[test]
fn whitespace_is_ignored_everywhere() {
    assert_value("s i n ( 0 )", Complex::new(0.0, 0.0));
    assert_value(" ( 1 +\t2 ) *\n3 ", Complex::new(9.0, 0.0));
}

#[test]
fn division_by_zero_propagates_nan() {
    let value = evaluate("1/0", &Environment::new()).unwrap();
    assert!(value.real.is_nan());
    assert!(value.imaginary.is_nan());
    assert_eq!(value.to_string(), "NaN+NaNi");
}

#[test]
fn syntax_errors() {
    assert_eq!(parse_error(""), ParseError::IncompleteExpression { position: 0 });
    assert_eq!(parse_error("2+"), ParseError::IncompleteExpression { position: 2 });
    assert_eq!(parse_error("(1+2"),
               ParseError::UnmatchedParenthesis { position: 4,
                                                  function: None, });
    assert_eq!(parse_error("sin(1"),
               ParseError::UnmatchedParenthesis { position: 5,
                                                  function: Some("sin".to_string()), });
    assert_eq!(parse_error("2*#"),
               ParseError::InvalidCharacter { character: '#',
                                              position:  2, });
    assert_eq!(parse_error("++1"),
               ParseError::InvalidCharacter { character: '+',
                                              position:  0, });
    assert_eq!(parse_error("2)"),
               ParseError::TrailingInput { remainder: ")".to_string(),
                                           position:  1, });
    assert_eq!(parse_error("2 x"),
               ParseError::TrailingInput { remainder: "x".to_string(),
                                           position:  1, });
    assert_eq!(parse_error("foo(1)"),
               ParseError::UnknownFunction { name:     "foo".to_string(),
                                             position: 0, });
    assert_eq!(parse_error("1+2+3i"),
               ParseError::MalformedLiteral { literal:  "1+2+3i".to_string(),
                                              position: 0, });
    assert_eq!(parse_error("."),
               ParseError::MalformedLiteral { literal:  ".".to_string(),
                                              position: 0, });
}

#[test]
fn syntax_errors_come_before_runtime_errors() {
    assert!(matches!(parse_error("foo(x)"), ParseError::UnknownFunction { .. }));
    assert!(matches!(parse_error("x+("), ParseError::IncompleteExpression { position: 3 }));
}

#[test]
fn real_only_constraints() {
    let env = Environment::new();
    assert_eq!(runtime_error("2^(1+i)", &env),
               RuntimeError::NonRealExponent { exponent: Complex::new(1.0, 1.0) });
    assert_eq!(runtime_error("√(1+i)", &env),
               RuntimeError::NonRealRadicand { radicand: Complex::new(1.0, 1.0) });
    assert_eq!(runtime_error("sqrt(i)", &env),
               RuntimeError::NonRealRadicand { radicand: Complex::new(0.0, 1.0) });
    assert!(matches!(runtime_error("√-4i", &env), RuntimeError::NonRealRadicand { .. }));
}

#[test]
fn error_messages_are_descriptive() {
    let message = evaluate("2^(1+i)", &Environment::new()).unwrap_err().to_string();
    assert!(message.contains("Exponent must be real"), "{message}");

    let message = evaluate("(1", &Environment::new()).unwrap_err().to_string();
    assert!(message.contains("parenthesis"), "{message}");
}

#[test]
fn structural_comparison() {
    let env = env_with(&[("x", Complex::new(1.0, 0.0))]);

    for src in ["1+1", "2*(x+1)", "sin(x)^2", "-x", "√4", "3+4i"] {
        assert!(compare(src, src, &env).unwrap(), "{src} should equal itself");
    }

    assert!(!compare("1+1", "2", &env).unwrap());
    assert!(!compare("2", "1+1", &env).unwrap());
    assert!(!compare("sin(x)", "SIN(x)", &env).unwrap());
    assert!(!compare("2.0", "2", &env).unwrap());
    assert!(compare("-x", "0-x", &env).unwrap());
    assert!(compare("x * 2", "x*2", &env).unwrap());

    assert!(compare("x", "y", &env).is_err());
}

#[test]
fn compare_ast_handles_identity_and_absence() {
    let tree = parse("1+2").unwrap();
    assert!(compare_ast(Some(&tree), Some(&tree)));
    assert!(compare_ast(None, None));
    assert!(!compare_ast(Some(&tree), None));
    assert!(!compare_ast(None, Some(&tree)));

    let built = Node::binary("+", Node::leaf("1"), Node::leaf("2"));
    assert_eq!(tree, built);
    assert_ne!(tree, Node::binary("+", Node::leaf("2"), Node::leaf("1")));
}

#[test]
fn execution_tree_labels() {
    let env = env_with(&[("x", Complex::new(3.0, 0.0))]);

    let tree = execution_tree(&parse("-x").unwrap(), &env);
    assert_eq!(tree.label, "- = difference");
    assert_eq!(tree.children[0].label, "0 = 0");
    assert_eq!(tree.children[1].label, "x = 3");

    let tree = execution_tree(&parse("√4 / sqrt(4)").unwrap(), &env);
    assert_eq!(tree.label, "/ = quotient");
    assert_eq!(tree.children[0].label, "√ = root");
    assert_eq!(tree.children[1].label, "sqrt = sqrt");

    let tree = execution_tree(&parse("SIN(i)^2").unwrap(), &env);
    assert_eq!(tree.label, "^ = power");
    assert_eq!(tree.children[0].label, "SIN = SIN");
    assert_eq!(tree.children[0].children[0].label, "i = 1i");

    let tree = execution_tree(&parse("z").unwrap(), &env);
    assert_eq!(tree.label, "z = z");

    let tree = execution_tree(&Node::unary("+", Node::leaf("1")), &env);
    assert_eq!(tree.label, "+ = ?");

    let rendered = execution_tree(&parse("x*2").unwrap(), &env).to_string();
    assert_eq!(rendered, "* = product\n  x = 3\n  2 = 2\n");
}

#[test]
fn malformed_trees_fail_to_evaluate() {
    let env = Environment::new();
    let eval = |node: &Node| complexpr::interpreter::evaluator::evaluate(node, &env);

    assert_eq!(eval(&Node::unary("+", Node::leaf("1"))),
               Err(RuntimeError::MalformedNode { token: "+".to_string(),
                                                 arity: 1, }));
    assert_eq!(eval(&Node::binary("sin", Node::leaf("1"), Node::leaf("2"))),
               Err(RuntimeError::MalformedNode { token: "sin".to_string(),
                                                 arity: 2, }));
    assert_eq!(eval(&Node::unary("sinh", Node::leaf("1"))),
               Err(RuntimeError::UnknownFunction { name: "sinh".to_string() }));
    assert_eq!(eval(&Node::leaf("1..2")),
               Err(RuntimeError::MalformedLiteral { literal: "1..2".to_string() }));
}

#[test]
fn expression_keeps_its_last_success() {
    let env = env_with(&[("x", Complex::new(2.0, 0.0))]);
    let mut expr = Expression::new("x^2 + 1", env);

    assert!(expr.ast().is_none());
    assert_eq!(expr.lisp(), "()");
    assert_eq!(expr.execution_tree().label, NOTHING_EVALUATED);

    assert_eq!(expr.evaluate().unwrap(), Complex::new(5.0, 0.0));
    assert_eq!(expr.lisp(), "(+ (^ x 2) 1)");
    assert_eq!(expr.lisp(), expr.lisp());
    assert_eq!(expr.result(), Some(Complex::new(5.0, 0.0)));

    let report = expr.report();
    assert!(report.starts_with("Expression: x^2 + 1\n+ = sum\n"), "{report}");
    assert!(report.contains("Result: 5\n"), "{report}");
    assert!(report.ends_with("LISP: (+ (^ x 2) 1)\n"), "{report}");
}

#[test]
fn failed_evaluation_exposes_nothing() {
    let mut expr = Expression::new("y + 1", Environment::new());
    assert!(expr.evaluate().is_err());
    assert!(expr.ast().is_none());
    assert!(expr.result().is_none());
    assert_eq!(expr.lisp(), "()");
}

#[test]
fn expressions_compare_by_structure() {
    let env = env_with(&[("x", Complex::new(1.0, 0.0))]);
    let mut a = Expression::new("x+x", env.clone());
    let mut b = Expression::new("2*x", env);
    a.evaluate().unwrap();
    b.evaluate().unwrap();

    assert_eq!(a.result(), b.result());
    assert!(!a.same_structure(&b));
    assert!(a.same_structure(&a.clone()));

    let report = a.comparison_report(&b);
    assert!(report.contains("Structurally equal: false\n"), "{report}");
    assert!(report.contains("LISP 2: (* 2 x)\n"), "{report}");
}

#[test]
fn builtin_names_resolve_in_any_case() {
    use complexpr::interpreter::evaluator::function::{BUILTIN_FUNCTIONS, Function};

    for name in BUILTIN_FUNCTIONS {
        let function = Function::from_name(name).unwrap_or_else(|| panic!("{name} is not resolved"));
        assert_eq!(function.name(), *name);
        assert_eq!(Function::from_name(&name.to_uppercase()), Some(function));
    }
    assert_eq!(Function::from_name("sinh"), None);
}
