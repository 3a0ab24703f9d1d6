use tracing::trace;

use crate::{
    ast::{Node, NodeKind},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::function::{Function, real_sqrt},
        value::Complex,
    },
};

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a syntax tree against a variable environment.
///
/// Children are evaluated left to right before their parent, so the first
/// failure in reading order is the one reported. Division by zero is not an
/// error; it yields `NaN` or infinite components.
///
/// A unary minus from the parser negates its operand rather than subtracting
/// it from zero, so `log(-1)` is `-πi` and `log(0-1)` is `πi`.
///
/// # Errors
/// - `UnknownVariable` for a variable leaf missing from `environment`.
/// - `NonRealExponent` when the right operand of `^` is not real.
/// - `NonRealRadicand` when the operand of `√` or `sqrt` is not real.
/// - `UnknownFunction`, `MalformedLiteral` or `MalformedNode` for trees that
///   the parser would not produce.
///
/// # Example
/// ```
/// use complexpr::interpreter::{
///     environment::Environment, evaluator::evaluate, parser::parse, value::Complex,
/// };
///
/// let tree = parse("(3+2i)*(1-i)").unwrap();
/// let value = evaluate(&tree, &Environment::new()).unwrap();
/// assert_eq!(value, Complex::new(5.0, -1.0));
/// ```
pub fn evaluate(node: &Node, environment: &Environment) -> EvalResult<Complex> {
    let value = match (node.kind(), node.children()) {
        (NodeKind::Literal, _) => eval_literal(node.token())?,
        (NodeKind::Variable, _) => eval_variable(node.token(), environment)?,
        (_, [operand]) => {
            let operand = evaluate(operand, environment)?;
            eval_unary(node.token(), operand)?
        },
        (_, [_, operand]) if node.is_negation() => -evaluate(operand, environment)?,
        (_, [left, right]) => {
            let left = evaluate(left, environment)?;
            let right = evaluate(right, environment)?;
            eval_binary(node.token(), left, right)?
        },
        (_, children) => {
            return Err(RuntimeError::MalformedNode { token: node.token().to_string(),
                                                     arity: children.len(), });
        },
    };

    trace!(token = node.token(), %value, "evaluated");
    Ok(value)
}

fn eval_literal(literal: &str) -> EvalResult<Complex> {
    Complex::parse(literal).map_err(|_| RuntimeError::MalformedLiteral { literal: literal.to_string() })
}

fn eval_variable(name: &str, environment: &Environment) -> EvalResult<Complex> {
    environment.get(name)
               .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string() })
}

/// Applies `√` or a named function.
fn eval_unary(token: &str, operand: Complex) -> EvalResult<Complex> {
    match token {
        "√" => real_sqrt(operand),
        "+" | "-" | "*" | "/" | "^" => Err(RuntimeError::MalformedNode { token: token.to_string(),
                                                                         arity: 1, }),
        name => Function::from_name(name).ok_or_else(|| RuntimeError::UnknownFunction { name: name.to_string() })?
                                         .apply(operand),
    }
}

/// Applies one of `+ - * / ^`.
fn eval_binary(token: &str, left: Complex, right: Complex) -> EvalResult<Complex> {
    match token {
        "+" => Ok(left + right),
        "-" => Ok(left - right),
        "*" => Ok(left * right),
        "/" => Ok(left / right),
        "^" => {
            if !right.is_real() {
                return Err(RuntimeError::NonRealExponent { exponent: right });
            }
            Ok(left.powf(right.real))
        },
        _ => Err(RuntimeError::MalformedNode { token: token.to_string(),
                                               arity: 2, }),
    }
}
