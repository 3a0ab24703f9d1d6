//! # complexpr
//!
//! complexpr parses and evaluates arithmetic expressions over complex numbers.
//! Parsing produces a syntax tree that can be rendered as an S-expression,
//! shown as a labelled execution tree, or compared structurally with the tree
//! of another expression.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc, clippy::float_cmp)]

use crate::{
    ast::compare_ast,
    error::Error,
    interpreter::{environment::Environment, parser::parse, value::Complex},
};

/// Defines the syntax tree.
///
/// This module declares the `Node` type: a token with an ordered list of
/// children, built bottom-up by the parser and read by the evaluator, the
/// renderers and the structural comparator.
///
/// # Responsibilities
/// - Represents literals, variables, operators and function calls uniformly.
/// - Classifies nodes by token and shape.
/// - Compares trees for exact structural equality.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// # Responsibilities
/// - Defines error enums for every failure mode of the parser and evaluator.
/// - Attaches positions and offending text for user feedback.
/// - Integrates with the standard error traits.
pub mod error;
/// Orchestrates parsing, evaluation and presentation.
///
/// This module ties together the parser, evaluator, complex values, variable
/// environments and renderers, and exposes them as the public API.
pub mod interpreter;
/// Small text helpers shared across modules.
pub mod util;

/// Parses and evaluates `source` against `environment`.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use complexpr::{evaluate, interpreter::{environment::Environment, value::Complex}};
///
/// let env = Environment::new();
/// assert_eq!(evaluate("2^3", &env).unwrap(), Complex::new(8.0, 0.0));
/// assert_eq!(evaluate("sqrt(-4)", &env).unwrap(), Complex::new(0.0, 2.0));
///
/// // 'x' is not bound.
/// assert!(evaluate("x + 1", &env).is_err());
/// ```
pub fn evaluate(source: &str, environment: &Environment) -> Result<Complex, Error> {
    let root = parse(source)?;
    Ok(interpreter::evaluator::evaluate(&root, environment)?)
}

/// Evaluates two expressions and reports whether their syntax trees are
/// structurally identical.
///
/// Both expressions must evaluate successfully. Their values play no part in
/// the verdict.
///
/// # Errors
/// Returns the first error raised by either expression.
///
/// # Examples
/// ```
/// use complexpr::{compare, interpreter::environment::Environment};
///
/// let env = Environment::new();
/// assert!(compare("1 + 2*i", "1+2*i", &env).unwrap());
/// assert!(!compare("1+1", "2", &env).unwrap());
/// ```
pub fn compare(a: &str, b: &str, environment: &Environment) -> Result<bool, Error> {
    let left = parse(a)?;
    interpreter::evaluator::evaluate(&left, environment)?;
    let right = parse(b)?;
    interpreter::evaluator::evaluate(&right, environment)?;

    Ok(compare_ast(Some(&left), Some(&right)))
}
