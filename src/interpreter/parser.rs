/// Parser entry point and shared result type.
///
/// Normalizes the input, drives the grammar from its lowest precedence level
/// and rejects unconsumed input.
pub mod core;

/// Character cursor over the normalized expression.
///
/// Provides one-character lookahead and slicing; a fresh cursor is created
/// for every parse, so parsing holds no shared mutable state.
pub mod cursor;

/// Binary operator parsing.
///
/// Implements the left-associative additive and multiplicative levels and the
/// right-associative power level.
pub mod binary;

/// Unary and primary parsing.
///
/// Handles unary minus, parenthesized groups, identifiers, function calls and
/// the prefix root operator `√`.
pub mod unary;

/// Literal scanning.
///
/// Reads real and complex numeric literals straight from the character
/// stream, deciding between the two by looking ahead for an `i`.
pub mod literal;

pub use self::core::{ParseResult, parse};
