use crate::interpreter::value::Complex;

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while evaluating a syntax tree.
pub enum RuntimeError {
    /// A variable leaf is not bound in the environment.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// A single-child node names no known function.
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
    /// The right operand of `^` has a non-zero imaginary part.
    NonRealExponent {
        /// The exponent that was computed.
        exponent: Complex,
    },
    /// The argument of `√` or `sqrt` has a non-zero imaginary part.
    NonRealRadicand {
        /// The radicand that was computed.
        radicand: Complex,
    },
    /// A literal leaf could not be read as a number.
    MalformedLiteral {
        /// The literal text.
        literal: String,
    },
    /// A node whose token does not fit its number of children.
    MalformedNode {
        /// The node token.
        token: String,
        /// The number of children found.
        arity: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name } => write!(f, "Unknown variable '{name}'."),
            Self::UnknownFunction { name } => write!(f, "Unknown function '{name}'."),
            Self::NonRealExponent { exponent } => {
                write!(f, "Exponent must be real, found {exponent}.")
            },
            Self::NonRealRadicand { radicand } => {
                write!(f, "Square root only supports real numbers, found {radicand}.")
            },
            Self::MalformedLiteral { literal } => write!(f, "Invalid number '{literal}'."),
            Self::MalformedNode { token, arity } => {
                write!(f, "Operator '{token}' cannot take {arity} operand(s).")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
