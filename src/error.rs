/// Parsing errors.
///
/// Defines every failure detected while reading expression text: incomplete
/// input, unbalanced parentheses, stray characters, unknown function names and
/// malformed numeric literals.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while evaluating a syntax tree against a
/// variable environment, such as unbound variables or complex exponents.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug, Clone, PartialEq)]
/// Any failure of a parse-and-evaluate call.
pub enum Error {
    /// The text could not be parsed.
    Parse(ParseError),
    /// The tree could not be evaluated.
    Runtime(RuntimeError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for Error {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}
