#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing expression text.
///
/// Every position is a character index into the expression after whitespace
/// has been stripped.
pub enum ParseError {
    /// The input ended where a sub-expression was expected.
    IncompleteExpression {
        /// Where the missing sub-expression should have started.
        position: usize,
    },
    /// A `(` was never closed.
    UnmatchedParenthesis {
        /// Where the closing `)` was expected.
        position: usize,
        /// The function whose argument list was left open, if any.
        function: Option<String>,
    },
    /// A character that cannot start any sub-expression.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Where the character was found.
        position:  usize,
    },
    /// The expression parsed completely but input remained.
    TrailingInput {
        /// The unconsumed suffix.
        remainder: String,
        /// Where the suffix starts.
        position:  usize,
    },
    /// An identifier followed by `(` is not a known function.
    UnknownFunction {
        /// The identifier as written.
        name:     String,
        /// Where the identifier starts.
        position: usize,
    },
    /// A numeric or complex literal could not be read as a number.
    MalformedLiteral {
        /// The literal text.
        literal:  String,
        /// Where the literal starts.
        position: usize,
    },
}

impl ParseError {
    /// Returns the character position the error refers to.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::IncompleteExpression { position }
            | Self::UnmatchedParenthesis { position, .. }
            | Self::InvalidCharacter { position, .. }
            | Self::TrailingInput { position, .. }
            | Self::UnknownFunction { position, .. }
            | Self::MalformedLiteral { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IncompleteExpression { position } => {
                write!(f, "Syntax error at {position}: Incomplete expression.")
            },
            Self::UnmatchedParenthesis { position,
                                         function: Some(name), } => write!(f,
                                                                           "Syntax error at {position}: Unclosed parenthesis in call to '{name}'."),
            Self::UnmatchedParenthesis { position,
                                         function: None, } => {
                write!(f, "Syntax error at {position}: Unclosed parenthesis.")
            },
            Self::InvalidCharacter { character, position } => {
                write!(f, "Syntax error at {position}: Invalid character '{character}'.")
            },
            Self::TrailingInput { remainder, position } => {
                write!(f, "Syntax error at {position}: Unexpected input near '{remainder}'.")
            },
            Self::UnknownFunction { name, position } => {
                write!(f, "Syntax error at {position}: Unknown function '{name}'.")
            },
            Self::MalformedLiteral { literal, position } => {
                write!(f, "Syntax error at {position}: Invalid number '{literal}'.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
