use logos::Logos;

/// A lexical token of raw expression text, used to find variable names.
///
/// The scanner works on the text as the user typed it, whitespace included,
/// because a letter followed by a space is not followed by `(`.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// A run of ASCII letters immediately followed by `(`, such as `sin(`.
    #[regex(r"[A-Za-z]+\(")]
    Call,
    /// A run of ASCII letters not followed by `(`, such as `x` or `xy`.
    #[regex(r"[A-Za-z]+")]
    Word,
    /// Any other single character.
    #[regex(r"[^A-Za-z]")]
    Other,
}

/// Returns the one-letter variable name a token introduces, if any.
///
/// Only the first letter of a run can name a variable, since every later
/// letter is preceded by a letter. That first letter qualifies unless it is
/// directly followed by `(`, which only happens for a one-letter call such as
/// `f(`.
///
/// # Example
/// ```
/// use complexpr::interpreter::lexer::{Token, variable_name};
///
/// assert_eq!(variable_name(Token::Word, "xy"), Some('x'));
/// assert_eq!(variable_name(Token::Call, "sin("), Some('s'));
/// assert_eq!(variable_name(Token::Call, "f("), None);
/// assert_eq!(variable_name(Token::Other, "+"), None);
/// ```
#[must_use]
pub fn variable_name(token: Token, slice: &str) -> Option<char> {
    match token {
        Token::Word => slice.chars().next(),
        Token::Call if slice.len() > 2 => slice.chars().next(),
        Token::Call | Token::Other => None,
    }
}
