use tracing::debug;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::parser::{binary::parse_additive, cursor::Cursor},
    util::strip_whitespace,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses expression text into a syntax tree.
///
/// All whitespace is removed first, then the grammar is applied from its
/// lowest precedence level:
///
/// ```text
/// expression := term (("+" | "-") term)*
/// term       := factor (("*" | "/") factor)*
/// factor     := "-" factor | power
/// power      := primary ("^" factor)?
/// primary    := "(" expression ")" | literal | identifier ["(" expression ")"]
///             | "√" primary
/// ```
///
/// The whole input must be consumed.
///
/// # Errors
/// Returns a [`ParseError`] describing the first syntax problem found.
///
/// # Example
/// ```
/// use complexpr::{error::ParseError, interpreter::parser::parse};
///
/// let tree = parse("2 * (x + 1)").unwrap();
/// assert_eq!(tree.token(), "*");
///
/// assert!(matches!(parse("2 +"), Err(ParseError::IncompleteExpression { position: 2 })));
/// assert!(matches!(parse("(1"), Err(ParseError::UnmatchedParenthesis { .. })));
/// ```
pub fn parse(source: &str) -> ParseResult<Node> {
    let text = strip_whitespace(source);
    debug!(expression = %text, "parsing");

    let mut cursor = Cursor::new(&text);
    let node = parse_expression(&mut cursor)?;

    if !cursor.is_at_end() {
        return Err(ParseError::TrailingInput { remainder: cursor.rest(),
                                               position:  cursor.position(), });
    }

    debug!(nodes = node.size(), depth = node.depth(), "parsed");
    Ok(node)
}

/// Parses a full expression at the lowest precedence level.
///
/// Grammar: `expression := term (("+" | "-") term)*`
pub fn parse_expression(cursor: &mut Cursor) -> ParseResult<Node> {
    parse_additive(cursor)
}
