use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        parser::{core::ParseResult, cursor::Cursor},
        value::Complex,
    },
};

/// Returns `true` for the characters a complex literal may span before its
/// `i`.
const fn is_literal_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '+' | '-')
}

/// Parses a real or complex numeric literal into a leaf node.
///
/// The cursor looks ahead over digits, `.`, `+` and `-`. If that run ends in
/// an `i`, everything up to and including the `i` is one complex literal, so
/// `3+4i` and `1-i` become single leaves read by [`Complex::parse`].
/// Otherwise the literal is digits with at most one fractional part, and
/// the `+` or `-` that follows is left for the binary operator levels. A real
/// literal never carries a sign, so a span starting with one is empty.
///
/// The leaf keeps the literal text exactly as scanned.
///
/// # Errors
/// Returns `MalformedLiteral` if the scanned text is not a number, as with
/// `.`, `1+2+3i` or the empty span before `+3`.
///
/// # Example
/// ```
/// use complexpr::interpreter::parser::{cursor::Cursor, literal::parse_number};
///
/// let mut cursor = Cursor::new("3+4i*2");
/// assert_eq!(parse_number(&mut cursor).unwrap().token(), "3+4i");
/// assert_eq!(cursor.rest(), "*2");
///
/// let mut cursor = Cursor::new("3+4*2");
/// assert_eq!(parse_number(&mut cursor).unwrap().token(), "3");
/// assert_eq!(cursor.rest(), "+4*2");
/// ```
pub fn parse_number(cursor: &mut Cursor) -> ParseResult<Node> {
    let start = cursor.position();

    let is_complex = cursor.lookahead()
                           .find(|&c| !is_literal_char(c))
                           .is_some_and(|c| c == 'i');

    if is_complex {
        cursor.eat_while(is_literal_char);
        cursor.bump();
    } else {
        cursor.eat_while(|c| c.is_ascii_digit());
        if cursor.eat('.') {
            cursor.eat_while(|c| c.is_ascii_digit());
        }
    }

    let literal = cursor.slice_from(start);
    Complex::parse(&literal).map_err(|_| ParseError::MalformedLiteral { literal: literal.clone(),
                                                                        position: start, })?;

    Ok(Node::leaf(literal))
}
