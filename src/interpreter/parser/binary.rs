use crate::{
    ast::Node,
    interpreter::parser::{
        core::ParseResult,
        cursor::Cursor,
        unary::{parse_factor, parse_primary},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles the left-associative operators `+` and `-`, so `a - b - c` parses
/// as `(a - b) - c`.
///
/// The rule is: `expression := term (("+" | "-") term)*`
pub fn parse_additive(cursor: &mut Cursor) -> ParseResult<Node> {
    let mut left = parse_multiplicative(cursor)?;

    while let Some(op @ ('+' | '-')) = cursor.peek() {
        cursor.bump();
        let right = parse_multiplicative(cursor)?;
        left = Node::binary(op, left, right);
    }

    Ok(left)
}

/// Parses multiplication and division expressions.
///
/// The rule is: `term := factor (("*" | "/") factor)*`
pub fn parse_multiplicative(cursor: &mut Cursor) -> ParseResult<Node> {
    let mut left = parse_factor(cursor)?;

    while let Some(op @ ('*' | '/')) = cursor.peek() {
        cursor.bump();
        let right = parse_factor(cursor)?;
        left = Node::binary(op, left, right);
    }

    Ok(left)
}

/// Parses an exponentiation.
///
/// The exponent re-enters [`parse_factor`], which makes `^` right-associative
/// and lets the exponent carry its own unary minus: `2^-3^2` parses as
/// `2 ^ (-(3 ^ 2))`.
///
/// The rule is: `power := primary ("^" factor)?`
pub fn parse_power(cursor: &mut Cursor) -> ParseResult<Node> {
    let base = parse_primary(cursor)?;

    if cursor.eat('^') {
        let exponent = parse_factor(cursor)?;
        return Ok(Node::binary('^', base, exponent));
    }

    Ok(base)
}
