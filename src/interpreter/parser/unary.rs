use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        evaluator::function::Function,
        parser::{
            binary::parse_power,
            core::{ParseResult, parse_expression},
            cursor::Cursor,
            literal::parse_number,
        },
    },
};

/// Parses a factor: a power, optionally negated.
///
/// Unary minus is right-recursive, so `--x` negates twice. The negation is
/// recorded as a subtraction from zero, `(- 0 x)`, marked so that it
/// evaluates as a sign flip.
///
/// Grammar: `factor := "-" factor | power`
pub fn parse_factor(cursor: &mut Cursor) -> ParseResult<Node> {
    if cursor.eat('-') {
        let operand = parse_factor(cursor)?;
        return Ok(Node::negation(operand));
    }

    parse_power(cursor)
}

/// Parses a primary (atomic) expression.
///
/// Every alternative is chosen from the current character alone:
///
/// ```text
/// primary := "(" expression ")"
///          | literal
///          | identifier ["(" expression ")"]
///          | "√" primary
/// ```
///
/// A `+` or `-` reaching this level is handed to the literal scanner when a
/// digit or `.` follows it. Signed complex literals such as `+3i` or the
/// `-4i` of `√-4i` are read whole; a signed real such as the `-4` of `√-4` is
/// a malformed literal.
///
/// # Errors
/// - `IncompleteExpression` at the end of input.
/// - `InvalidCharacter` if no alternative starts with the current character.
pub fn parse_primary(cursor: &mut Cursor) -> ParseResult<Node> {
    let position = cursor.position();
    let current = cursor.peek()
                        .ok_or(ParseError::IncompleteExpression { position })?;

    match current {
        '(' => parse_grouping(cursor),
        c if c.is_ascii_digit() || c == '.' => parse_number(cursor),
        '+' | '-' if cursor.peek_at(1)
                           .is_some_and(|c| c.is_ascii_digit() || c == '.') =>
        {
            parse_number(cursor)
        },
        c if c.is_alphabetic() => parse_identifier_or_function(cursor),
        '√' => parse_root(cursor),
        character => Err(ParseError::InvalidCharacter { character, position }),
    }
}

/// Parses a parenthesized expression: `"(" expression ")"`.
fn parse_grouping(cursor: &mut Cursor) -> ParseResult<Node> {
    cursor.bump();
    let inner = parse_expression(cursor)?;

    if !cursor.eat(')') {
        return Err(ParseError::UnmatchedParenthesis { position: cursor.position(),
                                                      function: None, });
    }

    Ok(inner)
}

/// Parses the prefix root operator: `"√" primary`.
///
/// The operand is a primary, so `√4*9` is `(√4)*9`.
fn parse_root(cursor: &mut Cursor) -> ParseResult<Node> {
    cursor.bump();
    let operand = parse_primary(cursor)?;
    Ok(Node::unary('√', operand))
}

/// Parses an identifier, which is either a variable or a function call.
///
/// The identifier is the longest run of letters. When `(` follows, it is a
/// call with a single argument and the name must match a known function
/// case-insensitively; the node keeps the name as written. Otherwise it is a
/// variable, looked up only at evaluation time.
///
/// # Errors
/// - `UnmatchedParenthesis` if the argument list is not closed.
/// - `UnknownFunction` if the name is not a known function.
fn parse_identifier_or_function(cursor: &mut Cursor) -> ParseResult<Node> {
    let start = cursor.position();
    cursor.eat_while(char::is_alphabetic);
    let name = cursor.slice_from(start);

    if !cursor.eat('(') {
        return Ok(Node::leaf(name));
    }

    let argument = parse_expression(cursor)?;
    if !cursor.eat(')') {
        return Err(ParseError::UnmatchedParenthesis { position: cursor.position(),
                                                      function: Some(name), });
    }

    if Function::from_name(&name).is_none() {
        return Err(ParseError::UnknownFunction { name,
                                                 position: start });
    }

    Ok(Node::unary(name, argument))
}
