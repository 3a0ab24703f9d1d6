/// The evaluator module computes the value of a syntax tree.
///
/// It walks the tree produced by the parser, resolves variables from an
/// environment and applies complex arithmetic and the built-in functions.
///
/// # Responsibilities
/// - Evaluates literals, variables, operators and function calls.
/// - Enforces real exponents and real square-root arguments.
/// - Reports runtime errors for trees it cannot evaluate.
pub mod evaluator;
/// The environment module holds variable bindings and their discovery.
///
/// # Responsibilities
/// - Binds the reserved imaginary unit `i` in every environment.
/// - Finds the one-letter variable names an expression needs.
/// - Asks a host-supplied resolver for their values.
pub mod environment;
/// The expression module pairs a source text with its evaluation.
///
/// It is the object a host keeps per expression: evaluate once, then inspect
/// the tree, its renderings, or compare it with another expression.
pub mod expression;
/// The lexer module scans raw expression text for variable names.
///
/// Parsing itself works character by character and needs no token stream;
/// this scanner only serves variable discovery on the unnormalized text.
pub mod lexer;
/// The parser module builds the syntax tree from expression text.
///
/// # Responsibilities
/// - Strips whitespace and parses by recursive descent with one character of
///   lookahead.
/// - Distinguishes real and complex literals.
/// - Reports syntax errors with the position they occurred at.
pub mod parser;
/// The render module turns syntax trees into text for presentation.
///
/// # Responsibilities
/// - Renders S-expressions.
/// - Builds labelled execution trees showing operations and variable values.
pub mod render;
/// The value module defines the complex number type.
pub mod value;
