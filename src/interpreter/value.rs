/// Complex number support.
///
/// Defines the immutable `Complex` type used for every value an expression
/// can produce, together with its arithmetic, its elementary transcendental
/// functions, and the literal grammar used both by the parser and by hosts
/// reading user-supplied variable values.
pub mod complex;

pub use complex::{Complex, ParseComplexError};
