/// Tree evaluation.
///
/// Walks a syntax tree bottom-up against a variable environment, applying
/// the complex arithmetic for each operator node and enforcing the real-only
/// constraints of `^` and square roots.
pub mod core;

/// Built-in functions.
///
/// Declares the closed set of callable functions, resolves names
/// case-insensitively and applies them to complex arguments.
pub mod function;

pub use self::core::{EvalResult, evaluate};
