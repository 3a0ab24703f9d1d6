use std::collections::HashMap;

use logos::Logos;
use tracing::debug;

use crate::interpreter::{
    lexer::{Token, variable_name},
    value::{
        Complex,
        complex::{I, ZERO},
    },
};

/// The reserved name of the imaginary unit.
pub const IMAGINARY_UNIT: &str = "i";

/// The read-only variable bindings an expression is evaluated against.
///
/// Every environment binds `i` to `(0, 1)`. Attempts to rebind `i` are
/// ignored.
///
/// # Example
/// ```
/// use complexpr::interpreter::{environment::Environment, value::Complex};
///
/// let mut env = Environment::new();
/// env.insert("x", Complex::new(3.0, 2.0));
/// env.insert("i", Complex::new(7.0, 0.0));
///
/// assert_eq!(env.get("x"), Some(Complex::new(3.0, 2.0)));
/// assert_eq!(env.get("i"), Some(Complex::new(0.0, 1.0)));
/// assert_eq!(env.get("y"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    variables: HashMap<String, Complex>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment holding only `i`.
    #[must_use]
    pub fn new() -> Self {
        Self { variables: HashMap::from([(IMAGINARY_UNIT.to_string(), I)]) }
    }

    /// Binds `name` to `value`, replacing any earlier binding. Binding `i` has
    /// no effect.
    pub fn insert(&mut self, name: impl Into<String>, value: Complex) {
        let name = name.into();
        if name != IMAGINARY_UNIT {
            self.variables.insert(name, value);
        }
    }

    /// Looks up a variable.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Complex> {
        self.variables.get(name).copied()
    }

    /// Returns `true` if `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Iterates over every binding, `i` included, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Complex)> {
        self.variables.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

impl FromIterator<(String, Complex)> for Environment {
    fn from_iter<T: IntoIterator<Item = (String, Complex)>>(iter: T) -> Self {
        let mut environment = Self::new();
        for (name, value) in iter {
            environment.insert(name, value);
        }
        environment
    }
}

impl From<HashMap<String, Complex>> for Environment {
    fn from(value: HashMap<String, Complex>) -> Self {
        value.into_iter().collect()
    }
}

/// Finds the variable names an expression needs values for.
///
/// A name is a single ASCII letter that is not preceded by another letter, is
/// not followed by `(`, and is not `i`. Names are returned once each, in order
/// of first appearance. Letters inside longer runs are never names on their
/// own; a run such as `xy` still yields `x`, and the run as a whole fails later
/// as an unknown variable.
///
/// Only lowercase `i` is skipped. An uppercase `I` is discovered like any
/// other letter, since only `i` is bound to the imaginary unit.
///
/// # Example
/// ```
/// use complexpr::interpreter::environment::discover_variables;
///
/// assert_eq!(discover_variables("x*y + 2i*x"), vec!["x", "y"]);
/// assert_eq!(discover_variables("f(2) + i"), Vec::<String>::new());
/// assert_eq!(discover_variables("z (1)"), vec!["z"]);
/// ```
#[must_use]
pub fn discover_variables(source: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let Ok(token) = token else { continue };
        if let Some(letter) = variable_name(token, lexer.slice())
           && letter != 'i'
        {
            let name = letter.to_string();
            if !names.contains(&name) {
                names.push(name);
            }
        }
    }

    names
}

/// The answer a [`VariableResolver`] gives for one variable.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Bind the variable to this value.
    Value(Complex),
    /// No value supplied; the variable defaults to `0`.
    Unset,
    /// Abort the whole operation.
    Cancelled,
}

/// Supplies values for variables found in an expression.
///
/// Hosts implement this to ask the user, read configuration, or anything
/// else. Closures of type `FnMut(&str) -> Resolution` implement it.
pub trait VariableResolver {
    /// Produces a value for `name`.
    fn resolve(&mut self, name: &str) -> Resolution;
}

impl<F> VariableResolver for F where F: FnMut(&str) -> Resolution
{
    fn resolve(&mut self, name: &str) -> Resolution {
        self(name)
    }
}

/// Builds an environment for one or more expressions.
///
/// Variables are discovered in each source in turn and resolved once each.
/// Returns `None` as soon as the resolver cancels.
///
/// # Example
/// ```
/// use complexpr::interpreter::{
///     environment::{Resolution, collect_variables},
///     value::Complex,
/// };
///
/// let env = collect_variables(&["x + y"], &mut |name: &str| match name {
///               "x" => Resolution::Value(Complex::new(1.0, 1.0)),
///               _ => Resolution::Unset,
///           }).unwrap();
/// assert_eq!(env.get("x"), Some(Complex::new(1.0, 1.0)));
/// assert_eq!(env.get("y"), Some(Complex::new(0.0, 0.0)));
///
/// assert!(collect_variables(&["x"], &mut |_: &str| Resolution::Cancelled).is_none());
/// ```
pub fn collect_variables<R>(sources: &[&str], resolver: &mut R) -> Option<Environment>
    where R: VariableResolver + ?Sized
{
    let mut environment = Environment::new();

    for source in sources {
        for name in discover_variables(source) {
            if environment.contains(&name) {
                continue;
            }
            let value = match resolver.resolve(&name) {
                Resolution::Value(value) => value,
                Resolution::Unset => ZERO,
                Resolution::Cancelled => {
                    debug!(variable = %name, "variable resolution cancelled");
                    return None;
                },
            };
            environment.insert(name, value);
        }
    }

    Some(environment)
}
