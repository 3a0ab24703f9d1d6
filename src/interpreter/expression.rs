use std::fmt::Display;

use tracing::debug;

use crate::{
    ast::{Node, compare_ast},
    error::Error,
    interpreter::{
        environment::Environment,
        evaluator::evaluate,
        parser::parse,
        render::{ExecutionTree, execution_tree, to_lisp},
        value::Complex,
    },
};

/// Label of the execution tree before anything was evaluated.
pub const NOTHING_EVALUATED: &str = "no expression evaluated";

/// One expression together with its environment and its last evaluation.
///
/// [`Expression::evaluate`] parses and evaluates the source. Only a successful
/// run replaces the stored tree and result; a failure leaves them as they
/// were. Inspection methods read the stored tree and never re-parse.
///
/// # Example
/// ```
/// use complexpr::interpreter::{
///     environment::Environment, expression::Expression, value::Complex,
/// };
///
/// let mut env = Environment::new();
/// env.insert("x", Complex::new(2.0, 0.0));
///
/// let mut expr = Expression::new("x^3 - 1", env);
/// assert_eq!(expr.evaluate().unwrap(), Complex::new(7.0, 0.0));
/// assert_eq!(expr.lisp(), "(- (^ x 3) 1)");
/// assert_eq!(expr.result(), Some(Complex::new(7.0, 0.0)));
/// ```
#[derive(Debug, Clone)]
pub struct Expression {
    source:      String,
    environment: Environment,
    root:        Option<Node>,
    result:      Option<Complex>,
}

impl Expression {
    /// Wraps `source` and the environment it will be evaluated against.
    #[must_use]
    pub fn new(source: impl Into<String>, environment: Environment) -> Self {
        Self { source: source.into(),
               environment,
               root: None,
               result: None }
    }

    /// Parses and evaluates the source.
    ///
    /// # Errors
    /// Returns the parse or runtime error that stopped the evaluation. Any
    /// tree and result from an earlier success are kept.
    pub fn evaluate(&mut self) -> Result<Complex, Error> {
        let root = parse(&self.source)?;
        let value = evaluate(&root, &self.environment)?;
        debug!(expression = %self.source, result = %value, "evaluated");

        self.root = Some(root);
        self.result = Some(value);
        Ok(value)
    }

    /// Returns the source text as given.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the environment.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Returns the tree of the last successful evaluation.
    #[must_use]
    pub const fn ast(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    /// Returns the value of the last successful evaluation.
    #[must_use]
    pub const fn result(&self) -> Option<Complex> {
        self.result
    }

    /// Renders the stored tree as an S-expression, or `()` if there is none.
    #[must_use]
    pub fn lisp(&self) -> String {
        self.root.as_ref().map_or_else(|| "()".to_string(), to_lisp)
    }

    /// Builds the display tree of the stored tree.
    #[must_use]
    pub fn execution_tree(&self) -> ExecutionTree {
        self.root
            .as_ref()
            .map_or_else(|| ExecutionTree::leaf(NOTHING_EVALUATED),
                         |root| execution_tree(root, &self.environment))
    }

    /// Returns `true` if both stored trees are structurally identical.
    #[must_use]
    pub fn same_structure(&self, other: &Self) -> bool {
        compare_ast(self.ast(), other.ast())
    }

    /// Formats the expression, its execution tree, result and S-expression.
    #[must_use]
    pub fn report(&self) -> String {
        let mut out = String::new();
        push_line(&mut out, "Expression", &self.source);
        out.push_str(&self.execution_tree().to_string());
        if let Some(result) = self.result {
            push_line(&mut out, "Result", result);
        }
        push_line(&mut out, "LISP", self.lisp());
        out
    }

    /// Formats a structural comparison of two expressions.
    #[must_use]
    pub fn comparison_report(&self, other: &Self) -> String {
        let mut out = String::new();
        push_line(&mut out, "Expression 1", &self.source);
        push_line(&mut out, "Expression 2", &other.source);
        push_line(&mut out, "Structurally equal", self.same_structure(other));
        push_line(&mut out, "LISP 1", self.lisp());
        push_line(&mut out, "LISP 2", other.lisp());
        out
    }
}

fn push_line(out: &mut String, label: &str, value: impl Display) {
    out.push_str(&format!("{label}: {value}\n"));
}
