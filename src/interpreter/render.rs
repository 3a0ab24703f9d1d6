use std::fmt::{self, Display};

use crate::{
    ast::{Node, NodeKind},
    interpreter::environment::Environment,
};

/// Renders a tree in prefix (S-expression) notation.
///
/// A leaf renders as its token; any other node as `(token child ...)`.
///
/// # Example
/// ```
/// use complexpr::interpreter::{parser::parse, render::to_lisp};
///
/// assert_eq!(to_lisp(&parse("2*3+4").unwrap()), "(+ (* 2 3) 4)");
/// assert_eq!(to_lisp(&parse("-x").unwrap()), "(- 0 x)");
/// assert_eq!(to_lisp(&parse("3+4i").unwrap()), "3+4i");
/// ```
#[must_use]
pub fn to_lisp(node: &Node) -> String {
    let mut out = String::new();
    write_lisp(node, &mut out);
    out
}

fn write_lisp(node: &Node, out: &mut String) {
    if node.is_leaf() {
        out.push_str(node.token());
        return;
    }

    out.push('(');
    out.push_str(node.token());
    for child in node.children() {
        out.push(' ');
        write_lisp(child, out);
    }
    out.push(')');
}

/// A labelled tree for presenting an evaluation to a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionTree {
    /// The text shown for this node.
    pub label:    String,
    /// Child nodes in order.
    pub children: Vec<Self>,
}

impl ExecutionTree {
    /// Creates a childless node.
    #[must_use]
    pub fn leaf(label: impl Into<String>) -> Self {
        Self { label:    label.into(),
               children: Vec::new(), }
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        for _ in 0..depth {
            f.write_str("  ")?;
        }
        writeln!(f, "{}", self.label)?;
        self.children
            .iter()
            .try_for_each(|child| child.write_indented(f, depth + 1))
    }
}

/// One line per node, children indented by two spaces.
impl Display for ExecutionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}

/// Builds the display tree of a syntax tree.
///
/// Every label reads `token = description`. A literal describes itself, a
/// bound variable shows its value, an operator or function shows a readable
/// name. Building the tree never fails: an operator whose number of children
/// does not fit it is described as `?`.
///
/// # Example
/// ```
/// use complexpr::interpreter::{
///     environment::Environment, parser::parse, render::execution_tree, value::Complex,
/// };
///
/// let mut env = Environment::new();
/// env.insert("x", Complex::new(3.0, 0.0));
///
/// let tree = execution_tree(&parse("x+1").unwrap(), &env);
/// assert_eq!(tree.label, "+ = sum");
/// assert_eq!(tree.children[0].label, "x = 3");
/// assert_eq!(tree.children[1].label, "1 = 1");
/// ```
#[must_use]
pub fn execution_tree(node: &Node, environment: &Environment) -> ExecutionTree {
    ExecutionTree { label:    format!("{} = {}", node.token(), describe(node, environment)),
                    children: node.children()
                                  .iter()
                                  .map(|child| execution_tree(child, environment))
                                  .collect(), }
}

fn describe(node: &Node, environment: &Environment) -> String {
    match node.kind() {
        NodeKind::Literal => node.token().to_string(),
        NodeKind::Variable => environment.get(node.token())
                                         .map_or_else(|| node.token().to_string(),
                                                      |value| value.to_string()),
        NodeKind::Operator => {
            let arity = if is_binary_symbol(node.token()) { 2 } else { 1 };
            if node.children().len() == arity {
                operation_name(node.token()).to_string()
            } else {
                "?".to_string()
            }
        },
    }
}

fn is_binary_symbol(token: &str) -> bool {
    matches!(token, "+" | "-" | "*" | "/" | "^")
}

/// Human-readable name of an operator or function token.
///
/// Unlisted tokens (including `exp`, `abs`, `sqrt` and any spelling other than
/// lowercase) describe themselves.
#[must_use]
pub fn operation_name(token: &str) -> &str {
    match token {
        "+" => "sum",
        "-" => "difference",
        "*" => "product",
        "/" => "quotient",
        "^" => "power",
        "√" => "root",
        "sin" => "sine",
        "cos" => "cosine",
        "tan" => "tangent",
        "log" => "logarithm",
        other => other,
    }
}
