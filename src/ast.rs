use std::ptr;

/// What a [`Node`] stands for, derived from its token and shape.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// A leaf holding a real or complex literal such as `4`, `2.5` or `3+4i`.
    Literal,
    /// A leaf naming a variable, including the reserved `i`.
    Variable,
    /// A node with one or two children: an operator (`+ - * / ^ √`) or a
    /// function call.
    Operator,
}

/// A node of the abstract syntax tree.
///
/// A node is a token plus an ordered list of children. Leaves carry either a
/// literal exactly as written or a variable name. Interior nodes carry an
/// operator symbol or a function name as written (case preserved) and own one
/// or two children. The shape is fixed at construction.
///
/// Unary minus has no token of its own: `-x` is built as `(- 0 x)` by
/// [`Node::negation`]. Such a node renders and compares like any other
/// subtraction from zero, but evaluates as a sign flip of `x`, which keeps the
/// sign of zero components (`-1` is `(-1, -0)`).
///
/// # Example
/// ```
/// use complexpr::ast::{Node, NodeKind};
///
/// let node = Node::binary("+", Node::leaf("1"), Node::leaf("x"));
/// assert_eq!(node.token(), "+");
/// assert_eq!(node.kind(), NodeKind::Operator);
/// assert_eq!(node.children()[1].kind(), NodeKind::Variable);
/// ```
#[derive(Debug, Clone)]
pub struct Node {
    token:    String,
    children: Vec<Self>,
    negation: bool,
}

impl Node {
    /// Creates a leaf node.
    #[must_use]
    pub fn leaf(token: impl Into<String>) -> Self {
        Self { token:    token.into(),
               children: Vec::new(),
               negation: false, }
    }

    /// Creates a node with a single child, such as `√` or a function call.
    #[must_use]
    pub fn unary(token: impl Into<String>, operand: Self) -> Self {
        Self { token:    token.into(),
               children: vec![operand],
               negation: false, }
    }

    /// Creates a node with two children, such as `+` or `^`.
    #[must_use]
    pub fn binary(token: impl Into<String>, left: Self, right: Self) -> Self {
        Self { token:    token.into(),
               children: vec![left, right],
               negation: false, }
    }

    /// Creates the unary minus of `operand`, shaped as `(- 0 operand)`.
    ///
    /// # Example
    /// ```
    /// use complexpr::ast::Node;
    ///
    /// let negated = Node::negation(Node::leaf("x"));
    /// let subtracted = Node::binary("-", Node::leaf("0"), Node::leaf("x"));
    ///
    /// assert!(negated.is_negation());
    /// assert!(!subtracted.is_negation());
    /// assert_eq!(negated, subtracted);
    /// ```
    #[must_use]
    pub fn negation(operand: Self) -> Self {
        Self { negation: true,
               ..Self::binary("-", Self::leaf("0"), operand) }
    }

    /// Returns the node token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the children in order.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Returns `true` if the node was built by [`Node::negation`].
    #[must_use]
    pub const fn is_negation(&self) -> bool {
        self.negation
    }

    /// Returns `true` if the node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Classifies the node.
    ///
    /// Leaves whose token starts with a digit, `.`, `+` or `-` are literals;
    /// any other leaf is a variable.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        if !self.is_leaf() {
            NodeKind::Operator
        } else if is_literal_token(&self.token) {
            NodeKind::Literal
        } else {
            NodeKind::Variable
        }
    }

    /// Counts every node of the tree, this one included.
    #[must_use]
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(Self::size).sum::<usize>()
    }

    /// Returns the length of the longest root-to-leaf path.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(Self::depth).max().unwrap_or(0)
    }
}

/// Structural equality: same tokens, same shape. Whether a subtraction from
/// zero came from unary minus is not compared.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        compare_ast(Some(self), Some(other))
    }
}

impl Eq for Node {}

/// Compares two syntax trees for exact structural equality.
///
/// Two absent trees are equal, and a tree always equals itself. Otherwise the
/// tokens must match exactly (case-sensitive) and every pair of children must
/// compare equal, recursively. Numeric value plays no part: `1+1` and `2`
/// evaluate alike but compare unequal.
///
/// # Example
/// ```
/// use complexpr::{ast::compare_ast, interpreter::parser::parse};
///
/// let a = parse("2*(x+1)").unwrap();
/// let b = parse("2 * (x + 1)").unwrap();
/// let c = parse("2*x+2").unwrap();
///
/// assert!(compare_ast(Some(&a), Some(&b)));
/// assert!(!compare_ast(Some(&a), Some(&c)));
/// assert!(!compare_ast(Some(&a), None));
/// ```
#[must_use]
pub fn compare_ast(a: Option<&Node>, b: Option<&Node>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            ptr::eq(a, b)
            || (a.token == b.token
                && a.children.len() == b.children.len()
                && a.children
                    .iter()
                    .zip(&b.children)
                    .all(|(x, y)| compare_ast(Some(x), Some(y))))
        },
        _ => false,
    }
}

/// Returns `true` if `token` has the lead character of a numeric or complex
/// literal.
///
/// # Example
/// ```
/// use complexpr::ast::is_literal_token;
///
/// assert!(is_literal_token("3+4i"));
/// assert!(is_literal_token(".5"));
/// assert!(!is_literal_token("x"));
/// assert!(!is_literal_token(""));
/// ```
#[must_use]
pub fn is_literal_token(token: &str) -> bool {
    token.chars()
         .next()
         .is_some_and(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-'))
}
