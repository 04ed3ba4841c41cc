use std::fmt;

use crate::interpreter::{arena::NodeArena, evaluator::core::MAX_EVAL_DEPTH};

/// Handle to a node stored in a [`NodeArena`].
///
/// Handles are only meaningful for the arena that produced them; the tree
/// never outlives its arena.
pub type NodeId = id_arena::Id<Node>;

/// The fixed set of operators understood by the formula language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `*`
    Multiply,
    /// `sin`
    Sine,
    /// `cos`
    Cosine,
}

impl Operator {
    /// Number of operands the operator takes.
    ///
    /// ```
    /// use grapher::ast::Operator;
    ///
    /// assert_eq!(Operator::Add.arity(), 2);
    /// assert_eq!(Operator::Cosine.arity(), 1);
    /// ```
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Add | Self::Multiply => 2,
            Self::Sine | Self::Cosine => 1,
        }
    }

    /// Looks up the operator spelled by `word`, if any.
    #[must_use]
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "+" => Some(Self::Add),
            "*" => Some(Self::Multiply),
            "sin" => Some(Self::Sine),
            "cos" => Some(Self::Cosine),
            _ => None,
        }
    }

    /// The keyword the operator is written as.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Multiply => "*",
            Self::Sine => "sin",
            Self::Cosine => "cos",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// A node of the formula tree.
///
/// Nodes are created once by the parser, stored in a [`NodeArena`] and never
/// mutated. Children are referenced by [`NodeId`], so every node except the
/// root has exactly one parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Node {
    /// A numeric literal.
    Number(f64),
    /// The free variable. The stored character is kept for display only;
    /// evaluation always substitutes the supplied input value.
    Symbol(char),
    /// A one-operand application such as `(sin x)`.
    Unary {
        /// The operator; expected to have arity 1.
        op:      Operator,
        /// The single operand.
        operand: NodeId,
    },
    /// A two-operand application such as `(+ x 1)`.
    Binary {
        /// The operator; expected to have arity 2.
        op:    Operator,
        /// Left operand.
        left:  NodeId,
        /// Right operand.
        right: NodeId,
    },
}

/// Borrowed view of a subtree that prints it back in prefix form.
///
/// Subtrees deeper than [`MAX_EVAL_DEPTH`] are printed as `…`.
///
/// ```
/// use grapher::interpreter::formula::Formula;
///
/// let formula = Formula::parse("(*   x (+ x 1))").unwrap();
/// assert_eq!(formula.to_string(), "(* x (+ x 1))");
/// ```
pub struct Prefix<'a> {
    arena: &'a NodeArena,
    root:  NodeId,
}

impl<'a> Prefix<'a> {
    /// Creates a printable view of the subtree rooted at `root`.
    #[must_use]
    pub const fn new(arena: &'a NodeArena, root: NodeId) -> Self {
        Self { arena, root }
    }

    fn write_node(&self, f: &mut fmt::Formatter<'_>, id: NodeId, depth: usize) -> fmt::Result {
        if depth > MAX_EVAL_DEPTH {
            return write!(f, "…");
        }

        match self.arena.get(id) {
            Some(Node::Number(value)) => write!(f, "{value}"),
            Some(Node::Symbol(name)) => write!(f, "{name}"),
            Some(Node::Unary { op, operand }) => {
                write!(f, "({op} ")?;
                self.write_node(f, *operand, depth + 1)?;
                write!(f, ")")
            },
            Some(Node::Binary { op, left, right }) => {
                write!(f, "({op} ")?;
                self.write_node(f, *left, depth + 1)?;
                write!(f, " ")?;
                self.write_node(f, *right, depth + 1)?;
                write!(f, ")")
            },
            None => write!(f, "<dangling>"),
        }
    }
}

impl fmt::Display for Prefix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_node(f, self.root, 0)
    }
}
