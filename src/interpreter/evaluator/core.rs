use crate::{
    ast::{Node, NodeId},
    error::EvalError,
    interpreter::{
        arena::NodeArena,
        evaluator::operator::{apply_binary, apply_unary},
        parser::core::MAX_DEPTH,
    },
};

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, EvalError>;

/// Deepest tree the evaluator recurses into. Matches the parser's nesting
/// limit, so parsed trees always fit.
pub const MAX_EVAL_DEPTH: usize = MAX_DEPTH;

/// Evaluates the tree rooted at `root` with the free variable bound to `x`.
///
/// Every symbol evaluates to `x`, regardless of the character it was written
/// with. Each call walks the whole tree; nothing is cached.
///
/// # Errors
/// Only on malformed trees: see [`EvalError`].
///
/// # Example
/// ```
/// use grapher::{
///     ast::{Node, Operator},
///     interpreter::{arena::NodeArena, evaluator::core::evaluate},
/// };
///
/// let mut arena = NodeArena::new();
/// let x = arena.alloc(Node::Symbol('x')).unwrap();
/// let four = arena.alloc(Node::Number(4.0)).unwrap();
/// let sum = arena.alloc(Node::Binary { op:    Operator::Add,
///                                      left:  x,
///                                      right: four, })
///                .unwrap();
///
/// assert_eq!(evaluate(&arena, sum, 5.0).unwrap(), 9.0);
/// ```
pub fn evaluate(arena: &NodeArena, root: NodeId, x: f64) -> EvalResult<f64> {
    eval_node(arena, root, x, 0)
}

fn eval_node(arena: &NodeArena, id: NodeId, x: f64, depth: usize) -> EvalResult<f64> {
    if depth > MAX_EVAL_DEPTH {
        return Err(EvalError::DepthExceeded { max: MAX_EVAL_DEPTH });
    }

    match arena.get(id).ok_or(EvalError::DanglingNode)? {
        Node::Number(value) => Ok(*value),
        Node::Symbol(_) => Ok(x),
        Node::Unary { op, operand } => {
            let value = eval_node(arena, *operand, x, depth + 1)?;
            apply_unary(*op, value)
        },
        Node::Binary { op, left, right } => {
            let left = eval_node(arena, *left, x, depth + 1)?;
            let right = eval_node(arena, *right, x, depth + 1)?;
            apply_binary(*op, left, right)
        },
    }
}
