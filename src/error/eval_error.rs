use crate::ast::Operator;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents internal-consistency failures found while evaluating a tree.
///
/// Trees built by the parser never produce these; seeing one means a tree was
/// assembled by hand incorrectly or the parser and evaluator disagree about
/// the operator set.
pub enum EvalError {
    /// A node applies an operator to the wrong number of operands.
    ArityMismatch {
        /// The operator stored in the node.
        operator: Operator,
        /// Operands the operator requires.
        expected: usize,
        /// Operands the node carries.
        found:    usize,
    },
    /// A node handle does not exist in the arena being evaluated.
    DanglingNode,
    /// The tree is deeper than the evaluator is willing to recurse.
    DepthExceeded {
        /// The maximum recursion depth.
        max: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ArityMismatch { operator,
                                  expected,
                                  found, } => write!(f,
                                                     "Internal error: '{operator}' node carries {found} operand(s) instead of {expected}."),
            Self::DanglingNode => write!(f, "Internal error: Node handle is not part of this arena."),
            Self::DepthExceeded { max } => {
                write!(f, "Internal error: Tree is deeper than {max} levels.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
