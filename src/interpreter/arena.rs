use id_arena::Arena;

use crate::{
    ast::{Node, NodeId},
    error::ParseError,
};

/// Number of nodes an arena holds when no capacity is given.
pub const DEFAULT_NODE_CAPACITY: usize = 1024;

/// Owns every node of one formula tree.
///
/// Nodes are carved out sequentially and are never freed one by one. The
/// whole tree is released at once when the arena is dropped or passed to
/// [`NodeArena::release`]. The node capacity is fixed at construction.
///
/// ```
/// use grapher::{ast::Node, interpreter::arena::NodeArena};
///
/// let mut arena = NodeArena::with_capacity(2);
/// let x = arena.alloc(Node::Symbol('x')).unwrap();
/// assert_eq!(arena.get(x), Some(&Node::Symbol('x')));
/// assert_eq!(arena.remaining(), 1);
/// ```
#[derive(Debug)]
pub struct NodeArena {
    nodes:    Arena<Node>,
    capacity: usize,
}

impl Default for NodeArena {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeArena {
    /// Creates an arena holding up to [`DEFAULT_NODE_CAPACITY`] nodes.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_NODE_CAPACITY)
    }

    /// Creates an arena holding up to `capacity` nodes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { nodes: Arena::with_capacity(capacity.min(DEFAULT_NODE_CAPACITY)),
               capacity }
    }

    /// Stores `node` and returns its handle.
    ///
    /// # Errors
    /// Returns [`ParseError::ArenaExhausted`] once the capacity is used up.
    pub fn alloc(&mut self, node: Node) -> Result<NodeId, ParseError> {
        if self.nodes.len() >= self.capacity {
            return Err(ParseError::ArenaExhausted { capacity: self.capacity });
        }
        Ok(self.nodes.alloc(node))
    }

    /// Returns the node behind `id`, or `None` if `id` belongs to another
    /// arena.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Number of nodes allocated so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no node has been allocated yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }

    /// The maximum number of nodes.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of nodes that can still be allocated.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.capacity - self.nodes.len()
    }

    /// Releases every node in one operation.
    pub fn release(self) {
        drop(self);
    }
}
