use std::fmt;

use crate::{
    ast::{NodeId, Prefix},
    error::FormulaError,
    interpreter::{
        arena::NodeArena,
        evaluator::core::{EvalResult, evaluate},
        lexer::tokenize,
        parser::core::parse,
        sampler::{Point, SampleGrid, sample},
    },
};

/// A parsed formula: its tree together with the arena that owns it.
///
/// Dropping the formula releases every node at once.
#[derive(Debug)]
pub struct Formula {
    arena: NodeArena,
    root:  NodeId,
}

impl Formula {
    /// Tokenizes and parses `source` into a fresh arena.
    ///
    /// # Errors
    /// Returns [`FormulaError::Lex`] or [`FormulaError::Parse`] if `source` is
    /// not a valid formula.
    pub fn parse(source: &str) -> Result<Self, FormulaError> {
        Self::parse_in(source, NodeArena::new())
    }

    /// Like [`Formula::parse`], but builds the tree in `arena`.
    ///
    /// # Errors
    /// See [`Formula::parse`].
    pub fn parse_in(source: &str, mut arena: NodeArena) -> Result<Self, FormulaError> {
        let tokens = tokenize(source)?;
        let root = parse(&tokens, &mut arena)?;
        Ok(Self { arena, root })
    }

    /// Evaluates the formula at `x`.
    ///
    /// # Errors
    /// Only on internal inconsistencies; see [`crate::error::EvalError`].
    ///
    /// # Example
    /// ```
    /// use grapher::interpreter::formula::Formula;
    ///
    /// let formula = Formula::parse("(+ x 5)").unwrap();
    /// assert_eq!(formula.evaluate(5.0).unwrap(), 10.0);
    /// ```
    pub fn evaluate(&self, x: f64) -> EvalResult<f64> {
        evaluate(&self.arena, self.root, x)
    }

    /// Evaluates the formula at every point of `grid`.
    ///
    /// # Errors
    /// See [`Formula::evaluate`].
    pub fn sample(&self, grid: SampleGrid) -> EvalResult<Vec<Point>> {
        sample(&self.arena, self.root, grid)
    }

    /// Returns the formula as a plain callable, for hosts that drive the
    /// sampling themselves.
    pub fn as_fn(&self) -> impl Fn(f64) -> EvalResult<f64> + '_ {
        move |x| self.evaluate(x)
    }

    /// The arena holding the tree.
    #[must_use]
    pub const fn arena(&self) -> &NodeArena {
        &self.arena
    }

    /// The root node of the tree.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        self.root
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Prefix::new(&self.arena, self.root))
    }
}

/// Holds the formula a plotting host is currently showing.
///
/// Loading a new formula builds it completely in its own arena before it
/// replaces the active one, so a sampling pass never sees a half-built tree.
/// A formula that fails to load leaves the active one untouched.
///
/// ```
/// use grapher::interpreter::formula::Session;
///
/// let mut session = Session::new();
/// session.load("(sin x)").unwrap();
/// assert!(session.load("(+ x)").is_err());
/// assert_eq!(session.active().unwrap().to_string(), "(sin x)");
/// ```
#[derive(Debug, Default)]
pub struct Session {
    active: Option<Formula>,
}

impl Session {
    /// Creates a session with no formula loaded.
    #[must_use]
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// Parses `source` and makes it the active formula.
    ///
    /// The previously active formula, if any, is released.
    ///
    /// # Errors
    /// Returns a [`FormulaError`] if `source` is invalid; the active formula
    /// is kept in that case.
    pub fn load(&mut self, source: &str) -> Result<&Formula, FormulaError> {
        let formula = Formula::parse(source)?;
        Ok(&*self.active.insert(formula))
    }

    /// The active formula, if one has been loaded.
    #[must_use]
    pub const fn active(&self) -> Option<&Formula> {
        self.active.as_ref()
    }

    /// Drops the active formula and its arena.
    pub fn clear(&mut self) {
        self.active = None;
    }

    /// Samples the active formula, or returns an empty sequence when none is
    /// loaded.
    ///
    /// # Errors
    /// See [`Formula::evaluate`].
    pub fn sample(&self, grid: SampleGrid) -> EvalResult<Vec<Point>> {
        self.active
            .as_ref()
            .map_or_else(|| Ok(Vec::new()), |formula| formula.sample(grid))
    }
}
