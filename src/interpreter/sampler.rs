use crate::{
    ast::NodeId,
    interpreter::{
        arena::NodeArena,
        evaluator::core::{EvalResult, evaluate},
    },
};

/// Number of samples taken when no grid is given.
pub const DEFAULT_SAMPLE_COUNT: u32 = 4000;
/// Distance between neighbouring samples when no grid is given.
pub const DEFAULT_STEP: f64 = 0.01;

/// One evaluated sample: the input value and the formula's value there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Domain value.
    pub x: f64,
    /// Evaluated value.
    pub y: f64,
}

/// An evenly spaced sampling grid centred on zero.
///
/// Sample `i` sits at `-step * count / 2 + i * step`, up to floating-point
/// rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleGrid {
    /// Number of samples.
    pub count: u32,
    /// Distance between neighbouring samples.
    pub step:  f64,
}

impl Default for SampleGrid {
    fn default() -> Self {
        Self { count: DEFAULT_SAMPLE_COUNT,
               step:  DEFAULT_STEP, }
    }
}

impl SampleGrid {
    /// Creates a grid of `count` samples spaced `step` apart.
    #[must_use]
    pub const fn new(count: u32, step: f64) -> Self {
        Self { count, step }
    }

    /// The first domain value.
    #[must_use]
    pub fn start(&self) -> f64 {
        -self.step * f64::from(self.count) / 2.0
    }

    /// The domain value of sample `index`.
    ///
    /// Computed directly from the index, so rounding errors do not build up
    /// along the grid. Each value is still subject to the rounding of `step`
    /// itself: with the default grid the middle sample is about `4e-16`, not
    /// exactly `0.0`.
    #[must_use]
    pub fn x_at(&self, index: u32) -> f64 {
        f64::from(index).mul_add(self.step, self.start())
    }

    /// All domain values in increasing order (for a positive step).
    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.count).map(|index| self.x_at(index))
    }
}

/// Evaluates the tree at every point of `grid`.
///
/// # Errors
/// Propagates the first evaluation error; see
/// [`crate::error::EvalError`].
///
/// # Example
/// ```
/// use grapher::interpreter::{
///     arena::NodeArena,
///     lexer::tokenize,
///     parser::core::parse,
///     sampler::{SampleGrid, sample},
/// };
///
/// let mut arena = NodeArena::new();
/// let root = parse(&tokenize("(+ x 1)").unwrap(), &mut arena).unwrap();
/// let points = sample(&arena, root, SampleGrid::new(4, 1.0)).unwrap();
///
/// let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
/// assert_eq!(xs, vec![-2.0, -1.0, 0.0, 1.0]);
/// assert_eq!(points[0].y, -1.0);
/// ```
pub fn sample(arena: &NodeArena, root: NodeId, grid: SampleGrid) -> EvalResult<Vec<Point>> {
    grid.xs()
        .map(|x| evaluate(arena, root, x).map(|y| Point { x, y }))
        .collect()
}
