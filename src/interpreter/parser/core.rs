use crate::{
    ast::{Node, NodeId, Operator},
    error::ParseError,
    interpreter::{
        arena::NodeArena,
        lexer::Token,
        parser::utils::{expect_close, expect_operator, token_at},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest parenthesis nesting the parser accepts.
pub const MAX_DEPTH: usize = 256;

/// Parses a complete token sequence into a tree stored in `arena`.
///
/// The sequence must hold exactly one expression.
///
/// # Errors
/// - `EmptyInput` if `tokens` is empty.
/// - `UnexpectedTrailingTokens` if tokens remain after the expression.
/// - Propagates every error of [`parse_expression`].
///
/// # Example
/// ```
/// use grapher::interpreter::{
///     arena::NodeArena,
///     evaluator::core::evaluate,
///     lexer::tokenize,
///     parser::core::parse,
/// };
///
/// let tokens = tokenize("(* x (+ x 1))").unwrap();
/// let mut arena = NodeArena::new();
/// let root = parse(&tokens, &mut arena).unwrap();
/// assert_eq!(evaluate(&arena, root, 3.0).unwrap(), 12.0);
/// ```
pub fn parse(tokens: &[Token], arena: &mut NodeArena) -> ParseResult<NodeId> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let (root, next) = parse_expression(tokens, 0, arena, 0)?;

    if let Some(token) = tokens.get(next) {
        return Err(ParseError::UnexpectedTrailingTokens { token: token.to_string(),
                                                          index: next, });
    }

    Ok(root)
}

/// Parses one expression starting at `index`.
///
/// Grammar:
/// ```text
///     expr := NUMBER | SYMBOL | "(" OPERATOR expr+ ")"
/// ```
/// where the number of operands is fixed by the operator: two for `+` and
/// `*`, one for `sin` and `cos`.
///
/// # Parameters
/// - `tokens`: The full token sequence.
/// - `index`: Position of the first token of the expression.
/// - `arena`: Where the nodes are allocated.
/// - `depth`: Number of enclosing parentheses.
///
/// # Returns
/// The handle of the expression's root node and the index just past its last
/// token.
///
/// # Errors
/// - `UnexpectedToken` if the expression starts with `)` or an operator.
/// - `ExpectedOperator` if `(` is not followed by an operator.
/// - `MissingOperand` / `TooManyOperands` on arity mismatches.
/// - `UnexpectedEndOfInput` if the sequence ends early.
/// - `NestingTooDeep` past [`MAX_DEPTH`] levels.
/// - `ArenaExhausted` if the arena runs out of room.
pub fn parse_expression(tokens: &[Token],
                        index: usize,
                        arena: &mut NodeArena,
                        depth: usize)
                        -> ParseResult<(NodeId, usize)> {
    match token_at(tokens, index)? {
        Token::Number(value) => Ok((arena.alloc(Node::Number(*value))?, index + 1)),
        Token::Symbol(name) => Ok((arena.alloc(Node::Symbol(*name))?, index + 1)),
        Token::Open => {
            if depth >= MAX_DEPTH {
                return Err(ParseError::NestingTooDeep { max: MAX_DEPTH,
                                                        index });
            }
            parse_application(tokens, index + 1, arena, depth + 1)
        },
        token @ (Token::Close | Token::Operator(_)) => {
            Err(ParseError::UnexpectedToken { token: token.to_string(),
                                              index })
        },
    }
}

/// Parses the remainder of `( OPERATOR operands... )`, starting at the
/// operator.
fn parse_application(tokens: &[Token],
                     index: usize,
                     arena: &mut NodeArena,
                     depth: usize)
                     -> ParseResult<(NodeId, usize)> {
    let op = expect_operator(tokens, index)?;

    let (first, next) = parse_operand(tokens, index + 1, arena, depth, op, 0)?;

    if op.arity() == 1 {
        let next = expect_close(tokens, next, op)?;
        let node = arena.alloc(Node::Unary { op,
                                             operand: first })?;
        return Ok((node, next));
    }

    let (second, next) = parse_operand(tokens, next, arena, depth, op, 1)?;
    let next = expect_close(tokens, next, op)?;
    let node = arena.alloc(Node::Binary { op,
                                          left: first,
                                          right: second })?;
    Ok((node, next))
}

/// Parses the operand of `op` following `found` already parsed operands.
///
/// A `)` here means the operator was closed too early.
fn parse_operand(tokens: &[Token],
                 index: usize,
                 arena: &mut NodeArena,
                 depth: usize,
                 op: Operator,
                 found: usize)
                 -> ParseResult<(NodeId, usize)> {
    if let Some(Token::Close) = tokens.get(index) {
        return Err(ParseError::MissingOperand { operator: op,
                                                expected: op.arity(),
                                                found,
                                                index });
    }
    parse_expression(tokens, index, arena, depth)
}
