use crate::{
    ast::Operator,
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Returns the token at `index`.
///
/// # Errors
/// Returns `UnexpectedEndOfInput` if `index` is past the end of `tokens`.
pub(in crate::interpreter::parser) fn token_at(tokens: &[Token],
                                               index: usize)
                                               -> ParseResult<&Token> {
    tokens.get(index)
          .ok_or(ParseError::UnexpectedEndOfInput { index: tokens.len() })
}

/// Reads the operator that must follow an opening parenthesis.
///
/// # Errors
/// - `ExpectedOperator` if the token at `index` is not an operator.
/// - `UnexpectedEndOfInput` if the sequence ends.
pub(in crate::interpreter::parser) fn expect_operator(tokens: &[Token],
                                                      index: usize)
                                                      -> ParseResult<Operator> {
    match token_at(tokens, index)? {
        Token::Operator(op) => Ok(*op),
        token => Err(ParseError::ExpectedOperator { found: token.to_string(),
                                                    index }),
    }
}

/// Requires the `)` closing an application of `op` and returns the index past
/// it.
///
/// # Errors
/// - `TooManyOperands` if anything other than `)` follows the operands.
/// - `UnexpectedEndOfInput` if the sequence ends.
pub(in crate::interpreter::parser) fn expect_close(tokens: &[Token],
                                                   index: usize,
                                                   op: Operator)
                                                   -> ParseResult<usize> {
    match token_at(tokens, index)? {
        Token::Close => Ok(index + 1),
        _ => Err(ParseError::TooManyOperands { operator: op,
                                               expected: op.arity(),
                                               index }),
    }
}
