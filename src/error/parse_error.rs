use crate::ast::Operator;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token sequence.
///
/// Positions are token indices into the sequence produced by the lexer.
pub enum ParseError {
    /// The token sequence was empty.
    EmptyInput,
    /// Reached the end of the token sequence while more input was required.
    UnexpectedEndOfInput {
        /// Index one past the last token.
        index: usize,
    },
    /// Found a token that cannot appear at this position.
    UnexpectedToken {
        /// Description of the token encountered.
        token: String,
        /// Index of the token.
        index: usize,
    },
    /// An opening parenthesis was not followed by an operator.
    ExpectedOperator {
        /// Description of the token encountered instead.
        found: String,
        /// Index of the token.
        index: usize,
    },
    /// An operator was closed before receiving all of its operands.
    MissingOperand {
        /// The operator being applied.
        operator: Operator,
        /// Operands the operator requires.
        expected: usize,
        /// Operands actually supplied.
        found:    usize,
        /// Index of the premature closing parenthesis.
        index:    usize,
    },
    /// An operator received more operands than it accepts.
    TooManyOperands {
        /// The operator being applied.
        operator: Operator,
        /// Operands the operator accepts.
        expected: usize,
        /// Index of the first surplus operand.
        index:    usize,
    },
    /// Extra tokens followed a complete expression.
    UnexpectedTrailingTokens {
        /// Description of the first extra token.
        token: String,
        /// Index of the first extra token.
        index: usize,
    },
    /// Parentheses are nested deeper than the parser allows.
    NestingTooDeep {
        /// The maximum nesting depth.
        max:   usize,
        /// Index of the token that went past the limit.
        index: usize,
    },
    /// The node arena has no room for another node.
    ArenaExhausted {
        /// The arena's node capacity.
        capacity: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Error: Formula is empty."),

            Self::UnexpectedEndOfInput { index } => {
                write!(f, "Error at token {index}: Unexpected end of input.")
            },

            Self::UnexpectedToken { token, index } => {
                write!(f, "Error at token {index}: Unexpected token: {token}.")
            },

            Self::ExpectedOperator { found, index } => write!(f,
                                                              "Error at token {index}: Expected an operator after '(' but found {found}."),

            Self::MissingOperand { operator,
                                   expected,
                                   found,
                                   index, } => write!(f,
                                                      "Error at token {index}: '{operator}' takes {expected} operand(s) but {found} were given."),

            Self::TooManyOperands { operator,
                                    expected,
                                    index, } => write!(f,
                                                       "Error at token {index}: '{operator}' takes only {expected} operand(s)."),

            Self::UnexpectedTrailingTokens { token, index } => write!(f,
                                                                      "Error at token {index}: Extra tokens after expression. Check your input: {token}"),

            Self::NestingTooDeep { max, index } => {
                write!(f, "Error at token {index}: Expressions nested deeper than {max} levels.")
            },

            Self::ArenaExhausted { capacity } => {
                write!(f, "Error: Formula needs more than {capacity} nodes.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
