use crate::interpreter::token::Token;
use thiserror::Error;

/// Why a token sequence could not be turned into an expression tree.
///
/// A failed parse never yields a partially built tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Expected an expression but there are no tokens left")]
    EmptyInput,
    #[error("Operator '{operator}' at position {position} is missing operands")]
    MalformedInput { operator: String, position: usize },
    #[error("Unexpected token '{token}' at position {position}")]
    UnexpectedToken { token: Token, position: usize },
    #[error("Expression is followed by {remaining} unused token(s)")]
    TrailingTokens { remaining: usize },
}
