use std::fmt;
use std::fmt::Formatter;

/// A discrete part of a prefix expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// An unsigned integer literal, kept verbatim.
    Number(String),
    /// A symbolic leaf, e.g. `x`.
    Identifier(String),
    Operator(String),
    LeftParentheses,
    RightParentheses,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(text) | Token::Identifier(text) | Token::Operator(text) => {
                write!(f, "{}", text)
            }
            Token::LeftParentheses => write!(f, "("),
            Token::RightParentheses => write!(f, ")"),
        }
    }
}
