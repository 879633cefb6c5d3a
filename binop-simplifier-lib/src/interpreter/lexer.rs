use crate::interpreter::token::Token;

/// Splits a whitespace-delimited prefix expression into tokens.
///
/// Words made only of ASCII digits become [`Token::Number`], identifier-like words
/// become [`Token::Identifier`] and everything else is an operator symbol.
///
/// # Examples
///
/// ```
/// use binop_simplifier::interpreter::lexer::tokenize;
/// use binop_simplifier::interpreter::token::Token;
///
/// let tokens = tokenize("+ x 2");
/// assert_eq!(
///     tokens,
///     vec![
///         Token::Operator("+".to_string()),
///         Token::Identifier("x".to_string()),
///         Token::Number("2".to_string()),
///     ]
/// );
/// ```
pub fn tokenize(expression: &str) -> Vec<Token> {
    expression.split_whitespace().map(classify).collect()
}

fn classify(word: &str) -> Token {
    if is_unsigned_integer(word) {
        Token::Number(word.to_string())
    } else if is_identifier(word) {
        Token::Identifier(word.to_string())
    } else {
        Token::Operator(word.to_string())
    }
}

pub(crate) fn is_unsigned_integer(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_digit())
}

fn is_identifier(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
