mod error;
mod token_stream;

pub use crate::interpreter::parser::error::ParseError;
pub use crate::interpreter::parser::token_stream::TokenStream;

use crate::interpreter::syntax::expression_tree::Node;
use crate::interpreter::token::Token;

/// Parses the given prefix tokens into an equivalent expression tree,
/// which is easier to manipulate than the original tokens.
///
/// The whole sequence has to form exactly one expression; the tokens are borrowed and
/// left untouched.
///
/// Parsing recurses once per nesting level, so input depth is bounded by the thread's
/// stack. A chain of a few thousand nested operators is fine on the default stack;
/// hundreds of thousands will overflow it.
///
/// # Arguments
///
/// * `prefix_tokens`: The tokens to parse, in prefix format.
///
/// returns: The equivalent expression tree.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use binop_simplifier::interpreter::parser::parse;
/// use binop_simplifier::interpreter::token::Token;
///
/// let prefix_tokens = vec![
///     Token::Operator("+".to_string()),
///     Token::Number("1".to_string()),
///     Token::Number("2".to_string()),
/// ];
/// let tree = parse(&prefix_tokens)?;
/// assert_eq!(tree.prefix_str(), "+ 1 2");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn parse(prefix_tokens: &[Token]) -> Result<Node, ParseError> {
    let mut stream = TokenStream::new(prefix_tokens);
    let tree = parse_node(&mut stream)?;
    if !stream.is_exhausted() {
        return Err(ParseError::TrailingTokens {
            remaining: stream.remaining(),
        });
    }
    Ok(tree)
}

/// Parses one subtree starting at the cursor, consuming exactly its tokens.
///
/// Implemented using recursive descent: an operator first parses its left operand and
/// then its right operand from whatever the left one left behind. Recursion depth
/// equals the height of the resulting tree.
pub fn parse_node(stream: &mut TokenStream) -> Result<Node, ParseError> {
    let position = stream.position();
    let token = stream.next_token().ok_or(ParseError::EmptyInput)?;

    match token {
        Token::Number(text) => Ok(Node::new_number(text.as_str())),
        Token::Identifier(name) => Ok(Node::new_identifier(name.as_str())),
        Token::Operator(symbol) => {
            let left = parse_operand(stream, symbol, position)?;
            let right = parse_operand(stream, symbol, position)?;
            Ok(Node::new_operation(symbol.as_str(), left, right))
        }
        Token::LeftParentheses | Token::RightParentheses => Err(ParseError::UnexpectedToken {
            token: token.clone(),
            position,
        }),
    }
}

fn parse_operand(
    stream: &mut TokenStream,
    operator: &str,
    operator_position: usize,
) -> Result<Node, ParseError> {
    parse_node(stream).map_err(|error| match error {
        ParseError::EmptyInput => ParseError::MalformedInput {
            operator: operator.to_string(),
            position: operator_position,
        },
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;
    use parameterized_macro::parameterized;

    #[test]
    fn simple_expression_returns_correct_tree() {
        let tokens = tokenize("+ 1 2");
        let expected_tree =
            Node::new_operation("+", Node::new_number("1"), Node::new_number("2"));

        let actual_tree = parse(&tokens).unwrap();

        assert_eq!(actual_tree, expected_tree);
    }

    #[test]
    fn complex_expression_returns_correct_tree() {
        // * (+ 1 2) (- x 0)
        let tokens = tokenize("* + 1 2 - x 0");
        let plus = Node::new_operation("+", Node::new_number("1"), Node::new_number("2"));
        let minus = Node::new_operation("-", Node::new_identifier("x"), Node::new_number("0"));
        let expected_tree = Node::new_operation("*", plus, minus);

        let actual_tree = parse(&tokens).unwrap();

        assert_eq!(actual_tree, expected_tree);
    }

    #[parameterized(
    expression = {
    "0",
    "+ 1 2",
    "* + 1 2 0",
    "+ * 3 4 / 10 5",
    "- - - 1 2 3 4",
    "+ 1 + 2 + 3 4",
    "% x ^ y 2",
    }
    )]
    fn prefix_string_regenerates_original_tokens(expression: &str) {
        let tokens = tokenize(expression);

        let tree = parse(&tokens).unwrap();

        assert_eq!(tree.prefix_str(), expression);
    }

    #[test]
    fn parse_leaves_caller_tokens_intact() {
        let tokens = tokenize("* 3 4");
        let copy = tokens.clone();

        parse(&tokens).unwrap();

        assert_eq!(tokens, copy);
    }

    #[test]
    fn parse_node_consumes_exactly_one_subtree() {
        let tokens = tokenize("+ 1 2 * 3 4");
        let mut stream = TokenStream::new(&tokens);

        let first = parse_node(&mut stream).unwrap();
        assert_eq!(first.prefix_str(), "+ 1 2");
        assert_eq!(stream.position(), 3);

        let second = parse_node(&mut stream).unwrap();
        assert_eq!(second.prefix_str(), "* 3 4");
        assert!(stream.is_exhausted());
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(parse(&[]), Err(ParseError::EmptyInput));
    }

    #[parameterized(
    expression = { "+", "+ 1", "* + 1 2", "+ 1 * 2" },
    operator = { "+", "+", "*", "*" },
    position = { 0, 0, 0, 2 }
    )]
    fn operator_without_operands_is_malformed(expression: &str, operator: &str, position: usize) {
        let tokens = tokenize(expression);

        let error = parse(&tokens).unwrap_err();

        assert_eq!(
            error,
            ParseError::MalformedInput {
                operator: operator.to_string(),
                position,
            }
        );
    }

    #[test]
    fn innermost_incomplete_operator_is_reported() {
        let tokens = tokenize("+ * 1");

        let error = parse(&tokens).unwrap_err();

        assert_eq!(
            error,
            ParseError::MalformedInput {
                operator: "*".into(),
                position: 1,
            }
        );
    }

    #[test]
    fn leftover_tokens_are_rejected() {
        let tokens = tokenize("+ 1 2 3 4");

        assert_eq!(
            parse(&tokens),
            Err(ParseError::TrailingTokens { remaining: 2 })
        );
    }

    #[test]
    fn trailing_tokens_error_counts_unused_tokens() {
        let error = parse(&tokenize("x 1 2")).unwrap_err();

        assert_eq!(
            error.to_string(),
            "Expression is followed by 2 unused token(s)"
        );
    }

    #[test]
    fn deeply_nested_chain_parses() {
        let depth = 500;
        let expression = format!("{}x{}", "+ ".repeat(depth), " 1".repeat(depth));

        let tree = parse(&tokenize(&expression)).unwrap();

        assert_eq!(tree.height(), depth + 1);
        assert_eq!(tree.prefix_str(), expression);
    }

    #[test]
    fn parentheses_are_not_prefix_tokens() {
        let tokens = vec![
            Token::Operator("+".into()),
            Token::LeftParentheses,
            Token::Number("1".into()),
        ];

        assert_eq!(
            parse(&tokens),
            Err(ParseError::UnexpectedToken {
                token: Token::LeftParentheses,
                position: 1,
            })
        );
    }
}
