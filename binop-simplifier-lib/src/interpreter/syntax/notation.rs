use crate::interpreter::syntax::expression_tree::Node;
use crate::interpreter::syntax::syntax_visitor::{walk_operation, SyntaxVisitor};
use crate::interpreter::token::Token;
use itertools::Itertools;

/// The textual notations an expression tree can be written in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Notation {
    /// `+ 1 2`
    Prefix,
    /// `(1 + 2)`, fully parenthesized
    Infix,
    /// `1 2 +`
    Postfix,
}

impl Notation {
    /// Writes the given tree in this notation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// use binop_simplifier::interpreter::convert;
    /// use binop_simplifier::interpreter::syntax::notation::Notation;
    ///
    /// let tree = convert("* + 1 2 x")?;
    /// assert_eq!(Notation::Infix.render(&tree), "((1 + 2) * x)");
    /// assert_eq!(Notation::Postfix.render(&tree), "1 2 + x *");
    /// # Ok::<(), anyhow::Error>(()) }
    /// ```
    pub fn render(&self, node: &Node) -> String {
        match self {
            Notation::Prefix => node.prefix_str(),
            Notation::Infix => node.infix_str(),
            Notation::Postfix => node.postfix_str(),
        }
    }
}

impl Node {
    pub fn to_prefix(&self) -> Vec<Token> {
        self.collect_tokens(Notation::Prefix)
    }

    pub fn to_infix(&self) -> Vec<Token> {
        self.collect_tokens(Notation::Infix)
    }

    pub fn to_postfix(&self) -> Vec<Token> {
        self.collect_tokens(Notation::Postfix)
    }

    /// Prefix text of the tree. Parsing this text again gives back an equal tree.
    pub fn prefix_str(&self) -> String {
        self.to_prefix().iter().join(" ")
    }

    pub fn infix_str(&self) -> String {
        tokens_to_string(self.to_infix())
    }

    pub fn postfix_str(&self) -> String {
        self.to_postfix().iter().join(" ")
    }

    fn collect_tokens(&self, notation: Notation) -> Vec<Token> {
        let mut visitor = NotationVisitor {
            notation,
            tokens: Vec::with_capacity(self.node_count()),
        };
        self.accept(&mut visitor);
        visitor.tokens
    }
}

struct NotationVisitor {
    notation: Notation,
    tokens: Vec<Token>,
}

impl SyntaxVisitor for NotationVisitor {
    fn visit_number(&mut self, text: &str) {
        self.tokens.push(Token::Number(text.to_string()))
    }
    fn visit_identifier(&mut self, name: &str) {
        self.tokens.push(Token::Identifier(name.to_string()))
    }
    fn visit_operation(&mut self, symbol: &str, left: &Node, right: &Node) {
        let operator = Token::Operator(symbol.to_string());
        match self.notation {
            Notation::Prefix => {
                self.tokens.push(operator);
                walk_operation(self, left, right);
            }
            Notation::Infix => {
                self.tokens.push(Token::LeftParentheses);
                left.accept(self);
                self.tokens.push(operator);
                right.accept(self);
                self.tokens.push(Token::RightParentheses);
            }
            Notation::Postfix => {
                walk_operation(self, left, right);
                self.tokens.push(operator);
            }
        }
    }
}

/// Pretty-prints the given vector of infix tokens with added whitespace.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A pretty-printed text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use binop_simplifier::interpreter::syntax::notation::tokens_to_string;
/// use binop_simplifier::interpreter::token::Token;
///
/// let tokens = vec![
///     Token::LeftParentheses,
///     Token::Identifier("x".to_string()),
///     Token::Operator("+".to_string()),
///     Token::Number("2".to_string()),
///     Token::RightParentheses,
/// ];
/// assert_eq!(tokens_to_string(tokens), "(x + 2)");
/// ```
pub fn tokens_to_string(tokens: Vec<Token>) -> String {
    tokens
        .into_iter()
        .map(|token| match token {
            Token::Operator(symbol) => format!(" {} ", symbol),
            _ => token.to_string(),
        })
        .collect()
}
