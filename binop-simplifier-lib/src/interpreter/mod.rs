pub mod lexer;
pub mod operator;
pub mod parser;
pub mod simplifier;
pub mod syntax;
pub mod token;

use crate::debug;
use crate::interpreter::simplifier::Pass;
use anyhow::{Context, Result};
use syntax::expression_tree::Node;

/// Rewrites the given prefix expression with a simplification pass.
///
/// # Arguments
///
/// * `expression`: A text expression in prefix format, tokens separated by whitespace.
/// * `pass`: The rewrite pass (or the whole pipeline) to apply.
///
/// returns: The rewritten expression tree, ready to be rendered in any notation.
///
/// # Examples
///
/// ```
/// use binop_simplifier::interpreter::rewrite;
/// use binop_simplifier::interpreter::simplifier::Pass;
/// use binop_simplifier::interpreter::syntax::notation::Notation;
///
/// let simplified = rewrite("* + x 0 1", Pass::Simplify).unwrap();
/// assert_eq!(Notation::Infix.render(&simplified), "x");
/// ```
pub fn rewrite(expression: &str, pass: Pass) -> Result<Node> {
    let mut expression_tree = convert(expression)?;
    debug!(&expression_tree);
    pass.apply(&mut expression_tree);
    debug!(&expression_tree);
    Ok(expression_tree)
}

/// Converts the given input string into an equivalent expression tree,
/// which is easier to manipulate than the original string.
///
/// # Arguments
///
/// * `expression`: The text-representation of the prefix expression.
///
/// returns: The equivalent expression tree.
///
/// # Examples
///
/// ```
/// use binop_simplifier::interpreter::convert;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let expression = "* + 1 2 0";
/// let tree = convert(expression)?;
/// assert_eq!(tree.infix_str(), "((1 + 2) * 0)");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn convert(expression: &str) -> Result<Node> {
    let tokens = lexer::tokenize(expression);
    let expression_tree = parser::parse(&tokens)
        .with_context(|| format!("Could not parse expression '{}'", expression))?;
    Ok(expression_tree)
}

#[macro_export]
#[cfg(debug_assertions)]
macro_rules! debug {
    ($( $args:expr ),*) => { dbg!( $( $args ),* ); }
}

#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! debug {
    ($( $args:expr ),*) => {()}
}
