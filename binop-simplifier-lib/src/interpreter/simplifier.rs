use crate::interpreter::syntax::expression_tree::{Child, Node};
use anyhow::{anyhow, Error};
use log::{debug, trace};
use std::fmt;
use std::fmt::Formatter;
use std::str::FromStr;

/// A single rewrite pass, or the whole pipeline.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Pass {
    /// `x + 0 -> x`, `0 + x -> x`
    AdditiveIdentity,
    /// `x * 1 -> x`, `1 * x -> x`
    MultiplicativeIdentity,
    /// `x * 0 -> 0`, `0 * x -> 0`
    MultByZero,
    /// `1 + 2 -> 3`
    ConstantFold,
    /// All of the above, once, in that order.
    Simplify,
}

impl Pass {
    pub const ALL: [Pass; 5] = [
        Pass::AdditiveIdentity,
        Pass::MultiplicativeIdentity,
        Pass::MultByZero,
        Pass::ConstantFold,
        Pass::Simplify,
    ];

    pub fn apply(&self, node: &mut Node) {
        match self {
            Pass::AdditiveIdentity => additive_identity(node),
            Pass::MultiplicativeIdentity => multiplicative_identity(node),
            Pass::MultByZero => mult_by_zero(node),
            Pass::ConstantFold => constant_fold(node),
            Pass::Simplify => simplify(node),
        }
    }

    /// The short name used on the command line and for fixture directories.
    pub fn name(&self) -> &'static str {
        match self {
            Pass::AdditiveIdentity => "arith_id",
            Pass::MultiplicativeIdentity => "mult_id",
            Pass::MultByZero => "mult_by_zero",
            Pass::ConstantFold => "constant_fold",
            Pass::Simplify => "simplify",
        }
    }
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Pass {
    type Err = Error;

    fn from_str(input: &str) -> Result<Pass, Self::Err> {
        Pass::ALL
            .into_iter()
            .find(|pass| pass.name() == input)
            .ok_or_else(|| anyhow!("Unknown simplification pass: {}", input))
    }
}

/// Simplifies a given expression tree in place.
///
/// **NOTE:**
/// Each rule runs exactly once over the tree, in a fixed order. A rewrite that enables
/// an earlier rule higher up in the tree is not revisited, so the result is not
/// guaranteed to be fully reduced.
///
/// # Arguments
///
/// * `node`: A valid expression tree.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use binop_simplifier::interpreter::convert;
/// use binop_simplifier::interpreter::simplifier::simplify;
///
/// let mut tree = convert("+ * x 1 * 2 3")?;
/// simplify(&mut tree);
/// assert_eq!(tree.prefix_str(), "+ x 6");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn simplify(node: &mut Node) {
    debug!("Simplifying tree of {} nodes", node.node_count());
    additive_identity(node);
    multiplicative_identity(node);
    mult_by_zero(node);
    constant_fold(node);
    debug!("Simplified tree has {} nodes", node.node_count());
}

/// Removes additions of a literal `0`. Only `+` operations are touched.
pub fn additive_identity(node: &mut Node) {
    rewrite_post_order(node, Pass::AdditiveIdentity, &|node| {
        match node {
            Node::Operation {
                symbol,
                left,
                right,
            } if symbol == "+" => {
                // 0 + x -> x
                if left.is_number("0") {
                    Some(Rewrite::Collapse(Child::Right))
                }
                // x + 0 -> x
                else if right.is_number("0") {
                    Some(Rewrite::Collapse(Child::Left))
                } else {
                    None
                }
            }
            _ => None,
        }
    })
}

/// Removes multiplications by a literal `1`. Only `*` operations are touched.
pub fn multiplicative_identity(node: &mut Node) {
    rewrite_post_order(node, Pass::MultiplicativeIdentity, &|node| {
        match node {
            Node::Operation {
                symbol,
                left,
                right,
            } if symbol == "*" => {
                // 1 * x -> x
                if left.is_number("1") {
                    Some(Rewrite::Collapse(Child::Right))
                }
                // x * 1 -> x
                else if right.is_number("1") {
                    Some(Rewrite::Collapse(Child::Left))
                } else {
                    None
                }
            }
            _ => None,
        }
    })
}

/// Replaces any `*` operation with a literal `0` operand by a fresh `0` leaf.
pub fn mult_by_zero(node: &mut Node) {
    rewrite_post_order(node, Pass::MultByZero, &|node| match node {
        Node::Operation {
            symbol,
            left,
            right,
        } if symbol == "*" && (left.is_number("0") || right.is_number("0")) => {
            Some(Rewrite::Replace(Node::new_number("0")))
        }
        _ => None,
    })
}

/// Evaluates arithmetic operations whose operands are both number leaves.
///
/// Operations with an identifier operand, an unknown symbol, or a result that is not
/// an unsigned integer (e.g. `- 1 2` or `/ 7 2`) are left as they are.
pub fn constant_fold(node: &mut Node) {
    rewrite_post_order(node, Pass::ConstantFold, &|node| {
        let operator = node.operator()?;
        let left_value = node.child(Child::Left)?.number_value()?;
        let right_value = node.child(Child::Right)?.number_value()?;
        let evaluation = operator.evaluate(left_value, right_value)?;
        Some(Rewrite::Replace(Node::new_number(evaluation.to_string())))
    })
}

/// What a rule wants done with the node it matched.
enum Rewrite {
    /// Become one of the node's own children.
    Collapse(Child),
    /// Become an entirely new subtree.
    Replace(Node),
}

/// Applies `rule` to every node, children before their parent.
fn rewrite_post_order(node: &mut Node, pass: Pass, rule: &impl Fn(&Node) -> Option<Rewrite>) {
    if let Node::Operation { left, right, .. } = node {
        rewrite_post_order(left, pass, rule);
        rewrite_post_order(right, pass, rule);
    }

    if let Some(rewrite) = rule(node) {
        trace!("{}: rewriting {}", pass, node.prefix_str());
        match rewrite {
            Rewrite::Collapse(which) => node.replace_with_child(which),
            Rewrite::Replace(replacement) => node.replace_with(replacement),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::convert;
    use parameterized_macro::parameterized;

    fn apply_pass_returns_expected(pass: Pass, expression: &str, expected: &str) {
        let mut tree = convert(expression).unwrap();
        print!("{}", tree);

        pass.apply(&mut tree);
        print!("{}", tree);

        assert_eq!(tree.prefix_str(), expected);
    }

    #[parameterized(
    expression = {
    "+ x 0",
    "+ 0 x",
    "+ 0 0",
    "+ + x 0 0",
    "* + 0 3 + 4 0",
    "+ * x y 0",
    "- x + 0 0",
    },
    expected = {
    "x",
    "x",
    "0",
    "x",
    "* 3 4",
    "* x y",
    "- x 0",
    }
    )]
    fn additive_identity_removes_zero_terms(expression: &str, expected: &str) {
        apply_pass_returns_expected(Pass::AdditiveIdentity, expression, expected)
    }

    #[parameterized(
    expression = {
    "* x 0",
    "* 0 x",
    "/ x 0",
    "- x 0",
    "% 0 x",
    "+ x 00",
    }
    )]
    fn additive_identity_ignores_other_operators(expression: &str) {
        apply_pass_returns_expected(Pass::AdditiveIdentity, expression, expression)
    }

    #[parameterized(
    expression = {
    "* x 1",
    "* 1 x",
    "* 1 1",
    "* * 1 x 1",
    "+ * 1 2 * 3 1",
    },
    expected = {
    "x",
    "x",
    "1",
    "x",
    "+ 2 3",
    }
    )]
    fn multiplicative_identity_removes_unit_factors(expression: &str, expected: &str) {
        apply_pass_returns_expected(Pass::MultiplicativeIdentity, expression, expected)
    }

    #[parameterized(expression = { "+ x 1", "+ 1 x", "/ x 1", "- 1 x", "^ x 1" })]
    fn multiplicative_identity_ignores_other_operators(expression: &str) {
        apply_pass_returns_expected(Pass::MultiplicativeIdentity, expression, expression)
    }

    #[parameterized(
    expression = {
    "* x 0",
    "* 0 y",
    "* + x y 0",
    "* 0 * a b",
    "+ x * y 0",
    "* * 0 x y",
    },
    expected = {
    "0",
    "0",
    "0",
    "0",
    "+ x 0",
    "0",
    }
    )]
    fn mult_by_zero_collapses_products(expression: &str, expected: &str) {
        apply_pass_returns_expected(Pass::MultByZero, expression, expected)
    }

    #[parameterized(expression = { "+ x 0", "/ 0 x", "- 0 0", "* x 10" })]
    fn mult_by_zero_ignores_other_operations(expression: &str) {
        apply_pass_returns_expected(Pass::MultByZero, expression, expression)
    }

    #[test]
    fn mult_by_zero_builds_fresh_zero_leaf() {
        let mut tree = convert("* x 0").unwrap();

        mult_by_zero(&mut tree);

        assert_eq!(tree, Node::new_number("0"));
    }

    #[parameterized(
    expression = {
    "+ 1 2",
    "- 5 3",
    "* 3 4",
    "/ 8 4",
    "+ 1 + 2 + 3 4",
    "* + 1 2 - 10 4",
    },
    expected = {
    "3",
    "2",
    "12",
    "2",
    "10",
    "18",
    }
    )]
    fn constant_fold_evaluates_literal_operations(expression: &str, expected: &str) {
        apply_pass_returns_expected(Pass::ConstantFold, expression, expected)
    }

    #[parameterized(
    expression = {
    "+ x 2",
    "* 2 y",
    "- 1 2",
    "/ 7 2",
    "/ 1 0",
    "% 7 2",
    "+ 18446744073709551615 1",
    }
    )]
    fn constant_fold_leaves_unfoldable_operations(expression: &str) {
        apply_pass_returns_expected(Pass::ConstantFold, expression, expression)
    }

    #[test]
    fn constant_fold_folds_around_symbolic_subtrees() {
        apply_pass_returns_expected(Pass::ConstantFold, "+ x * 2 3", "+ x 6")
    }

    #[parameterized(
    expression = {
    "+ x 0",
    "* 1 + 0 x",
    "* + x 0 0",
    "+ 1 * 2 0",
    "+ * x 1 * 2 3",
    "- x y",
    },
    expected = {
    "x",
    "x",
    "0",
    "1",
    "+ x 6",
    "- x y",
    }
    )]
    fn simplify_runs_all_rules_in_order(expression: &str, expected: &str) {
        apply_pass_returns_expected(Pass::Simplify, expression, expected)
    }

    #[test]
    fn simplify_is_a_single_pass() {
        // The zero produced by mult_by_zero comes after additive_identity has already run.
        let mut tree = convert("+ x * y 0").unwrap();

        simplify(&mut tree);
        assert_eq!(tree.prefix_str(), "+ x 0");

        simplify(&mut tree);
        assert_eq!(tree.prefix_str(), "x");
    }

    #[parameterized(
    expression = {
    "+ + x 0 * 1 y",
    "* + 0 x * 1 0",
    "- * 0 x + 3 4",
    "+ 0 * 1 + 0 * 1 x",
    }
    )]
    fn every_pass_is_idempotent(expression: &str) {
        for pass in Pass::ALL {
            if pass == Pass::Simplify {
                continue;
            }
            let mut once = convert(expression).unwrap();
            pass.apply(&mut once);
            let mut twice = once.clone();
            pass.apply(&mut twice);

            assert_eq!(twice.prefix_str(), once.prefix_str(), "{} twice", pass);
        }
    }

    #[parameterized(
    expression = {
    "+ + x 0 * 1 y",
    "* + 0 x * 1 0",
    "/ * 3 4 + 0 0",
    "x",
    }
    )]
    fn simplification_never_grows_tree(expression: &str) {
        for pass in Pass::ALL {
            let mut tree = convert(expression).unwrap();
            let before = tree.node_count();

            pass.apply(&mut tree);

            assert!(tree.node_count() <= before, "{} grew {}", pass, expression);
        }
    }

    #[test]
    fn pass_names_parse_back() {
        for pass in Pass::ALL {
            assert_eq!(pass.name().parse::<Pass>().unwrap(), pass);
        }
        assert!("fixpoint".parse::<Pass>().is_err());
    }
}
