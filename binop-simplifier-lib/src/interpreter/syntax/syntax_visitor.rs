use crate::interpreter::syntax::expression_tree::Node;

/// If a method is not implemented, the default implementation will continue in a pre-order
/// traversal of the tree.
pub(crate) trait SyntaxVisitor: Sized {
    fn visit_number(&mut self, _text: &str) {}
    fn visit_identifier(&mut self, _name: &str) {}
    fn visit_operation(&mut self, _symbol: &str, left: &Node, right: &Node) {
        walk_operation(self, left, right)
    }
}

pub(crate) fn walk_operation(visitor: &mut impl SyntaxVisitor, left: &Node, right: &Node) {
    left.accept(visitor);
    right.accept(visitor);
}
