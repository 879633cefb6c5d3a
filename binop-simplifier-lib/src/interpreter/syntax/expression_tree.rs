use crate::interpreter::lexer::is_unsigned_integer;
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::syntax::syntax_visitor::{walk_operation, SyntaxVisitor};
use ptree::{write_tree, TreeBuilder};
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::mem;

/// A node of a binary expression tree.
///
/// Every [`Node::Operation`] exclusively owns exactly two children, so a tree can never
/// share subtrees or contain cycles. Nodes carry no parent references; rewriting is
/// done by overwriting a node in place (see [`Node::replace_with`]).
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Node {
    // Terminal symbols (leaves)
    /// An unsigned integer literal, stored verbatim so it round-trips exactly.
    Number(String),
    Identifier(String),
    // Non-terminal symbols (non-leaves)
    Operation {
        symbol: String,
        left: Box<Node>,
        right: Box<Node>,
    },
}

/// Selects one of the two children of an operation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Child {
    Left,
    Right,
}

impl Node {
    pub fn new_number(text: impl Into<String>) -> Node {
        Node::Number(text.into())
    }

    pub fn new_identifier(name: impl Into<String>) -> Node {
        Node::Identifier(name.into())
    }

    pub fn new_operation(symbol: impl Into<String>, left: Node, right: Node) -> Node {
        Node::Operation {
            symbol: symbol.into(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Whether this node is the number leaf with exactly the given text.
    pub fn is_number(&self, compare_to: &str) -> bool {
        match self {
            Node::Number(text) => text == compare_to,
            _ => false,
        }
    }

    /// The numeric value of a number leaf, if it fits in a `u64`.
    pub fn number_value(&self) -> Option<u64> {
        match self {
            Node::Number(text) if is_unsigned_integer(text) => text.parse().ok(),
            _ => None,
        }
    }

    pub fn symbol(&self) -> Option<&str> {
        match self {
            Node::Operation { symbol, .. } => Some(symbol.as_str()),
            Node::Number(_) | Node::Identifier(_) => None,
        }
    }

    /// The arithmetic operator of an operation node, if its symbol is a known one.
    pub fn operator(&self) -> Option<BinaryOperator> {
        self.symbol().and_then(BinaryOperator::from_symbol)
    }

    pub fn child(&self, which: Child) -> Option<&Node> {
        match self {
            Node::Operation { left, right, .. } => match which {
                Child::Left => Some(&**left),
                Child::Right => Some(&**right),
            },
            Node::Number(_) | Node::Identifier(_) => None,
        }
    }

    pub fn node_count(&self) -> usize {
        match self {
            Node::Number(_) | Node::Identifier(_) => 1,
            Node::Operation { left, right, .. } => 1 + left.node_count() + right.node_count(),
        }
    }

    /// Number of nodes on the longest root-to-leaf path. This is also the recursion
    /// depth every traversal of the tree reaches.
    pub fn height(&self) -> usize {
        match self {
            Node::Number(_) | Node::Identifier(_) => 1,
            Node::Operation { left, right, .. } => 1 + left.height().max(right.height()),
        }
    }

    /// Overwrites this node with `other`, keeping its place in the parent's child slot.
    pub fn replace_with(&mut self, other: Node) {
        *self = other;
    }

    /// Collapses an operation into one of its own children.
    ///
    /// Leaves have no children and are left as they are.
    pub fn replace_with_child(&mut self, which: Child) {
        let child = match self {
            Node::Operation { left, right, .. } => match which {
                Child::Left => mem::replace(left.as_mut(), Node::Number(String::new())),
                Child::Right => mem::replace(right.as_mut(), Node::Number(String::new())),
            },
            Node::Number(_) | Node::Identifier(_) => return,
        };
        self.replace_with(child);
    }

    /// Calls the correct visitor method for the node variant on the given visitor.
    pub(crate) fn accept(&self, visitor: &mut impl SyntaxVisitor) {
        match self {
            Node::Number(text) => visitor.visit_number(text),
            Node::Identifier(name) => visitor.visit_identifier(name),
            Node::Operation {
                symbol,
                left,
                right,
            } => visitor.visit_operation(symbol, left, right),
        }
    }

    fn format_tree(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut visitor = TreeBuilderVisitor {
            builder: TreeBuilder::new("expression".into()),
        };
        self.accept(&mut visitor);

        let mut buffer: Vec<u8> = Vec::new();
        match write_tree(&visitor.builder.build(), &mut buffer) {
            Ok(_) => {}
            Err(_) => return Err(fmt::Error),
        }
        let text = match std::str::from_utf8(&buffer) {
            Ok(text) => text,
            Err(_) => return Err(fmt::Error),
        };
        f.write_str(text)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.format_tree(f)
    }
}

impl Debug for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Node::Number(text) => write!(f, "{:?}", text),
            Node::Identifier(name) => write!(f, "{:?}", name),
            Node::Operation {
                symbol,
                left,
                right,
            } => write!(f, "({:?} {:?} {:?})", symbol, left, right),
        }
    }
}

struct TreeBuilderVisitor {
    builder: TreeBuilder,
}

impl SyntaxVisitor for TreeBuilderVisitor {
    fn visit_number(&mut self, text: &str) {
        self.builder.add_empty_child(text.to_string());
    }
    fn visit_identifier(&mut self, name: &str) {
        self.builder.add_empty_child(name.to_string());
    }
    fn visit_operation(&mut self, symbol: &str, left: &Node, right: &Node) {
        self.builder.begin_child(symbol.to_string());
        walk_operation(self, left, right);
        self.builder.end_child();
    }
}
