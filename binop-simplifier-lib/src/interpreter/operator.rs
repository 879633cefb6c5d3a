/// A binary arithmetic operator the rewrite rules know about.
///
/// Expression trees store operator symbols as text, so any symbol that does not map
/// onto one of these variants passes through the simplifier untouched.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    pub fn from_symbol(symbol: &str) -> Option<BinaryOperator> {
        match symbol {
            "+" => Some(BinaryOperator::Add),
            "-" => Some(BinaryOperator::Subtract),
            "*" => Some(BinaryOperator::Multiply),
            "/" => Some(BinaryOperator::Divide),
            _ => None,
        }
    }

    /// Evaluates the operator over two unsigned operands.
    ///
    /// Returns `None` when the result cannot be written as an unsigned integer
    /// literal: on overflow, a negative difference, division by zero or a division
    /// that does not come out even.
    pub fn evaluate(&self, a: u64, b: u64) -> Option<u64> {
        match self {
            BinaryOperator::Add => a.checked_add(b),
            BinaryOperator::Subtract => a.checked_sub(b),
            BinaryOperator::Multiply => a.checked_mul(b),
            BinaryOperator::Divide => {
                if divides_evenly(a, b) {
                    a.checked_div(b)
                } else {
                    None
                }
            }
        }
    }
}

fn divides_evenly(a: u64, b: u64) -> bool {
    b != 0 && a % b == 0
}
