/// An expression tree node.
///
/// `Expr` is a closed set of variants: constants, variable references, unary
/// sign operations and binary arithmetic operations. Every child is owned by
/// its parent through a `Box`, so a tree is acyclic by construction and
/// dropping the root drops the whole tree. Trees are never mutated by
/// evaluation and can be evaluated any number of times.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Constant {
        /// The constant value.
        value: f64,
    },
    /// Reference to a variable by name.
    ///
    /// The name is resolved against the environment at evaluation time.
    Variable {
        /// Name of the variable.
        name: String,
    },
    /// A unary sign operation.
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Unary plus (`+x`), the identity.
    Plus,
    /// Arithmetic negation (`-x`).
    Minus,
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Subtract,
    /// Multiplication (`*`)
    Multiply,
    /// Division (`/`)
    Divide,
    /// Exponentiation (`^`)
    Power,
}

/// The concrete kind of a node, one per operator.
///
/// Unlike [`Expr`], the kind distinguishes each unary and binary operator, so
/// callers can inspect a node without destructuring it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Constant,
    Variable,
    UnaryPlus,
    UnaryMinus,
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Expr {
    /// Creates a constant node.
    #[must_use]
    pub const fn constant(value: f64) -> Self {
        Self::Constant { value }
    }

    /// Creates a variable reference node.
    ///
    /// ## Example
    /// ```
    /// use arithtree::ast::{Expr, NodeKind};
    ///
    /// let expr = Expr::variable("x");
    /// assert_eq!(expr.kind(), NodeKind::Variable);
    /// ```
    #[must_use]
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable { name: name.into() }
    }

    /// Creates a unary node that takes ownership of `expr`.
    #[must_use]
    pub fn unary(op: UnaryOperator, expr: Self) -> Self {
        Self::UnaryOp { op,
                        expr: Box::new(expr) }
    }

    /// Creates a binary node that takes ownership of both operands.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) }
    }

    #[must_use]
    pub fn plus(expr: Self) -> Self {
        Self::unary(UnaryOperator::Plus, expr)
    }

    #[must_use]
    pub fn minus(expr: Self) -> Self {
        Self::unary(UnaryOperator::Minus, expr)
    }

    #[must_use]
    pub fn add(left: Self, right: Self) -> Self {
        Self::binary(left, BinaryOperator::Add, right)
    }

    #[must_use]
    pub fn sub(left: Self, right: Self) -> Self {
        Self::binary(left, BinaryOperator::Subtract, right)
    }

    #[must_use]
    pub fn mul(left: Self, right: Self) -> Self {
        Self::binary(left, BinaryOperator::Multiply, right)
    }

    #[must_use]
    pub fn div(left: Self, right: Self) -> Self {
        Self::binary(left, BinaryOperator::Divide, right)
    }

    #[must_use]
    pub fn pow(left: Self, right: Self) -> Self {
        Self::binary(left, BinaryOperator::Power, right)
    }

    /// Gets the concrete kind of `self`.
    /// ## Example
    /// ```
    /// use arithtree::ast::{Expr, NodeKind};
    ///
    /// let expr = Expr::div(Expr::constant(1.0), Expr::constant(2.0));
    ///
    /// assert_eq!(expr.kind(), NodeKind::Divide);
    /// assert_eq!(expr.left().map(Expr::kind), Some(NodeKind::Constant));
    /// ```
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Constant { .. } => NodeKind::Constant,
            Self::Variable { .. } => NodeKind::Variable,
            Self::UnaryOp { op, .. } => match op {
                UnaryOperator::Plus => NodeKind::UnaryPlus,
                UnaryOperator::Minus => NodeKind::UnaryMinus,
            },
            Self::BinaryOp { op, .. } => match op {
                BinaryOperator::Add => NodeKind::Add,
                BinaryOperator::Subtract => NodeKind::Subtract,
                BinaryOperator::Multiply => NodeKind::Multiply,
                BinaryOperator::Divide => NodeKind::Divide,
                BinaryOperator::Power => NodeKind::Power,
            },
        }
    }

    /// The operand of a unary node, `None` for every other variant.
    #[must_use]
    pub fn operand(&self) -> Option<&Self> {
        match self {
            Self::UnaryOp { expr, .. } => Some(expr),
            _ => None,
        }
    }

    /// The left operand of a binary node, `None` for every other variant.
    #[must_use]
    pub fn left(&self) -> Option<&Self> {
        match self {
            Self::BinaryOp { left, .. } => Some(left),
            _ => None,
        }
    }

    /// The right operand of a binary node, `None` for every other variant.
    #[must_use]
    pub fn right(&self) -> Option<&Self> {
        match self {
            Self::BinaryOp { right, .. } => Some(right),
            _ => None,
        }
    }

    /// Consumes the node and hands ownership of its children to the caller.
    ///
    /// Leaves yield an empty vector, unary nodes their operand, and binary
    /// nodes `[left, right]` in that order.
    ///
    /// ## Example
    /// ```
    /// use arithtree::ast::Expr;
    ///
    /// let expr = Expr::sub(Expr::variable("a"), Expr::constant(1.0));
    /// let children = expr.into_children();
    ///
    /// assert_eq!(children, vec![Expr::variable("a"), Expr::constant(1.0)]);
    /// ```
    #[must_use]
    pub fn into_children(self) -> Vec<Self> {
        match self {
            Self::Constant { .. } | Self::Variable { .. } => Vec::new(),
            Self::UnaryOp { expr, .. } => vec![*expr],
            Self::BinaryOp { left, right, .. } => vec![*left, *right],
        }
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Minus => "-",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "^",
        };
        write!(f, "{operator}")
    }
}

/// Renders the tree fully parenthesized, e.g. `((-Num1) + (2 * (4 - Num2)))`.
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Constant { value } => write!(f, "{value}"),
            Self::Variable { name } => write!(f, "{name}"),
            Self::UnaryOp { op, expr } => write!(f, "({op}{expr})"),
            Self::BinaryOp { left, op, right } => write!(f, "({left} {op} {right})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn kind_distinguishes_each_operator() {
        let one = || Expr::constant(1.0);

        assert_eq!(Expr::plus(one()).kind(), NodeKind::UnaryPlus);
        assert_eq!(Expr::minus(one()).kind(), NodeKind::UnaryMinus);
        assert_eq!(Expr::add(one(), one()).kind(), NodeKind::Add);
        assert_eq!(Expr::sub(one(), one()).kind(), NodeKind::Subtract);
        assert_eq!(Expr::mul(one(), one()).kind(), NodeKind::Multiply);
        assert_eq!(Expr::div(one(), one()).kind(), NodeKind::Divide);
        assert_eq!(Expr::pow(one(), one()).kind(), NodeKind::Power);
    }

    #[test]
    fn accessors_only_answer_for_matching_variants() {
        let unary = Expr::minus(Expr::variable("x"));
        let binary = Expr::pow(Expr::constant(2.0), Expr::variable("n"));

        assert_eq!(unary.operand(), Some(&Expr::variable("x")));
        assert_eq!(unary.left(), None);
        assert_eq!(binary.operand(), None);
        assert_eq!(binary.left(), Some(&Expr::constant(2.0)));
        assert_eq!(binary.right(), Some(&Expr::variable("n")));
        assert_eq!(Expr::constant(0.0).right(), None);
    }

    #[test]
    fn into_children_releases_operands_in_order() {
        assert!(Expr::variable("x").into_children().is_empty());
        assert_eq!(Expr::plus(Expr::constant(4.0)).into_children(),
                   vec![Expr::constant(4.0)]);

        let children = Expr::div(Expr::variable("l"), Expr::variable("r")).into_children();
        assert_eq!(children, vec![Expr::variable("l"), Expr::variable("r")]);
    }

    #[test]
    fn display_is_fully_parenthesized() {
        let expr = Expr::add(Expr::minus(Expr::variable("Num1")),
                             Expr::mul(Expr::constant(2.0),
                                       Expr::sub(Expr::constant(4.0), Expr::variable("Num2"))));

        assert_eq!(expr.to_string(), "((-Num1) + (2 * (4 - Num2)))");
        assert_eq!(Expr::pow(Expr::constant(0.5), Expr::constant(-1.0)).to_string(),
                   "(0.5 ^ -1)");
    }
}
