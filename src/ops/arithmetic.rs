//! Element-wise operation kinds

/// Binary operation kind
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    /// Addition: a + b
    Add,
    /// Subtraction: a - b
    Sub,
    /// Multiplication: a * b
    Mul,
    /// Division: a / b
    Div,
}

impl BinaryOp {
    /// Operation name used in error messages
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
        }
    }
}

/// Unary operation kind
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UnaryOp {
    /// Negation: -a
    Neg,
    /// Absolute value: |a|
    Abs,
    /// Square root: sqrt(a)
    Sqrt,
    /// Exponential: e^a
    Exp,
    /// Natural log: ln(a)
    Log,
    /// Sine: sin(a)
    Sin,
    /// Cosine: cos(a)
    Cos,
    /// Tangent: tan(a)
    Tan,
    /// Inverse sine: asin(a)
    Arcsin,
    /// Inverse cosine: acos(a)
    Arccos,
    /// Inverse tangent: atan(a)
    Arctan,
}

impl UnaryOp {
    /// Operation name used in error messages
    pub const fn name(self) -> &'static str {
        match self {
            Self::Neg => "neg",
            Self::Abs => "abs",
            Self::Sqrt => "sqrt",
            Self::Exp => "exp",
            Self::Log => "log",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Arcsin => "arcsin",
            Self::Arccos => "arccos",
            Self::Arctan => "arctan",
        }
    }

    /// True for operations that are also defined on integer dtypes
    pub const fn supports_integers(self) -> bool {
        matches!(self, Self::Neg | Self::Abs)
    }
}

/// Comparison operation kind
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CompareOp {
    /// a == b
    Eq,
    /// a != b
    Ne,
    /// a > b
    Gt,
    /// a < b
    Lt,
    /// a >= b
    Ge,
    /// a <= b
    Le,
}

impl CompareOp {
    /// Operation name used in error messages
    pub const fn name(self) -> &'static str {
        match self {
            Self::Eq => "equal",
            Self::Ne => "not_equal",
            Self::Gt => "greater",
            Self::Lt => "less",
            Self::Ge => "greater_equal",
            Self::Le => "less_equal",
        }
    }
}

/// Logical operation kind
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LogicalOp {
    /// a && b
    And,
    /// a || b
    Or,
}
