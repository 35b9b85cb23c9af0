/// The root of a parsed source file.
///
/// A program has a name (which must appear both after `PROGRAM` and after
/// `END`), a list of declared integer variables and a non-empty body of
/// statements. Nodes are plain value holders; nothing in the tree is mutated
/// once the parser has returned it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    /// The name given after `PROGRAM` (and repeated after `END`).
    pub name:  String,
    /// Every identifier declared with `INT`, in source order.
    pub decls: Vec<Identifier>,
    /// Top-level statements, executed in order.
    pub body:  Vec<Statement>,
    /// Line number of the `PROGRAM` keyword.
    pub line:  usize,
}

/// A declared variable name, as it appears in an `INT` list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    /// Name of the variable.
    pub name:    String,
    /// Optional initializer (`INT a <- 5`).
    pub initial: Option<i64>,
    /// Line number in the source code.
    pub line:    usize,
}

/// A use of a variable inside the program body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierReference {
    /// Name of the referenced variable.
    pub name: String,
    /// Line number in the source code.
    pub line: usize,
}

/// An expression node.
///
/// Expressions are side-effect free: evaluating one only reads the
/// environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal, possibly written with a leading `-`.
    Number {
        /// The literal value.
        value: i64,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Reference(IdentifierReference),
    /// A binary operation (arithmetic or comparison).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number of the operator.
        line:  usize,
    },
}

impl Expr {
    /// Returns the line number associated with this expression.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Number { line, .. } | Self::BinaryOp { line, .. } => *line,
            Self::Reference(reference) => reference.line,
        }
    }
}

/// A statement inside `BODY`, `WHILE`, `IF` or `ELSE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `name <- expr`
    Assignment {
        /// The variable being overwritten.
        target: IdentifierReference,
        /// The value which is being assigned.
        value:  Expr,
    },
    /// `READ(name)`
    Read {
        /// The variable receiving the value read from input.
        target: IdentifierReference,
    },
    /// `WRITE(expr)`, `WRITELN(expr)` or a bare `WRITELN`.
    Write {
        /// The value to print; `None` for a bare `WRITELN`.
        value:   Option<Expr>,
        /// Whether a newline follows the value.
        newline: bool,
        /// Line number in the source code.
        line:    usize,
    },
    /// `WHILE cond DO ... ENDWHILE`
    While {
        /// Re-evaluated before every iteration.
        condition: Expr,
        /// Loop body.
        body:      Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// `IF cond THEN ... [ELSE ...] ENDIF`
    If {
        /// Evaluated exactly once.
        condition: Expr,
        /// Executed when the condition is nonzero.
        body:      Vec<Self>,
        /// Executed when the condition is zero, if present.
        else_body: Option<Vec<Self>>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Statement {
    /// Returns the line number associated with this statement.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Assignment { target, .. } | Self::Read { target } => target.line,
            Self::Write { line, .. } | Self::While { line, .. } | Self::If { line, .. } => *line,
        }
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic and comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Floor division (`/`)
    Div,
    /// Floor modulo (`%`)
    Mod,
    /// Greater than (`>`)
    Greater,
    /// Equal to (`=`)
    Equal,
    /// Not equal to (`<>`)
    NotEqual,
}

impl BinaryOperator {
    /// Binding strength of the operator; higher binds tighter.
    ///
    /// All levels are left-associative.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Greater | Self::Equal | Self::NotEqual => 1,
            Self::Add | Self::Sub => 2,
            Self::Mul | Self::Div | Self::Mod => 3,
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, Div, Equal, Greater, Mod, Mul, NotEqual, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Greater => ">",
            Equal => "=",
            NotEqual => "<>",
        };
        write!(f, "{operator}")
    }
}
