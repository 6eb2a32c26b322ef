//! Syntax tree produced by the mjs parser.
//!
//! Nodes are built exactly once during parsing and never mutated. Ownership
//! is strictly downward: a parent owns its children, so the tree needs no
//! reference counting and cannot form cycles. Optional children (a missing
//! initializer, an absent binary operand) are `Option` fields, never
//! sentinel nodes.

/// The kind discriminant every node exposes for structural inspection.
pub trait AstNode {
    fn kind(&self) -> &'static str;
}

/// Root of the tree: the ordered top-level statements of one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Program {
    pub body: Vec<Stmt>,
}

impl AstNode for Program {
    fn kind(&self) -> &'static str {
        "Program"
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stmt {
    Function(FunctionDecl),
    Return(ReturnStmt),
    Variable(VariableDecl),
    If(IfStmt),
    Comment(Comment),
}

impl AstNode for Stmt {
    fn kind(&self) -> &'static str {
        match self {
            Stmt::Function(s) => s.kind(),
            Stmt::Return(s) => s.kind(),
            Stmt::Variable(s) => s.kind(),
            Stmt::If(s) => s.kind(),
            Stmt::Comment(s) => s.kind(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expr {
    Identifier(Identifier),
    String(StringLit),
    Number(NumberLit),
    Binary(BinaryExpr),
}

impl AstNode for Expr {
    fn kind(&self) -> &'static str {
        match self {
            Expr::Identifier(e) => e.kind(),
            Expr::String(e) => e.kind(),
            Expr::Number(e) => e.kind(),
            Expr::Binary(e) => e.kind(),
        }
    }
}

/// `function name(a, b = default) { body }`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FunctionDecl {
    pub name: String,
    pub params: Vec<Param>,
    pub body: Vec<Stmt>,
}

impl AstNode for FunctionDecl {
    fn kind(&self) -> &'static str {
        "FunctionDeclaration"
    }
}

/// One function parameter with an optional default value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Param {
    pub name: String,
    pub default: Option<Expr>,
}

impl AstNode for Param {
    fn kind(&self) -> &'static str {
        "Parameter"
    }
}

/// `return expr;` — the argument is absent for a bare `return`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReturnStmt {
    pub argument: Option<Expr>,
}

impl AstNode for ReturnStmt {
    fn kind(&self) -> &'static str {
        "ReturnStatement"
    }
}

/// `const/let/var name = value;`
///
/// The declaration keyword is kept as its literal text, not normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariableDecl {
    pub kind: String,
    pub name: String,
    pub value: Option<Expr>,
}

impl AstNode for VariableDecl {
    fn kind(&self) -> &'static str {
        "VariableDeclaration"
    }
}

/// `if (test) { consequent }` — no else branch in the grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IfStmt {
    pub test: Option<Expr>,
    pub consequent: Vec<Stmt>,
}

impl AstNode for IfStmt {
    fn kind(&self) -> &'static str {
        "IfStatement"
    }
}

/// Exactly one level of binary combination; operands may be absent when a
/// primary position held an unrecognized token.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinaryExpr {
    pub left: Option<Box<Expr>>,
    pub op: String,
    pub right: Option<Box<Expr>>,
}

impl AstNode for BinaryExpr {
    fn kind(&self) -> &'static str {
        "BinaryExpression"
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identifier {
    pub name: String,
}

impl AstNode for Identifier {
    fn kind(&self) -> &'static str {
        "Identifier"
    }
}

/// String literal value with the surrounding quotes already stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StringLit {
    pub value: String,
}

impl AstNode for StringLit {
    fn kind(&self) -> &'static str {
        "StringLiteral"
    }
}

/// Numeric literal kept as its raw source text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumberLit {
    pub value: String,
}

impl AstNode for NumberLit {
    fn kind(&self) -> &'static str {
        "NumericLiteral"
    }
}

/// `// comment` — full text including the leading slashes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comment {
    pub text: String,
}

impl AstNode for Comment {
    fn kind(&self) -> &'static str {
        "Comment"
    }
}
