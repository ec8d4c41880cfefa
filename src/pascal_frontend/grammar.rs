use super::span::Span;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PrefixOperator {
    Identity,
    Negate,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum InfixOperator {
    Add,
    Subtract,
    Multiply,
    IntegerDivide,
    FloatDivide,
    Modulo,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TypeKind {
    Integer,
    Real,
}

/// Root of the tree: `PROGRAM name; block .`
#[derive(Debug, PartialEq, Clone)]
pub struct Program {
    pub name: Identifier,
    pub block: Block,
    pub span: Span,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Block {
    pub declarations: Vec<VarDecl>,
    pub compound: Compound,
}

/// One declared name. `VAR a, b : REAL;` produces two of these.
#[derive(Debug, PartialEq, Clone)]
pub struct VarDecl {
    pub ident: Identifier,
    pub type_spec: TypeSpec,
}

#[derive(Debug, PartialEq, Clone)]
pub struct TypeSpec {
    pub kind: TypeKind,
    pub span: Span,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Compound {
    pub children: Vec<Stmt>,
    pub span: Span,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Stmt {
    pub stmt: StmtType,
    pub span: Span,
}

#[derive(Debug, PartialEq, Clone)]
pub enum StmtType {
    Compound(Compound),
    Assign(Identifier, Expr),
    NoOp,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Expr {
    pub expr: ExprType,
    pub span: Span,
    /// Height of the tree rooted here. Literals and variables are 1.
    pub depth: usize,
}

#[derive(Debug, PartialEq, Clone)]
pub enum ExprType {
    NumberLiteral(String),
    Variable(Identifier),
    BinaryOp(InfixOperator, Box<Expr>, Box<Expr>),
    UnaryOp(PrefixOperator, Box<Expr>),
}

/// An uppercased name.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Identifier {
    pub name: String,
    pub span: Span,
}

impl PrefixOperator {
    pub fn symbol(&self) -> &str {
        match self {
            PrefixOperator::Identity => "+",
            PrefixOperator::Negate => "-",
        }
    }
}

impl InfixOperator {
    pub fn symbol(&self) -> &str {
        match self {
            InfixOperator::Add => "+",
            InfixOperator::Subtract => "-",
            InfixOperator::Multiply => "*",
            InfixOperator::IntegerDivide => "DIV",
            InfixOperator::FloatDivide => "/",
            InfixOperator::Modulo => "%",
        }
    }
}

impl TypeKind {
    pub fn name(&self) -> &str {
        match self {
            TypeKind::Integer => "INTEGER",
            TypeKind::Real => "REAL",
        }
    }
}

impl Identifier {
    pub fn new(name: String, span: Span) -> Self {
        Self { name, span }
    }
}

impl Stmt {
    pub fn new(stmt: StmtType, span: Span) -> Self {
        Stmt { stmt, span }
    }

    pub fn ast_string(&self) -> String {
        match &self.stmt {
            StmtType::Compound(compound) => compound.ast_string(),
            StmtType::Assign(var, expr) => format!("(set {} {})", var.name, expr.ast_string()),
            StmtType::NoOp => "(noop)".to_owned(),
        }
    }
}

impl Compound {
    pub fn ast_string(&self) -> String {
        let stmts: Vec<_> = self.children.iter().map(|s| s.ast_string()).collect();
        format!("(begin {})", stmts.join(" "))
    }
}

impl Program {
    pub fn ast_string(&self) -> String {
        let mut parts = vec![format!("program {}", self.name.name)];
        for decl in self.block.declarations.iter() {
            parts.push(format!("(var {} {})", decl.ident.name, decl.type_spec.kind.name()));
        }
        parts.push(self.block.compound.ast_string());
        format!("({})", parts.join(" "))
    }
}

impl Expr {
    pub fn new(expr: ExprType, span: Span) -> Self {
        let depth = match &expr {
            ExprType::NumberLiteral(_) | ExprType::Variable(_) => 1,
            ExprType::BinaryOp(_, lhs, rhs) => 1 + lhs.depth.max(rhs.depth),
            ExprType::UnaryOp(_, operand) => 1 + operand.depth,
        };

        Expr { expr, span, depth }
    }

    pub fn ast_string(&self) -> String {
        match &self.expr {
            ExprType::NumberLiteral(raw) => raw.clone(),
            ExprType::Variable(var) => var.name.clone(),
            ExprType::BinaryOp(op, lhs, rhs) => format!(
                "({} {} {})",
                op.symbol(),
                lhs.ast_string(),
                rhs.ast_string()
            ),
            ExprType::UnaryOp(op, expr) => format!("({} {})", op.symbol(), expr.ast_string()),
        }
    }
}
