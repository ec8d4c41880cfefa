use super::environment::Environment;
use super::errors::{InterpreterError, RuntimeResult};
use super::object::Value;
use crate::pascal_frontend::grammar::{
    Block, Compound, Expr, ExprType, Identifier, InfixOperator, PrefixOperator, Program, Stmt,
    StmtType, VarDecl,
};
use crate::pascal_frontend::span::Span;

use tracing::{debug, trace};

/// Walks a parsed program once, writing assignments into the environment it
/// was given.
pub struct Interpreter<'env> {
    env: &'env mut Environment,
}

impl<'env> Interpreter<'env> {
    pub fn new(env: &'env mut Environment) -> Self {
        Interpreter { env }
    }

    pub fn eval_program(&mut self, program: &Program) -> RuntimeResult<()> {
        debug!(program = %program.name.name, "evaluating program");
        self.eval_block(&program.block)
    }

    pub fn eval_block(&mut self, block: &Block) -> RuntimeResult<()> {
        for decl in block.declarations.iter() {
            self.eval_declaration(decl);
        }
        self.eval_compound(&block.compound)
    }

    /// Declared types are never checked; only assignment creates bindings.
    fn eval_declaration(&self, decl: &VarDecl) {
        trace!(
            name = %decl.ident.name,
            type_name = decl.type_spec.kind.name(),
            "skipping declaration"
        );
    }

    pub fn eval_compound(&mut self, compound: &Compound) -> RuntimeResult<()> {
        for stmt in compound.children.iter() {
            self.eval_statement(stmt)?;
        }
        Ok(())
    }

    pub fn eval_statement(&mut self, stmt: &Stmt) -> RuntimeResult<()> {
        match &stmt.stmt {
            StmtType::Compound(compound) => self.eval_compound(compound)?,
            StmtType::Assign(ident, expr) => {
                let value = self.eval_expression(expr)?;
                trace!(name = %ident.name, %value, "assign");
                self.env.assign(ident.name.clone(), value);
            }
            StmtType::NoOp => {}
        }

        Ok(())
    }

    pub fn eval_expression(&mut self, expr: &Expr) -> RuntimeResult<Value> {
        match &expr.expr {
            ExprType::NumberLiteral(raw) => eval_number(raw, expr.span),
            ExprType::Variable(ident) => self.env_var_lookup(ident),
            ExprType::BinaryOp(op, lhs, rhs) => self.eval_infix_operator(*op, lhs, rhs, expr.span),
            ExprType::UnaryOp(op, operand) => self.eval_prefix_operator(*op, operand, expr.span),
        }
    }

    fn env_var_lookup(&self, ident: &Identifier) -> RuntimeResult<Value> {
        self.env
            .get(&ident.name)
            .ok_or_else(|| InterpreterError::UndefinedVariable(ident.name.clone(), ident.span))
    }

    pub fn eval_infix_operator(
        &mut self,
        op: InfixOperator,
        lhs: &Expr,
        rhs: &Expr,
        span: Span,
    ) -> RuntimeResult<Value> {
        let lhs = self.eval_expression(lhs)?;
        let rhs = self.eval_expression(rhs)?;
        Value::apply_infix_op(op, lhs, rhs, span)
    }

    pub fn eval_prefix_operator(
        &mut self,
        op: PrefixOperator,
        expr: &Expr,
        span: Span,
    ) -> RuntimeResult<Value> {
        let value = self.eval_expression(expr)?;
        Value::apply_prefix_op(op, value, span)
    }
}

fn eval_number(raw: &str, span: Span) -> RuntimeResult<Value> {
    Value::from_numeral(raw).ok_or_else(|| InterpreterError::MalformedNumber(raw.to_owned(), span))
}
