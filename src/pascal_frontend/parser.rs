use super::errors::{ParserError, ParserResult};
use super::grammar::{Block, Compound, Expr, ExprType, Identifier, Program, Stmt, StmtType};
use super::grammar::{InfixOperator, PrefixOperator, TypeKind, TypeSpec, VarDecl};
use super::lexer::Lexer;
use super::span::Span;
use super::token::{SpannedToken, TokenKind};

/// Deepest nesting of parentheses, unary operators, `BEGIN` blocks and
/// operator chains that is accepted. Parsing and evaluation recurse once per
/// level, so this bounds their stack use.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Predictive parser with a single token of lookahead (`current`).
pub struct Parser<'s> {
    lexer: Lexer<'s>,
    current: SpannedToken,
    previous: SpannedToken,
    depth: usize,
}

impl<'s> Parser<'s> {
    pub fn new(source: &'s str) -> Self {
        let dummy_token = SpannedToken::new(TokenKind::EndOfFile, String::new(), Span::default());

        Parser {
            lexer: Lexer::new(source),
            current: dummy_token.clone(),
            previous: dummy_token,
            depth: 0,
        }
    }

    /// Enters one level of recursive descent.
    fn nest(&mut self) -> ParserResult<()> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParserError::TooDeeplyNested {
                span: self.current.span,
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn unnest(&mut self) {
        self.depth -= 1;
    }

    /// Rejects expression trees taller than the nesting limit.
    fn check_depth(&self, expr: Expr) -> ParserResult<Expr> {
        if expr.depth > MAX_NESTING_DEPTH {
            return Err(ParserError::TooDeeplyNested { span: expr.span });
        }
        Ok(expr)
    }

    /// Advances the stream.
    fn bump(&mut self) -> ParserResult<()> {
        let next = self.lexer.next_token()?;
        self.previous = std::mem::replace(&mut self.current, next);
        Ok(())
    }

    /// Checks whether or not the current token is of the given kind.
    fn check(&self, kind: TokenKind) -> bool {
        self.current.is(kind)
    }

    /// If the current token is of the given kind consume it and return true,
    /// else return false.
    fn check_consume(&mut self, kind: TokenKind) -> ParserResult<bool> {
        if self.check(kind) {
            self.bump()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Consumes token, asserting that it is of the expected kind.
    fn consume(&mut self, expected: TokenKind) -> ParserResult<()> {
        if self.check(expected) {
            self.bump()
        } else {
            Err(ParserError::ExpectedToken {
                expected,
                found: self.current.kind,
                span: self.current.span,
            })
        }
    }

    /// Parses a whole program. Anything after the final `.` is not examined.
    pub fn parse(mut self) -> ParserResult<Program> {
        self.bump()?;
        self.parse_program()
    }

    fn parse_program(&mut self) -> ParserResult<Program> {
        let curr_span = self.current.span;

        self.consume(TokenKind::Program)?;
        let name = self.parse_identifier()?;
        self.consume(TokenKind::Semicolon)?;
        let block = self.parse_block()?;
        self.consume(TokenKind::Dot)?;

        Ok(Program {
            name,
            block,
            span: curr_span.extend(self.previous.span),
        })
    }

    fn parse_block(&mut self) -> ParserResult<Block> {
        let declarations = self.parse_declarations()?;
        let compound = self.parse_compound_statement()?;

        Ok(Block {
            declarations,
            compound,
        })
    }

    fn parse_declarations(&mut self) -> ParserResult<Vec<VarDecl>> {
        let mut declarations = vec![];

        if self.check_consume(TokenKind::Var)? {
            loop {
                declarations.extend(self.parse_variable_decl()?);
                self.consume(TokenKind::Semicolon)?;

                if !self.check(TokenKind::Identifier) {
                    break;
                }
            }
        }

        Ok(declarations)
    }

    /// Parses `a, b, c : TYPE` into one declaration per name.
    fn parse_variable_decl(&mut self) -> ParserResult<Vec<VarDecl>> {
        let mut idents = vec![self.parse_identifier()?];
        while self.check_consume(TokenKind::Comma)? {
            idents.push(self.parse_identifier()?);
        }

        self.consume(TokenKind::Colon)?;
        let type_spec = self.parse_type_spec()?;

        let decls = idents
            .into_iter()
            .map(|ident| VarDecl {
                ident,
                type_spec: type_spec.clone(),
            })
            .collect();

        Ok(decls)
    }

    fn parse_type_spec(&mut self) -> ParserResult<TypeSpec> {
        let kind = match self.current.kind {
            TokenKind::Integer => TypeKind::Integer,
            TokenKind::Real => TypeKind::Real,
            found => {
                return Err(ParserError::ExpectedTypeSpec {
                    found,
                    span: self.current.span,
                })
            }
        };

        self.bump()?;
        Ok(TypeSpec {
            kind,
            span: self.previous.span,
        })
    }

    fn parse_compound_statement(&mut self) -> ParserResult<Compound> {
        let curr_span = self.current.span;

        self.nest()?;
        self.consume(TokenKind::Begin)?;
        let children = self.parse_statement_list()?;
        self.consume(TokenKind::End)?;
        self.unnest();

        Ok(Compound {
            children,
            span: curr_span.extend(self.previous.span),
        })
    }

    fn parse_statement_list(&mut self) -> ParserResult<Vec<Stmt>> {
        let mut stmts = vec![self.parse_statement()?];

        while self.check_consume(TokenKind::Semicolon)? {
            stmts.push(self.parse_statement()?);
        }

        // There are no expression statements, so a name here is a missing `;`.
        if self.check(TokenKind::Identifier) {
            return Err(ParserError::UnexpectedIdentifier {
                name: self.current.lexeme.clone(),
                span: self.current.span,
            });
        }

        Ok(stmts)
    }

    fn parse_statement(&mut self) -> ParserResult<Stmt> {
        match self.current.kind {
            TokenKind::Begin => {
                let compound = self.parse_compound_statement()?;
                let span = compound.span;
                Ok(to_stmt(StmtType::Compound(compound), span))
            }
            TokenKind::Identifier => self.parse_assignment(),
            _ => {
                let start_pos = self.current.span.start_pos;
                Ok(to_stmt(StmtType::NoOp, Span::new(start_pos, start_pos)))
            }
        }
    }

    fn parse_assignment(&mut self) -> ParserResult<Stmt> {
        let ident = self.parse_identifier()?;
        self.consume(TokenKind::Assign)?;
        let expr = self.parse_expression()?;

        let span = ident.span.extend(expr.span);
        Ok(to_stmt(StmtType::Assign(ident, expr), span))
    }

    /// expr : term ((PLUS | MINUS) term)*
    pub fn parse_expression(&mut self) -> ParserResult<Expr> {
        let mut lhs = self.parse_term()?;

        while let Some(op) = additive_operator(self.current.kind) {
            self.bump()?;
            let rhs = self.parse_term()?;
            lhs = self.check_depth(to_binary(op, lhs, rhs))?;
        }

        Ok(lhs)
    }

    /// term : factor ((MUL | DIV | SLASH | PERCENT) factor)*
    fn parse_term(&mut self) -> ParserResult<Expr> {
        let mut lhs = self.parse_factor()?;

        while let Some(op) = multiplicative_operator(self.current.kind) {
            self.bump()?;
            let rhs = self.parse_factor()?;
            lhs = self.check_depth(to_binary(op, lhs, rhs))?;
        }

        Ok(lhs)
    }

    fn parse_factor(&mut self) -> ParserResult<Expr> {
        let curr_span = self.current.span;

        let expr = match self.current.kind {
            TokenKind::LeftParen => {
                self.nest()?;
                self.bump()?;
                let sub_expr = self.parse_expression()?;
                self.consume(TokenKind::RightParen)?;
                self.unnest();
                return Ok(sub_expr);
            }
            TokenKind::Plus | TokenKind::Minus => {
                let op = match self.current.kind {
                    TokenKind::Plus => PrefixOperator::Identity,
                    _ => PrefixOperator::Negate,
                };
                self.nest()?;
                self.bump()?;
                let operand = self.parse_factor()?;
                self.unnest();
                ExprType::UnaryOp(op, Box::new(operand))
            }
            TokenKind::IntegerConst | TokenKind::RealConst => {
                self.bump()?;
                ExprType::NumberLiteral(self.previous.lexeme.clone())
            }
            TokenKind::Identifier => ExprType::Variable(self.parse_identifier()?),
            found => {
                return Err(ParserError::ExpectedExpr {
                    found,
                    span: curr_span,
                })
            }
        };

        self.check_depth(to_expr(expr, curr_span.extend(self.previous.span)))
    }

    fn parse_identifier(&mut self) -> ParserResult<Identifier> {
        self.consume(TokenKind::Identifier)?;
        Ok(Identifier::new(
            self.previous.lexeme.clone(),
            self.previous.span,
        ))
    }
}

fn additive_operator(kind: TokenKind) -> Option<InfixOperator> {
    match kind {
        TokenKind::Plus => Some(InfixOperator::Add),
        TokenKind::Minus => Some(InfixOperator::Subtract),
        _ => None,
    }
}

fn multiplicative_operator(kind: TokenKind) -> Option<InfixOperator> {
    match kind {
        TokenKind::Asterisk => Some(InfixOperator::Multiply),
        TokenKind::Div => Some(InfixOperator::IntegerDivide),
        TokenKind::Slash => Some(InfixOperator::FloatDivide),
        TokenKind::Percent => Some(InfixOperator::Modulo),
        _ => None,
    }
}

fn to_binary(op: InfixOperator, lhs: Expr, rhs: Expr) -> Expr {
    let span = lhs.span.extend(rhs.span);
    to_expr(ExprType::BinaryOp(op, Box::new(lhs), Box::new(rhs)), span)
}

fn to_stmt(stmt: StmtType, span: Span) -> Stmt {
    Stmt::new(stmt, span)
}

fn to_expr(expr: ExprType, span: Span) -> Expr {
    Expr::new(expr, span)
}
