//! Lexer, recursive-descent parser and tree-walking evaluator for a small
//! Pascal-like language of integer and float assignments.

pub mod errors;
pub mod pascal_frontend;
pub mod treewalk_interpreter;

pub use errors::{PascalError, PascalResult};
pub use pascal_frontend::grammar::Program;
pub use treewalk_interpreter::{Environment, Value};

use pascal_frontend::token::SpannedToken;
use pascal_frontend::{Lexer, Parser};
use treewalk_interpreter::Interpreter;

use tracing::debug;

/// Lexes the whole source, stopping at the first error.
pub fn tokenize(source: &str) -> PascalResult<Vec<SpannedToken>> {
    let tokens = Lexer::new(source).iter().collect::<Result<Vec<_>, _>>()?;
    debug!(count = tokens.len(), "lexed source");
    Ok(tokens)
}

pub fn parse(source: &str) -> PascalResult<Program> {
    let program = Parser::new(source).parse()?;
    debug!(program = %program.name.name, "parsed program");
    Ok(program)
}

/// Evaluates an already parsed program into the given environment.
pub fn evaluate(program: &Program, env: &mut Environment) -> PascalResult<()> {
    Interpreter::new(env).eval_program(program)?;
    debug!(bindings = env.len(), "evaluation finished");
    Ok(())
}

/// Parses and evaluates the source into a caller supplied environment.
/// Bindings made before a runtime error stay in the environment.
pub fn run_with_environment(source: &str, env: &mut Environment) -> PascalResult<()> {
    let program = parse(source)?;
    evaluate(&program, env)
}

/// Parses and evaluates the source into a fresh environment.
pub fn run(source: &str) -> PascalResult<Environment> {
    let mut env = Environment::new();
    run_with_environment(source, &mut env)?;
    Ok(env)
}
