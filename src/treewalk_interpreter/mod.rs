mod environment;
mod errors;
mod interpreter;
mod object;

pub use environment::Environment;
pub use errors::{InterpreterError, RuntimeResult};
pub use interpreter::Interpreter;
pub use object::Value;
