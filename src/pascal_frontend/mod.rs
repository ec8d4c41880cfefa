pub mod cursor;
pub mod errors;
pub mod grammar;
pub mod lexer;
pub mod parser;
pub mod span;
pub mod token;

pub use errors::{LexError, ParserError};
pub use lexer::Lexer;
pub use parser::Parser;
