use super::span::Span;

use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    // Single-character tokens.
    Plus,
    Minus,
    Asterisk,
    Slash,
    Percent,
    LeftParen,
    RightParen,
    Semicolon,
    Colon,
    Comma,
    Dot,

    // Two character tokens.
    Assign,

    // Literals.
    Identifier,
    IntegerConst,
    RealConst,

    // Keywords.
    Program,
    Var,
    Begin,
    End,
    Integer,
    Real,
    Div,

    EndOfFile,
}

/// A classified piece of source text. Numerals keep their raw text; the radix
/// is only interpreted at evaluation time.
#[derive(Debug, PartialEq, Clone)]
pub struct SpannedToken {
    pub kind: TokenKind,
    pub lexeme: String,
    pub span: Span,
}

impl TokenKind {
    /// Maps an uppercased word onto its reserved keyword, if any.
    pub fn keyword(word: &str) -> Option<TokenKind> {
        let kind = match word {
            "PROGRAM" => TokenKind::Program,
            "VAR" => TokenKind::Var,
            "BEGIN" => TokenKind::Begin,
            "END" => TokenKind::End,
            "INTEGER" => TokenKind::Integer,
            "REAL" => TokenKind::Real,
            "DIV" => TokenKind::Div,
            _ => return None,
        };

        Some(kind)
    }

    pub fn describe(&self) -> &str {
        match self {
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Asterisk => "`*`",
            TokenKind::Slash => "`/`",
            TokenKind::Percent => "`%`",
            TokenKind::LeftParen => "`(`",
            TokenKind::RightParen => "`)`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Colon => "`:`",
            TokenKind::Comma => "`,`",
            TokenKind::Dot => "`.`",
            TokenKind::Assign => "`:=`",
            TokenKind::Identifier => "identifier",
            TokenKind::IntegerConst => "integer constant",
            TokenKind::RealConst => "real constant",
            TokenKind::Program => "PROGRAM",
            TokenKind::Var => "VAR",
            TokenKind::Begin => "BEGIN",
            TokenKind::End => "END",
            TokenKind::Integer => "INTEGER",
            TokenKind::Real => "REAL",
            TokenKind::Div => "DIV",
            TokenKind::EndOfFile => "end of file",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.describe())
    }
}

impl SpannedToken {
    pub fn new(kind: TokenKind, lexeme: String, span: Span) -> Self {
        SpannedToken { kind, lexeme, span }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for SpannedToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:<14} {:<10} {}", format!("{:?}", self.kind), self.lexeme, self.span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords() {
        assert_eq!(TokenKind::keyword("BEGIN"), Some(TokenKind::Begin));
        assert_eq!(TokenKind::keyword("DIV"), Some(TokenKind::Div));
        assert_eq!(TokenKind::keyword("begin"), None);
        assert_eq!(TokenKind::keyword("BEGINS"), None);
    }
}
