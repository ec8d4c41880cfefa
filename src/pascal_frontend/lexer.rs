use super::cursor::Cursor;
use super::errors::{LexError, LexerResult};
use super::span::Span;
use super::token::{SpannedToken, TokenKind};

pub struct Lexer<'src> {
    source: &'src str,
    cursor: Cursor<'src>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer from source.
    pub fn new(source: &'src str) -> Self {
        Lexer {
            source,
            cursor: Cursor::new(source),
        }
    }

    /// Returns the next token. Once the source is exhausted every call
    /// returns `EndOfFile`.
    pub fn next_token(&mut self) -> LexerResult<SpannedToken> {
        self.skip_trivia()?;

        let start_pos = self.cursor.get_position();
        let (byte_idx, ch) = match self.cursor.take() {
            Some(t) => t,
            None => {
                let span = Span::new(start_pos, start_pos);
                return Ok(SpannedToken::new(TokenKind::EndOfFile, String::new(), span));
            }
        };

        let (kind, lexeme) = match ch {
            // Single-character tokens.
            '+' => (TokenKind::Plus, None),
            '-' => (TokenKind::Minus, None),
            '*' => (TokenKind::Asterisk, None),
            '/' => (TokenKind::Slash, None),
            '%' => (TokenKind::Percent, None),
            '(' => (TokenKind::LeftParen, None),
            ')' => (TokenKind::RightParen, None),
            ';' => (TokenKind::Semicolon, None),
            ',' => (TokenKind::Comma, None),
            '.' => (TokenKind::Dot, None),

            // Colon can either be a type annotation or the start of `:=`.
            ':' => {
                if self.cursor.take_if('=') {
                    (TokenKind::Assign, None)
                } else {
                    (TokenKind::Colon, None)
                }
            }

            // Numbers.
            _ if is_digit_char(ch) => self.lex_number(byte_idx),

            // Identifiers and keywords.
            _ if is_identifier_start(ch) => self.lex_identifier_or_kw(byte_idx),

            // Unrecognized character.
            _ => return Err(LexError::UnrecognizedChar(start_pos, ch)),
        };

        let end_pos = self.cursor.get_position();
        let span = Span::new(start_pos, end_pos);
        let lexeme = match lexeme {
            Some(lexeme) => lexeme,
            None => self.source[byte_idx..end_pos.byte_pos].to_owned(),
        };

        Ok(SpannedToken::new(kind, lexeme, span))
    }

    /// Skips whitespace and `{ ... }` comments in any order.
    fn skip_trivia(&mut self) -> LexerResult<()> {
        loop {
            self.cursor.take_while(char::is_whitespace);

            let comment_start = self.cursor.get_position();
            if !self.cursor.take_if('{') {
                return Ok(());
            }

            self.cursor.take_until(|ch| ch == '}');
            if !self.cursor.take_if('}') {
                return Err(LexError::UnterminatedComment(comment_start));
            }
        }
    }

    /// Scans a numeral. Every following digit, `.` and radix letter is part of
    /// it, wherever it appears; malformed text is rejected at evaluation.
    fn lex_number(&mut self, start_idx: usize) -> (TokenKind, Option<String>) {
        self.cursor.take_while(is_numeral_char);

        let end_idx = self.cursor.byte_pos();
        let scanned_number = &self.source[start_idx..end_idx];

        let kind = if scanned_number.contains('.') {
            TokenKind::RealConst
        } else {
            TokenKind::IntegerConst
        };

        (kind, Some(scanned_number.to_owned()))
    }

    /// Scan up to end of lexeme and uppercase it. Checks for keywords.
    fn lex_identifier_or_kw(&mut self, start_idx: usize) -> (TokenKind, Option<String>) {
        self.cursor.take_while(is_identifier_char);

        let end_idx = self.cursor.byte_pos();
        let word: String = self.source[start_idx..end_idx]
            .chars()
            .map(uppercase_char)
            .collect();

        let kind = TokenKind::keyword(&word).unwrap_or(TokenKind::Identifier);
        (kind, Some(word))
    }

    /// Returns an iterator version of lexer.
    pub fn iter(self) -> LexerIterator<'src> {
        LexerIterator {
            lexer: self,
            done: false,
        }
    }
}

/// Yields tokens up to, but not including, `EndOfFile`. Stops after the
/// first error.
pub struct LexerIterator<'src> {
    lexer: Lexer<'src>,
    done: bool,
}

impl<'src> Iterator for LexerIterator<'src> {
    type Item = LexerResult<SpannedToken>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.lexer.next_token() {
            Ok(token) if token.is(TokenKind::EndOfFile) => {
                self.done = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

fn is_digit_char(ch: char) -> bool {
    ch.is_ascii_digit()
}

fn is_numeral_char(ch: char) -> bool {
    is_digit_char(ch) || matches!(ch, '.' | 'x' | 'X' | 'o' | 'O' | 'b' | 'B')
}

fn is_identifier_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}

fn is_identifier_char(ch: char) -> bool {
    is_identifier_start(ch) || is_digit_char(ch)
}

/// Uppercases one char at a time, so a name never changes length.
/// Characters without a single-char uppercase form (`ß`) stay as they are.
fn uppercase_char(ch: char) -> char {
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => ch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pascal_frontend::span::CodePosition;

    fn lex(source: &str) -> Vec<(TokenKind, String)> {
        Lexer::new(source)
            .iter()
            .map(|r| {
                let token = r.unwrap();
                (token.kind, token.lexeme)
            })
            .collect()
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source).into_iter().map(|(kind, _)| kind).collect()
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(
            kinds("+ - * / % ( ) ; : , . :="),
            vec![
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Asterisk,
                TokenKind::Slash,
                TokenKind::Percent,
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::Semicolon,
                TokenKind::Colon,
                TokenKind::Comma,
                TokenKind::Dot,
                TokenKind::Assign,
            ]
        );

        assert_eq!(
            kinds("a:INTEGER"),
            vec![TokenKind::Identifier, TokenKind::Colon, TokenKind::Integer]
        );
        assert_eq!(
            kinds("a:=1"),
            vec![TokenKind::Identifier, TokenKind::Assign, TokenKind::IntegerConst]
        );
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        assert_eq!(
            lex("program Var bEgIn end integer Real div"),
            vec![
                (TokenKind::Program, "PROGRAM".to_owned()),
                (TokenKind::Var, "VAR".to_owned()),
                (TokenKind::Begin, "BEGIN".to_owned()),
                (TokenKind::End, "END".to_owned()),
                (TokenKind::Integer, "INTEGER".to_owned()),
                (TokenKind::Real, "REAL".to_owned()),
                (TokenKind::Div, "DIV".to_owned()),
            ]
        );
    }

    #[test]
    fn test_identifiers_are_uppercased() {
        assert_eq!(
            lex("aBc _tmp x1 größe"),
            vec![
                (TokenKind::Identifier, "ABC".to_owned()),
                (TokenKind::Identifier, "_TMP".to_owned()),
                (TokenKind::Identifier, "X1".to_owned()),
                (TokenKind::Identifier, "GRÖßE".to_owned()),
            ]
        );

        assert_ne!(lex("straße"), lex("STRASSE"));
    }

    #[test]
    fn test_only_decimal_digits_start_a_numeral() {
        let mut lexer = Lexer::new("½");
        assert_eq!(
            lexer.next_token(),
            Err(LexError::UnrecognizedChar(CodePosition::new(0, 1, 1), '½'))
        );

        let mut lexer = Lexer::new("a² := 1");
        assert_eq!(lexer.next_token().unwrap().lexeme, "A");
        assert!(matches!(
            lexer.next_token(),
            Err(LexError::UnrecognizedChar(_, '²'))
        ));
    }

    #[test]
    fn test_numerals_keep_raw_text() {
        assert_eq!(
            lex("42 0x1F 0b101 0o17 017 3.14 017.5"),
            vec![
                (TokenKind::IntegerConst, "42".to_owned()),
                (TokenKind::IntegerConst, "0x1".to_owned()),
                (TokenKind::Identifier, "F".to_owned()),
                (TokenKind::IntegerConst, "0b101".to_owned()),
                (TokenKind::IntegerConst, "0o17".to_owned()),
                (TokenKind::IntegerConst, "017".to_owned()),
                (TokenKind::RealConst, "3.14".to_owned()),
                (TokenKind::RealConst, "017.5".to_owned()),
            ]
        );
    }

    #[test]
    fn test_numerals_are_greedy() {
        // Radix letters and points are accepted anywhere in the run.
        assert_eq!(
            lex("1x2b3 1.2.3 0x1B 5."),
            vec![
                (TokenKind::IntegerConst, "1x2b3".to_owned()),
                (TokenKind::RealConst, "1.2.3".to_owned()),
                (TokenKind::IntegerConst, "0x1B".to_owned()),
                (TokenKind::RealConst, "5.".to_owned()),
            ]
        );

        assert_eq!(
            kinds("10DIV 3"),
            vec![TokenKind::IntegerConst, TokenKind::Div, TokenKind::IntegerConst]
        );
    }

    #[test]
    fn test_comments_and_whitespace() {
        assert_eq!(
            kinds("{ leading }\n\tBEGIN { a := 1; }{}\u{3000}END {trailing}"),
            vec![TokenKind::Begin, TokenKind::End]
        );
    }

    #[test]
    fn test_spans() {
        let mut lexer = Lexer::new("BEGIN\n  ab := 1");
        lexer.next_token().unwrap();

        let ident = lexer.next_token().unwrap();
        assert_eq!(ident.span.start_pos, CodePosition::new(8, 2, 3));
        assert_eq!(ident.span.end_pos, CodePosition::new(10, 2, 5));
        assert_eq!(ident.span.extract_string("BEGIN\n  ab := 1"), Some("ab"));
    }

    #[test]
    fn test_end_of_file_repeats() {
        let mut lexer = Lexer::new("  { nothing }  ");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EndOfFile);
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EndOfFile);
    }

    #[test]
    fn test_unrecognized_char() {
        let mut lexer = Lexer::new("a := 1 # 2");
        for _ in 0..3 {
            lexer.next_token().unwrap();
        }
        assert_eq!(
            lexer.next_token(),
            Err(LexError::UnrecognizedChar(CodePosition::new(7, 1, 8), '#'))
        );

        let results: Vec<_> = Lexer::new("a ! b").iter().collect();
        assert_eq!(results.len(), 2);
        assert!(results[1].is_err());
    }

    #[test]
    fn test_unterminated_comment() {
        let mut lexer = Lexer::new("BEGIN { never closed");
        lexer.next_token().unwrap();
        assert_eq!(
            lexer.next_token(),
            Err(LexError::UnterminatedComment(CodePosition::new(6, 1, 7)))
        );
    }
}
