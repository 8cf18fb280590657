//! C Lexer
//!
//! Tokenizes source text of the supported C subset into a stream of tokens.
//! Handles keywords, operators, integer literals, identifiers, and skips
//! whitespace and comments.
//!
//! The lexer is an iterator: it produces tokens on demand, yields exactly one
//! `EndOfFile` token and then stops. [`Lexer::reset`] rewinds it to the start.

pub mod token;
pub mod literals;
pub mod comments;

pub use token::{Token, TokenType};

use log::trace;
use remix_common::{CompilerError, SourceLocation, SourceSpan};

/// C Lexer
#[derive(Debug, Clone)]
pub struct Lexer {
    pub(crate) input: Vec<char>,
    pub(crate) position: usize,
    pub(crate) line: u32,
    pub(crate) column: u32,
    filename: String,
    finished: bool,
}

impl Lexer {
    /// Create a new lexer over an anonymous input buffer
    pub fn new(input: &str) -> Self {
        Self::with_filename(input, "<input>")
    }

    /// Create a new lexer whose locations name `filename`
    pub fn with_filename(input: &str, filename: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
            filename: filename.to_string(),
            finished: false,
        }
    }

    /// Rewind to the start of the input
    pub fn reset(&mut self) {
        self.position = 0;
        self.line = 1;
        self.column = 1;
        self.finished = false;
    }

    /// Get current character
    pub(crate) fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Peek ahead n characters
    pub(crate) fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    /// Advance to next character
    pub(crate) fn advance(&mut self) -> Option<char> {
        let ch = self.current_char()?;
        self.position += 1;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    /// Get current location
    pub(crate) fn current_location(&self) -> SourceLocation {
        SourceLocation::new(&self.filename, self.line, self.column, self.position)
    }

    /// Skip whitespace and comments
    fn skip_trivia(&mut self) -> Result<(), CompilerError> {
        loop {
            match (self.current_char(), self.peek_char(1)) {
                (Some(ch), _) if ch.is_whitespace() => {
                    self.advance();
                }
                (Some('/'), Some('/')) => self.skip_line_comment(),
                (Some('/'), Some('*')) => self.skip_block_comment()?,
                _ => return Ok(()),
            }
        }
    }

    /// Tokenize an identifier or keyword
    fn tokenize_identifier(&mut self) -> TokenType {
        let mut identifier = String::new();

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                identifier.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        TokenType::keyword(&identifier).unwrap_or(TokenType::Identifier(identifier))
    }

    /// Consume the current character, then pick `matched` if `next` follows it
    fn one_or_two(&mut self, next: char, matched: TokenType, single: TokenType) -> TokenType {
        self.advance();
        if self.current_char() == Some(next) {
            self.advance();
            matched
        } else {
            single
        }
    }

    /// Get next token
    pub fn next_token(&mut self) -> Result<Token, CompilerError> {
        self.skip_trivia()?;

        let start_location = self.current_location();

        let token_type = match self.current_char() {
            None => TokenType::EndOfFile,

            Some(ch) if ch.is_ascii_alphabetic() || ch == '_' => self.tokenize_identifier(),

            Some(ch) if ch.is_ascii_digit() => self.tokenize_integer()?,

            Some('+') => {
                self.advance();
                match self.current_char() {
                    Some('+') => { self.advance(); TokenType::PlusPlus }
                    Some('=') => { self.advance(); TokenType::PlusEqual }
                    _ => TokenType::Plus,
                }
            }

            Some('-') => {
                self.advance();
                match self.current_char() {
                    Some('-') => { self.advance(); TokenType::MinusMinus }
                    Some('=') => { self.advance(); TokenType::MinusEqual }
                    _ => TokenType::Minus,
                }
            }

            Some('*') => self.one_or_two('=', TokenType::StarEqual, TokenType::Star),
            Some('/') => self.one_or_two('=', TokenType::SlashEqual, TokenType::Slash),
            Some('%') => self.one_or_two('=', TokenType::PercentEqual, TokenType::Percent),
            Some('=') => self.one_or_two('=', TokenType::EqualEqual, TokenType::Equal),
            Some('<') => self.one_or_two('=', TokenType::LessEqual, TokenType::Less),
            Some('>') => self.one_or_two('=', TokenType::GreaterEqual, TokenType::Greater),

            Some('!') if self.peek_char(1) == Some('=') => {
                self.advance();
                self.advance();
                TokenType::BangEqual
            }

            Some('(') => { self.advance(); TokenType::LeftParen }
            Some(')') => { self.advance(); TokenType::RightParen }
            Some('{') => { self.advance(); TokenType::LeftBrace }
            Some('}') => { self.advance(); TokenType::RightBrace }
            Some('[') => { self.advance(); TokenType::LeftBracket }
            Some(']') => { self.advance(); TokenType::RightBracket }
            Some(';') => { self.advance(); TokenType::Semicolon }
            Some(',') => { self.advance(); TokenType::Comma }

            Some(ch) => {
                return Err(CompilerError::lexer_error(
                    format!("Unexpected character: {}", ch),
                    start_location,
                ));
            }
        };

        let end_location = self.current_location();
        let token = Token::new(token_type, SourceSpan::new(start_location, end_location));
        trace!("token {}", token);

        Ok(token)
    }

    /// Tokenize entire input into a vector of tokens, ending with `EndOfFile`
    pub fn tokenize(&mut self) -> Result<Vec<Token>, CompilerError> {
        self.by_ref().collect()
    }
}

impl Iterator for Lexer {
    type Item = Result<Token, CompilerError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.next_token();
        match &result {
            Ok(token) if token.token_type != TokenType::EndOfFile => {}
            _ => self.finished = true,
        }
        Some(result)
    }
}
