//! Token definitions for the C lexer
//!
//! This module defines token types and the Token struct.

use remix_common::{SourceLocation, SourceSpan};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Token types of the supported C subset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TokenType {
    // Literals
    IntLiteral(i64),

    // Identifiers
    Identifier(String),

    // Keywords of the supported subset
    Int, Char, Void, If, Else, Return, While,

    // Reserved C keywords outside the supported subset. They are lexed as
    // keywords so the parser rejects them instead of reading an identifier.
    For, Do, Break, Continue, Switch, Case, Default, Struct, Union, Enum,
    Typedef, Sizeof, Static, Extern, Const, Unsigned, Signed, Short, Long,
    Float, Double, Goto,

    // Operators
    Plus,           // +
    Minus,          // -
    Star,           // *
    Slash,          // /
    Percent,        // %
    Equal,          // =
    Less,           // <
    Greater,        // >

    // Compound operators
    PlusPlus,       // ++
    MinusMinus,     // --
    LessEqual,      // <=
    GreaterEqual,   // >=
    EqualEqual,     // ==
    BangEqual,      // !=

    // Assignment operators
    PlusEqual,      // +=
    MinusEqual,     // -=
    StarEqual,      // *=
    SlashEqual,     // /=
    PercentEqual,   // %=

    // Delimiters
    LeftParen,      // (
    RightParen,     // )
    LeftBrace,      // {
    RightBrace,     // }
    LeftBracket,    // [
    RightBracket,   // ]
    Semicolon,      // ;
    Comma,          // ,

    EndOfFile,
}

impl TokenType {
    /// Look up the keyword spelled by `ident`, if any
    pub fn keyword(ident: &str) -> Option<TokenType> {
        let token_type = match ident {
            "int" => TokenType::Int,
            "char" => TokenType::Char,
            "void" => TokenType::Void,
            "if" => TokenType::If,
            "else" => TokenType::Else,
            "return" => TokenType::Return,
            "while" => TokenType::While,
            "for" => TokenType::For,
            "do" => TokenType::Do,
            "break" => TokenType::Break,
            "continue" => TokenType::Continue,
            "switch" => TokenType::Switch,
            "case" => TokenType::Case,
            "default" => TokenType::Default,
            "struct" => TokenType::Struct,
            "union" => TokenType::Union,
            "enum" => TokenType::Enum,
            "typedef" => TokenType::Typedef,
            "sizeof" => TokenType::Sizeof,
            "static" => TokenType::Static,
            "extern" => TokenType::Extern,
            "const" => TokenType::Const,
            "unsigned" => TokenType::Unsigned,
            "signed" => TokenType::Signed,
            "short" => TokenType::Short,
            "long" => TokenType::Long,
            "float" => TokenType::Float,
            "double" => TokenType::Double,
            "goto" => TokenType::Goto,
            _ => return None,
        };
        Some(token_type)
    }

    /// Does this token start a type specifier?
    pub fn is_type_specifier(&self) -> bool {
        matches!(self, TokenType::Int | TokenType::Char | TokenType::Void)
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenType::IntLiteral(n) => write!(f, "{n}"),
            TokenType::Identifier(s) => write!(f, "{s}"),

            TokenType::Int => write!(f, "int"),
            TokenType::Char => write!(f, "char"),
            TokenType::Void => write!(f, "void"),
            TokenType::If => write!(f, "if"),
            TokenType::Else => write!(f, "else"),
            TokenType::Return => write!(f, "return"),
            TokenType::While => write!(f, "while"),
            TokenType::For => write!(f, "for"),
            TokenType::Do => write!(f, "do"),
            TokenType::Break => write!(f, "break"),
            TokenType::Continue => write!(f, "continue"),
            TokenType::Switch => write!(f, "switch"),
            TokenType::Case => write!(f, "case"),
            TokenType::Default => write!(f, "default"),
            TokenType::Struct => write!(f, "struct"),
            TokenType::Union => write!(f, "union"),
            TokenType::Enum => write!(f, "enum"),
            TokenType::Typedef => write!(f, "typedef"),
            TokenType::Sizeof => write!(f, "sizeof"),
            TokenType::Static => write!(f, "static"),
            TokenType::Extern => write!(f, "extern"),
            TokenType::Const => write!(f, "const"),
            TokenType::Unsigned => write!(f, "unsigned"),
            TokenType::Signed => write!(f, "signed"),
            TokenType::Short => write!(f, "short"),
            TokenType::Long => write!(f, "long"),
            TokenType::Float => write!(f, "float"),
            TokenType::Double => write!(f, "double"),
            TokenType::Goto => write!(f, "goto"),

            // Operators - show the symbol
            TokenType::Plus => write!(f, "+"),
            TokenType::Minus => write!(f, "-"),
            TokenType::Star => write!(f, "*"),
            TokenType::Slash => write!(f, "/"),
            TokenType::Percent => write!(f, "%"),
            TokenType::Equal => write!(f, "="),
            TokenType::Less => write!(f, "<"),
            TokenType::Greater => write!(f, ">"),

            TokenType::PlusPlus => write!(f, "++"),
            TokenType::MinusMinus => write!(f, "--"),
            TokenType::LessEqual => write!(f, "<="),
            TokenType::GreaterEqual => write!(f, ">="),
            TokenType::EqualEqual => write!(f, "=="),
            TokenType::BangEqual => write!(f, "!="),

            TokenType::PlusEqual => write!(f, "+="),
            TokenType::MinusEqual => write!(f, "-="),
            TokenType::StarEqual => write!(f, "*="),
            TokenType::SlashEqual => write!(f, "/="),
            TokenType::PercentEqual => write!(f, "%="),

            TokenType::LeftParen => write!(f, "("),
            TokenType::RightParen => write!(f, ")"),
            TokenType::LeftBrace => write!(f, "{{"),
            TokenType::RightBrace => write!(f, "}}"),
            TokenType::LeftBracket => write!(f, "["),
            TokenType::RightBracket => write!(f, "]"),
            TokenType::Semicolon => write!(f, ";"),
            TokenType::Comma => write!(f, ","),

            TokenType::EndOfFile => write!(f, "end of file"),
        }
    }
}

/// A token with location information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub token_type: TokenType,
    pub span: SourceSpan,
}

impl Token {
    pub fn new(token_type: TokenType, span: SourceSpan) -> Self {
        Self { token_type, span }
    }

    pub fn eof(location: SourceLocation) -> Self {
        Self {
            token_type: TokenType::EndOfFile,
            span: SourceSpan::from_location(location),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.token_type, self.span.start)
    }
}
