//! Literal parsing for the C lexer
//! 
//! Only decimal integer literals belong to the supported subset.

use crate::lexer::{Lexer, TokenType};
use remix_common::CompilerError;

impl Lexer {
    /// Tokenize a decimal integer literal
    pub fn tokenize_integer(&mut self) -> Result<TokenType, CompilerError> {
        let start_location = self.current_location();
        let mut number = String::new();

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                number.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        // Hex literals, suffixes like `10u` and forms like `12abc` all land here
        if let Some(ch) = self.current_char() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                return Err(CompilerError::lexer_error(
                    format!("Invalid integer literal: unexpected '{}' after {}", ch, number),
                    self.current_location(),
                ));
            }
        }

        number.parse::<i64>().map(TokenType::IntLiteral).map_err(|_| {
            CompilerError::lexer_error(
                format!("Integer literal out of range: {}", number),
                start_location,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::{Lexer, TokenType};
    use remix_common::CompilerError;

    #[test]
    fn test_decimal_literals() {
        let tokens = Lexer::new("0 7 42 9223372036854775807").tokenize().unwrap();
        assert_eq!(tokens[0].token_type, TokenType::IntLiteral(0));
        assert_eq!(tokens[1].token_type, TokenType::IntLiteral(7));
        assert_eq!(tokens[2].token_type, TokenType::IntLiteral(42));
        assert_eq!(tokens[3].token_type, TokenType::IntLiteral(i64::MAX));
    }

    #[test]
    fn test_literal_out_of_range() {
        let err = Lexer::new("99999999999999999999").tokenize().unwrap_err();
        assert!(matches!(err, CompilerError::LexError { ref location, .. } if location.offset == 0));
    }

    #[test]
    fn test_hex_literal_is_rejected() {
        let err = Lexer::new("x = 0x1F;").tokenize().unwrap_err();
        match err {
            CompilerError::LexError { location, .. } => assert_eq!(location.offset, 5),
            other => panic!("Expected lex error, got {:?}", other),
        }
    }
}
