//! Type specifier and declarator parsing

use crate::lexer::TokenType;
use crate::parser::{ParseError, Parser};
use crate::types::Type;

impl Parser {
    /// Is the current token the start of a declaration?
    pub(crate) fn is_type_start(&self) -> bool {
        self.peek().is_some_and(|t| t.token_type.is_type_specifier())
    }

    /// Parse `int`, `char` or `void`
    pub fn parse_type_specifier(&mut self) -> Result<Type, ParseError> {
        let ty = match self.peek().map(|t| &t.token_type) {
            Some(TokenType::Int) => Type::Int,
            Some(TokenType::Char) => Type::Char,
            Some(TokenType::Void) => Type::Void,
            _ => return Err(self.error_at_current("type specifier")),
        };
        self.advance();
        Ok(ty)
    }

    /// Wrap `base` in one pointer level per leading `*`
    pub(crate) fn parse_pointers(&mut self, base: Type) -> Type {
        let mut ty = base;
        while self.match_token(&TokenType::Star) {
            ty = Type::pointer_to(ty);
        }
        ty
    }

    /// Parse a declarator: pointer stars, the declared name and an optional
    /// unsized `[]` suffix
    pub fn parse_declarator(&mut self, base: Type, context: &str) -> Result<(String, Type), ParseError> {
        let mut ty = self.parse_pointers(base);
        let name = self.expect_identifier(context)?;

        if self.match_token(&TokenType::LeftBracket) {
            self.expect(TokenType::RightBracket, "array declarator")?;
            ty = Type::array_of(ty);
        }

        Ok((name, ty))
    }
}
