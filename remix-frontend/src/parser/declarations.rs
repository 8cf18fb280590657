//! Function declaration parsing
//! 
//! Only function definitions appear at the top level. Prototypes and global
//! variables are rejected.

use crate::ast::*;
use crate::lexer::TokenType;
use crate::parser::Parser;
use remix_common::CompilerError;

impl Parser {
    /// Parse a function definition with its body
    pub fn parse_function_declaration(&mut self) -> Result<FunctionDeclaration, CompilerError> {
        let start_location = self.current_location();

        let base_type = self.parse_type_specifier()?;
        let return_type = self.parse_pointers(base_type);
        let name = self.expect_identifier("function declaration")?;

        self.expect(TokenType::LeftParen, "function declaration")?;
        let parameters = self.parse_parameter_list()?;
        self.expect(TokenType::RightParen, "parameter list")?;

        let body = self.parse_block()?;

        Ok(FunctionDeclaration {
            name,
            parameters,
            return_type,
            body,
            span: self.span_from(start_location),
        })
    }

    /// Parse the comma separated parameters between the parentheses
    fn parse_parameter_list(&mut self) -> Result<Vec<Parameter>, CompilerError> {
        let mut parameters = Vec::new();

        if self.check(&TokenType::RightParen) {
            return Ok(parameters);
        }

        // `(void)` declares no parameters
        if self.check(&TokenType::Void) && matches!(self.peek_nth_type(1), Some(TokenType::RightParen)) {
            self.advance();
            return Ok(parameters);
        }

        loop {
            let start_location = self.current_location();
            let base_type = self.parse_type_specifier()?;
            let (name, param_type) = self.parse_declarator(base_type, "parameter")?;

            parameters.push(Parameter {
                name,
                param_type,
                span: self.span_from(start_location),
            });

            if !self.match_token(&TokenType::Comma) {
                break;
            }
        }

        Ok(parameters)
    }
}
