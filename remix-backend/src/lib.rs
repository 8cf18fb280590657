//! C to Go Remixer - Backend
//! 
//! This crate turns a parsed program into Go source text:
//! - Import resolution: which standard-library packages the output needs
//! - Lowering: per-construct translation into the Go syntax tree
//! - Printing: canonical layout of that tree
//!
//! The pipeline is sequential and keeps no global state, so independent
//! translations may run concurrently.

pub mod errors;
pub mod go_ast;
pub mod imports;
pub mod lower;
pub mod printer;
pub mod signature;

pub use errors::LoweringError;
pub use imports::{Facility, ImportResolver, ImportRule, ImportSet};
pub use lower::lower_program;
pub use printer::print_file;
pub use signature::MainSignature;

use log::debug;
use remix_common::CompilerError;
use remix_frontend::{Frontend, Program};
use std::path::Path;

/// Translator from C source text to Go source text
#[derive(Default)]
pub struct Remixer {
    resolver: ImportResolver,
}

impl Remixer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a resolver with a custom rule registry
    pub fn with_resolver(resolver: ImportResolver) -> Self {
        Self { resolver }
    }

    /// Translate an already parsed program
    pub fn remix_program(&self, program: &Program) -> Result<String, CompilerError> {
        let imports = self.resolver.resolve(program);
        let file = lower_program(program, &imports)?;
        Ok(print_file(&file))
    }

    /// Translate source text whose diagnostics should name `filename`
    pub fn remix_named(&self, source: &str, filename: &str) -> Result<String, CompilerError> {
        let program = Frontend::parse_named(source, filename)?;
        let output = self.remix_program(&program)?;
        debug!("{}: remixed into {} bytes", filename, output.len());
        Ok(output)
    }
}

/// Translate C source text into Go source text
pub fn remix_source(source: &str) -> Result<String, CompilerError> {
    Remixer::new().remix_named(source, "<input>")
}

/// Read and translate a C source file
pub fn remix_file(path: &Path) -> Result<String, CompilerError> {
    let source = std::fs::read_to_string(path)?;
    Remixer::new().remix_named(&source, &path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_remix_empty_main() {
        assert_eq!(remix_source("int main() { }").unwrap(), "package main\n\nfunc main() {\n\n}");
    }

    #[test]
    fn test_no_output_on_failure() {
        let err = remix_source("int main() { int *p; }").unwrap_err();
        assert_eq!(err.phase(), "lowering");
    }

    #[test]
    fn test_custom_resolver() {
        let remixer = Remixer::with_resolver(ImportResolver::empty());
        let output = remixer.remix_named("int main() { return 0; }", "exit.c").unwrap();
        assert!(!output.contains("import"));
        assert!(output.contains("os.Exit(0)"));
    }
}
