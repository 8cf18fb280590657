//! C to Go Remixer - Common Types and Utilities
//! 
//! This crate contains the source location types and the error taxonomy
//! shared by every phase of the translator.

pub mod error;
pub mod source_loc;

pub use error::CompilerError;
pub use source_loc::{SourceLocation, SourceSpan};
