//! Classification of `main`'s parameter list

use crate::errors::LoweringError;
use remix_frontend::{FunctionDeclaration, Type};

/// The recognized shapes of `main`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MainSignature {
    /// `main()` or `main(void)`
    NoArguments,
    /// `main(int count, char **vector)`, matched by shape, not by name
    ArgumentVector { count: String, vector: String },
}

impl MainSignature {
    pub fn classify(main: &FunctionDeclaration) -> Result<MainSignature, LoweringError> {
        match main.parameters.as_slice() {
            [] => Ok(MainSignature::NoArguments),
            [count, vector] if count.param_type == Type::Int && vector.param_type.is_argument_vector() => {
                Ok(MainSignature::ArgumentVector {
                    count: count.name.clone(),
                    vector: vector.name.clone(),
                })
            }
            params => Err(LoweringError::UnsupportedMainSignature {
                found: params
                    .iter()
                    .map(|p| p.param_type.to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
                location: main.span.start.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use remix_frontend::Frontend;

    fn classify(source: &str) -> Result<MainSignature, LoweringError> {
        let program = Frontend::parse_source(source).unwrap();
        MainSignature::classify(program.main_function().unwrap())
    }

    #[test]
    fn test_no_arguments() {
        assert_eq!(classify("int main() { }"), Ok(MainSignature::NoArguments));
        assert_eq!(classify("int main(void) { }"), Ok(MainSignature::NoArguments));
    }

    #[test]
    fn test_argument_vector_is_matched_by_shape() {
        assert_eq!(
            classify("int main(int n, char *args[]) { }"),
            Ok(MainSignature::ArgumentVector { count: "n".to_string(), vector: "args".to_string() })
        );
    }

    #[test]
    fn test_other_shapes_are_rejected() {
        let err = classify("int main(int argc) { }").unwrap_err();
        assert_eq!(err.to_string(), "main must take no parameters or (int, char **), found (int)");

        assert!(classify("int main(char **argv, int argc) { }").is_err());
        assert!(classify("int main(int argc, char *argv) { }").is_err());
    }
}
