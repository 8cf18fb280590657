//! Import resolution
//!
//! Decides which standard-library facilities the translated program needs
//! by evaluating a registry of independent rules against the whole AST. The
//! resolver cannot fail: a rule that does not match contributes nothing.

pub mod facility;
pub mod rules;

pub use facility::{Facility, ImportSet};
pub use rules::{ArgumentVectorRule, MainExitRule};

use log::debug;
use remix_frontend::Program;

/// A predicate over the program that, when it holds, requires one facility
pub trait ImportRule: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &'static str;

    /// The facility this rule contributes
    fn facility(&self) -> Facility;

    /// Does the program use the construct this rule looks for?
    fn matches(&self, program: &Program) -> bool;
}

/// Registry of import rules
pub struct ImportResolver {
    rules: Vec<Box<dyn ImportRule>>,
}

impl ImportResolver {
    /// Resolver with no rules registered
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Resolver with the built-in rules registered
    pub fn new() -> Self {
        let mut resolver = Self::empty();

        resolver.register(Box::new(ArgumentVectorRule));
        resolver.register(Box::new(MainExitRule));

        resolver
    }

    pub fn register(&mut self, rule: Box<dyn ImportRule>) {
        self.rules.push(rule);
    }

    /// Names of the registered rules, in evaluation order
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Evaluate every rule once against the program
    pub fn resolve(&self, program: &Program) -> ImportSet {
        let mut imports = ImportSet::new();

        for rule in &self.rules {
            if rule.matches(program) {
                debug!("import rule '{}' requires {}", rule.name(), rule.facility());
                imports.insert(rule.facility());
            }
        }

        imports
    }
}

impl Default for ImportResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use remix_frontend::{Frontend, StatementKind};

    fn resolve(source: &str) -> ImportSet {
        let program = Frontend::parse_source(source).unwrap();
        ImportResolver::new().resolve(&program)
    }

    #[test]
    fn test_no_main_means_no_imports() {
        let imports = resolve("int add(int a, int b) { return a + b; }");
        assert!(imports.is_empty());
    }

    #[test]
    fn test_both_rules_fire() {
        let imports = resolve("int main(int argc, char **argv) { return argc; }");
        assert!(imports.contains(Facility::ProcessArguments));
        assert!(imports.contains(Facility::ProcessExit));
        assert_eq!(imports.packages(), vec!["os"]);
    }

    struct WhileLoopRule;

    impl ImportRule for WhileLoopRule {
        fn name(&self) -> &'static str {
            "while-loop"
        }

        fn facility(&self) -> Facility {
            Facility::ProcessExit
        }

        fn matches(&self, program: &Program) -> bool {
            let mut found = false;
            for function in &program.functions {
                function.body.walk(&mut |s| {
                    if matches!(s.kind, StatementKind::While { .. }) {
                        found = true;
                    }
                });
            }
            found
        }
    }

    #[test]
    fn test_custom_rule_registration() {
        let mut resolver = ImportResolver::empty();
        resolver.register(Box::new(WhileLoopRule));
        assert_eq!(resolver.rule_names(), vec!["while-loop"]);

        let program = Frontend::parse_source("int spin() { while (1) { } }").unwrap();
        assert!(resolver.resolve(&program).contains(Facility::ProcessExit));
    }

    #[test]
    fn test_default_registry() {
        assert_eq!(ImportResolver::default().rule_names(), vec!["argument-vector", "main-exit"]);
    }
}
