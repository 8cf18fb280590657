//! Built-in import rules

use super::{Facility, ImportRule};
use crate::signature::MainSignature;
use remix_frontend::{Program, StatementKind};

/// `main(int, char **)` reads the process argument vector
pub struct ArgumentVectorRule;

impl ImportRule for ArgumentVectorRule {
    fn name(&self) -> &'static str {
        "argument-vector"
    }

    fn facility(&self) -> Facility {
        Facility::ProcessArguments
    }

    fn matches(&self, program: &Program) -> bool {
        program.main_function().is_some_and(|main| {
            matches!(MainSignature::classify(main), Ok(MainSignature::ArgumentVector { .. }))
        })
    }
}

/// `return <expr>;` anywhere inside `main` becomes a process exit
pub struct MainExitRule;

impl ImportRule for MainExitRule {
    fn name(&self) -> &'static str {
        "main-exit"
    }

    fn facility(&self) -> Facility {
        Facility::ProcessExit
    }

    fn matches(&self, program: &Program) -> bool {
        let Some(main) = program.main_function() else {
            return false;
        };

        let mut found = false;
        main.body.walk(&mut |statement| {
            if matches!(statement.kind, StatementKind::Return(Some(_))) {
                found = true;
            }
        });
        found
    }
}
