//! Standard-library facilities a translated program can require

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Facility {
    /// Access to the process argument vector
    ProcessArguments,
    /// Terminating the process with a status code
    ProcessExit,
}

impl Facility {
    pub fn name(self) -> &'static str {
        match self {
            Facility::ProcessArguments => "process-arguments",
            Facility::ProcessExit => "process-exit",
        }
    }

    /// Go package providing this facility
    pub fn package(self) -> &'static str {
        match self {
            Facility::ProcessArguments | Facility::ProcessExit => "os",
        }
    }
}

impl fmt::Display for Facility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Facilities required by one program
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportSet {
    facilities: BTreeSet<Facility>,
}

impl ImportSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the facility was not already present
    pub fn insert(&mut self, facility: Facility) -> bool {
        self.facilities.insert(facility)
    }

    pub fn contains(&self, facility: Facility) -> bool {
        self.facilities.contains(&facility)
    }

    pub fn is_empty(&self) -> bool {
        self.facilities.is_empty()
    }

    pub fn len(&self) -> usize {
        self.facilities.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Facility> + '_ {
        self.facilities.iter().copied()
    }

    /// Distinct packages to import, sorted
    pub fn packages(&self) -> Vec<&'static str> {
        self.iter()
            .map(Facility::package)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl FromIterator<Facility> for ImportSet {
    fn from_iter<I: IntoIterator<Item = Facility>>(iter: I) -> Self {
        Self {
            facilities: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packages_are_deduplicated() {
        let imports: ImportSet = [Facility::ProcessExit, Facility::ProcessArguments].into_iter().collect();
        assert_eq!(imports.len(), 2);
        assert_eq!(imports.packages(), vec!["os"]);
    }

    #[test]
    fn test_empty_set_has_no_packages() {
        let imports = ImportSet::new();
        assert!(imports.is_empty());
        assert!(imports.packages().is_empty());
    }

    #[test]
    fn test_insert_reports_novelty() {
        let mut imports = ImportSet::new();
        assert!(imports.insert(Facility::ProcessExit));
        assert!(!imports.insert(Facility::ProcessExit));
        assert!(imports.contains(Facility::ProcessExit));
        assert!(!imports.contains(Facility::ProcessArguments));
    }

    #[test]
    fn test_facility_names() {
        assert_eq!(Facility::ProcessArguments.to_string(), "process-arguments");
        assert_eq!(Facility::ProcessExit.name(), "process-exit");
    }
}
