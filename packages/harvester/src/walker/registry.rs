//! Ordered registry of requirement sections.

use super::types::SectionSpec;

/// Registry of section specifications, kept in extraction order.
pub struct SectionRegistry {
    sections: Vec<SectionSpec>,
}

impl SectionRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
        }
    }

    /// Register a section after the ones already registered.
    pub fn register(&mut self, spec: SectionSpec) {
        self.sections.push(spec);
    }

    /// Sections in extraction order.
    #[must_use]
    pub fn sections(&self) -> &[SectionSpec] {
        &self.sections
    }

    /// Get a section by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SectionSpec> {
        self.sections.iter().find(|s| s.name == name)
    }
}

impl Default for SectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_registry_keeps_order() {
        let mut registry = SectionRegistry::new();
        registry.register(SectionSpec::new("B", Regex::new("^B").unwrap()));
        registry.register(SectionSpec::new("A", Regex::new("^A").unwrap()));

        let names: Vec<_> = registry.sections().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["B", "A"]);
    }

    #[test]
    fn test_registry_get() {
        let mut registry = SectionRegistry::default();
        registry.register(SectionSpec::new("Core", Regex::new("^I").unwrap()));

        assert!(registry.get("Core").is_some());
        assert!(registry.get("Major").is_none());
    }
}
