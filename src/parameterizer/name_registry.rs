use std::collections::HashSet;

/// Hands out parameter names unique within one template.
///
/// The first request for a base gets the base itself, later ones get
/// `base_2`, `base_3`, ... in request order.
#[derive(Debug, Default)]
pub struct NameRegistry {
    taken: HashSet<String>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self, base: &str) -> String {
        let mut name = base.to_string();
        let mut suffix = 2;
        while self.taken.contains(&name) {
            name = format!("{base}_{suffix}");
            suffix += 1;
        }
        self.taken.insert(name.clone());
        name
    }
}

#[cfg(test)]
mod tests {
    use crate::parameterizer::NameRegistry;

    #[test]
    fn suffixes_start_at_two() {
        let mut registry = NameRegistry::new();

        assert_eq!(registry.allocate("value"), "value");
        assert_eq!(registry.allocate("value"), "value_2");
        assert_eq!(registry.allocate("table"), "table");
        assert_eq!(registry.allocate("value"), "value_3");
    }

    #[test]
    fn skips_names_already_taken_by_suffix() {
        let mut registry = NameRegistry::new();

        assert_eq!(registry.allocate("col_2"), "col_2");
        assert_eq!(registry.allocate("col"), "col");
        assert_eq!(registry.allocate("col"), "col_3");
    }
}
