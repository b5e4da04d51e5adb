use std::collections::HashMap;

/// Build the pre-suffix document name for a `(date, title)` pair.
#[must_use]
pub fn base_name(date: &str, title: &str) -> String {
    format!("{date}-{}", utils::sanitize_title(title))
}

/// Run-scoped registry of allocated document names.
///
/// Created fresh at the start of each pipeline run and passed
/// explicitly; never ambient global state. The first request for a
/// base returns it unsuffixed, the k-th request returns `{base}_{k}`
/// (so the second collision suffix is always `_2`, never `_1`).
#[derive(Debug, Clone, Default)]
pub struct NameRegistry {
    counters: HashMap<String, u32>,
}

impl NameRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a unique document name for `base` within this run.
    pub fn allocate(&mut self, base: &str) -> String {
        match self.counters.get_mut(base) {
            Some(count) => {
                *count += 1;
                format!("{base}_{count}")
            }
            None => {
                self.counters.insert(base.to_string(), 1);
                base.to_string()
            }
        }
    }

    /// Number of distinct bases seen so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_allocation_is_unsuffixed() {
        let mut registry = NameRegistry::new();
        assert_eq!(registry.allocate("2025-11-30-Foo"), "2025-11-30-Foo");
    }

    #[test]
    fn test_collision_suffixes_start_at_two() {
        let mut registry = NameRegistry::new();
        assert_eq!(registry.allocate("2025-11-30-Foo"), "2025-11-30-Foo");
        assert_eq!(registry.allocate("2025-11-30-Foo"), "2025-11-30-Foo_2");
        assert_eq!(registry.allocate("2025-11-30-Foo"), "2025-11-30-Foo_3");
    }

    #[test]
    fn test_distinct_bases_do_not_interfere() {
        let mut registry = NameRegistry::new();
        assert_eq!(registry.allocate("a"), "a");
        assert_eq!(registry.allocate("b"), "b");
        assert_eq!(registry.allocate("a"), "a_2");
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_base_name_sanitizes_title() {
        assert_eq!(
            base_name("2025-11-30", "A/B: C?"),
            "2025-11-30-A_B_ C_"
        );
    }

    #[test]
    fn test_fresh_registry_is_empty() {
        assert!(NameRegistry::new().is_empty());
    }
}
