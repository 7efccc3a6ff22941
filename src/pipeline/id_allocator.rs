use std::{
    collections::HashSet,
    sync::{Mutex, PoisonError},
};

use uuid::Uuid;

use crate::pipeline::IdType;

/// Int ids `prefix_1..=prefix_{current}` are known from the counter alone,
/// so only ids taken through [`IdAllocator::claim`] are stored.
#[derive(Debug, Default)]
struct IdNamespace {
    current: u64,
    claimed: HashSet<String>,
}

/// Shared tool-id namespace. Every id it returns is returned exactly once,
/// however many pipelines or tasks share the allocator. Uuid ids rely on
/// v4 randomness and are checked against claimed ids only.
#[derive(Debug)]
pub struct IdAllocator {
    pub prefix: String,
    pub id_type: IdType,
    namespace: Mutex<IdNamespace>,
}

impl IdAllocator {
    pub fn new(prefix: &str, id_type: IdType) -> Self {
        Self {
            prefix: prefix.to_string(),
            id_type,
            namespace: Mutex::new(IdNamespace::default()),
        }
    }

    pub fn next_id(&self) -> String {
        let mut namespace = self.namespace.lock().unwrap_or_else(PoisonError::into_inner);

        loop {
            let candidate = match self.id_type {
                IdType::Int => {
                    namespace.current += 1;
                    format!("{}_{}", self.prefix, namespace.current)
                }
                IdType::Uuid => format!("{}_{}", self.prefix, Uuid::new_v4()),
            };

            if !namespace.claimed.contains(&candidate) {
                return candidate;
            }
        }
    }

    /// Keeps `preferred` when nobody holds it yet, otherwise suffixes it
    /// `_2`, `_3`, ... until free.
    pub fn claim(&self, preferred: &str) -> String {
        let mut namespace = self.namespace.lock().unwrap_or_else(PoisonError::into_inner);

        let mut candidate = preferred.to_string();
        let mut suffix = 2;
        while namespace.claimed.contains(&candidate) || self.is_counted(&candidate, namespace.current) {
            candidate = format!("{preferred}_{suffix}");
            suffix += 1;
        }

        namespace.claimed.insert(candidate.clone());
        candidate
    }

    /// Number of ids held through [`IdAllocator::claim`].
    pub fn claimed(&self) -> usize {
        self.namespace.lock().unwrap_or_else(PoisonError::into_inner).claimed.len()
    }

    /// True for an Int id the counter has already handed out.
    fn is_counted(&self, id: &str, current: u64) -> bool {
        if self.id_type != IdType::Int {
            return false;
        }

        id.strip_prefix(self.prefix.as_str())
            .and_then(|rest| rest.strip_prefix('_'))
            .and_then(|digits| digits.parse::<u64>().ok().filter(|n| n.to_string() == digits))
            .is_some_and(|n| (1..=current).contains(&n))
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new("sql_tool", IdType::Int)
    }
}
