use std::fmt::Display;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Ordered, duplicate-free tags. Serialized as the comma-joined string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSet {
    labels: Vec<String>,
}

impl LabelSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `label` unless it is already present.
    pub fn insert(&mut self, label: &str) -> bool {
        if self.contains(label) {
            return false;
        }
        self.labels.push(label.to_string());
        true
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|existing| existing == label)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Display for LabelSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.labels.join(", "))
    }
}

impl<'a> FromIterator<&'a str> for LabelSet {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        let mut set = LabelSet::new();
        for label in iter {
            set.insert(label);
        }
        set
    }
}

impl Serialize for LabelSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for LabelSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let joined = String::deserialize(deserializer)?;
        Ok(joined.split(',').map(str::trim).filter(|label| !label.is_empty()).collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::labels::LabelSet;

    #[test]
    fn keeps_first_occurrence_order() {
        let labels: LabelSet = ["select", "join", "select", "filtered"].into_iter().collect();

        assert_eq!(labels.len(), 3);
        assert_eq!(labels.to_string(), "select, join, filtered");
    }

    #[test]
    fn serializes_as_string() {
        let labels: LabelSet = ["select", "limited"].into_iter().collect();

        let json = serde_json::to_value(&labels).unwrap();
        assert_eq!(json, serde_json::json!("select, limited"));

        let back: LabelSet = serde_json::from_value(json).unwrap();
        assert_eq!(back, labels);
    }

    #[test]
    fn empty_set() {
        let labels = LabelSet::new();

        assert!(labels.is_empty());
        assert_eq!(labels.to_string(), "");
        let back: LabelSet = serde_json::from_str("\"\"").unwrap();
        assert!(back.is_empty());
    }
}
