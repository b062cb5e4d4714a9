//! Insertion-ordered mapping keyed by valence-state identifier

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Association list from state id (e.g. `"Si-3s"`) to a value
///
/// Keys keep the position of their first insertion; inserting an existing key
/// replaces its value in place.
#[derive(Debug, Clone, PartialEq)]
pub struct StateMap<T> {
    entries: Vec<(String, T)>,
}

impl<T> Default for StateMap<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> StateMap<T> {
    /// Create an empty map
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite; returns the previous value for `id`
    pub(crate) fn insert(&mut self, id: impl Into<String>, value: T) -> Option<T> {
        let id = id.into();
        match self.entries.iter_mut().find(|(key, _)| *key == id) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((id, value));
                None
            }
        }
    }

    /// Value stored for `id`
    pub fn get(&self, id: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, value)| value)
    }

    /// True when `id` has a value
    pub fn contains_key(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Number of distinct ids
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no id has been inserted
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// State ids in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// `(id, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl<T: Serialize> Serialize for StateMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut map = StateMap::new();
        assert!(map.is_empty());
        assert_eq!(map.insert("1s", 1.0), None);
        assert_eq!(map.insert("2s", 2.0), None);

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("1s"), Some(&1.0));
        assert!(map.contains_key("2s"));
        assert!(!map.contains_key("2p"));
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut map = StateMap::new();
        map.insert("2s", 1);
        map.insert("2p", 2);
        assert_eq!(map.insert("2s", 3), Some(1));

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![("2s", &3), ("2p", &2)]);
    }

    #[test]
    fn test_serializes_as_ordered_object() {
        let mut map = StateMap::new();
        map.insert("b", 1);
        map.insert("a", 2);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"b":1,"a":2}"#);
    }
}
