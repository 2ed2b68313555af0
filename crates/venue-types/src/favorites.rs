use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Set of session identifiers the user has starred.
///
/// Serializes as a plain JSON array of identifiers so the persisted value
/// stays readable and diffable. Ordering is the set's sorted order, which
/// keeps rewrites of an unchanged set byte-identical.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSet(BTreeSet<String>);

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        self.0.insert(id.into())
    }

    pub fn remove(&mut self, id: &str) -> bool {
        self.0.remove(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_array() {
        let mut favorites = FavoriteSet::new();
        favorites.insert("B2");
        favorites.insert("B1");

        let json = serde_json::to_string(&favorites).unwrap();
        assert_eq!(json, r#"["B1","B2"]"#);

        let back: FavoriteSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, favorites);
    }

    #[test]
    fn test_insert_remove() {
        let mut favorites = FavoriteSet::new();
        assert!(favorites.insert("B1"));
        assert!(!favorites.insert("B1"));
        assert!(favorites.contains("B1"));
        assert!(favorites.remove("B1"));
        assert!(favorites.is_empty());
    }
}
