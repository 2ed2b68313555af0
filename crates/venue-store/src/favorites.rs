use venue_types::FavoriteSet;

use crate::kv::KvStore;
use crate::Result;

/// Storage key holding the JSON-encoded array of favorited session
/// identifiers. Read once at startup, rewritten on every toggle.
pub const FAVORITES_KEY: &str = "ccoi-favorites";

/// Load the favorite set.
///
/// A missing or corrupt value is an empty set, never an error; losing a
/// handful of stars is preferable to wedging the app on bad state.
pub fn load_favorites(store: &dyn KvStore) -> FavoriteSet {
    let value = match store.get(FAVORITES_KEY) {
        Ok(Some(value)) => value,
        _ => return FavoriteSet::new(),
    };

    serde_json::from_value(value).unwrap_or_default()
}

/// Persist the favorite set, replacing the stored value.
pub fn save_favorites(store: &mut dyn KvStore, favorites: &FavoriteSet) -> Result<()> {
    store.set(FAVORITES_KEY, serde_json::to_value(favorites)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryKvStore;
    use serde_json::json;

    #[test]
    fn test_roundtrip() {
        let mut store = MemoryKvStore::new();

        let mut favorites = FavoriteSet::new();
        favorites.insert("B1");
        favorites.insert("09:00-09:30");

        save_favorites(&mut store, &favorites).unwrap();
        assert_eq!(load_favorites(&store), favorites);
    }

    #[test]
    fn test_missing_value_is_empty_set() {
        let store = MemoryKvStore::new();
        assert!(load_favorites(&store).is_empty());
    }

    #[test]
    fn test_corrupt_value_is_empty_set() {
        let mut store = MemoryKvStore::new();
        store.set(FAVORITES_KEY, json!({"not": "an array"})).unwrap();
        assert!(load_favorites(&store).is_empty());
    }
}
