//! Hash map construction with the ahash hasher
//!
//! Extra sections keep their fields in insertion order so that captured
//! content can be written back out in the order it was read. The maps use
//! ahash for DoS resistant, platform independent hashing.

use ahash::RandomState;
use indexmap::IndexMap;

/// Insertion-ordered map hashed with ahash
pub type OrderedMap<K, V> = IndexMap<K, V, RandomState>;

/// Create an empty insertion-ordered map
///
/// # Example
///
/// ```rust
/// use ass_parser::utils::hashers::create_ordered_map;
///
/// let mut map = create_ordered_map::<&str, &str>();
/// map.insert("b", "1");
/// map.insert("a", "2");
/// assert_eq!(map.keys().copied().collect::<Vec<_>>(), ["b", "a"]);
/// ```
#[must_use]
pub fn create_ordered_map<K, V>() -> OrderedMap<K, V> {
    IndexMap::with_hasher(RandomState::new())
}

/// Create an insertion-ordered map with room for `capacity` entries
#[must_use]
pub fn create_ordered_map_with_capacity<K, V>(capacity: usize) -> OrderedMap<K, V> {
    IndexMap::with_capacity_and_hasher(capacity, RandomState::new())
}
