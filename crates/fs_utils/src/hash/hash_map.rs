//! Provide [`HashMap`] based on [hashbrown]'s implementation.

use super::FixedHashState;

/// A [`hashbrown::HashMap`] using [`FixedHashState`] by default.
///
/// Iteration order is unspecified.
///
/// # Examples
///
/// ```
/// use fs_utils::hash::HashMap;
///
/// let mut map: HashMap<&str, u32> = HashMap::default();
/// map.insert("age", 5);
///
/// assert_eq!(map.get("age"), Some(&5));
/// ```
pub type HashMap<K, V, S = FixedHashState> = hashbrown::HashMap<K, V, S>;
