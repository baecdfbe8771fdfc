//! Attribute collection for a single tag occurrence.

use std::collections::BTreeMap;

/// Attribute name → value for one tag. Rebuilt for every tag the walker
/// routes; when a name repeats, the last occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSet(BTreeMap<String, String>);

impl AttributeSet {
    /// Drain `pairs` into a set.
    pub fn collect(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut map = BTreeMap::new();
        for (name, value) in pairs {
            map.insert(name, value);
        }
        Self(map)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// The `content` attribute, or `""` when missing.
    pub fn content(&self) -> &str {
        self.get("content").unwrap_or_default()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::collect(iter.into_iter().map(|(k, v)| (k.into(), v.into())))
    }
}
