use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Matches found in one piece of content, grouped by category.
///
/// Category order follows registry order and each category lists its matched
/// substrings in order of appearance (repeats kept). Only categories with at
/// least one match are present, so an empty map means no PII was found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DetectionMap(IndexMap<String, Vec<String>>);

impl DetectionMap {
    /// Empty map.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, category: &str, matches: Vec<String>) {
        debug_assert!(!matches.is_empty(), "empty categories are never recorded");
        self.0.insert(category.to_string(), matches);
    }

    /// True when no PII was found.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of categories with at least one match.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Matched substrings for `category`, if it was detected.
    pub fn get(&self, category: &str) -> Option<&[String]> {
        self.0.get(category).map(Vec::as_slice)
    }

    /// True when `category` was detected.
    pub fn contains(&self, category: &str) -> bool {
        self.0.contains_key(category)
    }

    /// Detected category names in registry order.
    pub fn categories(&self) -> Vec<String> {
        self.0.keys().cloned().collect()
    }

    /// `(category, matches)` pairs in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(category, matches)| (category.as_str(), matches.as_slice()))
    }

    /// Total number of matched substrings across all categories.
    pub fn match_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }
}

impl<'a> IntoIterator for &'a DetectionMap {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = indexmap::map::Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DetectionMap {
        let mut map = DetectionMap::new();
        map.insert("SSN", vec!["123-45-6789".into()]);
        map.insert("EMAIL", vec!["a@b.io".into(), "c@d.io".into(), "a@b.io".into()]);
        map
    }

    #[test]
    fn preserves_insertion_order() {
        let map = sample();
        assert_eq!(map.categories(), vec!["SSN", "EMAIL"]);
        assert_eq!(map.len(), 2);
        assert_eq!(map.match_count(), 4);
        assert_eq!(map.get("EMAIL").map(<[String]>::len), Some(3));
        assert!(map.get("PHONE").is_none());
    }

    #[test]
    fn serializes_as_ordered_object() {
        let json = serde_json::to_string(&sample()).expect("serialize");
        assert_eq!(
            json,
            r#"{"SSN":["123-45-6789"],"EMAIL":["a@b.io","c@d.io","a@b.io"]}"#
        );
    }

    #[test]
    fn empty_map_serializes_as_empty_object() {
        let json = serde_json::to_string(&DetectionMap::new()).expect("serialize");
        assert_eq!(json, "{}");
    }
}
