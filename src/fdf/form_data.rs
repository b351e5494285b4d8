//! Ordered field data and the hidden/read-only name sets.

use super::field::{FieldFlags, FieldValue};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Ordered mapping from field name to value.
///
/// Iteration follows insertion order. Inserting an existing name replaces
/// its value without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormData {
    fields: IndexMap<String, FieldValue>,
}

impl FormData {
    /// Create empty form data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, returning the previous value for that name.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Option<FieldValue> {
        self.fields.insert(name.into(), value.into())
    }

    /// Builder form of [`FormData::insert`].
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Value of a field.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Whether a field with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether there are no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for FormData
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut data = FormData::new();
        for (name, value) in iter {
            data.insert(name, value);
        }
        data
    }
}

impl<'a> IntoIterator for &'a FormData {
    type Item = (&'a String, &'a FieldValue);
    type IntoIter = indexmap::map::Iter<'a, String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

/// Names of fields to mark read-only and hidden.
///
/// Lookups never fail: a name in neither set resolves to empty flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagSets {
    read_only: IndexSet<String>,
    hidden: IndexSet<String>,
}

impl FlagSets {
    /// Create empty flag sets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add names to the read-only set.
    pub fn extend_read_only<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.read_only.extend(names.into_iter().map(Into::into));
    }

    /// Add names to the hidden set.
    pub fn extend_hidden<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hidden.extend(names.into_iter().map(Into::into));
    }

    /// Whether `name` is read-only.
    pub fn is_read_only(&self, name: &str) -> bool {
        self.read_only.contains(name)
    }

    /// Whether `name` is hidden.
    pub fn is_hidden(&self, name: &str) -> bool {
        self.hidden.contains(name)
    }

    /// Flags for a field name.
    pub fn flags_for(&self, name: &str) -> FieldFlags {
        FieldFlags::from_bools(self.is_hidden(name), self.is_read_only(name))
    }

    /// Flagged names with no entry in `data`, each listed once.
    pub fn unmatched<'a>(&'a self, data: &'a FormData) -> impl Iterator<Item = &'a str> + 'a {
        let mut seen = IndexSet::new();
        self.read_only
            .iter()
            .chain(self.hidden.iter())
            .map(String::as_str)
            .filter(move |name| !data.contains(name) && seen.insert(*name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_is_kept() {
        let data = FormData::new()
            .with_field("zeta", "1")
            .with_field("alpha", "2")
            .with_field("mid", true);
        let names: Vec<&str> = data.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let mut data = FormData::new().with_field("a", "1").with_field("b", "2");
        let previous = data.insert("a", "3");
        assert_eq!(previous, Some(FieldValue::Text("1".into())));
        let entries: Vec<_> = data.iter().collect();
        assert_eq!(entries[0], ("a", &FieldValue::Text("3".into())));
        assert_eq!(data.len(), 2);
    }

    #[test]
    fn test_from_iterator() {
        let data: FormData = vec![("x", "1"), ("y", "2")].into_iter().collect();
        assert_eq!(data.len(), 2);
        assert_eq!(data.get("y"), Some(&FieldValue::Text("2".into())));
        assert!(!data.is_empty());
    }

    #[test]
    fn test_serde_as_json_object() {
        let data = FormData::new()
            .with_field("name", "Ann")
            .with_field("agree", true);
        let json = serde_json::to_string(&data).unwrap();
        assert_eq!(json, r#"{"name":{"Text":"Ann"},"agree":{"Boolean":true}}"#);

        let back: FormData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn test_flags_lookup() {
        let mut flags = FlagSets::new();
        flags.extend_hidden(["secret"]);
        flags.extend_read_only(["id", "secret"]);

        assert_eq!(flags.flags_for("secret"), FieldFlags::HIDDEN | FieldFlags::READ_ONLY);
        assert_eq!(flags.flags_for("id"), FieldFlags::READ_ONLY);
        assert_eq!(flags.flags_for("other"), FieldFlags::empty());
    }

    #[test]
    fn test_unmatched_names_listed_once() {
        let data = FormData::new().with_field("id", "1");
        let mut flags = FlagSets::new();
        flags.extend_hidden(["ghost", "id"]);
        flags.extend_read_only(["ghost", "phantom"]);

        let unmatched: Vec<&str> = flags.unmatched(&data).collect();
        assert_eq!(unmatched, ["ghost", "phantom"]);
    }
}
