use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::ser::{Serialize, Serializer};

use crate::error::GrammarError;

lazy_static! {
    static ref KEY_RX: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
}

/// A single struct tag: `key:"name,opt1,opt2"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSpec {
    pub key:     String,
    pub name:    String,
    pub options: Vec<String>,
}

impl TagSpec {
    pub fn new(key: &str, name: &str, options: &[&str]) -> TagSpec {
        TagSpec {
            key:     key.to_string(),
            name:    name.to_string(),
            options: options.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl fmt::Display for TagSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:\"{}", self.key, self.name)?;
        for opt in &self.options {
            write!(f, ",{}", opt)?;
        }
        write!(f, "\"")
    }
}

/// An ordered, key-unique collection of `TagSpec`s.
///
/// Setting a spec whose key is already present replaces the stored spec
/// without moving it: first-occurrence position, latest value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    specs: Vec<TagSpec>,
}

impl TagSet {
    pub fn new() -> TagSet {
        TagSet::default()
    }

    /// Insert or replace by key. Keys must match `[A-Za-z_][A-Za-z0-9_]*`.
    pub fn set(&mut self, spec: TagSpec) -> Result<(), GrammarError> {
        if !KEY_RX.is_match(&spec.key) {
            return Err(GrammarError::InvalidKey(spec.key));
        }
        match self.specs.iter_mut().find(|s| s.key == spec.key) {
            Some(slot) => *slot = spec,
            None => self.specs.push(spec),
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&TagSpec> {
        self.specs.iter().find(|s| s.key == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.specs.iter().map(|s| s.key.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TagSpec> {
        self.specs.iter()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a TagSpec;
    type IntoIter = std::slice::Iter<'a, TagSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.specs.iter()
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, spec) in self.specs.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", spec)?;
        }
        Ok(())
    }
}

/// Serializes as the tag-grammar text so extraction results can be
/// embedded directly into generated source.
impl Serialize for TagSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_in_place() {
        let mut set = TagSet::new();
        set.set(TagSpec::new("json", "id", &[])).unwrap();
        set.set(TagSpec::new("bson", "_id", &[])).unwrap();
        set.set(TagSpec::new("json", "identifier", &["omitempty"])).unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set.keys().collect::<Vec<_>>(), vec!["json", "bson"]);
        assert_eq!(set.get("json").unwrap().name, "identifier");
    }

    #[test]
    fn set_rejects_bad_key() {
        let mut set = TagSet::new();
        let err = set.set(TagSpec::new("1bad", "x", &[])).unwrap_err();
        assert_eq!(err, GrammarError::InvalidKey("1bad".to_string()));
    }

    #[test]
    fn display_format() {
        let mut set = TagSet::new();
        set.set(TagSpec::new("json", "email_addr", &["omitempty"])).unwrap();
        set.set(TagSpec::new("xml", "email", &[])).unwrap();
        assert_eq!(set.to_string(), r#"json:"email_addr,omitempty" xml:"email""#);
    }
}
