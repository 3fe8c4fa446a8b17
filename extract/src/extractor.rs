use std::collections::BTreeMap;

use heck::ToUpperCamelCase;
use tagweave_grammar::TagSet;

use crate::error::TagError;
use crate::registry::TransformerRegistry;
use crate::types::{Annotation, Field, Message, OneOf, SchemaFile};
use crate::walk::{walk, Visitor};

/// Extraction result: message name → field/oneof key → TagSet.
pub type StructTags = BTreeMap<String, BTreeMap<String, TagSet>>;

/// One-shot extractor for a single schema file.
///
/// Holds the auto-tag registry and the accumulating result map; nothing
/// is shared across files, so callers may run one extractor per file in
/// parallel.
pub struct TagExtractor {
    registry: TransformerRegistry,
    tags:     StructTags,
}

impl TagExtractor {
    pub fn new<I, S>(auto_tags: I) -> TagExtractor
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        TagExtractor {
            registry: TransformerRegistry::from_configs(auto_tags),
            tags:     StructTags::new(),
        }
    }

    /// Walk the file and return the accumulated tags.
    pub fn extract(mut self, file: &SchemaFile) -> Result<StructTags, TagError> {
        tracing::debug!(rules = self.registry.len(), "starting extraction");
        walk(&mut self, file)?;
        Ok(self.tags)
    }

    fn message_entry(&mut self, message: &str) -> &mut BTreeMap<String, TagSet> {
        self.tags.entry(message.to_string()).or_default()
    }

    /// Storage key for a field. Oneof members that are not proto3
    /// synthetic optionals get `<MessageUpperCamel>_<FieldUpperCamel>`,
    /// the name of the per-case wrapper type some compilers generate.
    fn field_key(message: &Message, field: &Field) -> String {
        if field.in_oneof() && !field.proto3_optional {
            format!(
                "{}_{}",
                message.name.to_upper_camel_case(),
                field.name.to_upper_camel_case()
            )
        } else {
            field.name.clone()
        }
    }

    /// Decode and parse a node's explicit annotation, if any.
    fn explicit_tags(node: &str, annotation: Option<&Annotation>) -> Result<Option<TagSet>, TagError> {
        match annotation {
            None => Ok(None),
            Some(annotation) => {
                let raw = annotation.decode(node)?;
                Ok(Some(tagweave_grammar::parse(raw)?))
            }
        }
    }

    /// Overlay explicit tags onto the auto-generated set. Explicit
    /// entries win per key, keeping the key's original position.
    fn merge(node: &str, mut auto: TagSet, explicit: Option<TagSet>) -> Result<TagSet, TagError> {
        if let Some(explicit) = explicit {
            for spec in &explicit {
                auto.set(spec.clone()).map_err(|_| TagError::TagConflict {
                    key:  spec.key.clone(),
                    node: node.to_string(),
                })?;
            }
        }
        Ok(auto)
    }
}

impl Visitor for TagExtractor {
    fn visit_message(&mut self, message: &Message) -> Result<(), TagError> {
        self.message_entry(&message.name);
        Ok(())
    }

    fn visit_one_of(&mut self, message: &Message, oneof: &OneOf) -> Result<(), TagError> {
        let explicit = Self::explicit_tags(&oneof.name, oneof.tags.as_ref())?;
        let entry = self.message_entry(&message.name);
        match explicit {
            Some(set) => {
                entry.insert(oneof.name.clone(), set);
            }
            // A oneof with no annotation still gets an (empty) entry.
            None => {
                entry.entry(oneof.name.clone()).or_default();
            }
        }
        Ok(())
    }

    fn visit_field(&mut self, message: &Message, field: &Field) -> Result<(), TagError> {
        let auto = self.registry.auto_tags(&field.name)?;
        let explicit = Self::explicit_tags(&field.name, field.tags.as_ref())?;
        let merged = Self::merge(&field.name, auto, explicit)?;

        let key = Self::field_key(message, field);
        tracing::debug!(message = %message.name, key = %key, tags = %merged, "field tags");
        self.message_entry(&message.name).insert(key, merged);
        Ok(())
    }
}

/// Extract struct tags for one schema file.
pub fn extract_tags<I, S>(file: &SchemaFile, auto_tags: I) -> Result<StructTags, TagError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    TagExtractor::new(auto_tags).extract(file)
}
