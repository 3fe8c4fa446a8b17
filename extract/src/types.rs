use std::str;

use serde::{Deserialize, Serialize};

use crate::error::TagError;

/// One schema file: the unit of extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaFile {
    #[serde(default)]
    pub package:  Option<String>,
    #[serde(default)]
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub name: String,
    #[serde(default)]
    pub fields:   Vec<Field>,
    #[serde(default)]
    pub oneofs:   Vec<OneOf>,
    #[serde(default)]
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OneOf {
    pub name: String,
    #[serde(default)]
    pub tags: Option<Annotation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(default)]
    pub type_name: Option<String>,
    /// Name of the oneof group this field belongs to, if any.
    #[serde(default)]
    pub oneof: Option<String>,
    #[serde(default)]
    pub proto3_optional: bool,
    #[serde(default)]
    pub tags: Option<Annotation>,
}

impl Field {
    pub fn in_oneof(&self) -> bool {
        self.oneof.is_some()
    }
}

/// Raw tag-annotation payload attached to a field or oneof.
///
/// JSON schema dumps carry it as a plain string; binary descriptor dumps
/// carry the undecoded extension bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Annotation {
    Text(String),
    Raw(Vec<u8>),
}

impl Annotation {
    /// The annotation text, or a decode failure if the raw bytes are not
    /// valid UTF-8. `node` names the field/oneof for the error message.
    pub fn decode(&self, node: &str) -> Result<&str, TagError> {
        match self {
            Annotation::Text(text) => Ok(text),
            Annotation::Raw(bytes) => {
                str::from_utf8(bytes).map_err(|_| TagError::ExtensionDecode {
                    node: node.to_string(),
                })
            }
        }
    }
}

/// Load a schema file from its JSON dump.
pub fn schema_from_json(text: &str) -> Result<SchemaFile, TagError> {
    Ok(serde_json::from_str(text)?)
}
