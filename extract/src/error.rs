use thiserror::Error;

use tagweave_grammar::GrammarError;

#[derive(Debug, Error)]
pub enum TagError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid schema file: {0}")]
    Schema(#[from] serde_json::Error),

    #[error("Tag annotation error: {0}")]
    Grammar(#[from] GrammarError),

    #[error("Annotation on {node:?} is not valid UTF-8")]
    ExtensionDecode { node: String },

    #[error("Conflicting tag {key:?} on {node:?}")]
    TagConflict { key: String, node: String },
}
