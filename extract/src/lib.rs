//! tagweave-extract
//!
//! This crate implements:
//!  1) A schema model (`SchemaFile`/`Message`/`Field`/`OneOf`) with JSON
//!     loading (`schema_from_json`),
//!  2) Auto-tag configuration (`AutoTagRule`, `TransformerRegistry`) for
//!     `<tagKey>[-with-omitempty][-as-<caseStyle>]` rules,
//!  3) A depth-first schema walker (`walk` / `Visitor`),
//!  4) The extraction orchestrator (`TagExtractor` / `extract_tags`):
//!     auto tags + explicit annotations, merged with explicit-wins
//!     semantics and oneof wrapper-key resolution,
//!  5) Error types (`TagError`).

pub mod casing;
pub mod error;
pub mod extractor;
pub mod registry;
pub mod types;
pub mod walk;

pub use tagweave_grammar::{GrammarError, TagSet, TagSpec};

pub use casing::CaseStyle;
pub use error::TagError;
pub use extractor::{extract_tags, StructTags, TagExtractor};
pub use registry::{AutoTagRule, TransformerRegistry};
pub use types::{schema_from_json, Annotation, Field, Message, OneOf, SchemaFile};
