//! tagweave-grammar
//!
//! Primitives for the textual struct-tag grammar used by the tagweave
//! extraction engine:
//!  1) `TagSpec` — one `key:"name,opt1,opt2"` entry,
//!  2) `TagSet` — an ordered, key-unique collection with replace-by-key
//!     semantics,
//!  3) `parse` — tag-grammar text → `TagSet`,
//!  4) `Display`/`Serialize` — `TagSet` → tag-grammar text,
//!  5) Error types (`GrammarError`).
//!
//! ```
//! use tagweave_grammar::parse;
//!
//! let set = parse(r#"json:"user_id,omitempty" bson:"userId""#).unwrap();
//! assert_eq!(set.get("json").unwrap().options, vec!["omitempty"]);
//! assert_eq!(set.to_string(), r#"json:"user_id,omitempty" bson:"userId""#);
//! ```

pub mod error;
pub mod parse;
pub mod tag;

pub use error::GrammarError;
pub use parse::parse;
pub use tag::{TagSet, TagSpec};
