use lazy_static::lazy_static;
use regex::Regex;

use crate::error::GrammarError;
use crate::tag::{TagSet, TagSpec};

lazy_static! {
    static ref TAG_RX: Regex = Regex::new(r#"^([A-Za-z_][A-Za-z0-9_]*):"([^"]*)""#).unwrap();
}

/// Parse tag-grammar text into a `TagSet`.
///
/// The grammar is a whitespace-separated sequence of `key:"name[,option]*"`
/// entries. A duplicate key keeps its first position and takes the latest
/// value, matching `TagSet::set`.
pub fn parse(text: &str) -> Result<TagSet, GrammarError> {
    let mut set = TagSet::new();
    let mut offset = 0;

    while offset < text.len() {
        let rest = &text[offset..];
        let trimmed = rest.trim_start();
        offset += rest.len() - trimmed.len();
        if trimmed.is_empty() {
            break;
        }

        let caps = TAG_RX.captures(trimmed).ok_or_else(|| GrammarError::Syntax {
            msg: format!("expected key:\"value\" but found {:?}", head(trimmed)),
            offset,
        })?;

        let value = &caps[2];
        let mut parts = value.split(',');
        let name = parts.next().unwrap_or("").to_string();
        let options = parts.map(|s| s.to_string()).collect();

        set.set(TagSpec {
            key: caps[1].to_string(),
            name,
            options,
        })?;

        offset += caps.get(0).map(|m| m.end()).unwrap_or(trimmed.len());
    }

    Ok(set)
}

fn head(text: &str) -> &str {
    let end = text
        .char_indices()
        .nth(16)
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    &text[..end]
}
