use tagweave_grammar::{TagSet, TagSpec};

use crate::casing::CaseStyle;
use crate::error::TagError;

pub const OMIT_EMPTY_SUFFIX: &str = "-with-omitempty";
pub const CASE_INFIX: &str = "-as-";

/// One parsed auto-tag configuration entry.
#[derive(Debug, Clone, PartialEq)]
pub struct AutoTagRule {
    pub tag_key:    String,
    pub omit_empty: bool,
    pub case_style: CaseStyle,
}

impl AutoTagRule {
    /// Parse `<tagKey>[-with-omitempty][-as-<caseStyle>]`.
    ///
    /// Returns `None` when the case-style token is unrecognized; such
    /// entries register no rule and raise no error.
    pub fn parse(text: &str) -> Option<AutoTagRule> {
        let (head, case_style) = match text.split_once(CASE_INFIX) {
            Some((head, token)) => (head, CaseStyle::from_token(token)?),
            None => (text, CaseStyle::LowerSnake),
        };

        let (tag_key, omit_empty) = match head.strip_suffix(OMIT_EMPTY_SUFFIX) {
            Some(base) => (base, true),
            None => (head, false),
        };

        Some(AutoTagRule {
            tag_key: tag_key.to_string(),
            omit_empty,
            case_style,
        })
    }
}

/// Ordered set of auto-tag rules for one extraction run.
///
/// A repeated tag key replaces the earlier rule in place, so generated
/// TagSets keep the first-occurrence order of the configuration.
#[derive(Debug, Clone, Default)]
pub struct TransformerRegistry {
    rules: Vec<AutoTagRule>,
}

impl TransformerRegistry {
    pub fn from_configs<I, S>(configs: I) -> TransformerRegistry
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut registry = TransformerRegistry::default();
        for config in configs {
            if let Some(rule) = AutoTagRule::parse(config.as_ref()) {
                registry.insert(rule);
            } else {
                tracing::debug!(config = config.as_ref(), "skipping auto-tag rule with unknown case style");
            }
        }
        registry
    }

    fn insert(&mut self, rule: AutoTagRule) {
        match self.rules.iter_mut().find(|r| r.tag_key == rule.tag_key) {
            Some(slot) => *slot = rule,
            None => self.rules.push(rule),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AutoTagRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Synthesize one tag per rule for a field identifier, in registry
    /// order. An omit-empty rule contributes the `omitempty` option,
    /// except for the `graphql` key where the option is `optional`.
    pub fn auto_tags(&self, field_ident: &str) -> Result<TagSet, TagError> {
        let mut set = TagSet::new();
        for rule in &self.rules {
            let mut options = Vec::new();
            if rule.omit_empty {
                let opt = if rule.tag_key == "graphql" { "optional" } else { "omitempty" };
                options.push(opt.to_string());
            }
            set.set(TagSpec {
                key:  rule.tag_key.clone(),
                name: rule.case_style.apply(field_ident),
                options,
            })
            .map_err(|_| TagError::TagConflict {
                key:  rule.tag_key.clone(),
                node: field_ident.to_string(),
            })?;
        }
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_key_defaults_to_lower_snake() {
        let rule = AutoTagRule::parse("json").unwrap();
        assert_eq!(rule.tag_key, "json");
        assert!(!rule.omit_empty);
        assert_eq!(rule.case_style, CaseStyle::LowerSnake);
    }

    #[test]
    fn parse_omitempty_and_style() {
        let rule = AutoTagRule::parse("bson-with-omitempty-as-upper_camel").unwrap();
        assert_eq!(rule.tag_key, "bson");
        assert!(rule.omit_empty);
        assert_eq!(rule.case_style, CaseStyle::UpperCamel);
    }

    #[test]
    fn parse_unknown_style_is_skipped() {
        assert_eq!(AutoTagRule::parse("xml-as-kebab_case"), None);
        assert_eq!(AutoTagRule::parse("xml-as-"), None);
    }

    #[test]
    fn repeated_key_replaces_in_place() {
        let registry = TransformerRegistry::from_configs([
            "json-as-camel",
            "db",
            "json-with-omitempty",
        ]);
        assert_eq!(registry.len(), 2);
        let rules: Vec<_> = registry.iter().collect();
        assert_eq!(rules[0].tag_key, "json");
        assert!(rules[0].omit_empty);
        assert_eq!(rules[0].case_style, CaseStyle::LowerSnake);
        assert_eq!(rules[1].tag_key, "db");
    }
}
