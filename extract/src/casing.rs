use heck::{ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};
use serde::Serialize;

/// Naming convention applied to a field identifier to derive a tag name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CaseStyle {
    LowerSnake,
    UpperSnake,
    LowerCamel,
    UpperCamel,
    LowerDot,
    UpperDot,
}

impl CaseStyle {
    /// Resolve a configuration token, case-insensitively and with the
    /// historical aliases. Unknown tokens yield `None`; callers skip the
    /// rule silently rather than erroring.
    pub fn from_token(token: &str) -> Option<CaseStyle> {
        match token.to_ascii_lowercase().as_str() {
            "lower_snake" | "lower_snake_case" | "snake" | "snake_case" => {
                Some(CaseStyle::LowerSnake)
            }
            "upper_snake" | "upper_snake_case" => Some(CaseStyle::UpperSnake),
            "lower_camel" | "lower_camel_case" | "camel" | "camel_case" => {
                Some(CaseStyle::LowerCamel)
            }
            "upper_camel" | "upper_camel_case" => Some(CaseStyle::UpperCamel),
            "dot_notation" | "dot" | "lower_dot_notation" | "lower_dot" => {
                Some(CaseStyle::LowerDot)
            }
            "upper_dot" | "upper_dot_notation" => Some(CaseStyle::UpperDot),
            _ => None,
        }
    }

    pub fn apply(&self, ident: &str) -> String {
        match self {
            CaseStyle::LowerSnake => ident.to_snake_case(),
            CaseStyle::UpperSnake => ident.to_shouty_snake_case(),
            CaseStyle::LowerCamel => ident.to_lower_camel_case(),
            CaseStyle::UpperCamel => ident.to_upper_camel_case(),
            // Dot notation is the snake form with `.` separators.
            CaseStyle::LowerDot => ident.to_snake_case().replace('_', "."),
            CaseStyle::UpperDot => ident.to_shouty_snake_case().replace('_', "."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply() {
        assert_eq!(CaseStyle::LowerSnake.apply("UserId"), "user_id");
        assert_eq!(CaseStyle::UpperSnake.apply("UserId"), "USER_ID");
        assert_eq!(CaseStyle::LowerCamel.apply("user_id"), "userId");
        assert_eq!(CaseStyle::UpperCamel.apply("user_id"), "UserId");
        assert_eq!(CaseStyle::LowerDot.apply("UserId"), "user.id");
        assert_eq!(CaseStyle::UpperDot.apply("UserId"), "USER.ID");
    }

    #[test]
    fn test_from_token_aliases() {
        assert_eq!(CaseStyle::from_token("snake"), Some(CaseStyle::LowerSnake));
        assert_eq!(CaseStyle::from_token("SNAKE_CASE"), Some(CaseStyle::LowerSnake));
        assert_eq!(CaseStyle::from_token("camel"), Some(CaseStyle::LowerCamel));
        assert_eq!(CaseStyle::from_token("dot"), Some(CaseStyle::LowerDot));
        assert_eq!(CaseStyle::from_token("upper_dot"), Some(CaseStyle::UpperDot));
        assert_eq!(CaseStyle::from_token("kebab_case"), None);
    }
}
