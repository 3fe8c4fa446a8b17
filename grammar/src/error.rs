use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GrammarError {
    #[error("Tag syntax error at byte {offset}: {msg}")]
    Syntax { msg: String, offset: usize },

    #[error("Invalid tag key {0:?}")]
    InvalidKey(String),
}
