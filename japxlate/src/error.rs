/// Errors from building a [`Transliterator`](crate::Transliterator).
///
/// Conversions themselves never fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A kana table could not be compiled into an automaton.
    #[error("failed to build kana automaton: {0}")]
    Automaton(String),

    /// A rewrite rule pattern is invalid.
    #[error("invalid rewrite pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl From<daachorse::errors::DaachorseError> for Error {
    fn from(e: daachorse::errors::DaachorseError) -> Self {
        Self::Automaton(e.to_string())
    }
}

pub type Result<T> = core::result::Result<T, Error>;
