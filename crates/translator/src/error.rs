use filter_syntax::ParseError;
use thiserror::Error;

/// Errors raised while turning a filter tree into SQL. The first one met
/// aborts the whole translation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    /// The operand does not supply the number of slots the operator needs.
    ///
    /// Covers a scalar (or missing) filter given to `between`/`notBetween`
    /// and a range filter given to a single-slot operator such as `equal`.
    #[error("wrong number of parameters for {operation} operation: {count}")]
    WrongParameterCount { operation: String, count: usize },

    #[error("field name is not in whitelist: {0}")]
    FieldNotWhitelisted(String),
}

/// Either stage of a JSON-to-SQL conversion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Translate(#[from] TranslateError),
}
