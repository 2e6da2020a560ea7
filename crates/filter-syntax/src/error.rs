use thiserror::Error;

/// Errors raised while turning JSON text into a filter tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The text is not valid JSON.
    #[error("{0}")]
    Syntax(String),

    /// The JSON is well-formed but does not describe a filter. Every problem
    /// found in the document is listed.
    #[error("{}", .0.join(", "))]
    Structure(Vec<String>),
}

impl ParseError {
    /// Individual messages; a syntax error yields exactly one.
    pub fn issues(&self) -> Vec<&str> {
        match self {
            ParseError::Syntax(msg) => vec![msg.as_str()],
            ParseError::Structure(issues) => issues.iter().map(String::as_str).collect(),
        }
    }
}
