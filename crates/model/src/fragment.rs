use crate::Scalar;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A parameterized SQL predicate (no leading `WHERE`) and the values bound
/// to its placeholders, in allocation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SqlFragment {
    pub sql: String,
    pub values: IndexMap<String, Scalar>,
}

impl SqlFragment {
    pub fn new(sql: impl Into<String>, values: IndexMap<String, Scalar>) -> Self {
        SqlFragment {
            sql: sql.into(),
            values,
        }
    }

    /// The fragment of a node that contributes nothing to the predicate.
    pub fn empty() -> Self {
        SqlFragment::default()
    }

    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }

    /// Looks up the value bound to a placeholder such as `@p0`.
    pub fn value(&self, name: &str) -> Option<&Scalar> {
        self.values.get(name)
    }
}
