use std::collections::HashSet;

/// The set of field names a filter may reference. An unrestricted whitelist
/// allows every field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Whitelist {
    fields: Option<HashSet<String>>,
}

impl Whitelist {
    pub fn unrestricted() -> Self {
        Self::default()
    }

    pub fn from_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Whitelist {
            fields: Some(fields.into_iter().map(Into::into).collect()),
        }
    }

    /// Field names are compared case-sensitively.
    pub fn allows(&self, field: &str) -> bool {
        match &self.fields {
            Some(fields) => fields.contains(field),
            None => true,
        }
    }

    pub fn is_restricted(&self) -> bool {
        self.fields.is_some()
    }
}

impl<S: Into<String>> FromIterator<S> for Whitelist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Whitelist::from_fields(iter)
    }
}
