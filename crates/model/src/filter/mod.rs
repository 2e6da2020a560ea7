//! The parsed filter tree produced by a query-builder widget.

use crate::filter::predicate::Predicate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod predicate;

/// A node of the filter tree.
///
/// Children order is significant: it decides both the order of the
/// generated SQL and the numbering of bound parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterNode {
    /// An AND/OR combination of child nodes.
    Group { glue: Glue, children: Vec<FilterNode> },

    /// A single rule on one field.
    Leaf { field: String, predicate: Predicate },
}

impl FilterNode {
    pub fn group(glue: Glue, children: Vec<FilterNode>) -> Self {
        FilterNode::Group { glue, children }
    }

    pub fn leaf(field: impl Into<String>, predicate: Predicate) -> Self {
        FilterNode::Leaf {
            field: field.into(),
            predicate,
        }
    }

    /// Total number of nodes in this subtree, the node itself included.
    pub fn node_count(&self) -> usize {
        match self {
            FilterNode::Group { children, .. } => {
                1 + children.iter().map(FilterNode::node_count).sum::<usize>()
            }
            FilterNode::Leaf { .. } => 1,
        }
    }

    /// Nesting depth of this subtree; a lone leaf has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            FilterNode::Group { children, .. } => {
                1 + children.iter().map(FilterNode::depth).max().unwrap_or(0)
            }
            FilterNode::Leaf { .. } => 1,
        }
    }
}

/// The boolean combinator joining a group's children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Glue {
    #[default]
    And,
    Or,
}

impl Glue {
    /// Resolves the widget's glue string. Only a case-insensitive `"or"`
    /// selects [`Glue::Or`]; anything else, absence included, is AND.
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some(name) if name.eq_ignore_ascii_case("or") => Glue::Or,
            _ => Glue::And,
        }
    }

    /// The separator placed between sibling fragments.
    pub fn sql_joiner(&self) -> &'static str {
        match self {
            Glue::And => " AND ",
            Glue::Or => " OR ",
        }
    }
}

impl fmt::Display for Glue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Glue::And => write!(f, "and"),
            Glue::Or => write!(f, "or"),
        }
    }
}
