pub mod filter;
pub mod fragment;

pub use filter::{
    FilterNode, Glue,
    predicate::{Condition, Operand, Predicate},
};
pub use fragment::SqlFragment;

/// An opaque JSON primitive carried verbatim from the filter into the bound
/// parameter map.
pub type Scalar = serde_json::Value;
