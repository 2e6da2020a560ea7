use crate::Scalar;
use serde::{Deserialize, Serialize};

/// What a leaf asks of its field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Predicate {
    /// A staged rule: a field was picked but nothing else yet.
    None,

    /// An IN-list. An empty list behaves like [`Predicate::None`].
    Membership { values: Vec<Scalar> },

    Condition(Condition),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Operator mnemonic as sent by the widget (`equal`, `between`, ...).
    /// Validated only at translation time.
    pub operator: String,
    pub operand: Operand,
}

impl Condition {
    pub fn new(operator: impl Into<String>, operand: Operand) -> Self {
        Condition {
            operator: operator.into(),
            operand,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operand {
    Scalar(Scalar),

    /// A two-sided range; a missing side means "unbounded on that side".
    Range {
        start: Option<Scalar>,
        end: Option<Scalar>,
    },
}

impl Operand {
    pub fn range(start: Option<Scalar>, end: Option<Scalar>) -> Self {
        Operand::Range { start, end }
    }

    /// Number of parameter slots this operand occupies.
    pub fn arity(&self) -> usize {
        match self {
            Operand::Scalar(_) => 1,
            Operand::Range { .. } => 2,
        }
    }

    /// Resolves the operand into one scalar per slot. A range always yields
    /// two, with `null` standing in for a missing side.
    pub fn slots(&self) -> Vec<Scalar> {
        match self {
            Operand::Scalar(value) => vec![value.clone()],
            Operand::Range { start, end } => vec![
                start.clone().unwrap_or(Scalar::Null),
                end.clone().unwrap_or(Scalar::Null),
            ],
        }
    }
}
