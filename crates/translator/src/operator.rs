use std::fmt;

/// Condition operators understood by the translator, keyed by the mnemonic
/// the query-builder widget sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// No operator chosen yet; renders nothing.
    Empty,
    Equal,
    NotEqual,
    Contains,
    NotContains,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
    BeginsWith,
    NotBeginsWith,
    EndsWith,
    NotEndsWith,
    Between,
    NotBetween,
}

impl Operator {
    pub const ALL: [Operator; 15] = [
        Operator::Empty,
        Operator::Equal,
        Operator::NotEqual,
        Operator::Contains,
        Operator::NotContains,
        Operator::Less,
        Operator::LessOrEqual,
        Operator::Greater,
        Operator::GreaterOrEqual,
        Operator::BeginsWith,
        Operator::NotBeginsWith,
        Operator::EndsWith,
        Operator::NotEndsWith,
        Operator::Between,
        Operator::NotBetween,
    ];

    /// Mnemonics are matched exactly (case-sensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Operator::ALL.into_iter().find(|op| op.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operator::Empty => "",
            Operator::Equal => "equal",
            Operator::NotEqual => "notEqual",
            Operator::Contains => "contains",
            Operator::NotContains => "notContains",
            Operator::Less => "less",
            Operator::LessOrEqual => "lessOrEqual",
            Operator::Greater => "greater",
            Operator::GreaterOrEqual => "greaterOrEqual",
            Operator::BeginsWith => "beginsWith",
            Operator::NotBeginsWith => "notBeginsWith",
            Operator::EndsWith => "endsWith",
            Operator::NotEndsWith => "notEndsWith",
            Operator::Between => "between",
            Operator::NotBetween => "notBetween",
        }
    }

    /// Number of operand slots the operator consumes, or `None` when it
    /// accepts any operand.
    pub fn required_slots(&self) -> Option<usize> {
        match self {
            Operator::Empty => None,
            Operator::Between | Operator::NotBetween => Some(2),
            _ => Some(1),
        }
    }

    /// Renders a single-slot operator against `field` and placeholder `param`.
    ///
    /// Returns `None` for operators that are not single-slot.
    pub fn render_single(&self, field: &str, param: &str) -> Option<String> {
        let sql = match self {
            Operator::Equal => format!("{field} = {param}"),
            Operator::NotEqual => format!("{field} <> {param}"),
            Operator::Contains => format!("CHARINDEX({param}, {field}) > 0"),
            Operator::NotContains => format!("CHARINDEX({param}, {field}) = 0"),
            Operator::Less => format!("{field} < {param}"),
            Operator::LessOrEqual => format!("{field} <= {param}"),
            Operator::Greater => format!("{field} > {param}"),
            Operator::GreaterOrEqual => format!("{field} >= {param}"),
            Operator::BeginsWith => format!("{field} LIKE CONCAT({param}, '%')"),
            Operator::NotBeginsWith => format!("{field} NOT LIKE CONCAT({param}, '%')"),
            Operator::EndsWith => format!("{field} LIKE CONCAT('%', {param})"),
            Operator::NotEndsWith => format!("{field} NOT LIKE CONCAT('%', {param})"),
            Operator::Empty | Operator::Between | Operator::NotBetween => return None,
        };
        Some(sql)
    }

    /// Renders `between`/`notBetween` for the given bounds.
    ///
    /// Returns `None` for operators that are not range operators.
    pub fn render_range(&self, field: &str, bounds: RangeBounds<'_>) -> Option<String> {
        let sql = match (self, bounds) {
            (Operator::Between, RangeBounds::Both { start, end }) => {
                format!("{field} > {start} AND {field} < {end}")
            }
            (Operator::Between, RangeBounds::From(start)) => format!("{field} > {start}"),
            (Operator::Between, RangeBounds::Until(end)) => format!("{field} < {end}"),
            (Operator::NotBetween, RangeBounds::Both { start, end }) => {
                format!("{field} < {start} OR {field} > {end}")
            }
            (Operator::NotBetween, RangeBounds::From(start)) => format!("{field} < {start}"),
            (Operator::NotBetween, RangeBounds::Until(end)) => format!("{field} > {end}"),
            _ => return None,
        };
        Some(sql)
    }
}

/// Placeholders of the bounded sides of a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeBounds<'a> {
    /// Only the lower bound is set.
    From(&'a str),
    /// Only the upper bound is set.
    Until(&'a str),
    Both { start: &'a str, end: &'a str },
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
