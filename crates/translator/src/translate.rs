//! Recursive translation of a [`FilterNode`] tree into a [`SqlFragment`].
//!
//! The walk is depth-first and left-to-right. One [`ParamNamer`] is owned by
//! each top-level [`Translator::translate`] call and lent to every node, so
//! placeholder indices grow monotonically across the whole tree. The first
//! error aborts the walk.

use crate::{
    error::TranslateError,
    namer::ParamNamer,
    operator::{Operator, RangeBounds},
    whitelist::Whitelist,
};
use indexmap::IndexMap;
use model::{Condition, FilterNode, Glue, Predicate, Scalar, SqlFragment};
use tracing::{debug, trace};

pub type TranslateResult<T> = Result<T, TranslateError>;

/// Stateless apart from its whitelist; safe to share between threads.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    whitelist: Whitelist,
}

impl Translator {
    pub fn new(whitelist: Whitelist) -> Self {
        Translator { whitelist }
    }

    pub fn whitelist(&self) -> &Whitelist {
        &self.whitelist
    }

    pub fn translate(&self, root: &FilterNode) -> TranslateResult<SqlFragment> {
        debug!("Translating filter with {} node(s)", root.node_count());

        let mut namer = ParamNamer::new();
        match self.translate_node(root, &mut namer) {
            Ok(fragment) => {
                debug!(
                    "Filter translated: {} parameter(s) bound, {} allocated",
                    fragment.values.len(),
                    namer.allocated()
                );
                Ok(fragment)
            }
            Err(err) => {
                debug!("Filter translation failed: {err}");
                Err(err)
            }
        }
    }

    fn translate_node(
        &self,
        node: &FilterNode,
        namer: &mut ParamNamer,
    ) -> TranslateResult<SqlFragment> {
        match node {
            FilterNode::Group { glue, children } => self.translate_group(*glue, children, namer),
            FilterNode::Leaf { field, predicate } => self.translate_leaf(field, predicate, namer),
        }
    }

    fn translate_group(
        &self,
        glue: Glue,
        children: &[FilterNode],
        namer: &mut ParamNamer,
    ) -> TranslateResult<SqlFragment> {
        let mut parts = Vec::with_capacity(children.len());
        let mut values = IndexMap::new();

        for child in children {
            let fragment = self.translate_node(child, namer)?;
            if fragment.is_empty() {
                continue;
            }
            parts.push(fragment.sql);
            values.extend(fragment.values);
        }

        let sql = match parts.len() {
            0 => return Ok(SqlFragment::empty()),
            1 => parts.swap_remove(0),
            _ => format!("( {} )", parts.join(glue.sql_joiner())),
        };

        Ok(SqlFragment::new(sql, values))
    }

    fn translate_leaf(
        &self,
        field: &str,
        predicate: &Predicate,
        namer: &mut ParamNamer,
    ) -> TranslateResult<SqlFragment> {
        trace!("Translating rule on field '{field}'");

        // Checked before the predicate, so staged rules are rejected too.
        if !self.whitelist.allows(field) {
            return Err(TranslateError::FieldNotWhitelisted(field.to_string()));
        }

        match predicate {
            Predicate::None => Ok(SqlFragment::empty()),
            Predicate::Membership { values } => Ok(translate_membership(field, values, namer)),
            Predicate::Condition(condition) => translate_condition(field, condition, namer),
        }
    }
}

fn translate_membership(field: &str, list: &[Scalar], namer: &mut ParamNamer) -> SqlFragment {
    if list.is_empty() {
        return SqlFragment::empty();
    }

    let mut values = IndexMap::with_capacity(list.len());
    for value in list {
        values.insert(namer.next_name(), value.clone());
    }

    let names = values.keys().map(String::as_str).collect::<Vec<_>>();
    let sql = format!("{field} IN ({})", names.join(","));

    SqlFragment::new(sql, values)
}

fn translate_condition(
    field: &str,
    condition: &Condition,
    namer: &mut ParamNamer,
) -> TranslateResult<SqlFragment> {
    // Slots are taken before the operator is looked at, so every condition
    // advances the numbering by its operand's arity whatever happens next.
    let slots = condition.operand.slots();
    let names = slots.iter().map(|_| namer.next_name()).collect::<Vec<_>>();

    let operator = Operator::from_name(&condition.operator)
        .ok_or_else(|| TranslateError::UnknownOperation(condition.operator.clone()))?;

    if operator == Operator::Empty {
        return Ok(SqlFragment::empty());
    }

    let wrong_count = || TranslateError::WrongParameterCount {
        operation: condition.operator.clone(),
        count: slots.len(),
    };

    if operator.required_slots() != Some(slots.len()) {
        return Err(wrong_count());
    }

    let mut values = names
        .iter()
        .cloned()
        .zip(slots.iter().cloned())
        .collect::<IndexMap<_, _>>();

    let sql = match (names.as_slice(), slots.as_slice()) {
        ([param], _) => operator.render_single(field, param),
        ([start, end], [low, high]) => {
            // An open side is rendered without its placeholder and unbound.
            let bounds = if low.is_null() {
                values.shift_remove(start);
                RangeBounds::Until(end)
            } else if high.is_null() {
                values.shift_remove(end);
                RangeBounds::From(start)
            } else {
                RangeBounds::Both { start, end }
            };
            operator.render_range(field, bounds)
        }
        _ => None,
    }
    .ok_or_else(wrong_count)?;

    Ok(SqlFragment::new(sql, values))
}
