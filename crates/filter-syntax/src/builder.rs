use crate::error::ParseError;
use model::{Condition, FilterNode, Glue, Operand, Predicate, Scalar};
use serde_json::{Map, Value};
use tracing::{debug, warn};

pub type ParseResult<T> = Result<T, ParseError>;

/// Nesting limit applied when no explicit [`ParseOptions`] are given.
pub const DEFAULT_MAX_DEPTH: usize = 64;

const ROOT_PATH: &str = "$";
const LEAF_KEYS: [&str; 3] = ["field", "condition", "includes"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Deepest allowed nesting of groups; a lone leaf has depth 1.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Parse a filter document into a typed tree.
///
/// Blank input means "no filter" and yields `Ok(None)`.
pub fn parse(input: &str) -> ParseResult<Option<FilterNode>> {
    parse_with(input, &ParseOptions::default())
}

pub fn parse_with(input: &str, options: &ParseOptions) -> ParseResult<Option<FilterNode>> {
    if input.trim().is_empty() {
        return Ok(None);
    }

    let document: Value =
        serde_json::from_str(input).map_err(|e| ParseError::Syntax(e.to_string()))?;

    let mut builder = TreeBuilder::new(options);
    let root = builder.build_node(&document, ROOT_PATH, 1);
    builder.finish(root).map(Some)
}

/// Walks a JSON document and records every structural issue it meets instead
/// of stopping at the first one. The tree it builds is only handed out when
/// no issue was recorded.
struct TreeBuilder<'a> {
    options: &'a ParseOptions,
    issues: Vec<String>,
}

impl<'a> TreeBuilder<'a> {
    fn new(options: &'a ParseOptions) -> Self {
        TreeBuilder {
            options,
            issues: Vec::new(),
        }
    }

    fn finish(self, root: FilterNode) -> ParseResult<FilterNode> {
        if self.issues.is_empty() {
            Ok(root)
        } else {
            debug!("Filter rejected with {} issue(s)", self.issues.len());
            Err(ParseError::Structure(self.issues))
        }
    }

    fn build_node(&mut self, value: &Value, path: &str, depth: usize) -> FilterNode {
        if depth > self.options.max_depth {
            self.issue(
                path,
                format!(
                    "filter nesting exceeds maximum depth of {}",
                    self.options.max_depth
                ),
            );
            return FilterNode::leaf("", Predicate::None);
        }

        let Some(obj) = value.as_object() else {
            self.type_mismatch(path, "object", value);
            return FilterNode::leaf("", Predicate::None);
        };

        match obj.get("rules") {
            Some(Value::Array(rules)) => {
                let glue = Glue::from_name(self.optional_str(obj, "glue", path));

                if LEAF_KEYS
                    .iter()
                    .any(|key| obj.get(*key).is_some_and(|v| !v.is_null()))
                {
                    warn!("Ignoring field/condition/includes on group node at {path}");
                }

                let rules_path = key_path(path, "rules");
                let children = rules
                    .iter()
                    .enumerate()
                    .map(|(i, rule)| self.build_node(rule, &index_path(&rules_path, i), depth + 1))
                    .collect();

                FilterNode::group(glue, children)
            }
            None | Some(Value::Null) => self.build_leaf(obj, path),
            Some(other) => {
                self.type_mismatch(&key_path(path, "rules"), "array", other);
                FilterNode::leaf("", Predicate::None)
            }
        }
    }

    fn build_leaf(&mut self, obj: &Map<String, Value>, path: &str) -> FilterNode {
        // Glue is meaningless on a leaf but still has to be well-typed.
        self.optional_str(obj, "glue", path);

        let field = self.optional_str(obj, "field", path).map(str::to_string);
        let includes = self.build_includes(obj, path);
        let condition = self.build_condition(obj, path);

        let predicate = if !includes.is_empty() {
            Predicate::Membership { values: includes }
        } else if let Some(condition) = condition {
            Predicate::Condition(condition)
        } else {
            Predicate::None
        };

        let field = match field {
            Some(field) => field,
            None => {
                if predicate != Predicate::None {
                    self.issue(
                        path,
                        "'field' is required for a rule with a condition or includes".to_string(),
                    );
                }
                String::new()
            }
        };

        FilterNode::leaf(field, predicate)
    }

    fn build_includes(&mut self, obj: &Map<String, Value>, path: &str) -> Vec<Scalar> {
        let path = key_path(path, "includes");
        match obj.get("includes") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .filter_map(|(i, item)| {
                    if is_primitive(item) {
                        Some(item.clone())
                    } else {
                        self.type_mismatch(&index_path(&path, i), "primitive value", item);
                        None
                    }
                })
                .collect(),
            Some(other) => {
                self.type_mismatch(&path, "array", other);
                Vec::new()
            }
        }
    }

    fn build_condition(&mut self, obj: &Map<String, Value>, path: &str) -> Option<Condition> {
        let path = key_path(path, "condition");
        match obj.get("condition") {
            None | Some(Value::Null) => None,
            Some(Value::Object(condition)) => {
                // An operator that has not been picked yet is the empty operator.
                let operator = self.optional_str(condition, "type", &path).unwrap_or("");
                let operand =
                    self.build_operand(condition.get("filter"), &key_path(&path, "filter"));
                Some(Condition::new(operator, operand))
            }
            Some(other) => {
                self.type_mismatch(&path, "object", other);
                None
            }
        }
    }

    fn build_operand(&mut self, value: Option<&Value>, path: &str) -> Operand {
        match value {
            None => Operand::Scalar(Scalar::Null),
            Some(Value::Object(range)) => Operand::range(
                self.build_bound(range.get("start"), &key_path(path, "start")),
                self.build_bound(range.get("end"), &key_path(path, "end")),
            ),
            Some(value @ Value::Array(_)) => {
                self.type_mismatch(path, "primitive value or range object", value);
                Operand::Scalar(Scalar::Null)
            }
            Some(value) => Operand::Scalar(value.clone()),
        }
    }

    /// A null bound is the same as a missing one: the range is open there.
    fn build_bound(&mut self, value: Option<&Value>, path: &str) -> Option<Scalar> {
        match value {
            None | Some(Value::Null) => None,
            Some(value) if is_primitive(value) => Some(value.clone()),
            Some(value) => {
                self.type_mismatch(path, "primitive value", value);
                None
            }
        }
    }

    fn optional_str<'v>(
        &mut self,
        obj: &'v Map<String, Value>,
        key: &str,
        path: &str,
    ) -> Option<&'v str> {
        match obj.get(key) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.as_str()),
            Some(other) => {
                self.type_mismatch(&key_path(path, key), "string", other);
                None
            }
        }
    }

    fn type_mismatch(&mut self, path: &str, expected: &str, found: &Value) {
        self.issue(
            path,
            format!("expected {expected}, found {}", json_type_name(found)),
        );
    }

    fn issue(&mut self, path: &str, message: String) {
        self.issues.push(format!("{path}: {message}"));
    }
}

fn key_path(path: &str, key: &str) -> String {
    format!("{path}.{key}")
}

fn index_path(path: &str, index: usize) -> String {
    format!("{path}[{index}]")
}

fn is_primitive(value: &Value) -> bool {
    !matches!(value, Value::Object(_) | Value::Array(_))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
