use filter_syntax::{ParseError, parse};

#[test]
fn test_invalid_json_is_syntax_error() {
    let err = parse(r#"{ "glue": "and", "rules": [{ "field": "a", condition": {} }] }"#).unwrap_err();
    assert!(matches!(err, ParseError::Syntax(_)), "got {err:?}");
    assert!(err.to_string().contains("line 1"), "got {err}");
}

#[test]
fn test_non_object_root() {
    let err = parse("[1, 2]").unwrap_err();
    assert_eq!(err.to_string(), "$: expected object, found array");
}

#[test]
fn test_all_structural_issues_are_reported() {
    let input = r#"
        {
            "glue": 5,
            "rules": [
                { "field": 1 },
                { "field": "a", "condition": { "type": "equal", "filter": [1, 2] } },
                { "field": "b", "includes": [1, { "x": 1 }] },
                "not a rule"
            ]
        }
    "#;

    let err = parse(input).unwrap_err();
    assert_eq!(
        err,
        ParseError::Structure(vec![
            "$.glue: expected string, found number".to_string(),
            "$.rules[0].field: expected string, found number".to_string(),
            "$.rules[1].condition.filter: expected primitive value or range object, found array"
                .to_string(),
            "$.rules[2].includes[1]: expected primitive value, found object".to_string(),
            "$.rules[3]: expected object, found string".to_string(),
        ])
    );
    assert_eq!(err.issues().len(), 5);
    assert!(err.to_string().contains(", $.rules[0].field"));
}

#[test]
fn test_range_bounds_must_be_primitive() {
    let err = parse(
        r#"{ "field": "a", "condition": { "type": "between", "filter": { "start": [1], "end": {} } } }"#,
    )
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "$.condition.filter.start: expected primitive value, found array, \
         $.condition.filter.end: expected primitive value, found object"
    );
}

#[test]
fn test_rule_without_field() {
    let err = parse(r#"{ "condition": { "type": "equal", "filter": 1 } }"#).unwrap_err();
    assert_eq!(
        err.to_string(),
        "$: 'field' is required for a rule with a condition or includes"
    );
}

#[test]
fn test_wrong_container_types() {
    let err = parse(r#"{ "rules": {}, "glue": "and" }"#).unwrap_err();
    assert_eq!(err.to_string(), "$.rules: expected array, found object");

    let err = parse(r#"{ "field": "a", "includes": "x", "condition": 3 }"#).unwrap_err();
    assert_eq!(
        err.to_string(),
        "$.includes: expected array, found string, $.condition: expected object, found number"
    );
}

#[test]
fn test_nested_issue_paths_include_rules() {
    let input = r#"
        {
            "rules": [
                { "field": "a" },
                { "glue": "or", "rules": [ { "field": "b", "condition": { "type": 1 } } ] }
            ]
        }
    "#;

    let err = parse(input).unwrap_err();
    assert_eq!(
        err.to_string(),
        "$.rules[1].rules[0].condition.type: expected string, found number"
    );
}
