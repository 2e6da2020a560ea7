use crate::translate;
use filter_syntax::parse;
use model::SqlFragment;
use std::collections::HashSet;
use translator::Translator;

const DOCUMENTS: &[&str] = &[
    "{}",
    r#"{ "field": "a", "condition": { "type": "equal", "filter": 1 } }"#,
    r#"{ "field": "a", "condition": { "type": "between", "filter": { "start": 1 } } }"#,
    r#"{ "field": "a", "includes": [1, 2, 3] }"#,
    r#"{ "glue": "or", "rules": [{ "field": "a", "condition": { "type": "less", "filter": 1 } }, { "field": "b", "condition": { "type": "greater", "filter": "abc" } }] }"#,
    r#"
    {
        "glue": "and",
        "rules": [
            { "field": "a", "condition": { "type": "", "filter": { "start": 1, "end": 2 } } },
            { "field": "b", "condition": { "type": "notBetween", "filter": { "end": 5 } } },
            {
                "glue": "or",
                "rules": [
                    { "field": "c", "includes": ["x", "y", "z"] },
                    { "field": "d" },
                    { "field": "e", "condition": { "type": "contains", "filter": "q" } },
                    { "glue": "and", "rules": [
                        { "field": "f", "condition": { "type": "between", "filter": { "start": 0, "end": 10 } } },
                        { "field": "g", "condition": { "type": "notEndsWith", "filter": "." } }
                    ] }
                ]
            },
            { "field": "h", "condition": { "type": "greaterOrEqual", "filter": 2.5 } }
        ]
    }
    "#,
];

/// Every `@p<N>` occurrence in `sql`, in textual order.
fn placeholders(sql: &str) -> Vec<String> {
    let mut found = Vec::new();
    let mut rest = sql;
    while let Some(pos) = rest.find("@p") {
        let digits = rest[pos + 2..]
            .chars()
            .take_while(char::is_ascii_digit)
            .collect::<String>();
        if !digits.is_empty() {
            found.push(format!("@p{digits}"));
        }
        rest = &rest[pos + 2 + digits.len()..];
    }
    found
}

fn index_of(name: &str) -> usize {
    name.trim_start_matches("@p").parse().unwrap()
}

#[test]
fn test_placeholders_match_bound_values() {
    for doc in DOCUMENTS {
        let fragment = translate(doc);
        let in_sql = placeholders(&fragment.sql)
            .into_iter()
            .collect::<HashSet<_>>();
        let bound = fragment.values.keys().cloned().collect::<HashSet<_>>();
        assert_eq!(in_sql, bound, "document {doc}");
    }
}

#[test]
fn test_indices_increase_left_to_right() {
    for doc in DOCUMENTS {
        let fragment = translate(doc);
        let indices = placeholders(&fragment.sql)
            .iter()
            .map(|p| index_of(p))
            .collect::<Vec<_>>();
        assert!(
            indices.windows(2).all(|w| w[0] < w[1]),
            "indices out of order in {}",
            fragment.sql
        );

        let bound = fragment.values.keys().map(|k| index_of(k)).collect::<Vec<_>>();
        assert!(bound.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn test_complex_document() {
    let fragment = translate(DOCUMENTS[5]);
    assert_eq!(
        fragment.sql,
        "( b > @p3 AND ( c IN (@p4,@p5,@p6) OR CHARINDEX(@p7, e) > 0 OR \
         ( f > @p8 AND f < @p9 AND g NOT LIKE CONCAT('%', @p10) ) ) AND h >= @p11 )"
    );
    assert_eq!(fragment.values.len(), 9);
}

#[test]
fn test_independent_translations_do_not_share_counters() {
    let translator = Translator::default();
    let tree = parse(DOCUMENTS[5]).unwrap().unwrap();

    let results = std::thread::scope(|scope| {
        let handles = (0..4)
            .map(|_| scope.spawn(|| translator.translate(&tree).unwrap()))
            .collect::<Vec<_>>();
        handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect::<Vec<SqlFragment>>()
    });

    for fragment in &results {
        assert_eq!(fragment, &results[0]);
    }
    assert_eq!(translator.translate(&tree).unwrap(), results[0]);
}
