mod common;

use common::{assert_rejects, parse_json};
use serde_json::json;

#[test]
fn simple_enum() {
    let ast = parse_json("enum Test { test = 1 }");
    assert_eq!(
        ast,
        json!({ "enum": { "Test": { "items": [{ "name": "test", "value": 1 }] } } })
    );
}

#[test]
fn items_without_values_omit_the_key() {
    let ast = parse_json(
        "
        enum Test {
          test1 = 1
          test2
          test3 = 0x03
        }
        ",
    );
    assert_eq!(
        ast["enum"]["Test"]["items"],
        json!([
            { "name": "test1", "value": 1 },
            { "name": "test2" },
            { "name": "test3", "value": 3 }
        ])
    );
}

#[test]
fn separators_are_interchangeable() {
    let expected = json!([
        { "name": "test1", "value": 1 },
        { "name": "test2", "value": 2 }
    ]);
    for source in [
        "enum Test { test1 = 1, test2 = 2, }",
        "enum Test { test1 = 1; test2 = 2; }",
        "enum Test { test1 = 1; test2 = 2, }",
    ] {
        assert_eq!(parse_json(source)["enum"]["Test"]["items"], expected, "{source}");
    }
}

#[test]
fn identifiers() {
    let ast = parse_json("enum _Te.st_1 { _te.st_1 = -1 }");
    assert_eq!(
        ast,
        json!({ "enum": { "_Te.st_1": { "items": [{ "name": "_te.st_1", "value": -1 }] } } })
    );
}

#[test]
fn empty_enum() {
    assert_eq!(parse_json("enum Empty {}"), json!({ "enum": { "Empty": { "items": [] } } }));
}

#[test]
fn rejects_invalid_values() {
    for source in [
        "enum Test { test1 = }",
        "enum Test { test1 = 'one' }",
        "enum Test { test1 = 1.5 }",
        "enum Test { test1 = 1e2 }",
        "enum Test { test1 = [1] }",
    ] {
        assert_rejects(source);
    }
}
