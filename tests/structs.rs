mod common;

use common::{assert_rejects, parse_json};
use serde_json::json;

#[test]
fn simple_struct() {
    let ast = parse_json(
        "
        struct Test {
          1: i16 test1
        }
        ",
    );
    assert_eq!(
        ast,
        json!({ "struct": { "Test": [{ "id": 1, "type": "i16", "name": "test1" }] } })
    );
}

#[test]
fn field_options_are_kept() {
    let ast = parse_json(
        "
        struct Test {
          1: required i16 test1
          2: i16 test2
          3: optional i16 test3
        }
        ",
    );
    assert_eq!(
        ast,
        json!({ "struct": { "Test": [
            { "id": 1, "type": "i16", "name": "test1", "option": "required" },
            { "id": 2, "type": "i16", "name": "test2" },
            { "id": 3, "type": "i16", "name": "test3", "option": "optional" }
        ] } })
    );
}

#[test]
fn default_values() {
    let ast = parse_json(
        "
        struct Test {
          1: string test1 = 'test'
          2: i16 test2
        }
        ",
    );
    assert_eq!(
        ast,
        json!({ "struct": { "Test": [
            { "id": 1, "type": "string", "name": "test1", "defaultValue": "test" },
            { "id": 2, "type": "i16", "name": "test2" }
        ] } })
    );
}

#[test]
fn field_id_forms() {
    let ast = parse_json(
        "
        struct Test {
          0x01: string hex
          -1: string negative
          +2: string positive
          string missing
        }
        ",
    );
    assert_eq!(
        ast["struct"]["Test"],
        json!([
            { "id": 1, "type": "string", "name": "hex" },
            { "id": -1, "type": "string", "name": "negative" },
            { "id": 2, "type": "string", "name": "positive" },
            { "type": "string", "name": "missing" }
        ])
    );
}

#[test]
fn field_without_id_but_with_option() {
    let ast = parse_json("struct Test { required string test1 }");
    assert_eq!(
        ast["struct"]["Test"][0],
        json!({ "type": "string", "name": "test1", "option": "required" })
    );
}

#[test]
fn separators_are_interchangeable() {
    let expected = json!([
        { "id": 1, "type": "string", "name": "test1" },
        { "id": 2, "type": "string", "name": "test2", "defaultValue": "test" }
    ]);
    for source in [
        "struct Test { 1: string test1, 2: string test2 = 'test', }",
        "struct Test { 1: string test1; 2: string test2 = 'test'; }",
        "struct Test { 1: string test1, 2: string test2 = 'test'; }",
    ] {
        assert_eq!(parse_json(source)["struct"]["Test"], expected, "{source}");
    }
}

#[test]
fn container_fields_and_defaults() {
    let ast = parse_json(
        "
        struct Test {
          1: map<i16, string> m = { 1: 'a', 2: 'b' }
          2: set<i16> s = [1,2]
          3: list<i16> l = [1,2]
        }
        ",
    );
    assert_eq!(
        ast["struct"]["Test"],
        json!([
            {
                "id": 1,
                "type": { "name": "map", "keyType": "i16", "valueType": "string" },
                "name": "m",
                "defaultValue": [{ "key": 1, "value": "a" }, { "key": 2, "value": "b" }]
            },
            { "id": 2, "type": { "name": "set", "valueType": "i16" }, "name": "s", "defaultValue": [1, 2] },
            { "id": 3, "type": { "name": "list", "valueType": "i16" }, "name": "l", "defaultValue": [1, 2] }
        ])
    );
}

#[test]
fn identifiers_may_contain_dots_underscores_and_digits() {
    let ast = parse_json("struct Te.st_123 { 1: string _te.st_1 }");
    assert_eq!(
        ast,
        json!({ "struct": { "Te.st_123": [{ "id": 1, "type": "string", "name": "_te.st_1" }] } })
    );
}

#[test]
fn rejects_malformed_fields() {
    for source in [
        "struct Test { 1: test }",
        "struct Test { 1: required test }",
        "struct Test { 1: test = 'test' }",
        "struct Test { 1: string test = 'test }",
        "struct Test { 1: string test = 'test\" }",
        "struct Test { test: string test }",
        "struct Test { 1e2: string test }",
        "struct Test { 1.2: string test }",
        "struct Test { 1: failure string test }",
        "struct Test { 1: string test = }",
    ] {
        assert_rejects(source);
    }
}

#[test]
fn rejects_mismatched_containers() {
    for source in [
        "struct Test { 1: map<i16> test }",
        "struct Test { 1: map<i16, string> test = [1,2] }",
        "struct Test { 1: set<i16, string> test = [1,2] }",
        "struct Test { 1: set<i16> test = { 1: 'a', 2: 'b' } }",
        "struct Test { 1: list<i16, string> test = [1,2] }",
        "struct Test { 1: list<i16> test = { 1: 'a', 2: 'b' } }",
    ] {
        assert_rejects(source);
    }
}
