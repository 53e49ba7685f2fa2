mod common;

use common::{assert_rejects, parse_json};
use serde_json::json;

#[test]
fn simple_const() {
    let ast = parse_json("const string test = 'hello world'");
    assert_eq!(
        ast,
        json!({ "const": { "test": { "type": "string", "value": "hello world" } } })
    );
}

#[test]
fn numeric_forms() {
    let ast = parse_json(
        "
        const i32 plain = 123
        const i16 hexSmall = 0x7fff
        const i32 hexLarge = 0x7fffffff
        const i16 expSmall = -3e4
        const i32 expLarge = 2.147483647e9
        const double ratio = 1.5
        ",
    );
    let value = |name: &str| ast["const"][name]["value"].clone();
    assert_eq!(value("plain"), json!(123));
    assert_eq!(value("hexSmall"), json!(32767));
    assert_eq!(value("hexLarge"), json!(2147483647));
    assert_eq!(value("expSmall"), json!(-30000));
    assert_eq!(value("expLarge"), json!(2147483647));
    assert_eq!(value("ratio"), json!(1.5));
}

#[test]
fn wide_hex_values() {
    let ast = parse_json(
        "
        const i64 allOnes = 0xFFFFFFFFFFFFFFFF
        const i64 lowest = -0x8000000000000000
        const i64 next = 1
        ",
    );
    let value = |name: &str| ast["const"][name]["value"].clone();
    assert_eq!(value("allOnes"), json!(18446744073709551615u64));
    assert_eq!(value("lowest"), json!(i64::MIN));
    assert_eq!(value("next"), json!(1));
}

#[test]
fn booleans_and_quotes() {
    let ast = parse_json(
        r#"
        const bool yes = true
        const bool no = false
        const string double = "hello world"
        const string nested = 'te"st'
        "#,
    );
    assert_eq!(ast["const"]["yes"]["value"], json!(true));
    assert_eq!(ast["const"]["no"]["value"], json!(false));
    assert_eq!(ast["const"]["double"]["value"], json!("hello world"));
    assert_eq!(ast["const"]["nested"]["value"], json!("te\"st"));
}

#[test]
fn trailing_separators() {
    for source in ["const i32 test = 1,", "const i32 test = 1;"] {
        assert_eq!(
            parse_json(source),
            json!({ "const": { "test": { "type": "i32", "value": 1 } } })
        );
    }
}

#[test]
fn map_values() {
    let expected = json!({ "const": { "test": {
        "type": { "name": "map", "keyType": "i32", "valueType": "string" },
        "value": [
            { "key": 1, "value": "a" },
            { "key": 2, "value": "b" },
            { "key": 3, "value": "c" }
        ]
    } } });
    assert_eq!(
        parse_json("const map<i32, string> test = { 1: 'a', 2: 'b', 3: 'c' }"),
        expected
    );
    assert_eq!(
        parse_json("const map<i32, string> test = { 1: 'a'; 2: 'b'; 3: 'c' }"),
        expected
    );
}

#[test]
fn set_and_list_values() {
    assert_eq!(
        parse_json("const set<i32> test = [ 1, 2, 3 ]"),
        json!({ "const": { "test": { "type": { "name": "set", "valueType": "i32" }, "value": [1, 2, 3] } } })
    );
    assert_eq!(
        parse_json("const list<i32> test = [ 1; 2; 3 ]"),
        json!({ "const": { "test": { "type": { "name": "list", "valueType": "i32" }, "value": [1, 2, 3] } } })
    );
}

#[test]
fn references_to_other_constants() {
    let ast = parse_json("const Color favourite = Color.RED");
    assert_eq!(ast["const"]["favourite"]["value"], json!("Color.RED"));
}

#[test]
fn rejects_invalid_consts() {
    for source in [
        "const string test",
        "const string test = \"hello world'",
        "const map<i32> test = { 1: 'a', 2: 'b', 3: 'c' }",
        "const map<i32, string> test = [ 1, 2, 3]",
        "const set<i32, string> test = [ 1, 2, 3 ]",
        "const set<i32> test = { 1: 'a', 2: 'b', 3: 'c' }",
        "const list<i32, string> test = [ 1, 2, 3 ]",
        "const list<i32> test = { 1: 'a', 2: 'b', 3: 'c' }",
    ] {
        assert_rejects(source);
    }
}
