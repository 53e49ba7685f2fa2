mod common;

use common::{assert_rejects, parse_json};
use serde_json::json;

#[test]
fn simple_typedefs() {
    let ast = parse_json(
        "
        typedef string Test
        typedef Test Other;
        typedef i32 Third,
        ",
    );
    assert_eq!(
        ast,
        json!({ "typedef": {
            "Test": { "type": "string" },
            "Other": { "type": "Test" },
            "Third": { "type": "i32" }
        } })
    );
}

#[test]
fn container_typedefs() {
    let ast = parse_json(
        "
        typedef map<string, string> M
        typedef set<string> S
        typedef list<string> L
        typedef list<set<map<string, string>>> Nested
        ",
    );
    let typedefs = &ast["typedef"];
    assert_eq!(
        typedefs["M"]["type"],
        json!({ "name": "map", "keyType": "string", "valueType": "string" })
    );
    assert_eq!(typedefs["S"]["type"], json!({ "name": "set", "valueType": "string" }));
    assert_eq!(typedefs["L"]["type"], json!({ "name": "list", "valueType": "string" }));
    assert_eq!(
        typedefs["Nested"]["type"]["valueType"]["valueType"]["keyType"],
        json!("string")
    );
}

#[test]
fn rejects_unclosed_containers() {
    for source in [
        "typedef map<string, string Test;",
        "typedef set<string Test;",
        "typedef list<string Test;",
        "typedef list<set<map<string, string>> Test;",
    ] {
        assert_rejects(source);
    }
}
