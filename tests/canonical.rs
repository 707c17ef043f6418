//! Integration tests for the ten concrete canonicalization scenarios.

use glyph::Value;

#[test]
fn scenario_map_single_key() {
    let mut v = Value::map();
    v.map_set("action", Value::str("search"));
    assert_eq!(v.canonicalize(), "{action=search}");
}

#[test]
fn scenario_map_sorted_keys() {
    let mut v = Value::map();
    v.map_set("b", Value::int(2));
    v.map_set("a", Value::int(1));
    v.map_set("c", Value::int(3));
    assert_eq!(v.canonicalize(), "{a=1 b=2 c=3}");
}

#[test]
fn scenario_quoted_string_with_space() {
    assert_eq!(Value::str("hello world").canonicalize(), "\"hello world\"");
}

#[test]
fn scenario_reserved_word_string_is_quoted() {
    assert_eq!(Value::str("t").canonicalize(), "\"t\"");
}

#[test]
fn scenario_whole_number_float_collapses() {
    assert_eq!(Value::float(42.0).canonicalize(), "42");
}

#[test]
fn scenario_id_without_prefix() {
    assert_eq!(Value::id(None, "user123").canonicalize(), "^user123");
}

#[test]
fn scenario_tabular_three_homogeneous_rows() {
    let mut list = Value::list();
    for i in 0..3i64 {
        let mut row = Value::map();
        row.map_set("x", Value::int(i));
        row.map_set("y", Value::int(2 * i));
        list.list_push(row);
    }
    assert_eq!(
        list.canonicalize(),
        "@tab _ rows=3 cols=2 [x y]\n|0|0|\n|1|2|\n|2|4|\n@end"
    );
}

#[test]
fn scenario_sparse_keys_fall_back_to_list() {
    let mut list = Value::list();
    for (k, n) in [("a", 1), ("b", 2), ("c", 3)] {
        let mut row = Value::map();
        row.map_set(k, Value::int(n));
        list.list_push(row);
    }
    assert_eq!(list.canonicalize(), "[{a=1} {b=2} {c=3}]");
}

#[test]
fn scenario_empty_objects_no_tabular() {
    let mut list = Value::list();
    for _ in 0..3 {
        list.list_push(Value::map());
    }
    assert_eq!(list.canonicalize(), "[{} {} {}]");
}

#[test]
fn scenario_sum_with_value() {
    assert_eq!(
        Value::sum("ok", Some(Value::int(1))).canonicalize(),
        "ok(1)"
    );
}

#[test]
fn scenario_bareword_reversibility() {
    // A string passing the bareword test canonicalizes to its own byte
    // sequence.
    for s in ["hello", "user_name", "a.b/c@d:e", "path/to/thing"] {
        assert_eq!(Value::str(s).canonicalize(), s);
    }
}

#[test]
fn scenario_fingerprint_equals_canonical_form() {
    let mut v = Value::map();
    v.map_set("a", Value::int(1));
    assert_eq!(v.fingerprint(), v.canonicalize());
}

#[test]
fn scenario_json_partial_roundtrip() {
    let mut v = Value::map();
    v.map_set("name", Value::str("ada"));
    v.map_set("tags", {
        let mut l = Value::list();
        l.list_push(Value::int(1));
        l.list_push(Value::bool(true));
        l.list_push(Value::null());
        l
    });
    let json = v.to_json();
    let back = Value::from_json(&json).expect("valid JSON round-trips");
    assert_eq!(v, back);
}
