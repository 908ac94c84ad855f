//! Behavioural tests for the deep merge algorithm.
//!
//! Documents are written as JSON text and compared after serialization, so key
//! order is part of every assertion.

use deepmerge_core::{merge, merge_all, merge_into, merge_json, merge_objects, MergeError};
use serde_json::{json, Value};

/// Helper: merge two JSON documents given as text and return compact JSON.
fn merged(original: &str, update: &str) -> String {
    merge_json(original, update).expect("merge should succeed")
}

// ============================================================================
// 1. Core scenarios
// ============================================================================

#[test]
fn combines_both_objects_where_no_conflicts_exist() {
    assert_eq!(
        merged(r#"{"name":"Foo"}"#, r#"{"country":"JP"}"#),
        r#"{"name":"Foo","country":"JP"}"#
    );
}

#[test]
fn prefers_the_updated_value_when_scalars_collide() {
    assert_eq!(
        merged(r#"{"country":"US"}"#, r#"{"country":"JP"}"#),
        r#"{"country":"JP"}"#
    );
}

#[test]
fn ignores_the_updated_value_when_it_is_null() {
    assert_eq!(
        merged(r#"{"name":"Foo"}"#, r#"{"name":null}"#),
        r#"{"name":"Foo"}"#
    );
}

#[test]
fn extends_arrays() {
    assert_eq!(
        merged(r#"{"countries":["US"]}"#, r#"{"countries":["JP"]}"#),
        r#"{"countries":["US","JP"]}"#
    );
}

#[test]
fn deep_merges_nested_objects() {
    assert_eq!(
        merged(
            r#"{"person":{"name":"Foo"}}"#,
            r#"{"person":{"country":"JP"}}"#
        ),
        r#"{"person":{"name":"Foo","country":"JP"}}"#
    );
}

#[test]
fn string_vs_number_is_a_type_conflict() {
    let err = merge_json(r#"{"value":"zero"}"#, r#"{"value":0}"#).unwrap_err();
    assert!(
        matches!(err, MergeError::TypeConflict { .. }),
        "expected TypeConflict, got {err:?}"
    );
}

// ============================================================================
// 2. Scalars and nulls
// ============================================================================

#[test]
fn same_kind_scalars_are_replaced() {
    for (a, b) in [
        (json!(0), json!(1)),
        (json!(1.5), json!(-2)),
        (json!("zero"), json!("one")),
        (json!(false), json!(true)),
    ] {
        let result = merge(&json!({ "k": a }), &json!({ "k": b.clone() })).unwrap();
        assert_eq!(result, json!({ "k": b }));
    }
}

#[test]
fn null_update_keeps_every_kind_of_original() {
    for value in [
        json!("zero"),
        json!(0),
        json!(false),
        json!([1, 2]),
        json!({"a": 1}),
        json!(null),
    ] {
        let result = merge(&json!({ "k": value.clone() }), &json!({ "k": null })).unwrap();
        assert_eq!(result, json!({ "k": value }));
    }
}

#[test]
fn null_original_is_filled_by_any_update() {
    for value in [
        json!("zero"),
        json!(0),
        json!(true),
        json!([1]),
        json!({"foo": "bar"}),
    ] {
        let result = merge(&json!({ "k": null }), &json!({ "k": value.clone() })).unwrap();
        assert_eq!(result, json!({ "k": value }));
    }
}

#[test]
fn null_for_new_key_is_adopted() {
    assert_eq!(
        merged(r#"{"a":1}"#, r#"{"b":null}"#),
        r#"{"a":1,"b":null}"#
    );
}

// ============================================================================
// 3. Arrays
// ============================================================================

#[test]
fn arrays_concatenate_without_dedup() {
    assert_eq!(
        merged(r#"{"xs":[1,2,2]}"#, r#"{"xs":[2,3]}"#),
        r#"{"xs":[1,2,2,2,3]}"#
    );
}

#[test]
fn empty_arrays_extend_trivially() {
    assert_eq!(merged(r#"{"xs":[]}"#, r#"{"xs":[1]}"#), r#"{"xs":[1]}"#);
    assert_eq!(merged(r#"{"xs":[1]}"#, r#"{"xs":[]}"#), r#"{"xs":[1]}"#);
}

#[test]
fn array_elements_are_not_merged_pairwise() {
    assert_eq!(
        merged(r#"{"xs":[{"a":1}]}"#, r#"{"xs":[{"b":2}]}"#),
        r#"{"xs":[{"a":1},{"b":2}]}"#
    );
}

#[test]
fn arrays_may_mix_element_kinds() {
    assert_eq!(
        merged(r#"{"xs":["a",1]}"#, r#"{"xs":[null,{"k":true}]}"#),
        r#"{"xs":["a",1,null,{"k":true}]}"#
    );
}

// ============================================================================
// 4. Objects and key order
// ============================================================================

#[test]
fn original_keys_keep_their_position_when_replaced() {
    assert_eq!(
        merged(r#"{"a":1,"b":2,"c":3}"#, r#"{"d":4,"b":20}"#),
        r#"{"a":1,"b":20,"c":3,"d":4}"#
    );
}

#[test]
fn new_keys_follow_update_order() {
    assert_eq!(
        merged(r#"{"m":0}"#, r#"{"z":1,"a":2,"k":3}"#),
        r#"{"m":0,"z":1,"a":2,"k":3}"#
    );
}

#[test]
fn three_levels_of_nesting() {
    let original = json!({"a": {"b": {"c": 1, "keep": true}, "x": [1]}});
    let update = json!({"a": {"b": {"c": 2, "new": "n"}, "x": [2]}});
    let result = merge(&original, &update).unwrap();
    assert_eq!(
        result,
        json!({"a": {"b": {"c": 2, "keep": true, "new": "n"}, "x": [1, 2]}})
    );
}

#[test]
fn recursive_merge_matches_merging_the_children() {
    let o1 = json!({"name": "Foo", "tags": ["a"], "n": 1});
    let o2 = json!({"tags": ["b"], "n": 2, "extra": {"z": null}});
    let whole = merge(&json!({ "k": o1.clone() }), &json!({ "k": o2.clone() })).unwrap();
    let inner = merge(&o1, &o2).unwrap();
    assert_eq!(whole, json!({ "k": inner }));
}

#[test]
fn empty_update_is_identity() {
    let original = json!({"a": [1], "b": {"c": null}});
    assert_eq!(merge(&original, &json!({})).unwrap(), original);
}

#[test]
fn empty_original_adopts_update() {
    let update = json!({"a": [1], "b": {"c": null}});
    assert_eq!(merge(&json!({}), &update).unwrap(), update);
}

// ============================================================================
// 5. Ownership: inputs are never mutated
// ============================================================================

#[test]
fn merge_does_not_mutate_inputs() {
    let original = json!({"xs": [1], "o": {"a": 1}, "s": "x"});
    let update = json!({"xs": [2], "o": {"b": 2}, "s": "y", "n": {"deep": [3]}});
    let original_before = original.clone();
    let update_before = update.clone();

    let mut result = merge(&original, &update).unwrap();

    assert_eq!(original, original_before);
    assert_eq!(update, update_before);

    // Mutating the result must not leak back into either input.
    result["n"]["deep"]
        .as_array_mut()
        .unwrap()
        .push(json!(99));
    result["o"]["a"] = json!("changed");
    assert_eq!(original, original_before);
    assert_eq!(update, update_before);
}

#[test]
fn merge_leaves_original_untouched_on_conflict() {
    let original = json!({"a": 1, "b": "x"});
    let before = original.clone();
    let result = merge(&original, &json!({"a": 2, "b": 3}));
    assert!(result.is_err());
    assert_eq!(original, before);
}

#[test]
fn merge_into_mutates_in_place() {
    let mut base = json!({"xs": [1], "o": {"a": 1}})
        .as_object()
        .cloned()
        .unwrap();
    let patch = json!({"xs": [2], "o": {"b": 2}}).as_object().cloned().unwrap();

    merge_into(&mut base, &patch).unwrap();

    assert_eq!(
        Value::Object(base),
        json!({"xs": [1, 2], "o": {"a": 1, "b": 2}})
    );
}

#[test]
fn merge_into_keeps_progress_made_before_a_conflict() {
    let mut base = json!({"first": 1, "second": "x"})
        .as_object()
        .cloned()
        .unwrap();
    let patch = json!({"first": 10, "second": 2, "third": 3})
        .as_object()
        .cloned()
        .unwrap();

    let err = merge_into(&mut base, &patch).unwrap_err();

    assert!(matches!(err, MergeError::TypeConflict { .. }));
    assert_eq!(base["first"], json!(10), "keys before the conflict are merged");
    assert_eq!(base["second"], json!("x"), "conflicting key is untouched");
    assert!(base.get("third").is_none(), "keys after the conflict are not visited");
}

#[test]
fn merge_objects_works_on_maps() {
    let a = json!({"a": 1}).as_object().cloned().unwrap();
    let b = json!({"b": 2}).as_object().cloned().unwrap();
    let result = merge_objects(&a, &b).unwrap();
    assert_eq!(Value::Object(result), json!({"a": 1, "b": 2}));
    assert_eq!(a.len(), 1);
}

// ============================================================================
// 6. Top-level precondition
// ============================================================================

#[test]
fn non_object_original_is_rejected() {
    let err = merge(&json!([1]), &json!({})).unwrap_err();
    match err {
        MergeError::NotAnObject { side, kind } => {
            assert_eq!(side, "original");
            assert_eq!(kind.to_string(), "array");
        }
        other => panic!("expected NotAnObject, got {other:?}"),
    }
}

#[test]
fn non_object_update_is_rejected() {
    let err = merge(&json!({}), &json!("text")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot merge update: expected an object, found string"
    );
}

#[test]
fn null_top_level_is_not_an_object() {
    assert!(matches!(
        merge(&json!(null), &json!({})),
        Err(MergeError::NotAnObject { .. })
    ));
}

// ============================================================================
// 7. Layered merges
// ============================================================================

#[test]
fn merge_all_folds_left_to_right() {
    let a = json!({"port": 80, "hosts": ["a"], "name": "base"});
    let b = json!({"hosts": ["b"], "name": null});
    let c = json!({"port": 8080, "tls": {"enabled": true}});

    let folded = merge_all([&a, &b, &c]).unwrap();
    let stepwise = merge(&merge(&a, &b).unwrap(), &c).unwrap();

    assert_eq!(folded, stepwise);
    assert_eq!(
        folded,
        json!({"port": 8080, "hosts": ["a", "b"], "name": "base", "tls": {"enabled": true}})
    );
}

#[test]
fn merge_all_of_nothing_is_empty_object() {
    let none: [&Value; 0] = [];
    assert_eq!(merge_all(none).unwrap(), json!({}));
}

#[test]
fn merge_all_names_the_bad_layer() {
    let err = merge_all([&json!({}), &json!({}), &json!(3)]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot merge layer 2: expected an object, found number"
    );
}

// ============================================================================
// 8. Text convenience layer
// ============================================================================

#[test]
fn merge_json_rejects_invalid_json() {
    let err = merge_json("{not json", "{}").unwrap_err();
    assert!(matches!(err, MergeError::JsonParse(_)), "got {err:?}");
    let err = merge_json("{}", "[1,").unwrap_err();
    assert!(err.to_string().starts_with("JSON parse error"));
}

#[test]
fn merge_json_accepts_whitespace_and_emits_compact_output() {
    let out = merged("{\n  \"a\": [ 1 ]\n}\n", "  { \"a\" : [2] }  ");
    assert_eq!(out, r#"{"a":[1,2]}"#);
}
