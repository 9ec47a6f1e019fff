use super::*;
use proptest::prelude::*;

fn error_map(pairs: &[(&str, &[&str])]) -> ErrorMap {
    pairs
        .iter()
        .map(|(property, messages)| {
            (
                (*property).to_string(),
                messages.iter().map(|m| (*m).to_string()).collect(),
            )
        })
        .collect()
}

fn store(pairs: &[(&str, &[&str])]) -> ErrorStore {
    error_map(pairs).into_iter().collect()
}

#[test]
fn untouched_property_is_neither_failing_nor_validated() {
    let store = ErrorStore::new();

    assert!(!store.has(Some("name")));
    assert!(!store.has_validated("name"));
    assert!(store.property("name").is_empty());
    assert_eq!(store.property_first("name"), "");
    assert!(!store.has(None));
}

#[test]
fn clearing_a_property_marks_it_validated() {
    let mut store = ErrorStore::new();
    store.add("name", "Name is required.");

    store.clear(Some("name"));

    assert!(store.has_validated("name"));
    assert!(!store.has(Some("name")));
    assert_eq!(store.len(), 1);
}

#[test]
fn clearing_an_unseen_property_marks_it_validated() {
    let mut store = ErrorStore::new();

    store.clear(Some("email"));

    assert!(store.has_validated("email"));
    assert!(store.get().is_empty());
}

#[test]
fn clearing_everything_forgets_validated_properties() {
    let mut store = store(&[("name", &["x"]), ("email", &[])]);

    store.clear(None);

    assert!(store.is_empty());
    assert!(!store.has_validated("email"));
}

#[test]
fn added_messages_keep_insertion_order() {
    let mut store = ErrorStore::new();
    store.add("name", "Name is required.");
    store.add("name", "Name must contain only word characters.");

    assert_eq!(
        store.property("name"),
        ["Name is required.", "Name must contain only word characters."]
    );
    assert_eq!(store.property_first("name"), "Name is required.");
}

#[test]
fn duplicate_messages_are_kept() {
    let mut store = ErrorStore::new();
    store.add("name", "x");
    store.add("name", "x");

    assert_eq!(store.property("name"), ["x", "x"]);
}

#[test]
fn set_replaces_instead_of_merging() {
    let mut store = ErrorStore::new();
    store.add("name", "old");

    store.set(error_map(&[("postal_code", &["The field is required"])]));

    assert!(!store.has(Some("name")));
    assert!(!store.has_validated("name"));
    assert_eq!(store.get(), error_map(&[("postal_code", &["The field is required"])]));
}

#[test]
fn set_with_repeated_property_keeps_first_position_and_last_messages() {
    let mut store = ErrorStore::new();
    store.set([("a", vec!["1"]), ("b", vec!["2"]), ("a", vec!["3"])]);

    assert_eq!(store.get(), error_map(&[("a", &["3"]), ("b", &["2"])]));
}

#[test]
fn get_skips_validated_properties() {
    let store = store(&[("name", &["x"]), ("email", &[]), ("city", &["y", "z"])]);

    assert_eq!(store.get(), error_map(&[("name", &["x"]), ("city", &["y", "z"])]));
    assert_eq!(
        store.get_first(),
        vec![
            ("name".to_string(), "x".to_string()),
            ("city".to_string(), "y".to_string()),
        ]
    );
}

#[test]
fn get_first_keeps_property_order() {
    let store = store(&[
        ("name", &["The field is required", "Invalid name"]),
        ("postal_code", &["The field is required", "Invalid postal code"]),
    ]);

    assert_eq!(
        store.get_first(),
        vec![
            ("name".to_string(), "The field is required".to_string()),
            ("postal_code".to_string(), "The field is required".to_string()),
        ]
    );
}

#[test]
fn summary_flattens_property_then_message_order() {
    let store = store(&[("a", &["x", "y"]), ("b", &["z"])]);

    assert_eq!(store.summary(&[]), ["x", "y", "z"]);
}

#[test]
fn summary_restricts_to_requested_properties() {
    let store = store(&[("a", &["x", "y"]), ("b", &["z"])]);

    assert_eq!(store.summary(&["b"]), ["z"]);
    assert!(store.summary(&["missing"]).is_empty());
}

#[test]
fn summary_first_takes_one_message_per_property() {
    let store = store(&[("a", &["x", "y"]), ("b", &["z", "w"])]);

    assert_eq!(store.summary_first(&[]), ["x", "z"]);
}

#[test]
fn summary_first_filters_before_reducing() {
    let store = store(&[("a", &["x", "y"]), ("b", &["z", "w"]), ("c", &[])]);

    assert_eq!(store.summary_first(&["b", "c"]), ["z"]);
}

#[test]
fn summary_of_empty_store_is_empty() {
    let store = ErrorStore::new();

    assert!(store.summary(&[]).is_empty());
    assert!(store.summary_first(&[]).is_empty());
}

#[test]
fn has_without_property_looks_at_every_property() {
    let mut store = store(&[("email", &[])]);
    assert!(!store.has(None));

    store.add("name", "x");
    assert!(store.has(None));
}

#[test]
fn iter_includes_validated_properties() {
    let store = store(&[("name", &["x"]), ("email", &[])]);
    let seen: Vec<_> = store.iter().map(|(property, _)| property).collect();

    assert_eq!(seen, ["name", "email"]);
}

#[test]
fn serde_round_trip_preserves_validated_state() {
    let store = store(&[("name", &["x"]), ("email", &[])]);

    let json = serde_json::to_string(&store).expect("serialize store");
    let decoded: ErrorStore = serde_json::from_str(&json).expect("deserialize store");

    assert_eq!(decoded, store);
    assert!(decoded.has_validated("email"));
}

#[test]
fn serde_shape_is_an_ordered_entry_list() {
    let store = store(&[("name", &["x"])]);

    let json = serde_json::to_value(&store).expect("serialize store");

    assert_eq!(
        json,
        serde_json::json!([{ "property": "name", "messages": ["x"] }])
    );
}

///
/// PROPERTIES
///

fn arb_property() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("name".to_string()),
        Just("email".to_string()),
        Just("city".to_string()),
        Just("postal_code".to_string()),
    ]
}

fn arb_error_map() -> impl Strategy<Value = ErrorMap> {
    prop::collection::vec(
        (
            arb_property(),
            prop::collection::vec("[a-z ]{1,12}", 0..4),
        ),
        0..6,
    )
}

proptest! {
    #[test]
    fn set_then_get_yields_non_empty_entries(map in arb_error_map()) {
        let mut store = ErrorStore::new();
        store.set(map.clone());

        for (property, messages) in store.get() {
            prop_assert!(!messages.is_empty());
            let last = map.iter().rev().find(|(p, _)| *p == property).map(|(_, m)| m);
            prop_assert_eq!(Some(&messages), last);
        }
    }

    #[test]
    fn get_round_trips_through_set(map in arb_error_map()) {
        let original: ErrorStore = map.into_iter().collect();

        let mut copy = ErrorStore::new();
        copy.set(original.get());

        prop_assert_eq!(copy.get(), original.get());
        prop_assert_eq!(copy.summary(&[]), original.summary(&[]));
    }

    #[test]
    fn summary_first_has_one_message_per_failing_property(map in arb_error_map()) {
        let store: ErrorStore = map.into_iter().collect();

        prop_assert_eq!(store.summary_first(&[]).len(), store.get().len());
    }

    #[test]
    fn has_agrees_with_get(map in arb_error_map(), property in arb_property()) {
        let store: ErrorStore = map.into_iter().collect();
        let listed = store.get().iter().any(|(p, _)| *p == property);

        prop_assert_eq!(store.has(Some(property.as_str())), listed);
        prop_assert!(!(store.has(Some(property.as_str())) && store.has_validated(&property)));
    }
}
