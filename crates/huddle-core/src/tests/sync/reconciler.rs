use crate::{CoreError, Reconciler};

fn store_with(entries: &[(&str, &str)]) -> Reconciler<String, String> {
    let mut store = Reconciler::new();
    store.load(
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string())),
    );
    store
}

#[test]
fn test_tentative_value_is_visible_before_resolution() {
    let mut store = store_with(&[("t1", "TODO")]);

    let correlation = store
        .begin("t1".to_string(), "IN_PROGRESS".to_string())
        .unwrap();

    assert_eq!(store.get(&"t1".to_string()).unwrap(), "IN_PROGRESS");
    assert!(store.is_pending(&"t1".to_string()));

    store.commit(correlation, "IN_PROGRESS".to_string()).unwrap();
    assert_eq!(store.get(&"t1".to_string()).unwrap(), "IN_PROGRESS");
    assert!(!store.is_pending(&"t1".to_string()));
}

#[test]
fn test_revert_restores_the_snapshot() {
    let mut store = store_with(&[("t1", "TODO")]);

    let correlation = store.begin("t1".to_string(), "DONE".to_string()).unwrap();
    assert_eq!(store.get(&"t1".to_string()).unwrap(), "DONE");

    store.revert(correlation).unwrap();
    assert_eq!(store.get(&"t1".to_string()).unwrap(), "TODO");
    assert!(!store.is_pending(&"t1".to_string()));
}

#[test]
fn test_reverting_a_tentative_creation_removes_the_entity() {
    let mut store = store_with(&[]);

    let correlation = store.begin("t9".to_string(), "TODO".to_string()).unwrap();
    assert_eq!(store.get(&"t9".to_string()).unwrap(), "TODO");

    store.revert(correlation).unwrap();
    assert_eq!(store.get(&"t9".to_string()), None);
}

#[test]
fn test_second_mutation_on_same_key_is_rejected_while_in_flight() {
    let mut store = store_with(&[("t1", "TODO")]);

    let first = store
        .begin("t1".to_string(), "IN_PROGRESS".to_string())
        .unwrap();
    let second = store.begin("t1".to_string(), "DONE".to_string());

    assert!(matches!(second, Err(CoreError::MutationInFlight { .. })));

    // The first mutation is unaffected and still resolvable.
    store.commit(first, "IN_PROGRESS".to_string()).unwrap();
    assert_eq!(store.get(&"t1".to_string()).unwrap(), "IN_PROGRESS");
}

#[test]
fn test_mutations_on_distinct_keys_run_concurrently() {
    let mut store = store_with(&[("t1", "TODO"), ("t2", "TODO")]);

    let c1 = store.begin("t1".to_string(), "DONE".to_string()).unwrap();
    let c2 = store
        .begin("t2".to_string(), "IN_PROGRESS".to_string())
        .unwrap();

    store.revert(c1).unwrap();
    store.commit(c2, "IN_PROGRESS".to_string()).unwrap();

    assert_eq!(store.get(&"t1".to_string()).unwrap(), "TODO");
    assert_eq!(store.get(&"t2".to_string()).unwrap(), "IN_PROGRESS");
}

#[test]
fn test_correlation_id_resolves_at_most_once() {
    let mut store = store_with(&[("t1", "TODO")]);

    let correlation = store.begin("t1".to_string(), "DONE".to_string()).unwrap();
    store.commit(correlation, "DONE".to_string()).unwrap();

    let again = store.revert(correlation);
    assert!(matches!(again, Err(CoreError::UnknownCorrelation { .. })));
}

#[test]
fn test_tentative_removal_hides_the_entity_until_resolved() {
    let mut store = store_with(&[("t1", "TODO")]);

    let correlation = store.begin_removal("t1".to_string()).unwrap();
    assert_eq!(store.get(&"t1".to_string()), None);

    store.commit_removed(correlation).unwrap();
    assert_eq!(store.get(&"t1".to_string()), None);
    assert!(!store.is_pending(&"t1".to_string()));
}

#[test]
fn test_reverted_removal_brings_the_entity_back() {
    let mut store = store_with(&[("t1", "TODO")]);

    let correlation = store.begin_removal("t1".to_string()).unwrap();
    store.revert(correlation).unwrap();

    assert_eq!(store.get(&"t1".to_string()).unwrap(), "TODO");
}

#[test]
fn test_load_refreshes_confirmed_state_but_keeps_pending_views() {
    let mut store = store_with(&[("t1", "TODO")]);
    let correlation = store.begin("t1".to_string(), "DONE".to_string()).unwrap();

    store.load([("t1".to_string(), "IN_PROGRESS".to_string())]);

    // The tentative view still wins until the mutation resolves.
    assert_eq!(store.get(&"t1".to_string()).unwrap(), "DONE");
    store.commit(correlation, "DONE".to_string()).unwrap();
    assert_eq!(store.get(&"t1".to_string()).unwrap(), "DONE");
}

#[test]
fn test_iter_overlays_tentative_state() {
    let mut store = store_with(&[("t1", "TODO"), ("t2", "TODO")]);

    let _removal = store.begin_removal("t1".to_string()).unwrap();
    let _creation = store.begin("t3".to_string(), "BACKLOG".to_string()).unwrap();

    let mut visible: Vec<(String, String)> = store
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    visible.sort();

    assert_eq!(
        visible,
        vec![
            ("t2".to_string(), "TODO".to_string()),
            ("t3".to_string(), "BACKLOG".to_string()),
        ]
    );
}
