#![cfg(feature = "shared-table")]

use std::thread;

use strata_router::{RouteTable, SharedRouteTable, TableError};

fn table(routes: &[(&str, u32)]) -> RouteTable<u32> {
    RouteTable::new(
        routes
            .iter()
            .map(|(template, data)| (template.to_string(), *data))
            .collect(),
    )
    .unwrap()
}

#[test]
fn dispatches_first_match_in_priority_order() {
    let table = table(&[("/post/[id]", 2), ("/post/about", 1), ("/[...rest]", 3)]);

    let templates: Vec<&str> = table.templates().collect();
    assert_eq!(templates, vec!["/post/about", "/post/[id]", "/[...rest]"]);
    assert_eq!(table.len(), 3);

    let hit = table.find("/post/about").unwrap().unwrap();
    assert_eq!(*hit.data, 1);
    assert_eq!(hit.template, "/post/about");
    assert!(hit.params.is_empty());

    let hit = table.find("/post/xyz").unwrap().unwrap();
    assert_eq!(*hit.data, 2);
    assert_eq!(hit.params.get("id"), Some("xyz"));

    let hit = table.find("/a/b").unwrap().unwrap();
    assert_eq!(*hit.data, 3);
    assert_eq!(hit.params.get("rest"), Some("a/b"));

    assert!(table.find("").unwrap().is_none());
}

#[test]
fn build_errors_surface_conflicts() {
    let err = RouteTable::new(vec![("/[a]/x".to_string(), 0), ("/[b]/y".to_string(), 0)])
        .unwrap_err();
    assert!(matches!(err, TableError::Sort(_)));

    let err = RouteTable::new(vec![("/[id]/[id]".to_string(), 0)]).unwrap_err();
    assert!(matches!(err, TableError::Sort(_)));
}

#[test]
fn decode_errors_pass_through() {
    let table = table(&[("/blog/[post]", 1)]);
    assert!(table.find("/blog/%ff").is_err());
}

#[test]
fn swaps_whole_table_atomically() {
    let shared = SharedRouteTable::new(table(&[("/old", 1)]));

    let before = shared.snapshot();
    assert!(before.find("/old").unwrap().is_some());

    shared.store(table(&[("/new", 2)]));

    assert!(shared.load().find("/old").unwrap().is_none());
    assert!(shared.load().find("/new").unwrap().is_some());

    // a snapshot taken before the swap keeps matching against the old table
    assert!(before.find("/old").unwrap().is_some());
}

#[test]
fn shared_table_is_usable_across_threads() {
    let shared = SharedRouteTable::new(table(&[("/user/[uid]", 7)]));

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for i in 0..100 {
                    let path = format!("/user/{i}");
                    let guard = shared.load();
                    let hit = guard.find(&path).unwrap().unwrap();
                    assert_eq!(*hit.data, 7);
                }
            });
        }
    });
}
