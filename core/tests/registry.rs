use artistriage_core::{Registry, RegistryError, Status};

fn genres(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn test_upsert_creates_unlabeled_artist() {
    let mut registry = Registry::new();

    assert!(registry.upsert("a1", "Boards of Canada", genres(&["idm"])));

    let artist = registry.get("a1").unwrap();
    assert_eq!(artist.name, "Boards of Canada");
    assert_eq!(artist.status, Status::Unlabeled);
    assert!(artist.related.is_empty());
    assert_eq!(artist.genres, genres(&["idm"]));
}

#[test]
fn test_upsert_never_overwrites_existing_record() {
    let mut registry = Registry::new();
    registry.upsert("a1", "Boards of Canada", genres(&["idm"]));
    registry.set_status("a1", Status::Positive).unwrap();
    registry.set_related("a1", ids(&["a2"])).unwrap();

    assert!(!registry.upsert("a1", "Someone Else", genres(&["pop"])));

    let artist = registry.get("a1").unwrap();
    assert_eq!(artist.name, "Boards of Canada");
    assert_eq!(artist.status, Status::Positive);
    assert_eq!(artist.related, ids(&["a2"]));
    assert_eq!(artist.genres, genres(&["idm"]));
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_set_status_then_read_back() {
    let mut registry = Registry::new();
    registry.upsert("a1", "Autechre", vec![]);

    for status in [Status::Positive, Status::Negative, Status::Neutral, Status::Potential] {
        registry.set_status("a1", status).unwrap();
        assert_eq!(registry.status("a1"), Some(status));
    }
}

#[test]
fn test_set_status_unknown_artist() {
    let mut registry = Registry::new();

    let result = registry.set_status("missing", Status::Positive);
    assert_eq!(result, Err(RegistryError::UnknownArtist("missing".to_string())));
    assert!(registry.is_empty());
}

#[test]
fn test_set_related_creates_stubs_for_unknown_ids() {
    let mut registry = Registry::new();
    registry.upsert("a1", "Autechre", vec![]);
    registry.upsert("a2", "Aphex Twin", vec![]);

    let created = registry.set_related("a1", ids(&["a2", "a3", "a4"])).unwrap();

    assert_eq!(created, ids(&["a3", "a4"]));
    let stub = registry.get("a3").unwrap();
    assert!(stub.is_stub());
    assert_eq!(stub.status, Status::Unlabeled);
    assert!(stub.related.is_empty());
    assert!(stub.genres.is_empty());
    assert_eq!(registry.display_name("a3"), "a3");
    assert_eq!(registry.get("a2").unwrap().name, "Aphex Twin");
}

#[test]
fn test_set_related_replaces_previous_set() {
    let mut registry = Registry::new();
    registry.upsert("a1", "Autechre", vec![]);
    registry.set_related("a1", ids(&["a2", "a3"])).unwrap();

    let created = registry.set_related("a1", ids(&["a3", "a3", "a5"])).unwrap();

    assert_eq!(created, ids(&["a5"]));
    assert_eq!(registry.get("a1").unwrap().related, ids(&["a3", "a5"]));
    // Stubs are never deleted
    assert!(registry.contains("a2"));
}

#[test]
fn test_set_related_unknown_artist() {
    let mut registry = Registry::new();

    let result = registry.set_related("missing", ids(&["a2"]));
    assert!(matches!(result, Err(RegistryError::UnknownArtist(_))));
    assert!(!registry.contains("a2"));
}

#[test]
fn test_describe_fills_stub() {
    let mut registry = Registry::new();
    registry.upsert("a1", "Autechre", vec![]);
    registry.set_related("a1", ids(&["a2"])).unwrap();

    registry.describe("a2", "Plaid", genres(&["idm", "electronica"])).unwrap();

    let artist = registry.get("a2").unwrap();
    assert!(!artist.is_stub());
    assert_eq!(registry.display_name("a2"), "Plaid");
    assert_eq!(artist.genres, genres(&["idm", "electronica"]));
    assert!(registry.describe("missing", "X", vec![]).is_err());
}

#[test]
fn test_filtered_views_keep_insertion_order() {
    let mut registry = Registry::new();
    for id in ["c", "a", "d", "b", "e"] {
        registry.upsert(id, id, vec![]);
    }
    registry.set_status("a", Status::Positive).unwrap();
    registry.set_status("e", Status::Positive).unwrap();
    registry.set_status("d", Status::Potential).unwrap();

    assert_eq!(registry.unlabeled_ids(), ids(&["c", "b"]));
    assert_eq!(registry.positive_ids(), ids(&["a", "e"]));
    assert_eq!(registry.potential_ids(), ids(&["d"]));
    assert_eq!(registry.count_with_status(Status::Positive), 2);

    let order: Vec<&str> = registry.iter().map(|artist| artist.id.as_str()).collect();
    assert_eq!(order, vec!["c", "a", "d", "b", "e"]);
}
