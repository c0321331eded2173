use pretty_assertions::assert_eq;
use slked::{
    MemoryStore, NewItem, NewUnit, ObjectKind, Record, RecordStore, SortKey, SortOrder,
    StoreError, filter_summaries, sort_summaries,
};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

#[test]
fn create_edit_save_remove_round_trip() -> Result<()> {
    let mut store = MemoryStore::new();

    let summary = store.create_unit(&NewUnit {
        id: None,
        name: "Swordsman".to_string(),
        ..NewUnit::default()
    })?;
    assert_eq!(summary.id, "u000");
    assert!(store.dirty());

    // Field-level saves land immediately.
    store.apply_field(ObjectKind::Unit, "u000", "Goldcost", "210")?;
    store.apply_field(ObjectKind::Unit, "u000", "EditorSuffix", "\"(custom)\"")?;
    let record = store.record(ObjectKind::Unit, "u000").expect("record");
    assert_eq!(record.get("Goldcost"), Some("210"));

    // Record-level save finalizes and refreshes the summary.
    let record = record.clone();
    let summary = store.save_record(ObjectKind::Unit, record)?;
    assert_eq!(summary.editor_suffix, "(custom)");

    let record = store.record(ObjectKind::Unit, "u000").expect("record");
    assert_eq!(record.get("UnitWeapID"), Some("\"u000\""));
    assert_eq!(record.get("SortAbil"), Some("\"z3\""));

    store.commit()?;
    assert!(!store.dirty());

    store.remove(ObjectKind::Unit, "u000")?;
    assert!(store.record(ObjectKind::Unit, "u000").is_none());
    assert!(store.dirty());
    Ok(())
}

#[test]
fn generated_unit_ids_skip_explicit_records() -> Result<()> {
    let mut store = MemoryStore::new();
    for id in ["u000", "u001", "u003"] {
        store.create_unit(&NewUnit {
            id: Some(id.to_string()),
            name: "Filler".to_string(),
            ..NewUnit::default()
        })?;
    }

    let first = store.create_unit(&NewUnit {
        id: None,
        name: "Gap".to_string(),
        ..NewUnit::default()
    })?;
    assert_eq!(first.id, "u002");

    let second = store.create_unit(&NewUnit {
        id: None,
        name: "Next".to_string(),
        ..NewUnit::default()
    })?;
    assert_eq!(second.id, "u004");
    Ok(())
}

#[test]
fn item_ids_use_their_own_page_and_cursor() -> Result<()> {
    let mut store = MemoryStore::new();
    let a = store.create_item(&NewItem {
        id: None,
        name: "Tome".to_string(),
    })?;
    let b = store.create_item(&NewItem {
        id: None,
        name: "Potion".to_string(),
    })?;
    assert_eq!(a.id, "I000");
    assert_eq!(b.id, "I001");

    // Unit ids are unaffected by item creation.
    let unit = store.create_unit(&NewUnit {
        id: None,
        name: "Footman".to_string(),
        ..NewUnit::default()
    })?;
    assert_eq!(unit.id, "u000");
    Ok(())
}

#[test]
fn summaries_feed_search_and_sort() -> Result<()> {
    let mut store = MemoryStore::new();
    for (id, name) in [("hfoo", "Footman"), ("hkni", "Knight"), ("ogru", "Grunt")] {
        let mut record = Record::new();
        record.set("UnitID", id);
        record.set("Name", name);
        store.save_record(ObjectKind::Unit, record)?;
    }

    let summaries = store.summaries(ObjectKind::Unit);
    assert_eq!(summaries.len(), 3);

    let mut hits = filter_summaries(&summaries, "h", false);
    assert_eq!(hits.len(), 2);

    sort_summaries(&mut hits, SortKey::Name, SortOrder::Descending);
    let names: Vec<_> = hits.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Knight", "Footman"]);

    let regex_hits = filter_summaries(&summaries, "^(FOOT|GRU)", true);
    assert_eq!(regex_hits.len(), 2);
    Ok(())
}

#[test]
fn unknown_ids_surface_store_errors() {
    let mut store = MemoryStore::new();
    assert!(matches!(
        store.apply_field(ObjectKind::Unit, "none", "HP", "1"),
        Err(StoreError::UnknownId(_))
    ));
    assert!(matches!(
        store.remove(ObjectKind::Ability, "none"),
        Err(StoreError::UnknownId(_))
    ));
}
