//! Accordion state across simulated page views sharing one backing store.

use page_ui::config::UiConfig;
use page_ui::state::accordion::{AccordionStore, SectionDeclaration, SectionStateMap};
use page_ui::util::declarations;
use page_ui::util::storage::MemoryStore;

fn page_sections() -> Vec<SectionDeclaration> {
    declarations::parse(
        r#"[
            {"key": "odds", "defaultOpen": true},
            {"key": "injuries", "defaultOpen": false},
            {"key": "history", "defaultOpen": false}
        ]"#,
    )
}

fn open_keys(store: &AccordionStore<MemoryStore>) -> Vec<&str> {
    store
        .sections()
        .iter()
        .filter(|section| store.is_open(&section.key))
        .map(|section| section.key.as_str())
        .collect()
}

#[test]
fn choices_persist_within_a_view_and_reset_on_the_next() {
    let key = UiConfig::default().accordion_storage_key();
    let sections = page_sections();

    // First view: user opens injuries and closes odds.
    let mut view = AccordionStore::new(MemoryStore::new(), key.clone());
    view.reconcile_on_load(&sections);
    assert_eq!(open_keys(&view), vec!["odds"]);
    view.toggle("injuries");
    view.toggle("odds");
    assert_eq!(open_keys(&view), vec!["injuries"]);

    let backend = view.into_storage();
    assert_eq!(backend.raw(&key), Some(r#"{"injuries":true,"odds":false}"#));

    // Second view: the persisted choices load, then reconciliation drops them.
    let mut view = AccordionStore::new(backend, key.clone());
    let expected: SectionStateMap = [("injuries".to_owned(), true), ("odds".to_owned(), false)].into_iter().collect();
    assert_eq!(view.explicit_state(), &expected);

    view.reconcile_on_load(&sections);
    assert_eq!(open_keys(&view), vec!["odds"]);
    assert_eq!(view.storage().raw(&key), Some("{}"));
}

#[test]
fn bulk_controls_cover_every_rendered_section() {
    let key = UiConfig::default().accordion_storage_key();
    let mut view = AccordionStore::new(MemoryStore::new(), key);
    view.reconcile_on_load(&page_sections());

    view.expand_rendered();
    assert_eq!(open_keys(&view), vec!["odds", "injuries", "history"]);

    view.toggle("history");
    view.collapse_rendered();
    assert!(open_keys(&view).is_empty());
    assert_eq!(view.load().len(), 3);
    assert!(view.load().values().all(|open| !open));
}

#[test]
fn corrupt_storage_from_a_previous_view_is_harmless() {
    let key = UiConfig::default().accordion_storage_key();
    let backend = MemoryStore::new().with_raw(&key, "{\"odds\": ");
    let mut view = AccordionStore::new(backend, key.clone());
    assert!(view.explicit_state().is_empty());

    view.reconcile_on_load(&page_sections());
    assert_eq!(view.toggle("history"), Some(true));
    assert_eq!(view.storage().raw(&key), Some(r#"{"history":true}"#));
}
