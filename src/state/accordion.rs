//! Persisted open/closed state for collapsible page sections.
//!
//! DESIGN
//! ======
//! The store owns the explicit-state map and the declarations of the sections
//! currently rendered. Effective openness is the explicit entry when present,
//! otherwise the declared default. Views read [`AccordionStore::is_open`]
//! reactively, so the map is the only source of truth and nothing is read
//! back from the DOM.
//!
//! ERROR HANDLING
//! ==============
//! Persistence is advisory. Corrupt or unreadable stored state loads as an
//! empty map; failed writes are logged and the in-memory map stays
//! authoritative for the rest of the session.
//!
//! TRADE-OFFS
//! ==========
//! [`AccordionStore::reconcile_on_load`] discards persisted choices on every
//! page view. Server defaults encode relevance the client cannot know, so a
//! stale choice would hide them; storage only carries state within a view.

#[cfg(test)]
#[path = "accordion_test.rs"]
mod accordion_test;

use std::collections::BTreeMap;

use crate::util::storage::{self, KeyValueStore, StorageError};

/// Explicit open/closed choices keyed by section key.
pub type SectionStateMap = BTreeMap<String, bool>;

/// One collapsible section as declared by the rendering layer.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SectionDeclaration {
    pub key: String,
    #[serde(rename = "defaultOpen", alias = "default_open", default)]
    pub default_open: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl SectionDeclaration {
    pub fn new(key: impl Into<String>, default_open: bool) -> Self {
        Self { key: key.into(), default_open, title: None }
    }

    /// Header label; the key when the server sent no title.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.key)
    }
}

/// Section state manager over an injected key-value store.
#[derive(Clone, Debug)]
pub struct AccordionStore<S> {
    storage: S,
    storage_key: String,
    sections: Vec<SectionDeclaration>,
    explicit: SectionStateMap,
}

impl<S: KeyValueStore> AccordionStore<S> {
    /// Create a store and load whatever explicit state is persisted.
    ///
    /// No sections are known until [`Self::reconcile_on_load`] runs.
    pub fn new(storage: S, storage_key: impl Into<String>) -> Self {
        let mut store = Self {
            storage,
            storage_key: storage_key.into(),
            sections: Vec::new(),
            explicit: SectionStateMap::new(),
        };
        store.explicit = store.load();
        store
    }

    // --- Persistence ---

    /// Read the persisted map. Missing, unreadable, or malformed state is empty.
    pub fn load(&self) -> SectionStateMap {
        match storage::load_json::<SectionStateMap, _>(&self.storage, &self.storage_key) {
            Ok(Some(map)) => map,
            Ok(None) | Err(StorageError::Unavailable) => SectionStateMap::new(),
            Err(err) => {
                leptos::logging::warn!("accordion state ignored: {err}");
                SectionStateMap::new()
            }
        }
    }

    /// Persist `map`. Failures are logged and otherwise ignored.
    pub fn save(&mut self, map: &SectionStateMap) {
        report_write(storage::save_json(&mut self.storage, &self.storage_key, map));
    }

    fn persist_explicit(&mut self) {
        report_write(storage::save_json(&mut self.storage, &self.storage_key, &self.explicit));
    }

    // --- Operations ---

    /// Reset explicit state and fall back to declared defaults for `sections`.
    ///
    /// Must run once per page view before any user-driven operation.
    pub fn reconcile_on_load(&mut self, sections: &[SectionDeclaration]) {
        self.sections = sections.to_vec();
        self.explicit.clear();
        self.persist_explicit();
    }

    /// Flip `key` and persist. Returns the new openness, or `None` when no
    /// rendered section has that key.
    pub fn toggle(&mut self, key: &str) -> Option<bool> {
        if !self.sections.iter().any(|section| section.key == key) {
            return None;
        }
        let current = self.effective(key)?;
        let next = !current;
        self.explicit.insert(key.to_owned(), next);
        self.persist_explicit();
        Some(next)
    }

    /// Open every section in `sections`, replacing all explicit state.
    pub fn expand_all(&mut self, sections: &[SectionDeclaration]) {
        self.replace_all(filled(sections, true));
    }

    /// Close every section in `sections`, replacing all explicit state.
    pub fn collapse_all(&mut self, sections: &[SectionDeclaration]) {
        self.replace_all(filled(sections, false));
    }

    /// [`Self::expand_all`] over the sections recorded at reconciliation.
    pub fn expand_rendered(&mut self) {
        self.replace_all(filled(&self.sections, true));
    }

    /// [`Self::collapse_all`] over the sections recorded at reconciliation.
    pub fn collapse_rendered(&mut self) {
        self.replace_all(filled(&self.sections, false));
    }

    // --- Queries ---

    /// Effective openness of `key`; unknown keys read as closed.
    pub fn is_open(&self, key: &str) -> bool {
        self.effective(key).unwrap_or(false)
    }

    pub fn sections(&self) -> &[SectionDeclaration] {
        &self.sections
    }

    pub fn explicit_state(&self) -> &SectionStateMap {
        &self.explicit
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Hand the backend back, e.g. to reopen it on the next page view.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn effective(&self, key: &str) -> Option<bool> {
        if let Some(open) = self.explicit.get(key) {
            return Some(*open);
        }
        self.sections
            .iter()
            .find(|section| section.key == key)
            .map(|section| section.default_open)
    }

    fn replace_all(&mut self, map: SectionStateMap) {
        self.explicit = map;
        self.persist_explicit();
    }
}

fn report_write(result: Result<(), StorageError>) {
    match result {
        Ok(()) | Err(StorageError::Unavailable) => {}
        Err(err) => leptos::logging::warn!("accordion state not persisted: {err}"),
    }
}

fn filled(sections: &[SectionDeclaration], open: bool) -> SectionStateMap {
    sections
        .iter()
        .map(|section| (section.key.clone(), open))
        .collect()
}
