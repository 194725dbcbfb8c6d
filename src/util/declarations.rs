//! Section declarations embedded by the server-rendered page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders a `<script type="application/json">` block listing every
//! collapsible section as `{"key": ..., "defaultOpen": ...}`. This module reads
//! and decodes it so the accordion store can reconcile before first paint.

#[cfg(test)]
#[path = "declarations_test.rs"]
mod declarations_test;

use crate::state::accordion::SectionDeclaration;

/// Element id of the embedded declaration block.
pub const DECLARATIONS_ELEMENT_ID: &str = "page-ui-sections";

/// Decode a JSON array of declarations. Malformed input yields no sections.
pub fn parse(raw: &str) -> Vec<SectionDeclaration> {
    match serde_json::from_str(raw) {
        Ok(sections) => sections,
        Err(err) => {
            leptos::logging::warn!("section declarations ignored: {err}");
            Vec::new()
        }
    }
}

/// Read declarations from the element with id `element_id`.
///
/// Returns an empty list outside the browser or when the element is missing.
pub fn read_embedded(element_id: &str) -> Vec<SectionDeclaration> {
    #[cfg(feature = "hydrate")]
    {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(element_id))
            .and_then(|el| el.text_content());
        raw.map_or_else(Vec::new, |raw| parse(&raw))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = element_id;
        Vec::new()
    }
}
