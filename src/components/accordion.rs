//! Collapsible page sections and the expand/collapse-all bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`provide_accordion`] is the page-load hook: it builds the store over
//! `localStorage`, reconciles against the server's declarations, and provides
//! the store as context. Sections and controls only read and update that
//! signal; open/closed presentation is derived from it.

#[cfg(test)]
#[path = "accordion_test.rs"]
mod accordion_test;

use leptos::prelude::*;

use crate::config::UiConfig;
use crate::state::accordion::{AccordionStore, SectionDeclaration};
use crate::util::storage::LocalStorage;

/// Accordion store backed by the browser's `localStorage`.
pub type PageAccordion = AccordionStore<LocalStorage>;

/// Build, reconcile, and provide the page's accordion store.
pub fn provide_accordion(config: &UiConfig, sections: &[SectionDeclaration]) -> RwSignal<PageAccordion> {
    let mut store = AccordionStore::new(LocalStorage, config.accordion_storage_key());
    store.reconcile_on_load(sections);
    leptos::logging::log!("accordion reconciled: {} sections", sections.len());
    let accordion = RwSignal::new(store);
    provide_context(accordion);
    accordion
}

fn section_class(open: bool) -> &'static str {
    if open { "accordion__section accordion__section--open" } else { "accordion__section" }
}

/// One collapsible section; the header click toggles it.
#[component]
pub fn AccordionSection(
    #[prop(into)] section_key: String,
    #[prop(into)] title: String,
    children: Children,
) -> impl IntoView {
    let accordion = expect_context::<RwSignal<PageAccordion>>();

    let key = section_key.clone();
    let is_open = move || accordion.with(|a| a.is_open(&key));

    let key = section_key.clone();
    let on_toggle = move |_| {
        accordion.update(|a| {
            a.toggle(&key);
        });
    };

    view! {
        <section class=move || section_class(is_open()) data-section=section_key>
            <button class="accordion__header" on:click=on_toggle>
                {title}
            </button>
            <div class="accordion__body">{children()}</div>
        </section>
    }
}

/// Expand-all / collapse-all buttons over every rendered section.
#[component]
pub fn AccordionControls() -> impl IntoView {
    let accordion = expect_context::<RwSignal<PageAccordion>>();

    let on_expand = move |_| accordion.update(PageAccordion::expand_rendered);
    let on_collapse = move |_| accordion.update(PageAccordion::collapse_rendered);

    view! {
        <div class="accordion__controls">
            <button class="btn accordion__expand-all" on:click=on_expand>
                "Expand all"
            </button>
            <button class="btn accordion__collapse-all" on:click=on_collapse>
                "Collapse all"
            </button>
        </div>
    }
}
