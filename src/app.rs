//! Root component mounted onto the server-rendered page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders each section body and the help text as hidden elements
//! plus a JSON declaration block. On start the root reconciles the accordion
//! against those declarations, renders the page chrome, and moves every
//! server-rendered body into its section slot.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;

use crate::components::accordion::{AccordionControls, AccordionSection, PageAccordion, provide_accordion};
use crate::components::help_modal::{HelpButton, HelpModal};
use crate::config::UiConfig;
use crate::state::accordion::SectionDeclaration;
use crate::state::modal::ModalState;
use crate::util::declarations::{self, DECLARATIONS_ELEMENT_ID};

/// Server-rendered help text, moved into the modal.
pub const HELP_CONTENT_ID: &str = "help-content";
pub const HELP_SLOT_ID: &str = "page-ui-help-slot";

/// Id of the server-rendered body for section `key`.
pub fn content_id(key: &str) -> String {
    format!("section-content-{key}")
}

/// Id of the slot the body for section `key` is moved into.
pub fn slot_id(key: &str) -> String {
    format!("page-ui-slot-{key}")
}

/// `(content id, slot id)` pairs to adopt once the chrome is rendered.
pub fn server_content_moves(sections: &[SectionDeclaration]) -> Vec<(String, String)> {
    sections
        .iter()
        .map(|section| (content_id(&section.key), slot_id(&section.key)))
        .chain(std::iter::once((HELP_CONTENT_ID.to_owned(), HELP_SLOT_ID.to_owned())))
        .collect()
}

/// Page-load hook: read the embedded declarations, reconcile, provide the store.
pub fn install_accordion(config: &UiConfig) -> RwSignal<PageAccordion> {
    let sections = declarations::read_embedded(DECLARATIONS_ELEMENT_ID);
    provide_accordion(config, &sections)
}

#[cfg(feature = "hydrate")]
fn adopt(content_id: &str, slot_id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let (Some(content), Some(slot)) = (document.get_element_by_id(content_id), document.get_element_by_id(slot_id)) {
        if let Err(err) = slot.append_child(&content) {
            leptos::logging::warn!("could not move #{content_id}: {err:?}");
        }
    }
}

/// Root component: accordion sections, bulk controls, and the help modal.
#[component]
pub fn App() -> impl IntoView {
    let config = UiConfig::from_build_env();
    let accordion = install_accordion(&config);
    let modal = RwSignal::new(ModalState::default());
    let sections = accordion.with_untracked(|a| a.sections().to_vec());

    #[cfg(feature = "hydrate")]
    {
        let moves = server_content_moves(&sections);
        Effect::new(move || {
            for (content, slot) in &moves {
                adopt(content, slot);
            }
        });
    }

    view! {
        <div class="page-ui">
            <div class="page-ui__toolbar">
                <AccordionControls/>
                <HelpButton modal=modal/>
            </div>
            {sections
                .into_iter()
                .map(|section| {
                    let slot = slot_id(&section.key);
                    let title = section.display_title().to_owned();
                    view! {
                        <AccordionSection section_key=section.key title=title>
                            <div class="accordion__slot" id=slot></div>
                        </AccordionSection>
                    }
                })
                .collect_view()}
            <HelpModal modal=modal title="Help">
                <div id=HELP_SLOT_ID></div>
            </HelpModal>
        </div>
    }
}
