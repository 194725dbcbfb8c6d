//! Help modal with backdrop dismissal, Escape handling, and scroll lock.

use leptos::prelude::*;

use crate::state::modal::ModalState;
use crate::util::body_scroll;

/// Header button that opens and closes the help modal.
#[component]
pub fn HelpButton(modal: RwSignal<ModalState>) -> impl IntoView {
    view! {
        <button
            class="btn help-toggle"
            on:click=move |_| {
                modal.update(|m| {
                    m.toggle();
                });
            }
            title="Help"
        >
            "?"
        </button>
    }
}

/// Fullscreen help overlay. Clicking outside the dialog or pressing Escape closes it.
#[component]
pub fn HelpModal(modal: RwSignal<ModalState>, #[prop(into)] title: String, children: Children) -> impl IntoView {
    Effect::new(move || body_scroll::set_locked(modal.with(ModalState::body_scroll_locked)));

    let on_backdrop = move |_| {
        modal.update(|m| {
            m.handle_backdrop_click(true);
        });
    };
    let on_close_click = move |_| modal.update(ModalState::close);
    let keydown = window_event_listener(leptos::ev::keydown, move |ev| {
        let mut handled = false;
        modal.update(|m| handled = m.handle_key(&ev.key()));
        if handled {
            ev.prevent_default();
        }
    });
    on_cleanup(move || keydown.remove());

    view! {
        <div
            class="help-overlay"
            style:display=move || if modal.with(ModalState::is_open) { "flex" } else { "none" }
            on:click=on_backdrop
        >
            <div class="help-modal" on:click=move |ev| ev.stop_propagation()>
                <div class="help-modal__header">
                    <h2>{title}</h2>
                    <button class="help-modal__close" on:click=on_close_click title="Close help">
                        "✕"
                    </button>
                </div>
                <div class="help-modal__body">{children()}</div>
            </div>
        </div>
    }
}
