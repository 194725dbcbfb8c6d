//! Profile menu in the page header.

use leptos::prelude::*;

use crate::state::dropdown::DropdownState;

/// Avatar button with a dropdown of profile links passed as children.
#[component]
pub fn ProfileDropdown(#[prop(into)] display_name: String, children: Children) -> impl IntoView {
    let menu = RwSignal::new(DropdownState::default());
    let is_open = move || menu.with(DropdownState::is_open);

    let keydown = window_event_listener(leptos::ev::keydown, move |ev| {
        let mut handled = false;
        menu.update(|m| handled = m.handle_key(&ev.key()));
        if handled {
            ev.prevent_default();
        }
    });
    on_cleanup(move || keydown.remove());

    let on_trigger = move |_| {
        menu.update(|m| {
            m.toggle();
        });
    };
    let on_outside = move |_| {
        menu.update(|m| {
            m.handle_outside_click();
        });
    };

    view! {
        <div class="profile-dropdown">
            <div
                class="profile-dropdown__scrim"
                style:display=move || if is_open() { "block" } else { "none" }
                on:click=on_outside
            ></div>
            <button class="profile-dropdown__trigger" on:click=on_trigger title="Profile">
                {display_name}
            </button>
            <div
                class="profile-dropdown__menu"
                style:display=move || if is_open() { "block" } else { "none" }
                on:click=move |_| menu.update(DropdownState::close)
            >
                {children()}
            </div>
        </div>
    }
}
