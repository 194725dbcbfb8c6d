//! Range input with a live two-decimal value readout.

use leptos::prelude::*;

use crate::util::slider;

/// `<input type="range">` paired with an `<output id="{id}-value">` echo.
#[component]
pub fn RangeSlider(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    min: f64,
    max: f64,
    step: f64,
    value: f64,
) -> impl IntoView {
    let readout = RwSignal::new(slider::format_value(&value.to_string()).unwrap_or_default());
    let output_id = slider::output_id(&id);

    let on_input = move |ev: leptos::ev::Event| {
        if let Some(text) = slider::format_value(&event_target_value(&ev)) {
            readout.set(text);
        }
    };

    view! {
        <label class="range-slider">
            <span class="range-slider__label">{label}</span>
            <input
                type="range"
                id=id
                min=min.to_string()
                max=max.to_string()
                step=step.to_string()
                value=value.to_string()
                on:input=on_input
            />
            <output class="range-slider__value" id=output_id>
                {move || readout.get()}
            </output>
        </label>
    }
}
