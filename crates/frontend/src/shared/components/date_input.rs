use leptos::prelude::*;

/// DateInput component with native date picker
/// Browser displays dates in locale format, the value stays yyyy-mm-dd
#[component]
pub fn DateInput(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// The date value in yyyy-mm-dd format
    #[prop(into)]
    value: Signal<String>,
    /// Callback when the date changes (receives yyyy-mm-dd format)
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Disabled state
    #[prop(optional)]
    disabled: bool,
) -> impl IntoView {
    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label">{l}</label>
            })}
            <input
                type="date"
                class="form__input"
                prop:value=value
                disabled=disabled
                on:input=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
