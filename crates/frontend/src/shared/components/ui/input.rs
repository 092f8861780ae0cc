use leptos::prelude::*;

/// Input component with label support
#[component]
pub fn Input(
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    /// "text" (default), "number", "date", "time", "tel"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Step for number inputs, "any" when omitted
    #[prop(optional, into)]
    step: MaybeProp<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let input_step = move || step.get().unwrap_or_else(|| "any".to_string());

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label">
                    {l}
                    {required.then_some(" *")}
                </label>
            })}
            <input
                class="form__input"
                type=input_t
                step=input_step
                value=move || value.get()
                placeholder=move || placeholder.get().unwrap_or_default()
                required=required
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
