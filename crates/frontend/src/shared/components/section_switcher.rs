use leptos::prelude::*;
use thaw::*;

/// Row of buttons switching between the sections of a multi-record page
#[component]
pub fn SectionSwitcher(
    /// (key, label) of every section
    sections: &'static [(&'static str, &'static str)],
    active: RwSignal<&'static str>,
) -> impl IntoView {
    view! {
        <div class="section-switcher">
            {sections
                .iter()
                .map(|&(key, label)| {
                    view! {
                        <Button
                            appearance=move || {
                                if active.get() == key {
                                    ButtonAppearance::Primary
                                } else {
                                    ButtonAppearance::Subtle
                                }
                            }
                            on_click=move |_| active.set(key)
                        >
                            {label}
                        </Button>
                    }
                })
                .collect_view()}
        </div>
    }
}
