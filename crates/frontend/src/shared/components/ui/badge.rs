use leptos::prelude::*;

/// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
pub fn badge_class(variant: &str) -> &'static str {
    match variant {
        "primary" => "badge badge--primary",
        "success" => "badge badge--success",
        "warning" => "badge badge--warning",
        "error" => "badge badge--error",
        _ => "badge badge--neutral",
    }
}

#[component]
pub fn Badge(#[prop(optional, into)] variant: MaybeProp<String>, children: Children) -> impl IntoView {
    let class = move || badge_class(variant.get().as_deref().unwrap_or("neutral"));

    view! { <span class=class>{children()}</span> }
}
