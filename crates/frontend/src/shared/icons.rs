use leptos::prelude::*;

fn svg(paths: AnyView) -> AnyView {
    view! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            {paths}
        </svg>
    }
    .into_any()
}

pub fn icon(name: &str) -> AnyView {
    match name {
        "suppliers" => svg(view! {
            <path d="M3 22h18"/>
            <path d="M6 22V8l6-5 6 5v14"/>
            <rect x="9" y="13" width="6" height="9"/>
        }.into_any()),
        "customers" | "employees" => svg(view! {
            <path d="M17 21v-2a4 4 0 0 0-4-4H7a4 4 0 0 0-4 4v2"/>
            <circle cx="9" cy="7" r="4"/>
            <path d="M23 21v-2a4 4 0 0 0-3-3.87"/>
            <path d="M16 3.13a4 4 0 0 1 0 7.75"/>
        }.into_any()),
        "milk" => svg(view! {
            <path d="M8 2h8"/>
            <path d="M9 2v3l-3 4v11a2 2 0 0 0 2 2h8a2 2 0 0 0 2-2V9l-3-4V2"/>
            <path d="M6 13h12"/>
        }.into_any()),
        "sales" => svg(view! {
            <circle cx="9" cy="21" r="1"/>
            <circle cx="20" cy="21" r="1"/>
            <path d="M1 1h4l2.68 12.39a2 2 0 0 0 2 1.61h7.72a2 2 0 0 0 2-1.61L23 6H6"/>
        }.into_any()),
        "payments" => svg(view! {
            <rect x="2" y="5" width="20" height="14" rx="2"/>
            <path d="M2 10h20"/>
        }.into_any()),
        "inventory" => svg(view! {
            <path d="M21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z"/>
            <path d="M3.27 6.96 12 12l8.73-5.04"/>
            <path d="M12 22V12"/>
        }.into_any()),
        "feed" => svg(view! {
            <path d="M12 22V10"/>
            <path d="M12 10c0-4 3-7 7-7 0 4-3 7-7 7z"/>
            <path d="M12 14c0-3-2.5-6-6-6 0 3.5 2.5 6 6 6z"/>
        }.into_any()),
        "attendance" | "calendar" => svg(view! {
            <rect x="3" y="4" width="18" height="18" rx="2"/>
            <path d="M16 2v4"/>
            <path d="M8 2v4"/>
            <path d="M3 10h18"/>
        }.into_any()),
        "legal" => svg(view! {
            <path d="M12 3v18"/>
            <path d="M5 21h14"/>
            <path d="M3 7h18"/>
            <path d="M6 7l-3 7a3 3 0 0 0 6 0z"/>
            <path d="M18 7l-3 7a3 3 0 0 0 6 0z"/>
        }.into_any()),
        "operations" => svg(view! {
            <path d="M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.77-3.77a6 6 0 0 1-7.94 7.94l-6.91 6.91a2.12 2.12 0 0 1-3-3l6.91-6.91a6 6 0 0 1 7.94-7.94l-3.76 3.76z"/>
        }.into_any()),
        "truck" => svg(view! {
            <rect x="1" y="3" width="15" height="13"/>
            <path d="M16 8h4l3 3v5h-7V8z"/>
            <circle cx="5.5" cy="18.5" r="2.5"/>
            <circle cx="18.5" cy="18.5" r="2.5"/>
        }.into_any()),
        "analytics" => svg(view! {
            <path d="M3 3v18h18"/>
            <path d="M18 17V9"/>
            <path d="M13 17V5"/>
            <path d="M8 17v-3"/>
        }.into_any()),
        "trending-up" => svg(view! {
            <path d="M23 6l-9.5 9.5-5-5L1 18"/>
            <path d="M17 6h6v6"/>
        }.into_any()),
        "alert" => svg(view! {
            <path d="M10.29 3.86 1.82 18a2 2 0 0 0 1.71 3h16.94a2 2 0 0 0 1.71-3L13.71 3.86a2 2 0 0 0-3.42 0z"/>
            <path d="M12 9v4"/>
            <path d="M12 17h.01"/>
        }.into_any()),
        "plus" => svg(view! {
            <path d="M12 5v14"/>
            <path d="M5 12h14"/>
        }.into_any()),
        "refresh" => svg(view! {
            <path d="M23 4v6h-6"/>
            <path d="M1 20v-6h6"/>
            <path d="M3.51 9a9 9 0 0 1 14.85-3.36L23 10M1 14l4.64 4.36A9 9 0 0 0 20.49 15"/>
        }.into_any()),
        "delete" => svg(view! {
            <path d="M3 6h18"/>
            <path d="M19 6l-1 14a2 2 0 0 1-2 2H8a2 2 0 0 1-2-2L5 6"/>
            <path d="M10 11v6"/>
            <path d="M14 11v6"/>
            <path d="M9 6V4a1 1 0 0 1 1-1h4a1 1 0 0 1 1 1v2"/>
        }.into_any()),
        "save" => svg(view! {
            <path d="M19 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h11l5 5v11a2 2 0 0 1-2 2z"/>
            <path d="M17 21v-8H7v8"/>
            <path d="M7 3v5h8"/>
        }.into_any()),
        "download" => svg(view! {
            <path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/>
            <path d="M7 10l5 5 5-5"/>
            <path d="M12 15V3"/>
        }.into_any()),
        "chevron-right" => svg(view! {
            <path d="M9 18l6-6-6-6"/>
        }.into_any()),
        "menu" => svg(view! {
            <path d="M3 12h18"/>
            <path d="M3 6h18"/>
            <path d="M3 18h18"/>
        }.into_any()),
        "x" => svg(view! {
            <path d="M18 6 6 18"/>
            <path d="M6 6l12 12"/>
        }.into_any()),
        _ => svg(view! {
            <circle cx="12" cy="12" r="9"/>
        }.into_any()),
    }
}
