//! Sidebar with collapsible menu groups; items open pages as tabs

use crate::layout::global_context::use_app_context;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    /// (tab key, icon)
    items: Vec<(&'static str, &'static str)>,
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "dashboards",
            label: "Dashboards",
            icon: "analytics",
            items: vec![("d400_analytics", "trending-up")],
        },
        MenuGroup {
            id: "supply",
            label: "Supply",
            icon: "milk",
            items: vec![
                ("a001_supplier", "suppliers"),
                ("a003_milk_reception", "milk"),
                ("a007_feed", "feed"),
            ],
        },
        MenuGroup {
            id: "sales",
            label: "Sales & finance",
            icon: "sales",
            items: vec![
                ("a002_customer", "customers"),
                ("a004_sale", "sales"),
                ("a005_payment", "payments"),
            ],
        },
        MenuGroup {
            id: "warehouse",
            label: "Warehouse",
            icon: "inventory",
            items: vec![("a006_inventory_item", "inventory")],
        },
        MenuGroup {
            id: "hr",
            label: "People",
            icon: "employees",
            items: vec![("a008_employee", "employees"), ("a008_attendance", "attendance")],
        },
        MenuGroup {
            id: "administration",
            label: "Administration",
            icon: "legal",
            items: vec![("a009_legal", "legal"), ("a010_operations", "operations")],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let expanded_groups = RwSignal::new(
        get_menu_groups()
            .iter()
            .map(|g| g.id.to_string())
            .collect::<Vec<_>>(),
    );

    view! {
        <nav class="app-sidebar__content" class:hidden=move || !ctx.left_open.get()>
            {get_menu_groups().into_iter().map(|group| {
                let group_id = group.id;
                let is_expanded = move || expanded_groups.with(|g| g.iter().any(|x| x == group_id));
                let items = StoredValue::new(group.items.clone());

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            on:click=move |_| {
                                expanded_groups.update(|g| {
                                    if let Some(pos) = g.iter().position(|x| x == group_id) {
                                        g.remove(pos);
                                    } else {
                                        g.push(group_id.to_string());
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=is_expanded
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>
                        <Show when=is_expanded>
                            <div class="app-sidebar__children">
                                {items.get_value().into_iter().map(|(key, icon_name)| {
                                    let label = tab_label_for_key(key).unwrap_or(key);
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                ctx.active.get().as_deref() == Some(key)
                                            }
                                            on:click=move |_| ctx.open_tab(key)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </nav>
    }
}
