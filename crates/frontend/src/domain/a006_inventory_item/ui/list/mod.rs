use crate::domain::a006_inventory_item::ui::details::InventoryItemDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::table::{format_money, format_number_with_decimals, TableCellMoney};
use crate::shared::components::ui::{Badge, Checkbox};
use crate::shared::crud;
use crate::shared::details::DialogState;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, SearchInput, Searchable};
use crate::shared::loader::{delete_with_confirm, spawn_load};
use crate::shared::toast::use_toast;
use contracts::domain::a006_inventory_item::{low_stock_count, total_stock_value, InventoryItem};
use leptos::prelude::*;
use thaw::*;

impl Searchable for InventoryItem {
    fn search_fields(&self) -> Vec<String> {
        vec![self.name.clone(), self.category.clone(), self.location.clone()]
    }
}

fn visible_items(items: Vec<InventoryItem>, filter: &str, low_only: bool) -> Vec<InventoryItem> {
    let mut items = filter_list(items, filter);
    if low_only {
        items.retain(InventoryItem::is_low_stock);
    }
    items.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    items
}

#[component]
pub fn InventoryList() -> impl IntoView {
    let toast = use_toast();
    let items = RwSignal::new(Vec::<InventoryItem>::new());
    let loading = RwSignal::new(false);
    let (filter, set_filter) = signal(String::new());
    let low_only = RwSignal::new(false);
    let dialog = RwSignal::new(DialogState::Closed);

    let fetch = move || {
        spawn_load(
            loading,
            toast,
            crud::fetch_list::<InventoryItem>(),
            move |list| items.set(list),
            move || items.set(Vec::new()),
        );
    };

    let handle_delete = move |id: i64| delete_with_confirm::<InventoryItem>(id, toast, fetch);

    fetch();

    let visible = Memo::new(move |_| visible_items(items.get(), &filter.get(), low_only.get()));
    let low = Memo::new(move |_| items.with(|i| low_stock_count(i)));

    view! {
        <div class="page">
            <PageHeader title="Inventory" subtitle="Stock levels and reorder alerts">
                <SearchInput value=filter on_change=Callback::new(move |v| set_filter.set(v)) />
                <Checkbox label="Low stock only" checked=low_only on_change=Callback::new(move |v| low_only.set(v)) />
                <Button appearance=ButtonAppearance::Primary on_click=move |_| dialog.set(DialogState::New)>
                    {icon("plus")}
                    " New"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch() disabled=loading>
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>

            <div class="stat-grid">
                <StatCard label="Items" icon_name="inventory" value=Signal::derive(move || items.with(|i| i.len()).to_string()) />
                <StatCard
                    label="Low stock"
                    icon_name="alert"
                    value=Signal::derive(move || low.get().to_string())
                    tone=Signal::derive(move || if low.get() > 0 { StatTone::Warning } else { StatTone::Good })
                />
                <StatCard label="Stock value" icon_name="payments" value=Signal::derive(move || format_money(items.with(|i| total_stock_value(i)))) />
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=true min_width=200.0>"Name"</TableHeaderCell>
                        <TableHeaderCell min_width=120.0>"Category"</TableHeaderCell>
                        <TableHeaderCell min_width=110.0>"Quantity"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Reorder at"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Unit cost"</TableHeaderCell>
                        <TableHeaderCell min_width=110.0>"Value"</TableHeaderCell>
                        <TableHeaderCell min_width=120.0>"Location"</TableHeaderCell>
                        <TableHeaderCell min_width=60.0>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || visible.get()
                        key=|item| (item.id, item.name.clone(), item.quantity.to_bits())
                        children=move |item| {
                            let id = item.id.unwrap_or_default();
                            let is_low = item.is_low_stock();
                            let value = item.stock_value();
                            let quantity = format!("{} {}", format_number_with_decimals(item.quantity, 2), item.unit);
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>
                                            <a href="#" class="table__link" on:click=move |e| {
                                                e.prevent_default();
                                                dialog.set(DialogState::Edit(id));
                                            }>
                                                {item.name}
                                            </a>
                                            {is_low.then(|| view! { <Badge variant="error">"Low stock"</Badge> })}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell><TableCellLayout>{item.category}</TableCellLayout></TableCell>
                                    <TableCell class="text-right">{quantity}</TableCell>
                                    <TableCell class="text-right">{format_number_with_decimals(item.min_quantity, 2)}</TableCell>
                                    <TableCellMoney value=item.unit_cost />
                                    <TableCellMoney value=value bold=true />
                                    <TableCell><TableCellLayout>{item.location}</TableCellLayout></TableCell>
                                    <TableCell>
                                        <Button
                                            size=ButtonSize::Small
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| handle_delete(id)
                                        >
                                            {icon("delete")}
                                        </Button>
                                    </TableCell>
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>

            <Show when=move || dialog.get().is_open()>
                {move || view! {
                    <InventoryItemDetails
                        state=dialog.get()
                        on_saved=Callback::new(move |_| {
                            dialog.set(DialogState::Closed);
                            fetch();
                        })
                        on_close=Callback::new(move |_| dialog.set(DialogState::Closed))
                    />
                }}
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, quantity: f64, min_quantity: f64) -> InventoryItem {
        InventoryItem {
            name: name.into(),
            quantity,
            min_quantity,
            ..Default::default()
        }
    }

    #[test]
    fn low_stock_toggle_and_sorting() {
        let items = vec![item("Lids", 10.0, 50.0), item("bottles", 500.0, 100.0), item("Filters", 2.0, 2.0)];
        let all = visible_items(items.clone(), "", false);
        let names: Vec<&str> = all.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["bottles", "Filters", "Lids"]);

        let low = visible_items(items, "", true);
        assert_eq!(low.len(), 2);
        assert!(low.iter().all(InventoryItem::is_low_stock));
    }
}
