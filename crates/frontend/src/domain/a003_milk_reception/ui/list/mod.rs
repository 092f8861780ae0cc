use crate::domain::a003_milk_reception::ui::details::MilkReceptionDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table::{format_liters, format_money, TableCellMoney};
use crate::shared::crud;
use crate::shared::date_utils::format_date;
use crate::shared::details::DialogState;
use crate::shared::icons::icon;
use crate::shared::list_utils::{display_ref, filter_list, names_by_id, SearchInput, Searchable};
use crate::shared::loader::{delete_with_confirm, spawn_load};
use crate::shared::toast::use_toast;
use contracts::dashboards::d400_analytics::reception_totals;
use contracts::domain::a001_supplier::Supplier;
use contracts::domain::a003_milk_reception::MilkReception;
use contracts::enums::CodedEnum;
use leptos::prelude::*;
use thaw::*;

#[derive(Clone, Debug, PartialEq)]
pub struct ReceptionRow {
    pub reception: MilkReception,
    pub supplier_name: String,
}

impl Searchable for ReceptionRow {
    fn search_fields(&self) -> Vec<String> {
        vec![self.supplier_name.clone(), self.reception.date.clone()]
    }
}

fn build_rows(mut receptions: Vec<MilkReception>, suppliers: &[Supplier]) -> Vec<ReceptionRow> {
    let names = names_by_id(suppliers, |s| s.id, |s| s.name.clone());
    // newest first
    receptions.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
    receptions
        .into_iter()
        .map(|reception| ReceptionRow {
            supplier_name: display_ref(&names, reception.supplier_id),
            reception,
        })
        .collect()
}

#[component]
pub fn MilkReceptionList() -> impl IntoView {
    let toast = use_toast();
    let receptions = RwSignal::new(Vec::<MilkReception>::new());
    let suppliers = RwSignal::new(Vec::<Supplier>::new());
    let loading = RwSignal::new(false);
    let (filter, set_filter) = signal(String::new());
    let dialog = RwSignal::new(DialogState::Closed);

    let fetch = move || {
        spawn_load(
            loading,
            toast,
            async {
                futures::try_join!(
                    crud::fetch_list::<MilkReception>(),
                    crud::fetch_list::<Supplier>(),
                )
            },
            move |(r, s)| {
                receptions.set(r);
                suppliers.set(s);
            },
            move || {
                receptions.set(Vec::new());
                suppliers.set(Vec::new());
            },
        );
    };

    let handle_delete = move |id: i64| delete_with_confirm::<MilkReception>(id, toast, fetch);

    fetch();

    let rows = Memo::new(move |_| {
        let all = suppliers.with(|s| build_rows(receptions.get(), s));
        filter_list(all, &filter.get())
    });
    let totals = Memo::new(move |_| receptions.with(|r| reception_totals(r)));

    view! {
        <div class="page">
            <PageHeader title="Milk receptions" subtitle="Milk collected from suppliers">
                <SearchInput value=filter on_change=Callback::new(move |v| set_filter.set(v)) />
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
                <StatCard label="Received" icon_name="milk" value=Signal::derive(move || format_liters(totals.get().quantity)) />
                <StatCard label="Amount" icon_name="payments" value=Signal::derive(move || format_money(totals.get().amount)) />
                <StatCard label="Average price / L" icon_name="trending-up" value=Signal::derive(move || format_money(totals.get().average_price)) />
                <StatCard label="Receptions" icon_name="calendar" value=Signal::derive(move || totals.get().count.to_string()) />
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=100.0>"Date"</TableHeaderCell>
                        <TableHeaderCell min_width=80.0>"Shift"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=180.0>"Supplier"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Liters"</TableHeaderCell>
                        <TableHeaderCell min_width=70.0>"Fat %"</TableHeaderCell>
                        <TableHeaderCell min_width=90.0>"Price / L"</TableHeaderCell>
                        <TableHeaderCell min_width=110.0>"Total"</TableHeaderCell>
                        <TableHeaderCell min_width=60.0>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || rows.get()
                        key=|row| (row.reception.id, row.supplier_name.clone(), row.reception.total_amount.to_bits())
                        children=move |row| {
                            let r = row.reception;
                            let id = r.id.unwrap_or_default();
                            let fat = r.fat_percentage.map(|f| format!("{:.1}", f)).unwrap_or_default();
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>
                                            <a href="#" class="table__link" on:click=move |e| {
                                                e.prevent_default();
                                                dialog.set(DialogState::Edit(id));
                                            }>
                                                {format_date(&r.date)}
                                            </a>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell><TableCellLayout>{r.shift.display_name()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{row.supplier_name}</TableCellLayout></TableCell>
                                    <TableCell class="text-right">{format_liters(r.quantity_liters)}</TableCell>
                                    <TableCell class="text-right">{fat}</TableCell>
                                    <TableCellMoney value=r.price_per_liter />
                                    <TableCellMoney value=r.total_amount bold=true />
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
                    <MilkReceptionDetails
                        state=dialog.get()
                        suppliers=suppliers
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

    #[test]
    fn rows_are_newest_first_with_supplier_names() {
        let suppliers = vec![Supplier {
            id: Some(1),
            name: "Green Valley".into(),
            ..Default::default()
        }];
        let receptions = vec![
            MilkReception { id: Some(1), supplier_id: Some(1), date: "2024-05-01".into(), ..Default::default() },
            MilkReception { id: Some(2), supplier_id: Some(5), date: "2024-05-03".into(), ..Default::default() },
        ];
        let rows = build_rows(receptions, &suppliers);
        assert_eq!(rows[0].reception.id, Some(2));
        assert_eq!(rows[0].supplier_name, "#5");
        assert_eq!(rows[1].supplier_name, "Green Valley");
    }
}
