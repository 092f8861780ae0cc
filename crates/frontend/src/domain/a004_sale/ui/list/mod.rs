use crate::domain::a004_sale::ui::details::SaleDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::table::{format_liters, format_money, TableCellMoney};
use crate::shared::crud;
use crate::shared::date_utils::format_date;
use crate::shared::details::DialogState;
use crate::shared::icons::icon;
use crate::shared::list_utils::{display_ref, filter_list, names_by_id, SearchInput, Searchable};
use crate::shared::loader::{delete_with_confirm, spawn_load};
use crate::shared::toast::use_toast;
use contracts::dashboards::d400_analytics::sale_totals;
use contracts::domain::a002_customer::Customer;
use contracts::domain::a004_sale::{total_outstanding, Sale};
use leptos::prelude::*;
use thaw::*;

#[derive(Clone, Debug, PartialEq)]
pub struct SaleRow {
    pub sale: Sale,
    pub customer_name: String,
}

impl Searchable for SaleRow {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.customer_name.clone(),
            self.sale.product.clone(),
            self.sale.date.clone(),
        ]
    }
}

fn build_rows(mut sales: Vec<Sale>, customers: &[Customer]) -> Vec<SaleRow> {
    let names = names_by_id(customers, |c| c.id, |c| c.name.clone());
    sales.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
    sales
        .into_iter()
        .map(|sale| SaleRow {
            customer_name: display_ref(&names, sale.customer_id),
            sale,
        })
        .collect()
}

#[component]
pub fn SaleList() -> impl IntoView {
    let toast = use_toast();
    let sales = RwSignal::new(Vec::<Sale>::new());
    let customers = RwSignal::new(Vec::<Customer>::new());
    let loading = RwSignal::new(false);
    let (filter, set_filter) = signal(String::new());
    let dialog = RwSignal::new(DialogState::Closed);

    let fetch = move || {
        spawn_load(
            loading,
            toast,
            async { futures::try_join!(crud::fetch_list::<Sale>(), crud::fetch_list::<Customer>()) },
            move |(s, c)| {
                sales.set(s);
                customers.set(c);
            },
            move || {
                sales.set(Vec::new());
                customers.set(Vec::new());
            },
        );
    };

    let handle_delete = move |id: i64| delete_with_confirm::<Sale>(id, toast, fetch);

    fetch();

    let rows = Memo::new(move |_| {
        let all = customers.with(|c| build_rows(sales.get(), c));
        filter_list(all, &filter.get())
    });
    let totals = Memo::new(move |_| sales.with(|s| sale_totals(s)));
    let outstanding = Memo::new(move |_| sales.with(|s| total_outstanding(s)));

    view! {
        <div class="page">
            <PageHeader title="Sales" subtitle="Milk and dairy products sold to customers">
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
                <StatCard label="Sold" icon_name="milk" value=Signal::derive(move || format_liters(totals.get().quantity)) />
                <StatCard label="Revenue" icon_name="sales" value=Signal::derive(move || format_money(totals.get().amount)) />
                <StatCard
                    label="Outstanding"
                    icon_name="alert"
                    value=Signal::derive(move || format_money(outstanding.get()))
                    tone=Signal::derive(move || if outstanding.get() > 0.0 { StatTone::Warning } else { StatTone::Good })
                />
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=100.0>"Date"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=180.0>"Customer"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Product"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Liters"</TableHeaderCell>
                        <TableHeaderCell min_width=90.0>"Unit price"</TableHeaderCell>
                        <TableHeaderCell min_width=110.0>"Total"</TableHeaderCell>
                        <TableHeaderCell min_width=110.0>"Outstanding"</TableHeaderCell>
                        <TableHeaderCell min_width=60.0>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || rows.get()
                        key=|row| (row.sale.id, row.customer_name.clone(), row.sale.total_amount.to_bits(), row.sale.paid_amount.to_bits())
                        children=move |row| {
                            let s = row.sale;
                            let id = s.id.unwrap_or_default();
                            let unpaid = s.outstanding();
                            let has_debt = unpaid > 0.0;
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>
                                            <a href="#" class="table__link" on:click=move |e| {
                                                e.prevent_default();
                                                dialog.set(DialogState::Edit(id));
                                            }>
                                                {format_date(&s.date)}
                                            </a>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell><TableCellLayout>{row.customer_name}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{s.product}</TableCellLayout></TableCell>
                                    <TableCell class="text-right">{format_liters(s.quantity_liters)}</TableCell>
                                    <TableCellMoney value=s.unit_price />
                                    <TableCellMoney value=s.total_amount bold=true />
                                    <TableCellMoney value=unpaid bold=has_debt />
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
                    <SaleDetails
                        state=dialog.get()
                        customers=customers
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
    fn search_covers_customer_and_product() {
        let customers = vec![Customer { id: Some(3), name: "Corner Shop".into(), ..Default::default() }];
        let sales = vec![
            Sale { id: Some(1), customer_id: Some(3), date: "2024-05-01".into(), product: "Yogurt".into(), ..Default::default() },
            Sale { id: Some(2), customer_id: None, date: "2024-05-02".into(), ..Default::default() },
        ];
        let rows = build_rows(sales, &customers);
        assert_eq!(filter_list(rows.clone(), "corner").len(), 1);
        assert_eq!(filter_list(rows.clone(), "yogu").len(), 1);
        assert_eq!(filter_list(rows, "milk").len(), 1);
    }
}
