use crate::domain::a002_customer::ui::details::CustomerDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::table::{format_money, TableCellMoney};
use crate::shared::crud;
use crate::shared::details::DialogState;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, SearchInput, Searchable};
use crate::shared::loader::{delete_with_confirm, spawn_load};
use crate::shared::toast::use_toast;
use contracts::domain::a002_customer::Customer;
use contracts::domain::a004_sale::{outstanding_by_customer, Sale};
use contracts::enums::CodedEnum;
use leptos::prelude::*;
use thaw::*;

#[derive(Clone, Debug, PartialEq)]
pub struct CustomerRow {
    pub customer: Customer,
    pub outstanding: f64,
}

impl CustomerRow {
    pub fn over_limit(&self) -> bool {
        self.customer.credit_limit > 0.0 && self.outstanding > self.customer.credit_limit
    }
}

impl Searchable for CustomerRow {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.customer.name.clone(),
            self.customer.phone.clone(),
            self.customer.address.clone(),
        ]
    }
}

fn build_rows(customers: Vec<Customer>, sales: &[Sale]) -> Vec<CustomerRow> {
    let outstanding = outstanding_by_customer(sales);
    customers
        .into_iter()
        .map(|customer| CustomerRow {
            outstanding: customer
                .id
                .and_then(|id| outstanding.get(&id).copied())
                .unwrap_or(0.0),
            customer,
        })
        .collect()
}

#[component]
pub fn CustomerList() -> impl IntoView {
    let toast = use_toast();
    let rows = RwSignal::new(Vec::<CustomerRow>::new());
    let loading = RwSignal::new(false);
    let (filter, set_filter) = signal(String::new());
    let dialog = RwSignal::new(DialogState::Closed);

    let fetch = move || {
        spawn_load(
            loading,
            toast,
            async { futures::try_join!(crud::fetch_list::<Customer>(), crud::fetch_list::<Sale>()) },
            move |(customers, sales)| rows.set(build_rows(customers, &sales)),
            move || rows.set(Vec::new()),
        );
    };

    let handle_delete = move |id: i64| delete_with_confirm::<Customer>(id, toast, fetch);

    fetch();

    let visible = Memo::new(move |_| filter_list(rows.get(), &filter.get()));
    let total_outstanding = Signal::derive(move || {
        format_money(rows.with(|r| r.iter().map(|row| row.outstanding).sum::<f64>()))
    });
    let over_limit = Memo::new(move |_| rows.with(|r| r.iter().filter(|row| row.over_limit()).count()));

    view! {
        <div class="page">
            <PageHeader title="Customers" subtitle="Buyers and unpaid balances">
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
                <StatCard label="Customers" icon_name="customers" value=Signal::derive(move || rows.with(|r| r.len()).to_string()) />
                <StatCard label="Outstanding" icon_name="payments" value=total_outstanding />
                <StatCard
                    label="Over credit limit"
                    icon_name="alert"
                    value=Signal::derive(move || over_limit.get().to_string())
                    tone=Signal::derive(move || if over_limit.get() > 0 { StatTone::Warning } else { StatTone::Neutral })
                />
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=true min_width=200.0>"Name"</TableHeaderCell>
                        <TableHeaderCell min_width=120.0>"Phone"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Type"</TableHeaderCell>
                        <TableHeaderCell min_width=120.0>"Credit limit"</TableHeaderCell>
                        <TableHeaderCell min_width=120.0>"Outstanding"</TableHeaderCell>
                        <TableHeaderCell min_width=60.0>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || visible.get()
                        key=|row| (row.customer.id, row.customer.name.clone(), row.outstanding.to_bits())
                        children=move |row| {
                            let id = row.customer.id.unwrap_or_default();
                            let over = row.over_limit();
                            let customer = row.customer;
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>
                                            <a href="#" class="table__link" on:click=move |e| {
                                                e.prevent_default();
                                                dialog.set(DialogState::Edit(id));
                                            }>
                                                {customer.name}
                                            </a>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell><TableCellLayout>{customer.phone}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{customer.customer_type.display_name()}</TableCellLayout></TableCell>
                                    <TableCellMoney value=customer.credit_limit />
                                    <TableCellMoney value=row.outstanding bold=over />
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
                    <CustomerDetails
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

    #[test]
    fn rows_flag_customers_over_their_limit() {
        let customers = vec![
            Customer { id: Some(1), name: "Corner shop".into(), credit_limit: 50.0, ..Default::default() },
            Customer { id: Some(2), name: "Cafe".into(), ..Default::default() },
        ];
        let sales = vec![
            Sale { customer_id: Some(1), total_amount: 80.0, ..Default::default() },
            Sale { customer_id: Some(2), total_amount: 500.0, ..Default::default() },
        ];
        let rows = build_rows(customers, &sales);
        assert_eq!(rows[0].outstanding, 80.0);
        assert!(rows[0].over_limit());
        // no limit configured
        assert!(!rows[1].over_limit());
    }
}
