use super::receipt::download_receipt;
use crate::domain::a005_payment::ui::details::PaymentDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::table::{format_money, TableCellMoney};
use crate::shared::components::ui::Badge;
use crate::shared::crud;
use crate::shared::date_utils::format_date;
use crate::shared::details::DialogState;
use crate::shared::icons::icon;
use crate::shared::list_utils::{display_ref, filter_list, names_by_id, SearchInput, Searchable};
use crate::shared::loader::{delete_with_confirm, spawn_load};
use crate::shared::toast::use_toast;
use contracts::domain::a001_supplier::Supplier;
use contracts::domain::a002_customer::Customer;
use contracts::domain::a005_payment::Payment;
use contracts::enums::{CodedEnum, PaymentDirection};
use leptos::prelude::*;
use thaw::*;

#[derive(Clone, Debug, PartialEq)]
pub struct PaymentRow {
    pub payment: Payment,
    /// Supplier for outgoing payments, customer for incoming ones
    pub counterparty: String,
}

impl Searchable for PaymentRow {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.counterparty.clone(),
            self.payment.reference.clone(),
            self.payment.date.clone(),
        ]
    }
}

/// Incoming, outgoing and net cash of a list of payments
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CashTotals {
    pub incoming: f64,
    pub outgoing: f64,
}

impl CashTotals {
    pub fn of(payments: &[Payment]) -> Self {
        payments.iter().fold(Self::default(), |mut acc, p| {
            match p.direction {
                PaymentDirection::Incoming => acc.incoming += p.amount,
                PaymentDirection::Outgoing => acc.outgoing += p.amount,
            }
            acc
        })
    }

    pub fn net(&self) -> f64 {
        self.incoming - self.outgoing
    }
}

fn build_rows(
    mut payments: Vec<Payment>,
    suppliers: &[Supplier],
    customers: &[Customer],
) -> Vec<PaymentRow> {
    let supplier_names = names_by_id(suppliers, |s| s.id, |s| s.name.clone());
    let customer_names = names_by_id(customers, |c| c.id, |c| c.name.clone());
    payments.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
    payments
        .into_iter()
        .map(|payment| {
            let counterparty = match payment.direction {
                PaymentDirection::Outgoing => display_ref(&supplier_names, payment.supplier_id),
                PaymentDirection::Incoming => display_ref(&customer_names, payment.customer_id),
            };
            PaymentRow {
                payment,
                counterparty,
            }
        })
        .collect()
}

#[component]
pub fn PaymentList() -> impl IntoView {
    let toast = use_toast();
    let payments = RwSignal::new(Vec::<Payment>::new());
    let suppliers = RwSignal::new(Vec::<Supplier>::new());
    let customers = RwSignal::new(Vec::<Customer>::new());
    let loading = RwSignal::new(false);
    let (filter, set_filter) = signal(String::new());
    let dialog = RwSignal::new(DialogState::Closed);

    let fetch = move || {
        spawn_load(
            loading,
            toast,
            async {
                futures::try_join!(
                    crud::fetch_list::<Payment>(),
                    crud::fetch_list::<Supplier>(),
                    crud::fetch_list::<Customer>(),
                )
            },
            move |(p, s, c)| {
                payments.set(p);
                suppliers.set(s);
                customers.set(c);
            },
            move || {
                payments.set(Vec::new());
                suppliers.set(Vec::new());
                customers.set(Vec::new());
            },
        );
    };

    let handle_delete = move |id: i64| delete_with_confirm::<Payment>(id, toast, fetch);

    fetch();

    let rows = Memo::new(move |_| {
        let all = suppliers.with(|s| customers.with(|c| build_rows(payments.get(), s, c)));
        filter_list(all, &filter.get())
    });
    let cash = Memo::new(move |_| payments.with(|p| CashTotals::of(p)));

    view! {
        <div class="page">
            <PageHeader title="Payments" subtitle="Customer receipts and supplier payouts">
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
                <StatCard label="Incoming" icon_name="trending-up" value=Signal::derive(move || format_money(cash.get().incoming)) />
                <StatCard label="Outgoing" icon_name="payments" value=Signal::derive(move || format_money(cash.get().outgoing)) />
                <StatCard
                    label="Net cash flow"
                    icon_name="analytics"
                    value=Signal::derive(move || format_money(cash.get().net()))
                    tone=Signal::derive(move || if cash.get().net() < 0.0 { StatTone::Bad } else { StatTone::Good })
                />
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=100.0>"Date"</TableHeaderCell>
                        <TableHeaderCell min_width=90.0>"Direction"</TableHeaderCell>
                        <TableHeaderCell min_width=110.0>"Method"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=180.0>"Counterparty"</TableHeaderCell>
                        <TableHeaderCell min_width=120.0>"Reference"</TableHeaderCell>
                        <TableHeaderCell min_width=110.0>"Amount"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || rows.get()
                        key=|row| (row.payment.id, row.counterparty.clone(), row.payment.amount.to_bits())
                        children=move |row| {
                            let p = row.payment;
                            let id = p.id.unwrap_or_default();
                            let direction = if p.direction == PaymentDirection::Incoming {
                                view! { <Badge variant="success">{p.direction.display_name()}</Badge> }.into_any()
                            } else {
                                view! { <Badge variant="warning">{p.direction.display_name()}</Badge> }.into_any()
                            };
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>
                                            <a href="#" class="table__link" on:click=move |e| {
                                                e.prevent_default();
                                                dialog.set(DialogState::Edit(id));
                                            }>
                                                {format_date(&p.date)}
                                            </a>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell><TableCellLayout>{direction}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{p.method.display_name()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{row.counterparty}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{p.reference}</TableCellLayout></TableCell>
                                    <TableCellMoney value=p.amount bold=true />
                                    <TableCell>
                                        <Button
                                            size=ButtonSize::Small
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| download_receipt(id, toast)
                                        >
                                            {icon("download")}
                                        </Button>
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
                    <PaymentDetails
                        state=dialog.get()
                        suppliers=suppliers
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

    fn payment(direction: PaymentDirection, amount: f64) -> Payment {
        Payment {
            direction,
            amount,
            ..Default::default()
        }
    }

    #[test]
    fn cash_totals_split_by_direction() {
        let cash = CashTotals::of(&[
            payment(PaymentDirection::Incoming, 120.0),
            payment(PaymentDirection::Outgoing, 200.0),
            payment(PaymentDirection::Incoming, 30.0),
        ]);
        assert_eq!(cash.incoming, 150.0);
        assert_eq!(cash.outgoing, 200.0);
        assert_eq!(cash.net(), -50.0);
        assert_eq!(CashTotals::of(&[]).net(), 0.0);
    }

    #[test]
    fn counterparty_follows_direction() {
        let suppliers = vec![Supplier { id: Some(1), name: "Green".into(), ..Default::default() }];
        let customers = vec![Customer { id: Some(1), name: "Cafe".into(), ..Default::default() }];
        let payments = vec![
            Payment { id: Some(1), supplier_id: Some(1), direction: PaymentDirection::Outgoing, ..Default::default() },
            Payment { id: Some(2), customer_id: Some(1), direction: PaymentDirection::Incoming, ..Default::default() },
        ];
        let rows = build_rows(payments, &suppliers, &customers);
        let names: Vec<&str> = rows.iter().map(|r| r.counterparty.as_str()).collect();
        assert_eq!(names, vec!["Cafe", "Green"]);
    }
}
