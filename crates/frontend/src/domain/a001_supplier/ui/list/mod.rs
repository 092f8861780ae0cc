use crate::domain::a001_supplier::ui::details::SupplierDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table::{format_money, TableCellMoney};
use crate::shared::components::ui::Badge;
use crate::shared::crud;
use crate::shared::details::DialogState;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, SearchInput, Searchable};
use crate::shared::loader::{delete_with_confirm, spawn_load};
use crate::shared::toast::use_toast;
use contracts::domain::a001_supplier::Supplier;
use contracts::domain::a003_milk_reception::MilkReception;
use contracts::domain::a005_payment::Payment;
use contracts::domain::a007_feed::{balances_for, FeedPurchase};
use leptos::prelude::*;
use thaw::*;

/// Supplier with the balance the business owes them
#[derive(Clone, Debug, PartialEq)]
pub struct SupplierRow {
    pub supplier: Supplier,
    pub balance: f64,
}

impl Searchable for SupplierRow {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.supplier.name.clone(),
            self.supplier.phone.clone(),
            self.supplier.village.clone(),
        ]
    }
}

fn build_rows(
    suppliers: Vec<Supplier>,
    receptions: &[MilkReception],
    payments: &[Payment],
    purchases: &[FeedPurchase],
) -> Vec<SupplierRow> {
    let balances = balances_for(&suppliers, receptions, payments, purchases);
    suppliers
        .into_iter()
        .map(|supplier| {
            let balance = supplier
                .id
                .and_then(|id| balances.get(&id))
                .map(|b| b.balance)
                .unwrap_or(0.0);
            SupplierRow { supplier, balance }
        })
        .collect()
}

#[component]
pub fn SupplierList() -> impl IntoView {
    let toast = use_toast();
    let rows = RwSignal::new(Vec::<SupplierRow>::new());
    let loading = RwSignal::new(false);
    let (filter, set_filter) = signal(String::new());
    let dialog = RwSignal::new(DialogState::Closed);

    let fetch = move || {
        spawn_load(
            loading,
            toast,
            async {
                futures::try_join!(
                    crud::fetch_list::<Supplier>(),
                    crud::fetch_list::<MilkReception>(),
                    crud::fetch_list::<Payment>(),
                    crud::fetch_list::<FeedPurchase>(),
                )
            },
            move |(suppliers, receptions, payments, purchases)| {
                rows.set(build_rows(suppliers, &receptions, &payments, &purchases));
            },
            move || rows.set(Vec::new()),
        );
    };

    let handle_delete = move |id: i64| {
        delete_with_confirm::<Supplier>(id, toast, fetch);
    };

    fetch();

    let visible = Memo::new(move |_| filter_list(rows.get(), &filter.get()));
    let active_count = Signal::derive(move || {
        rows.with(|r| r.iter().filter(|row| row.supplier.is_active).count()).to_string()
    });
    let total_owed = Signal::derive(move || {
        format_money(rows.with(|r| r.iter().map(|row| row.balance.max(0.0)).sum::<f64>()))
    });

    view! {
        <div class="page">
            <PageHeader title="Suppliers" subtitle="Milk producers and their balances">
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
                <StatCard label="Suppliers" icon_name="suppliers" value=Signal::derive(move || rows.with(|r| r.len()).to_string()) />
                <StatCard label="Active" icon_name="suppliers" value=active_count />
                <StatCard label="Owed to suppliers" icon_name="payments" value=total_owed />
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=true min_width=200.0>"Name"</TableHeaderCell>
                        <TableHeaderCell min_width=120.0>"Phone"</TableHeaderCell>
                        <TableHeaderCell min_width=120.0>"Village"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Price / L"</TableHeaderCell>
                        <TableHeaderCell min_width=120.0>"Balance"</TableHeaderCell>
                        <TableHeaderCell min_width=80.0>"Status"</TableHeaderCell>
                        <TableHeaderCell min_width=60.0>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || visible.get()
                        key=|row| (row.supplier.id, row.supplier.name.clone(), row.balance.to_bits())
                        children=move |row| {
                            let id = row.supplier.id.unwrap_or_default();
                            let supplier = row.supplier;
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>
                                            <a href="#" class="table__link" on:click=move |e| {
                                                e.prevent_default();
                                                dialog.set(DialogState::Edit(id));
                                            }>
                                                {supplier.name}
                                            </a>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell><TableCellLayout>{supplier.phone}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{supplier.village}</TableCellLayout></TableCell>
                                    <TableCellMoney value=supplier.price_per_liter />
                                    <TableCellMoney value=row.balance color_by_sign=true bold=true />
                                    <TableCell>
                                        <TableCellLayout>
                                            {if supplier.is_active {
                                                view! { <Badge variant="success">"Active"</Badge> }.into_any()
                                            } else {
                                                view! { <Badge>"Inactive"</Badge> }.into_any()
                                            }}
                                        </TableCellLayout>
                                    </TableCell>
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
                    <SupplierDetails
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
    use contracts::enums::PaymentDirection;

    fn supplier(id: i64, name: &str) -> Supplier {
        Supplier {
            id: Some(id),
            name: name.into(),
            ..Default::default()
        }
    }

    #[test]
    fn rows_carry_supplier_balances() {
        let receptions = vec![MilkReception {
            supplier_id: Some(1),
            quantity_liters: 100.0,
            price_per_liter: 2.0,
            total_amount: 200.0,
            ..Default::default()
        }];
        let payments = vec![Payment {
            supplier_id: Some(1),
            amount: 50.0,
            direction: PaymentDirection::Outgoing,
            ..Default::default()
        }];
        let rows = build_rows(
            vec![supplier(1, "Green"), supplier(2, "Hilltop")],
            &receptions,
            &payments,
            &[],
        );
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].balance, 150.0);
        assert_eq!(rows[1].balance, 0.0);
    }
}
