mod details;

pub use details::FeedPurchaseDetails;
use details::PurchasePageData;

use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table::{format_money, format_number_with_decimals, TableCellMoney};
use crate::shared::crud;
use crate::shared::date_utils::format_date;
use crate::shared::details::DialogState;
use crate::shared::icons::icon;
use crate::shared::list_utils::{display_ref, filter_list, names_by_id, SearchInput, Searchable};
use crate::shared::loader::{delete_with_confirm, spawn_load};
use crate::shared::toast::use_toast;
use contracts::domain::a001_supplier::Supplier;
use contracts::domain::a003_milk_reception::MilkReception;
use contracts::domain::a005_payment::Payment;
use contracts::domain::a007_feed::{FeedCompany, FeedPurchase, FeedType};
use leptos::prelude::*;
use thaw::*;

#[derive(Clone, Debug, PartialEq)]
pub struct PurchaseRow {
    pub purchase: FeedPurchase,
    pub supplier: String,
    pub company: String,
    pub feed_type: String,
}

impl Searchable for PurchaseRow {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.supplier.clone(),
            self.company.clone(),
            self.feed_type.clone(),
            self.purchase.date.clone(),
        ]
    }
}

fn build_rows(
    mut purchases: Vec<FeedPurchase>,
    suppliers: &[Supplier],
    companies: &[FeedCompany],
    feed_types: &[FeedType],
) -> Vec<PurchaseRow> {
    let supplier_names = names_by_id(suppliers, |s| s.id, |s| s.name.clone());
    let company_names = names_by_id(companies, |c| c.id, |c| c.name.clone());
    let type_names = names_by_id(feed_types, |t| t.id, |t| t.name.clone());
    purchases.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
    purchases
        .into_iter()
        .map(|purchase| PurchaseRow {
            supplier: display_ref(&supplier_names, purchase.supplier_id),
            company: display_ref(&company_names, purchase.feed_company_id),
            feed_type: display_ref(&type_names, purchase.feed_type_id),
            purchase,
        })
        .collect()
}

#[component]
pub fn FeedPurchaseList() -> impl IntoView {
    let toast = use_toast();
    let data = RwSignal::new(PurchasePageData::default());
    let loading = RwSignal::new(false);
    let (filter, set_filter) = signal(String::new());
    let dialog = RwSignal::new(DialogState::Closed);

    let fetch = move || {
        spawn_load(
            loading,
            toast,
            async {
                futures::try_join!(
                    crud::fetch_list::<FeedPurchase>(),
                    crud::fetch_list::<Supplier>(),
                    crud::fetch_list::<FeedCompany>(),
                    crud::fetch_list::<FeedType>(),
                    crud::fetch_list::<MilkReception>(),
                    crud::fetch_list::<Payment>(),
                )
            },
            move |(purchases, suppliers, companies, feed_types, receptions, payments)| {
                data.set(PurchasePageData {
                    purchases,
                    suppliers,
                    companies,
                    feed_types,
                    receptions,
                    payments,
                })
            },
            move || data.set(PurchasePageData::default()),
        );
    };

    let handle_delete = move |id: i64| delete_with_confirm::<FeedPurchase>(id, toast, fetch);

    fetch();

    let rows = Memo::new(move |_| {
        let all = data.with(|d| {
            build_rows(d.purchases.clone(), &d.suppliers, &d.companies, &d.feed_types)
        });
        filter_list(all, &filter.get())
    });
    let total_spent = Memo::new(move |_| data.with(|d| d.purchases.iter().map(|x| x.total_amount).sum::<f64>()));

    view! {
        <div class="page__section">
            <div class="page__toolbar">
                <SearchInput value=filter on_change=Callback::new(move |v| set_filter.set(v)) />
                <Button appearance=ButtonAppearance::Primary on_click=move |_| dialog.set(DialogState::New)>
                    {icon("plus")}
                    " New purchase"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch() disabled=loading>
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </div>

            <div class="stat-grid">
                <StatCard label="Purchases" icon_name="feed" value=Signal::derive(move || data.with(|d| d.purchases.len()).to_string()) />
                <StatCard label="Charged to suppliers" icon_name="payments" value=Signal::derive(move || format_money(total_spent.get())) />
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=100.0>"Date"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=160.0>"Supplier"</TableHeaderCell>
                        <TableHeaderCell min_width=140.0>"Company"</TableHeaderCell>
                        <TableHeaderCell min_width=120.0>"Feed type"</TableHeaderCell>
                        <TableHeaderCell min_width=90.0>"Quantity"</TableHeaderCell>
                        <TableHeaderCell min_width=90.0>"Price"</TableHeaderCell>
                        <TableHeaderCell min_width=110.0>"Total"</TableHeaderCell>
                        <TableHeaderCell min_width=60.0>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || rows.get()
                        key=|row| (row.purchase.id, row.supplier.clone(), row.purchase.total_amount.to_bits())
                        children=move |row| {
                            let p = row.purchase;
                            let id = p.id.unwrap_or_default();
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
                                    <TableCell><TableCellLayout>{row.supplier}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{row.company}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{row.feed_type}</TableCellLayout></TableCell>
                                    <TableCell class="text-right">{format_number_with_decimals(p.quantity, 2)}</TableCell>
                                    <TableCellMoney value=p.unit_price />
                                    <TableCellMoney value=p.total_amount bold=true />
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
                    <FeedPurchaseDetails
                        state=dialog.get()
                        data=data
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
    fn rows_resolve_every_reference() {
        let suppliers = vec![Supplier { id: Some(1), name: "Green".into(), ..Default::default() }];
        let companies = vec![FeedCompany { id: Some(2), name: "AgroFeed".into(), ..Default::default() }];
        let types = vec![FeedType { id: Some(3), name: "Bran".into(), ..Default::default() }];
        let purchases = vec![
            FeedPurchase {
                id: Some(1),
                supplier_id: Some(1),
                feed_company_id: Some(2),
                feed_type_id: Some(3),
                date: "2024-07-01".into(),
                ..Default::default()
            },
            FeedPurchase {
                id: Some(2),
                supplier_id: Some(9),
                date: "2024-07-05".into(),
                ..Default::default()
            },
        ];
        let rows = build_rows(purchases, &suppliers, &companies, &types);
        assert_eq!(rows[0].supplier, "#9");
        assert_eq!(rows[0].company, "—");
        assert_eq!(rows[1].supplier, "Green");
        assert_eq!(rows[1].company, "AgroFeed");
        assert_eq!(rows[1].feed_type, "Bran");
    }
}
