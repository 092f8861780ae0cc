use crate::shared::components::table::format_money;
use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::date_utils::today_iso;
use crate::shared::details::{DetailsViewModel, DialogState, RecordDialog};
use crate::shared::form::{bind, bind_number, bind_optional_text, bind_ref, ref_options};
use contracts::domain::a001_supplier::Supplier;
use contracts::domain::a003_milk_reception::MilkReception;
use contracts::domain::a005_payment::Payment;
use contracts::domain::a007_feed::{FeedCompany, FeedPurchase, FeedType, SupplierBalance};
use contracts::domain::common::aggregate_id::{parse_ref, ref_to_string};
use leptos::prelude::*;

/// Select a feed type; an empty price is pre-filled with the type's default price
fn select_feed_type(form: &mut FeedPurchase, feed_type: Option<&FeedType>) {
    form.feed_type_id = feed_type.and_then(|t| t.id);
    if let Some(t) = feed_type {
        if form.unit_price <= 0.0 {
            form.unit_price = t.default_price;
        }
    }
    form.refresh_total();
}

/// Supplier balance with the edited purchase itself left out
fn balance_before(
    purchase: &FeedPurchase,
    receptions: &[MilkReception],
    payments: &[Payment],
    purchases: &[FeedPurchase],
) -> Option<SupplierBalance> {
    let supplier_id = purchase.supplier_id?;
    let others: Vec<FeedPurchase> = purchases
        .iter()
        .filter(|p| purchase.id.is_none() || p.id != purchase.id)
        .cloned()
        .collect();
    Some(SupplierBalance::compute(supplier_id, receptions, payments, &others))
}

/// Purchase must fit into what the business still owes the supplier
fn check_balance(
    purchase: &FeedPurchase,
    receptions: &[MilkReception],
    payments: &[Payment],
    purchases: &[FeedPurchase],
) -> Result<(), String> {
    match balance_before(purchase, receptions, payments, purchases) {
        Some(balance) => balance
            .check_purchase(purchase.computed_total())
            .map_err(|e| e.to_string()),
        None => Err("Supplier must be selected".to_string()),
    }
}

/// Everything one load of the purchases page fetches
///
/// Replaced as a whole: a failed reload resets it to the default, so the
/// balance check never mixes fresh and stale lists.
#[derive(Clone, Debug, Default)]
pub struct PurchasePageData {
    pub purchases: Vec<FeedPurchase>,
    pub suppliers: Vec<Supplier>,
    pub companies: Vec<FeedCompany>,
    pub feed_types: Vec<FeedType>,
    pub receptions: Vec<MilkReception>,
    pub payments: Vec<Payment>,
}

impl PurchasePageData {
    fn available(&self, purchase: &FeedPurchase) -> Option<f64> {
        balance_before(purchase, &self.receptions, &self.payments, &self.purchases)
            .map(|b| b.balance)
    }

    pub fn check(&self, purchase: &FeedPurchase) -> Result<(), String> {
        check_balance(purchase, &self.receptions, &self.payments, &self.purchases)
    }
}

#[component]
pub fn FeedPurchaseDetails(
    state: DialogState,
    #[prop(into)] data: Signal<PurchasePageData>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = DetailsViewModel::with_defaults(FeedPurchase {
        date: today_iso(),
        ..Default::default()
    });
    vm.load(state);
    let form = vm.form;

    let check = Callback::new(move |purchase: FeedPurchase| {
        data.with_untracked(|d| d.check(&purchase))
    });

    let available = Memo::new(move |_| {
        let current = form.get();
        data.with(|d| d.available(&current))
    });

    let (supplier, set_supplier) = bind_ref(form, |f| f.supplier_id, |f, v| f.supplier_id = v);
    let (company, set_company) = bind_ref(form, |f| f.feed_company_id, |f, v| f.feed_company_id = v);
    let feed_type_value = Signal::derive(move || ref_to_string(form.with(|f| f.feed_type_id)));
    let set_feed_type = Callback::new(move |code: String| {
        let id = parse_ref(&code);
        data.with_untracked(|d| {
            let feed_type = d.feed_types.iter().find(|t| t.id.is_some() && t.id == id);
            form.update(|f| select_feed_type(f, feed_type));
        });
    });

    let supplier_options = Signal::derive(move || {
        data.with(|d| {
            ref_options(&d.suppliers, |s| s.id, |s| s.name.clone(), "Select supplier")
        })
    });
    let company_options = Signal::derive(move || {
        data.with(|d| {
            ref_options(&d.companies, |c| c.id, |c| c.name.clone(), "Select company")
        })
    });
    let type_options = Signal::derive(move || {
        data.with(|d| {
            ref_options(
                &d.feed_types,
                |t| t.id,
                |t| format!("{} ({})", t.name, t.unit),
                "Select feed type",
            )
        })
    });

    let (date, set_date) = bind(form, |f| f.date.clone(), |f, v| f.date = v);
    let (quantity, set_quantity) = bind_number(form, |f| f.quantity, |f, v| {
        f.quantity = v;
        f.refresh_total();
    });
    let (price, set_price) = bind_number(form, |f| f.unit_price, |f, v| {
        f.unit_price = v;
        f.refresh_total();
    });
    let (notes, set_notes) = bind_optional_text(form, |f| f.notes.clone(), |f, v| f.notes = v);

    view! {
        <RecordDialog vm=vm on_saved=on_saved on_close=on_close check=check>
            <Select label="Supplier" value=supplier on_change=set_supplier options=supplier_options required=true />
            {move || available.get().map(|balance| view! {
                <div class="form__hint">"Available balance: " {format_money(balance)}</div>
            })}
            <div class="form__row">
                <Select label="Feed company" value=company on_change=set_company options=company_options required=true />
                <Select label="Feed type" value=feed_type_value on_change=set_feed_type options=type_options required=true />
            </div>
            <div class="form__row">
                <Input label="Date" input_type="date" value=date on_input=set_date required=true />
                <Input label="Quantity" input_type="number" value=quantity on_input=set_quantity required=true />
                <Input label="Unit price" input_type="number" value=price on_input=set_price required=true />
            </div>
            <div class="form__total">
                "Total: " {move || format_money(form.with(|f| f.computed_total()))}
            </div>
            <Textarea label="Notes" value=notes on_input=set_notes />
        </RecordDialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::PaymentDirection;

    fn reception(total: f64) -> MilkReception {
        MilkReception {
            supplier_id: Some(1),
            total_amount: total,
            ..Default::default()
        }
    }

    fn purchase(id: Option<i64>, quantity: f64, unit_price: f64) -> FeedPurchase {
        let mut p = FeedPurchase {
            id,
            supplier_id: Some(1),
            quantity,
            unit_price,
            ..Default::default()
        };
        p.refresh_total();
        p
    }

    #[test]
    fn purchase_blocked_when_balance_is_short() {
        let receptions = vec![reception(300.0)];
        let payments = vec![Payment {
            supplier_id: Some(1),
            direction: PaymentDirection::Outgoing,
            amount: 100.0,
            ..Default::default()
        }];
        let existing = vec![purchase(Some(7), 100.0, 1.5)];

        assert!(check_balance(&purchase(None, 50.0, 1.0), &receptions, &payments, &existing).is_ok());
        let err = check_balance(&purchase(None, 60.0, 1.0), &receptions, &payments, &existing)
            .unwrap_err();
        assert!(err.starts_with("Insufficient supplier balance"));
    }

    #[test]
    fn edited_purchase_does_not_count_against_itself() {
        let receptions = vec![reception(200.0)];
        let existing = vec![purchase(Some(7), 100.0, 1.5)];
        let edited = purchase(Some(7), 100.0, 2.0);
        assert!(check_balance(&edited, &receptions, &[], &existing).is_ok());
    }

    #[test]
    fn reset_page_data_blocks_every_purchase() {
        let loaded = PurchasePageData {
            suppliers: vec![Supplier { id: Some(1), name: "Green".into(), ..Default::default() }],
            receptions: vec![reception(300.0)],
            purchases: vec![purchase(Some(7), 250.0, 1.0)],
            ..Default::default()
        };
        let new_purchase = purchase(None, 200.0, 1.0);
        assert_eq!(loaded.available(&new_purchase), Some(50.0));
        assert!(loaded.check(&new_purchase).unwrap_err().starts_with("Insufficient"));

        let reset = PurchasePageData::default();
        assert_eq!(reset.available(&new_purchase), Some(0.0));
        assert!(reset.check(&new_purchase).unwrap_err().starts_with("Insufficient"));
        assert_eq!(
            reset.check(&FeedPurchase::default()).unwrap_err(),
            "Supplier must be selected"
        );
    }

    #[test]
    fn feed_type_fills_empty_price() {
        let bran = FeedType {
            id: Some(3),
            name: "Bran".into(),
            default_price: 0.8,
            ..Default::default()
        };
        let mut form = FeedPurchase {
            quantity: 10.0,
            ..Default::default()
        };
        select_feed_type(&mut form, Some(&bran));
        assert_eq!(form.feed_type_id, Some(3));
        assert!((form.total_amount - 8.0).abs() < 1e-9);

        form.unit_price = 1.0;
        select_feed_type(&mut form, Some(&bran));
        assert_eq!(form.unit_price, 1.0);
    }
}
