use crate::shared::components::table::format_money;
use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::date_utils::today_iso;
use crate::shared::details::{DetailsViewModel, DialogState, RecordDialog};
use crate::shared::form::{bind, bind_number, bind_optional_text, bind_ref, ref_options};
use contracts::domain::a002_customer::Customer;
use contracts::domain::a004_sale::Sale;
use leptos::prelude::*;

#[component]
pub fn SaleDetails(
    state: DialogState,
    #[prop(into)] customers: Signal<Vec<Customer>>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = DetailsViewModel::with_defaults(Sale {
        date: today_iso(),
        ..Default::default()
    });
    vm.load(state);
    let form = vm.form;

    let customer_options = Signal::derive(move || {
        customers.with(|list| ref_options(list, |c| c.id, |c| c.name.clone(), "Select customer"))
    });
    let (customer, set_customer) = bind_ref(form, |f| f.customer_id, |f, v| f.customer_id = v);
    let (date, set_date) = bind(form, |f| f.date.clone(), |f, v| f.date = v);
    let (product, set_product) = bind(form, |f| f.product.clone(), |f, v| f.product = v);
    let (quantity, set_quantity) = bind_number(form, |f| f.quantity_liters, |f, v| {
        f.quantity_liters = v;
        f.refresh_total();
    });
    let (price, set_price) = bind_number(form, |f| f.unit_price, |f, v| {
        f.unit_price = v;
        f.refresh_total();
    });
    let (paid, set_paid) = bind_number(form, |f| f.paid_amount, |f, v| f.paid_amount = v);
    let (notes, set_notes) = bind_optional_text(form, |f| f.notes.clone(), |f, v| f.notes = v);

    view! {
        <RecordDialog vm=vm on_saved=on_saved on_close=on_close>
            <Select label="Customer" value=customer on_change=set_customer options=customer_options required=true />
            <div class="form__row">
                <Input label="Date" input_type="date" value=date on_input=set_date required=true />
                <Input label="Product" value=product on_input=set_product />
            </div>
            <div class="form__row">
                <Input label="Quantity, L" input_type="number" value=quantity on_input=set_quantity required=true />
                <Input label="Unit price" input_type="number" value=price on_input=set_price />
                <Input label="Paid" input_type="number" value=paid on_input=set_paid />
            </div>
            <div class="form__total">
                "Total: " {move || format_money(form.with(|f| f.computed_total()))}
                " · Outstanding: " {move || format_money(form.with(|f| (f.computed_total() - f.paid_amount).max(0.0)))}
            </div>
            <Textarea label="Notes" value=notes on_input=set_notes />
        </RecordDialog>
    }
}
