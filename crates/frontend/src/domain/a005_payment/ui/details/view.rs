use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::date_utils::today_iso;
use crate::shared::details::{DetailsViewModel, DialogState, RecordDialog};
use crate::shared::form::{
    bind, bind_enum, bind_number, bind_optional_text, bind_ref, enum_options, ref_options,
};
use contracts::domain::a001_supplier::Supplier;
use contracts::domain::a002_customer::Customer;
use contracts::domain::a005_payment::Payment;
use contracts::enums::{PaymentDirection, PaymentMethod};
use leptos::prelude::*;

/// Switch direction and drop the counterparty that no longer applies
fn set_direction(form: &mut Payment, direction: PaymentDirection) {
    form.direction = direction;
    match direction {
        PaymentDirection::Incoming => form.supplier_id = None,
        PaymentDirection::Outgoing => form.customer_id = None,
    }
}

#[component]
pub fn PaymentDetails(
    state: DialogState,
    #[prop(into)] suppliers: Signal<Vec<Supplier>>,
    #[prop(into)] customers: Signal<Vec<Customer>>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = DetailsViewModel::with_defaults(Payment {
        date: today_iso(),
        ..Default::default()
    });
    vm.load(state);
    let form = vm.form;

    let is_outgoing = move || form.with(|f| f.direction == PaymentDirection::Outgoing);
    let supplier_options = Signal::derive(move || {
        suppliers.with(|list| ref_options(list, |s| s.id, |s| s.name.clone(), "Select supplier"))
    });
    let customer_options = Signal::derive(move || {
        customers.with(|list| ref_options(list, |c| c.id, |c| c.name.clone(), "Select customer"))
    });

    let (direction, set_direction_cb) = bind_enum(form, |f| f.direction, set_direction);
    let (method, set_method) = bind_enum(form, |f| f.method, |f, v| f.method = v);
    let (supplier, set_supplier) = bind_ref(form, |f| f.supplier_id, |f, v| f.supplier_id = v);
    let (customer, set_customer) = bind_ref(form, |f| f.customer_id, |f, v| f.customer_id = v);
    let (date, set_date) = bind(form, |f| f.date.clone(), |f, v| f.date = v);
    let (amount, set_amount) = bind_number(form, |f| f.amount, |f, v| f.amount = v);
    let (reference, set_reference) = bind(form, |f| f.reference.clone(), |f, v| f.reference = v);
    let (notes, set_notes) = bind_optional_text(form, |f| f.notes.clone(), |f, v| f.notes = v);

    view! {
        <RecordDialog vm=vm on_saved=on_saved on_close=on_close>
            <div class="form__row">
                <Select label="Direction" value=direction on_change=set_direction_cb options={enum_options::<PaymentDirection>()} />
                <Select label="Method" value=method on_change=set_method options={enum_options::<PaymentMethod>()} />
            </div>
            <Show
                when=is_outgoing
                fallback=move || view! {
                    <Select label="Customer" value=customer on_change=set_customer options=customer_options required=true />
                }
            >
                <Select label="Supplier" value=supplier on_change=set_supplier options=supplier_options required=true />
            </Show>
            <div class="form__row">
                <Input label="Date" input_type="date" value=date on_input=set_date required=true />
                <Input label="Amount" input_type="number" value=amount on_input=set_amount required=true />
            </div>
            <Input label="Reference" value=reference on_input=set_reference placeholder="Transfer or check number" />
            <Textarea label="Notes" value=notes on_input=set_notes />
        </RecordDialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_change_clears_other_counterparty() {
        let mut p = Payment {
            supplier_id: Some(1),
            customer_id: Some(2),
            ..Default::default()
        };
        set_direction(&mut p, PaymentDirection::Outgoing);
        assert_eq!((p.supplier_id, p.customer_id), (Some(1), None));

        p.customer_id = Some(2);
        set_direction(&mut p, PaymentDirection::Incoming);
        assert_eq!((p.supplier_id, p.customer_id), (None, Some(2)));
        assert_eq!(p.direction, PaymentDirection::Incoming);
    }
}
