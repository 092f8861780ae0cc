use crate::shared::components::table::format_money;
use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::date_utils::today_iso;
use crate::shared::details::{DetailsViewModel, DialogState, RecordDialog};
use crate::shared::form::{
    bind, bind_enum, bind_number, bind_optional_number, bind_optional_text, enum_options,
    ref_options,
};
use contracts::domain::a001_supplier::Supplier;
use contracts::domain::a003_milk_reception::MilkReception;
use contracts::domain::common::aggregate_id::{parse_ref, ref_to_string};
use contracts::enums::Shift;
use leptos::prelude::*;

/// Select a supplier; an empty price is pre-filled with the supplier's rate
fn select_supplier(form: &mut MilkReception, supplier: Option<&Supplier>) {
    form.supplier_id = supplier.and_then(|s| s.id);
    if let Some(s) = supplier {
        if form.price_per_liter <= 0.0 {
            form.price_per_liter = s.price_per_liter;
        }
    }
    form.refresh_total();
}

#[component]
pub fn MilkReceptionDetails(
    state: DialogState,
    #[prop(into)] suppliers: Signal<Vec<Supplier>>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = DetailsViewModel::with_defaults(MilkReception {
        date: today_iso(),
        ..Default::default()
    });
    vm.load(state);
    let form = vm.form;

    let supplier_value = Signal::derive(move || ref_to_string(form.with(|f| f.supplier_id)));
    let set_supplier = Callback::new(move |code: String| {
        let id = parse_ref(&code);
        let list = suppliers.get_untracked();
        let supplier = list.iter().find(|s| s.id.is_some() && s.id == id);
        form.update(|f| select_supplier(f, supplier));
    });
    let supplier_options = Signal::derive(move || {
        suppliers.with(|list| {
            ref_options(list, |s| s.id, |s| s.name.clone(), "Select supplier")
        })
    });

    let (date, set_date) = bind(form, |f| f.date.clone(), |f, v| f.date = v);
    let (shift, set_shift) = bind_enum(form, |f| f.shift, |f, v| f.shift = v);
    let (quantity, set_quantity) = bind_number(form, |f| f.quantity_liters, |f, v| {
        f.quantity_liters = v;
        f.refresh_total();
    });
    let (price, set_price) = bind_number(form, |f| f.price_per_liter, |f, v| {
        f.price_per_liter = v;
        f.refresh_total();
    });
    let (fat, set_fat) = bind_optional_number(form, |f| f.fat_percentage, |f, v| f.fat_percentage = v);
    let (notes, set_notes) = bind_optional_text(form, |f| f.notes.clone(), |f, v| f.notes = v);

    view! {
        <RecordDialog vm=vm on_saved=on_saved on_close=on_close>
            <Select label="Supplier" value=supplier_value on_change=set_supplier options=supplier_options required=true />
            <div class="form__row">
                <Input label="Date" input_type="date" value=date on_input=set_date required=true />
                <Select label="Shift" value=shift on_change=set_shift options={enum_options::<Shift>()} />
            </div>
            <div class="form__row">
                <Input label="Quantity, L" input_type="number" value=quantity on_input=set_quantity required=true />
                <Input label="Price per liter" input_type="number" value=price on_input=set_price />
                <Input label="Fat, %" input_type="number" value=fat on_input=set_fat />
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

    #[test]
    fn supplier_rate_fills_empty_price_only() {
        let supplier = Supplier {
            id: Some(4),
            price_per_liter: 0.45,
            ..Default::default()
        };
        let mut form = MilkReception {
            quantity_liters: 100.0,
            ..Default::default()
        };
        select_supplier(&mut form, Some(&supplier));
        assert_eq!(form.supplier_id, Some(4));
        assert_eq!(form.price_per_liter, 0.45);
        assert!((form.total_amount - 45.0).abs() < 1e-9);

        form.price_per_liter = 0.5;
        select_supplier(&mut form, Some(&supplier));
        assert_eq!(form.price_per_liter, 0.5);

        select_supplier(&mut form, None);
        assert_eq!(form.supplier_id, None);
    }
}
