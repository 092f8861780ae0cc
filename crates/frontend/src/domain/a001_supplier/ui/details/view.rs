use crate::shared::components::ui::{Checkbox, Input, Textarea};
use crate::shared::details::{DetailsViewModel, DialogState, RecordDialog};
use crate::shared::form::{bind, bind_number, bind_optional_text};
use contracts::domain::a001_supplier::Supplier;
use leptos::prelude::*;

#[component]
pub fn SupplierDetails(
    state: DialogState,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = DetailsViewModel::<Supplier>::new();
    vm.load(state);

    let (name, set_name) = bind(vm.form, |f| f.name.clone(), |f, v| f.name = v);
    let (phone, set_phone) = bind(vm.form, |f| f.phone.clone(), |f, v| f.phone = v);
    let (address, set_address) = bind(vm.form, |f| f.address.clone(), |f, v| f.address = v);
    let (village, set_village) = bind(vm.form, |f| f.village.clone(), |f, v| f.village = v);
    let (price, set_price) = bind_number(vm.form, |f| f.price_per_liter, |f, v| f.price_per_liter = v);
    let (active, set_active) = bind(vm.form, |f| f.is_active, |f, v| f.is_active = v);
    let (notes, set_notes) = bind_optional_text(vm.form, |f| f.notes.clone(), |f, v| f.notes = v);

    view! {
        <RecordDialog vm=vm on_saved=on_saved on_close=on_close>
            <Input label="Name" value=name on_input=set_name required=true />
            <div class="form__row">
                <Input label="Phone" input_type="tel" value=phone on_input=set_phone />
                <Input label="Village" value=village on_input=set_village />
            </div>
            <Input label="Address" value=address on_input=set_address />
            <Input label="Price per liter" input_type="number" value=price on_input=set_price />
            <Checkbox label="Active" checked=active on_change=set_active />
            <Textarea label="Notes" value=notes on_input=set_notes />
        </RecordDialog>
    }
}
