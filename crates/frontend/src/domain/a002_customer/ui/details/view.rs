use crate::shared::components::ui::{Checkbox, Input, Select};
use crate::shared::details::{DetailsViewModel, DialogState, RecordDialog};
use crate::shared::form::{bind, bind_enum, bind_number, enum_options};
use contracts::domain::a002_customer::Customer;
use contracts::enums::CustomerType;
use leptos::prelude::*;

#[component]
pub fn CustomerDetails(
    state: DialogState,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = DetailsViewModel::<Customer>::new();
    vm.load(state);

    let (name, set_name) = bind(vm.form, |f| f.name.clone(), |f, v| f.name = v);
    let (phone, set_phone) = bind(vm.form, |f| f.phone.clone(), |f, v| f.phone = v);
    let (address, set_address) = bind(vm.form, |f| f.address.clone(), |f, v| f.address = v);
    let (kind, set_kind) = bind_enum(vm.form, |f| f.customer_type, |f, v| f.customer_type = v);
    let (limit, set_limit) = bind_number(vm.form, |f| f.credit_limit, |f, v| f.credit_limit = v);
    let (active, set_active) = bind(vm.form, |f| f.is_active, |f, v| f.is_active = v);

    view! {
        <RecordDialog vm=vm on_saved=on_saved on_close=on_close>
            <Input label="Name" value=name on_input=set_name required=true />
            <div class="form__row">
                <Input label="Phone" input_type="tel" value=phone on_input=set_phone />
                <Select label="Type" value=kind on_change=set_kind options={enum_options::<CustomerType>()} />
            </div>
            <Input label="Address" value=address on_input=set_address />
            <Input label="Credit limit" input_type="number" value=limit on_input=set_limit />
            <Checkbox label="Active" checked=active on_change=set_active />
        </RecordDialog>
    }
}
