use crate::shared::components::ui::Input;
use crate::shared::details::{DetailsViewModel, DialogState, RecordDialog};
use crate::shared::form::{bind, bind_number};
use contracts::domain::a006_inventory_item::InventoryItem;
use leptos::prelude::*;

#[component]
pub fn InventoryItemDetails(
    state: DialogState,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = DetailsViewModel::<InventoryItem>::new();
    vm.load(state);
    let form = vm.form;

    let (name, set_name) = bind(form, |f| f.name.clone(), |f, v| f.name = v);
    let (category, set_category) = bind(form, |f| f.category.clone(), |f, v| f.category = v);
    let (quantity, set_quantity) = bind_number(form, |f| f.quantity, |f, v| f.quantity = v);
    let (unit, set_unit) = bind(form, |f| f.unit.clone(), |f, v| f.unit = v);
    let (min_quantity, set_min_quantity) = bind_number(form, |f| f.min_quantity, |f, v| f.min_quantity = v);
    let (cost, set_cost) = bind_number(form, |f| f.unit_cost, |f, v| f.unit_cost = v);
    let (location, set_location) = bind(form, |f| f.location.clone(), |f, v| f.location = v);

    view! {
        <RecordDialog vm=vm on_saved=on_saved on_close=on_close>
            <Input label="Name" value=name on_input=set_name required=true />
            <div class="form__row">
                <Input label="Category" value=category on_input=set_category placeholder="Packaging, feed, spare parts..." />
                <Input label="Location" value=location on_input=set_location />
            </div>
            <div class="form__row">
                <Input label="Quantity" input_type="number" value=quantity on_input=set_quantity required=true />
                <Input label="Unit" value=unit on_input=set_unit />
                <Input label="Reorder at" input_type="number" value=min_quantity on_input=set_min_quantity />
            </div>
            <Input label="Unit cost" input_type="number" value=cost on_input=set_cost />
            <Show when=move || form.with(|f| f.is_low_stock())>
                <div class="warning-box">"Stock is at or below the reorder level"</div>
            </Show>
        </RecordDialog>
    }
}
