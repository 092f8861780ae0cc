use crate::shared::components::ui::{Checkbox, Input};
use crate::shared::details::{DetailsViewModel, DialogState, RecordDialog};
use crate::shared::form::{bind, bind_number, bind_optional_text};
use contracts::domain::a008_hr::Employee;
use leptos::prelude::*;

#[component]
pub fn EmployeeDetails(
    state: DialogState,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = DetailsViewModel::<Employee>::new();
    vm.load(state);
    let form = vm.form;

    let (name, set_name) = bind(form, |f| f.full_name.clone(), |f, v| f.full_name = v);
    let (position, set_position) = bind(form, |f| f.position.clone(), |f, v| f.position = v);
    let (department, set_department) = bind(form, |f| f.department.clone(), |f, v| f.department = v);
    let (phone, set_phone) = bind(form, |f| f.phone.clone(), |f, v| f.phone = v);
    let (hire_date, set_hire_date) = bind_optional_text(form, |f| f.hire_date.clone(), |f, v| f.hire_date = v);
    let (salary, set_salary) = bind_number(form, |f| f.salary, |f, v| f.salary = v);
    let (active, set_active) = bind(form, |f| f.is_active, |f, v| f.is_active = v);

    view! {
        <RecordDialog vm=vm on_saved=on_saved on_close=on_close>
            <Input label="Full name" value=name on_input=set_name required=true />
            <div class="form__row">
                <Input label="Position" value=position on_input=set_position required=true />
                <Input label="Department" value=department on_input=set_department />
            </div>
            <div class="form__row">
                <Input label="Phone" input_type="tel" value=phone on_input=set_phone />
                <Input label="Hire date" input_type="date" value=hire_date on_input=set_hire_date />
            </div>
            <Input label="Monthly salary" input_type="number" value=salary on_input=set_salary />
            <Checkbox label="Active" checked=active on_change=set_active />
        </RecordDialog>
    }
}
