use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::date_utils::today_iso;
use crate::shared::details::{DetailsViewModel, DialogState, RecordDialog};
use crate::shared::form::{bind, bind_enum, bind_optional_text, bind_ref, enum_options, ref_options};
use contracts::domain::a008_hr::{Attendance, Employee};
use contracts::enums::AttendanceStatus;
use leptos::prelude::*;

#[component]
pub fn AttendanceDetails(
    state: DialogState,
    /// Date of a new record
    #[prop(optional, into)]
    date: Option<String>,
    #[prop(into)] employees: Signal<Vec<Employee>>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = DetailsViewModel::with_defaults(Attendance {
        date: date.filter(|d| !d.is_empty()).unwrap_or_else(today_iso),
        ..Default::default()
    });
    vm.load(state);
    let form = vm.form;

    let employee_options = Signal::derive(move || {
        employees.with(|list| ref_options(list, |e| e.id, |e| e.full_name.clone(), "Select employee"))
    });

    let (employee, set_employee) = bind_ref(form, |f| f.employee_id, |f, v| f.employee_id = v);
    let (day, set_day) = bind(form, |f| f.date.clone(), |f, v| f.date = v);
    let (status, set_status) = bind_enum(form, |f| f.status, |f, v| f.status = v);
    let (check_in, set_check_in) = bind_optional_text(form, |f| f.check_in.clone(), |f, v| f.check_in = v);
    let (check_out, set_check_out) = bind_optional_text(form, |f| f.check_out.clone(), |f, v| f.check_out = v);
    let (notes, set_notes) = bind_optional_text(form, |f| f.notes.clone(), |f, v| f.notes = v);

    view! {
        <RecordDialog vm=vm on_saved=on_saved on_close=on_close>
            <Select label="Employee" value=employee on_change=set_employee options=employee_options required=true />
            <div class="form__row">
                <Input label="Date" input_type="date" value=day on_input=set_day required=true />
                <Select label="Status" value=status on_change=set_status options={enum_options::<AttendanceStatus>()} />
            </div>
            <div class="form__row">
                <Input label="Check-in" input_type="time" value=check_in on_input=set_check_in />
                <Input label="Check-out" input_type="time" value=check_out on_input=set_check_out />
            </div>
            <Textarea label="Notes" value=notes on_input=set_notes />
        </RecordDialog>
    }
}
