use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::ui::{Badge, Checkbox, Input, Select, Textarea};
use crate::shared::crud;
use crate::shared::date_utils::{format_date, today_iso};
use crate::shared::details::{DetailsViewModel, DialogState, RecordDialog};
use crate::shared::form::{bind, bind_enum, bind_optional_text, enum_options};
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, SearchInput, Searchable};
use crate::shared::loader::{delete_with_confirm, spawn_load};
use crate::shared::toast::use_toast;
use contracts::domain::a010_operations::Incident;
use contracts::enums::{CodedEnum, Severity};
use leptos::prelude::*;
use thaw::*;

impl Searchable for Incident {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.date.clone(),
            self.description.clone().unwrap_or_default(),
        ]
    }
}

fn severity_variant(severity: Severity) -> &'static str {
    match severity {
        Severity::Low => "neutral",
        Severity::Medium => "primary",
        Severity::High => "warning",
        Severity::Critical => "error",
    }
}

/// Unresolved incidents first, then newest first
fn sort_incidents(incidents: &mut [Incident]) {
    incidents.sort_by(|a, b| a.resolved.cmp(&b.resolved).then(b.date.cmp(&a.date)));
}

#[component]
fn IncidentDetails(state: DialogState, on_saved: Callback<()>, on_close: Callback<()>) -> impl IntoView {
    let vm = DetailsViewModel::with_defaults(Incident {
        date: today_iso(),
        ..Default::default()
    });
    vm.load(state);
    let form = vm.form;

    let (title, set_title) = bind(form, |f| f.title.clone(), |f, v| f.title = v);
    let (date, set_date) = bind(form, |f| f.date.clone(), |f, v| f.date = v);
    let (severity, set_severity) = bind_enum(form, |f| f.severity, |f, v| f.severity = v);
    let (description, set_description) =
        bind_optional_text(form, |f| f.description.clone(), |f, v| f.description = v);
    let (resolved, set_resolved) = bind(form, |f| f.resolved, |f, v| f.resolved = v);

    view! {
        <RecordDialog vm=vm on_saved=on_saved on_close=on_close>
            <Input label="Title" value=title on_input=set_title required=true />
            <div class="form__row">
                <Input label="Date" input_type="date" value=date on_input=set_date required=true />
                <Select label="Severity" value=severity on_change=set_severity options={enum_options::<Severity>()} />
            </div>
            <Textarea label="Description" value=description on_input=set_description />
            <Checkbox label="Resolved" checked=resolved on_change=set_resolved />
        </RecordDialog>
    }
}

#[component]
pub fn IncidentList() -> impl IntoView {
    let toast = use_toast();
    let incidents = RwSignal::new(Vec::<Incident>::new());
    let loading = RwSignal::new(false);
    let (filter, set_filter) = signal(String::new());
    let dialog = RwSignal::new(DialogState::Closed);

    let fetch = move || {
        spawn_load(
            loading,
            toast,
            crud::fetch_list::<Incident>(),
            move |mut list| {
                sort_incidents(&mut list);
                incidents.set(list);
            },
            move || incidents.set(Vec::new()),
        );
    };

    let handle_delete = move |id: i64| delete_with_confirm::<Incident>(id, toast, fetch);

    fetch();

    let visible = Memo::new(move |_| filter_list(incidents.get(), &filter.get()));
    let open = Memo::new(move |_| incidents.with(|i| i.iter().filter(|x| !x.resolved).count()));

    view! {
        <div class="page__section">
            <div class="page__toolbar">
                <SearchInput value=filter on_change=Callback::new(move |v| set_filter.set(v)) />
                <Button appearance=ButtonAppearance::Primary on_click=move |_| dialog.set(DialogState::New)>
                    {icon("plus")}
                    " Report incident"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch() disabled=loading>
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </div>

            <div class="stat-grid">
                <StatCard label="Incidents" icon_name="operations" value=Signal::derive(move || incidents.with(|i| i.len()).to_string()) />
                <StatCard
                    label="Unresolved"
                    icon_name="alert"
                    value=Signal::derive(move || open.get().to_string())
                    tone=Signal::derive(move || if open.get() > 0 { StatTone::Bad } else { StatTone::Good })
                />
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=100.0>"Date"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=220.0>"Title"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Severity"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"State"</TableHeaderCell>
                        <TableHeaderCell min_width=60.0>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || visible.get()
                        key=|i| (i.id, i.title.clone(), i.severity.code(), i.resolved)
                        children=move |i| {
                            let id = i.id.unwrap_or_default();
                            let state = if i.resolved {
                                view! { <Badge variant="success">"Resolved"</Badge> }.into_any()
                            } else {
                                view! { <Badge variant="warning">"Open"</Badge> }.into_any()
                            };
                            view! {
                                <TableRow>
                                    <TableCell><TableCellLayout>{format_date(&i.date)}</TableCellLayout></TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <a href="#" class="table__link" on:click=move |e| {
                                                e.prevent_default();
                                                dialog.set(DialogState::Edit(id));
                                            }>
                                                {i.title}
                                            </a>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <Badge variant=severity_variant(i.severity)>{i.severity.display_name()}</Badge>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell><TableCellLayout>{state}</TableCellLayout></TableCell>
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
                    <IncidentDetails
                        state=dialog.get()
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

    fn incident(date: &str, resolved: bool) -> Incident {
        Incident {
            date: date.into(),
            title: date.into(),
            resolved,
            ..Default::default()
        }
    }

    #[test]
    fn unresolved_incidents_lead() {
        let mut list = vec![
            incident("2024-07-03", true),
            incident("2024-07-01", false),
            incident("2024-07-02", false),
        ];
        sort_incidents(&mut list);
        let order: Vec<(&str, bool)> = list.iter().map(|i| (i.date.as_str(), i.resolved)).collect();
        assert_eq!(
            order,
            vec![("2024-07-02", false), ("2024-07-01", false), ("2024-07-03", true)]
        );
    }
}
