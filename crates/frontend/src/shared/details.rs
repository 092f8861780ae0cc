//! Create/edit dialog state shared by every details form
use super::crud;
use super::modal::Modal;
use super::toast::{use_toast, ToastService};
use crate::shared::icons::icon;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Which record a list page has open in its dialog
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Closed,
    New,
    Edit(i64),
}

impl DialogState {
    pub fn is_open(&self) -> bool {
        !matches!(self, DialogState::Closed)
    }

    pub fn record_id(&self) -> Option<i64> {
        match self {
            DialogState::Edit(id) => Some(*id),
            _ => None,
        }
    }
}

/// Form state of one record
pub struct DetailsViewModel<T: Send + Sync + 'static> {
    pub form: RwSignal<T>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    toast: ToastService,
}

impl<T: Send + Sync + 'static> Clone for DetailsViewModel<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for DetailsViewModel<T> {}

impl<T> DetailsViewModel<T>
where
    T: AggregateRoot<Id = i64> + Default + Send + Sync,
{
    pub fn new() -> Self {
        Self::with_defaults(T::default())
    }

    /// New form pre-filled with `initial` (e.g. today's date)
    pub fn with_defaults(initial: T) -> Self {
        Self {
            form: RwSignal::new(initial),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            toast: use_toast(),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.is_persisted())
    }

    /// Fetch the record when editing; new forms keep their defaults
    pub fn load(&self, state: DialogState) {
        let Some(id) = state.record_id() else {
            return;
        };
        let form = self.form;
        let error = self.error;
        spawn_local(async move {
            match crud::fetch_by_id::<T>(id).await {
                Ok(record) => {
                    form.set(record);
                    error.set(None);
                }
                Err(e) => error.set(Some(e.user_message("Failed to load record"))),
            }
        });
    }

    /// Validate, run the page-specific `check`, then POST/PUT
    pub fn save_command(
        &self,
        check: Option<Callback<T, Result<(), String>>>,
        on_saved: Callback<()>,
    ) {
        let toast = self.toast;
        let current = self.form.get_untracked();

        let checked = current
            .validate()
            .and_then(|_| check.map(|c| c.run(current.clone())).unwrap_or(Ok(())));
        if let Err(msg) = checked {
            toast.error(msg.clone());
            self.error.set(Some(msg));
            return;
        }

        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        spawn_local(async move {
            match crud::save(&current).await {
                Ok(_) => {
                    error.set(None);
                    toast.success(format!("{} saved", T::element_name()));
                    on_saved.run(());
                }
                Err(e) => {
                    let msg = e.user_message("Failed to save");
                    toast.error(msg.clone());
                    error.set(Some(msg));
                }
            }
            saving.set(false);
        });
    }
}

/// Modal with the Save button and the error box around a record form
#[component]
pub fn RecordDialog<T>(
    vm: DetailsViewModel<T>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
    /// Extra check run after `validate`, blocks the save on `Err`
    #[prop(optional)]
    check: Option<Callback<T, Result<(), String>>>,
    children: Children,
) -> impl IntoView
where
    T: AggregateRoot<Id = i64> + Default + Send + Sync,
{
    let title = move || {
        if vm.is_edit_mode() {
            format!("Edit {}", T::element_name().to_lowercase())
        } else {
            format!("New {}", T::element_name().to_lowercase())
        }
    };

    view! {
        <Modal title=Signal::derive(title) on_close=on_close>
            <div class="modal-actions-top">
                <button
                    class="button button--primary"
                    on:click=move |_| vm.save_command(check, on_saved)
                    disabled=move || vm.saving.get()
                >
                    {icon("save")}
                    {move || if vm.saving.get() { "Saving..." } else { "Save" }}
                </button>
                <button class="button button--secondary" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="warning-box text-error">{e}</div> })}

            <div class="detail-form">
                {children()}
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialog_state_helpers() {
        assert!(!DialogState::Closed.is_open());
        assert!(DialogState::New.is_open());
        assert_eq!(DialogState::New.record_id(), None);
        assert_eq!(DialogState::Edit(7).record_id(), Some(7));
    }
}
