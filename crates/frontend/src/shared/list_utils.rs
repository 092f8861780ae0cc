//! Search helpers shared by the list pages
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;

/// Minimum number of characters before a filter is applied
pub const MIN_FILTER_LEN: usize = 3;

const DEBOUNCE_MS: u32 = 300;

/// Rows that can be matched against a free-text filter
pub trait Searchable {
    /// Texts the filter is matched against
    fn search_fields(&self) -> Vec<String>;

    fn matches_filter(&self, filter: &str) -> bool {
        matches_any(&self.search_fields(), filter)
    }
}

/// Case-insensitive substring match over several fields
pub fn matches_any(fields: &[String], filter: &str) -> bool {
    let needle = filter.trim().to_lowercase();
    fields.iter().any(|f| f.to_lowercase().contains(&needle))
}

pub fn is_filter_active(filter: &str) -> bool {
    filter.trim().chars().count() >= MIN_FILTER_LEN
}

/// Keep the rows matching `filter`; short filters leave the list untouched
pub fn filter_list<T: Searchable + Clone>(items: Vec<T>, filter: &str) -> Vec<T> {
    if !is_filter_active(filter) {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Id to display name of the referenced records
pub fn names_by_id<R>(
    records: &[R],
    id: impl Fn(&R) -> Option<i64>,
    name: impl Fn(&R) -> String,
) -> HashMap<i64, String> {
    records
        .iter()
        .filter_map(|r| id(r).map(|i| (i, name(r))))
        .collect()
}

/// Name of a referenced record; "—" for none, "#id" when it is not loaded
pub fn display_ref(names: &HashMap<i64, String>, id: Option<i64>) -> String {
    match id {
        None => "—".to_string(),
        Some(id) => names
            .get(&id)
            .cloned()
            .unwrap_or_else(|| format!("#{}", id)),
    }
}

/// Search box with debounce and a clear button
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search (min. 3 characters)...".to_string()
    } else {
        placeholder
    };

    let input_value = RwSignal::new(value.get_untracked());
    // Only the latest keystroke is allowed to publish its value
    let generation = RwSignal::new(0u64);

    let handle_input_change = move |new_value: String| {
        input_value.set(new_value.clone());
        generation.update(|g| *g += 1);
        let current = generation.get_untracked();
        spawn_local(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            if generation.get_untracked() == current {
                on_change.run(new_value);
            }
        });
    };

    let clear_filter = move |_| {
        generation.update(|g| *g += 1);
        input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class=move || {
                    if is_filter_active(&value.get()) {
                        "search-input__field search-input__field--active"
                    } else {
                        "search-input__field"
                    }
                }
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" title="Clear" on:click=clear_filter>
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        name: String,
        phone: String,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<String> {
            vec![self.name.clone(), self.phone.clone()]
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Green Valley Farm".into(), phone: "555-0101".into() },
            Row { name: "Hilltop Dairy".into(), phone: "555-0199".into() },
        ]
    }

    #[test]
    fn short_filters_keep_everything() {
        assert_eq!(filter_list(rows(), "gr").len(), 2);
        assert_eq!(filter_list(rows(), "   ").len(), 2);
    }

    #[test]
    fn filter_matches_any_field_case_insensitively() {
        let found = filter_list(rows(), "VALLEY");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Green Valley Farm");

        let by_phone = filter_list(rows(), "0199");
        assert_eq!(by_phone.len(), 1);
        assert_eq!(by_phone[0].name, "Hilltop Dairy");

        assert!(filter_list(rows(), "nothing").is_empty());
    }

    #[test]
    fn reference_names() {
        let records = vec![(Some(1_i64), "Green"), (None, "Draft")];
        let names = names_by_id(&records, |r| r.0, |r| r.1.to_string());
        assert_eq!(names.len(), 1);
        assert_eq!(display_ref(&names, Some(1)), "Green");
        assert_eq!(display_ref(&names, Some(9)), "#9");
        assert_eq!(display_ref(&names, None), "—");
    }
}
