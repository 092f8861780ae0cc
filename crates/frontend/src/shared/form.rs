//! Bindings between a form signal and the text-based input components
//!
//! Inputs and selects exchange `String`s; these helpers convert to the field
//! types of the record held in a `RwSignal`.

use contracts::domain::common::aggregate_id::{parse_ref, ref_to_string};
use contracts::enums::CodedEnum;
use leptos::prelude::*;

pub type Binding<V> = (Signal<V>, Callback<V>);

pub fn bind<T, V>(form: RwSignal<T>, get: fn(&T) -> V, set: fn(&mut T, V)) -> Binding<V>
where
    T: Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    (
        Signal::derive(move || form.with(get)),
        Callback::new(move |value: V| form.update(|f| set(f, value))),
    )
}

/// `f64` field edited through a number input
pub fn bind_number<T>(form: RwSignal<T>, get: fn(&T) -> f64, set: fn(&mut T, f64)) -> Binding<String>
where
    T: Send + Sync + 'static,
{
    (
        Signal::derive(move || format_number_input(form.with(get))),
        Callback::new(move |text: String| {
            let value = parse_number(&text).unwrap_or(0.0);
            form.update(|f| set(f, value));
        }),
    )
}

/// `Option<f64>` field; an empty input clears it
pub fn bind_optional_number<T>(
    form: RwSignal<T>,
    get: fn(&T) -> Option<f64>,
    set: fn(&mut T, Option<f64>),
) -> Binding<String>
where
    T: Send + Sync + 'static,
{
    (
        Signal::derive(move || form.with(get).map(format_number_input).unwrap_or_default()),
        Callback::new(move |text: String| form.update(|f| set(f, parse_number(&text)))),
    )
}

/// `Option<String>` field; blank text is stored as `None`
pub fn bind_optional_text<T>(
    form: RwSignal<T>,
    get: fn(&T) -> Option<String>,
    set: fn(&mut T, Option<String>),
) -> Binding<String>
where
    T: Send + Sync + 'static,
{
    (
        Signal::derive(move || form.with(get).unwrap_or_default()),
        Callback::new(move |text: String| form.update(|f| set(f, non_blank(text)))),
    )
}

/// Foreign key edited through a select whose empty option means "none"
pub fn bind_ref<T>(
    form: RwSignal<T>,
    get: fn(&T) -> Option<i64>,
    set: fn(&mut T, Option<i64>),
) -> Binding<String>
where
    T: Send + Sync + 'static,
{
    (
        Signal::derive(move || ref_to_string(form.with(get))),
        Callback::new(move |code: String| form.update(|f| set(f, parse_ref(&code)))),
    )
}

/// Enum field edited through a select of its codes
pub fn bind_enum<T, E>(form: RwSignal<T>, get: fn(&T) -> E, set: fn(&mut T, E)) -> Binding<String>
where
    T: Send + Sync + 'static,
    E: CodedEnum,
{
    (
        Signal::derive(move || form.with(get).code().to_string()),
        Callback::new(move |code: String| {
            if let Some(value) = E::from_code(&code) {
                form.update(|f| set(f, value));
            }
        }),
    )
}

/// Select options for every variant of `E`
pub fn enum_options<E: CodedEnum>() -> Vec<(String, String)> {
    E::all()
        .into_iter()
        .map(|v| (v.code().to_string(), v.display_name().to_string()))
        .collect()
}

/// Select options for a foreign key, led by an empty "none" entry
pub fn ref_options<R>(
    records: &[R],
    id: impl Fn(&R) -> Option<i64>,
    label: impl Fn(&R) -> String,
    placeholder: &str,
) -> Vec<(String, String)> {
    let mut options = vec![(String::new(), placeholder.to_string())];
    options.extend(
        records
            .iter()
            .filter_map(|r| id(r).map(|i| (i.to_string(), label(r)))),
    );
    options
}

/// Accepts both "12.5" and "12,5"; blank or malformed input gives `None`
pub fn parse_number(text: &str) -> Option<f64> {
    let cleaned = text.trim().replace(',', ".");
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn format_number_input(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

pub fn non_blank(text: String) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::PaymentMethod;

    #[test]
    fn parse_number_accepts_decimal_comma() {
        assert_eq!(parse_number("12.5"), Some(12.5));
        assert_eq!(parse_number(" 12,5 "), Some(12.5));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("inf"), None);
    }

    #[test]
    fn number_input_formatting() {
        assert_eq!(format_number_input(0.0), "0");
        assert_eq!(format_number_input(-0.0), "0");
        assert_eq!(format_number_input(1.25), "1.25");
        assert_eq!(format_number_input(40.0), "40");
    }

    #[test]
    fn blank_text_becomes_none() {
        assert_eq!(non_blank("  ".into()), None);
        assert_eq!(non_blank("note".into()), Some("note".into()));
    }

    #[test]
    fn enum_options_follow_declaration_order() {
        let options = enum_options::<PaymentMethod>();
        assert_eq!(options.len(), PaymentMethod::all().len());
        assert_eq!(options[0].0, PaymentMethod::all()[0].code());
    }

    #[test]
    fn ref_options_skip_unsaved_records() {
        let records = vec![(Some(2_i64), "Hilltop"), (None, "Draft"), (Some(1), "Green")];
        let options = ref_options(&records, |r| r.0, |r| r.1.to_string(), "Select supplier");
        assert_eq!(
            options,
            vec![
                (String::new(), "Select supplier".to_string()),
                ("2".to_string(), "Hilltop".to_string()),
                ("1".to_string(), "Green".to_string()),
            ]
        );
    }
}
