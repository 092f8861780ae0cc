//! Right-aligned money cell for thaw tables
use super::number_format::format_money;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TableCellMoney(
    #[prop(into)] value: Signal<f64>,
    /// Positive values green, negative red
    #[prop(optional)]
    color_by_sign: bool,
    #[prop(optional)] bold: bool,
) -> impl IntoView {
    let cell_style = move || {
        let mut styles = Vec::new();
        if color_by_sign {
            let v = value.get();
            if v > 0.0 {
                styles.push("color: var(--color-success-700)");
            } else if v < 0.0 {
                styles.push("color: var(--color-error-700)");
            }
        }
        if bold {
            styles.push("font-weight: 600");
        }
        styles.join("; ")
    };

    view! {
        <TableCell class="text-right">
            <span style=cell_style>{move || format_money(value.get())}</span>
        </TableCell>
    }
}
