//! "Select all on page" checkbox in the table header.

use crate::shared::collection::CheckState;
use leptos::prelude::*;
use thaw::*;

/// Renders checked / unchecked / indeterminate from `state`.
/// `on_change(true)` selects the page, `on_change(false)` clears it.
#[component]
pub fn TableHeaderCheckbox(
    #[prop(into)]
    state: Signal<CheckState>,
    on_change: Callback<bool>,
) -> impl IntoView {
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate is a DOM property with no HTML attribute
    Effect::new(move |_| {
        let indeterminate = state.get() == CheckState::Indeterminate;
        if let Some(input) = checkbox_ref.get() {
            input.set_indeterminate(indeterminate);
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || state.get() == CheckState::Checked
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </TableHeaderCell>
    }
}
