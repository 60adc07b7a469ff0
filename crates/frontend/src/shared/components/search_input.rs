use crate::shared::icons::icon;
use leptos::prelude::*;

/// Global search box. Every keystroke is applied immediately.
#[component]
pub fn SearchInput(
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=move || !value.get().is_empty()>
                <button
                    class="search-input__clear"
                    title="Clear"
                    on:click=move |_| on_change.run(String::new())
                >
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}
