use crate::shared::collection::{StatusFilter, StatusOption};
use leptos::prelude::*;

/// "View All" / "Active" / "Inactive" style tab bar.
#[component]
pub fn StatusFilterTabs(
    options: Vec<StatusOption>,
    #[prop(into)]
    current: Signal<StatusFilter>,
    on_select: Callback<StatusFilter>,
) -> impl IntoView {
    view! {
        <div class="status-tabs" role="tablist">
            {options.into_iter().map(|opt| {
                let filter = opt.filter.clone();
                let filter_for_click = opt.filter;
                view! {
                    <button
                        class="status-tabs__tab"
                        class:status-tabs__tab--active=move || current.get() == filter
                        role="tab"
                        on:click=move |_| on_select.run(filter_for_click.clone())
                    >
                        {opt.label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
