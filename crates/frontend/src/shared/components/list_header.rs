use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Title row of a list page: record count, extra buttons, refresh.
#[component]
pub fn ListHeader(
    title: &'static str,
    #[prop(into)]
    count: Signal<usize>,
    #[prop(into)]
    loading: Signal<bool>,
    on_refresh: Callback<()>,
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{title}</h1>
                <Badge>{move || count.get().to_string()}</Badge>
            </div>
            <div class="page__header-right">
                {children.map(|c| c())}
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_refresh.run(())
                    disabled=loading
                >
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </div>
        </div>
    }
}
