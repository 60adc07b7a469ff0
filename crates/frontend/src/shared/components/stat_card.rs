use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn StatCard(
    label: &'static str,
    icon_name: &'static str,
    #[prop(into)]
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__body">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get()}</div>
            </div>
        </div>
    }
}
