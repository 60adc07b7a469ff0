use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{sign_out, use_auth};
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, set_auth_state) = use_auth();

    let user_name = move || {
        auth_state.with(|s| {
            s.session
                .as_ref()
                .map(|session| session.user.display_name())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button class="top-header__icon-btn" on:click=move |_| ctx.toggle_left() title="Toggle navigation">
                    "☰"
                </button>
                <span class="top-header__title">"MedBankr Admin"</span>
            </div>
            <div class="top-header__actions">
                <span class="top-header__user">{user_name}</span>
                <button
                    class="top-header__icon-btn"
                    title="Sign out"
                    on:click=move |_| sign_out(set_auth_state)
                >
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
