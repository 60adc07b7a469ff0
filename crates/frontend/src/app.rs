use crate::config::ApiHosts;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::notify::{NotificationService, Toasts};
use crate::system::auth::context::{use_auth, AuthProvider};
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(ApiHosts::load());
    provide_context(NotificationService::new());
    provide_context(AppGlobalContext::new());

    view! {
        <AuthProvider>
            <AppGate />
        </AuthProvider>
        <Toasts />
    }
}

/// Main layout for a signed-in session, login form otherwise.
#[component]
fn AppGate() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let restored = move || auth_state.with(|s| s.restored);
    let authenticated = move || auth_state.with(|s| s.is_authenticated());

    view! {
        <Show
            when=restored
            fallback=|| view! { <div class="app-loading">"Loading..."</div> }
        >
            <Show when=authenticated fallback=|| view! { <LoginPage /> }>
                <Shell />
            </Show>
        </Show>
    }
}
