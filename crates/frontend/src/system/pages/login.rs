use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::config::ApiHosts;
use crate::shared::api::ApiClient;
use crate::system::auth::{api, context::{sign_in, use_auth}};

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();
    let hosts = use_context::<ApiHosts>().unwrap_or_default();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get_untracked().trim().to_string();
        let password_val = password.get_untracked();
        if email_val.is_empty() || password_val.is_empty() {
            set_error_message.set(Some("Email and password are required".to_string()));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        let client = ApiClient::anonymous(hosts.clone());
        spawn_local(async move {
            match api::login(&client, email_val, password_val).await {
                Ok(response) => sign_in(set_auth_state, response.access_token, response.user),
                Err(e) => {
                    let text = e
                        .user_message()
                        .unwrap_or_else(|| "Invalid email or password".to_string());
                    set_error_message.set(Some(text));
                }
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"MedBankr Admin"</h1>
                <h2>"Sign in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="alert alert--error">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form__group">
                        <Label>"Email"</Label>
                        <Input value=email input_type=InputType::Email disabled=is_loading />
                    </div>
                    <div class="form__group">
                        <Label>"Password"</Label>
                        <Input value=password input_type=InputType::Password disabled=is_loading />
                    </div>
                    <button type="submit" class="button button--primary" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
