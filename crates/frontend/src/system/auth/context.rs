use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};
use crate::config::ApiHosts;
use crate::shared::api::{ApiClient, ApiError};

#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: UserInfo,
}

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub session: Option<Session>,
    /// Set once the stored session has been checked.
    pub restored: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());
    let hosts = use_context::<ApiHosts>().unwrap_or_default();

    // Restore and validate the session saved by a previous visit
    Effect::new(move |_| {
        let hosts = hosts.clone();
        spawn_local(async move {
            let Some((token, cached_user)) = storage::load_session() else {
                set_auth_state.set(AuthState { session: None, restored: true });
                return;
            };
            let client = ApiClient::new(hosts, Some(token.clone()));
            let session = match api::current_user(&client).await {
                Ok(user) => Some(Session { token, user }),
                Err(ApiError::Unauthenticated) => {
                    log::info!("Stored session for {} expired", cached_user.email);
                    storage::clear_session();
                    None
                }
                Err(e) => {
                    // backend unreachable: keep the cached identity, requests will report
                    log::warn!("Could not validate stored session: {}", e);
                    Some(Session { token, user: cached_user })
                }
            };
            set_auth_state.set(AuthState { session, restored: true });
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Stores a freshly issued session and switches the app to the main layout.
pub fn sign_in(set_auth_state: WriteSignal<AuthState>, token: String, user: UserInfo) {
    storage::save_session(&token, &user);
    log::info!("Signed in as {}", user.email);
    set_auth_state.set(AuthState {
        session: Some(Session { token, user }),
        restored: true,
    });
}

pub fn sign_out(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_session();
    set_auth_state.set(AuthState { session: None, restored: true });
}
