//! Session persistence in `localStorage`.

use contracts::system::auth::UserInfo;
use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "medbankr_access_token";
const USER_INFO_KEY: &str = "medbankr_user";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn save_session(token: &str, user: &UserInfo) {
    let Some(storage) = get_local_storage() else {
        return;
    };
    let _ = storage.set_item(ACCESS_TOKEN_KEY, token);
    match serde_json::to_string(user) {
        Ok(json) => {
            let _ = storage.set_item(USER_INFO_KEY, &json);
        }
        Err(e) => log::warn!("Failed to persist user info: {}", e),
    }
}

/// Token and identity from the previous visit, if both are present and readable.
pub fn load_session() -> Option<(String, UserInfo)> {
    let storage = get_local_storage()?;
    let token = storage.get_item(ACCESS_TOKEN_KEY).ok()??;
    let user_json = storage.get_item(USER_INFO_KEY).ok()??;
    let user = serde_json::from_str(&user_json).ok()?;
    Some((token, user))
}

pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(USER_INFO_KEY);
    }
}
