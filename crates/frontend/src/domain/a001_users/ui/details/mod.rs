use contracts::domain::a001_users::{UpdateUserDto, User};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_users::api;
use crate::domain::a001_users::record::USER_STATUSES;
use crate::shared::api::use_api;
use crate::shared::components::ModalFrame;
use crate::shared::notify::use_notify;
use crate::shared::remote::run_mutation;
use contracts::shared::status::status_label;

fn non_blank(value: String) -> Option<String> {
    let value = value.trim().to_string();
    (!value.is_empty()).then_some(value)
}

/// Edit dialog for name, phone and status.
#[component]
pub fn UserEditForm(user: User, on_saved: Callback<()>, on_close: Callback<()>) -> impl IntoView {
    let client = StoredValue::new(use_api());
    let notify = use_notify();
    let busy = RwSignal::new(false);

    let first_name = RwSignal::new(user.first_name.clone().unwrap_or_default());
    let last_name = RwSignal::new(user.last_name.clone().unwrap_or_default());
    let phone = RwSignal::new(user.phone.clone().unwrap_or_default());
    let status = RwSignal::new(user.status.to_lowercase());
    let user_id = StoredValue::new(user.id.clone());

    let save = move |_| {
        let dto = UpdateUserDto {
            first_name: non_blank(first_name.get_untracked()),
            last_name: non_blank(last_name.get_untracked()),
            phone: non_blank(phone.get_untracked()),
            status: status.get_untracked(),
        };
        let client = client.get_value();
        let id = user_id.get_value();
        run_mutation(
            notify,
            busy,
            async move { api::update_user(&client, &id, &dto).await },
            "User updated",
            move || on_saved.run(()),
        );
    };

    view! {
        <ModalFrame title=format!("Edit {}", user.email) on_close=on_close>
            <div class="modal-body">
                <Flex vertical=true gap=FlexGap::Medium>
                    <div class="form__group">
                        <label class="form__label">"First name"</label>
                        <Input value=first_name />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Last name"</label>
                        <Input value=last_name />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Phone"</label>
                        <Input value=phone />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Status"</label>
                        <Select value=status>
                            {USER_STATUSES.iter().map(|s| view! {
                                <option value={*s}>{status_label(s)}</option>
                            }).collect_view()}
                        </Select>
                    </div>
                </Flex>
            </div>
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(()) disabled=busy>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=save disabled=busy>
                    {move || if busy.get() { "Saving..." } else { "Save" }}
                </Button>
            </div>
        </ModalFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank("  Ada ".into()).as_deref(), Some("Ada"));
        assert_eq!(non_blank("   ".into()), None);
    }
}
