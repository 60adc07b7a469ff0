use contracts::domain::a007_staff::{InviteStaffDto, Role, Staff};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a007_staff::api;
use crate::domain::a007_staff::record::STAFF_STATUSES;
use crate::shared::api::use_api;
use crate::shared::collection::{status_options, CollectionView};
use crate::shared::components::{
    cell_text, status_badge, CollectionPanel, Column, ConfirmDialog, ListHeader, ModalFrame,
};
use crate::shared::date_utils::format_opt_date;
use crate::shared::icons::icon;
use crate::shared::notify::use_notify;
use crate::shared::or_na;
use crate::shared::page_frame::PageFrame;
use crate::shared::remote::{load_collection, run_mutation};

fn columns() -> Vec<Column<Staff>> {
    vec![
        Column::new("name", "Name", |s: &Staff| cell_text(or_na(Some(s.full_name().as_str())))).width(160.0),
        Column::new("email", "Email", |s: &Staff| cell_text(s.email.clone())).width(200.0),
        Column::new("role", "Role", |s: &Staff| cell_text(or_na(s.role_name()))),
        Column::new("status", "Status", |s: &Staff| status_badge(&s.status)).width(100.0),
        Column::new("created_at", "Added", |s: &Staff| cell_text(format_opt_date(s.created_at.as_deref()))),
    ]
}

fn invite_dto(first_name: &str, last_name: &str, email: &str, role_id: &str) -> Result<InviteStaffDto, String> {
    let (first_name, last_name, email) = (first_name.trim(), last_name.trim(), email.trim());
    if first_name.is_empty() || last_name.is_empty() {
        return Err("First and last name are required".to_string());
    }
    if !email.contains('@') {
        return Err("Enter a valid email address".to_string());
    }
    if role_id.is_empty() {
        return Err("Choose a role".to_string());
    }
    Ok(InviteStaffDto {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_lowercase(),
        role_id: role_id.to_string(),
    })
}

#[component]
fn RoleSelect(value: RwSignal<String>, roles: RwSignal<Vec<Role>>) -> impl IntoView {
    view! {
        <Select value=value>
            <option value="">"Select a role"</option>
            <For
                each=move || roles.get()
                key=|role| role.id.clone()
                children=|role: Role| view! { <option value=role.id.clone()>{role.name.clone()}</option> }
            />
        </Select>
    }
}

#[component]
pub fn StaffList() -> impl IntoView {
    let client = StoredValue::new(use_api());
    let notify = use_notify();
    let collection = RwSignal::new(CollectionView::<Staff>::default());
    let roles = RwSignal::new(Vec::<Role>::new());
    let loading = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let inviting = RwSignal::new(false);
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let role_id = RwSignal::new(String::new());

    let reassigning = RwSignal::new(None::<Staff>);
    let deleting = RwSignal::new(None::<Staff>);

    let fetch = move || {
        let client = client.get_value();
        load_collection(collection, loading, notify, async move {
            api::fetch_staff(&client).await
        });
    };

    let fetch_roles = move || {
        let client = client.get_value();
        spawn_local(async move {
            match api::fetch_roles(&client).await {
                Ok(list) => roles.set(list),
                Err(e) => {
                    log::error!("Failed to load roles: {}", e);
                    notify.report(&e);
                }
            }
        });
    };

    let open_invite = move || {
        first_name.set(String::new());
        last_name.set(String::new());
        email.set(String::new());
        role_id.set(String::new());
        inviting.set(true);
    };

    let submit_invite = move |_| {
        let dto = match invite_dto(
            &first_name.get_untracked(),
            &last_name.get_untracked(),
            &email.get_untracked(),
            &role_id.get_untracked(),
        ) {
            Ok(dto) => dto,
            Err(e) => {
                notify.error(e);
                return;
            }
        };
        let client = client.get_value();
        let message = format!("Invitation sent to {}", dto.email);
        run_mutation(
            notify,
            busy,
            async move { api::invite_staff(&client, &dto).await },
            message,
            move || {
                inviting.set(false);
                fetch();
            },
        );
    };

    let submit_role = move |_| {
        let Some(staff) = reassigning.get_untracked() else {
            return;
        };
        let new_role = role_id.get_untracked();
        if new_role.is_empty() {
            notify.error("Choose a role");
            return;
        }
        let client = client.get_value();
        run_mutation(
            notify,
            busy,
            async move { api::assign_role(&client, &staff.id, &new_role).await },
            "Role updated",
            move || {
                reassigning.set(None);
                fetch();
            },
        );
    };

    let confirm_delete = Callback::new(move |_: ()| {
        let Some(staff) = deleting.get_untracked() else {
            return;
        };
        let client = client.get_value();
        run_mutation(
            notify,
            busy,
            async move { api::delete_staff(&client, &staff.id).await },
            "Staff member removed",
            move || {
                deleting.set(None);
                fetch();
            },
        );
    });

    let actions = Callback::new(move |staff: Staff| {
        let for_role = staff.clone();
        view! {
            <div class="table__actions">
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| {
                        role_id.set(for_role.role.as_ref().map(|r| r.id.clone()).unwrap_or_default());
                        reassigning.set(Some(for_role.clone()));
                    }
                >
                    {icon("shield")}
                    " Role"
                </Button>
                <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle on_click=move |_| deleting.set(Some(staff.clone()))>
                    {icon("trash")}
                </Button>
            </div>
        }
        .into_any()
    });

    fetch();
    fetch_roles();

    view! {
        <PageFrame page_id="a007_staff--list" category="list">
            <ListHeader
                title="Staff"
                count=Signal::derive(move || collection.with(|v| v.items().len()))
                loading=loading
                on_refresh=Callback::new(move |_| {
                    fetch();
                    fetch_roles();
                })
            >
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open_invite()>
                    {icon("plus")}
                    " Invite"
                </Button>
            </ListHeader>

            <div class="page__content">
                <CollectionPanel
                    collection=collection
                    columns=columns()
                    status_options=status_options(STAFF_STATUSES)
                    loading=loading
                    export_name="staff"
                    search_placeholder="Search by name, email or role"
                    actions=actions
                />
            </div>

            <Show when=move || inviting.get()>
                <ModalFrame title="Invite staff member" on_close=Callback::new(move |_| inviting.set(false))>
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
                                <label class="form__label">"Email"</label>
                                <Input value=email input_type=InputType::Email />
                            </div>
                            <div class="form__group">
                                <label class="form__label">"Role"</label>
                                <RoleSelect value=role_id roles=roles />
                            </div>
                        </Flex>
                    </div>
                    <div class="modal-footer">
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| inviting.set(false) disabled=busy>
                            "Cancel"
                        </Button>
                        <Button appearance=ButtonAppearance::Primary on_click=submit_invite disabled=busy>
                            "Send invite"
                        </Button>
                    </div>
                </ModalFrame>
            </Show>

            {move || reassigning.get().map(|staff| view! {
                <ModalFrame
                    title=format!("Change role of {}", staff.email)
                    on_close=Callback::new(move |_| reassigning.set(None))
                >
                    <div class="modal-body">
                        <div class="form__group">
                            <label class="form__label">"Role"</label>
                            <RoleSelect value=role_id roles=roles />
                        </div>
                    </div>
                    <div class="modal-footer">
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| reassigning.set(None) disabled=busy>
                            "Cancel"
                        </Button>
                        <Button appearance=ButtonAppearance::Primary on_click=submit_role disabled=busy>
                            "Save"
                        </Button>
                    </div>
                </ModalFrame>
            })}

            {move || deleting.get().map(|staff| view! {
                <ConfirmDialog
                    title="Remove staff member"
                    message=format!("Remove {} from the admin team?", staff.email)
                    confirm_label="Remove"
                    busy=busy
                    on_confirm=confirm_delete
                    on_cancel=Callback::new(move |_| deleting.set(None))
                />
            })}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invite_dto() {
        let dto = invite_dto(" Tunde ", "Bello", " Tunde@MedBankr.com ", "r1").unwrap();
        assert_eq!(dto.first_name, "Tunde");
        assert_eq!(dto.email, "tunde@medbankr.com");

        assert!(invite_dto("", "Bello", "t@medbankr.com", "r1").is_err());
        assert!(invite_dto("Tunde", "Bello", "tunde", "r1").is_err());
        assert!(invite_dto("Tunde", "Bello", "t@medbankr.com", "").is_err());
    }
}
