use contracts::domain::a001_users::User;
use leptos::prelude::*;
use thaw::*;

use super::details::UserEditForm;
use crate::domain::a001_users::api;
use crate::domain::a001_users::record::USER_STATUSES;
use crate::shared::api::use_api;
use crate::shared::collection::{status_options, CollectionView};
use crate::shared::components::{cell_text, status_badge, CollectionPanel, Column, ConfirmDialog, ListHeader};
use crate::shared::date_utils::format_opt_date;
use crate::shared::icons::icon;
use crate::shared::notify::use_notify;
use crate::shared::or_na;
use crate::shared::page_frame::PageFrame;
use crate::shared::remote::{load_collection, run_mutation};

fn columns() -> Vec<Column<User>> {
    vec![
        Column::new("name", "Name", |u: &User| cell_text(or_na(Some(u.full_name().as_str())))).width(160.0),
        Column::new("email", "Email", |u: &User| cell_text(u.email.clone())).width(200.0),
        Column::new("phone", "Phone", |u: &User| cell_text(or_na(u.phone.as_deref()))),
        Column::new("plan", "Plan", |u: &User| cell_text(or_na(u.plan_name()))),
        Column::new("status", "Status", |u: &User| status_badge(&u.status)).width(100.0),
        Column::new("created_at", "Joined", |u: &User| cell_text(format_opt_date(u.created_at.as_deref()))),
    ]
}

fn toggled_status(status: &str) -> &'static str {
    if status.eq_ignore_ascii_case("active") {
        "inactive"
    } else {
        "active"
    }
}

#[component]
pub fn UsersList() -> impl IntoView {
    let client = StoredValue::new(use_api());
    let notify = use_notify();
    let collection = RwSignal::new(CollectionView::<User>::default());
    let loading = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let editing = RwSignal::new(None::<User>);
    let deleting = RwSignal::new(None::<User>);

    let fetch = move || {
        let client = client.get_value();
        load_collection(collection, loading, notify, async move {
            api::fetch_users(&client).await
        });
    };

    let toggle_status = move |user: User| {
        let client = client.get_value();
        let next = toggled_status(&user.status);
        let message = if next == "active" { "User activated" } else { "User deactivated" };
        run_mutation(
            notify,
            busy,
            async move { api::set_user_status(&client, &user.id, next).await },
            message,
            fetch,
        );
    };

    let confirm_delete = Callback::new(move |_: ()| {
        let Some(user) = deleting.get_untracked() else {
            return;
        };
        let client = client.get_value();
        run_mutation(
            notify,
            busy,
            async move { api::delete_user(&client, &user.id).await },
            "User deleted",
            move || {
                deleting.set(None);
                fetch();
            },
        );
    });

    let actions = Callback::new(move |user: User| {
        let for_edit = user.clone();
        let for_status = user.clone();
        let status_label = if user.status.eq_ignore_ascii_case("active") { "Deactivate" } else { "Activate" };
        view! {
            <div class="table__actions">
                <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle on_click=move |_| editing.set(Some(for_edit.clone()))>
                    {icon("edit")}
                </Button>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    disabled=busy
                    on_click=move |_| toggle_status(for_status.clone())
                >
                    {status_label}
                </Button>
                <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle on_click=move |_| deleting.set(Some(user.clone()))>
                    {icon("trash")}
                </Button>
            </div>
        }
        .into_any()
    });

    fetch();

    view! {
        <PageFrame page_id="a001_users--list" category="list">
            <ListHeader
                title="Users"
                count=Signal::derive(move || collection.with(|v| v.items().len()))
                loading=loading
                on_refresh=Callback::new(move |_| fetch())
            />

            <div class="page__content">
                <CollectionPanel
                    collection=collection
                    columns=columns()
                    status_options=status_options(USER_STATUSES)
                    loading=loading
                    export_name="users"
                    search_placeholder="Search by name, email, phone or plan"
                    actions=actions
                />
            </div>

            {move || editing.get().map(|user| view! {
                <UserEditForm
                    user=user
                    on_saved=Callback::new(move |_| {
                        editing.set(None);
                        fetch();
                    })
                    on_close=Callback::new(move |_| editing.set(None))
                />
            })}

            {move || deleting.get().map(|user| view! {
                <ConfirmDialog
                    title="Delete user"
                    message=format!("Delete {}? This cannot be undone.", user.email)
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
    fn test_toggled_status() {
        assert_eq!(toggled_status("active"), "inactive");
        assert_eq!(toggled_status("Active"), "inactive");
        assert_eq!(toggled_status("inactive"), "active");
        assert_eq!(toggled_status(""), "active");
    }
}
