use contracts::domain::a007_staff::Role;
use leptos::prelude::*;

use crate::domain::a007_staff::api;
use crate::shared::api::use_api;
use crate::shared::collection::CollectionView;
use crate::shared::components::{cell_text, CollectionPanel, Column, ListHeader};
use crate::shared::notify::use_notify;
use crate::shared::page_frame::PageFrame;
use crate::shared::remote::load_collection;

fn columns() -> Vec<Column<Role>> {
    vec![
        Column::new("name", "Role", |r: &Role| cell_text(r.name.clone())).width(160.0),
        Column::new("permissions", "Permissions", |r: &Role| {
            let text = if r.permissions.is_empty() {
                "No permissions".to_string()
            } else {
                r.permissions.join(", ")
            };
            cell_text(text)
        })
        .width(360.0),
    ]
}

#[component]
pub fn RolesList() -> impl IntoView {
    let client = StoredValue::new(use_api());
    let notify = use_notify();
    let collection = RwSignal::new(CollectionView::<Role>::default());
    let loading = RwSignal::new(false);

    let fetch = move || {
        let client = client.get_value();
        load_collection(collection, loading, notify, async move {
            api::fetch_roles(&client).await
        });
    };

    fetch();

    view! {
        <PageFrame page_id="a007_roles--list" category="list">
            <ListHeader
                title="Roles"
                count=Signal::derive(move || collection.with(|v| v.items().len()))
                loading=loading
                on_refresh=Callback::new(move |_| fetch())
            />
            <div class="page__content">
                <CollectionPanel
                    collection=collection
                    columns=columns()
                    loading=loading
                    export_name="roles"
                    search_placeholder="Search roles or permissions"
                />
            </div>
        </PageFrame>
    }
}
