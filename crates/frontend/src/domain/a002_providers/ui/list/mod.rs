use contracts::domain::a002_providers::Provider;
use leptos::prelude::*;
use thaw::*;

use super::details::ProviderEditForm;
use crate::domain::a002_providers::api;
use crate::domain::a002_providers::record::{verified_label, PROVIDER_STATUSES};
use crate::shared::api::use_api;
use crate::shared::collection::{status_options, CollectionView};
use crate::shared::components::{
    cell_text, status_badge, CollectionPanel, Column, ConfirmDialog, ListHeader,
};
use crate::shared::date_utils::format_opt_date;
use crate::shared::icons::icon;
use crate::shared::notify::use_notify;
use crate::shared::or_na;
use crate::shared::page_frame::PageFrame;
use crate::shared::remote::{load_collection, run_mutation};

fn columns() -> Vec<Column<Provider>> {
    vec![
        Column::new("name", "Name", |p: &Provider| cell_text(p.name.clone())).width(180.0),
        Column::new("email", "Email", |p: &Provider| cell_text(or_na(p.email.as_deref()))).width(180.0),
        Column::new("phone", "Phone", |p: &Provider| cell_text(or_na(p.phone.as_deref()))).unsorted(),
        Column::new("specialty", "Specialty", |p: &Provider| cell_text(or_na(p.specialty.as_deref()))),
        Column::new("verified", "KYC", |p: &Provider| {
            status_badge(if p.verified { "verified" } else { "pending" })
        })
        .width(100.0),
        Column::new("status", "Status", |p: &Provider| status_badge(&p.status)).width(100.0),
        Column::new("created_at", "Registered", |p: &Provider| {
            cell_text(format_opt_date(p.created_at.as_deref()))
        }),
    ]
}

#[component]
pub fn ProvidersList() -> impl IntoView {
    let client = StoredValue::new(use_api());
    let notify = use_notify();
    let collection = RwSignal::new(CollectionView::<Provider>::default());
    let loading = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let editing = RwSignal::new(None::<Provider>);
    let deleting = RwSignal::new(None::<Provider>);

    let fetch = move || {
        let client = client.get_value();
        load_collection(collection, loading, notify, async move {
            api::fetch_providers(&client).await
        });
    };

    let verify = move |provider: Provider| {
        let client = client.get_value();
        run_mutation(
            notify,
            busy,
            async move { api::verify_provider(&client, &provider.id).await },
            "Provider verified",
            fetch,
        );
    };

    let confirm_delete = Callback::new(move |_: ()| {
        let Some(provider) = deleting.get_untracked() else {
            return;
        };
        let client = client.get_value();
        run_mutation(
            notify,
            busy,
            async move { api::delete_provider(&client, &provider.id).await },
            "Provider deleted",
            move || {
                deleting.set(None);
                fetch();
            },
        );
    });

    let actions = Callback::new(move |provider: Provider| {
        let for_edit = provider.clone();
        let for_verify = provider.clone();
        let can_verify = !provider.verified;
        view! {
            <div class="table__actions">
                <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle on_click=move |_| editing.set(Some(for_edit.clone()))>
                    {icon("edit")}
                </Button>
                {can_verify.then(|| view! {
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        disabled=busy
                        on_click=move |_| verify(for_verify.clone())
                    >
                        {icon("check")}
                        " Verify"
                    </Button>
                })}
                <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle on_click=move |_| deleting.set(Some(provider.clone()))>
                    {icon("trash")}
                </Button>
            </div>
        }
        .into_any()
    });

    fetch();

    view! {
        <PageFrame page_id="a002_providers--list" category="list">
            <ListHeader
                title="Providers"
                count=Signal::derive(move || collection.with(|v| v.items().len()))
                loading=loading
                on_refresh=Callback::new(move |_| fetch())
            />

            <div class="page__content">
                <CollectionPanel
                    collection=collection
                    columns=columns()
                    status_options=status_options(PROVIDER_STATUSES)
                    loading=loading
                    export_name="providers"
                    search_placeholder="Search by name, email, specialty or address"
                    actions=actions
                />
            </div>

            {move || editing.get().map(|provider| view! {
                <ProviderEditForm
                    provider=provider
                    on_saved=Callback::new(move |_| {
                        editing.set(None);
                        fetch();
                    })
                    on_close=Callback::new(move |_| editing.set(None))
                />
            })}

            {move || deleting.get().map(|provider| view! {
                <ConfirmDialog
                    title="Delete provider"
                    message=format!("Delete {} ({})? This cannot be undone.", provider.name, verified_label(&provider))
                    busy=busy
                    on_confirm=confirm_delete
                    on_cancel=Callback::new(move |_| deleting.set(None))
                />
            })}
        </PageFrame>
    }
}
