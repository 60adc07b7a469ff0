use contracts::domain::a005_subscriptions::Subscription;
use leptos::prelude::*;

use crate::domain::a005_subscriptions::api;
use crate::domain::a005_subscriptions::record::SUBSCRIPTION_STATUSES;
use crate::shared::api::use_api;
use crate::shared::collection::{status_options, CollectionView};
use crate::shared::components::{cell_text, status_badge, CollectionPanel, Column, ListHeader};
use crate::shared::date_utils::format_opt_date;
use crate::shared::notify::use_notify;
use crate::shared::number_format::format_naira;
use crate::shared::or_na;
use crate::shared::page_frame::PageFrame;
use crate::shared::remote::load_collection;

fn columns() -> Vec<Column<Subscription>> {
    vec![
        Column::new("user_email", "User", |s: &Subscription| cell_text(or_na(s.user_email.as_deref()))).width(200.0),
        Column::new("plan", "Plan", |s: &Subscription| cell_text(or_na(s.plan_name()))),
        Column::new("amount", "Amount", |s: &Subscription| cell_text(format_naira(s.amount))).numeric(),
        Column::new("status", "Status", |s: &Subscription| status_badge(&s.status)).width(100.0),
        Column::new("start_date", "Start", |s: &Subscription| cell_text(format_opt_date(s.start_date.as_deref()))),
        Column::new("end_date", "End", |s: &Subscription| cell_text(format_opt_date(s.end_date.as_deref()))),
    ]
}

#[component]
pub fn SubscriptionsList() -> impl IntoView {
    let client = StoredValue::new(use_api());
    let notify = use_notify();
    let collection = RwSignal::new(CollectionView::<Subscription>::default());
    let loading = RwSignal::new(false);

    let fetch = move || {
        let client = client.get_value();
        load_collection(collection, loading, notify, async move {
            api::fetch_subscriptions(&client).await
        });
    };

    fetch();

    view! {
        <PageFrame page_id="a005_subscriptions--list" category="list">
            <ListHeader
                title="Subscriptions"
                count=Signal::derive(move || collection.with(|v| v.items().len()))
                loading=loading
                on_refresh=Callback::new(move |_| fetch())
            />

            <div class="page__content">
                <CollectionPanel
                    collection=collection
                    columns=columns()
                    status_options=status_options(SUBSCRIPTION_STATUSES)
                    loading=loading
                    export_name="subscriptions"
                    search_placeholder="Search by user or plan"
                />
            </div>
        </PageFrame>
    }
}
