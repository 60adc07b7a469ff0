use contracts::domain::a006_transactions::Transaction;
use leptos::prelude::*;

use crate::domain::a006_transactions::api;
use crate::domain::a006_transactions::record::{amount_text, created_text, TRANSACTION_STATUSES};
use crate::shared::api::use_api;
use crate::shared::collection::{status_options, CollectionView};
use crate::shared::components::{cell_text, status_badge, CollectionPanel, Column, ListHeader};
use crate::shared::notify::use_notify;
use crate::shared::or_na;
use crate::shared::page_frame::PageFrame;
use crate::shared::remote::load_collection;

fn columns() -> Vec<Column<Transaction>> {
    vec![
        Column::new("reference", "Reference", |t: &Transaction| cell_text(t.reference.clone())).width(160.0),
        Column::new("user_email", "User", |t: &Transaction| cell_text(or_na(t.user_email.as_deref()))).width(200.0),
        Column::new("amount", "Amount", |t: &Transaction| cell_text(amount_text(t))).numeric(),
        Column::new("channel", "Channel", |t: &Transaction| cell_text(or_na(t.channel.as_deref()))),
        Column::new("status", "Status", |t: &Transaction| status_badge(&t.status)).width(100.0),
        Column::new("created_at", "Date", |t: &Transaction| cell_text(created_text(t))).width(150.0),
    ]
}

#[component]
pub fn TransactionsList() -> impl IntoView {
    let client = StoredValue::new(use_api());
    let notify = use_notify();
    let collection = RwSignal::new(CollectionView::<Transaction>::default());
    let loading = RwSignal::new(false);

    let fetch = move || {
        let client = client.get_value();
        load_collection(collection, loading, notify, async move {
            api::fetch_transactions(&client).await
        });
    };

    fetch();

    view! {
        <PageFrame page_id="a006_transactions--list" category="list">
            <ListHeader
                title="Transactions"
                count=Signal::derive(move || collection.with(|v| v.items().len()))
                loading=loading
                on_refresh=Callback::new(move |_| fetch())
            />

            <div class="page__content">
                <CollectionPanel
                    collection=collection
                    columns=columns()
                    status_options=status_options(TRANSACTION_STATUSES)
                    loading=loading
                    export_name="transactions"
                    search_placeholder="Search by reference, user or channel"
                />
            </div>
        </PageFrame>
    }
}
