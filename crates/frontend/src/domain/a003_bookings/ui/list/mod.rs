use contracts::domain::a003_bookings::Booking;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a003_bookings::api;
use crate::domain::a003_bookings::record::{
    appointment_text, available_transitions, transition_label, BOOKING_STATUSES,
};
use crate::shared::api::use_api;
use crate::shared::collection::{status_options, CollectionView};
use crate::shared::components::{
    cell_text, status_badge, CollectionPanel, Column, ConfirmDialog, ListHeader,
};
use crate::shared::notify::use_notify;
use crate::shared::number_format::format_naira;
use crate::shared::or_na;
use crate::shared::page_frame::PageFrame;
use crate::shared::remote::{load_collection, run_mutation};

fn columns() -> Vec<Column<Booking>> {
    vec![
        Column::new("patient", "Patient", |b: &Booking| cell_text(or_na(b.patient_name.as_deref()))).width(160.0),
        Column::new("provider", "Provider", |b: &Booking| cell_text(or_na(b.provider_name.as_deref()))).width(160.0),
        Column::new("service", "Service", |b: &Booking| cell_text(or_na(b.service.as_deref()))),
        Column::new("appointment_date", "Appointment", |b: &Booking| cell_text(appointment_text(b))).width(150.0),
        Column::new("amount", "Amount", |b: &Booking| cell_text(format_naira(b.amount))).numeric(),
        Column::new("status", "Status", |b: &Booking| status_badge(&b.status)).width(110.0),
    ]
}

/// Booking plus the status it is about to move to.
#[derive(Clone)]
struct PendingChange {
    booking: Booking,
    status: &'static str,
}

#[component]
pub fn BookingsList() -> impl IntoView {
    let client = StoredValue::new(use_api());
    let notify = use_notify();
    let collection = RwSignal::new(CollectionView::<Booking>::default());
    let loading = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let pending = RwSignal::new(None::<PendingChange>);

    let fetch = move || {
        let client = client.get_value();
        load_collection(collection, loading, notify, async move {
            api::fetch_bookings(&client).await
        });
    };

    let confirm_change = Callback::new(move |_: ()| {
        let Some(change) = pending.get_untracked() else {
            return;
        };
        let client = client.get_value();
        run_mutation(
            notify,
            busy,
            async move { api::set_booking_status(&client, &change.booking.id, change.status).await },
            "Booking updated",
            move || {
                pending.set(None);
                fetch();
            },
        );
    });

    let actions = Callback::new(move |booking: Booking| {
        available_transitions(&booking.status)
            .into_iter()
            .map(|status| {
                let booking = booking.clone();
                view! {
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| pending.set(Some(PendingChange { booking: booking.clone(), status }))
                    >
                        {transition_label(status)}
                    </Button>
                }
            })
            .collect_view()
            .into_any()
    });

    fetch();

    view! {
        <PageFrame page_id="a003_bookings--list" category="list">
            <ListHeader
                title="Bookings"
                count=Signal::derive(move || collection.with(|v| v.items().len()))
                loading=loading
                on_refresh=Callback::new(move |_| fetch())
            />

            <div class="page__content">
                <CollectionPanel
                    collection=collection
                    columns=columns()
                    status_options=status_options(BOOKING_STATUSES)
                    loading=loading
                    export_name="bookings"
                    search_placeholder="Search by patient, provider or service"
                    actions=actions
                />
            </div>

            {move || pending.get().map(|change| view! {
                <ConfirmDialog
                    title="Update booking"
                    message=format!(
                        "{} booking for {}?",
                        transition_label(change.status),
                        or_na(change.booking.patient_name.as_deref()),
                    )
                    confirm_label=transition_label(change.status)
                    busy=busy
                    on_confirm=confirm_change
                    on_cancel=Callback::new(move |_| pending.set(None))
                />
            })}
        </PageFrame>
    }
}
