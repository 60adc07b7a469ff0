use contracts::dashboards::d100_overview::DashboardStats;
use contracts::domain::a003_bookings::Booking;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::api::{self, RECENT_BOOKINGS};
use crate::domain::a003_bookings::api as bookings_api;
use crate::domain::a003_bookings::record::appointment_text;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api::use_api;
use crate::shared::components::{status_badge, StatCard};
use crate::shared::icons::icon;
use crate::shared::notify::use_notify;
use crate::shared::number_format::{format_count, format_naira};
use crate::shared::or_na;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let tabs = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let client = StoredValue::new(use_api());
    let notify = use_notify();
    let stats = RwSignal::new(None::<DashboardStats>);
    let recent = RwSignal::new(Vec::<Booking>::new());
    let recent_revision = StoredValue::new(0u64);
    let loading = RwSignal::new(false);

    let load = move || {
        let client = client.get_value();
        loading.set(true);
        spawn_local(async move {
            match api::fetch_stats(&client).await {
                Ok(s) => stats.set(Some(s)),
                Err(e) => {
                    log::error!("Dashboard stats failed: {}", e);
                    notify.report(&e);
                }
            }
            match bookings_api::fetch_recent_bookings(&client, RECENT_BOOKINGS).await {
                Ok(list) => {
                    recent_revision.update_value(|r| *r += 1);
                    recent.set(list.into_iter().take(RECENT_BOOKINGS).collect());
                }
                Err(e) => log::error!("Recent bookings failed: {}", e),
            }
            loading.set(false);
        });
    };

    let kpi = move |f: fn(&DashboardStats) -> String| {
        Signal::derive(move || {
            stats.with(|s| match s {
                Some(s) => f(s),
                None if loading.get() => "...".to_string(),
                None => "-".to_string(),
            })
        })
    };

    load();

    view! {
        <PageFrame page_id="d100_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Dashboard"</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| load() disabled=loading>
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard label="Users" icon_name="users" value=kpi(|s| format_count(s.users)) />
                    <StatCard label="Providers" icon_name="building" value=kpi(|s| format_count(s.providers)) />
                    <StatCard label="Bookings" icon_name="calendar" value=kpi(|s| format_count(s.bookings)) />
                    <StatCard label="Revenue" icon_name="credit-card" value=kpi(|s| format_naira(s.revenue)) />
                </div>

                <div class="card">
                    <div class="card__header">
                        <h3 class="card__title">"Recent bookings"</h3>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| tabs.open_tab("a003_bookings", "Bookings")
                        >
                            "View all"
                        </Button>
                    </div>
                    <div class="card__body">
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Patient"</TableHeaderCell>
                                    <TableHeaderCell>"Provider"</TableHeaderCell>
                                    <TableHeaderCell>"Appointment"</TableHeaderCell>
                                    <TableHeaderCell>"Amount"</TableHeaderCell>
                                    <TableHeaderCell>"Status"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || {
                                        let revision = recent_revision.get_value();
                                        recent
                                            .get()
                                            .into_iter()
                                            .map(|b| ((b.id.clone(), revision), b))
                                            .collect::<Vec<_>>()
                                    }
                                    key=|(key, _): &((String, u64), Booking)| key.clone()
                                    children=|(_, b): ((String, u64), Booking)| {
                                        let patient = or_na(b.patient_name.as_deref());
                                        let provider = or_na(b.provider_name.as_deref());
                                        let appointment = appointment_text(&b);
                                        let amount = format_naira(b.amount);
                                        let status = status_badge(&b.status);
                                        view! {
                                            <TableRow>
                                                <TableCell>{patient}</TableCell>
                                                <TableCell>{provider}</TableCell>
                                                <TableCell>{appointment}</TableCell>
                                                <TableCell class="table__cell--numeric">{amount}</TableCell>
                                                <TableCell>{status}</TableCell>
                                            </TableRow>
                                        }
                                    }
                                />
                            </TableBody>
                        </Table>
                        <Show when=move || recent.with(|r| r.is_empty()) && !loading.get()>
                            <div class="table__empty">"No bookings yet"</div>
                        </Show>
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}
