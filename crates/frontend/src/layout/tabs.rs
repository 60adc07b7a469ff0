use crate::dashboards::d100_overview::ui::OverviewDashboard;
use crate::domain::a001_users::ui::list::UsersList;
use crate::domain::a002_providers::ui::list::ProvidersList;
use crate::domain::a003_bookings::ui::list::BookingsList;
use crate::domain::a004_documents::ui::list::DocumentsList;
use crate::domain::a005_subscriptions::ui::list::SubscriptionsList;
use crate::domain::a005_subscriptions::ui::plans::PlansList;
use crate::domain::a006_transactions::ui::list::TransactionsList;
use crate::domain::a007_staff::ui::list::StaffList;
use crate::domain::a007_staff::ui::roles::RolesList;
use crate::domain::a008_blog_posts::ui::details::PostDetail;
use crate::domain::a008_blog_posts::ui::list::PostsList;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::ev;
use leptos::prelude::*;

pub const DASHBOARD_KEY: &str = "d100_overview";
pub const POST_DETAIL_PREFIX: &str = "a008_blog_posts_detail_";
pub const POST_NEW_KEY: &str = "a008_blog_posts_new";

/// Human-readable title for a tab key; unknown keys fall back to the key.
pub fn tab_label_for_key(key: &str) -> &str {
    match key {
        "d100_overview" => "Dashboard",
        "a001_users" => "Users",
        "a002_providers" => "Providers",
        "a003_bookings" => "Bookings",
        "a004_documents" => "Documents",
        "a005_subscriptions" => "Subscriptions",
        "a005_subscription_plans" => "Plans",
        "a006_transactions" => "Transactions",
        "a007_staff" => "Staff",
        "a007_roles" => "Roles",
        "a008_blog_posts" => "Blog",
        POST_NEW_KEY => "New post",
        _ => key,
    }
}

#[component]
fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let tab_key = tab.key.clone();
    let key_for_active = tab_key.clone();
    let is_active = move || tabs_store.active.get().as_deref() == Some(key_for_active.as_str());

    let key_for_close = tab_key.clone();
    let close = Callback::new(move |_: ()| tabs_store.close_tab(&key_for_close));

    let content = match tab_key.as_str() {
        "d100_overview" => view! { <OverviewDashboard /> }.into_any(),
        "a001_users" => view! { <UsersList /> }.into_any(),
        "a002_providers" => view! { <ProvidersList /> }.into_any(),
        "a003_bookings" => view! { <BookingsList /> }.into_any(),
        "a004_documents" => view! { <DocumentsList /> }.into_any(),
        "a005_subscriptions" => view! { <SubscriptionsList /> }.into_any(),
        "a005_subscription_plans" => view! { <PlansList /> }.into_any(),
        "a006_transactions" => view! { <TransactionsList /> }.into_any(),
        "a007_staff" => view! { <StaffList /> }.into_any(),
        "a007_roles" => view! { <RolesList /> }.into_any(),
        "a008_blog_posts" => view! { <PostsList /> }.into_any(),
        POST_NEW_KEY => view! { <PostDetail id=None on_close=close /> }.into_any(),
        k if k.starts_with(POST_DETAIL_PREFIX) => {
            let id = k.trim_start_matches(POST_DETAIL_PREFIX).to_string();
            view! { <PostDetail id=Some(id) on_close=close /> }.into_any()
        }
        other => {
            log::warn!("Unknown tab type: {}", other);
            view! { <div class="placeholder">"Not implemented yet"</div> }.into_any()
        }
    };

    view! {
        <div class="tab-page" class:hidden=move || !is_active() data-tab-key=tab_key>
            {content}
        </div>
    }
}

#[component]
fn TabHandle(tab: TabData) -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let key_for_active = tab.key.clone();
    let is_active = Memo::new(move |_| tabs_store.active.get().as_deref() == Some(key_for_active.as_str()));

    let key_for_click = tab.key.clone();
    let key_for_close = tab.key.clone();
    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        tabs_store.close_tab(&key_for_close);
    };

    view! {
        <div class="tab" class:active=is_active on:click=move |_| tabs_store.activate_tab(&key_for_click)>
            <span>{tab.title}</span>
            <button class="tab-close" on:click=on_close>"×"</button>
        </div>
    }
}

#[component]
pub fn Tabs() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="tabs-container">
            <div class="tabs-bar">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| view! { <TabHandle tab=tab /> }
                />
            </div>
            <div class="tab-content">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab: TabData| view! { <TabPage tab=tab tabs_store=tabs_store /> }
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_labels() {
        assert_eq!(tab_label_for_key("a001_users"), "Users");
        assert_eq!(tab_label_for_key(DASHBOARD_KEY), "Dashboard");
        assert_eq!(tab_label_for_key("zzz_unknown"), "zzz_unknown");
    }
}
