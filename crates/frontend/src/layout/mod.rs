pub mod global_context;
pub mod sidebar;
pub mod tabs;
pub mod top_header;

use global_context::AppGlobalContext;
use leptos::prelude::*;

/// Application shell.
///
/// ```text
/// +-----------------------------------+
/// |            TopHeader              |
/// +-----------------------------------+
/// |  Sidebar  |   Tabs (one page      |
/// |           |   per open tab)       |
/// +-----------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    // land on the dashboard
    if ctx.opened.with_untracked(|tabs| tabs.is_empty()) {
        ctx.open_tab(tabs::DASHBOARD_KEY, tabs::tab_label_for_key(tabs::DASHBOARD_KEY));
    }

    view! {
        <div class="app-layout">
            <top_header::TopHeader />
            <div class="app-body">
                <div data-zone="left" class="app-sidebar" class:hidden=move || !ctx.left_open.get()>
                    <sidebar::Sidebar />
                </div>
                <div data-zone="center" class="app-main">
                    <tabs::Tabs />
                </div>
            </div>
        </div>
    }
}
