//! Root wrapper for every page rendered inside a tab.
//!
//! Sets `id="{entity}--{category}"` (e.g. `"a001_users--list"`) and
//! `data-page-category` on the root element so a page found in the DOM
//! inspector can be traced back to its module.

use leptos::prelude::*;

/// List of records with filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";
/// Detail / edit form for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";
/// KPI dashboard.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";
/// System page (login, settings).
pub const PAGE_CAT_SYSTEM: &str = "system";

#[component]
pub fn PageFrame(
    /// `{entity}--{category}`, e.g. `"a001_users--list"`.
    page_id: &'static str,
    /// One of the `PAGE_CAT_*` constants.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
