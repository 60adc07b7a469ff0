//! Navigation menu, grouped by area.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (id, label, icon)
    admin_only: bool,
}

fn menu_item(key: &'static str, icon_name: &'static str) -> (&'static str, &'static str, &'static str) {
    (key, tab_label_for_key(key), icon_name)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "d100_overview",
            label: tab_label_for_key("d100_overview"),
            icon: "bar-chart",
            items: vec![],
            admin_only: false,
        },
        MenuGroup {
            id: "accounts",
            label: "Accounts",
            icon: "users",
            items: vec![
                menu_item("a001_users", "users"),
                menu_item("a002_providers", "building"),
                menu_item("a004_documents", "file-text"),
            ],
            admin_only: false,
        },
        MenuGroup {
            id: "operations",
            label: "Operations",
            icon: "calendar",
            items: vec![
                menu_item("a003_bookings", "calendar"),
                menu_item("a005_subscriptions", "credit-card"),
                menu_item("a005_subscription_plans", "credit-card"),
                menu_item("a006_transactions", "receipt"),
            ],
            admin_only: false,
        },
        MenuGroup {
            id: "content",
            label: "Content",
            icon: "book",
            items: vec![menu_item("a008_blog_posts", "book")],
            admin_only: false,
        },
        MenuGroup {
            id: "administration",
            label: "Administration",
            icon: "shield",
            items: vec![menu_item("a007_staff", "shield"), menu_item("a007_roles", "shield")],
            admin_only: true,
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();

    let is_admin = auth_state.with_untracked(|state| {
        state
            .session
            .as_ref()
            .map(|s| s.user.is_super_admin())
            .unwrap_or(false)
    });

    let expanded_groups = RwSignal::new(vec!["accounts".to_string(), "operations".to_string()]);

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups().into_iter().filter_map(|group| {
                if group.admin_only && !is_admin {
                    return None;
                }

                let group_id = group.id.to_string();
                let has_children = !group.items.is_empty();
                let group_id_stored = StoredValue::new(group_id.clone());
                let group_id_for_exp = group_id.clone();
                let group_id_for_click = group_id.clone();

                Some(view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || {
                                let gid = group_id_stored.get_value();
                                !has_children && ctx.active.get().as_deref() == Some(gid.as_str())
                            }
                            on:click=move |_| {
                                if has_children {
                                    let gid = group_id_for_click.clone();
                                    expanded_groups.update(move |items| {
                                        if let Some(pos) = items.iter().position(|x| x == &gid) {
                                            items.remove(pos);
                                        } else {
                                            items.push(gid);
                                        }
                                    });
                                } else {
                                    ctx.open_tab(group.id, group.label);
                                }
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            {has_children.then(|| {
                                let gid_exp = group_id_for_exp.clone();
                                view! {
                                    <div
                                        class="app-sidebar__chevron"
                                        class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&gid_exp)
                                    >
                                        {icon("chevron-right")}
                                    </div>
                                }
                            })}
                        </div>

                        {has_children.then(|| {
                            let gid_show = group_id.clone();
                            let items_stored = StoredValue::new(group.items.clone());
                            view! {
                                <Show when=move || expanded_groups.get().contains(&gid_show)>
                                    <div class="app-sidebar__children">
                                        {items_stored.get_value().into_iter().map(|(id, label, icon_name)| {
                                            view! {
                                                <div
                                                    class="app-sidebar__item app-sidebar__item--child"
                                                    class:app-sidebar__item--active=move || {
                                                        ctx.active.get().as_deref() == Some(id)
                                                    }
                                                    on:click=move |_| ctx.open_tab(id, label)
                                                >
                                                    <div class="app-sidebar__item-content">
                                                        {icon(icon_name)}
                                                        <span>{label}</span>
                                                    </div>
                                                </div>
                                            }
                                        }).collect_view()}
                                    </div>
                                </Show>
                            }
                        })}
                    </div>
                })
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_keys_have_labels() {
        for group in get_menu_groups() {
            for (key, label, _) in group.items {
                assert_ne!(label, key, "missing label for {key}");
            }
        }
    }
}
