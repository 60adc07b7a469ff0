use contracts::domain::a008_blog_posts::Post;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a008_blog_posts::api;
use crate::domain::a008_blog_posts::record::{is_published, POST_STATUSES};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{POST_DETAIL_PREFIX, POST_NEW_KEY};
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

fn columns() -> Vec<Column<Post>> {
    vec![
        Column::new("title", "Title", |p: &Post| cell_text(p.title.clone())).width(240.0),
        Column::new("category", "Category", |p: &Post| cell_text(or_na(p.category.as_deref()))),
        Column::new("author", "Author", |p: &Post| cell_text(or_na(p.author.as_deref()))),
        Column::new("status", "Status", |p: &Post| status_badge(&p.status)).width(100.0),
        Column::new("published_at", "Published", |p: &Post| {
            cell_text(format_opt_date(p.published_at.as_deref()))
        }),
    ]
}

#[component]
pub fn PostsList() -> impl IntoView {
    let tabs = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let client = StoredValue::new(use_api());
    let notify = use_notify();
    let collection = RwSignal::new(CollectionView::<Post>::default());
    let loading = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let deleting = RwSignal::new(None::<Post>);

    let fetch = move || {
        let client = client.get_value();
        load_collection(collection, loading, notify, async move {
            api::fetch_posts(&client).await
        });
    };

    let toggle_published = move |post: Post| {
        let client = client.get_value();
        let (next, message) = if is_published(&post) {
            ("draft", "Post unpublished")
        } else {
            ("published", "Post published")
        };
        run_mutation(
            notify,
            busy,
            async move { api::set_post_status(&client, &post.id, next).await },
            message,
            fetch,
        );
    };

    let confirm_delete = Callback::new(move |_: ()| {
        let Some(post) = deleting.get_untracked() else {
            return;
        };
        let client = client.get_value();
        run_mutation(
            notify,
            busy,
            async move { api::delete_post(&client, &post.id).await },
            "Post deleted",
            move || {
                deleting.set(None);
                fetch();
            },
        );
    });

    let actions = Callback::new(move |post: Post| {
        let tab_key = format!("{}{}", POST_DETAIL_PREFIX, post.id);
        let tab_title = post.title.clone();
        let for_status = post.clone();
        let publish_label = if is_published(&post) { "Unpublish" } else { "Publish" };
        view! {
            <div class="table__actions">
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| tabs.open_tab(&tab_key, &tab_title)
                >
                    {icon("edit")}
                </Button>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    disabled=busy
                    on_click=move |_| toggle_published(for_status.clone())
                >
                    {publish_label}
                </Button>
                <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle on_click=move |_| deleting.set(Some(post.clone()))>
                    {icon("trash")}
                </Button>
            </div>
        }
        .into_any()
    });

    fetch();

    view! {
        <PageFrame page_id="a008_blog_posts--list" category="list">
            <ListHeader
                title="Blog"
                count=Signal::derive(move || collection.with(|v| v.items().len()))
                loading=loading
                on_refresh=Callback::new(move |_| fetch())
            >
                <Button appearance=ButtonAppearance::Primary on_click=move |_| tabs.open_tab(POST_NEW_KEY, "New post")>
                    {icon("plus")}
                    " New post"
                </Button>
            </ListHeader>

            <div class="page__content">
                <CollectionPanel
                    collection=collection
                    columns=columns()
                    status_options=status_options(POST_STATUSES)
                    loading=loading
                    export_name="blog_posts"
                    search_placeholder="Search by title, slug, author or category"
                    actions=actions
                />
            </div>

            {move || deleting.get().map(|post| view! {
                <ConfirmDialog
                    title="Delete post"
                    message=format!("Delete \"{}\"? This cannot be undone.", post.title)
                    busy=busy
                    on_confirm=confirm_delete
                    on_cancel=Callback::new(move |_| deleting.set(None))
                />
            })}
        </PageFrame>
    }
}
