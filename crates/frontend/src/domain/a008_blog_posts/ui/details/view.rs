use contracts::shared::status::status_label;
use leptos::prelude::*;
use thaw::*;

use super::view_model::PostDetailsViewModel;
use crate::domain::a008_blog_posts::record::POST_STATUSES;
use crate::shared::api::use_api;
use crate::shared::notify::use_notify;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};

/// Post editor. `id == None` creates a new post.
#[component]
pub fn PostDetail(id: Option<String>, on_close: Callback<()>) -> impl IntoView {
    let client = StoredValue::new(use_api());
    let notify = use_notify();
    let vm = PostDetailsViewModel::new();
    let is_new = id.is_none();
    let post_id = StoredValue::new(id.clone());

    vm.track_slug();
    vm.load_if_needed(client.get_value(), id);

    let save = move |_| {
        vm.save_command(client.get_value(), post_id.get_value(), notify, on_close);
    };

    view! {
        <PageFrame page_id="a008_blog_posts--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || if is_new { "New post".to_string() } else { vm.title.get() }}
                    </h1>
                    <Show when=move || vm.loading.get()>
                        <Spinner />
                    </Show>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                        "Close"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=save
                        disabled=Signal::derive(move || vm.saving.get() || vm.loading.get())
                    >
                        {move || if vm.saving.get() { "Saving..." } else { "Save" }}
                    </Button>
                </div>
            </div>

            {move || vm.error.get().map(|err| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{err}</span>
                </div>
            })}

            <div class="page__content post-editor">
                <Flex vertical=true gap=FlexGap::Medium>
                    <div class="form__group">
                        <label class="form__label">"Title"</label>
                        <Input value={vm.title} placeholder="Post title" />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Slug"</label>
                        <Input value={vm.slug} placeholder="derived-from-title" />
                    </div>
                    <Flex gap=FlexGap::Medium>
                        <div class="form__group">
                            <label class="form__label">"Category"</label>
                            <Input value={vm.category} placeholder="Health tips" />
                        </div>
                        <div class="form__group">
                            <label class="form__label">"Status"</label>
                            <Select value={vm.status}>
                                {POST_STATUSES.iter().map(|s| view! {
                                    <option value={*s}>{status_label(s)}</option>
                                }).collect_view()}
                            </Select>
                        </div>
                    </Flex>
                    <div class="form__group">
                        <label class="form__label">"Excerpt"</label>
                        <Textarea value={vm.excerpt} attr:rows=2 />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Body (HTML)"</label>
                        <Textarea value={vm.body_html} class="monospace-textarea" attr:rows=18 />
                    </div>
                </Flex>
            </div>
        </PageFrame>
    }
}
