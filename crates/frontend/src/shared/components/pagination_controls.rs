use crate::shared::collection::{page_label, PAGE_SIZE_OPTIONS};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// First / previous / "Page X of Y" / next / last, plus the page-size picker.
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Rows after filtering
    #[prop(into)]
    total_count: Signal<usize>,

    #[prop(into)]
    page_size: Signal<usize>,

    on_page_change: Callback<usize>,

    on_page_size_change: Callback<usize>,

    /// Defaults to 5/10/20/30/40/50
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let page_size_opts = page_size_options.unwrap_or_else(|| PAGE_SIZE_OPTIONS.to_vec());
    let at_start = move || current_page.get() == 0;
    let at_end = move || current_page.get() + 1 >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(0)
                disabled=at_start
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 0 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=at_start
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || format!(
                    "{} ({} rows)",
                    page_label(current_page.get(), total_pages.get()),
                    total_count.get()
                )}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page + 1 < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=at_end
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let total = total_pages.get();
                    if total > 0 {
                        on_page_change.run(total - 1);
                    }
                }
                disabled=at_end
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse() {
                        on_page_size_change.run(size);
                    }
                }
                prop:value=move || page_size.get().to_string()
            >
                {page_size_opts.iter().map(|&size| {
                    view! {
                        <option value=size.to_string() selected=move || page_size.get() == size>
                            {format!("Show {}", size)}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
