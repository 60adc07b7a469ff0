use contracts::domain::a004_documents::{Document, ReviewDocumentDto};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a004_documents::api;
use crate::domain::a004_documents::record::{is_reviewable, DOCUMENT_STATUSES};
use crate::shared::api::use_api;
use crate::shared::collection::{status_options, CollectionView};
use crate::shared::components::{
    cell_text, status_badge, CollectionPanel, Column, ListHeader, ModalFrame,
};
use crate::shared::date_utils::format_opt_date;
use crate::shared::icons::icon;
use crate::shared::notify::{use_notify, NotificationService};
use crate::shared::or_na;
use crate::shared::page_frame::PageFrame;
use crate::shared::remote::{load_collection, run_mutation};

fn columns() -> Vec<Column<Document>> {
    vec![
        Column::new("title", "Document", |d: &Document| cell_text(d.title.clone())).width(180.0),
        Column::new("provider", "Provider", |d: &Document| cell_text(or_na(d.provider_name.as_deref()))).width(160.0),
        Column::new("document_type", "Type", |d: &Document| cell_text(or_na(d.document_type.as_deref()))),
        Column::new("status", "Status", |d: &Document| status_badge(&d.status)).width(100.0),
        Column::new("uploaded_at", "Uploaded", |d: &Document| cell_text(format_opt_date(d.uploaded_at.as_deref()))),
    ]
}

fn open_file(url: &str, notify: NotificationService) {
    let opened = web_sys::window()
        .and_then(|w| w.open_with_url_and_target(url, "_blank").ok())
        .flatten();
    if opened.is_none() {
        log::warn!("Popup blocked for {}", url);
        notify.error("Could not open the file. Allow pop-ups for this site.");
    }
}

#[component]
pub fn DocumentsList() -> impl IntoView {
    let client = StoredValue::new(use_api());
    let notify = use_notify();
    let collection = RwSignal::new(CollectionView::<Document>::default());
    let loading = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let rejecting = RwSignal::new(None::<Document>);
    let reason = RwSignal::new(String::new());

    let fetch = move || {
        let client = client.get_value();
        load_collection(collection, loading, notify, async move {
            api::fetch_documents(&client).await
        });
    };

    let review = move |document: Document, dto: ReviewDocumentDto, message: &'static str| {
        let client = client.get_value();
        run_mutation(
            notify,
            busy,
            async move { api::review_document(&client, &document.id, &dto).await },
            message,
            move || {
                rejecting.set(None);
                fetch();
            },
        );
    };

    let approve = move |document: Document| {
        let dto = ReviewDocumentDto {
            status: "approved".to_string(),
            reason: None,
        };
        review(document, dto, "Document approved");
    };

    let submit_rejection = move |_| {
        let Some(document) = rejecting.get_untracked() else {
            return;
        };
        let text = reason.get_untracked().trim().to_string();
        if text.is_empty() {
            notify.error("Give a reason for the rejection");
            return;
        }
        let dto = ReviewDocumentDto {
            status: "rejected".to_string(),
            reason: Some(text),
        };
        review(document, dto, "Document rejected");
    };

    let actions = Callback::new(move |document: Document| {
        let file_url = document.file_url.clone().filter(|u| !u.trim().is_empty());
        let reviewable = is_reviewable(&document);
        let for_approve = document.clone();
        view! {
            <div class="table__actions">
                {file_url.map(|url| view! {
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| open_file(&url, notify)
                    >
                        {icon("external-link")}
                    </Button>
                })}
                {reviewable.then(|| view! {
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        disabled=busy
                        on_click=move |_| approve(for_approve.clone())
                    >
                        {icon("check")}
                        " Approve"
                    </Button>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| {
                            reason.set(String::new());
                            rejecting.set(Some(document.clone()));
                        }
                    >
                        {icon("x")}
                        " Reject"
                    </Button>
                })}
            </div>
        }
        .into_any()
    });

    fetch();

    view! {
        <PageFrame page_id="a004_documents--list" category="list">
            <ListHeader
                title="Documents"
                count=Signal::derive(move || collection.with(|v| v.items().len()))
                loading=loading
                on_refresh=Callback::new(move |_| fetch())
            />

            <div class="page__content">
                <CollectionPanel
                    collection=collection
                    columns=columns()
                    status_options=status_options(DOCUMENT_STATUSES)
                    loading=loading
                    export_name="documents"
                    search_placeholder="Search by document, provider or type"
                    actions=actions
                />
            </div>

            {move || rejecting.get().map(|document| view! {
                <ModalFrame
                    title=format!("Reject {}", document.title)
                    on_close=Callback::new(move |_| rejecting.set(None))
                >
                    <div class="modal-body">
                        <div class="form__group">
                            <label class="form__label">"Reason"</label>
                            <Textarea value=reason placeholder="Shown to the provider" attr:rows=3 />
                        </div>
                    </div>
                    <div class="modal-footer">
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| rejecting.set(None)
                            disabled=busy
                        >
                            "Cancel"
                        </Button>
                        <Button appearance=ButtonAppearance::Primary on_click=submit_rejection disabled=busy>
                            "Reject"
                        </Button>
                    </div>
                </ModalFrame>
            })}
        </PageFrame>
    }
}
