use super::modal_frame::ModalFrame;
use leptos::prelude::*;
use thaw::*;

/// Yes/no confirmation for destructive actions.
#[component]
pub fn ConfirmDialog(
    #[prop(into)]
    title: String,
    #[prop(into)]
    message: String,
    #[prop(optional, into)]
    confirm_label: Option<String>,
    #[prop(into)]
    busy: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let confirm_label = confirm_label.unwrap_or_else(|| "Delete".to_string());

    view! {
        <ModalFrame title=title on_close=on_cancel>
            <div class="modal-body">
                <p>{message}</p>
            </div>
            <div class="modal-footer">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_cancel.run(())
                    disabled=busy
                >
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| on_confirm.run(())
                    disabled=busy
                >
                    {move || if busy.get() { "Please wait...".to_string() } else { confirm_label.clone() }}
                </Button>
            </div>
        </ModalFrame>
    }
}
