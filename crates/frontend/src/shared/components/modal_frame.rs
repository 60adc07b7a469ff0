use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Overlay + dialog box with a title bar. Clicking the backdrop closes it.
#[component]
pub fn ModalFrame(
    #[prop(into)]
    title: String,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                        {icon("x")}
                    </Button>
                </div>
                {children()}
            </div>
        </div>
    }
}
