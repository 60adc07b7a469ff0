use contracts::domain::a002_providers::{Provider, UpdateProviderDto};
use contracts::shared::status::status_label;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a002_providers::api;
use crate::domain::a002_providers::record::PROVIDER_STATUSES;
use crate::shared::api::use_api;
use crate::shared::components::ModalFrame;
use crate::shared::notify::use_notify;
use crate::shared::remote::run_mutation;

/// Form state; each field is bound to one input.
#[derive(Clone, Copy)]
struct ProviderForm {
    name: RwSignal<String>,
    email: RwSignal<String>,
    phone: RwSignal<String>,
    specialty: RwSignal<String>,
    address: RwSignal<String>,
    status: RwSignal<String>,
}

impl ProviderForm {
    fn from_dto(dto: UpdateProviderDto) -> Self {
        Self {
            name: RwSignal::new(dto.name),
            email: RwSignal::new(dto.email.unwrap_or_default()),
            phone: RwSignal::new(dto.phone.unwrap_or_default()),
            specialty: RwSignal::new(dto.specialty.unwrap_or_default()),
            address: RwSignal::new(dto.address.unwrap_or_default()),
            status: RwSignal::new(dto.status.to_lowercase()),
        }
    }

    fn to_dto(self) -> Result<UpdateProviderDto, String> {
        let optional = |s: RwSignal<String>| {
            let v = s.get_untracked().trim().to_string();
            (!v.is_empty()).then_some(v)
        };
        let name = self.name.get_untracked().trim().to_string();
        if name.is_empty() {
            return Err("Name is required".to_string());
        }
        Ok(UpdateProviderDto {
            name,
            email: optional(self.email),
            phone: optional(self.phone),
            specialty: optional(self.specialty),
            address: optional(self.address),
            status: self.status.get_untracked(),
        })
    }
}

#[component]
pub fn ProviderEditForm(
    provider: Provider,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let client = StoredValue::new(use_api());
    let notify = use_notify();
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let form = ProviderForm::from_dto(UpdateProviderDto::from(&provider));
    let provider_id = StoredValue::new(provider.id.clone());

    let save = move |_| {
        let dto = match form.to_dto() {
            Ok(dto) => dto,
            Err(e) => {
                error.set(Some(e));
                return;
            }
        };
        error.set(None);
        let client = client.get_value();
        let id = provider_id.get_value();
        run_mutation(
            notify,
            busy,
            async move { api::update_provider(&client, &id, &dto).await },
            "Provider updated",
            move || on_saved.run(()),
        );
    };

    view! {
        <ModalFrame title=format!("Edit {}", provider.name) on_close=on_close>
            <div class="modal-body">
                {move || error.get().map(|e| view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__text">{e}</span>
                    </div>
                })}
                <Flex vertical=true gap=FlexGap::Medium>
                    <div class="form__group">
                        <label class="form__label">"Name"</label>
                        <Input value={form.name} />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Email"</label>
                        <Input value={form.email} input_type=InputType::Email />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Phone"</label>
                        <Input value={form.phone} />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Specialty"</label>
                        <Input value={form.specialty} />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Address"</label>
                        <Textarea value={form.address} attr:rows=2 />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Status"</label>
                        <Select value={form.status}>
                            {PROVIDER_STATUSES.iter().map(|s| view! {
                                <option value={*s}>{status_label(s)}</option>
                            }).collect_view()}
                        </Select>
                    </div>
                </Flex>
            </div>
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(()) disabled=busy>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=save disabled=busy>
                    {move || if busy.get() { "Saving..." } else { "Save" }}
                </Button>
            </div>
        </ModalFrame>
    }
}
