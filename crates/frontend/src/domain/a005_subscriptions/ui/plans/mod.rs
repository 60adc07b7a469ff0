use contracts::domain::a005_subscriptions::{CreatePlanDto, SubscriptionPlan, VerifyPaymentDto};
use contracts::shared::status::status_label;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a005_subscriptions::api;
use crate::domain::a005_subscriptions::checkout::{open_checkout, CheckoutOptions};
use crate::domain::a005_subscriptions::record::PLAN_INTERVALS;
use crate::shared::api::use_api;
use crate::shared::collection::CollectionView;
use crate::shared::components::{cell_text, CollectionPanel, Column, ListHeader, ModalFrame};
use crate::shared::icons::icon;
use crate::shared::notify::use_notify;
use crate::shared::number_format::format_naira;
use crate::shared::or_na;
use crate::shared::page_frame::PageFrame;
use crate::shared::remote::{load_collection, run_mutation};

fn columns() -> Vec<Column<SubscriptionPlan>> {
    vec![
        Column::new("name", "Plan", |p: &SubscriptionPlan| cell_text(p.name.clone())).width(160.0),
        Column::new("amount", "Price", |p: &SubscriptionPlan| cell_text(format_naira(p.amount))).numeric(),
        Column::new("interval", "Billing", |p: &SubscriptionPlan| {
            cell_text(p.interval.as_deref().map(status_label).unwrap_or_else(|| or_na(None)))
        }),
        Column::new("description", "Description", |p: &SubscriptionPlan| {
            cell_text(or_na(p.description.as_deref()))
        })
        .unsorted()
        .width(240.0),
    ]
}

/// Validates the create-plan form.
fn parse_plan(name: &str, amount: &str, interval: &str, description: &str) -> Result<CreatePlanDto, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Plan name is required".to_string());
    }
    let amount: f64 = amount
        .trim()
        .replace(',', "")
        .parse()
        .map_err(|_| "Price must be a number".to_string())?;
    if amount <= 0.0 {
        return Err("Price must be greater than zero".to_string());
    }
    let description = description.trim();
    Ok(CreatePlanDto {
        name: name.to_string(),
        amount,
        interval: interval.to_string(),
        description: (!description.is_empty()).then(|| description.to_string()),
    })
}

fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    match value.split_once('@') {
        Some((user, domain)) => !user.is_empty() && domain.contains('.') && !domain.ends_with('.'),
        None => false,
    }
}

#[component]
pub fn PlansList() -> impl IntoView {
    let client = StoredValue::new(use_api());
    let notify = use_notify();
    let collection = RwSignal::new(CollectionView::<SubscriptionPlan>::default());
    let loading = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let creating = RwSignal::new(false);
    let name = RwSignal::new(String::new());
    let amount = RwSignal::new(String::new());
    let interval = RwSignal::new(PLAN_INTERVALS[0].to_string());
    let description = RwSignal::new(String::new());

    let subscribing = RwSignal::new(None::<SubscriptionPlan>);
    let email = RwSignal::new(String::new());

    let fetch = move || {
        let client = client.get_value();
        load_collection(collection, loading, notify, async move {
            api::fetch_plans(&client).await
        });
    };

    let open_create = move || {
        name.set(String::new());
        amount.set(String::new());
        interval.set(PLAN_INTERVALS[0].to_string());
        description.set(String::new());
        creating.set(true);
    };

    let submit_plan = move |_| {
        let dto = match parse_plan(
            &name.get_untracked(),
            &amount.get_untracked(),
            &interval.get_untracked(),
            &description.get_untracked(),
        ) {
            Ok(dto) => dto,
            Err(e) => {
                notify.error(e);
                return;
            }
        };
        let client = client.get_value();
        run_mutation(
            notify,
            busy,
            async move { api::create_plan(&client, &dto).await },
            "Plan created",
            move || {
                creating.set(false);
                fetch();
            },
        );
    };

    let start_checkout = move |_| {
        let Some(plan) = subscribing.get_untracked() else {
            return;
        };
        let email_val = email.get_untracked();
        if !looks_like_email(&email_val) {
            notify.error("Enter the subscriber's email address");
            return;
        }
        let client = client.get_value();
        busy.set(true);
        spawn_local(async move {
            let options = CheckoutOptions::new(&email_val, &plan.id, &plan.name, plan.amount);
            match open_checkout(&options).await {
                Ok(Some(reference)) => {
                    log::info!("Checkout completed for {} ({})", options.email, reference);
                    let dto = VerifyPaymentDto {
                        reference,
                        plan_id: plan.id.clone(),
                        email: options.email.clone(),
                    };
                    match api::verify_payment(&client, &dto).await {
                        Ok(()) => {
                            notify.success(format!("{} subscribed to {}", dto.email, plan.name));
                            subscribing.set(None);
                        }
                        Err(e) => notify.report(&e),
                    }
                }
                Ok(None) => log::info!("Checkout closed without payment"),
                Err(e) => {
                    log::error!("{}", e);
                    notify.error(e.to_string());
                }
            }
            busy.set(false);
        });
    };

    let actions = Callback::new(move |plan: SubscriptionPlan| {
        view! {
            <Button
                size=ButtonSize::Small
                appearance=ButtonAppearance::Subtle
                on_click=move |_| {
                    email.set(String::new());
                    subscribing.set(Some(plan.clone()));
                }
            >
                {icon("credit-card")}
                " Subscribe"
            </Button>
        }
        .into_any()
    });

    fetch();

    view! {
        <PageFrame page_id="a005_subscription_plans--list" category="list">
            <ListHeader
                title="Plans"
                count=Signal::derive(move || collection.with(|v| v.items().len()))
                loading=loading
                on_refresh=Callback::new(move |_| fetch())
            >
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open_create()>
                    {icon("plus")}
                    " New plan"
                </Button>
            </ListHeader>

            <div class="page__content">
                <CollectionPanel
                    collection=collection
                    columns=columns()
                    loading=loading
                    export_name="subscription_plans"
                    search_placeholder="Search plans"
                    actions=actions
                />
            </div>

            <Show when=move || creating.get()>
                <ModalFrame title="New plan" on_close=Callback::new(move |_| creating.set(false))>
                    <div class="modal-body">
                        <Flex vertical=true gap=FlexGap::Medium>
                            <div class="form__group">
                                <label class="form__label">"Name"</label>
                                <Input value=name placeholder="Family Plus" />
                            </div>
                            <div class="form__group">
                                <label class="form__label">"Price (NGN)"</label>
                                <Input value=amount placeholder="4500" />
                            </div>
                            <div class="form__group">
                                <label class="form__label">"Billing interval"</label>
                                <Select value=interval>
                                    {PLAN_INTERVALS.iter().map(|i| view! {
                                        <option value={*i}>{status_label(i)}</option>
                                    }).collect_view()}
                                </Select>
                            </div>
                            <div class="form__group">
                                <label class="form__label">"Description"</label>
                                <Textarea value=description attr:rows=3 />
                            </div>
                        </Flex>
                    </div>
                    <div class="modal-footer">
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| creating.set(false) disabled=busy>
                            "Cancel"
                        </Button>
                        <Button appearance=ButtonAppearance::Primary on_click=submit_plan disabled=busy>
                            "Create"
                        </Button>
                    </div>
                </ModalFrame>
            </Show>

            {move || subscribing.get().map(|plan| view! {
                <ModalFrame
                    title=format!("Subscribe to {}", plan.name)
                    on_close=Callback::new(move |_| subscribing.set(None))
                >
                    <div class="modal-body">
                        <p>{format!("{} per {}", format_naira(plan.amount), plan.interval.clone().unwrap_or_else(|| "period".to_string()))}</p>
                        <div class="form__group">
                            <label class="form__label">"Subscriber email"</label>
                            <Input value=email input_type=InputType::Email />
                        </div>
                    </div>
                    <div class="modal-footer">
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| subscribing.set(None) disabled=busy>
                            "Cancel"
                        </Button>
                        <Button appearance=ButtonAppearance::Primary on_click=start_checkout disabled=busy>
                            {move || if busy.get() { "Waiting for payment..." } else { "Continue to payment" }}
                        </Button>
                    </div>
                </ModalFrame>
            })}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plan() {
        let dto = parse_plan(" Family ", "4,500", "monthly", "").unwrap();
        assert_eq!(dto.name, "Family");
        assert_eq!(dto.amount, 4_500.0);
        assert_eq!(dto.description, None);

        assert!(parse_plan("", "100", "monthly", "").is_err());
        assert!(parse_plan("Basic", "abc", "monthly", "").is_err());
        assert!(parse_plan("Basic", "0", "monthly", "").is_err());
    }

    #[test]
    fn test_looks_like_email() {
        assert!(looks_like_email("ada@medbankr.com"));
        assert!(!looks_like_email("ada@medbankr"));
        assert!(!looks_like_email("@medbankr.com"));
        assert!(!looks_like_email("ada"));
    }
}
