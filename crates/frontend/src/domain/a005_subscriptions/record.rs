use contracts::domain::a005_subscriptions::{Subscription, SubscriptionPlan};

use crate::shared::collection::CollectionRecord;
use crate::shared::date_utils::format_opt_date;
use crate::shared::export::ExcelExportable;
use crate::shared::list_utils::{Searchable, SortKey, Sortable};
use crate::shared::number_format::format_number;
use crate::shared::or_na;

pub const SUBSCRIPTION_STATUSES: &[&str] = &["active", "expired", "cancelled"];
pub const PLAN_INTERVALS: &[&str] = &["monthly", "quarterly", "annually"];

impl Searchable for Subscription {
    fn search_text(&self) -> String {
        [
            self.user_email.as_deref().unwrap_or_default(),
            self.plan_name().unwrap_or_default(),
            self.status.as_str(),
        ]
        .join(" ")
    }
}

impl Sortable for Subscription {
    fn sort_key(&self, field: &str) -> SortKey {
        match field {
            "user_email" => SortKey::opt_text(self.user_email.as_deref()),
            "plan" => SortKey::opt_text(self.plan_name()),
            "amount" => SortKey::number(self.amount),
            "status" => SortKey::text(&self.status),
            "start_date" => SortKey::opt_text(self.start_date.as_deref()),
            "end_date" => SortKey::opt_text(self.end_date.as_deref()),
            _ => SortKey::Empty,
        }
    }
}

impl CollectionRecord for Subscription {
    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn status(&self) -> &str {
        &self.status
    }
}

impl ExcelExportable for Subscription {
    fn headers() -> Vec<&'static str> {
        vec!["User", "Plan", "Amount (NGN)", "Status", "Start", "End"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            or_na(self.user_email.as_deref()),
            or_na(self.plan_name()),
            format_number(self.amount),
            self.status.clone(),
            format_opt_date(self.start_date.as_deref()),
            format_opt_date(self.end_date.as_deref()),
        ]
    }
}

impl Searchable for SubscriptionPlan {
    fn search_text(&self) -> String {
        [
            self.name.as_str(),
            self.interval.as_deref().unwrap_or_default(),
            self.description.as_deref().unwrap_or_default(),
        ]
        .join(" ")
    }
}

impl Sortable for SubscriptionPlan {
    fn sort_key(&self, field: &str) -> SortKey {
        match field {
            "name" => SortKey::text(&self.name),
            "amount" => SortKey::number(self.amount),
            "interval" => SortKey::opt_text(self.interval.as_deref()),
            _ => SortKey::Empty,
        }
    }
}

impl CollectionRecord for SubscriptionPlan {
    fn record_id(&self) -> String {
        self.id.clone()
    }

    /// Plans carry no status.
    fn status(&self) -> &str {
        ""
    }
}

impl ExcelExportable for SubscriptionPlan {
    fn headers() -> Vec<&'static str> {
        vec!["Plan", "Amount (NGN)", "Interval", "Description"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            format_number(self.amount),
            or_na(self.interval.as_deref()),
            or_na(self.description.as_deref()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscription_search_uses_nested_plan() {
        let sub: Subscription = serde_json::from_str(
            r#"{"id":"s1","userEmail":"ada@medbankr.com","plan":{"id":"p1","name":"Family Plus","amount":4500},"amount":4500,"status":"active"}"#,
        )
        .unwrap();
        assert!(sub.matches_filter("family"));
        assert_eq!(sub.to_csv_row()[1], "Family Plus");
        assert_eq!(sub.to_csv_row()[4], "N/A");
    }

    #[test]
    fn test_plan_amount_sort() {
        let cheap = SubscriptionPlan {
            id: "p1".into(),
            name: "Basic".into(),
            amount: 1_500.0,
            interval: None,
            description: None,
        };
        let dear = SubscriptionPlan {
            amount: 12_000.0,
            ..cheap.clone()
        };
        assert_eq!(cheap.compare_by_field(&dear, "amount"), std::cmp::Ordering::Less);
    }
}
