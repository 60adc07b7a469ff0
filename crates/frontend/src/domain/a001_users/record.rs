use contracts::domain::a001_users::User;

use crate::shared::collection::CollectionRecord;
use crate::shared::date_utils::format_opt_date;
use crate::shared::export::ExcelExportable;
use crate::shared::list_utils::{Searchable, SortKey, Sortable};
use crate::shared::or_na;

pub const USER_STATUSES: &[&str] = &["active", "inactive"];

impl Searchable for User {
    fn search_text(&self) -> String {
        [
            self.full_name().as_str(),
            self.email.as_str(),
            self.phone.as_deref().unwrap_or_default(),
            self.plan_name().unwrap_or_default(),
            self.status.as_str(),
        ]
        .join(" ")
    }
}

impl Sortable for User {
    fn sort_key(&self, field: &str) -> SortKey {
        match field {
            "name" => SortKey::text(&self.full_name()),
            "email" => SortKey::text(&self.email),
            "phone" => SortKey::opt_text(self.phone.as_deref()),
            "plan" => SortKey::opt_text(self.plan_name()),
            "status" => SortKey::text(&self.status),
            "created_at" => SortKey::opt_text(self.created_at.as_deref()),
            _ => SortKey::Empty,
        }
    }
}

impl CollectionRecord for User {
    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn status(&self) -> &str {
        &self.status
    }
}

impl ExcelExportable for User {
    fn headers() -> Vec<&'static str> {
        vec!["Name", "Email", "Phone", "Plan", "Status", "Joined"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            or_na(Some(self.full_name().as_str())),
            self.email.clone(),
            or_na(self.phone.as_deref()),
            or_na(self.plan_name()),
            self.status.clone(),
            format_opt_date(self.created_at.as_deref()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_users::UserSubscription;

    fn user() -> User {
        User {
            id: "u1".into(),
            first_name: Some("Ada".into()),
            last_name: Some("Obi".into()),
            email: "ada@medbankr.com".into(),
            phone: None,
            status: "active".into(),
            created_at: Some("2024-03-15T14:02:00Z".into()),
            subscription: Some(UserSubscription {
                plan_name: Some("Family".into()),
                status: Some("active".into()),
                expires_at: None,
            }),
        }
    }

    #[test]
    fn test_search_covers_name_and_plan() {
        let u = user();
        assert!(u.matches_filter("ada obi"));
        assert!(u.matches_filter("FAMILY"));
        assert!(!u.matches_filter("premium"));
    }

    #[test]
    fn test_csv_row_fills_missing_values() {
        let row = user().to_csv_row();
        assert_eq!(row.len(), User::headers().len());
        assert_eq!(row[2], "N/A");
        assert_eq!(row[5], "15 Mar 2024");
    }
}
