use contracts::domain::a007_staff::{Role, Staff};

use crate::shared::collection::CollectionRecord;
use crate::shared::date_utils::format_opt_date;
use crate::shared::export::ExcelExportable;
use crate::shared::list_utils::{Searchable, SortKey, Sortable};
use crate::shared::or_na;

pub const STAFF_STATUSES: &[&str] = &["active", "inactive"];

impl Searchable for Staff {
    fn search_text(&self) -> String {
        [
            self.full_name().as_str(),
            self.email.as_str(),
            self.role_name().unwrap_or_default(),
            self.status.as_str(),
        ]
        .join(" ")
    }
}

impl Sortable for Staff {
    fn sort_key(&self, field: &str) -> SortKey {
        match field {
            "name" => SortKey::text(&self.full_name()),
            "email" => SortKey::text(&self.email),
            "role" => SortKey::opt_text(self.role_name()),
            "status" => SortKey::text(&self.status),
            "created_at" => SortKey::opt_text(self.created_at.as_deref()),
            _ => SortKey::Empty,
        }
    }
}

impl CollectionRecord for Staff {
    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn status(&self) -> &str {
        &self.status
    }
}

impl ExcelExportable for Staff {
    fn headers() -> Vec<&'static str> {
        vec!["Name", "Email", "Role", "Status", "Added"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            or_na(Some(self.full_name().as_str())),
            self.email.clone(),
            or_na(self.role_name()),
            self.status.clone(),
            format_opt_date(self.created_at.as_deref()),
        ]
    }
}

impl Searchable for Role {
    fn search_text(&self) -> String {
        format!("{} {}", self.name, self.permissions.join(" "))
    }
}

impl Sortable for Role {
    fn sort_key(&self, field: &str) -> SortKey {
        match field {
            "name" => SortKey::text(&self.name),
            "permissions" => SortKey::number(self.permissions.len() as f64),
            _ => SortKey::Empty,
        }
    }
}

impl CollectionRecord for Role {
    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn status(&self) -> &str {
        ""
    }
}

impl ExcelExportable for Role {
    fn headers() -> Vec<&'static str> {
        vec!["Role", "Permissions"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![self.name.clone(), self.permissions.join(", ")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staff_search_includes_role() {
        let staff: Staff = serde_json::from_str(
            r#"{"_id":"s1","firstName":"Tunde","email":"tunde@medbankr.com","role":{"_id":"r1","name":"Support"},"status":"active"}"#,
        )
        .unwrap();
        assert!(staff.matches_filter("support"));
        assert_eq!(staff.to_csv_row()[0], "Tunde");
    }

    #[test]
    fn test_roles_sort_by_permission_count() {
        let admin = Role {
            id: "r1".into(),
            name: "Admin".into(),
            permissions: vec!["users:write".into(), "blog:write".into()],
        };
        let viewer = Role {
            id: "r2".into(),
            name: "Viewer".into(),
            permissions: vec!["users:read".into()],
        };
        assert_eq!(viewer.compare_by_field(&admin, "permissions"), std::cmp::Ordering::Less);
        assert_eq!(admin.to_csv_row()[1], "users:write, blog:write");
    }
}
