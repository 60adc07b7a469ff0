use contracts::domain::a008_blog_posts::Post;
use contracts::shared::status::status_eq;

use crate::shared::collection::CollectionRecord;
use crate::shared::date_utils::format_opt_date;
use crate::shared::export::ExcelExportable;
use crate::shared::list_utils::{Searchable, SortKey, Sortable};
use crate::shared::or_na;

pub const POST_STATUSES: &[&str] = &["published", "draft"];

pub fn is_published(post: &Post) -> bool {
    status_eq(&post.status, "published")
}

impl Searchable for Post {
    fn search_text(&self) -> String {
        [
            self.title.as_str(),
            self.slug.as_str(),
            self.excerpt.as_deref().unwrap_or_default(),
            self.author.as_deref().unwrap_or_default(),
            self.category.as_deref().unwrap_or_default(),
        ]
        .join(" ")
    }
}

impl Sortable for Post {
    fn sort_key(&self, field: &str) -> SortKey {
        match field {
            "title" => SortKey::text(&self.title),
            "category" => SortKey::opt_text(self.category.as_deref()),
            "author" => SortKey::opt_text(self.author.as_deref()),
            "status" => SortKey::text(&self.status),
            "published_at" => SortKey::opt_text(self.published_at.as_deref()),
            _ => SortKey::Empty,
        }
    }
}

impl CollectionRecord for Post {
    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn status(&self) -> &str {
        &self.status
    }
}

impl ExcelExportable for Post {
    fn headers() -> Vec<&'static str> {
        vec!["Title", "Slug", "Category", "Author", "Status", "Published"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.slug.clone(),
            or_na(self.category.as_deref()),
            or_na(self.author.as_deref()),
            self.status.clone(),
            format_opt_date(self.published_at.as_deref()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_published_flag_and_search() {
        let post: Post = serde_json::from_str(
            r#"{"_id":"p1","title":"Managing malaria season","slug":"managing-malaria-season","content":"<p>..</p>","status":"Published","category":"Health tips"}"#,
        )
        .unwrap();
        assert!(is_published(&post));
        assert!(post.matches_filter("health TIPS"));
        assert_eq!(post.to_csv_row()[3], "N/A");
    }
}
