use serde::{Deserialize, Serialize};

/// Blog / CMS article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default, alias = "content")]
    pub body_html: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub published_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub body_html: String,
    pub category: Option<String>,
    pub status: String,
}

impl From<&Post> for PostDto {
    fn from(p: &Post) -> Self {
        Self {
            title: p.title.clone(),
            slug: p.slug.clone(),
            excerpt: p.excerpt.clone(),
            body_html: p.body_html.clone(),
            category: p.category.clone(),
            status: p.status.clone(),
        }
    }
}

/// URL slug from a title: lowercase ASCII words joined by `-`.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Managing Malaria in 2024"), "managing-malaria-in-2024");
        assert_eq!(slugify("  Hello,   World!! "), "hello-world");
        assert_eq!(slugify("Ŭnicode & Co."), "nicode-co");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_post_accepts_content_alias() {
        let post: Post =
            serde_json::from_str(r#"{"_id":"p1","title":"T","content":"<p>x</p>","status":"draft"}"#)
                .unwrap();
        assert_eq!(post.body_html, "<p>x</p>");
        assert_eq!(PostDto::from(&post).status, "draft");
    }
}
