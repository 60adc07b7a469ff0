use contracts::domain::a008_blog_posts::{slugify, Post, PostDto};
use leptos::prelude::*;

use crate::domain::a008_blog_posts::api;
use crate::shared::api::ApiClient;
use crate::shared::notify::NotificationService;

/// New slug for a title change, or `None` when the slug was edited by hand
/// and must be kept.
pub fn follow_title(current_slug: &str, old_title: &str, new_title: &str) -> Option<String> {
    let current = current_slug.trim();
    if current.is_empty() || current == slugify(old_title) {
        Some(slugify(new_title))
    } else {
        None
    }
}

fn optional(value: String) -> Option<String> {
    let value = value.trim().to_string();
    (!value.is_empty()).then_some(value)
}

/// Form state of the post editor.
#[derive(Clone, Copy)]
pub struct PostDetailsViewModel {
    pub title: RwSignal<String>,
    pub slug: RwSignal<String>,
    pub excerpt: RwSignal<String>,
    pub category: RwSignal<String>,
    pub body_html: RwSignal<String>,
    pub status: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
}

impl PostDetailsViewModel {
    pub fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            slug: RwSignal::new(String::new()),
            excerpt: RwSignal::new(String::new()),
            category: RwSignal::new(String::new()),
            body_html: RwSignal::new(String::new()),
            status: RwSignal::new("draft".to_string()),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
        }
    }

    /// Keeps the slug in step with the title until it is edited by hand.
    pub fn track_slug(&self) {
        let title = self.title;
        let slug = self.slug;
        Effect::new(move |prev: Option<String>| {
            let new_title = title.get();
            if let Some(old_title) = prev {
                if let Some(next) = follow_title(&slug.get_untracked(), &old_title, &new_title) {
                    slug.set(next);
                }
            }
            new_title
        });
    }

    fn fill(&self, post: Post) {
        self.slug.set(post.slug);
        self.excerpt.set(post.excerpt.unwrap_or_default());
        self.category.set(post.category.unwrap_or_default());
        self.body_html.set(post.body_html);
        self.status.set(post.status.to_lowercase());
        self.title.set(post.title);
    }

    pub fn to_dto(&self) -> Result<PostDto, String> {
        let title = self.title.get_untracked().trim().to_string();
        if title.is_empty() {
            return Err("Title is required".to_string());
        }
        let slug = slugify(&self.slug.get_untracked());
        if slug.is_empty() {
            return Err("Slug must contain letters or digits".to_string());
        }
        let body_html = self.body_html.get_untracked();
        if body_html.trim().is_empty() {
            return Err("Post body is empty".to_string());
        }
        Ok(PostDto {
            title,
            slug,
            excerpt: optional(self.excerpt.get_untracked()),
            body_html,
            category: optional(self.category.get_untracked()),
            status: self.status.get_untracked(),
        })
    }

    pub fn load_if_needed(&self, client: ApiClient, id: Option<String>) {
        let Some(id) = id else {
            return;
        };
        let this = *self;
        this.loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_post(&client, &id).await {
                Ok(post) => this.fill(post),
                Err(e) => {
                    log::error!("Failed to load post {}: {}", id, e);
                    this.error.set(Some(
                        e.user_message().unwrap_or_else(|| "Could not load the post".to_string()),
                    ));
                }
            }
            this.loading.set(false);
        });
    }

    pub fn save_command(
        &self,
        client: ApiClient,
        id: Option<String>,
        notify: NotificationService,
        on_saved: Callback<()>,
    ) {
        let dto = match self.to_dto() {
            Ok(dto) => dto,
            Err(e) => {
                self.error.set(Some(e));
                return;
            }
        };
        self.error.set(None);

        let this = *self;
        this.saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = match id.as_deref() {
                Some(id) => api::update_post(&client, id, &dto).await,
                None => api::create_post(&client, &dto).await,
            };
            this.saving.set(false);
            match result {
                Ok(()) => {
                    notify.success(if id.is_some() { "Post saved" } else { "Post created" });
                    on_saved.run(());
                }
                Err(e) => {
                    notify.report(&e);
                    this.error.set(e.user_message());
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_follows_title_until_edited() {
        assert_eq!(follow_title("", "", "Hello World").as_deref(), Some("hello-world"));
        assert_eq!(
            follow_title("hello-world", "Hello World", "Hello World!").as_deref(),
            Some("hello-world")
        );
        assert_eq!(follow_title("my-custom-slug", "Hello World", "Hello there"), None);
    }

    #[test]
    fn test_optional() {
        assert_eq!(optional(" Health ".into()).as_deref(), Some("Health"));
        assert_eq!(optional("".into()), None);
    }
}
