//! Backend host configuration.
//!
//! The dashboard talks to three independently deployed services. Their base
//! URLs are baked in at build time (`MEDBANKR_*_API` environment variables)
//! and may be overridden per browser through `localStorage`, which is how
//! staging hosts are pointed at without a rebuild.
//!
//! ```text
//! localStorage["medbankr_api_hosts"] = '{"core": "https://staging-api.medbankr.com/v1"}'
//! ```

use serde::{Deserialize, Serialize};

pub const HOSTS_STORAGE_KEY: &str = "medbankr_api_hosts";

const DEFAULT_CORE_API: &str = "https://api.medbankr.com/v1";
const DEFAULT_PROVIDER_API: &str = "https://provider-api.medbankr.com/api";
const DEFAULT_BLOG_API: &str = "https://blog-api.medbankr.com/api";

/// Which backend an endpoint lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Users, staff, bookings, subscriptions, transactions, auth.
    Core,
    /// Provider directory and provider documents.
    Provider,
    /// Blog / CMS.
    Blog,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiHosts {
    pub core: String,
    pub provider: String,
    pub blog: String,
}

/// Partial override read from `localStorage`.
#[derive(Debug, Default, Deserialize)]
struct HostsOverride {
    core: Option<String>,
    provider: Option<String>,
    blog: Option<String>,
}

impl Default for ApiHosts {
    fn default() -> Self {
        Self {
            core: option_env!("MEDBANKR_CORE_API")
                .unwrap_or(DEFAULT_CORE_API)
                .to_string(),
            provider: option_env!("MEDBANKR_PROVIDER_API")
                .unwrap_or(DEFAULT_PROVIDER_API)
                .to_string(),
            blog: option_env!("MEDBANKR_BLOG_API")
                .unwrap_or(DEFAULT_BLOG_API)
                .to_string(),
        }
    }
}

impl ApiHosts {
    /// Build-time defaults merged with the browser override, if any.
    pub fn load() -> Self {
        let hosts = Self::default();
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(HOSTS_STORAGE_KEY).ok().flatten());
        match stored {
            Some(json) => hosts.with_override_json(&json),
            None => hosts,
        }
    }

    /// Applies a JSON override; malformed JSON is logged and ignored.
    pub fn with_override_json(mut self, json: &str) -> Self {
        match serde_json::from_str::<HostsOverride>(json) {
            Ok(over) => {
                let pick = |value: Option<String>, current: &mut String| {
                    if let Some(v) = value.filter(|v| !v.trim().is_empty()) {
                        *current = v.trim().to_string();
                    }
                };
                pick(over.core, &mut self.core);
                pick(over.provider, &mut self.provider);
                pick(over.blog, &mut self.blog);
            }
            Err(e) => log::warn!("Ignoring malformed {}: {}", HOSTS_STORAGE_KEY, e),
        }
        self
    }

    pub fn base(&self, backend: Backend) -> &str {
        match backend {
            Backend::Core => &self.core,
            Backend::Provider => &self.provider,
            Backend::Blog => &self.blog,
        }
    }

    /// Joins base and path with exactly one `/` between them.
    pub fn url(&self, backend: Backend, path: &str) -> String {
        format!(
            "{}/{}",
            self.base(backend).trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hosts() -> ApiHosts {
        ApiHosts {
            core: "https://core.test/v1/".into(),
            provider: "https://provider.test/api".into(),
            blog: "https://blog.test".into(),
        }
    }

    #[test]
    fn test_url_joins_with_single_slash() {
        let h = hosts();
        assert_eq!(h.url(Backend::Core, "/users"), "https://core.test/v1/users");
        assert_eq!(h.url(Backend::Provider, "providers/7"), "https://provider.test/api/providers/7");
        assert_eq!(h.url(Backend::Blog, "/posts?status=draft"), "https://blog.test/posts?status=draft");
    }

    #[test]
    fn test_partial_override() {
        let h = hosts().with_override_json(r#"{"blog":"https://staging-blog.test","core":"  "}"#);
        assert_eq!(h.blog, "https://staging-blog.test");
        assert_eq!(h.core, "https://core.test/v1/");
    }

    #[test]
    fn test_malformed_override_is_ignored() {
        assert_eq!(hosts().with_override_json("not json"), hosts());
    }
}
