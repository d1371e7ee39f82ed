//! Site-wide settings.
use std::path::PathBuf;

use crate::sitemap::SitemapOptions;

/// Static configuration of the blog.
///
/// ## Example
/// ```rust
/// use pssr::config::SiteConfig;
///
/// let config = SiteConfig {
///     output_dir: "public".into(),
///     ..Default::default()
/// };
/// assert_eq!(config.base_url(), "https://www.pssr.dev");
/// ```
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Title of the site, used as the whole `<title>` of the home page and as a suffix elsewhere.
    pub title: String,
    /// Value of the `lang` attribute on `<html>`.
    pub lang: String,
    /// Public origin of the site, used for canonical URLs and in the sitemap.
    pub hostname: String,
    /// Path of the favicon, served from the static directory.
    pub favicon: String,
    /// Directory holding the markdown content, relative to the website crate.
    pub content_dir: PathBuf,
    /// Directory the site is built into.
    pub output_dir: PathBuf,
    pub sitemap: SitemapOptions,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "pssr.dev".to_string(),
            lang: "en".to_string(),
            hostname: "https://www.pssr.dev".to_string(),
            favicon: "/favicon.ico".to_string(),
            content_dir: "content".into(),
            output_dir: "dist".into(),
            sitemap: SitemapOptions::default(),
        }
    }
}

impl SiteConfig {
    /// Hostname without a trailing slash.
    pub fn base_url(&self) -> String {
        self.hostname.trim_end_matches('/').to_string()
    }

    /// `<title>` of a page, e.g. `About - pssr.dev`. `None` gives the bare site title.
    pub fn page_title(&self, page: Option<&str>) -> String {
        match page {
            Some(page) if page != self.title => format!("{} - {}", page, self.title),
            _ => self.title.clone(),
        }
    }
}
