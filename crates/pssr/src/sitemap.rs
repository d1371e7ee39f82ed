//! Sitemap routes derived from the content directory, and the `sitemap.xml` writer.
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::info;

use crate::config::SiteConfig;
use crate::content::{ContentFile, fetch_content_files};
use crate::errors::{PssrError, SitemapError};
use crate::logging::{FormatElapsedTimeOptions, format_elapsed_time};

/// Content path served at the site root.
const ROOT_CONTENT_PATH: &str = "/index";

/// A public URL path listed in the sitemap, always starting with `/`.
pub type SitemapRoute = String;

/// Maps content documents to the routes they are served at.
///
/// One route per file, in input order: `/index` becomes `/`, every other path is kept as is.
///
/// ## Example
/// ```rust
/// use pssr::content::ContentFile;
/// use pssr::sitemap::derive_routes;
///
/// let files = [ContentFile::new("/posts/a")?, ContentFile::new("/index")?];
/// assert_eq!(derive_routes(&files), vec!["/posts/a", "/"]);
/// # Ok::<(), pssr::errors::ContentError>(())
/// ```
pub fn derive_routes(files: &[ContentFile]) -> Vec<SitemapRoute> {
    files
        .iter()
        .map(|file| {
            if file.path() == ROOT_CONTENT_PATH {
                "/".to_string()
            } else {
                file.path().to_string()
            }
        })
        .collect()
}

/// Options for sitemap generation.
#[derive(Debug, Clone)]
pub struct SitemapOptions {
    /// Whether to generate a sitemap. Default: `true`
    pub enabled: bool,
    /// The filename for the sitemap, or the sitemap index when the routes are split. Default: `"sitemap.xml"`
    pub filename: String,
    /// Maximum number of URLs per sitemap file. Default: `10000`
    pub max_urls_per_sitemap: usize,
    /// Change frequency written on every URL. Default: `None`
    pub default_changefreq: Option<ChangeFreq>,
    /// Priority written on every URL. Default: `None`
    pub default_priority: Option<f32>,
    /// Optional XSL stylesheet. Absolute `http(s)://` URLs are used as-is, other paths are appended to the hostname.
    pub stylesheet: Option<String>,
}

impl Default for SitemapOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            filename: "sitemap.xml".to_string(),
            max_urls_per_sitemap: 10000,
            default_changefreq: None,
            default_priority: None,
            stylesheet: None,
        }
    }
}

/// Change frequency values for sitemap entries.
///
/// See: https://www.sitemaps.org/protocol.html#changefreqdef
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    fn as_str(&self) -> &str {
        match self {
            ChangeFreq::Always => "always",
            ChangeFreq::Hourly => "hourly",
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
            ChangeFreq::Yearly => "yearly",
            ChangeFreq::Never => "never",
        }
    }
}

/// A single `<url>` of the sitemap.
#[derive(Debug)]
pub struct SitemapEntry {
    pub loc: String,
    pub changefreq: Option<ChangeFreq>,
    pub priority: Option<f32>,
}

impl SitemapEntry {
    pub fn from_route(hostname: &str, route: &str, options: &SitemapOptions) -> Self {
        Self {
            loc: format!("{}{}", hostname.trim_end_matches('/'), route),
            changefreq: options.default_changefreq,
            priority: options.default_priority,
        }
    }

    fn to_xml(&self) -> String {
        let mut xml = String::from("<url>");
        xml.push_str(&format!("<loc>{}</loc>", escape_xml(&self.loc)));

        if let Some(changefreq) = self.changefreq {
            xml.push_str(&format!("<changefreq>{}</changefreq>", changefreq.as_str()));
        }

        if let Some(priority) = self.priority {
            xml.push_str(&format!("<priority>{:.1}</priority>", priority));
        }

        xml.push_str("</url>");
        xml
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn resolve_stylesheet_url(hostname: &str, stylesheet_path: &str) -> String {
    if stylesheet_path.starts_with("http://") || stylesheet_path.starts_with("https://") {
        stylesheet_path.to_string()
    } else {
        format!("{}{}", hostname.trim_end_matches('/'), stylesheet_path)
    }
}

fn xml_prolog(hostname: &str, stylesheet: Option<&str>) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");

    if let Some(stylesheet_path) = stylesheet {
        xml.push_str(&format!(
            "<?xml-stylesheet type=\"text/xsl\" href=\"{}\"?>\n",
            escape_xml(&resolve_stylesheet_url(hostname, stylesheet_path))
        ));
    }

    xml
}

fn write_file(path: PathBuf, xml: String) -> Result<PathBuf, SitemapError> {
    match fs::write(&path, xml) {
        Ok(()) => Ok(path),
        Err(source) => Err(SitemapError::Io { path, source }),
    }
}

/// Writes the sitemap for `routes` into `output_dir`.
///
/// Up to `max_urls_per_sitemap` routes go in a single `<urlset>`. Above that, the routes are split into
/// `sitemap-1.xml`, `sitemap-2.xml`, ... and `options.filename` becomes a `<sitemapindex>` pointing at them.
///
/// Returns the path of the top-level file, or `None` if nothing was written.
pub fn generate_sitemap(
    routes: &[SitemapRoute],
    hostname: &str,
    output_dir: &Path,
    options: &SitemapOptions,
) -> Result<Option<PathBuf>, SitemapError> {
    if !options.enabled || routes.is_empty() {
        return Ok(None);
    }

    let start = Instant::now();

    let mut entries = routes
        .iter()
        .map(|route| SitemapEntry::from_route(hostname, route, options))
        .collect::<Vec<_>>();
    entries.sort_by(|a, b| a.loc.cmp(&b.loc));

    let stylesheet = options.stylesheet.as_deref();
    let max_urls = options.max_urls_per_sitemap.max(1);

    if entries.len() <= max_urls {
        let path = write_file(
            output_dir.join(&options.filename),
            urlset_xml(&entries, hostname, stylesheet),
        )?;

        info!(
            target: "sitemap",
            "Generated sitemap with {} URLs at {} in {}",
            entries.len(),
            path.display(),
            format_elapsed_time(start.elapsed(), &FormatElapsedTimeOptions::default())
        );

        return Ok(Some(path));
    }

    let mut sitemap_urls = Vec::new();
    for (i, chunk) in entries.chunks(max_urls).enumerate() {
        let filename = format!("sitemap-{}.xml", i + 1);
        write_file(
            output_dir.join(&filename),
            urlset_xml(chunk, hostname, stylesheet),
        )?;
        sitemap_urls.push(format!("{}/{}", hostname.trim_end_matches('/'), filename));
    }

    let path = write_file(
        output_dir.join(&options.filename),
        sitemap_index_xml(&sitemap_urls, hostname, stylesheet),
    )?;

    info!(
        target: "sitemap",
        "Generated sitemap index with {} sitemaps ({} total URLs) at {} in {}",
        sitemap_urls.len(),
        entries.len(),
        path.display(),
        format_elapsed_time(start.elapsed(), &FormatElapsedTimeOptions::default())
    );

    Ok(Some(path))
}

/// Lists the content directory of `config`, derives the routes, and writes the sitemap into its output directory.
pub fn write_site_sitemap(config: &SiteConfig) -> Result<Option<PathBuf>, PssrError> {
    let files = fetch_content_files(&config.content_dir)?;
    let routes = derive_routes(&files);

    Ok(generate_sitemap(
        &routes,
        &config.hostname,
        &config.output_dir,
        &config.sitemap,
    )?)
}

fn urlset_xml(entries: &[SitemapEntry], hostname: &str, stylesheet: Option<&str>) -> String {
    let mut xml = xml_prolog(hostname, stylesheet);
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">");

    for entry in entries {
        xml.push_str(&entry.to_xml());
    }

    xml.push_str("</urlset>");
    xml
}

fn sitemap_index_xml(sitemap_urls: &[String], hostname: &str, stylesheet: Option<&str>) -> String {
    let mut xml = xml_prolog(hostname, stylesheet);
    xml.push_str("<sitemapindex xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">");

    for url in sitemap_urls {
        xml.push_str(&format!("<sitemap><loc>{}</loc></sitemap>", escape_xml(url)));
    }

    xml.push_str("</sitemapindex>");
    xml
}
