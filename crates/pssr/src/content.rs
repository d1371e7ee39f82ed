//! Typed content records and the deep listing of content documents.
//!
//! Everything read from the content directory goes through this module before reaching the
//! components or the sitemap, so the rest of the crate only ever sees validated records.
use std::path::{Component, Path};

use chrono::{DateTime, Utc};
use glob::{MatchOptions, Pattern};
use log::debug;
use serde::Deserialize;

use crate::date::parse_timestamp;
use crate::errors::ContentError;

/// File extensions recognised as content documents.
pub const CONTENT_EXTENSIONS: &[&str] = &["md", "json", "yaml", "yml", "csv", "xml"];

/// A content document, projected to its public path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentFile {
    path: String,
}

impl ContentFile {
    pub fn new(path: impl Into<String>) -> Result<Self, ContentError> {
        let path = path.into();

        if !path.starts_with('/') {
            return Err(ContentError::InvalidPath { path });
        }

        Ok(Self { path })
    }

    /// Builds the record for `file`, a document somewhere below the content `root`.
    ///
    /// `content/posts/my-post.md` becomes `/posts/my-post` and `content/index.md` becomes `/index`.
    pub fn from_source_path(root: &Path, file: &Path) -> Result<Self, ContentError> {
        let invalid = || ContentError::InvalidPath {
            path: file.display().to_string(),
        };

        let relative = file.strip_prefix(root).map_err(|_| invalid())?;

        let mut path = String::new();
        for component in relative.with_extension("").components() {
            match component {
                Component::Normal(segment) => {
                    path.push('/');
                    path.push_str(&segment.to_string_lossy());
                }
                Component::CurDir => continue,
                _ => return Err(invalid()),
            }
        }

        if path.is_empty() {
            return Err(invalid());
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Lists every content document below `root`, recursively, keeping only their paths.
pub fn fetch_content_files(root: &Path) -> Result<Vec<ContentFile>, ContentError> {
    if !root.is_dir() {
        return Err(ContentError::MissingRoot {
            path: root.to_path_buf(),
        });
    }

    let pattern = format!(
        "{}/**/*",
        Pattern::escape(&root.to_string_lossy()).trim_end_matches('/')
    );
    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: false,
        require_literal_leading_dot: true,
    };

    let entries = glob::glob_with(&pattern, options).map_err(|source| {
        ContentError::InvalidPattern {
            pattern: pattern.clone(),
            source,
        }
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ContentError::Walk { source })?;

        if !entry.is_file() || !is_content_document(root, &entry) {
            continue;
        }

        files.push(ContentFile::from_source_path(root, &entry)?);
    }

    debug!(target: "content", "Found {} content documents in {}", files.len(), root.display());

    Ok(files)
}

fn is_content_document(root: &Path, file: &Path) -> bool {
    let hidden = file
        .strip_prefix(root)
        .map(|relative| {
            relative
                .components()
                .any(|c| c.as_os_str().to_string_lossy().starts_with('.'))
        })
        .unwrap_or(true);

    let known_extension = file
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| CONTENT_EXTENSIONS.contains(&ext));

    !hidden && known_extension
}

/// Frontmatter of a post, as written in the markdown file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PostFrontmatter {
    pub title: String,
    pub read_time_estimate: String,
    pub published_at: String,
    pub post_content_synopsys: String,
}

/// A blog post with a checked identifier, title and publication date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub read_time_estimate: String,
    pub published_at: DateTime<Utc>,
    pub post_content_synopsys: String,
}

impl Post {
    pub fn from_frontmatter(
        id: impl Into<String>,
        frontmatter: PostFrontmatter,
    ) -> Result<Self, ContentError> {
        let id = id.into();

        if id.is_empty() || id.contains('/') || id.chars().any(char::is_whitespace) {
            return Err(ContentError::InvalidPostId { id });
        }

        if frontmatter.title.trim().is_empty() {
            return Err(ContentError::MissingTitle { id });
        }

        let published_at = match parse_timestamp(&frontmatter.published_at) {
            Ok(date) => date,
            Err(source) => return Err(ContentError::InvalidPublishedAt { id, source }),
        };

        Ok(Self {
            id,
            title: frontmatter.title,
            read_time_estimate: frontmatter.read_time_estimate,
            published_at,
            post_content_synopsys: frontmatter.post_content_synopsys,
        })
    }

    /// Navigation target of the post page.
    pub fn href(&self) -> String {
        format!("/posts/{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn frontmatter() -> PostFrontmatter {
        PostFrontmatter {
            title: "Test driving a list component in Vue.js.".to_string(),
            read_time_estimate: "4 minutes read.".to_string(),
            published_at: "2021-03-01T03:00:00.000Z".to_string(),
            post_content_synopsys: "How to test drive a list component".to_string(),
        }
    }

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "---\ntitle: x\n---\n").unwrap();
    }

    #[test]
    fn test_content_file_requires_leading_slash() {
        assert!(ContentFile::new("/posts/a").is_ok());
        assert!(ContentFile::new("posts/a").is_err());
        assert!(ContentFile::new("").is_err());
    }

    #[test]
    fn test_content_file_from_source_path() {
        let root = Path::new("content");

        let index = ContentFile::from_source_path(root, Path::new("content/index.md")).unwrap();
        assert_eq!(index.path(), "/index");

        let post =
            ContentFile::from_source_path(root, Path::new("content/posts/my-post.md")).unwrap();
        assert_eq!(post.path(), "/posts/my-post");

        assert!(ContentFile::from_source_path(root, Path::new("elsewhere/a.md")).is_err());
    }

    #[test]
    fn test_fetch_content_files_is_deep() {
        let dir = tempdir().unwrap();
        let root = dir.path();

        touch(&root.join("index.md"));
        touch(&root.join("about.md"));
        touch(&root.join("posts/first.md"));
        touch(&root.join("posts/2021/nested.md"));
        touch(&root.join("data/authors.json"));

        let mut paths = fetch_content_files(root)
            .unwrap()
            .into_iter()
            .map(|file| file.path().to_string())
            .collect::<Vec<_>>();
        paths.sort();

        assert_eq!(
            paths,
            vec![
                "/about",
                "/data/authors",
                "/index",
                "/posts/2021/nested",
                "/posts/first"
            ]
        );
    }

    #[test]
    fn test_fetch_content_files_skips_other_files() {
        let dir = tempdir().unwrap();
        let root = dir.path();

        touch(&root.join("index.md"));
        touch(&root.join("cover.png"));
        touch(&root.join(".draft.md"));
        touch(&root.join(".hidden/post.md"));

        let files = fetch_content_files(root).unwrap();
        assert_eq!(files, vec![ContentFile::new("/index").unwrap()]);
    }

    #[test]
    fn test_fetch_content_files_missing_root() {
        let dir = tempdir().unwrap();
        let err = fetch_content_files(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, ContentError::MissingRoot { .. }));
    }

    #[test]
    fn test_post_from_frontmatter() {
        let post = Post::from_frontmatter("5", frontmatter()).unwrap();

        assert_eq!(post.id, "5");
        assert_eq!(post.title, "Test driving a list component in Vue.js.");
        assert_eq!(post.href(), "/posts/5");
        assert_eq!(post.published_at.to_rfc3339(), "2021-03-01T03:00:00+00:00");
    }

    #[test]
    fn test_post_frontmatter_uses_camel_case_keys() {
        use serde::de::value::{Error, MapDeserializer};

        let frontmatter = PostFrontmatter::deserialize(
            MapDeserializer::<_, Error>::new(
                [
                    ("title", "Hello"),
                    ("readTimeEstimate", "1 minute read."),
                    ("publishedAt", "2020-06-30T03:00:00.000Z"),
                    ("postContentSynopsys", "Short"),
                ]
                .into_iter(),
            ),
        )
        .unwrap();

        assert_eq!(frontmatter.read_time_estimate, "1 minute read.");
        assert_eq!(frontmatter.post_content_synopsys, "Short");
    }

    #[test]
    fn test_post_validation() {
        assert!(matches!(
            Post::from_frontmatter("", frontmatter()),
            Err(ContentError::InvalidPostId { .. })
        ));
        assert!(matches!(
            Post::from_frontmatter("a/b", frontmatter()),
            Err(ContentError::InvalidPostId { .. })
        ));
        assert!(matches!(
            Post::from_frontmatter("a b", frontmatter()),
            Err(ContentError::InvalidPostId { .. })
        ));
        assert!(matches!(
            Post::from_frontmatter("a\tb", frontmatter()),
            Err(ContentError::InvalidPostId { .. })
        ));

        let untitled = PostFrontmatter {
            title: "  ".to_string(),
            ..frontmatter()
        };
        assert!(matches!(
            Post::from_frontmatter("1", untitled),
            Err(ContentError::MissingTitle { .. })
        ));

        let undated = PostFrontmatter {
            published_at: "March first".to_string(),
            ..frontmatter()
        };
        assert!(matches!(
            Post::from_frontmatter("1", undated),
            Err(ContentError::InvalidPublishedAt { .. })
        ));
    }
}
