//! Error types for pssr.
use std::fmt::{self, Debug, Formatter};
use std::path::PathBuf;
use thiserror::Error;

macro_rules! impl_debug_for_error {
    ($($t:ty),*) => {
        $(
            impl Debug for $t {
                fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    // Errors returned from `main` are printed with Debug, show the Display message instead.
                    write!(f, "{}", self)
                }
            }
        )*
    };
}

#[derive(Error)]
pub enum DateError {
    #[error("`{timestamp}` is not a valid ISO-8601 timestamp")]
    InvalidTimestamp {
        timestamp: String,
        #[source]
        source: chrono::ParseError,
    },
}

#[derive(Error)]
pub enum ContentError {
    #[error("Content directory not found: {path}")]
    MissingRoot { path: PathBuf },
    #[error("Invalid content glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
    #[error("Failed to read content entry")]
    Walk {
        #[source]
        source: glob::GlobError,
    },
    #[error("Content path `{path}` must be non-empty and start with `/`")]
    InvalidPath { path: String },
    #[error("Post id `{id}` must be non-empty and contain no `/` or whitespace")]
    InvalidPostId { id: String },
    #[error("Post `{id}` has an empty title")]
    MissingTitle { id: String },
    #[error("Post `{id}` has an invalid `publishedAt`")]
    InvalidPublishedAt {
        id: String,
        #[source]
        source: DateError,
    },
}

#[derive(Error)]
pub enum SitemapError {
    #[error("Failed to write sitemap file: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum PssrError {
    #[error(transparent)]
    Date(#[from] DateError),

    #[error(transparent)]
    Content(#[from] ContentError),

    #[error(transparent)]
    Sitemap(#[from] SitemapError),
}

impl_debug_for_error!(DateError, ContentError, SitemapError);
