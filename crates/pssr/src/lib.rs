//! Building blocks of the [pssr.dev](https://www.pssr.dev) blog.
//!
//! The website crate renders pages with Maudit. This crate holds what the pages and the build need
//! around it: validated content records, the post listing component, and the sitemap.

pub mod components;
pub mod config;
pub mod content;
pub mod date;
pub mod errors;
pub mod sitemap;

mod logging;

pub use config::SiteConfig;
pub use errors::PssrError;
