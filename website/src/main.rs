use content::content_sources;
use maudit::{BuildOptions, coronate, routes};
use pssr::sitemap::write_site_sitemap;

mod config;
mod content;
mod layout;
mod routes;

use config::CONFIG;
use routes::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    coronate(
        routes![Index, PostPage],
        content_sources(),
        BuildOptions {
            base_url: Some(CONFIG.base_url()),
            output_dir: CONFIG.output_dir.clone(),
            ..Default::default()
        },
    )?;

    // Written after the build, as the build cleans the output directory.
    write_site_sitemap(&CONFIG)?;

    Ok(())
}
