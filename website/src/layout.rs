use maud::{DOCTYPE, Markup, html};
use maudit::errors::AssetError;
use maudit::maud::generator;
use maudit::route::PageContext;

use crate::config::CONFIG;

pub fn layout(
    ctx: &mut PageContext,
    title: Option<&str>,
    main: Markup,
) -> Result<Markup, AssetError> {
    ctx.assets.include_style("assets/style.css")?;

    Ok(html! {
        (DOCTYPE)
        html lang=(CONFIG.lang) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                (generator())
                title { (CONFIG.page_title(title)) }
                link rel="icon" type="image/x-icon" href=(CONFIG.favicon);
                @if let Some(canonical_url) = ctx.canonical_url() {
                    link rel="canonical" href=(canonical_url);
                }
            }
            body {
                header.site-header {
                    a href="/" { (CONFIG.title) }
                }
                main { (main) }
            }
        }
    })
}
