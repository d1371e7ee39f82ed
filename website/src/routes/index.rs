use maud::{Markup, PreEscaped, html};
use maudit::route::prelude::*;
use pssr::components::PostListItem;
use pssr::content::Post;

use crate::content::{PageContent, PostContent};
use crate::layout::layout;

#[route("/")]
pub struct Index;

impl Route for Index {
    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        render_index(ctx)
    }
}

fn render_index(ctx: &mut PageContext) -> Result<Markup, Box<dyn std::error::Error>> {
    let posts = ctx.content::<PostContent>("posts");

    let mut items = Vec::with_capacity(posts.entries().count());
    for entry in posts.entries() {
        let frontmatter = entry.data(ctx).frontmatter.clone();
        items.push(PostListItem::new(Post::from_frontmatter(
            entry.id.clone(),
            frontmatter,
        )?));
    }

    // Newest first
    items.sort_by(|a, b| b.post().published_at.cmp(&a.post().published_at));

    let mut title = None;
    let mut intro = None;
    if let Some(entry) = ctx
        .content::<PageContent>("pages")
        .entries()
        .find(|entry| entry.id == "index")
    {
        title = entry.data(ctx).title.clone();
        intro = Some(entry.render(ctx));
    }

    let main = html! {
        @if let Some(intro) = intro {
            section.intro { (PreEscaped(intro)) }
        }
        ul.post-list {
            @for item in &items {
                (item)
            }
        }
    };

    Ok(layout(ctx, title.as_deref(), main)?)
}
