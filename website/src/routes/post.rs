use maud::{Markup, PreEscaped, html};
use maudit::route::prelude::*;
use pssr::content::Post;
use pssr::date::format_datetime;

use crate::content::PostContent;
use crate::layout::layout;

#[route("/posts/[id]")]
pub struct PostPage;

#[derive(Params, Clone)]
pub struct PostParams {
    pub id: String,
}

impl Route<PostParams> for PostPage {
    fn pages(&self, ctx: &mut DynamicRouteContext) -> Pages<PostParams> {
        let posts = ctx.content::<PostContent>("posts");

        posts.into_pages(|entry| Page::from_params(PostParams { id: entry.id.clone() }))
    }

    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        render_post(ctx)
    }
}

fn render_post(ctx: &mut PageContext) -> Result<Markup, Box<dyn std::error::Error>> {
    let id = ctx.params::<PostParams>().id;
    let entry = ctx.content::<PostContent>("posts").get_entry(&id);

    let post = Post::from_frontmatter(id.clone(), entry.data(ctx).frontmatter.clone())?;
    let body = entry.render(ctx);

    let main = html! {
        article.post {
            header {
                h1 { (post.title) }
                p.post-meta {
                    span { (post.read_time_estimate) }
                    " "
                    time datetime=(post.published_at.to_rfc3339()) {
                        "Published on " (format_datetime(&post.published_at))
                    }
                }
            }
            section.post-body { (PreEscaped(body)) }
        }
    };

    Ok(layout(ctx, Some(&post.title), main)?)
}
