use maud::{Markup, Render, html};

use crate::content::Post;
use crate::date::format_datetime;

/// One entry of the post listing: title, read time, publication date and synopsis, linking to the post page.
///
/// The date label and link target are derived from the post when the item is created. Call
/// [`PostListItem::set_post`] whenever the listing hands the item a different record.
///
/// ## Example
/// ```rust
/// use maud::Render;
/// use pssr::components::PostListItem;
/// use pssr::content::{Post, PostFrontmatter};
///
/// let post = Post::from_frontmatter("5", PostFrontmatter {
///     title: "Hello".to_string(),
///     read_time_estimate: "1 minute read.".to_string(),
///     published_at: "2021-03-01T03:00:00.000Z".to_string(),
///     post_content_synopsys: "A first post".to_string(),
/// })?;
///
/// let item = PostListItem::new(post);
/// assert_eq!(item.href(), "/posts/5");
/// assert!(item.render().into_string().contains("Published on Mar 01, 2021"));
/// # Ok::<(), pssr::errors::ContentError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PostListItem {
    post: Post,
    formatted_date: String,
    href: String,
}

impl PostListItem {
    pub fn new(post: Post) -> Self {
        let formatted_date = format_datetime(&post.published_at);
        let href = post.href();

        Self {
            post,
            formatted_date,
            href,
        }
    }

    /// Replaces the displayed post and recomputes the date label and link target.
    pub fn set_post(&mut self, post: Post) {
        *self = Self::new(post);
    }

    pub fn post(&self) -> &Post {
        &self.post
    }

    pub fn formatted_date(&self) -> &str {
        &self.formatted_date
    }

    pub fn href(&self) -> &str {
        &self.href
    }
}

impl Render for PostListItem {
    fn render(&self) -> Markup {
        html! {
            li.post-list-item {
                a href=(self.href) {
                    h2.post-title { (self.post.title) }
                    p.post-meta {
                        span { (self.post.read_time_estimate) }
                        " "
                        time datetime=(self.post.published_at.to_rfc3339()) { "Published on " (self.formatted_date) }
                    }
                    p.post-synopsis { (self.post.post_content_synopsys) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PostFrontmatter;

    fn make_post() -> Post {
        Post::from_frontmatter(
            "1",
            PostFrontmatter {
                title: "Test driving a list component in Vue.js.".to_string(),
                read_time_estimate: "4 minutes read.".to_string(),
                published_at: "2021-03-01T03:00:00.000Z".to_string(),
                post_content_synopsys: "How to test drive a list component".to_string(),
            },
        )
        .unwrap()
    }

    fn with_date(post: &Post, timestamp: &str) -> Post {
        Post {
            published_at: crate::date::parse_timestamp(timestamp).unwrap(),
            ..post.clone()
        }
    }

    fn with_id(post: &Post, id: &str) -> Post {
        Post {
            id: id.to_string(),
            ..post.clone()
        }
    }

    #[test]
    fn test_displays_post_attributes() {
        let post = make_post();
        let html = PostListItem::new(post.clone()).render().into_string();

        assert!(html.contains(&post.title));
        assert!(html.contains(&post.read_time_estimate));
        assert!(html.contains("Published on Mar 01, 2021"));
        assert!(html.contains(&post.post_content_synopsys));
    }

    #[test]
    fn test_displays_formatted_date() {
        let post = make_post();
        let mut item = PostListItem::new(post.clone());

        for (timestamp, expected) in [
            ("2021-03-01T03:00:00.000Z", "Mar 01, 2021"),
            ("2020-06-30T03:00:00.000Z", "Jun 30, 2020"),
            ("2005-02-15T03:00:00.000Z", "Feb 15, 2005"),
        ] {
            item.set_post(with_date(&post, timestamp));
            assert_eq!(item.formatted_date(), expected);
        }
    }

    #[test]
    fn test_link_follows_post_id() {
        let post = make_post();
        let mut item = PostListItem::new(post.clone());

        for id in ["1", "5", "999"] {
            item.set_post(with_id(&post, id));

            assert_eq!(item.href(), format!("/posts/{}", id));
            assert!(
                item.render()
                    .into_string()
                    .contains(&format!("href=\"/posts/{}\"", id))
            );
        }
    }

    #[test]
    fn test_escapes_post_text() {
        let post = Post {
            title: "Vec<T> & friends".to_string(),
            ..make_post()
        };
        let html = PostListItem::new(post).render().into_string();

        assert!(html.contains("Vec&lt;T&gt; &amp; friends"));
    }
}
