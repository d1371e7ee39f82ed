use maudit::content::{ContentSources, glob_markdown, markdown_entry};
use maudit::content_sources;
use pssr::content::PostFrontmatter;

#[markdown_entry]
pub struct PostContent {
    #[serde(flatten)]
    pub frontmatter: PostFrontmatter,
}

#[markdown_entry]
pub struct PageContent {
    pub title: Option<String>,
}

pub fn content_sources() -> ContentSources {
    content_sources![
        "posts" => glob_markdown::<PostContent>("content/posts/*.md"),
        "pages" => glob_markdown::<PageContent>("content/*.md")
    ]
}
