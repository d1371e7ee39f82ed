mod index;
mod post;

pub use index::Index;
pub use post::PostPage;
