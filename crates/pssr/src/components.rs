//! Presentational components, rendered with [maud](https://maud.lambda.xyz).
mod post_list_item;

pub use post_list_item::PostListItem;
