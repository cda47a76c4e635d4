//! The programmatic-SEO content matrix: axes, copy tables, page builders,
//! the eager catalog, slug resolution and override merging.

pub mod audit;
pub mod axes;
pub mod builder;
pub mod catalog;
pub mod copy;
pub mod faq;
pub mod merge;
pub mod resolve;
pub mod sitemap;
pub mod slug;

pub use catalog::Catalog;
pub use resolve::{Resolution, ResolutionKind};
