pub mod content;
pub mod determinism;
pub mod sitemap;
pub mod slug;

pub mod error;
