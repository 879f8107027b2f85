pub mod normalize;
pub mod scope;

pub use normalize::{is_slug, slugify};
pub use scope::{CollisionPolicy, SlugScope};
