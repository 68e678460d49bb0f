//! Domain value objects

pub mod anime;
pub mod embedding;
pub mod recommendation;

pub use anime::Anime;
pub use embedding::Embedding;
pub use recommendation::{AnimeMatch, Recommendation};
