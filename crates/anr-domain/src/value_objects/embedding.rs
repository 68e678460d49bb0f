//! Semantic Embedding Value Objects
//!
//! Value objects representing semantic embeddings for similarity search.

use serde::{Deserialize, Serialize};

/// Value Object: Semantic Text Embedding
///
/// A fixed-length vector representation of text capturing semantic meaning.
/// One embedding exists per indexed catalog record, plus one transient
/// instance per user query.
///
/// ## Business Rules
///
/// - Vector must contain at least one element
/// - `dimensions` always equals `vector.len()`
/// - Model name identifies the embedding generation method
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embedding {
    /// The embedding vector values
    pub vector: Vec<f32>,
    /// Name of the model that generated this embedding
    pub model: String,
    /// Dimensionality of the embedding vector
    pub dimensions: usize,
}

impl Embedding {
    /// Create an embedding, deriving `dimensions` from the vector
    pub fn new(vector: Vec<f32>, model: impl Into<String>) -> Self {
        let dimensions = vector.len();
        Self {
            vector,
            model: model.into(),
            dimensions,
        }
    }

    /// Whether this embedding carries no usable values
    pub fn is_empty(&self) -> bool {
        self.vector.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_derives_dimensions() {
        let embedding = Embedding::new(vec![0.1, 0.2, 0.3], "test-model");
        assert_eq!(embedding.dimensions, 3);
        assert!(!embedding.is_empty());
    }
}
