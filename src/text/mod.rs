//! Text repair and normalization.

pub mod normalizer;

pub use normalizer::TextNormalizer;
