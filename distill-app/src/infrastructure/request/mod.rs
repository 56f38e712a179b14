mod normalizer;

pub use normalizer::{RequestNormalizer, CONTENT_KEYS};
