pub mod model;
pub mod tree;

pub use model::Model;

#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("Failed to read model artifact {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed model artifact: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Model expects {found} features, the form produces {expected}")]
    FeatureCount { expected: usize, found: usize },
    #[error("Model feature {index} is '{found}', expected '{expected}'")]
    FeatureName {
        index: usize,
        expected: String,
        found: String,
    },
    #[error("Model tree has no nodes")]
    EmptyTree,
    #[error("Model array '{array}' has {found} entries, expected {expected}")]
    ArrayLength {
        array: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("Invalid tree node {node}: {reason}")]
    InvalidNode { node: usize, reason: String },
    #[error("Model class {0} has no weather type")]
    UnknownClass(i64),
}
