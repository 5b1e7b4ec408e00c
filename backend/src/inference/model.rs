use sha2::{Digest, Sha256};
use shared::WeatherType;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use super::tree::DecisionTree;
use super::InferenceError;
use crate::features::FeatureVector;

/// Process-wide classifier handle. Read-only after load, cheap to clone.
#[derive(Clone)]
pub struct Model {
    tree: Arc<DecisionTree>,
    fingerprint: String,
}

impl Model {
    pub fn load(model_path: impl AsRef<Path>) -> Result<Self, InferenceError> {
        let model_path = model_path.as_ref();
        let bytes = fs::read(model_path).map_err(|source| InferenceError::Io {
            path: model_path.display().to_string(),
            source,
        })?;
        Self::from_bytes(&bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, InferenceError> {
        let tree = DecisionTree::from_json(bytes)?;
        let fingerprint = hex::encode(Sha256::digest(bytes));
        Ok(Self {
            tree: Arc::new(tree),
            fingerprint,
        })
    }

    pub fn inference(&self, features: &FeatureVector) -> Result<WeatherType, InferenceError> {
        let class_id = self.tree.predict(features.to_array())?;
        WeatherType::from_class_id(class_id).ok_or(InferenceError::UnknownClass(class_id.into()))
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn tree(&self) -> &DecisionTree {
        &self.tree
    }
}
