use ndarray::ArrayView1;
use serde::Deserialize;
use shared::WeatherType;

use super::InferenceError;
use crate::features::{FeatureVector, FEATURE_COUNT};

/// Child index marking a leaf in the exported arrays.
const TREE_LEAF: i64 = -1;

/// On-disk layout: the parallel arrays of a fitted CART tree, node 0 is the root.
#[derive(Debug, Deserialize)]
struct TreeArtifact {
    n_features: usize,
    classes: Vec<i64>,
    #[serde(default)]
    feature_names: Option<Vec<String>>,
    children_left: Vec<i64>,
    children_right: Vec<i64>,
    feature: Vec<i64>,
    threshold: Vec<f64>,
    value: Vec<Vec<f64>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        class_index: usize,
    },
}

#[derive(Debug, Clone)]
pub struct DecisionTree {
    nodes: Vec<Node>,
    classes: Vec<u8>,
    depth: usize,
}

impl DecisionTree {
    pub fn from_json(bytes: &[u8]) -> Result<Self, InferenceError> {
        let artifact: TreeArtifact = serde_json::from_slice(bytes)?;
        Self::from_artifact(artifact)
    }

    fn from_artifact(artifact: TreeArtifact) -> Result<Self, InferenceError> {
        if artifact.n_features != FEATURE_COUNT {
            return Err(InferenceError::FeatureCount {
                expected: FEATURE_COUNT,
                found: artifact.n_features,
            });
        }

        if let Some(names) = &artifact.feature_names {
            if names.len() != FEATURE_COUNT {
                return Err(InferenceError::FeatureCount {
                    expected: FEATURE_COUNT,
                    found: names.len(),
                });
            }
            for (index, (found, expected)) in names.iter().zip(FeatureVector::names()).enumerate() {
                if found != expected {
                    return Err(InferenceError::FeatureName {
                        index,
                        expected: expected.to_string(),
                        found: found.clone(),
                    });
                }
            }
        }

        let classes = artifact
            .classes
            .iter()
            .map(|&class| {
                u8::try_from(class)
                    .ok()
                    .filter(|&id| WeatherType::from_class_id(id).is_some())
                    .ok_or(InferenceError::UnknownClass(class))
            })
            .collect::<Result<Vec<u8>, _>>()?;

        let node_count = artifact.children_left.len();
        if node_count == 0 {
            return Err(InferenceError::EmptyTree);
        }
        if classes.is_empty() {
            return Err(InferenceError::ArrayLength {
                array: "classes",
                expected: WeatherType::Sunny.class_id() as usize + 1,
                found: 0,
            });
        }

        let lengths = [
            ("children_right", artifact.children_right.len()),
            ("feature", artifact.feature.len()),
            ("threshold", artifact.threshold.len()),
            ("value", artifact.value.len()),
        ];
        for (array, found) in lengths {
            if found != node_count {
                return Err(InferenceError::ArrayLength {
                    array,
                    expected: node_count,
                    found,
                });
            }
        }

        let mut nodes = Vec::with_capacity(node_count);
        let mut depths = vec![0usize; node_count];

        for node in 0..node_count {
            let left = artifact.children_left[node];
            let right = artifact.children_right[node];
            let invalid = |reason: String| InferenceError::InvalidNode { node, reason };

            if left == TREE_LEAF && right == TREE_LEAF {
                let weights = &artifact.value[node];
                if weights.len() != classes.len() {
                    return Err(invalid(format!(
                        "{} class weights for {} classes",
                        weights.len(),
                        classes.len()
                    )));
                }
                if weights.iter().any(|w| !w.is_finite()) {
                    return Err(invalid("non-finite class weight".to_string()));
                }
                nodes.push(Node::Leaf {
                    class_index: argmax(weights),
                });
                continue;
            }

            if left == TREE_LEAF || right == TREE_LEAF {
                return Err(invalid("split with a single child".to_string()));
            }

            let child = |index: i64| -> Result<usize, InferenceError> {
                usize::try_from(index)
                    .ok()
                    .filter(|&c| c > node && c < node_count)
                    .ok_or_else(|| invalid(format!("child {} out of order or out of range", index)))
            };
            let left = child(left)?;
            let right = child(right)?;

            let feature = usize::try_from(artifact.feature[node])
                .ok()
                .filter(|&f| f < FEATURE_COUNT)
                .ok_or_else(|| invalid(format!("split feature {}", artifact.feature[node])))?;

            let threshold = artifact.threshold[node];
            if !threshold.is_finite() {
                return Err(invalid("non-finite threshold".to_string()));
            }

            depths[left] = depths[left].max(depths[node] + 1);
            depths[right] = depths[right].max(depths[node] + 1);

            nodes.push(Node::Split {
                feature,
                threshold,
                left,
                right,
            });
        }

        let depth = depths.into_iter().max().unwrap_or(0);

        Ok(Self {
            nodes,
            classes,
            depth,
        })
    }

    /// Walks from the root, going left when `x[feature] <= threshold`.
    pub fn predict(&self, features: ArrayView1<'_, f64>) -> Result<u8, InferenceError> {
        if features.len() != FEATURE_COUNT {
            return Err(InferenceError::FeatureCount {
                expected: FEATURE_COUNT,
                found: features.len(),
            });
        }

        let mut index = 0;
        loop {
            match self.nodes[index] {
                Node::Leaf { class_index } => return Ok(self.classes[class_index]),
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    index = if features[feature] <= threshold {
                        left
                    } else {
                        right
                    };
                }
            }
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n, Node::Leaf { .. }))
            .count()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

// First maximum wins on ties.
fn argmax(weights: &[f64]) -> usize {
    let mut best = 0;
    for (i, &w) in weights.iter().enumerate().skip(1) {
        if w > weights[best] {
            best = i;
        }
    }
    best
}
