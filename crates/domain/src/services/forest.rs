//! Random forest regressor evaluated from an exported JSON artifact.
//!
//! The artifact is produced offline from the trained scikit-learn model:
//!
//! ```json
//! { "feature_names": ["localname", "moisture", "temperature"],
//!   "trees": [ { "nodes": [
//!       { "feature": 1, "threshold": 30.5, "left": 1, "right": 2 },
//!       { "value": 180.0 },
//!       { "value": 20.0 } ] } ] }
//! ```
//!
//! Split nodes send a sample left when `x[feature] <= threshold`. The forest
//! prediction is the mean of the per-tree leaf values.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::models::irrigation::IrrigationInput;
use crate::services::irrigation::{IrrigationPredictor, PredictionError};

/// Number of input features: species id, moisture, temperature.
pub const FEATURE_COUNT: usize = 3;

/// Error type for loading a model artifact.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Failed to read model file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid model artifact: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Deserialize)]
struct ForestArtifact {
    #[serde(default)]
    feature_names: Vec<String>,
    trees: Vec<TreeArtifact>,
}

#[derive(Debug, Clone, Deserialize)]
struct TreeArtifact {
    nodes: Vec<Node>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

/// An ensemble of regression trees.
#[derive(Debug, Clone)]
pub struct ForestRegressor {
    trees: Vec<Vec<Node>>,
}

impl ForestRegressor {
    /// Loads and validates an artifact from disk.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Parses and validates an artifact.
    pub fn from_json(raw: &str) -> Result<Self, ModelError> {
        let artifact: ForestArtifact = serde_json::from_str(raw)?;

        if !artifact.feature_names.is_empty() && artifact.feature_names.len() != FEATURE_COUNT {
            return Err(ModelError::Invalid(format!(
                "expected {} feature names, found {}",
                FEATURE_COUNT,
                artifact.feature_names.len()
            )));
        }
        if artifact.trees.is_empty() {
            return Err(ModelError::Invalid("forest has no trees".into()));
        }

        for (t, tree) in artifact.trees.iter().enumerate() {
            validate_tree(t, &tree.nodes)?;
        }

        Ok(Self {
            trees: artifact.trees.into_iter().map(|t| t.nodes).collect(),
        })
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }
}

// Children must point forward, which rules out cycles and bounds every walk
// by the tree size.
fn validate_tree(index: usize, nodes: &[Node]) -> Result<(), ModelError> {
    if nodes.is_empty() {
        return Err(ModelError::Invalid(format!("tree {index} has no nodes")));
    }

    for (i, node) in nodes.iter().enumerate() {
        match node {
            Node::Leaf { value } if !value.is_finite() => {
                return Err(ModelError::Invalid(format!(
                    "tree {index} node {i}: leaf value is not finite"
                )));
            }
            Node::Leaf { .. } => {}
            Node::Split {
                feature,
                threshold,
                left,
                right,
            } => {
                if *feature >= FEATURE_COUNT {
                    return Err(ModelError::Invalid(format!(
                        "tree {index} node {i}: feature {feature} out of range"
                    )));
                }
                if threshold.is_nan() {
                    return Err(ModelError::Invalid(format!(
                        "tree {index} node {i}: threshold is NaN"
                    )));
                }
                for child in [*left, *right] {
                    if child <= i || child >= nodes.len() {
                        return Err(ModelError::Invalid(format!(
                            "tree {index} node {i}: child {child} out of range"
                        )));
                    }
                }
            }
        }
    }

    Ok(())
}

fn evaluate_tree(nodes: &[Node], x: &[f64; FEATURE_COUNT]) -> Result<f64, PredictionError> {
    let mut idx = 0;
    loop {
        match nodes.get(idx) {
            Some(Node::Leaf { value }) => return Ok(*value),
            Some(Node::Split {
                feature,
                threshold,
                left,
                right,
            }) => {
                idx = if x[*feature] <= *threshold {
                    *left
                } else {
                    *right
                };
            }
            None => {
                return Err(PredictionError::Inference(format!(
                    "node index {idx} out of range"
                )))
            }
        }
    }
}

impl IrrigationPredictor for ForestRegressor {
    fn predict(&self, input: &IrrigationInput) -> Result<f64, PredictionError> {
        let x = input.features();
        let mut sum = 0.0;
        for tree in &self.trees {
            sum += evaluate_tree(tree, &x)?;
        }
        Ok(sum / self.trees.len() as f64)
    }
}
