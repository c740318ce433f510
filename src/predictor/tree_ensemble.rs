use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{FeatureFrame, Predictor};
use crate::error::{CropcastError, Result};

/// Forest of axis-aligned decision trees exported as JSON.
///
/// Each tree votes with the normalised class distribution of the leaf a row
/// lands in; the class with the highest mean probability wins, lowest index
/// on ties. Only constructed through [`TreeEnsemble::load`] or
/// [`TreeEnsemble::from_json_str`], both of which validate the structure, so
/// prediction never walks out of bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeEnsemble {
    feature_names: Vec<String>,
    classes: Vec<String>,
    trees: Vec<DecisionTree>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DecisionTree {
    nodes: Vec<TreeNode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum TreeNode {
    /// Rows with `x[feature] <= threshold` go left.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    /// Per-class weights, typically training sample counts.
    Leaf { value: Vec<f64> },
}

impl TreeEnsemble {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let ensemble: TreeEnsemble = serde_json::from_str(json)?;
        ensemble.validate()?;
        Ok(ensemble)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    fn validate(&self) -> Result<()> {
        if self.feature_names.is_empty() {
            return Err(CropcastError::Artifact("no feature names".into()));
        }
        if self.classes.is_empty() {
            return Err(CropcastError::Artifact("no classes".into()));
        }
        if self.trees.is_empty() {
            return Err(CropcastError::Artifact("no trees".into()));
        }

        for (t, tree) in self.trees.iter().enumerate() {
            if tree.nodes.is_empty() {
                return Err(CropcastError::Artifact(format!("tree {} has no nodes", t)));
            }
            for (i, node) in tree.nodes.iter().enumerate() {
                self.validate_node(t, i, node, tree.nodes.len())?;
            }
        }
        Ok(())
    }

    fn validate_node(&self, tree: usize, index: usize, node: &TreeNode, len: usize) -> Result<()> {
        match node {
            TreeNode::Split {
                feature,
                threshold,
                left,
                right,
            } => {
                if *feature >= self.feature_names.len() {
                    return Err(CropcastError::Artifact(format!(
                        "tree {} node {} splits on feature {} but only {} features exist",
                        tree,
                        index,
                        feature,
                        self.feature_names.len()
                    )));
                }
                if !threshold.is_finite() {
                    return Err(CropcastError::Artifact(format!(
                        "tree {} node {} has a non-finite threshold",
                        tree, index
                    )));
                }
                // Children after their parent keeps every walk finite.
                for child in [*left, *right] {
                    if child <= index || child >= len {
                        return Err(CropcastError::Artifact(format!(
                            "tree {} node {} points to invalid child {}",
                            tree, index, child
                        )));
                    }
                }
            }
            TreeNode::Leaf { value } => {
                if value.len() != self.classes.len() {
                    return Err(CropcastError::Artifact(format!(
                        "tree {} leaf {} has {} weights for {} classes",
                        tree,
                        index,
                        value.len(),
                        self.classes.len()
                    )));
                }
                if value.iter().any(|w| !w.is_finite() || *w < 0.0) {
                    return Err(CropcastError::Artifact(format!(
                        "tree {} leaf {} has a negative or non-finite weight",
                        tree, index
                    )));
                }
                if value.iter().sum::<f64>() <= 0.0 {
                    return Err(CropcastError::Artifact(format!(
                        "tree {} leaf {} has no weight",
                        tree, index
                    )));
                }
            }
        }
        Ok(())
    }

    fn predict_row(&self, row: &[f64]) -> &str {
        let mut totals = vec![0.0; self.classes.len()];

        for tree in &self.trees {
            let leaf = tree.leaf_for(row);
            let sum: f64 = leaf.iter().sum();
            for (total, weight) in totals.iter_mut().zip(leaf) {
                *total += weight / sum;
            }
        }

        let mut best = 0;
        for (i, total) in totals.iter().enumerate() {
            if *total > totals[best] {
                best = i;
            }
        }
        &self.classes[best]
    }
}

impl DecisionTree {
    fn leaf_for(&self, row: &[f64]) -> &[f64] {
        let mut index = 0;
        loop {
            match &self.nodes[index] {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    index = if row[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
                TreeNode::Leaf { value } => return value,
            }
        }
    }
}

impl Predictor for TreeEnsemble {
    fn predict(&self, frame: &FeatureFrame) -> Result<Vec<String>> {
        if frame.columns() != self.feature_names.as_slice() {
            return Err(CropcastError::Prediction(format!(
                "The feature names should match those that were passed during fit. \
                 Expected {:?}, got {:?}",
                self.feature_names,
                frame.columns()
            )));
        }

        Ok(frame
            .rows()
            .iter()
            .map(|row| self.predict_row(row).to_string())
            .collect())
    }

    fn feature_names(&self) -> &[String] {
        &self.feature_names
    }
}
