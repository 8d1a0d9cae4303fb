//! Regression tree ensembles (random forest / gradient boosting)

use super::error::{ModelLoadError, PredictionError};
use super::{check_shape, RegressionModel};
use serde::{Deserialize, Serialize};

/// Decision tree node
///
/// A row goes left when `x[feature] <= threshold`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum TreeNode {
    /// Leaf node with prediction value
    Leaf { value: f64 },
    /// Internal node with split
    Split {
        feature: usize,
        threshold: f64,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
}

impl TreeNode {
    /// Walk the tree for one row
    pub fn evaluate(&self, features: &[f64]) -> f64 {
        let mut node = self;
        loop {
            match node {
                TreeNode::Leaf { value } => return *value,
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if features[*feature] <= *threshold {
                        left
                    } else {
                        right
                    };
                }
            }
        }
    }

    fn validate(&self, n_features: usize, depth: usize) -> Result<(), ModelLoadError> {
        match self {
            TreeNode::Leaf { value } => {
                if !value.is_finite() {
                    return Err(ModelLoadError::InvalidModel(format!(
                        "non-finite leaf value at depth {}",
                        depth
                    )));
                }
                Ok(())
            }
            TreeNode::Split {
                feature,
                threshold,
                left,
                right,
            } => {
                if *feature >= n_features {
                    return Err(ModelLoadError::InvalidModel(format!(
                        "split on feature {} at depth {}, model has {} features",
                        feature, depth, n_features
                    )));
                }
                if threshold.is_nan() {
                    return Err(ModelLoadError::InvalidModel(format!(
                        "NaN threshold at depth {}",
                        depth
                    )));
                }
                left.validate(n_features, depth + 1)?;
                right.validate(n_features, depth + 1)
            }
        }
    }
}

/// How per-tree outputs are combined
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregation {
    /// Average of all trees (random forest)
    #[default]
    Mean,
    /// Scaled sum of all trees (gradient boosting)
    Sum,
}

fn default_learning_rate() -> f64 {
    1.0
}

/// `base_score + combine(trees)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeEnsemble {
    #[serde(default)]
    pub base_score: f64,

    #[serde(default)]
    pub aggregation: Aggregation,

    /// Applied to the sum of tree outputs when `aggregation` is `sum`
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,

    pub trees: Vec<TreeNode>,

    /// Number of input features; filled in by the loader
    #[serde(skip)]
    n_features: usize,
}

impl TreeEnsemble {
    pub fn new(aggregation: Aggregation, trees: Vec<TreeNode>, n_features: usize) -> Self {
        Self {
            base_score: 0.0,
            aggregation,
            learning_rate: 1.0,
            trees,
            n_features,
        }
    }

    pub fn with_base_score(mut self, base_score: f64) -> Self {
        self.base_score = base_score;
        self
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Check every tree against the expected number of features and bind the ensemble to it
    pub fn validate(&mut self, n_features: usize) -> Result<(), ModelLoadError> {
        if self.trees.is_empty() {
            return Err(ModelLoadError::InvalidModel(
                "tree ensemble has no trees".to_string(),
            ));
        }
        if !self.base_score.is_finite() || !self.learning_rate.is_finite() {
            return Err(ModelLoadError::InvalidModel(
                "tree ensemble has non-finite base score or learning rate".to_string(),
            ));
        }
        for (idx, tree) in self.trees.iter().enumerate() {
            tree.validate(n_features, 0).map_err(|e| match e {
                ModelLoadError::InvalidModel(msg) => {
                    ModelLoadError::InvalidModel(format!("tree {}: {}", idx, msg))
                }
                other => other,
            })?;
        }
        self.n_features = n_features;
        Ok(())
    }
}

impl RegressionModel for TreeEnsemble {
    fn predict(&self, features: &[f64]) -> Result<f64, PredictionError> {
        check_shape(self.n_features, features)?;
        let total: f64 = self.trees.iter().map(|tree| tree.evaluate(features)).sum();
        let combined = match self.aggregation {
            Aggregation::Mean => total / self.trees.len() as f64,
            Aggregation::Sum => total * self.learning_rate,
        };
        Ok(self.base_score + combined)
    }

    fn name(&self) -> &str {
        match self.aggregation {
            Aggregation::Mean => "random_forest",
            Aggregation::Sum => "gradient_boosting",
        }
    }

    fn n_features(&self) -> usize {
        self.n_features
    }
}
