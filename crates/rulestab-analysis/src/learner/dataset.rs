//! In-memory labelled dataset.

use rulestab_core::errors::ConfigError;

/// Feature rows and their class labels. Rows and labels always have the
/// same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    features: Vec<Vec<f64>>,
    labels: Vec<usize>,
}

impl Dataset {
    pub fn new(features: Vec<Vec<f64>>, labels: Vec<usize>) -> Result<Self, ConfigError> {
        if features.len() != labels.len() {
            return Err(ConfigError::DatasetShape {
                features: features.len(),
                labels: labels.len(),
            });
        }
        Ok(Self { features, labels })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn features(&self) -> &[Vec<f64>] {
        &self.features
    }

    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Number of distinct classes, taken as `max(label) + 1`.
    pub fn n_classes(&self) -> usize {
        self.labels.iter().max().map_or(0, |&max| max + 1)
    }

    /// Rows at `indices`, in the order given.
    pub(crate) fn subset(&self, indices: &[usize]) -> Dataset {
        Dataset {
            features: indices.iter().map(|&ix| self.features[ix].clone()).collect(),
            labels: indices.iter().map(|&ix| self.labels[ix]).collect(),
        }
    }
}
