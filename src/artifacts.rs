//! Loading and validation of the fitted artifacts
//!
//! Three JSON files produced by the external training pipeline: a one-hot
//! encoder for the categorical columns, a standard scaler for the numerical
//! columns, and a logistic classification model. They are loaded once at
//! process start and never mutated; any missing, corrupt, or ill-shaped
//! artifact is fatal before the first record is accepted.

use crate::record::{CustomerRecord, CATEGORICAL_COLUMNS, NUMERICAL_COLUMNS};
use anyhow::Context;
use ndarray::Array1;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Artifact file names as the training pipeline writes them
pub const ENCODER_FILE: &str = "one_hot_encoder.json";
pub const SCALER_FILE: &str = "scaler.json";
pub const MODEL_FILE: &str = "final_model.json";

/// One categorical column with the category list it was fitted on
#[derive(Debug, Deserialize)]
pub struct EncoderColumn {
    pub name: String,
    pub categories: Vec<String>,
}

/// Fitted one-hot encoder for the categorical columns
#[derive(Debug, Deserialize)]
pub struct OneHotEncoder {
    pub columns: Vec<EncoderColumn>,
}

impl OneHotEncoder {
    /// Total width of the one-hot segment
    pub fn output_dim(&self) -> usize {
        self.columns.iter().map(|c| c.categories.len()).sum()
    }

    /// One-hot encode the record's categorical fields in fitted column order.
    /// Fails if a value lies outside the domain the encoder was fitted on.
    pub fn encode(&self, record: &CustomerRecord) -> crate::Result<Array1<f64>> {
        let values = record.categorical_values();
        let mut encoded = Vec::with_capacity(self.output_dim());

        for (column, value) in self.columns.iter().zip(values.iter()) {
            let hit = column
                .categories
                .iter()
                .position(|category| category == value)
                .with_context(|| {
                    format!(
                        "value '{}' for column '{}' is outside the fitted domain",
                        value, column.name
                    )
                })?;

            for i in 0..column.categories.len() {
                encoded.push(if i == hit { 1.0 } else { 0.0 });
            }
        }

        Ok(Array1::from(encoded))
    }
}

/// One numerical column with its fitted statistics
#[derive(Debug, Deserialize)]
pub struct ScalerColumn {
    pub name: String,
    pub mean: f64,
    pub std: f64,
}

/// Fitted standard scaler for the numerical columns
#[derive(Debug, Deserialize)]
pub struct StandardScaler {
    pub columns: Vec<ScalerColumn>,
}

impl StandardScaler {
    /// Center and normalize the record's numerical fields in fitted column
    /// order: `(x - mean) / std` per column.
    pub fn scale(&self, record: &CustomerRecord) -> Array1<f64> {
        let values = record.numerical_values();
        let scaled: Vec<f64> = self
            .columns
            .iter()
            .zip(values.iter())
            .map(|(column, value)| (value - column.mean) / column.std)
            .collect();

        Array1::from(scaled)
    }
}

/// Pre-trained logistic classifier
#[derive(Debug, Deserialize)]
pub struct LinearClassifier {
    pub weights: Vec<f64>,
    pub intercept: f64,
    pub threshold: f64,
}

impl LinearClassifier {
    /// Classify a feature vector: class 1 iff sigmoid(w·x + b) >= threshold.
    /// Fails if the vector length does not match the trained weight count.
    pub fn predict(&self, features: &Array1<f64>) -> crate::Result<u32> {
        if features.len() != self.weights.len() {
            anyhow::bail!(
                "feature vector has {} dimensions but the model was trained on {}",
                features.len(),
                self.weights.len()
            );
        }

        let logit: f64 = self
            .weights
            .iter()
            .zip(features.iter())
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept;
        let probability = 1.0 / (1.0 + (-logit).exp());

        Ok(if probability >= self.threshold { 1 } else { 0 })
    }
}

/// The three read-only artifact handles, constructed during process
/// initialization and passed explicitly into the pipeline.
#[derive(Debug)]
pub struct Artifacts {
    pub encoder: OneHotEncoder,
    pub scaler: StandardScaler,
    pub model: LinearClassifier,
}

impl Artifacts {
    /// Load and validate all three artifacts from a directory
    pub fn load(dir: &Path) -> crate::Result<Self> {
        let encoder: OneHotEncoder = load_json(&dir.join(ENCODER_FILE))?;
        let scaler: StandardScaler = load_json(&dir.join(SCALER_FILE))?;
        let model: LinearClassifier = load_json(&dir.join(MODEL_FILE))?;

        let artifacts = Artifacts {
            encoder,
            scaler,
            model,
        };
        artifacts.validate()?;
        Ok(artifacts)
    }

    /// Check the fitted schema against the compiled-in column order, so that
    /// drift between training and this pipeline fails at startup instead of
    /// producing a silently wrong prediction.
    fn validate(&self) -> crate::Result<()> {
        let encoder_names: Vec<&str> = self.encoder.columns.iter().map(|c| c.name.as_str()).collect();
        if encoder_names != CATEGORICAL_COLUMNS {
            anyhow::bail!(
                "encoder columns {:?} do not match the expected schema {:?}",
                encoder_names,
                CATEGORICAL_COLUMNS
            );
        }

        for column in &self.encoder.columns {
            if column.categories.is_empty() {
                anyhow::bail!("encoder column '{}' has no fitted categories", column.name);
            }
        }

        let scaler_names: Vec<&str> = self.scaler.columns.iter().map(|c| c.name.as_str()).collect();
        if scaler_names != NUMERICAL_COLUMNS {
            anyhow::bail!(
                "scaler columns {:?} do not match the expected schema {:?}",
                scaler_names,
                NUMERICAL_COLUMNS
            );
        }

        for column in &self.scaler.columns {
            if !(column.std.is_finite() && column.std > 0.0) {
                anyhow::bail!(
                    "scaler column '{}' has invalid std {}",
                    column.name,
                    column.std
                );
            }
        }

        let expected = self.encoder.output_dim() + self.scaler.columns.len();
        if self.model.weights.len() != expected {
            anyhow::bail!(
                "model has {} weights but the fitted schema produces {} features",
                self.model.weights.len(),
                expected
            );
        }

        if !self.model.threshold.is_finite() {
            anyhow::bail!("model threshold {} is not finite", self.model.threshold);
        }

        Ok(())
    }

    /// Total feature vector width the loaded artifacts produce
    pub fn feature_dim(&self) -> usize {
        self.encoder.output_dim() + self.scaler.columns.len()
    }
}

fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> crate::Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read artifact file: {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("artifact file is corrupt: {}", path.display()))
}
