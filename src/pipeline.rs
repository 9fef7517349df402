//! Feature preparation and prediction
//!
//! Encodes the categorical fields, scales the numerical fields, assembles
//! both segments into the column order the model was trained on, and invokes
//! the classifier. Purely computational; the artifacts are read-only handles
//! loaded once at startup and injected here.

use crate::artifacts::Artifacts;
use crate::record::CustomerRecord;
use ndarray::Array1;
use std::fmt;

/// Binary churn verdict. Model class 1 means the customer will leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Churn,
    Remain,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Churn => write!(f, "The customer will leave the company."),
            Verdict::Remain => write!(f, "The customer will remain with the company."),
        }
    }
}

/// Assemble the one-hot segment and the scaled segment into the single
/// feature vector order the model was trained on. The segment order is part
/// of the fitted schema contract.
pub fn concatenate(encoded: &Array1<f64>, scaled: &Array1<f64>) -> Array1<f64> {
    let mut combined = Vec::with_capacity(encoded.len() + scaled.len());
    combined.extend(encoded.iter().copied());
    combined.extend(scaled.iter().copied());
    Array1::from(combined)
}

/// Build the full feature vector for one record
pub fn build_feature_vector(
    artifacts: &Artifacts,
    record: &CustomerRecord,
) -> crate::Result<Array1<f64>> {
    let encoded = artifacts.encoder.encode(record)?;
    let scaled = artifacts.scaler.scale(record);
    Ok(concatenate(&encoded, &scaled))
}

/// Run the full pipeline on one record: encode, scale, concatenate, classify
pub fn predict_churn(artifacts: &Artifacts, record: &CustomerRecord) -> crate::Result<Verdict> {
    let features = build_feature_vector(artifacts, record)?;
    let class = artifacts.model.predict(&features)?;

    Ok(if class == 1 {
        Verdict::Churn
    } else {
        Verdict::Remain
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::tests::{model_json, write_artifacts};
    use crate::record::sample_record;
    use tempfile::TempDir;

    fn loaded_artifacts(model: &str) -> (TempDir, Artifacts) {
        let dir = TempDir::new().unwrap();
        write_artifacts(dir.path(), model);
        let artifacts = Artifacts::load(dir.path()).unwrap();
        (dir, artifacts)
    }

    #[test]
    fn test_concatenate_preserves_segment_order() {
        let encoded = Array1::from(vec![1.0, 0.0, 0.0]);
        let scaled = Array1::from(vec![-0.5, 2.0]);

        let combined = concatenate(&encoded, &scaled);
        assert_eq!(combined.to_vec(), vec![1.0, 0.0, 0.0, -0.5, 2.0]);
    }

    #[test]
    fn test_feature_vector_width_matches_artifacts() {
        let (_dir, artifacts) = loaded_artifacts(&model_json(&[0.0; 60], 0.0));
        let record = sample_record();

        let features = build_feature_vector(&artifacts, &record).unwrap();
        assert_eq!(features.len(), artifacts.feature_dim());
    }

    #[test]
    fn test_scenario_record_yields_exactly_one_verdict() {
        let (_dir, artifacts) = loaded_artifacts(&model_json(&[0.0; 60], 0.0));
        let record = sample_record();

        let verdict = predict_churn(&artifacts, &record).unwrap();
        assert!(verdict == Verdict::Churn || verdict == Verdict::Remain);
    }

    #[test]
    fn test_intercept_drives_the_verdict() {
        // With zero weights the intercept alone decides the class
        let (_dir, churny) = loaded_artifacts(&model_json(&[0.0; 60], 4.0));
        let (_dir2, loyal) = loaded_artifacts(&model_json(&[0.0; 60], -4.0));
        let record = sample_record();

        assert_eq!(predict_churn(&churny, &record).unwrap(), Verdict::Churn);
        assert_eq!(predict_churn(&loyal, &record).unwrap(), Verdict::Remain);
    }

    #[test]
    fn test_pipeline_is_deterministic_and_idempotent() {
        let mut weights = [0.0; 60];
        // Give every dimension some pull so the result depends on the record
        for (i, w) in weights.iter_mut().enumerate() {
            *w = if i % 2 == 0 { 0.3 } else { -0.2 };
        }
        let (_dir, artifacts) = loaded_artifacts(&model_json(&weights, 0.1));
        let record = sample_record();

        let first = predict_churn(&artifacts, &record).unwrap();
        let second = predict_churn(&artifacts, &record).unwrap();
        assert_eq!(first, second);

        let again = build_feature_vector(&artifacts, &record).unwrap();
        assert_eq!(build_feature_vector(&artifacts, &record).unwrap(), again);
    }

    #[test]
    fn test_zero_counts_are_accepted() {
        let (_dir, artifacts) = loaded_artifacts(&model_json(&[0.0; 60], 0.0));

        let mut record = sample_record();
        record.campaign = 0;
        record.previous = 0;

        assert!(predict_churn(&artifacts, &record).is_ok());
    }

    #[test]
    fn test_verdict_display_matches_result_panel() {
        assert_eq!(
            Verdict::Churn.to_string(),
            "The customer will leave the company."
        );
        assert_eq!(
            Verdict::Remain.to_string(),
            "The customer will remain with the company."
        );
    }
}
