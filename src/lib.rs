//! ChurnSight: a CLI form for customer churn prediction
//!
//! A thin presentation layer over three pre-fitted artifacts (a categorical
//! one-hot encoder, a numerical standard scaler, and a binary classifier)
//! produced by an external training pipeline. One record in, one verdict out.

pub mod artifacts;
pub mod cli;
pub mod pipeline;
pub mod record;

// Re-export public items for easier access
pub use artifacts::{Artifacts, LinearClassifier, OneHotEncoder, StandardScaler};
pub use cli::Args;
pub use pipeline::{build_feature_vector, concatenate, predict_churn, Verdict};
pub use record::CustomerRecord;

/// Common result type used throughout the application
pub type Result<T> = anyhow::Result<T>;
