//! Nutritional-status classification
//!
//! This module classifies a child's mid-upper-arm circumference (MUAC) and
//! edema status into one of five severity tiers, each with a severity rank
//! and advisory text.

pub mod category;
pub mod classifier;

pub use category::NutritionalCategory;
pub use classifier::{ClassificationResult, Classifier, MUAC_RULES, Reclassification, classify};
