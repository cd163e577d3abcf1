//! Simulated prediction source
//!
//! Stand-in for a real inference backend: picks a uniform random class
//! label and a confidence in [85, 99]. Downstream advisory code treats
//! this as an opaque upstream data source.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::disease_db::CLASS_NAMES;

/// Result of one (simulated) leaf classification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub disease_id: String,
    /// Confidence percent, integer in [85, 99]
    pub confidence: u8,
}

/// Produce a simulated classification
pub fn simulate_prediction() -> Prediction {
    let mut rng = rand::thread_rng();
    let disease_id = CLASS_NAMES[rng.gen_range(0..CLASS_NAMES.len())].to_string();
    let confidence = rng.gen_range(85..100);
    Prediction {
        disease_id,
        confidence,
    }
}
