//! Disease knowledge base
//!
//! Static reference table for the conditions the classifier can report.
//! Lookup never fails: unknown or unnormalized ids resolve to the
//! `healthy` record.

use serde::{Deserialize, Serialize};

/// Severity tier of a disease record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }

    /// Uppercase label used in chat answers
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
        }
    }
}

/// Static reference entry for one condition
#[derive(Debug, Clone, Serialize)]
pub struct DiseaseInfo {
    /// Stable snake_case key
    pub id: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub causes: &'static [&'static str],
    pub symptoms: &'static [&'static str],
    pub treatments: &'static [&'static str],
    pub prevention: &'static [&'static str],
    pub severity: Severity,
}

impl DiseaseInfo {
    pub fn is_healthy(&self) -> bool {
        self.id == "healthy"
    }
}

/// Class labels in the order the simulated classifier reports them
pub const CLASS_NAMES: [&str; 4] = ["healthy", "early_blight", "late_blight", "rust"];

static HEALTHY: DiseaseInfo = DiseaseInfo {
    id: "healthy",
    display_name: "Healthy Leaf",
    description: "This leaf appears to be healthy with no visible signs of disease.",
    causes: &[],
    symptoms: &[
        "Normal green coloration",
        "No spots or lesions",
        "Proper leaf structure",
    ],
    treatments: &[
        "Continue current care practices",
        "Maintain proper watering schedule",
    ],
    prevention: &[
        "Regular monitoring",
        "Proper fertilization",
        "Good air circulation",
    ],
    severity: Severity::Low,
};

static EARLY_BLIGHT: DiseaseInfo = DiseaseInfo {
    id: "early_blight",
    display_name: "Early Blight",
    description: "Early blight is a fungal disease caused by Alternaria solani that affects tomatoes, potatoes, and other plants.",
    causes: &[
        "Fungal infection (Alternaria solani)",
        "High humidity and warm temperatures",
        "Poor air circulation between plants",
        "Infected plant debris in soil",
    ],
    symptoms: &[
        "Dark brown spots with concentric rings",
        "Yellow halos around spots",
        "Lower leaves affected first",
        "Premature leaf drop",
    ],
    treatments: &[
        "Remove and destroy infected leaves",
        "Apply copper-based fungicide",
        "Use organic neem oil spray",
        "Improve plant spacing for airflow",
    ],
    prevention: &[
        "Rotate crops annually",
        "Water at soil level, not on leaves",
        "Remove plant debris after harvest",
        "Use disease-resistant varieties",
    ],
    severity: Severity::Medium,
};

static LATE_BLIGHT: DiseaseInfo = DiseaseInfo {
    id: "late_blight",
    display_name: "Late Blight",
    description: "Late blight is a serious disease caused by Phytophthora infestans that can destroy entire crops rapidly.",
    causes: &[
        "Oomycete pathogen (Phytophthora infestans)",
        "Cool, wet weather conditions",
        "Prolonged leaf wetness",
        "Infected seed potatoes or tomato transplants",
    ],
    symptoms: &[
        "Water-soaked gray-green spots",
        "White fuzzy growth on leaf undersides",
        "Rapid browning and wilting",
        "Foul odor from decaying tissue",
    ],
    treatments: &[
        "Remove infected plants immediately",
        "Apply systemic fungicide promptly",
        "Increase ventilation in greenhouses",
        "Harvest remaining healthy produce quickly",
    ],
    prevention: &[
        "Use certified disease-free seeds",
        "Avoid overhead irrigation",
        "Plant resistant varieties",
        "Monitor weather conditions closely",
    ],
    severity: Severity::High,
};

static RUST: DiseaseInfo = DiseaseInfo {
    id: "rust",
    display_name: "Rust Disease",
    description: "Rust is a fungal disease that produces distinctive orange-brown pustules on leaves.",
    causes: &[
        "Fungal infection (various Puccinia species)",
        "Humid conditions with moderate temperatures",
        "Wind-borne spore transmission",
        "Overcrowding of plants",
    ],
    symptoms: &[
        "Orange or rust-colored pustules",
        "Powdery spores on leaf surfaces",
        "Yellowing around infected areas",
        "Stunted growth in severe cases",
    ],
    treatments: &[
        "Apply sulfur-based fungicide",
        "Remove heavily infected leaves",
        "Use organic fungicide alternatives",
        "Improve air circulation",
    ],
    prevention: &[
        "Space plants adequately",
        "Avoid wetting foliage when watering",
        "Remove infected plant material",
        "Choose resistant crop varieties",
    ],
    severity: Severity::Medium,
};

/// All knowledge base entries, one per class label
pub fn all_diseases() -> [&'static DiseaseInfo; 4] {
    [&HEALTHY, &EARLY_BLIGHT, &LATE_BLIGHT, &RUST]
}

/// Normalize a raw disease id: lowercase, whitespace to underscores
fn normalize_id(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// Look up a disease record by id, falling back to `healthy`
pub fn get_disease_info(disease_id: &str) -> &'static DiseaseInfo {
    match normalize_id(disease_id).as_str() {
        "healthy" => &HEALTHY,
        "early_blight" => &EARLY_BLIGHT,
        "late_blight" => &LATE_BLIGHT,
        "rust" => &RUST,
        _ => &HEALTHY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_ids() {
        assert_eq!(get_disease_info("early_blight").display_name, "Early Blight");
        assert_eq!(get_disease_info("late_blight").severity, Severity::High);
        assert_eq!(get_disease_info("rust").id, "rust");
    }

    #[test]
    fn test_lookup_normalizes_case_and_whitespace() {
        assert_eq!(get_disease_info("Early Blight").id, "early_blight");
        assert_eq!(get_disease_info("  LATE  BLIGHT ").id, "late_blight");
    }

    #[test]
    fn test_unknown_id_falls_back_to_healthy() {
        assert!(get_disease_info("powdery_mildew").is_healthy());
        assert!(get_disease_info("").is_healthy());
    }

    #[test]
    fn test_healthy_has_empty_causes() {
        let healthy = get_disease_info("healthy");
        assert!(healthy.causes.is_empty());
        assert!(!healthy.prevention.is_empty());
    }

    #[test]
    fn test_class_names_cover_knowledge_base() {
        for name in CLASS_NAMES {
            assert_eq!(get_disease_info(name).id, name);
        }
    }
}
