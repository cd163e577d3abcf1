//! Weather-conditioned advisory tips
//!
//! Accumulates tips by evaluating independent threshold rules in a fixed
//! order: humidity tiers, temperature tiers, sky condition, then
//! disease-specific augmentation. Output order is evaluation order; no
//! sorting or deduplication. Temperatures in [15, 20] produce no
//! temperature tip (the tiers do not cover that band).

use crate::disease_db::get_disease_info;
use crate::weather::{WeatherCondition, WeatherObservation};

/// Generate advisory tips for the given observation and optional disease
/// context. Absent weather degrades to a fixed two-tip pair.
pub fn generate_tips(
    weather: Option<&WeatherObservation>,
    disease_id: Option<&str>,
) -> Vec<String> {
    let weather = match weather {
        Some(w) => w,
        None => {
            return vec![
                "Unable to fetch weather data. Check your location settings.".to_string(),
                "General tip: Regularly inspect your crops for early signs of disease."
                    .to_string(),
            ];
        }
    };

    let mut tips: Vec<String> = Vec::new();

    if weather.humidity_pct > 80.0 {
        tips.push(
            "High humidity detected. Fungal diseases spread faster in humid conditions."
                .to_string(),
        );
        tips.push(
            "Ensure good air circulation between plants to reduce moisture buildup.".to_string(),
        );
        tips.push("Avoid watering in the evening to prevent overnight moisture.".to_string());
    } else if weather.humidity_pct > 60.0 {
        tips.push(
            "Moderate humidity. Good time for preventive fungicide application if needed."
                .to_string(),
        );
    } else {
        tips.push(
            "Low humidity conditions. Water stress may make plants more susceptible.".to_string(),
        );
    }

    if weather.temperature_c > 30 {
        tips.push("High temperatures can stress plants. Ensure adequate watering.".to_string());
        tips.push("Consider shade nets during peak sun hours if possible.".to_string());
    } else if weather.temperature_c > 20 && weather.temperature_c <= 30 {
        tips.push(
            "Optimal growing temperature. Perfect time for most agricultural activities."
                .to_string(),
        );
    } else if weather.temperature_c < 15 {
        tips.push(
            "Cool temperatures. Some fungal diseases like late blight thrive in cool, wet conditions."
                .to_string(),
        );
        tips.push("Monitor for signs of cold-weather diseases.".to_string());
    }

    if weather.condition == WeatherCondition::Rain
        || weather.condition == WeatherCondition::Drizzle
    {
        tips.push(
            "Rainy conditions favor disease spread. Inspect crops after rain clears.".to_string(),
        );
        tips.push("Avoid walking through wet fields to prevent spreading pathogens.".to_string());
    }

    if let Some(disease_id) = disease_id {
        let info = get_disease_info(disease_id);
        if !info.is_healthy() {
            tips.extend(disease_specific_tips(info.id, weather));
        }
    }

    tips
}

fn disease_specific_tips(disease_id: &str, weather: &WeatherObservation) -> Vec<String> {
    let mut tips: Vec<String> = Vec::new();

    match disease_id {
        "early_blight" => {
            if weather.humidity_pct > 70.0 {
                tips.push(
                    "Early blight spreads quickly in high humidity. Remove infected leaves promptly."
                        .to_string(),
                );
            }
            if weather.temperature_c > 25 {
                tips.push(
                    "Warm temperatures with moisture favor early blight. Increase fungicide frequency."
                        .to_string(),
                );
            }
        }

        "late_blight" => {
            if weather.temperature_c < 20 && weather.humidity_pct > 70.0 {
                tips.push(
                    "Current conditions are ideal for late blight. Apply preventive fungicides immediately."
                        .to_string(),
                );
            }
            if weather.condition == WeatherCondition::Rain {
                tips.push(
                    "Rain can rapidly spread late blight spores. Inspect all plants after rain stops."
                        .to_string(),
                );
            }
        }

        "rust" => {
            if weather.humidity_pct > 80.0 {
                tips.push(
                    "Rust thrives in high humidity. Improve plant spacing for better air flow."
                        .to_string(),
                );
            }
            tips.push(
                "Remove and destroy infected leaves to prevent rust spore spread.".to_string(),
            );
        }

        _ => {}
    }

    tips
}
