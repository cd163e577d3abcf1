//! LeafSense Common - Advisory engine and shared collaborators
//!
//! Core pieces: the disease knowledge base, the rule-based chat response
//! composer, and the weather-conditioned tip generator. Everything else
//! (storage, weather provider, config, localization) backs the CLI client.

pub mod chat_engine;
pub mod config;
pub mod disease_db;
pub mod i18n;
pub mod intent;
pub mod prediction;
pub mod storage;
pub mod weather;
pub mod weather_tips;

pub use chat_engine::{compose_response, ChatReply};
pub use disease_db::{get_disease_info, DiseaseInfo, Severity, CLASS_NAMES};
pub use weather::{WeatherCondition, WeatherObservation};
pub use weather_tips::generate_tips;
