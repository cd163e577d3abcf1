//! Localization provider for UI labels
//!
//! Three locales (en, hi, es) over a flat dotted-path key space. Missing
//! keys fall back to the key string itself rather than failing. Language
//! is an explicit value owned by the caller (persisted in settings), not
//! a process-wide global, so the advisory engine stays pure.
//!
//! The advisory engine's own copy (causes, treatments, canned sentences)
//! is authored in English only and is intentionally not routed through
//! this table.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Supported UI locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Hi,
    Es,
}

impl Default for Language {
    fn default() -> Self {
        Language::En
    }
}

#[derive(Debug, Error)]
#[error("unknown language code: {0} (expected en, hi, or es)")]
pub struct UnknownLanguage(String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "hi" => Ok(Language::Hi),
            "es" => Ok(Language::Es),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Es => "es",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "Hindi",
            Language::Es => "Spanish",
        }
    }

    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "हिन्दी",
            Language::Es => "Español",
        }
    }

    /// All supported locales, in presentation order
    pub fn all() -> [Language; 3] {
        [Language::En, Language::Hi, Language::Es]
    }

    fn index(&self) -> usize {
        match self {
            Language::En => 0,
            Language::Hi => 1,
            Language::Es => 2,
        }
    }
}

/// Resolve a dotted-path UI label for the given locale. Unknown keys echo
/// the key itself.
pub fn translate<'a>(lang: Language, key: &'a str) -> &'a str {
    match entry(key) {
        Some(values) => values[lang.index()],
        None => key,
    }
}

/// [en, hi, es] triple per key
fn entry(key: &str) -> Option<[&'static str; 3]> {
    let values = match key {
        "common.appName" => ["LeafSense AI", "लीफसेंस AI", "LeafSense AI"],
        "common.loading" => ["Loading...", "लोड हो रहा है...", "Cargando..."],
        "common.error" => ["Error", "त्रुटि", "Error"],
        "common.success" => ["Success", "सफलता", "Éxito"],
        "common.cancel" => ["Cancel", "रद्द करें", "Cancelar"],
        "common.confirm" => ["Confirm", "पुष्टि करें", "Confirmar"],
        "common.delete" => ["Delete", "हटाएं", "Eliminar"],
        "common.clear" => ["Clear", "साफ करें", "Limpiar"],
        "common.save" => ["Save", "सेव करें", "Guardar"],
        "common.back" => ["Back", "वापस", "Atrás"],
        "common.done" => ["Done", "हो गया", "Hecho"],
        "common.retry" => ["Retry", "पुनः प्रयास करें", "Reintentar"],

        "tabs.home" => ["Home", "होम", "Inicio"],
        "tabs.diagnose" => ["Diagnose", "जांच", "Diagnóstico"],
        "tabs.chat" => ["Chat", "चैट", "Chat"],
        "tabs.profile" => ["Profile", "प्रोफाइल", "Perfil"],

        "diagnose.title" => ["Diagnose", "जांच", "Diagnóstico"],
        "diagnose.analyzing" => [
            "Analyzing your leaf...",
            "आपकी पत्ती का विश्लेषण हो रहा है...",
            "Analizando tu hoja...",
        ],
        "diagnose.result" => ["Diagnosis Result", "जांच परिणाम", "Resultado del Diagnóstico"],
        "diagnose.confidence" => ["Confidence", "विश्वास स्तर", "Confianza"],
        "diagnose.severity" => ["Severity", "गंभीरता", "Gravedad"],
        "diagnose.treatments" => [
            "Recommended Treatments",
            "सुझाए गए उपचार",
            "Tratamientos Recomendados",
        ],
        "diagnose.prevention" => [
            "Prevention Tips",
            "रोकथाम के तरीके",
            "Consejos de Prevención",
        ],
        "diagnose.healthyLeaf" => ["Healthy Leaf", "स्वस्थ पत्ती", "Hoja Saludable"],
        "diagnose.healthyMessage" => [
            "Your plant looks healthy! Keep up the good work with your crop care.",
            "आपकी फसल स्वस्थ है! अच्छी देखभाल जारी रखें।",
            "¡Tu planta se ve saludable! Sigue con el buen cuidado de tus cultivos.",
        ],

        "chat.title" => ["LeafSense AI", "लीफसेंस AI", "LeafSense AI"],
        "chat.placeholder" => [
            "Ask about crop diseases...",
            "फसल रोगों के बारे में पूछें...",
            "Pregunta sobre enfermedades de cultivos...",
        ],
        "chat.welcome" => [
            "Hello! I'm LeafSense AI, your crop disease assistant. Ask me anything about leaf diseases, treatments, or prevention tips.",
            "नमस्ते! मैं लीफसेंस AI हूं, आपका फसल रोग सहायक। पत्ती के रोगों, उपचार या रोकथाम के बारे में कुछ भी पूछें।",
            "¡Hola! Soy LeafSense AI, tu asistente de enfermedades de cultivos. Pregúntame sobre enfermedades de hojas, tratamientos o consejos de prevención.",
        ],
        "chat.clearHistory" => [
            "Clear chat history",
            "चैट इतिहास साफ करें",
            "Borrar historial de chat",
        ],
        "chat.emptyChat" => [
            "Start a Conversation",
            "बातचीत शुरू करें",
            "Iniciar Conversación",
        ],

        "profile.title" => ["Profile", "प्रोफाइल", "Perfil"],
        "profile.farmerName" => ["Farmer Name", "किसान का नाम", "Nombre del Agricultor"],
        "profile.language" => ["Language", "भाषा", "Idioma"],
        "profile.totalScans" => ["Total Scans", "कुल स्कैन", "Total de Escaneos"],
        "profile.version" => ["Version", "संस्करण", "Versión"],

        "history.title" => ["Scan History", "स्कैन इतिहास", "Historial de Escaneos"],
        "history.empty" => [
            "No Scan History",
            "कोई स्कैन इतिहास नहीं",
            "Sin Historial de Escaneos",
        ],
        "history.clearAll" => ["Clear All", "सभी हटाएं", "Borrar Todo"],

        "diseases.healthy.name" => ["Healthy", "स्वस्थ", "Saludable"],
        "diseases.healthy.description" => [
            "Your plant leaves are in good condition with no visible signs of disease.",
            "आपकी पत्तियां अच्छी स्थिति में हैं, कोई रोग नहीं दिखता।",
            "Las hojas de tu planta están en buena condición sin signos visibles de enfermedad.",
        ],
        "diseases.earlyBlight.name" => ["Early Blight", "अर्ली ब्लाइट", "Tizón Temprano"],
        "diseases.earlyBlight.description" => [
            "A fungal disease causing dark spots with concentric rings on leaves.",
            "एक फफूंद रोग जो पत्तियों पर गोलाकार छल्लों के साथ काले धब्बे बनाता है।",
            "Una enfermedad fúngica que causa manchas oscuras con anillos concéntricos en las hojas.",
        ],
        "diseases.lateBlight.name" => ["Late Blight", "लेट ब्लाइट", "Tizón Tardío"],
        "diseases.lateBlight.description" => [
            "A serious fungal infection that can destroy entire crops rapidly.",
            "एक गंभीर फफूंद संक्रमण जो पूरी फसल को जल्दी नष्ट कर सकता है।",
            "Una infección fúngica grave que puede destruir cultivos enteros rápidamente.",
        ],
        "diseases.rust.name" => ["Rust", "रस्ट (जंग रोग)", "Roya"],
        "diseases.rust.description" => [
            "A fungal infection characterized by orange or brown pustules on leaves.",
            "एक फफूंद संक्रमण जिसमें पत्तियों पर नारंगी या भूरे दाने दिखते हैं।",
            "Una infección fúngica caracterizada por pústulas naranjas o marrones en las hojas.",
        ],

        "severity.low" => ["Low", "कम", "Baja"],
        "severity.medium" => ["Medium", "मध्यम", "Media"],
        "severity.high" => ["High", "गंभीर", "Alta"],

        "weather.temperature" => ["Temperature", "तापमान", "Temperatura"],
        "weather.humidity" => ["Humidity", "नमी", "Humedad"],
        "weather.tips" => [
            "Weather-based Tips",
            "मौसम आधारित सुझाव",
            "Consejos según el clima",
        ],
        "weather.noData" => [
            "Weather data unavailable",
            "मौसम डेटा उपलब्ध नहीं",
            "Datos meteorológicos no disponibles",
        ],

        _ => return None,
    };
    Some(values)
}
