//! Command implementations for leafsensectl

use anyhow::Result;
use owo_colors::OwoColorize;
use tracing::warn;

use leafsense_common::chat_engine::compose_response;
use leafsense_common::config::LeafsenseConfig;
use leafsense_common::disease_db::{all_diseases, get_disease_info};
use leafsense_common::i18n::{translate, Language};
use leafsense_common::prediction::simulate_prediction;
use leafsense_common::storage::{Sender, Store};
use leafsense_common::weather::{WeatherClient, WeatherObservation};
use leafsense_common::weather_tips::generate_tips;

use crate::display;

fn open_store(config: &LeafsenseConfig) -> Result<Store> {
    Store::open(&config.database_path())
}

/// Stored language preference, defaulting to English if unreadable
fn language(store: &Store) -> Language {
    store.language().unwrap_or_else(|err| {
        warn!("Failed to read language setting: {err:#}");
        Language::En
    })
}

pub fn diagnose(image: Option<String>) -> Result<()> {
    let config = LeafsenseConfig::load()?;
    let store = open_store(&config)?;
    let lang = language(&store);

    println!("{}", translate(lang, "diagnose.analyzing").dimmed());

    let prediction = simulate_prediction();
    let scan = store.save_scan(
        &prediction.disease_id,
        prediction.confidence,
        image.as_deref(),
    )?;

    let info = get_disease_info(&scan.disease_id);
    display::disease_card(info, scan.confidence, lang);

    println!();
    println!(
        "{}",
        "Ask a follow-up with: leafsensectl chat <question>".dimmed()
    );
    Ok(())
}

pub fn chat(question: Vec<String>, clear: bool) -> Result<()> {
    let config = LeafsenseConfig::load()?;
    let store = open_store(&config)?;
    let lang = language(&store);

    if clear {
        store.clear_chat()?;
        println!("{}", translate(lang, "chat.clearHistory"));
        return Ok(());
    }

    let question = question.join(" ");
    if question.trim().is_empty() {
        let history = store.chat_history()?;
        if history.is_empty() {
            display::header(translate(lang, "chat.emptyChat"));
            println!("{}", translate(lang, "chat.welcome"));
            return Ok(());
        }
        display::header(translate(lang, "chat.title"));
        for message in history {
            let who = match message.sender {
                Sender::User => "you".cyan().to_string(),
                Sender::Ai => "leafsense".green().to_string(),
            };
            println!("{}: {}", who.bold(), message.text);
            println!();
        }
        return Ok(());
    }

    // the last scan sets the disease context; no scan means healthy
    let disease_id = store
        .last_scan()?
        .map(|scan| scan.disease_id)
        .unwrap_or_else(|| "healthy".to_string());

    let reply = compose_response(&disease_id, &question);
    store.append_message(Sender::User, &question)?;
    store.append_message(Sender::Ai, &reply.answer)?;

    println!("{}", reply.answer);
    Ok(())
}

pub async fn weather(
    latitude: Option<f64>,
    longitude: Option<f64>,
    disease: Option<String>,
) -> Result<()> {
    let config = LeafsenseConfig::load()?;
    let store = open_store(&config)?;
    let lang = language(&store);

    let latitude = latitude.unwrap_or(config.location.latitude);
    let longitude = longitude.unwrap_or(config.location.longitude);

    let observation = current_observation(&store, latitude, longitude).await;

    display::header(translate(lang, "weather.tips"));
    match &observation {
        Some(obs) => {
            println!(
                "{}: {} °C   {}: {:.0} %   {}",
                translate(lang, "weather.temperature").bold(),
                obs.temperature_c,
                translate(lang, "weather.humidity").bold(),
                obs.humidity_pct,
                obs.condition.as_str()
            );
            println!("({})", obs.location.dimmed());
        }
        None => println!("{}", translate(lang, "weather.noData").yellow()),
    }
    println!();

    // disease context: explicit flag, else the last scan
    let disease_id = match disease {
        Some(id) => Some(id),
        None => store.last_scan()?.map(|scan| scan.disease_id),
    };

    let tips = generate_tips(observation.as_ref(), disease_id.as_deref());
    display::bullets(&tips);
    Ok(())
}

/// Cached observation if fresh, otherwise a live fetch. Fetch failures
/// degrade to no data; the tip generator handles that case itself.
async fn current_observation(
    store: &Store,
    latitude: f64,
    longitude: f64,
) -> Option<WeatherObservation> {
    match store.cached_weather() {
        Ok(Some(cached)) => return Some(cached),
        Ok(None) => {}
        Err(err) => warn!("Failed to read weather cache: {err:#}"),
    }

    match WeatherClient::new().fetch_current(latitude, longitude).await {
        Ok(observation) => {
            if let Err(err) = store.cache_weather(&observation) {
                warn!("Failed to cache weather: {err:#}");
            }
            Some(observation)
        }
        Err(err) => {
            warn!("Weather fetch failed: {err:#}");
            None
        }
    }
}

pub fn history(delete: Option<String>, clear: bool) -> Result<()> {
    let config = LeafsenseConfig::load()?;
    let store = open_store(&config)?;
    let lang = language(&store);

    if clear {
        store.clear_scans()?;
        println!("{}", translate(lang, "history.clearAll"));
        return Ok(());
    }

    if let Some(scan_id) = delete {
        if store.delete_scan(&scan_id)? {
            println!("{}", translate(lang, "common.done"));
        } else {
            println!("{}: {}", translate(lang, "common.error"), scan_id);
        }
        return Ok(());
    }

    let scans = store.scan_history()?;
    display::header(translate(lang, "history.title"));
    if scans.is_empty() {
        println!("{}", translate(lang, "history.empty").dimmed());
        return Ok(());
    }
    for scan in scans {
        let info = get_disease_info(&scan.disease_id);
        println!(
            "{}  {} ({}%)  {}",
            scan.created_at.format("%Y-%m-%d %H:%M"),
            info.display_name.bold(),
            scan.confidence,
            scan.id.dimmed()
        );
    }
    Ok(())
}

pub fn diseases() -> Result<()> {
    let config = LeafsenseConfig::load()?;
    let store = open_store(&config)?;
    let lang = language(&store);

    display::header(translate(lang, "tabs.diagnose"));
    for info in all_diseases() {
        println!(
            "{} [{}]",
            info.display_name.bold(),
            display::severity_colored(info.severity, lang)
        );
        println!("  {}", info.description);
        println!();
    }
    Ok(())
}

pub fn profile(name: Option<String>, language_code: Option<String>) -> Result<()> {
    let config = LeafsenseConfig::load()?;
    let store = open_store(&config)?;

    if let Some(name) = name {
        store.set_farmer_name(&name)?;
    }
    if let Some(code) = language_code {
        let lang: Language = code.parse()?;
        store.set_language(lang)?;
    }

    let lang = language(&store);
    display::header(translate(lang, "profile.title"));
    println!(
        "{}: {}",
        translate(lang, "profile.farmerName").bold(),
        store.farmer_name()?
    );
    println!(
        "{}: {} ({})",
        translate(lang, "profile.language").bold(),
        lang.display_name(),
        lang.native_name()
    );
    println!(
        "{}: {}",
        translate(lang, "profile.totalScans").bold(),
        store.scan_history()?.len()
    );
    println!("{}: {}", translate(lang, "profile.version").bold(), env!("CARGO_PKG_VERSION"));
    Ok(())
}
