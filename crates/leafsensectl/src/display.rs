//! Terminal output helpers

use leafsense_common::disease_db::{DiseaseInfo, Severity};
use leafsense_common::i18n::{translate, Language};
use owo_colors::OwoColorize;

pub fn header(title: &str) {
    println!();
    println!("{}", title.bold().green());
    println!("{}", "─".repeat(title.chars().count()).green());
}

pub fn severity_colored(severity: Severity, lang: Language) -> String {
    let key = match severity {
        Severity::Low => "severity.low",
        Severity::Medium => "severity.medium",
        Severity::High => "severity.high",
    };
    let label = translate(lang, key);
    match severity {
        Severity::Low => label.green().to_string(),
        Severity::Medium => label.yellow().to_string(),
        Severity::High => label.red().bold().to_string(),
    }
}

pub fn numbered(items: &[&str]) {
    for (i, item) in items.iter().enumerate() {
        println!("  {}. {}", i + 1, item);
    }
}

pub fn bullets(items: &[String]) {
    for item in items {
        println!("  {} {}", "•".cyan(), item);
    }
}

/// Result card for one diagnosis
pub fn disease_card(info: &DiseaseInfo, confidence: u8, lang: Language) {
    header(translate(lang, "diagnose.result"));
    println!(
        "{}: {} ({}% {})",
        translate(lang, "tabs.diagnose").bold(),
        info.display_name.bold(),
        confidence,
        translate(lang, "diagnose.confidence").to_lowercase()
    );
    println!(
        "{}: {}",
        translate(lang, "diagnose.severity").bold(),
        severity_colored(info.severity, lang)
    );
    println!();
    println!("{}", info.description);

    if info.is_healthy() {
        println!();
        println!("{}", translate(lang, "diagnose.healthyMessage").green());
        return;
    }

    println!();
    println!("{}", translate(lang, "diagnose.treatments").bold());
    numbered(info.treatments);
    println!();
    println!("{}", translate(lang, "diagnose.prevention").bold());
    numbered(info.prevention);
}
