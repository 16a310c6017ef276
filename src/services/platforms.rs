//! Canonical platform keys for streaming provider names.
//!
//! TMDB reports provider display names inconsistently ("Amazon Prime Video",
//! "Prime Video", "Apple TV+", "Apple TV Plus"). The UI filters and the
//! translation table key off a small canonical set, so each display name is
//! normalized (lowercase, whitespace stripped, `+` spelled out) and looked up
//! in a fixed dictionary. Anything unmapped lands on `"Other"`.

/// Canonical key for a provider display name.
pub fn platform_key(name: &str) -> &'static str {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return "Other";
    }

    let normalized: String = trimmed
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .replace('+', "plus");

    match normalized.as_str() {
        "netflix" => "Netflix",
        "amazonprimevideo" | "primevideo" => "PrimeVideo",
        "appletvplus" | "appletv" => "AppleTV",
        "disneyplus" => "DisneyPlus",
        "hbomax" | "max" => "Max",
        "paramountplus" => "ParamountPlus",
        "hulu" => "Hulu",
        "mubi" => "Mubi",
        "peacock" | "peacockpremium" => "Peacock",
        "globoplay" => "Globoplay",
        "starplus" => "StarPlus",
        "clarovideo" => "ClaroVideo",
        "looke" => "Looke",
        "telecineplay" | "telecine" => "Telecine",
        _ => "Other",
    }
}
