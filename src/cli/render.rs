//! Plain-text rendering of observed state.

use std::fmt::Write;

use crate::models::{CountrySection, EnrichedCountry, FavouriteEntry, IndicatorValue};
use crate::state::{IndicatorsState, VersionState};

pub fn sections(sections: &[CountrySection]) -> String {
    if sections.is_empty() {
        return "No countries match.\n".to_string();
    }
    let mut out = String::new();
    for section in sections {
        let _ = writeln!(out, "{}", section.title);
        for country in &section.data {
            let _ = writeln!(
                out,
                "  {:<4} {}{}",
                country.iso,
                country.name,
                flag_suffix(country.flag.as_deref())
            );
        }
    }
    out
}

fn flag_suffix(flag: Option<&str>) -> String {
    flag.map(|f| format!(" [{}]", f)).unwrap_or_default()
}

fn value_or_na(value: &Option<IndicatorValue>) -> String {
    value
        .as_ref()
        .map(IndicatorValue::to_string)
        .unwrap_or_else(|| "N/A".to_string())
}

/// Error text, or the profile rendered with `body`.
fn with_profile(state: &IndicatorsState, body: impl Fn(&EnrichedCountry) -> String) -> String {
    if let Some(message) = state.error() {
        return format!("{}\n", message);
    }
    match &state.selected_country {
        Some(profile) => body(profile),
        None => "No data available\n".to_string(),
    }
}

pub fn profile(state: &IndicatorsState) -> String {
    with_profile(state, |p| {
        let headline = p.headline();
        let mut out = String::new();
        let _ = writeln!(out, "{} ({}){}", p.name, p.iso, flag_suffix(p.flag.as_deref()));
        let _ = writeln!(out, "Region: {}", p.region);
        let _ = writeln!(out, "Population: {}", value_or_na(&headline.population));
        let _ = writeln!(out, "Income group: {}", value_or_na(&headline.income_group));
        let _ = writeln!(out, "Estimated fatalities: {}", value_or_na(&headline.fatalities));
        let _ = writeln!(out, "Death rate: {}", value_or_na(&headline.death_rate));
        let _ = writeln!(
            out,
            "Reported fatalities: {}",
            value_or_na(&headline.reported_fatalities)
        );
        let _ = writeln!(out, "Data source: {}", value_or_na(&headline.data_source));

        if p.trends_chart.has_data() {
            let years = &p.trends_chart.years;
            let _ = writeln!(
                out,
                "\nTrend {}-{}",
                years.first().map(String::as_str).unwrap_or_default(),
                years.last().map(String::as_str).unwrap_or_default()
            );
            for (series, values) in p.trends_chart.series() {
                let joined: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                let _ = writeln!(out, "  {:<6} {}", series.label(), joined.join(", "));
            }
        }

        if p.pie_chart.has_data() {
            let _ = writeln!(out, "\nDeaths by age group");
            for slice in p.pie_chart.slices() {
                let _ = writeln!(out, "  {:<15} {}", slice.label, slice.value);
            }
        }

        if !p.has_any_chart() {
            let _ = writeln!(out, "\nNo chart data available");
        }
        out
    })
}

pub fn explore(state: &IndicatorsState) -> String {
    with_profile(state, |p| {
        let mut out = String::new();
        let _ = writeln!(out, "{} ({})", p.name, p.iso);
        let mut domains = p.explore_domains().peekable();
        if domains.peek().is_none() {
            let _ = writeln!(out, "No indicator domains available");
        }
        for domain in domains {
            let _ = writeln!(out, "\n{} - {:.0}%", domain.label, domain.progress);
            for indicator in &domain.indicators {
                let value = match indicator.status() {
                    Some(status) => status.label().to_string(),
                    None => indicator.value.to_string(),
                };
                let _ = writeln!(out, "  {}: {}", indicator.label, value);
            }
        }
        out
    })
}

pub fn favourites(entries: &[FavouriteEntry]) -> String {
    if entries.is_empty() {
        return "No favourites yet.\n".to_string();
    }
    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(
            out,
            "{:<4} {} ({}){}",
            entry.code,
            entry.name,
            entry.region,
            flag_suffix(entry.flag.as_deref())
        );
    }
    out
}

pub fn version(state: &VersionState) -> String {
    if let Some(message) = state.error() {
        return format!("Version check failed: {}\n", message);
    }
    match (&state.remote_version, state.needs_update) {
        (Some(remote), true) => format!(
            "Update available: {} (installed {})\n",
            remote, state.current_version
        ),
        (Some(_), false) => format!("Up to date ({})\n", state.current_version),
        (None, _) => "Version not checked\n".to_string(),
    }
}
