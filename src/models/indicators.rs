//! Indicator dataset records and the enriched country profile.
//!
//! [`IndicatorRecord`] and [`DomainDefinition`] mirror the two remote
//! documents loosely: every field is optional and chart data stays as raw
//! JSON until [`crate::indicators::merge`] resolves it. Everything downstream
//! of the merge is fully typed.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;

use super::{deserialize_key, deserialize_nullable_string};

/// Literal shown for indicators without a value.
pub const NOT_AVAILABLE: &str = "N/A";

/// Number of age groups in the pie chart.
pub const PIE_GROUPS: usize = 6;

const AGE_GROUP_LABELS: [&str; PIE_GROUPS] = [
    "0 to 4 years",
    "5 to 14 years",
    "15 to 29 years",
    "30 to 49 years",
    "50 to 69 years",
    "70+ years",
];

const AGE_GROUP_COLORS: [&str; PIE_GROUPS] = [
    "#2A9D8F", "#E9C46A", "#E76F51", "#6BAED6", "#F4A261", "#8D6E97",
];

const FALLBACK_SLICE_COLOR: &str = "#ccc";

/// Raw per-country entry of the indicator dataset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IndicatorRecord {
    #[serde(default)]
    pub iso: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub flag: Option<String>,
    #[serde(default)]
    pub indicators: Value,
    #[serde(default)]
    pub progress: Value,
    #[serde(default, rename = "trendsChart")]
    pub trends_chart: Value,
    #[serde(default, rename = "pieChart")]
    pub pie_chart: Value,
}

/// Schema entry describing one domain and its child indicators.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DomainDefinition {
    #[serde(default, deserialize_with = "deserialize_key")]
    pub unique_key: Option<String>,
    /// Legacy key, used when `unique_key` is absent
    #[serde(default, deserialize_with = "deserialize_key")]
    pub key: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub label: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default, rename = "progressBg")]
    pub progress_bg: Option<String>,
    #[serde(default, deserialize_with = "deserialize_children")]
    pub child: Vec<IndicatorDefinition>,
}

impl DomainDefinition {
    /// The join key: `unique_key`, falling back to `key`.
    pub fn join_key(&self) -> Option<&str> {
        self.unique_key.as_deref().or(self.key.as_deref())
    }
}

/// Schema entry for a single indicator inside a domain.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IndicatorDefinition {
    #[serde(default, deserialize_with = "deserialize_key")]
    pub unique_key: Option<String>,
    #[serde(default, deserialize_with = "deserialize_key")]
    pub key: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub label: String,
}

impl IndicatorDefinition {
    pub fn join_key(&self) -> Option<&str> {
        self.unique_key.as_deref().or(self.key.as_deref())
    }
}

fn deserialize_children<'de, D>(deserializer: D) -> Result<Vec<IndicatorDefinition>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<Vec<IndicatorDefinition>>::deserialize(deserializer).map(|c| c.unwrap_or_default())
}

/// A single indicator value.
#[derive(Debug, Clone, PartialEq)]
pub enum IndicatorValue {
    Number(f64),
    Text(String),
    Bool(bool),
}

impl IndicatorValue {
    /// Convert a raw JSON value. `null` means "no value".
    ///
    /// Arrays and objects are kept as their JSON text.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Bool(b) => Some(IndicatorValue::Bool(*b)),
            Value::Number(n) => n.as_f64().map(IndicatorValue::Number),
            Value::String(s) => Some(IndicatorValue::Text(s.clone())),
            other => Some(IndicatorValue::Text(other.to_string())),
        }
    }

    pub fn not_available() -> Self {
        IndicatorValue::Text(NOT_AVAILABLE.to_string())
    }

    pub fn is_available(&self) -> bool {
        !matches!(self, IndicatorValue::Text(s) if s == NOT_AVAILABLE)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            IndicatorValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl std::fmt::Display for IndicatorValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndicatorValue::Number(n) => write!(f, "{}", n),
            IndicatorValue::Text(s) => write!(f, "{}", s),
            IndicatorValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl Serialize for IndicatorValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            IndicatorValue::Number(n) => serializer.serialize_f64(*n),
            IndicatorValue::Text(s) => serializer.serialize_str(s),
            IndicatorValue::Bool(b) => serializer.serialize_bool(*b),
        }
    }
}

/// Status codes used as indicator values in the explore view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorStatus {
    Yes,
    No,
    DontKnow,
    National,
    Subnational,
    /// `NOT`
    NotLimited,
    /// `SUBLIM`
    SubLimited,
    SubnationalExtensive,
}

impl IndicatorStatus {
    /// Exact, case-sensitive code lookup.
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "YES" => Some(IndicatorStatus::Yes),
            "NO" => Some(IndicatorStatus::No),
            "DK" => Some(IndicatorStatus::DontKnow),
            "NAT" => Some(IndicatorStatus::National),
            "SUBNAT" => Some(IndicatorStatus::Subnational),
            "NOT" => Some(IndicatorStatus::NotLimited),
            "SUBLIM" => Some(IndicatorStatus::SubLimited),
            "SUBEXT" => Some(IndicatorStatus::SubnationalExtensive),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IndicatorStatus::Yes => "Yes",
            IndicatorStatus::No => "No",
            IndicatorStatus::DontKnow => "Don't know",
            IndicatorStatus::National => "National coverage",
            IndicatorStatus::Subnational => "Subnational coverage",
            IndicatorStatus::NotLimited => "Sub-national levels with limited coverage",
            IndicatorStatus::SubLimited => "Not implemented/Don't know/did not provide",
            IndicatorStatus::SubnationalExtensive => "Sub-national with extensive coverage",
        }
    }
}

/// Indicator joined with this country's value.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Indicator {
    pub unique_key: String,
    pub label: String,
    pub value: IndicatorValue,
}

impl Indicator {
    pub fn status(&self) -> Option<IndicatorStatus> {
        self.value.as_text().and_then(IndicatorStatus::parse)
    }
}

/// Domain joined with this country's progress and indicator values.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Domain {
    pub unique_key: String,
    /// Display key from the definition, when it has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub label: String,
    pub color: Option<String>,
    #[serde(rename = "progressBg")]
    pub progress_bg: Option<String>,
    /// Percentage in `0..=100`
    pub progress: f64,
    pub indicators: Vec<Indicator>,
}

/// Which trend line a series belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendSeries {
    Male,
    Female,
    Total,
}

impl TrendSeries {
    pub fn label(&self) -> &'static str {
        match self {
            TrendSeries::Male => "Male",
            TrendSeries::Female => "Female",
            TrendSeries::Total => "Total",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct TrendsChart {
    pub years: Vec<String>,
    pub total: Vec<f64>,
    pub male: Vec<f64>,
    pub female: Vec<f64>,
}

impl TrendsChart {
    pub fn has_data(&self) -> bool {
        !self.years.is_empty()
            && (!self.total.is_empty() || !self.male.is_empty() || !self.female.is_empty())
    }

    /// Non-empty series in display order.
    pub fn series(&self) -> Vec<(TrendSeries, &[f64])> {
        [
            (TrendSeries::Male, self.male.as_slice()),
            (TrendSeries::Female, self.female.as_slice()),
            (TrendSeries::Total, self.total.as_slice()),
        ]
        .into_iter()
        .filter(|(_, data)| !data.is_empty())
        .collect()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PieChart {
    pub values: Vec<f64>,
}

impl Default for PieChart {
    fn default() -> Self {
        Self {
            values: vec![0.0; PIE_GROUPS],
        }
    }
}

/// One labelled pie segment.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub color: &'static str,
}

impl PieChart {
    pub fn has_data(&self) -> bool {
        self.values.iter().any(|v| *v > 0.0)
    }

    pub fn slices(&self) -> Vec<PieSlice> {
        self.values
            .iter()
            .enumerate()
            .map(|(idx, value)| PieSlice {
                label: AGE_GROUP_LABELS
                    .get(idx)
                    .map(|l| l.to_string())
                    .unwrap_or_else(|| format!("Group {}", idx + 1)),
                value: *value,
                color: AGE_GROUP_COLORS
                    .get(idx)
                    .copied()
                    .unwrap_or(FALLBACK_SLICE_COLOR),
            })
            .collect()
    }
}

/// Headline figures from the profile header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileHeadline {
    pub population: Option<IndicatorValue>,
    pub income_group: Option<IndicatorValue>,
    pub fatalities: Option<IndicatorValue>,
    pub death_rate: Option<IndicatorValue>,
    pub reported_fatalities: Option<IndicatorValue>,
    pub data_source: Option<IndicatorValue>,
}

/// View model for the country profile and explore screens.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EnrichedCountry {
    pub name: String,
    pub iso: String,
    pub region: String,
    pub flag: Option<String>,
    pub indicators: BTreeMap<String, IndicatorValue>,
    pub progress: BTreeMap<String, f64>,
    #[serde(rename = "trendsChart")]
    pub trends_chart: TrendsChart,
    #[serde(rename = "pieChart")]
    pub pie_chart: PieChart,
    pub domains: Vec<Domain>,
}

impl EnrichedCountry {
    pub fn headline(&self) -> ProfileHeadline {
        let get = |key: &str| self.indicators.get(key).cloned();
        ProfileHeadline {
            population: get("1"),
            income_group: get("2"),
            fatalities: get("3"),
            death_rate: get("4"),
            reported_fatalities: get("5"),
            data_source: get("6"),
        }
    }

    pub fn has_any_chart(&self) -> bool {
        self.pie_chart.has_data() || self.trends_chart.has_data()
    }

    /// Domains shown on the explore view. The burden domain is covered by
    /// the profile headline and is left out.
    pub fn explore_domains(&self) -> impl Iterator<Item = &Domain> {
        self.domains.iter().filter(|d| !d.is_burden())
    }
}

/// Key of the domain holding the headline burden figures.
pub const BURDEN_DOMAIN_KEY: &str = "Burden";

impl Domain {
    pub fn is_burden(&self) -> bool {
        self.key.as_deref().unwrap_or(&self.unique_key) == BURDEN_DOMAIN_KEY
    }
}
