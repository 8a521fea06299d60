pub mod country;
pub mod favourite;
pub mod indicators;
pub mod version;

pub use country::{name_initial, Country, CountrySection};
pub use favourite::FavouriteEntry;
pub use indicators::{
    DomainDefinition, Domain, EnrichedCountry, Indicator, IndicatorDefinition, IndicatorRecord,
    IndicatorStatus, IndicatorValue, PieChart, PieSlice, ProfileHeadline, TrendSeries,
    TrendsChart,
};
pub use version::VersionInfo;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Helper to deserialize an optional key given as either string or integer.
///
/// Empty strings count as missing so that a legacy fallback key applies.
pub(crate) fn deserialize_key<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Helper to deserialize nullable strings as empty string.
pub(crate) fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

/// Read a JSON scalar as a number.
///
/// Numbers pass through; strings are parsed after trimming. Anything else
/// is `None`.
pub(crate) fn json_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}
