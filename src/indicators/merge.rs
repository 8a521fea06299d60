//! Join a country's indicator record with the domain definitions.

use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::flag::normalize_flag;
use crate::models::indicators::PIE_GROUPS;
use crate::models::json_number;
use crate::models::{
    Domain, DomainDefinition, EnrichedCountry, Indicator, IndicatorRecord, IndicatorValue,
    PieChart, TrendsChart,
};

const UNKNOWN_NAME: &str = "Unknown";
const UNKNOWN_REGION: &str = "N/A";

/// Find the record for `code` and merge it with `definitions`.
///
/// Fails with [`AppError::NotFound`] when no record carries that exact iso.
pub fn merge_for_code(
    code: &str,
    records: &[IndicatorRecord],
    definitions: &[DomainDefinition],
    base_year: i32,
) -> AppResult<EnrichedCountry> {
    let record = records
        .iter()
        .find(|r| r.iso.as_deref() == Some(code))
        .ok_or_else(|| AppError::not_found(code))?;
    Ok(merge(code, record, definitions, base_year))
}

/// Build the enriched profile for one record.
///
/// Never fails: missing descriptive fields take defaults and malformed chart
/// data degrades to empty series or a zero pie.
pub fn merge(
    code: &str,
    record: &IndicatorRecord,
    definitions: &[DomainDefinition],
    base_year: i32,
) -> EnrichedCountry {
    let indicators = scalar_map(&record.indicators);
    let progress = progress_map(&record.progress);
    let domains = merge_domains(definitions, &indicators, &progress);

    let iso = non_blank(record.iso.as_deref()).unwrap_or(code).to_string();
    let flag = normalize_flag(record.flag.as_deref(), Some(&iso));

    EnrichedCountry {
        name: non_blank(record.name.as_deref())
            .unwrap_or(UNKNOWN_NAME)
            .to_string(),
        region: non_blank(record.region.as_deref())
            .unwrap_or(UNKNOWN_REGION)
            .to_string(),
        iso,
        flag,
        indicators,
        progress,
        trends_chart: trends_chart(&record.trends_chart, base_year),
        pie_chart: pie_chart(&record.pie_chart),
        domains,
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn scalar_map(value: &Value) -> BTreeMap<String, IndicatorValue> {
    let Value::Object(map) = value else {
        return BTreeMap::new();
    };
    map.iter()
        .filter_map(|(k, v)| IndicatorValue::from_json(v).map(|v| (k.clone(), v)))
        .collect()
}

fn progress_map(value: &Value) -> BTreeMap<String, f64> {
    let Value::Object(map) = value else {
        return BTreeMap::new();
    };
    map.iter()
        .map(|(k, v)| (k.clone(), clamp_progress(json_number(v).unwrap_or(0.0))))
        .collect()
}

fn clamp_progress(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

fn merge_domains(
    definitions: &[DomainDefinition],
    indicators: &BTreeMap<String, IndicatorValue>,
    progress: &BTreeMap<String, f64>,
) -> Vec<Domain> {
    definitions
        .iter()
        .filter_map(|def| {
            let key = def.join_key().unwrap_or_default().to_string();

            let mut any_value = false;
            let children: Vec<Indicator> = def
                .child
                .iter()
                .map(|child| {
                    let child_key = child.join_key().unwrap_or_default().to_string();
                    let value = match indicators.get(&child_key) {
                        Some(v) => {
                            any_value = true;
                            v.clone()
                        }
                        None => IndicatorValue::not_available(),
                    };
                    Indicator {
                        unique_key: child_key,
                        label: child.label.clone(),
                        value,
                    }
                })
                .collect();

            if !any_value {
                debug!(domain = %key, children = children.len(), "Dropping domain without values");
                return None;
            }

            Some(Domain {
                progress: progress.get(&key).copied().unwrap_or(0.0),
                unique_key: key,
                key: def.key.clone(),
                label: def.label.clone(),
                color: def.color.clone(),
                progress_bg: def.progress_bg.clone(),
                indicators: children,
            })
        })
        .collect()
}

fn number_series(value: Option<&Value>) -> Vec<f64> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .map(|v| json_number(v).unwrap_or(0.0))
            .collect(),
        _ => Vec::new(),
    }
}

/// Accepts `[total, male, female]` or an object with those field names.
fn trends_chart(value: &Value, base_year: i32) -> TrendsChart {
    let (total, male, female) = match value {
        Value::Array(series) => (
            number_series(series.first()),
            number_series(series.get(1)),
            number_series(series.get(2)),
        ),
        Value::Object(map) => (
            number_series(map.get("total")),
            number_series(map.get("male")),
            number_series(map.get("female")),
        ),
        _ => (Vec::new(), Vec::new(), Vec::new()),
    };

    let years = (0..total.len())
        .map(|i| (base_year + i as i32).to_string())
        .collect();

    TrendsChart {
        years,
        total,
        male,
        female,
    }
}

fn pie_chart(value: &Value) -> PieChart {
    match value.get("values") {
        Some(Value::Array(items)) => PieChart {
            values: items
                .iter()
                .map(|v| json_number(v).unwrap_or(0.0))
                .collect(),
        },
        _ => PieChart {
            values: vec![0.0; PIE_GROUPS],
        },
    }
}
