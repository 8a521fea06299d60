use serde::{Deserialize, Serialize};

use super::deserialize_nullable_string;
use super::indicators::EnrichedCountry;
use crate::flag::normalize_flag;

/// A country saved to the favourites list, keyed by `code`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct FavouriteEntry {
    pub code: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub region: String,
    #[serde(default)]
    pub flag: Option<String>,
}

impl FavouriteEntry {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            region: String::new(),
            flag: None,
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn with_flag(mut self, flag: impl Into<String>) -> Self {
        self.flag = Some(flag.into());
        self
    }

    /// Build the entry saved when toggling from a profile screen.
    ///
    /// `code` is the code the profile was requested with. The flag comes
    /// from the profile, then the code, then the first two characters of
    /// the code.
    pub fn from_profile(code: &str, profile: &EnrichedCountry) -> Self {
        let flag = normalize_flag(profile.flag.as_deref(), Some(code)).or_else(|| {
            let prefix: String = code.chars().take(2).collect();
            (!prefix.is_empty()).then(|| prefix.to_lowercase())
        });
        Self {
            code: code.to_string(),
            name: profile.name.clone(),
            region: profile.region.clone(),
            flag,
        }
    }

    /// Re-derive `flag` in canonical form, as done when loading from storage.
    pub fn with_normalized_flag(mut self) -> Self {
        self.flag = normalize_flag(self.flag.as_deref(), Some(&self.code));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::indicators::{PieChart, TrendsChart};
    use std::collections::BTreeMap;

    fn profile(flag: Option<&str>) -> EnrichedCountry {
        EnrichedCountry {
            name: "Ghana".to_string(),
            iso: "GHA".to_string(),
            region: "Africa".to_string(),
            flag: flag.map(str::to_string),
            indicators: BTreeMap::new(),
            progress: BTreeMap::new(),
            trends_chart: TrendsChart::default(),
            pie_chart: PieChart::default(),
            domains: Vec::new(),
        }
    }

    #[test]
    fn test_from_profile_derives_flag_from_code() {
        let entry = FavouriteEntry::from_profile("GHA", &profile(None));
        assert_eq!(entry.code, "GHA");
        assert_eq!(entry.name, "Ghana");
        assert_eq!(entry.region, "Africa");
        assert_eq!(entry.flag.as_deref(), Some("gh"));
    }

    #[test]
    fn test_from_profile_prefers_profile_flag() {
        let entry = FavouriteEntry::from_profile("GHA", &profile(Some("GH")));
        assert_eq!(entry.flag.as_deref(), Some("gh"));
    }

    #[test]
    fn test_from_profile_falls_back_to_code_prefix() {
        let entry = FavouriteEntry::from_profile("QQQ", &profile(None));
        assert_eq!(entry.flag.as_deref(), Some("qq"));
    }

    #[test]
    fn test_deserialize_tolerates_nulls() {
        let entry: FavouriteEntry =
            serde_json::from_str(r#"{"code":"FR","name":null,"region":null,"flag":"FR"}"#)
                .unwrap();
        assert_eq!(entry.name, "");
        assert_eq!(entry.with_normalized_flag().flag.as_deref(), Some("fr"));
    }
}
