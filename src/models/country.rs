use serde::{Deserialize, Serialize};

use super::deserialize_nullable_string;
use crate::flag::normalize_flag;

/// One entry of the remote countries list.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Country {
    pub iso: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub region: String,
    #[serde(default)]
    pub flag: Option<String>,
}

impl Country {
    pub fn new(iso: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            iso: iso.into(),
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

    /// Replace `flag` with its canonical lowercase alpha-2 form.
    pub fn with_normalized_flag(mut self) -> Self {
        self.flag = normalize_flag(self.flag.as_deref(), Some(&self.iso));
        self
    }

    /// Uppercased first character of the name, used for sectioning.
    ///
    /// An empty name yields `"#"`.
    pub fn initial(&self) -> String {
        name_initial(&self.name).unwrap_or_else(|| "#".to_string())
    }
}

/// Unicode-uppercased first character of `name`.
///
/// Sections, segments and the letter filter all go through this, so they
/// agree on what a name starts with.
pub fn name_initial(name: &str) -> Option<String> {
    name.chars().next().map(|c| c.to_uppercase().collect())
}

/// Countries sharing the same initial.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CountrySection {
    pub title: String,
    pub data: Vec<Country>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_country() {
        let country: Country =
            serde_json::from_str(r#"{"iso":"FRA","name":"France","extra":1}"#).unwrap();
        assert_eq!(country.iso, "FRA");
        assert_eq!(country.name, "France");
        assert_eq!(country.region, "");
        assert!(country.flag.is_none());
    }

    #[test]
    fn test_missing_iso_is_rejected() {
        assert!(serde_json::from_str::<Country>(r#"{"name":"Nowhere"}"#).is_err());
    }

    #[test]
    fn test_normalized_flag() {
        let derived = Country::new("DEU", "Germany").with_normalized_flag();
        assert_eq!(derived.flag.as_deref(), Some("de"));

        let explicit = Country::new("DEU", "Germany")
            .with_flag("AT")
            .with_normalized_flag();
        assert_eq!(explicit.flag.as_deref(), Some("at"));
    }

    #[test]
    fn test_name_initial() {
        assert_eq!(name_initial("kenya").as_deref(), Some("K"));
        assert_eq!(name_initial("ßeta").as_deref(), Some("SS"));
        assert_eq!(name_initial(""), None);
    }

    #[test]
    fn test_initial() {
        assert_eq!(Country::new("FR", "france").initial(), "F");
        assert_eq!(Country::new("XX", "1st Island").initial(), "1");
        assert_eq!(Country::new("XX", "").initial(), "#");
        assert_eq!(Country::new("AX", "Åland Islands").initial(), "Å");
    }
}
